use std::f64::consts::PI;

use crate::geometry::sphere::{fibonacci_band, great_circle_wireframe, sphere_fill};
use crate::math::{MIN_EXTENT, TOLERANCE};
use crate::sampling::PointSet;

use super::{density_from_area, density_from_length, density_from_volume, SampleStyle, Shape, ShapeCore};

/// A sphere centered on the local origin.
///
/// OUTLINE is a three-great-circle wireframe, SURFACE a Fibonacci
/// lattice shell, FILL concentric shells stepped inward by density. An
/// optional polar cutoff restricts the lattice to the cap between the
/// +Z pole and the cutoff angle.
#[derive(Debug, Clone)]
pub struct Sphere {
    core: ShapeCore,
    radius: f64,
    polar_cutoff: Option<f64>,
}

impl Sphere {
    /// Creates a sphere of the given radius, clamped to a small
    /// positive epsilon.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self {
            core: ShapeCore::new(),
            radius: radius.max(MIN_EXTENT),
            polar_cutoff: None,
        }
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the polar cutoff angle, if one is set.
    #[must_use]
    pub fn polar_cutoff(&self) -> Option<f64> {
        self.polar_cutoff
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.max(MIN_EXTENT);
        self.core.bump_version();
    }

    /// Restricts lattice sampling to the cap above the cutoff angle
    /// (measured from the +Z pole), or clears the restriction.
    pub fn set_polar_cutoff(&mut self, cutoff: Option<f64>) {
        self.polar_cutoff = cutoff.map(|c| c.clamp(0.0, PI));
        self.core.bump_version();
    }

    fn max_polar(&self) -> f64 {
        self.polar_cutoff.unwrap_or(PI)
    }

    /// Lattice area between the +Z pole and the cutoff, for a shell of
    /// radius `r`.
    fn shell_area(&self, r: f64) -> f64 {
        2.0 * PI * r * r * (1.0 - self.max_polar().cos())
    }

    fn shell(&self, r: f64, density: f64, out: &mut PointSet) {
        let count = (self.shell_area(r) / (density * density)).ceil() as usize;
        fibonacci_band(count, r, 0.0, self.max_polar(), out);
    }
}

impl Shape for Sphere {
    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn generate_outline(&self, density: f64, out: &mut PointSet) {
        great_circle_wireframe(self.radius, density, out);
    }

    fn generate_surface(&self, density: f64, out: &mut PointSet) {
        self.shell(self.radius, density, out);
    }

    fn generate_filled(&self, density: f64, out: &mut PointSet) {
        if self.polar_cutoff.is_none() {
            sphere_fill(self.radius, density, out);
            return;
        }
        let mut r = self.radius;
        while r > TOLERANCE {
            self.shell(r, density, out);
            r -= density;
        }
        out.insert(crate::math::Point3::origin());
    }

    fn density_for_count(&self, count: usize, style: SampleStyle) -> f64 {
        match style {
            SampleStyle::Outline => {
                density_from_length(3.0 * 2.0 * PI * self.radius, count)
            }
            SampleStyle::Surface => density_from_area(self.shell_area(self.radius), count),
            SampleStyle::Fill => density_from_volume(
                4.0 / 3.0 * PI * self.radius.powi(3),
                count,
            ),
        }
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn surface_count_tracks_inversion() {
        let sphere = Sphere::new(1.0);
        let density = sphere.density_for_count(200, SampleStyle::Surface);
        let mut out = PointSet::new();
        sphere.generate_surface(density, &mut out);
        // ceil() in the shell count overshoots slightly.
        assert!((195..=215).contains(&out.len()));
        for p in &out {
            assert!((p.coords.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn polar_cutoff_limits_latitude() {
        let mut sphere = Sphere::new(1.0);
        sphere.set_polar_cutoff(Some(PI / 3.0));
        let mut out = PointSet::new();
        sphere.generate_surface(0.1, &mut out);
        assert!(!out.is_empty());
        for p in &out {
            assert!(p.z >= (PI / 3.0).cos() - 1e-9);
        }
    }

    #[test]
    fn fill_has_interior_points() {
        let sphere = Sphere::new(1.0);
        let mut out = PointSet::new();
        sphere.generate_filled(0.5, &mut out);
        assert!(out.iter().any(|p| p.coords.norm() < 0.9));
    }
}
