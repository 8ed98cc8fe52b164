use crate::error::{Result, ShapeError};
use crate::geometry::area::{
    polygon_area, polygon_fill, polygon_perimeter, polygon_ring, star_vertices,
};
use crate::math::{Point3, MIN_EXTENT};
use crate::sampling::PointSet;

use super::{density_from_area, density_from_length, SampleStyle, Shape, ShapeCore};

/// A star polygon in the local XY plane: `spikes` outer vertices
/// alternating with inner vertices at half the angular step.
#[derive(Debug, Clone)]
pub struct Star {
    core: ShapeCore,
    spikes: usize,
    outer_radius: f64,
    inner_radius: f64,
}

impl Star {
    /// Creates a star.
    ///
    /// # Errors
    ///
    /// Returns an error if `spikes < 2`.
    pub fn new(spikes: usize, outer_radius: f64, inner_radius: f64) -> Result<Self> {
        if spikes < 2 {
            return Err(ShapeError::TooFewSpikes { min: 2, got: spikes }.into());
        }
        Ok(Self {
            core: ShapeCore::new(),
            spikes,
            outer_radius: outer_radius.max(MIN_EXTENT),
            inner_radius: inner_radius.max(MIN_EXTENT),
        })
    }

    /// Returns the number of spikes.
    #[must_use]
    pub fn spikes(&self) -> usize {
        self.spikes
    }

    /// Returns the outer radius.
    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Returns the inner radius.
    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Sets the number of spikes, clamping to 2.
    pub fn set_spikes(&mut self, spikes: usize) {
        self.spikes = spikes.max(2);
        self.core.bump_version();
    }

    pub fn set_outer_radius(&mut self, outer_radius: f64) {
        self.outer_radius = outer_radius.max(MIN_EXTENT);
        self.core.bump_version();
    }

    pub fn set_inner_radius(&mut self, inner_radius: f64) {
        self.inner_radius = inner_radius.max(MIN_EXTENT);
        self.core.bump_version();
    }

    fn vertices(&self) -> Vec<Point3> {
        star_vertices(self.spikes, self.outer_radius, self.inner_radius)
    }
}

impl Shape for Star {
    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn generate_outline(&self, density: f64, out: &mut PointSet) {
        polygon_ring(&self.vertices(), density, out);
    }

    fn generate_surface(&self, density: f64, out: &mut PointSet) {
        polygon_fill(&self.vertices(), density, out);
    }

    fn density_for_count(&self, count: usize, style: SampleStyle) -> f64 {
        let vertices = self.vertices();
        match style {
            SampleStyle::Outline => density_from_length(polygon_perimeter(&vertices), count),
            SampleStyle::Surface | SampleStyle::Fill => {
                density_from_area(polygon_area(&vertices), count)
            }
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
    fn one_spike_is_an_error() {
        assert!(Star::new(1, 2.0, 1.0).is_err());
    }

    #[test]
    fn outline_touches_both_radii() {
        let star = Star::new(5, 2.0, 1.0).unwrap();
        let mut out = PointSet::new();
        star.generate_outline(0.2, &mut out);
        let radii: Vec<f64> = out.iter().map(|p| p.coords.norm()).collect();
        assert!(radii.iter().any(|&r| (r - 2.0).abs() < 1e-9));
        assert!(radii.iter().any(|&r| (r - 1.0).abs() < 1e-9));
    }
}
