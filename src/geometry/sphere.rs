//! Fibonacci-lattice sphere sampling.
//!
//! Points are placed at golden-angle azimuth increments with linear
//! steps in the cosine of the polar angle, which distributes them
//! nearly uniformly over the surface. Trigonometry for the azimuth
//! comes from the precomputed golden-angle table.

use std::f64::consts::PI;

use crate::math::golden::golden_trig;
use crate::math::{Point3, TOLERANCE};
use crate::sampling::PointSet;

use super::curve::circle_ring;

/// Samples `count` points over the band of a sphere between two polar
/// angles (measured from the +Z pole, in `[0, pi]`).
///
/// `min_polar = 0` with a small `max_polar` yields a cap around the
/// pole; the full sphere is the band `[0, pi]`.
pub fn fibonacci_band(
    count: usize,
    radius: f64,
    min_polar: f64,
    max_polar: f64,
    out: &mut PointSet,
) {
    if count == 0 || radius < TOLERANCE {
        return;
    }
    let z_hi = min_polar.clamp(0.0, PI).cos();
    let z_lo = max_polar.clamp(0.0, PI).cos();
    if z_hi - z_lo < TOLERANCE {
        return;
    }
    for k in 0..count {
        let z = z_hi - (z_hi - z_lo) * (k as f64 + 0.5) / count as f64;
        let ring = (1.0 - z * z).max(0.0).sqrt();
        let (cos_a, sin_a) = golden_trig(k);
        out.insert(Point3::new(
            radius * ring * cos_a,
            radius * ring * sin_a,
            radius * z,
        ));
    }
}

/// Samples `count` points over a full sphere surface.
pub fn fibonacci_sphere(count: usize, radius: f64, out: &mut PointSet) {
    fibonacci_band(count, radius, 0.0, PI, out);
}

/// Point count giving roughly `density` spacing over a sphere surface.
#[must_use]
pub fn surface_count(radius: f64, density: f64) -> usize {
    (4.0 * PI * radius * radius / (density * density)).ceil() as usize
}

/// Samples a solid sphere as concentric Fibonacci shells stepped inward
/// by `density`, each shell at the count matching its own area.
pub fn sphere_fill(radius: f64, density: f64, out: &mut PointSet) {
    if radius < TOLERANCE {
        return;
    }
    let mut r = radius;
    while r > TOLERANCE {
        fibonacci_sphere(surface_count(r, density), r, out);
        r -= density;
    }
    out.insert(Point3::origin());
}

/// Samples a sphere wireframe: three orthogonal great circles.
pub fn great_circle_wireframe(radius: f64, density: f64, out: &mut PointSet) {
    if radius < TOLERANCE {
        return;
    }
    // Equator in XY, meridians in XZ and YZ.
    circle_ring(radius, density, out);
    let mut ring = PointSet::new();
    circle_ring(radius, density, &mut ring);
    for p in &ring {
        out.insert(Point3::new(p.x, 0.0, p.y));
    }
    for p in &ring {
        out.insert(Point3::new(0.0, p.x, p.y));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn fibonacci_sphere_count_and_norm() {
        let mut out = PointSet::new();
        fibonacci_sphere(200, 1.0, &mut out);
        assert!(out.len() <= 200);
        assert!(out.len() > 190);
        for p in &out {
            assert!((p.coords.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn fibonacci_sphere_zero_radius_is_empty() {
        let mut out = PointSet::new();
        fibonacci_sphere(100, 0.0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn band_respects_polar_cutoff() {
        let mut out = PointSet::new();
        let cutoff = PI / 4.0;
        fibonacci_band(100, 1.0, 0.0, cutoff, &mut out);
        assert!(!out.is_empty());
        for p in &out {
            // All points stay above the cutoff latitude.
            assert!(p.z >= cutoff.cos() - 1e-9);
        }
    }

    #[test]
    fn empty_band_is_empty() {
        let mut out = PointSet::new();
        fibonacci_band(100, 1.0, 1.0, 1.0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn fill_contains_interior_shells() {
        let mut out = PointSet::new();
        sphere_fill(1.0, 0.4, &mut out);
        assert!(out.contains(&Point3::origin()));
        let radii: Vec<f64> = out.iter().map(|p| p.coords.norm()).collect();
        assert!(radii.iter().any(|&r| (r - 1.0).abs() < 1e-9));
        assert!(radii.iter().any(|&r| (r - 0.6).abs() < 1e-9));
    }

    #[test]
    fn wireframe_points_on_sphere() {
        let mut out = PointSet::new();
        great_circle_wireframe(2.0, 0.2, &mut out);
        for p in &out {
            assert!((p.coords.norm() - 2.0).abs() < TOLERANCE);
        }
    }
}
