//! Curve generators.
//!
//! Every generator steps so consecutive points are spaced roughly
//! `density` apart along arc length, not parameter increment. Curves
//! without closed-form arc length (ellipse, Bézier, heart) derive the
//! step each iteration from the local derivative magnitude `ds/dt`;
//! a closed-form or control-polygon length estimate bounds the
//! iteration count. Degenerate inputs append nothing.

use std::f64::consts::{PI, TAU};

use crate::math::{Point3, Vector3, TOLERANCE};
use crate::sampling::PointSet;

/// Samples a straight segment from `start` to `end`, endpoints included.
pub fn segment(start: &Point3, end: &Point3, density: f64, out: &mut PointSet) {
    let span = end - start;
    let length = span.norm();
    if length < TOLERANCE {
        out.insert(*start);
        return;
    }
    let steps = (length / density).ceil().max(1.0) as usize;
    for i in 0..steps {
        let t = i as f64 / steps as f64;
        out.insert(start + span * t);
    }
    // Insert the exact endpoint rather than `start + span`, so a chain
    // of segments sharing vertices merges at the seams by bit equality.
    out.insert(*end);
}

/// Samples a full circle of the given radius in the local XY plane.
pub fn circle_ring(radius: f64, density: f64, out: &mut PointSet) {
    if radius < TOLERANCE {
        return;
    }
    let steps = ((TAU * radius / density).ceil() as usize).max(3);
    let step = TAU / steps as f64;
    for i in 0..steps {
        let angle = i as f64 * step;
        out.insert(Point3::new(
            radius * angle.cos(),
            radius * angle.sin(),
            0.0,
        ));
    }
}

/// Ramanujan's approximation of the circumference of an ellipse.
#[must_use]
pub fn ellipse_circumference(semi_major: f64, semi_minor: f64) -> f64 {
    let (a, b) = (semi_major, semi_minor);
    PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt())
}

/// Samples a full ellipse in the local XY plane, major axis along X.
///
/// The angular step is re-derived every iteration from the local
/// derivative magnitude so points stay `density`-spaced along the
/// boundary even at high eccentricity.
pub fn ellipse_ring(semi_major: f64, semi_minor: f64, density: f64, out: &mut PointSet) {
    if semi_major < TOLERANCE || semi_minor < TOLERANCE {
        return;
    }
    let max_steps = (ellipse_circumference(semi_major, semi_minor) / density).ceil() as usize * 2 + 4;
    let mut angle = 0.0;
    for _ in 0..max_steps {
        if angle >= TAU {
            break;
        }
        out.insert(Point3::new(
            semi_major * angle.cos(),
            semi_minor * angle.sin(),
            0.0,
        ));
        let ds_dt = (semi_major * semi_major * angle.sin() * angle.sin()
            + semi_minor * semi_minor * angle.cos() * angle.cos())
        .sqrt();
        angle += density / ds_dt.max(TOLERANCE);
    }
}

/// Samples a helix rising from `z = 0` to `z = height` around the local
/// Z axis, completing `turns` full revolutions.
pub fn helix(radius: f64, height: f64, turns: f64, density: f64, out: &mut PointSet) {
    if radius < TOLERANCE || height < TOLERANCE || turns < TOLERANCE {
        return;
    }
    let sweep = turns * TAU;
    // Arc length per radian is constant for a helix.
    let pitch = height / sweep;
    let ds_dt = (radius * radius + pitch * pitch).sqrt();
    let steps = ((sweep * ds_dt / density).ceil() as usize).max(1);
    for i in 0..=steps {
        let t = i as f64 / steps as f64 * sweep;
        out.insert(Point3::new(
            radius * t.cos(),
            radius * t.sin(),
            pitch * t,
        ));
    }
}

/// Evaluates a Bézier curve at parameter `t` by de Casteljau reduction.
#[must_use]
pub fn de_casteljau(control: &[Point3], t: f64) -> Point3 {
    let mut coords: Vec<Vector3> = control.iter().map(|p| p.coords).collect();
    let mut n = coords.len();
    while n > 1 {
        for i in 0..n - 1 {
            coords[i] = coords[i].lerp(&coords[i + 1], t);
        }
        n -= 1;
    }
    Point3::from(coords[0])
}

/// Samples a Bézier curve over its full parameter range.
///
/// The parameter step is scaled by a finite-difference estimate of the
/// local derivative; the control-polygon length (an upper bound on the
/// curve length) bounds the iteration count.
pub fn bezier(control: &[Point3], density: f64, out: &mut PointSet) {
    if control.len() < 2 {
        return;
    }
    let polygon_length: f64 = control
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).norm())
        .sum();
    if polygon_length < TOLERANCE {
        return;
    }
    let max_steps = (polygon_length / density).ceil() as usize * 4 + 8;
    const H: f64 = 1e-6;
    // Cap the parameter step so a vanishing derivative (a cusp from a
    // degenerate control polygon) cannot jump past the rest of the
    // curve.
    const MAX_STEP: f64 = 1.0 / 16.0;
    let mut t = 0.0;
    for _ in 0..max_steps {
        if t >= 1.0 {
            break;
        }
        out.insert(de_casteljau(control, t));
        let ahead = de_casteljau(control, (t + H).min(1.0));
        let ds_dt = (ahead - de_casteljau(control, t)).norm() / H;
        t += (density / ds_dt.max(TOLERANCE)).min(MAX_STEP);
    }
    out.insert(de_casteljau(control, 1.0));
}

/// Evaluates the heart curve at parameter `t` in `[0, 2*pi)`.
///
/// Classic quartic-cosine heart, `x = 16 sin^3 t`,
/// `y = 13 cos t - 5 cos 2t - 2 cos 3t - cos 4t`, rescaled so the
/// outline spans `width` by `height` centered on the origin.
#[must_use]
pub fn heart_at(width: f64, height: f64, t: f64) -> Point3 {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    // Raw ranges: x in [-16, 16], y in [-17, 5]; shift y up by 6 to center.
    Point3::new(x * width / 32.0, (y + 6.0) * height / 22.0, 0.0)
}

/// Samples the heart outline in the local XY plane.
pub fn heart_curve(width: f64, height: f64, density: f64, out: &mut PointSet) {
    if width < TOLERANCE || height < TOLERANCE {
        return;
    }
    // Perimeter is close to that of the bounding ellipse; double it for
    // the iteration bound since the cusps slow the parameter down.
    let max_steps =
        (ellipse_circumference(width / 2.0, height / 2.0) / density).ceil() as usize * 4 + 8;
    const H: f64 = 1e-6;
    // The derivative vanishes at the bottom cusp; cap the step so the
    // walk cannot jump past it.
    const MAX_STEP: f64 = TAU / 64.0;
    let mut t = 0.0;
    for _ in 0..max_steps {
        if t >= TAU {
            break;
        }
        out.insert(heart_at(width, height, t));
        let ds_dt = (heart_at(width, height, t + H) - heart_at(width, height, t)).norm() / H;
        t += (density / ds_dt.max(TOLERANCE)).min(MAX_STEP);
    }
}
