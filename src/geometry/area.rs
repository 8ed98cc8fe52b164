//! Area-fill generators.
//!
//! Filled 2D features decompose into concentric rings: the boundary is
//! evaluated at a shrinking radius (or scale factor, for polygonal
//! boundaries), stepping inward by `density` until the interior is
//! exhausted, and the rings are unioned into the output set.

use std::f64::consts::TAU;

use crate::math::{Point3, Vector3, TOLERANCE};
use crate::sampling::PointSet;

use super::curve::{circle_ring, ellipse_ring, heart_curve, segment};

/// Samples a filled disc of the given radius in the local XY plane.
pub fn disc(radius: f64, density: f64, out: &mut PointSet) {
    if radius < TOLERANCE {
        return;
    }
    let mut r = radius;
    while r > TOLERANCE {
        circle_ring(r, density, out);
        r -= density;
    }
    out.insert(Point3::origin());
}

/// Samples a filled elliptical disc, major axis along X.
///
/// Both semi-axes shrink by `density` per ring; the fill stops when the
/// shorter axis is exhausted.
pub fn elliptical_disc(semi_major: f64, semi_minor: f64, density: f64, out: &mut PointSet) {
    if semi_major < TOLERANCE || semi_minor < TOLERANCE {
        return;
    }
    let mut a = semi_major;
    let mut b = semi_minor;
    while a > TOLERANCE && b > TOLERANCE {
        ellipse_ring(a, b, density, out);
        a -= density;
        b -= density;
    }
    out.insert(Point3::origin());
}

/// Samples the closed boundary of a polygon given its vertices.
pub fn polygon_ring(vertices: &[Point3], density: f64, out: &mut PointSet) {
    let n = vertices.len();
    if n < 2 {
        return;
    }
    for i in 0..n {
        segment(&vertices[i], &vertices[(i + 1) % n], density, out);
    }
}

/// Samples a filled polygon by shrinking its boundary toward the
/// centroid in `density`-spaced steps.
pub fn polygon_fill(vertices: &[Point3], density: f64, out: &mut PointSet) {
    let n = vertices.len();
    if n < 3 {
        polygon_ring(vertices, density, out);
        return;
    }
    let centroid: Vector3 = vertices.iter().map(|v| v.coords).sum::<Vector3>() / n as f64;
    let reach = vertices
        .iter()
        .map(|v| (v.coords - centroid).norm())
        .fold(0.0, f64::max);
    if reach < TOLERANCE {
        return;
    }
    let mut scale = 1.0;
    let mut ring = Vec::with_capacity(n);
    while scale > 0.0 {
        ring.clear();
        ring.extend(
            vertices
                .iter()
                .map(|v| Point3::from(centroid + (v.coords - centroid) * scale)),
        );
        polygon_ring(&ring, density, out);
        scale -= density / reach;
    }
    out.insert(Point3::from(centroid));
}

/// Samples a filled heart by shrinking the outline toward its center.
pub fn heart_fill(width: f64, height: f64, density: f64, out: &mut PointSet) {
    if width < TOLERANCE || height < TOLERANCE {
        return;
    }
    let reach = width.max(height) / 2.0;
    let mut scale = 1.0;
    while scale > 0.0 {
        heart_curve(width * scale, height * scale, density, out);
        scale -= density / reach;
    }
    out.insert(Point3::origin());
}

/// Total boundary length of a closed polygon.
#[must_use]
pub fn polygon_perimeter(vertices: &[Point3]) -> f64 {
    let n = vertices.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| (vertices[(i + 1) % n] - vertices[i]).norm())
        .sum()
}

/// Unsigned area of a polygon in the XY plane (shoelace formula).
#[must_use]
pub fn polygon_area(vertices: &[Point3]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y;
    }
    (sum * 0.5).abs()
}

/// Vertices of a regular polygon of `sides` sides inscribed in a circle
/// of the given radius, first vertex on the +X axis.
#[must_use]
pub fn regular_polygon_vertices(sides: usize, radius: f64) -> Vec<Point3> {
    if sides < 3 || radius < TOLERANCE {
        return Vec::new();
    }
    let step = TAU / sides as f64;
    (0..sides)
        .map(|i| {
            let angle = i as f64 * step;
            Point3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
        })
        .collect()
}

/// Vertices of a star polygon: `spikes` outer vertices on
/// `outer_radius` alternating with inner vertices on `inner_radius`.
#[must_use]
pub fn star_vertices(spikes: usize, outer_radius: f64, inner_radius: f64) -> Vec<Point3> {
    if spikes < 2 || outer_radius < TOLERANCE {
        return Vec::new();
    }
    let step = TAU / spikes as f64;
    let mut vertices = Vec::with_capacity(spikes * 2);
    for i in 0..spikes {
        let theta_out = i as f64 * step;
        vertices.push(Point3::new(
            outer_radius * theta_out.cos(),
            outer_radius * theta_out.sin(),
            0.0,
        ));
        let theta_in = theta_out + 0.5 * step;
        vertices.push(Point3::new(
            inner_radius * theta_in.cos(),
            inner_radius * theta_in.sin(),
            0.0,
        ));
    }
    vertices
}
