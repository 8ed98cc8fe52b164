//! Volumetric generators.
//!
//! Cylinders and prisms assemble a 2D cross-section and replicate it at
//! `density`-spaced heights along the local Z axis, from `z = 0` up to
//! `z = height`. OUTLINE renders the two cap boundaries plus connecting
//! edges, SURFACE the lateral wall plus filled caps, FILL a solid stack
//! of filled slices.

use std::f64::consts::TAU;

use crate::math::{Point3, Vector3, TOLERANCE};
use crate::sampling::PointSet;

use super::area::{disc, polygon_fill, polygon_ring};
use super::curve::{circle_ring, segment};

fn height_steps(height: f64, density: f64) -> usize {
    ((height / density).ceil() as usize).max(1)
}

fn lifted(points: &PointSet, z: f64) -> Vec<Point3> {
    points.iter().map(|p| Point3::new(p.x, p.y, p.z + z)).collect()
}

/// Appends a ring or slice generated by `section` at every
/// `density`-spaced height.
fn stack_sections<F>(height: f64, density: f64, out: &mut PointSet, section: F)
where
    F: Fn(&mut PointSet),
{
    let steps = height_steps(height, density);
    let mut cross = PointSet::new();
    section(&mut cross);
    for i in 0..=steps {
        let z = height * i as f64 / steps as f64;
        for p in lifted(&cross, z) {
            out.insert(p);
        }
    }
}

/// Samples the wireframe of a cylinder: cap rings joined by
/// `edge_count` vertical edges.
pub fn cylinder_outline(
    radius: f64,
    height: f64,
    density: f64,
    edge_count: usize,
    out: &mut PointSet,
) {
    if radius < TOLERANCE || height < TOLERANCE {
        return;
    }
    let mut cap = PointSet::new();
    circle_ring(radius, density, &mut cap);
    for p in lifted(&cap, 0.0) {
        out.insert(p);
    }
    for p in lifted(&cap, height) {
        out.insert(p);
    }
    if edge_count == 0 {
        return;
    }
    let step = TAU / edge_count as f64;
    for i in 0..edge_count {
        let angle = i as f64 * step;
        let base = Point3::new(radius * angle.cos(), radius * angle.sin(), 0.0);
        let top = base + Vector3::new(0.0, 0.0, height);
        segment(&base, &top, density, out);
    }
}

/// Samples the hollow shell of a cylinder: wall rings at each height
/// plus filled cap discs.
pub fn cylinder_surface(radius: f64, height: f64, density: f64, out: &mut PointSet) {
    if radius < TOLERANCE || height < TOLERANCE {
        return;
    }
    stack_sections(height, density, out, |cross| {
        circle_ring(radius, density, cross);
    });
    let mut cap = PointSet::new();
    disc(radius, density, &mut cap);
    for p in lifted(&cap, 0.0) {
        out.insert(p);
    }
    for p in lifted(&cap, height) {
        out.insert(p);
    }
}

/// Samples a solid cylinder: filled disc slices at each height.
pub fn cylinder_fill(radius: f64, height: f64, density: f64, out: &mut PointSet) {
    if radius < TOLERANCE || height < TOLERANCE {
        return;
    }
    stack_sections(height, density, out, |cross| {
        disc(radius, density, cross);
    });
}

/// Samples the wireframe of a prism: cap boundaries joined by an edge
/// at every cross-section vertex.
pub fn prism_outline(vertices: &[Point3], height: f64, density: f64, out: &mut PointSet) {
    if vertices.len() < 3 || height < TOLERANCE {
        return;
    }
    let mut cap = PointSet::new();
    polygon_ring(vertices, density, &mut cap);
    for p in lifted(&cap, 0.0) {
        out.insert(p);
    }
    for p in lifted(&cap, height) {
        out.insert(p);
    }
    for v in vertices {
        let top = v + Vector3::new(0.0, 0.0, height);
        segment(v, &top, density, out);
    }
}

/// Samples the hollow shell of a prism: wall rings plus filled caps.
pub fn prism_surface(vertices: &[Point3], height: f64, density: f64, out: &mut PointSet) {
    if vertices.len() < 3 || height < TOLERANCE {
        return;
    }
    stack_sections(height, density, out, |cross| {
        polygon_ring(vertices, density, cross);
    });
    let mut cap = PointSet::new();
    polygon_fill(vertices, density, &mut cap);
    for p in lifted(&cap, 0.0) {
        out.insert(p);
    }
    for p in lifted(&cap, height) {
        out.insert(p);
    }
}

/// Samples a solid prism: filled slices at each height.
pub fn prism_fill(vertices: &[Point3], height: f64, density: f64, out: &mut PointSet) {
    if vertices.len() < 3 || height < TOLERANCE {
        return;
    }
    stack_sections(height, density, out, |cross| {
        polygon_fill(vertices, density, cross);
    });
}
