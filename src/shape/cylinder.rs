use std::f64::consts::PI;

use crate::geometry::solid::{cylinder_fill, cylinder_outline, cylinder_surface};
use crate::math::MIN_EXTENT;
use crate::sampling::PointSet;

use super::{density_from_area, density_from_length, density_from_volume, SampleStyle, Shape, ShapeCore};

/// Number of vertical wireframe edges on a cylinder outline.
const OUTLINE_EDGES: usize = 4;

/// A cylinder rising along the local Z axis from the origin.
#[derive(Debug, Clone)]
pub struct Cylinder {
    core: ShapeCore,
    radius: f64,
    height: f64,
}

impl Cylinder {
    /// Creates a cylinder. Radius and height clamp to a small positive
    /// epsilon.
    #[must_use]
    pub fn new(radius: f64, height: f64) -> Self {
        Self {
            core: ShapeCore::new(),
            radius: radius.max(MIN_EXTENT),
            height: height.max(MIN_EXTENT),
        }
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.max(MIN_EXTENT);
        self.core.bump_version();
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height.max(MIN_EXTENT);
        self.core.bump_version();
    }
}

impl Shape for Cylinder {
    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn generate_outline(&self, density: f64, out: &mut PointSet) {
        cylinder_outline(self.radius, self.height, density, OUTLINE_EDGES, out);
    }

    fn generate_surface(&self, density: f64, out: &mut PointSet) {
        cylinder_surface(self.radius, self.height, density, out);
    }

    fn generate_filled(&self, density: f64, out: &mut PointSet) {
        cylinder_fill(self.radius, self.height, density, out);
    }

    fn density_for_count(&self, count: usize, style: SampleStyle) -> f64 {
        match style {
            SampleStyle::Outline => density_from_length(
                2.0 * (2.0 * PI * self.radius) + OUTLINE_EDGES as f64 * self.height,
                count,
            ),
            SampleStyle::Surface => density_from_area(
                2.0 * PI * self.radius * self.height + 2.0 * PI * self.radius * self.radius,
                count,
            ),
            SampleStyle::Fill => {
                density_from_volume(PI * self.radius * self.radius * self.height, count)
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
    fn styles_grow_in_density_order() {
        let cyl = Cylinder::new(1.0, 2.0);
        let mut outline = PointSet::new();
        cyl.generate_outline(0.25, &mut outline);
        let mut surface = PointSet::new();
        cyl.generate_surface(0.25, &mut surface);
        let mut fill = PointSet::new();
        cyl.generate_filled(0.25, &mut fill);
        assert!(!outline.is_empty());
        assert!(surface.len() > outline.len());
        assert!(fill.len() > surface.len());
    }
}
