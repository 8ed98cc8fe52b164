use std::f64::consts::PI;

use crate::geometry::area::disc;
use crate::geometry::curve::circle_ring;
use crate::math::MIN_EXTENT;
use crate::sampling::PointSet;

use super::{density_from_area, density_from_length, SampleStyle, Shape, ShapeCore};

/// A circle in the local XY plane, centered on the origin.
///
/// OUTLINE samples the ring, SURFACE and FILL the disc.
#[derive(Debug, Clone)]
pub struct Circle {
    core: ShapeCore,
    radius: f64,
}

impl Circle {
    /// Creates a circle of the given radius. The radius is clamped to a
    /// small positive epsilon.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self {
            core: ShapeCore::new(),
            radius: radius.max(MIN_EXTENT),
        }
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Sets the radius, clamping to a small positive epsilon.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.max(MIN_EXTENT);
        self.core.bump_version();
    }
}

impl Shape for Circle {
    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn generate_outline(&self, density: f64, out: &mut PointSet) {
        circle_ring(self.radius, density, out);
    }

    fn generate_surface(&self, density: f64, out: &mut PointSet) {
        disc(self.radius, density, out);
    }

    fn density_for_count(&self, count: usize, style: SampleStyle) -> f64 {
        match style {
            SampleStyle::Outline => density_from_length(2.0 * PI * self.radius, count),
            SampleStyle::Surface | SampleStyle::Fill => {
                density_from_area(PI * self.radius * self.radius, count)
            }
        }
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}
