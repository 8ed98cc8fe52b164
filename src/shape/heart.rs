use std::f64::consts::FRAC_PI_4;

use crate::geometry::area::heart_fill;
use crate::geometry::curve::{ellipse_circumference, heart_curve};
use crate::math::MIN_EXTENT;
use crate::sampling::PointSet;

use super::{density_from_area, density_from_length, SampleStyle, Shape, ShapeCore};

/// A heart outline in the local XY plane, spanning `width` by `height`
/// centered on the origin.
#[derive(Debug, Clone)]
pub struct Heart {
    core: ShapeCore,
    width: f64,
    height: f64,
}

impl Heart {
    /// Creates a heart. Extents clamp to a small positive epsilon.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            core: ShapeCore::new(),
            width: width.max(MIN_EXTENT),
            height: height.max(MIN_EXTENT),
        }
    }

    /// Returns the width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width.max(MIN_EXTENT);
        self.core.bump_version();
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height.max(MIN_EXTENT);
        self.core.bump_version();
    }
}

impl Shape for Heart {
    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn generate_outline(&self, density: f64, out: &mut PointSet) {
        heart_curve(self.width, self.height, density, out);
    }

    fn generate_surface(&self, density: f64, out: &mut PointSet) {
        heart_fill(self.width, self.height, density, out);
    }

    fn density_for_count(&self, count: usize, style: SampleStyle) -> f64 {
        match style {
            SampleStyle::Outline => density_from_length(
                ellipse_circumference(self.width / 2.0, self.height / 2.0),
                count,
            ),
            // Area approximated by the bounding ellipse.
            SampleStyle::Surface | SampleStyle::Fill => {
                density_from_area(FRAC_PI_4 * self.width * self.height, count)
            }
        }
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}
