use std::f64::consts::PI;

use crate::geometry::area::elliptical_disc;
use crate::geometry::curve::{ellipse_circumference, ellipse_ring};
use crate::math::MIN_EXTENT;
use crate::sampling::PointSet;

use super::{density_from_area, density_from_length, SampleStyle, Shape, ShapeCore};

/// An ellipse in the local XY plane, major axis along X.
#[derive(Debug, Clone)]
pub struct Ellipse {
    core: ShapeCore,
    semi_major: f64,
    semi_minor: f64,
}

impl Ellipse {
    /// Creates an ellipse from semi-axis lengths, each clamped to a
    /// small positive epsilon.
    #[must_use]
    pub fn new(semi_major: f64, semi_minor: f64) -> Self {
        Self {
            core: ShapeCore::new(),
            semi_major: semi_major.max(MIN_EXTENT),
            semi_minor: semi_minor.max(MIN_EXTENT),
        }
    }

    /// Returns the semi-major axis length.
    #[must_use]
    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    /// Returns the semi-minor axis length.
    #[must_use]
    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    pub fn set_semi_major(&mut self, semi_major: f64) {
        self.semi_major = semi_major.max(MIN_EXTENT);
        self.core.bump_version();
    }

    pub fn set_semi_minor(&mut self, semi_minor: f64) {
        self.semi_minor = semi_minor.max(MIN_EXTENT);
        self.core.bump_version();
    }
}

impl Shape for Ellipse {
    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn generate_outline(&self, density: f64, out: &mut PointSet) {
        ellipse_ring(self.semi_major, self.semi_minor, density, out);
    }

    fn generate_surface(&self, density: f64, out: &mut PointSet) {
        elliptical_disc(self.semi_major, self.semi_minor, density, out);
    }

    fn density_for_count(&self, count: usize, style: SampleStyle) -> f64 {
        match style {
            SampleStyle::Outline => density_from_length(
                ellipse_circumference(self.semi_major, self.semi_minor),
                count,
            ),
            SampleStyle::Surface | SampleStyle::Fill => {
                density_from_area(PI * self.semi_major * self.semi_minor, count)
            }
        }
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}
