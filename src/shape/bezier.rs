use crate::error::{Result, ShapeError};
use crate::geometry::curve::bezier;
use crate::math::Point3;
use crate::sampling::PointSet;

use super::{density_from_length, SampleStyle, Shape, ShapeCore};

/// A Bézier curve of arbitrary degree defined by its control points.
///
/// A pure curve: SURFACE and FILL fall back to the outline.
#[derive(Debug, Clone)]
pub struct Bezier {
    core: ShapeCore,
    control: Vec<Point3>,
}

impl Bezier {
    /// Creates a Bézier curve.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two control points are given.
    pub fn new(control: Vec<Point3>) -> Result<Self> {
        if control.len() < 2 {
            return Err(ShapeError::TooFewControlPoints {
                min: 2,
                got: control.len(),
            }
            .into());
        }
        Ok(Self {
            core: ShapeCore::new(),
            control,
        })
    }

    /// Returns the control points.
    #[must_use]
    pub fn control(&self) -> &[Point3] {
        &self.control
    }

    /// Replaces a control point. Out-of-range indices are ignored.
    pub fn set_control_point(&mut self, index: usize, point: Point3) {
        if let Some(slot) = self.control.get_mut(index) {
            *slot = point;
            self.core.bump_version();
        }
    }

    fn polygon_length(&self) -> f64 {
        self.control
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).norm())
            .sum()
    }
}

impl Shape for Bezier {
    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn generate_outline(&self, density: f64, out: &mut PointSet) {
        bezier(&self.control, density, out);
    }

    fn density_for_count(&self, count: usize, _style: SampleStyle) -> f64 {
        density_from_length(self.polygon_length(), count)
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}
