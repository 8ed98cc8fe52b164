use crate::error::{Result, ShapeError};
use crate::geometry::area::{polygon_area, polygon_perimeter, regular_polygon_vertices};
use crate::geometry::solid::{prism_fill, prism_outline, prism_surface};
use crate::math::{Point3, MIN_EXTENT};
use crate::sampling::PointSet;

use super::{density_from_area, density_from_length, density_from_volume, SampleStyle, Shape, ShapeCore};

/// A right prism with a regular-polygon cross-section, rising along the
/// local Z axis from the origin.
#[derive(Debug, Clone)]
pub struct Prism {
    core: ShapeCore,
    sides: usize,
    radius: f64,
    height: f64,
}

impl Prism {
    /// Creates a prism.
    ///
    /// # Errors
    ///
    /// Returns an error if `sides < 3`.
    pub fn new(sides: usize, radius: f64, height: f64) -> Result<Self> {
        if sides < 3 {
            return Err(ShapeError::TooFewVertices { min: 3, got: sides }.into());
        }
        Ok(Self {
            core: ShapeCore::new(),
            sides,
            radius: radius.max(MIN_EXTENT),
            height: height.max(MIN_EXTENT),
        })
    }

    /// Returns the number of cross-section sides.
    #[must_use]
    pub fn sides(&self) -> usize {
        self.sides
    }

    /// Returns the cross-section circumradius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Sets the number of sides, clamping to 3.
    pub fn set_sides(&mut self, sides: usize) {
        self.sides = sides.max(3);
        self.core.bump_version();
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.max(MIN_EXTENT);
        self.core.bump_version();
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height.max(MIN_EXTENT);
        self.core.bump_version();
    }

    fn vertices(&self) -> Vec<Point3> {
        regular_polygon_vertices(self.sides, self.radius)
    }
}

impl Shape for Prism {
    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn generate_outline(&self, density: f64, out: &mut PointSet) {
        prism_outline(&self.vertices(), self.height, density, out);
    }

    fn generate_surface(&self, density: f64, out: &mut PointSet) {
        prism_surface(&self.vertices(), self.height, density, out);
    }

    fn generate_filled(&self, density: f64, out: &mut PointSet) {
        prism_fill(&self.vertices(), self.height, density, out);
    }

    fn density_for_count(&self, count: usize, style: SampleStyle) -> f64 {
        let vertices = self.vertices();
        let perimeter = polygon_perimeter(&vertices);
        let area = polygon_area(&vertices);
        match style {
            SampleStyle::Outline => density_from_length(
                2.0 * perimeter + self.sides as f64 * self.height,
                count,
            ),
            SampleStyle::Surface => {
                density_from_area(perimeter * self.height + 2.0 * area, count)
            }
            SampleStyle::Fill => density_from_volume(area * self.height, count),
        }
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}
