use crate::error::{Result, ShapeError};
use crate::geometry::area::{
    polygon_area, polygon_fill, polygon_perimeter, polygon_ring, regular_polygon_vertices,
};
use crate::math::{Point3, MIN_EXTENT};
use crate::sampling::PointSet;

use super::{density_from_area, density_from_length, SampleStyle, Shape, ShapeCore};

/// A regular polygon in the local XY plane, inscribed in a circle of
/// the given radius with the first vertex on the +X axis.
#[derive(Debug, Clone)]
pub struct Polygon {
    core: ShapeCore,
    sides: usize,
    radius: f64,
}

impl Polygon {
    /// Creates a regular polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if `sides < 3`.
    pub fn new(sides: usize, radius: f64) -> Result<Self> {
        if sides < 3 {
            return Err(ShapeError::TooFewVertices { min: 3, got: sides }.into());
        }
        Ok(Self {
            core: ShapeCore::new(),
            sides,
            radius: radius.max(MIN_EXTENT),
        })
    }

    /// Returns the number of sides.
    #[must_use]
    pub fn sides(&self) -> usize {
        self.sides
    }

    /// Returns the circumradius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
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

    fn vertices(&self) -> Vec<Point3> {
        regular_polygon_vertices(self.sides, self.radius)
    }
}

impl Shape for Polygon {
    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn generate_outline(&self, density: f64, out: &mut PointSet) {
        polygon_ring(&self.vertices(), density, out);
    }

    fn generate_surface(&self, density: f64, out: &mut PointSet) {
        polygon_fill(&self.vertices(), density, out);
    }

    fn density_for_count(&self, count: usize, style: SampleStyle) -> f64 {
        let vertices = self.vertices();
        match style {
            SampleStyle::Outline => density_from_length(polygon_perimeter(&vertices), count),
            SampleStyle::Surface | SampleStyle::Fill => {
                density_from_area(polygon_area(&vertices), count)
            }
        }
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}
