use std::f64::consts::TAU;

use crate::geometry::curve::helix;
use crate::math::MIN_EXTENT;
use crate::sampling::PointSet;

use super::{density_from_length, SampleStyle, Shape, ShapeCore};

/// A helix rising along the local Z axis. A pure curve: SURFACE and
/// FILL fall back to the outline.
#[derive(Debug, Clone)]
pub struct Helix {
    core: ShapeCore,
    radius: f64,
    height: f64,
    turns: f64,
}

impl Helix {
    /// Creates a helix. Radius, height, and turns clamp to a small
    /// positive epsilon.
    #[must_use]
    pub fn new(radius: f64, height: f64, turns: f64) -> Self {
        Self {
            core: ShapeCore::new(),
            radius: radius.max(MIN_EXTENT),
            height: height.max(MIN_EXTENT),
            turns: turns.max(MIN_EXTENT),
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

    /// Returns the number of revolutions.
    #[must_use]
    pub fn turns(&self) -> f64 {
        self.turns
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.max(MIN_EXTENT);
        self.core.bump_version();
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height.max(MIN_EXTENT);
        self.core.bump_version();
    }

    pub fn set_turns(&mut self, turns: f64) {
        self.turns = turns.max(MIN_EXTENT);
        self.core.bump_version();
    }

    fn arc_length(&self) -> f64 {
        let sweep = self.turns * TAU;
        let pitch = self.height / sweep;
        sweep * (self.radius * self.radius + pitch * pitch).sqrt()
    }
}

impl Shape for Helix {
    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn generate_outline(&self, density: f64, out: &mut PointSet) {
        helix(self.radius, self.height, self.turns, density, out);
    }

    fn density_for_count(&self, count: usize, _style: SampleStyle) -> f64 {
        density_from_length(self.arc_length(), count)
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}
