mod bezier;
mod circle;
mod composite;
mod cylinder;
mod ellipse;
mod heart;
mod helix;
mod polygon;
mod prism;
mod sphere;
mod star;

pub use bezier::Bezier;
pub use circle::Circle;
pub use composite::Composite;
pub use cylinder::Cylinder;
pub use ellipse::Ellipse;
pub use heart::Heart;
pub use helix::Helix;
pub use polygon::Polygon;
pub use prism::Prism;
pub use sphere::Sphere;
pub use star::Star;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::math::{UnitQuat, Vector3, MIN_DENSITY};
use crate::sampling::PointSet;

/// Selects which generation method a shape invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleStyle {
    /// Boundary or wireframe.
    Outline,
    /// Hollow shell.
    Surface,
    /// Solid volume.
    Fill,
}

/// Stable opaque identity of a shape. Survives cloning: a clone carries
/// the same id as its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(u64);

static NEXT_SHAPE_ID: AtomicU64 = AtomicU64::new(1);

impl ShapeId {
    fn next() -> Self {
        Self(NEXT_SHAPE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id value.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Transform and identity state shared by every shape.
///
/// Every mutator bumps the version counter; the counter never
/// decreases. The version, together with the transform fields, feeds
/// the sampler's cache invalidation.
#[derive(Debug, Clone)]
pub struct ShapeCore {
    id: ShapeId,
    orientation: UnitQuat,
    scale: f64,
    offset: Vector3,
    version: u64,
    dynamic: bool,
}

impl ShapeCore {
    /// Creates core state with an identity transform and a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ShapeId::next(),
            orientation: UnitQuat::identity(),
            scale: 1.0,
            offset: Vector3::zeros(),
            version: 0,
            dynamic: false,
        }
    }

    /// The shape's stable identity.
    #[must_use]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// The orientation rotating shape-local points into world space.
    #[must_use]
    pub fn orientation(&self) -> &UnitQuat {
        &self.orientation
    }

    /// The uniform scale factor. May be negative.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The world-space translation, applied after orientation and scale.
    #[must_use]
    pub fn offset(&self) -> &Vector3 {
        &self.offset
    }

    /// The current version counter.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether the shape must be recomputed on every sample.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    /// Bumps the version counter. Shape-specific mutators call this
    /// after changing a parameter.
    pub fn bump_version(&mut self) {
        self.version += 1;
    }

    pub fn set_orientation(&mut self, orientation: UnitQuat) {
        self.orientation = orientation;
        self.bump_version();
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.bump_version();
    }

    pub fn set_offset(&mut self, offset: Vector3) {
        self.offset = offset;
        self.bump_version();
    }

    pub fn set_dynamic(&mut self, dynamic: bool) {
        self.dynamic = dynamic;
        self.bump_version();
    }
}

impl Default for ShapeCore {
    fn default() -> Self {
        Self::new()
    }
}

/// Opaque render-layer context attached to a sampler. The engine stores
/// and value-copies it but never interprets it.
pub trait DrawContext: fmt::Debug + Send {
    /// Value-copies the context into a new box. Clones must never alias
    /// the source.
    fn clone_box(&self) -> Box<dyn DrawContext>;
}

impl Clone for Box<dyn DrawContext> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A parametric shape that can be sampled into a point set.
///
/// Implementations append shape-local geometry; the sampler owns the
/// world-space transform and caching. `generate_surface` falls back to
/// the outline and `generate_filled` to the surface, so curve-only
/// shapes implement a single method.
pub trait Shape: fmt::Debug + Send {
    /// Shared transform/identity state.
    fn core(&self) -> &ShapeCore;

    /// Mutable access to the shared state.
    fn core_mut(&mut self) -> &mut ShapeCore;

    /// Appends the shape's boundary or wireframe.
    fn generate_outline(&self, density: f64, out: &mut PointSet);

    /// Appends the shape's hollow shell.
    fn generate_surface(&self, density: f64, out: &mut PointSet) {
        self.generate_outline(density, out);
    }

    /// Appends the shape's solid volume.
    fn generate_filled(&self, density: f64, out: &mut PointSet) {
        self.generate_surface(density, out);
    }

    /// Hook invoked before generation. Subtypes bound to live external
    /// state resync here.
    fn before_sampling(&mut self, density: f64) {
        let _ = density;
    }

    /// Hook invoked on the raw shape-local points after generation,
    /// before the world-space transform.
    fn after_sampling(&self, points: &mut PointSet) {
        let _ = points;
    }

    /// Inverts a desired approximate point count at the given style
    /// into a particle density.
    fn density_for_count(&self, count: usize, style: SampleStyle) -> f64;

    /// Deep copy behind a trait object. The copy keeps the same
    /// [`ShapeId`] and never shares sampler caches with the source.
    fn clone_shape(&self) -> Box<dyn Shape>;

    /// Whether the shape must bypass the cache on every sample.
    fn is_dynamic(&self) -> bool {
        self.core().is_dynamic()
    }
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_shape()
    }
}

/// Density giving roughly `count` points along a feature of the given
/// length.
#[must_use]
pub(crate) fn density_from_length(length: f64, count: usize) -> f64 {
    (length / count.max(1) as f64).max(MIN_DENSITY)
}

/// Density giving roughly `count` points across a feature of the given
/// area.
#[must_use]
pub(crate) fn density_from_area(area: f64, count: usize) -> f64 {
    (area / count.max(1) as f64).sqrt().max(MIN_DENSITY)
}

/// Density giving roughly `count` points through a feature of the given
/// volume.
#[must_use]
pub(crate) fn density_from_volume(volume: f64, count: usize) -> f64 {
    (volume / count.max(1) as f64).cbrt().max(MIN_DENSITY)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = ShapeCore::new();
        let b = ShapeCore::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn clone_keeps_id() {
        let a = ShapeCore::new();
        let b = a.clone();
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn mutators_bump_version() {
        let mut core = ShapeCore::new();
        let v0 = core.version();
        core.set_scale(2.0);
        core.set_offset(Vector3::new(1.0, 0.0, 0.0));
        core.set_orientation(UnitQuat::identity());
        core.set_dynamic(true);
        assert_eq!(core.version(), v0 + 4);
    }

    #[test]
    fn inversion_floors_at_min_density() {
        assert!(density_from_length(0.0, 100) >= MIN_DENSITY);
        assert!(density_from_area(0.0, 100) >= MIN_DENSITY);
        assert!(density_from_volume(0.0, 100) >= MIN_DENSITY);
    }
}
