use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::math::{Point3, UnitQuat, MIN_DENSITY};
use crate::shape::{DrawContext, SampleStyle, Shape};

use super::cache::CacheState;
use super::point_set::{PointOrdering, PointSet};

/// Particle density used by a freshly constructed sampler.
pub const DEFAULT_DENSITY: f64 = 0.25;

/// The caching controller pairing a shape with its sampled point set.
///
/// A sampler is logically 1:1 with a shape instance. It owns the
/// sampling style, particle density, optional point ordering, the
/// opaque draw context, and the cached result of the last generation.
/// `points` reuses the cache whenever no effective input changed and
/// regenerates otherwise, so repeated queries against unchanged inputs
/// cost nothing.
///
/// Samplers are single-owner: every sampling call takes `&mut self`,
/// and sharing work across threads means cloning shape and sampler
/// first. A clone never shares the cache; it starts empty.
pub struct PointSampler {
    style: SampleStyle,
    density: f64,
    ordering: Option<PointOrdering>,
    draw_context: Option<Box<dyn DrawContext>>,
    cache: PointSet,
    cache_state: Option<CacheState>,
    dirty: bool,
}

impl PointSampler {
    /// Creates a sampler with OUTLINE style and the default density.
    #[must_use]
    pub fn new() -> Self {
        Self {
            style: SampleStyle::Outline,
            density: DEFAULT_DENSITY,
            ordering: None,
            draw_context: None,
            cache: PointSet::new(),
            cache_state: None,
            dirty: false,
        }
    }

    /// The current sampling style.
    #[must_use]
    pub fn style(&self) -> SampleStyle {
        self.style
    }

    /// Sets the sampling style.
    pub fn set_style(&mut self, style: SampleStyle) {
        self.style = style;
    }

    /// The current particle density.
    #[must_use]
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Sets the particle density, clamping to a small positive epsilon.
    pub fn set_density(&mut self, density: f64) {
        self.density = density.max(MIN_DENSITY);
    }

    /// The installed point ordering, if any.
    #[must_use]
    pub fn ordering(&self) -> Option<&PointOrdering> {
        self.ordering.as_ref()
    }

    /// Installs a total order for generated points. Always forces the
    /// next sample to regenerate: the comparator changes the container
    /// discipline, not just its content.
    pub fn set_ordering(&mut self, ordering: PointOrdering) {
        self.ordering = Some(ordering);
        self.dirty = true;
    }

    /// Removes the point ordering, returning to insertion order.
    pub fn clear_ordering(&mut self) {
        if self.ordering.take().is_some() {
            self.dirty = true;
        }
    }

    /// The attached draw context, if any.
    #[must_use]
    pub fn draw_context(&self) -> Option<&dyn DrawContext> {
        self.draw_context.as_deref()
    }

    /// Attaches a draw context. Stored and copied, never interpreted;
    /// does not invalidate the cache.
    pub fn set_draw_context(&mut self, context: Option<Box<dyn DrawContext>>) {
        self.draw_context = context;
    }

    /// Marks the cache stale, forcing regeneration on the next sample.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Sets the density so that sampling `shape` at the current style
    /// yields approximately `count` points.
    pub fn set_particle_count(&mut self, shape: &dyn Shape, count: usize) {
        self.set_density(shape.density_for_count(count, self.style));
    }

    /// Samples the shape with its own orientation.
    pub fn points(&mut self, shape: &mut dyn Shape) -> &PointSet {
        let orientation = *shape.core().orientation();
        self.points_oriented(shape, &orientation)
    }

    /// Samples the shape with an orientation override.
    ///
    /// Returns the cached set when the shape is not dynamic, the
    /// sampler was not explicitly invalidated, and no effective input
    /// (style, density, orientation, scale, offset, shape version)
    /// changed since the last sample. The returned reference is the
    /// cache itself; the next effective change regenerates it.
    pub fn points_oriented(&mut self, shape: &mut dyn Shape, orientation: &UnitQuat) -> &PointSet {
        let candidate = CacheState::capture(self.style, self.density, shape, orientation);
        let reusable = !self.dirty
            && !shape.is_dynamic()
            && !self.cache.is_empty()
            && self.cache_state == Some(candidate);
        if reusable {
            trace!(shape = %shape.core().id(), "cache hit");
            return &self.cache;
        }

        let mut points = match &self.ordering {
            Some(ordering) => PointSet::with_ordering(Arc::clone(ordering)),
            None => PointSet::new(),
        };

        shape.before_sampling(self.density);
        match self.style {
            SampleStyle::Outline => shape.generate_outline(self.density, &mut points),
            SampleStyle::Surface => shape.generate_surface(self.density, &mut points),
            SampleStyle::Fill => shape.generate_filled(self.density, &mut points),
        }
        shape.after_sampling(&mut points);

        let rotation = *orientation;
        let scale = shape.core().scale();
        let offset = *shape.core().offset();
        points.map_in_place(|p| {
            Point3::from(rotation.transform_vector(&p.coords) * scale + offset)
        });

        debug!(
            shape = %shape.core().id(),
            style = ?self.style,
            points = points.len(),
            "regenerated point set"
        );

        // before_sampling may mutate the shape (dynamic resync); store
        // the state the shape settled on, not the pre-hook candidate.
        self.cache_state = Some(CacheState::capture(
            self.style,
            self.density,
            shape,
            orientation,
        ));
        self.cache = points;
        self.dirty = false;
        &self.cache
    }
}

impl Default for PointSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PointSampler {
    /// Copies the configuration and draw context; the clone starts with
    /// an empty cache.
    fn clone(&self) -> Self {
        Self {
            style: self.style,
            density: self.density,
            ordering: self.ordering.clone(),
            draw_context: self.draw_context.clone(),
            cache: PointSet::new(),
            cache_state: None,
            dirty: false,
        }
    }
}

impl fmt::Debug for PointSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointSampler")
            .field("style", &self.style)
            .field("density", &self.density)
            .field("ordered", &self.ordering.is_some())
            .field("cached", &self.cache.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::math::{rotation::axis_angle, Vector3, TOLERANCE};
    use crate::sampling::PointSet;
    use crate::shape::{Circle, Shape, ShapeCore};

    fn outline_sampler(density: f64) -> PointSampler {
        let mut sampler = PointSampler::new();
        sampler.set_density(density);
        sampler
    }

    fn cache_ptr(set: &PointSet) -> *const Point3 {
        set.as_slice().as_ptr()
    }

    #[test]
    fn repeated_sampling_returns_the_same_cache() {
        let mut circle = Circle::new(2.0);
        let mut sampler = outline_sampler(0.4);
        let first = sampler.points(&mut circle).clone();
        let first_ptr = cache_ptr(sampler.points(&mut circle));
        let second = sampler.points(&mut circle);
        assert_eq!(&first, second);
        assert_eq!(first_ptr, cache_ptr(second));
    }

    #[test]
    fn circle_outline_scenario() {
        let mut circle = Circle::new(2.0);
        let mut sampler = outline_sampler(0.4);
        let points = sampler.points(&mut circle);
        assert!((28..=35).contains(&points.len()));
        for p in points {
            assert!((p.coords.norm() - 2.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn every_mutator_class_invalidates() {
        let mut circle = Circle::new(2.0);
        let mut sampler = outline_sampler(0.4);
        let mut last_ptr = cache_ptr(sampler.points(&mut circle));

        let mut expect_regenerated = |sampler: &mut PointSampler, circle: &mut Circle| {
            let ptr = cache_ptr(sampler.points(circle));
            assert_ne!(ptr, last_ptr, "expected a fresh cache");
            last_ptr = ptr;
        };

        circle.set_radius(1.5);
        expect_regenerated(&mut sampler, &mut circle);

        circle.core_mut().set_scale(2.0);
        expect_regenerated(&mut sampler, &mut circle);

        circle.core_mut().set_offset(Vector3::new(1.0, 0.0, 0.0));
        expect_regenerated(&mut sampler, &mut circle);

        circle
            .core_mut()
            .set_orientation(axis_angle(&Vector3::x(), 0.7));
        expect_regenerated(&mut sampler, &mut circle);

        sampler.set_density(0.3);
        expect_regenerated(&mut sampler, &mut circle);

        sampler.set_style(SampleStyle::Fill);
        expect_regenerated(&mut sampler, &mut circle);

        sampler.set_ordering(Arc::new(|a, b| {
            a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal)
        }));
        expect_regenerated(&mut sampler, &mut circle);

        sampler.invalidate();
        expect_regenerated(&mut sampler, &mut circle);
    }

    #[test]
    fn density_monotonicity() {
        let mut circle = Circle::new(1.0);
        let mut sampler = outline_sampler(0.5);
        let coarse = sampler.points(&mut circle).len();
        sampler.set_density(0.1);
        let fine = sampler.points(&mut circle).len();
        assert!(fine >= coarse);
    }

    #[test]
    fn transform_pipeline_order() {
        // Rotate, then scale, then translate: a unit circle scaled by 2
        // and pushed to x = 10 has all points 2 away from (10, 0, 0).
        let mut circle = Circle::new(1.0);
        circle.core_mut().set_scale(2.0);
        circle.core_mut().set_offset(Vector3::new(10.0, 0.0, 0.0));
        let mut sampler = outline_sampler(0.3);
        for p in sampler.points(&mut circle) {
            let d = (p - Point3::new(10.0, 0.0, 0.0)).norm();
            assert!((d - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn orientation_override_rotates_output() {
        let mut circle = Circle::new(1.0);
        let mut sampler = outline_sampler(0.3);
        let tilt = axis_angle(&Vector3::x(), std::f64::consts::FRAC_PI_2);
        let points = sampler.points_oriented(&mut circle, &tilt);
        // The XY ring now stands in the XZ plane.
        assert!(points.iter().all(|p| p.y.abs() < 1e-9));
        assert!(points.iter().any(|p| p.z.abs() > 0.5));
    }

    #[test]
    fn alternating_orientations_regenerate() {
        let mut circle = Circle::new(1.0);
        let mut sampler = outline_sampler(0.3);
        let identity = UnitQuat::identity();
        let tilt = axis_angle(&Vector3::x(), 0.5);
        let a = cache_ptr(sampler.points_oriented(&mut circle, &identity));
        let b = cache_ptr(sampler.points_oriented(&mut circle, &tilt));
        assert_ne!(a, b);
    }

    #[test]
    fn clone_isolation() {
        let mut original = Circle::new(1.0);
        let mut sampler = outline_sampler(0.4);
        let before = sampler.points(&mut original).clone();
        let before_ptr = cache_ptr(sampler.points(&mut original));

        let mut cloned_shape = original.clone_shape();
        let mut cloned_sampler = sampler.clone();
        cloned_sampler.set_density(0.1);
        let cloned = cloned_sampler.points(cloned_shape.as_mut());
        assert!(cloned.len() > before.len());

        // The original still returns its untouched cache.
        let after = sampler.points(&mut original);
        assert_eq!(&before, after);
        assert_eq!(before_ptr, cache_ptr(after));
    }

    #[test]
    fn cloned_sampler_starts_empty() {
        let mut circle = Circle::new(1.0);
        let mut sampler = outline_sampler(0.4);
        sampler.points(&mut circle);
        let clone = sampler.clone();
        assert!(clone.cache.is_empty());
        assert!(clone.cache_state.is_none());
    }

    #[test]
    fn ordering_sorts_the_output() {
        let mut circle = Circle::new(1.0);
        let mut sampler = outline_sampler(0.3);
        sampler.set_ordering(Arc::new(|a, b| {
            a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal)
        }));
        let points = sampler.points(&mut circle);
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let mut sorted = xs.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        assert_eq!(xs, sorted);
    }

    #[test]
    fn particle_count_round_trip() {
        let mut circle = Circle::new(1.0);
        let mut sampler = outline_sampler(0.4);
        sampler.set_particle_count(&circle, 50);
        let density = sampler.density();
        let points = sampler.points(&mut circle).len();
        assert!((45..=55).contains(&points));

        sampler.set_particle_count(&circle, 50);
        assert!((sampler.density() - density).abs() < TOLERANCE);
    }

    #[derive(Debug, Clone)]
    struct Glow {
        hue: u32,
    }

    impl DrawContext for Glow {
        fn clone_box(&self) -> Box<dyn DrawContext> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn draw_context_is_stored_without_invalidating() {
        let mut circle = Circle::new(1.0);
        let mut sampler = outline_sampler(0.4);
        let ptr = cache_ptr(sampler.points(&mut circle));

        sampler.set_draw_context(Some(Box::new(Glow { hue: 7 })));
        assert!(sampler.draw_context().is_some());
        // Attaching a context is not a cache-relevant change.
        assert_eq!(ptr, cache_ptr(sampler.points(&mut circle)));

        // The clone copies the context along with the configuration.
        let clone = sampler.clone();
        assert!(clone.draw_context().is_some());
    }

    #[derive(Debug, Clone)]
    struct Hollow {
        core: ShapeCore,
        generations: std::sync::Arc<std::sync::atomic::AtomicUsize>,
    }

    impl Shape for Hollow {
        fn core(&self) -> &ShapeCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut ShapeCore {
            &mut self.core
        }

        fn generate_outline(&self, _density: f64, _out: &mut PointSet) {
            self.generations
                .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        }

        fn density_for_count(&self, _count: usize, _style: SampleStyle) -> f64 {
            1.0
        }

        fn clone_shape(&self) -> Box<dyn Shape> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn empty_result_is_never_cached() {
        let generations = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let mut hollow = Hollow {
            core: ShapeCore::new(),
            generations: std::sync::Arc::clone(&generations),
        };
        let mut sampler = outline_sampler(0.1);
        assert!(sampler.points(&mut hollow).is_empty());
        assert!(sampler.points(&mut hollow).is_empty());
        assert_eq!(generations.load(std::sync::atomic::Ordering::Relaxed), 2);
    }

    #[derive(Debug, Clone)]
    struct Pulse {
        core: ShapeCore,
        resyncs: std::sync::Arc<std::sync::atomic::AtomicUsize>,
    }

    impl Shape for Pulse {
        fn core(&self) -> &ShapeCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut ShapeCore {
            &mut self.core
        }

        fn generate_outline(&self, _density: f64, out: &mut PointSet) {
            out.insert(Point3::new(1.0, 0.0, 0.0));
        }

        fn before_sampling(&mut self, _density: f64) {
            self.resyncs
                .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        }

        fn density_for_count(&self, _count: usize, _style: SampleStyle) -> f64 {
            1.0
        }

        fn clone_shape(&self) -> Box<dyn Shape> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn dynamic_shape_bypasses_the_cache() {
        let resyncs = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let mut pulse = Pulse {
            core: ShapeCore::new(),
            resyncs: std::sync::Arc::clone(&resyncs),
        };
        pulse.core_mut().set_dynamic(true);

        let mut sampler = outline_sampler(0.5);
        sampler.points(&mut pulse);
        sampler.points(&mut pulse);
        sampler.points(&mut pulse);
        assert_eq!(resyncs.load(std::sync::atomic::Ordering::Relaxed), 3);
    }

    #[test]
    fn static_shape_resyncs_once() {
        let resyncs = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let mut pulse = Pulse {
            core: ShapeCore::new(),
            resyncs: std::sync::Arc::clone(&resyncs),
        };
        let mut sampler = outline_sampler(0.5);
        sampler.points(&mut pulse);
        sampler.points(&mut pulse);
        assert_eq!(resyncs.load(std::sync::atomic::Ordering::Relaxed), 1);
    }
}
