use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::math::UnitQuat;
use crate::shape::{SampleStyle, Shape};

/// The tuple of inputs whose equality decides whether a cached point
/// set can be reused. Never observable to callers; purely an
/// invalidation token.
///
/// Orientation and offset enter as hashes over their raw component
/// bits, matching the engine's exact-value point discipline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CacheState {
    style: SampleStyle,
    orientation_hash: u64,
    scale: f64,
    offset_hash: u64,
    density: f64,
    shape_version: u64,
}

fn bit_hash(values: &[f64]) -> u64 {
    let mut hasher = DefaultHasher::new();
    for value in values {
        value.to_bits().hash(&mut hasher);
    }
    hasher.finish()
}

impl CacheState {
    /// Captures the invalidation token for the given sampler fields,
    /// shape, and effective orientation.
    pub(crate) fn capture(
        style: SampleStyle,
        density: f64,
        shape: &dyn Shape,
        orientation: &UnitQuat,
    ) -> Self {
        let core = shape.core();
        let q = orientation.coords;
        let offset = core.offset();
        Self {
            style,
            orientation_hash: bit_hash(&[q.x, q.y, q.z, q.w]),
            scale: core.scale(),
            offset_hash: bit_hash(&[offset.x, offset.y, offset.z]),
            density,
            shape_version: core.version(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{rotation::axis_angle, Vector3};
    use crate::shape::Circle;

    #[test]
    fn equal_inputs_give_equal_states() {
        let circle = Circle::new(1.0);
        let q = UnitQuat::identity();
        let a = CacheState::capture(SampleStyle::Outline, 0.2, &circle, &q);
        let b = CacheState::capture(SampleStyle::Outline, 0.2, &circle, &q);
        assert_eq!(a, b);
    }

    #[test]
    fn each_input_changes_the_state() {
        let mut circle = Circle::new(1.0);
        let q = UnitQuat::identity();
        let base = CacheState::capture(SampleStyle::Outline, 0.2, &circle, &q);

        assert_ne!(
            base,
            CacheState::capture(SampleStyle::Fill, 0.2, &circle, &q)
        );
        assert_ne!(
            base,
            CacheState::capture(SampleStyle::Outline, 0.3, &circle, &q)
        );

        let tilted = axis_angle(&Vector3::x(), 0.5);
        assert_ne!(
            base,
            CacheState::capture(SampleStyle::Outline, 0.2, &circle, &tilted)
        );

        circle.core_mut().set_scale(2.0);
        assert_ne!(
            base,
            CacheState::capture(SampleStyle::Outline, 0.2, &circle, &q)
        );
    }

    #[test]
    fn version_bump_changes_the_state() {
        let mut circle = Circle::new(1.0);
        let q = UnitQuat::identity();
        let before = CacheState::capture(SampleStyle::Outline, 0.2, &circle, &q);
        circle.set_radius(1.5);
        let after = CacheState::capture(SampleStyle::Outline, 0.2, &circle, &q);
        assert_ne!(before, after);
    }
}
