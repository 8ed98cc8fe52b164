//! Golden-angle trigonometry for Fibonacci-lattice sampling.
//!
//! Sphere sampling evaluates `cos(k * GOLDEN_ANGLE)` and
//! `sin(k * GOLDEN_ANGLE)` for every lattice index `k`. The first
//! [`TABLE_LEN`] multiples are precomputed once and shared; indices past
//! the table fall back to direct computation.

use std::sync::OnceLock;

/// The golden angle in radians, `pi * (3 - sqrt(5))`.
pub const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// Number of precomputed golden-angle multiples.
pub const TABLE_LEN: usize = 4096;

static TABLE: OnceLock<Vec<(f64, f64)>> = OnceLock::new();

fn table() -> &'static [(f64, f64)] {
    TABLE.get_or_init(|| {
        (0..TABLE_LEN)
            .map(|k| {
                let angle = k as f64 * GOLDEN_ANGLE;
                (angle.cos(), angle.sin())
            })
            .collect()
    })
}

/// Returns `(cos, sin)` of the `k`-th golden-angle multiple.
#[must_use]
pub fn golden_trig(k: usize) -> (f64, f64) {
    if k < TABLE_LEN {
        table()[k]
    } else {
        let angle = k as f64 * GOLDEN_ANGLE;
        (angle.cos(), angle.sin())
    }
}
