//! Procedural point-sampling geometry engine.
//!
//! Abstract parametric shapes (circles, spheres, helices, polygons,
//! stars, hearts, Bézier curves, cylinders, prisms, and composites of
//! these) are sampled into sets of 3D points at a configurable particle
//! density, transformed into world space, and cached so repeated
//! queries against unchanged inputs avoid recomputation.
//!
//! ```
//! use stipple::{PointSampler, SampleStyle};
//! use stipple::shape::Circle;
//!
//! let mut ring = Circle::new(2.0);
//! let mut sampler = PointSampler::new();
//! sampler.set_style(SampleStyle::Outline);
//! sampler.set_density(0.4);
//! let points = sampler.points(&mut ring);
//! assert!(!points.is_empty());
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod sampling;
pub mod shape;

pub use error::{Result, ShapeError, StippleError};
pub use sampling::{PointOrdering, PointSampler, PointSet};
pub use shape::{DrawContext, SampleStyle, Shape, ShapeCore, ShapeId};
