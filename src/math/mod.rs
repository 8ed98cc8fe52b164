pub mod golden;
pub mod rotation;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Unit quaternion used for shape orientation.
pub type UnitQuat = nalgebra::UnitQuaternion<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Floor for shape extents (radius, height, side length) set through
/// mutators. Keeps generators divide-by-zero-safe.
pub const MIN_EXTENT: f64 = 1e-6;

/// Floor for particle density set through mutators.
pub const MIN_DENSITY: f64 = 1e-4;
