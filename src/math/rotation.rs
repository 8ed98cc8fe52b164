use super::{Point3, UnitQuat, Vector3, TOLERANCE};

/// Builds a rotation quaternion around an axis by an angle in radians.
///
/// A zero-length axis yields the identity rotation rather than a NaN
/// quaternion.
#[must_use]
pub fn axis_angle(axis: &Vector3, angle: f64) -> UnitQuat {
    let len = axis.norm();
    if len < TOLERANCE {
        return UnitQuat::identity();
    }
    UnitQuat::from_axis_angle(&nalgebra::Unit::new_unchecked(axis / len), angle)
}

/// Rotates a single point about the origin.
#[must_use]
pub fn rotate_point(rotation: &UnitQuat, point: &Point3) -> Point3 {
    Point3::from(rotation.transform_vector(&point.coords))
}

/// Rotates every point of a collection about the origin, in place.
pub fn rotate_points(rotation: &UnitQuat, points: &mut [Point3]) {
    for point in points {
        *point = rotate_point(rotation, point);
    }
}
