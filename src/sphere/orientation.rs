// Copyright (c) 2024-2026 The geodesic-path developers.

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The orientation module contains the `Orientation` type: a rotation of the
//! unit sphere represented by a unit quaternion.
//!
//! An `Orientation` either places the base point at a geographic position,
//! see `from_geo`, or carries a point of the sphere onto another, see
//! `between`. Quaternions avoid the gimbal lock of Euler angle rotations
//! and interpolate at constant angular speed, which is what makes the
//! sampled arcs in the `arc` module true geodesics rather than chord-biased
//! approximations.

extern crate nalgebra as na;
use super::Point;
use crate::geo::GeoPoint;
use crate::trig::Radians;
use crate::{is_within_tolerance, Validate};
use contracts::{debug_ensures, debug_requires};
use std::ops::Mul;

/// A rotation of the unit sphere as a unit quaternion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation(na::UnitQuaternion<f64>);

impl Validate for Orientation {
    /// Test whether an `Orientation` is valid.
    /// I.e. whether the underlying quaternion is a unit quaternion.
    fn is_valid(&self) -> bool {
        is_within_tolerance(1.0, self.0.as_ref().norm(), 12.0 * std::f64::EPSILON)
    }
}

impl Orientation {
    /// The identity rotation.
    #[must_use]
    pub fn identity() -> Self {
        Self(na::UnitQuaternion::identity())
    }

    /// Construct an `Orientation` from a rotation axis and an angle.
    /// * `axis` - the rotation axis, must not have zero length.
    /// * `angle` - the rotation angle.
    #[debug_requires(axis.norm() > 0.0)]
    #[debug_ensures(ret.is_valid())]
    #[must_use]
    pub fn from_axis_angle(axis: &Point, angle: Radians) -> Self {
        Self(na::UnitQuaternion::from_axis_angle(
            &na::Unit::new_normalize(*axis),
            angle.0,
        ))
    }

    /// Construct the `Orientation` that carries the base point to a
    /// geographic position: a rotation about the x axis by `-latitude`
    /// followed by a rotation about the y axis (through the poles) by
    /// `+longitude`. The composition order is part of the coordinate
    /// convention and matches the inverse transform in the `sphere` module.
    #[debug_ensures(ret.is_valid())]
    #[must_use]
    pub fn from_geo(value: &GeoPoint) -> Self {
        let lat = Self::from_axis_angle(&Point::new(1.0, 0.0, 0.0), Radians::from(-value.lat()));
        let lon = Self::from_axis_angle(&Point::new(0.0, 1.0, 0.0), Radians::from(value.lon()));
        lon * lat
    }

    /// The inverse of the `Orientation`.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self(self.0.inverse())
    }

    /// Calculate the `Orientation` that carries `from` to `to`, i.e. the
    /// rotation satisfying `to == relative * from`.
    #[must_use]
    pub fn relative(from: &Self, to: &Self) -> Self {
        *to * from.inverse()
    }

    /// Calculate the unique shortest arc rotation carrying point `a` onto
    /// point `b`.
    ///
    /// Identical points give the identity. Antipodal points have no unique
    /// shortest arc: any axis perpendicular to `a` rotates `a` onto `b`, so
    /// the axis is derived from a fixed helper axis to keep the result
    /// deterministic.
    #[debug_requires(a.is_valid() && b.is_valid())]
    #[debug_ensures(ret.is_valid())]
    #[must_use]
    pub fn between(a: &Point, b: &Point) -> Self {
        na::UnitQuaternion::rotation_between(a, b).map_or_else(
            || {
                let helper = if libm::fabs(a.y) < 0.9 {
                    Point::new(0.0, 1.0, 0.0)
                } else {
                    Point::new(1.0, 0.0, 0.0)
                };
                let axis = na::Unit::new_normalize(a.cross(&helper));
                Self(na::UnitQuaternion::from_axis_angle(
                    &axis,
                    std::f64::consts::PI,
                ))
            },
            Self,
        )
    }

    /// Spherical linear interpolation between the identity and the
    /// `Orientation`, at constant angular speed.
    /// * `t` - the interpolation fraction, 0.0 gives the identity and
    ///   1.0 gives the `Orientation` itself.
    #[debug_requires((0.0..=1.0).contains(&t))]
    #[debug_ensures(ret.is_valid())]
    #[must_use]
    pub fn interpolate(&self, t: f64) -> Self {
        Self(self.0.powf(t))
    }

    /// Apply the rotation to a point, returning the rotated point.
    #[must_use]
    pub fn transform(&self, point: &Point) -> Point {
        self.0.transform_vector(point)
    }

    /// The rotation angle, in the range 0 to PI.
    #[debug_ensures((0.0..=std::f64::consts::PI).contains(&ret.0))]
    #[must_use]
    pub fn angle(&self) -> Radians {
        Radians(self.0.angle())
    }
}

impl Default for Orientation {
    /// The default `Orientation` is the identity rotation.
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Orientation {
    type Output = Self;

    /// Compose a pair of `Orientations`: `a * b` applies `b` first and then
    /// `a`. Composition is not commutative.
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::{base_point, gc_distance, is_unit, to_sphere};
    use crate::trig::Degrees;

    const CALCULATION_TOLERANCE: f64 = 1e-10;

    fn points_close(a: &Point, b: &Point) -> bool {
        gc_distance(a, b).0 <= CALCULATION_TOLERANCE
    }

    #[test]
    fn test_orientation_traits() {
        let identity = Orientation::default();
        assert!(identity.is_valid());
        assert_eq!(0.0, identity.angle().0);

        let a = Orientation::from_axis_angle(
            &Point::new(0.0, 1.0, 0.0),
            Radians(std::f64::consts::FRAC_PI_3),
        );
        let a_clone = a.clone();
        assert!(a_clone == a);

        print!("Orientation: {:?}", a);
    }

    #[test]
    fn test_from_axis_angle() {
        let quarter = Orientation::from_axis_angle(
            &Point::new(0.0, 1.0, 0.0),
            Radians(std::f64::consts::FRAC_PI_2),
        );
        assert!(is_within_tolerance(
            std::f64::consts::FRAC_PI_2,
            quarter.angle().0,
            CALCULATION_TOLERANCE
        ));

        // a quarter turn about the polar axis carries the base point to 90°E
        let east = to_sphere(&GeoPoint::new(Degrees(0.0), Degrees(90.0)));
        assert!(points_close(&east, &quarter.transform(&base_point())));

        // the axis does not need to be normalised
        let scaled = Orientation::from_axis_angle(
            &Point::new(0.0, 10.0, 0.0),
            Radians(std::f64::consts::FRAC_PI_2),
        );
        assert!(points_close(&east, &scaled.transform(&base_point())));
    }

    #[test]
    fn test_composition_is_not_commutative() {
        let about_x = Orientation::from_axis_angle(
            &Point::new(1.0, 0.0, 0.0),
            Radians(std::f64::consts::FRAC_PI_2),
        );
        let about_y = Orientation::from_axis_angle(
            &Point::new(0.0, 1.0, 0.0),
            Radians(std::f64::consts::FRAC_PI_2),
        );

        let ab = (about_x * about_y).transform(&base_point());
        let ba = (about_y * about_x).transform(&base_point());
        assert!(!points_close(&ab, &ba));
    }

    #[test]
    fn test_relative_orientation() {
        let from = Orientation::from_geo(&GeoPoint::new(Degrees(51.5074), Degrees(-0.1278)));
        let to = Orientation::from_geo(&GeoPoint::new(Degrees(40.7128), Degrees(-74.006)));

        // to == relative * from
        let relative = Orientation::relative(&from, &to);
        let recombined = relative * from;
        assert!(points_close(
            &to.transform(&base_point()),
            &recombined.transform(&base_point())
        ));

        // the relative orientation of an orientation to itself is the identity
        let none = Orientation::relative(&from, &from);
        assert!(is_within_tolerance(
            0.0,
            none.angle().0,
            CALCULATION_TOLERANCE
        ));
    }

    #[test]
    fn test_between_points() {
        let london = to_sphere(&GeoPoint::new(Degrees(51.5074), Degrees(-0.1278)));
        let new_york = to_sphere(&GeoPoint::new(Degrees(40.7128), Degrees(-74.006)));

        let rotation = Orientation::between(&london, &new_york);
        assert!(rotation.is_valid());
        assert!(points_close(&new_york, &rotation.transform(&london)));

        // the shortest arc rotation angle is the great circle distance
        assert!(is_within_tolerance(
            gc_distance(&london, &new_york).0,
            rotation.angle().0,
            CALCULATION_TOLERANCE
        ));

        // identical points give the identity
        let identity = Orientation::between(&london, &london);
        assert!(is_within_tolerance(
            0.0,
            identity.angle().0,
            CALCULATION_TOLERANCE
        ));
    }

    #[test]
    fn test_between_antipodal_points() {
        let origin = base_point();
        let antipode = -origin;

        let rotation = Orientation::between(&origin, &antipode);
        assert!(rotation.is_valid());
        assert!(is_within_tolerance(
            std::f64::consts::PI,
            rotation.angle().0,
            CALCULATION_TOLERANCE
        ));
        assert!(points_close(&antipode, &rotation.transform(&origin)));

        // deterministic: the same inputs always give the same rotation
        let again = Orientation::between(&origin, &antipode);
        assert_eq!(rotation, again);

        // antipodal poles take the x axis helper instead of the polar helper
        let north_pole = Point::new(0.0, 1.0, 0.0);
        let south_pole = -north_pole;
        let polar = Orientation::between(&north_pole, &south_pole);
        assert!(points_close(&south_pole, &polar.transform(&north_pole)));
    }

    #[test]
    fn test_interpolate() {
        let origin = base_point();
        let east = to_sphere(&GeoPoint::new(Degrees(0.0), Degrees(90.0)));
        let rotation = Orientation::between(&origin, &east);

        // interpolate(0) is the identity and interpolate(1) the rotation
        assert!(points_close(
            &origin,
            &rotation.interpolate(0.0).transform(&origin)
        ));
        assert!(points_close(
            &east,
            &rotation.interpolate(1.0).transform(&origin)
        ));

        // the half way point lies at half the angular distance
        let mid = rotation.interpolate(0.5).transform(&origin);
        assert!(is_unit(&mid));
        let expected = to_sphere(&GeoPoint::new(Degrees(0.0), Degrees(45.0)));
        assert!(points_close(&expected, &mid));

        // interpolating the identity stays at the identity
        let none = Orientation::identity().interpolate(0.5);
        assert_eq!(0.0, none.angle().0);
    }
}
