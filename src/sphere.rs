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

//! The sphere module contains types and functions for converting geographic
//! positions to points on the surface of a unit sphere and back.
//!
//! The coordinate convention is fixed: the reference position
//! (latitude 0°, longitude 0°) maps to the base point `(0, 0, 1)`, the
//! y axis runs through the poles and the x axis through longitude 90°E.
//! A position is reached by rotating the base point about the x axis by
//! `-latitude` and then about the y axis by `+longitude`, see the
//! `orientation` module.
//!
//! The inverse transform recovers latitude and longitude with `atan` and an
//! explicit quadrant correction. The correction constants are tied to the
//! base point convention above, so the forward and inverse transforms must
//! always be changed together.

pub mod arc;
pub mod orientation;

extern crate nalgebra as na;
use crate::geo::GeoPoint;
use crate::is_small;
use crate::trig::{Degrees, Radians};
use crate::Validate;
use contracts::{debug_ensures, debug_requires};
use orientation::Orientation;

/// A Point is a nalgebra Vector3 on the surface of the unit sphere.
pub type Point = na::Vector3<f64>;

/// The minimum length of a vector to normalize.
pub const MIN_LENGTH: f64 = 16384.0 * std::f64::EPSILON;

/// The base point of the coordinate convention: latitude 0°, longitude 0°.
#[must_use]
pub fn base_point() -> Point {
    Point::new(0.0, 0.0, 1.0)
}

/// Determine whether a Point is a unit vector.
///
/// returns true if Point is a unit vector, false otherwise.
#[must_use]
pub fn is_unit(a: &Point) -> bool {
    const MIN_POINT_SQ_LENGTH: f64 = 1.0 - 12.0 * std::f64::EPSILON;
    const MAX_POINT_SQ_LENGTH: f64 = 1.0 + 12.0 * std::f64::EPSILON;

    (MIN_POINT_SQ_LENGTH..=MAX_POINT_SQ_LENGTH).contains(&(a.norm()))
}

impl Validate for Point {
    /// Test whether a Point is valid.
    /// I.e. whether the Point is a unit vector.
    fn is_valid(&self) -> bool {
        is_unit(self)
    }
}

/// Create a Point from a geographic position by rotating the base point.
/// * `value` - the position.
///
/// returns a Point on the unit sphere.
#[debug_ensures(ret.is_valid())]
#[must_use]
pub fn to_sphere(value: &GeoPoint) -> Point {
    Orientation::from_geo(value).transform(&base_point())
}

impl From<&GeoPoint> for Point {
    /// Convert a `GeoPoint` to a Point on the unit sphere
    fn from(value: &GeoPoint) -> Self {
        to_sphere(value)
    }
}

/// Calculate the latitude of a Point: `atan(y / sqrt(x² + z²))`.
/// Valid at the poles, where `sqrt(x² + z²)` is zero and the quotient is
/// infinite.
#[debug_requires(a.is_valid())]
#[debug_ensures(ret.is_valid_latitude())]
#[must_use]
pub fn latitude(a: &Point) -> Degrees {
    let lat = libm::atan(a.y / libm::sqrt(a.x * a.x + a.z * a.z)).to_degrees();
    Degrees(lat.clamp(-90.0, 90.0))
}

/// Calculate the longitude of a Point from `atan(z / x)` with a quadrant
/// correction; `atan` alone cannot disambiguate quadrants.
/// The poles do not have a longitude; zero is returned there.
#[debug_requires(a.is_valid())]
#[debug_ensures(ret.is_valid())]
#[must_use]
pub fn longitude(a: &Point) -> Degrees {
    if is_small(libm::sqrt(a.x * a.x + a.z * a.z), MIN_LENGTH) {
        return Degrees(0.0);
    }

    let lon_delta = libm::atan(a.z / a.x).to_degrees();
    let lon = if a.x >= 0.0 {
        90.0 - lon_delta
    } else {
        -(90.0 + lon_delta)
    };
    Degrees(lon.clamp(-180.0, 180.0))
}

/// Convert a Point on the unit sphere back to a geographic position.
/// * `a` - the point.
///
/// returns the position of the point, with longitude zero at the poles.
#[debug_requires(a.is_valid())]
#[must_use]
pub fn to_geo(a: &Point) -> GeoPoint {
    GeoPoint::new(latitude(a), longitude(a))
}

impl From<&Point> for GeoPoint {
    /// Convert a Point to a `GeoPoint`
    fn from(value: &Point) -> Self {
        to_geo(value)
    }
}

/// Calculate the Great Circle distance (in radians) between two points.
#[debug_requires(a.is_valid() && b.is_valid())]
#[debug_ensures((0.0..=std::f64::consts::PI).contains(&ret.0))]
#[must_use]
pub fn gc_distance(a: &Point, b: &Point) -> Radians {
    Radians(libm::atan2(a.cross(b).norm(), a.dot(b)))
}
