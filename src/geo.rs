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

//! The geo module contains the `GeoPoint` type for representing positions
//! on the surface of a sphere as geographic coordinates in degrees.
//!
//! A `GeoPoint` holds its coordinates in **latitude, longitude** order, the
//! order in which city coordinates are normally written in configuration.
//! The rendering boundary uses the opposite, longitude-then-latitude order,
//! see the `path` module.

use crate::trig::Degrees;
use crate::Validate;
use contracts::{debug_invariant, debug_requires};
use serde::{Deserialize, Serialize};

/// A position as a latitude and longitude pair of `Degrees`.
///
/// Serialized as a `(latitude, longitude)` pair and validated on
/// deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct GeoPoint {
    lat: Degrees,
    lon: Degrees,
}

impl Validate for GeoPoint {
    /// Test whether a `GeoPoint` is valid.
    /// I.e. whether the latitude lies in the range: -90.0 <= value <= 90.0
    /// and the longitude lies in the range: -180.0 <= value <= 180.0
    fn is_valid(&self) -> bool {
        self.lat.is_valid_latitude() && self.lon.is_valid()
    }
}

#[debug_invariant(self.is_valid())]
impl GeoPoint {
    #[debug_requires(lat.is_valid_latitude() && lon.is_valid())]
    #[must_use]
    pub fn new(lat: Degrees, lon: Degrees) -> Self {
        Self { lat, lon }
    }

    pub fn lat(&self) -> Degrees {
        self.lat
    }

    pub fn lon(&self) -> Degrees {
        self.lon
    }
}

impl TryFrom<(f64, f64)> for GeoPoint {
    type Error = &'static str;

    /// Attempt to convert a pair of f64 values in latitude, longitude order.
    /// # Examples
    /// ```
    /// use geodesic_path::geo::GeoPoint;
    ///
    /// let london = GeoPoint::try_from((51.5074, -0.1278)).unwrap();
    /// assert_eq!(51.5074, london.lat().0);
    ///
    /// assert!(GeoPoint::try_from((90.0001, 0.0)).is_err());
    /// assert!(GeoPoint::try_from((0.0, -180.0001)).is_err());
    /// ```
    fn try_from(values: (f64, f64)) -> Result<Self, Self::Error> {
        if !Degrees::is_latitude(values.0) {
            Err("latitude invalid")
        } else if !Degrees::is_longitude(values.1) {
            Err("longitude invalid")
        } else {
            Ok(Self::new(Degrees(values.0), Degrees(values.1)))
        }
    }
}

impl From<GeoPoint> for (f64, f64) {
    /// Convert a `GeoPoint` to a pair of f64 values in latitude, longitude
    /// order.
    fn from(value: GeoPoint) -> Self {
        (value.lat().0, value.lon().0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_traits() {
        let a = GeoPoint::new(Degrees(39.9042), Degrees(116.4074));

        let a_clone = a.clone();
        assert!(a_clone == a);
        assert!(a.is_valid());

        assert_eq!(39.9042, a.lat().0);
        assert_eq!(116.4074, a.lon().0);

        print!("GeoPoint: {:?}", a);
    }

    #[test]
    fn test_geo_point_try_from_pair() {
        let new_york = GeoPoint::try_from((40.7128, -74.006)).unwrap();
        assert_eq!(40.7128, new_york.lat().0);
        assert_eq!(-74.006, new_york.lon().0);

        // poles and the antimeridian are valid positions
        assert!(GeoPoint::try_from((90.0, 0.0)).is_ok());
        assert!(GeoPoint::try_from((-90.0, 0.0)).is_ok());
        assert!(GeoPoint::try_from((0.0, 180.0)).is_ok());
        assert!(GeoPoint::try_from((0.0, -180.0)).is_ok());

        assert_eq!(
            Err("latitude invalid"),
            GeoPoint::try_from((-90.0001, 0.0))
        );
        assert_eq!(
            Err("longitude invalid"),
            GeoPoint::try_from((0.0, 180.0001))
        );
    }

    #[test]
    fn test_geo_point_serde() {
        let beijing = GeoPoint::new(Degrees(39.9042), Degrees(116.4074));

        let serialized = serde_json::to_string(&beijing).unwrap();
        assert_eq!("[39.9042,116.4074]", serialized);

        let deserialized: GeoPoint = serde_json::from_str(&serialized).unwrap();
        assert_eq!(beijing, deserialized);

        // deserialization validates the coordinate ranges
        let result = serde_json::from_str::<GeoPoint>("[91.0,0.0]");
        assert!(result.is_err());
    }
}
