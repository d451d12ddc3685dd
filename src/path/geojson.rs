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

//! The `geojson` module includes conversions between renderable paths and
//! [GeoJSON](https://geojson.org/) geometry types,
//! see: [RFC7946](https://datatracker.ietf.org/doc/html/rfc7946).
//! `GeoJSON` coordinate order is **lon, lat**, the same order as
//! `PathPoint`. Note: paths split at the antimeridian map naturally onto a
//! `MultiLineString`, the representation
//! [RFC7946 §3.1.9](https://datatracker.ietf.org/doc/html/rfc7946#section-3.1.9)
//! recommends for antimeridian cutting.

use crate::path::{PathPoint, PathStyle, RenderablePath};
use crate::trig::Degrees;
use geo_types;

impl TryFrom<&geo_types::Coord> for PathPoint {
    type Error = &'static str;

    /// Attempt to convert a `GeoJSON Coord` to a `PathPoint`.
    fn try_from(item: &geo_types::Coord) -> Result<Self, Self::Error> {
        if !Degrees::is_latitude(item.y) {
            Err("latitude invalid")
        } else if !Degrees::is_longitude(item.x) {
            Err("longitude invalid")
        } else {
            Ok(Self(item.x, item.y))
        }
    }
}

impl From<&PathPoint> for geo_types::Coord {
    fn from(a: &PathPoint) -> Self {
        Self {
            x: a.lon(),
            y: a.lat(),
        }
    }
}

impl TryFrom<&geo_types::LineString> for RenderablePath {
    type Error = &'static str;

    /// Attempt to convert a `GeoJSON LineString` to a `RenderablePath`
    /// without stroke attributes. The `LineString` must have at least 2
    /// positions.
    fn try_from(values: &geo_types::LineString) -> Result<Self, Self::Error> {
        if values.0.len() < 2 {
            return Err("line string too short");
        }

        let points = values
            .0
            .iter()
            .map(PathPoint::try_from)
            .collect::<Result<Vec<PathPoint>, Self::Error>>()?;
        Ok(Self::new(points, PathStyle::default()))
    }
}

impl From<&RenderablePath> for geo_types::LineString {
    /// Convert a `RenderablePath` to a `GeoJSON LineString`, dropping the
    /// stroke attributes.
    fn from(value: &RenderablePath) -> Self {
        Self::new(value.points.iter().map(geo_types::Coord::from).collect())
    }
}

/// Convert the renderable paths of a split geodesic to a
/// `GeoJSON MultiLineString`.
#[must_use]
pub fn to_multi_line_string(paths: &[RenderablePath]) -> geo_types::MultiLineString {
    geo_types::MultiLineString::new(paths.iter().map(geo_types::LineString::from).collect())
}
