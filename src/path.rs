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

//! The path module converts geodesic arcs into polylines renderable on an
//! equirectangular map, splitting them at the ±180° antimeridian.
//!
//! A `PathPoint` holds its coordinates in **longitude, latitude** order, the
//! order expected by the rendering layer, the opposite of `GeoPoint`.
//!
//! On an equirectangular projection a path whose longitudes wrap around
//! ±180° would be drawn by a straight line renderer as a spurious line
//! across the whole map. `split_at_antimeridian` cuts the polyline at every
//! such wrap so each emitted `RenderablePath` can be drawn independently.

pub mod geojson;

use crate::geo::GeoPoint;
use crate::sphere::arc::Arc;
use crate::sphere::Point;
use crate::trig::DEG2RAD;
use crate::Validate;
use contracts::debug_requires;
use serde::{Deserialize, Serialize};

/// A renderable position as a longitude and latitude pair of degrees,
/// serialized as a `[longitude, latitude]` array.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathPoint(pub f64, pub f64);

impl PathPoint {
    /// The longitude of the point, in degrees.
    #[must_use]
    pub fn lon(&self) -> f64 {
        self.0
    }

    /// The latitude of the point, in degrees.
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.1
    }
}

impl From<&GeoPoint> for PathPoint {
    /// Convert a `GeoPoint` to a `PathPoint`.
    /// Note: the coordinate order swaps from latitude, longitude to
    /// **longitude, latitude** at this boundary.
    fn from(value: &GeoPoint) -> Self {
        Self(value.lon().0, value.lat().0)
    }
}

/// Stroke attributes for a rendered path.
///
/// The attributes are opaque pass-through data for the rendering layer;
/// this library never interprets them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    /// The stroke colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    /// The stroke width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

/// An ordered sequence of at least 2 `PathPoints` and the stroke attributes
/// to draw it with, renderable as a single straight line polyline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderablePath {
    /// The points of the polyline, in longitude, latitude order.
    pub points: Vec<PathPoint>,
    /// The stroke attributes, pass-through data for the renderer.
    #[serde(flatten)]
    pub style: PathStyle,
}

impl Validate for RenderablePath {
    /// Test whether a `RenderablePath` is valid.
    /// I.e. whether it has at least 2 points and no adjacent pair of points
    /// is 180° or more of longitude apart, so that it never wraps the long
    /// way around the map.
    fn is_valid(&self) -> bool {
        (1 < self.points.len())
            && self
                .points
                .windows(2)
                .all(|pair| libm::fabs(pair[1].lon() - pair[0].lon()) < 180.0)
    }
}

impl RenderablePath {
    /// Construct a `RenderablePath`
    /// * `points` - the points of the polyline.
    /// * `style` - the stroke attributes.
    #[debug_requires(1 < points.len())]
    #[must_use]
    pub fn new(points: Vec<PathPoint>, style: PathStyle) -> Self {
        Self { points, style }
    }
}

/// Determine whether an adjacent pair of path points crosses the ±180°
/// antimeridian.
///
/// Both longitudes are shifted by +180° and a crossing is a strict sign
/// change of the sine of the shifted longitudes, i.e. the points lie on
/// opposite sides of the 0°/360° wrap of the shifted values. A point
/// exactly on the boundary is not a crossing.
#[must_use]
pub fn is_antimeridian_crossing(a: &PathPoint, b: &PathPoint) -> bool {
    let shifted_a = a.lon() + 180.0;
    let shifted_b = b.lon() + 180.0;
    libm::sin(shifted_a * DEG2RAD) * libm::sin(shifted_b * DEG2RAD) < 0.0
}

/// Split a polyline at every antimeridian crossing.
/// * `points` - the points of the polyline, in longitude, latitude order.
///
/// returns the contiguous runs of points between crossings, discarding runs
/// of fewer than 2 points; N crossings produce at most N + 1 runs. A
/// polyline without crossings is returned whole, as a single run; fewer
/// than 2 input points produce no runs at all.
#[must_use]
pub fn split_at_antimeridian(points: &[PathPoint]) -> Vec<Vec<PathPoint>> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut runs = Vec::new();
    let mut run = vec![points[0]];
    for pair in points.windows(2) {
        if is_antimeridian_crossing(&pair[0], &pair[1]) {
            runs.push(std::mem::take(&mut run));
        }
        run.push(pair[1]);
    }
    runs.push(run);

    runs.retain(|run| 1 < run.len());
    runs
}

/// Calculate the renderable paths of the geodesic between two geographic
/// positions.
///
/// The positions are converted to points on the unit sphere, the minor
/// great circle arc between them is sampled at `num_points + 1` equally
/// spaced points, the samples are projected to longitude, latitude pairs
/// and the projected polyline is split at the antimeridian. Each emitted
/// path carries a copy of the stroke attributes.
/// * `from`, `to` - the start and end positions.
/// * `num_points` - the number of sample intervals, must be >= 1.
/// * `style` - the stroke attributes to attach to each path.
///
/// returns the renderable paths, or an error if `num_points` is zero.
/// # Examples
/// ```
/// use geodesic_path::geo::GeoPoint;
/// use geodesic_path::path::{geodesic_paths, PathStyle};
///
/// let london = GeoPoint::try_from((51.5074, -0.1278)).unwrap();
/// let new_york = GeoPoint::try_from((40.7128, -74.006)).unwrap();
///
/// let paths = geodesic_paths(&london, &new_york, 4, &PathStyle::default()).unwrap();
/// assert_eq!(1, paths.len());
/// assert_eq!(5, paths[0].points.len());
/// ```
pub fn geodesic_paths(
    from: &GeoPoint,
    to: &GeoPoint,
    num_points: usize,
    style: &PathStyle,
) -> Result<Vec<RenderablePath>, &'static str> {
    let arc = Arc::between_points(&Point::from(from), &Point::from(to));
    let samples = arc.sample(num_points)?;

    let points: Vec<PathPoint> = samples
        .iter()
        .map(|point| PathPoint::from(&GeoPoint::from(point)))
        .collect();

    Ok(split_at_antimeridian(&points)
        .into_iter()
        .map(|points| RenderablePath::new(points, style.clone()))
        .collect())
}
