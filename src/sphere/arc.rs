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

//! The arc module contains the `Arc` type: the minor great circle arc
//! between two points on the unit sphere, and its uniform sampler.
//!
//! An `Arc` holds the shortest arc rotation between its end points.
//! Sampling interpolates that rotation at constant angular speed and applies
//! each partial rotation to the start point, so consecutive samples are
//! equally spaced along the surface of the sphere. A naive linear
//! interpolation of latitude and longitude does not have this property and
//! draws visibly wrong curves on an equirectangular map.

use super::orientation::Orientation;
use super::{gc_distance, Point};
use crate::trig::Radians;
use crate::Validate;
use contracts::debug_requires;

/// A great circle arc between two points on the unit sphere.
#[derive(Clone, Copy, Debug)]
pub struct Arc {
    /// The start point of the arc.
    a: Point,
    /// The end point of the arc.
    b: Point,
    /// The shortest arc rotation carrying a onto b.
    rotation: Orientation,
}

impl Validate for Arc {
    /// Test whether an `Arc` is valid.
    /// I.e. whether both end points are on the unit sphere and the rotation
    /// is a unit quaternion.
    fn is_valid(&self) -> bool {
        self.a.is_valid() && self.b.is_valid() && self.rotation.is_valid()
    }
}

impl Arc {
    /// Construct an `Arc` from its start and end points.
    ///
    /// Identical points give a zero length arc; antipodal points give the
    /// deterministic fallback arc of `Orientation::between`.
    /// * `a`, `b` - the start and end points of the arc.
    #[debug_requires(a.is_valid() && b.is_valid())]
    #[debug_ensures(ret.is_valid())]
    #[must_use]
    pub fn between_points(a: &Point, b: &Point) -> Self {
        Self {
            a: *a,
            b: *b,
            rotation: Orientation::between(a, b),
        }
    }

    /// The start point of the arc.
    #[must_use]
    pub fn start(&self) -> &Point {
        &self.a
    }

    /// The end point of the arc.
    #[must_use]
    pub fn end(&self) -> &Point {
        &self.b
    }

    /// The length of the arc, in radians.
    #[must_use]
    pub fn length(&self) -> Radians {
        gc_distance(&self.a, &self.b)
    }

    /// Calculate the point at fraction `t` along the arc.
    /// * `t` - the fraction, 0.0 gives the start point and 1.0 the end point.
    #[debug_requires((0.0..=1.0).contains(&t))]
    #[debug_ensures(ret.is_valid())]
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point {
        self.rotation.interpolate(t).transform(&self.a)
    }

    /// Sample the arc at `num_points + 1` equally spaced points.
    /// * `num_points` - the number of sample intervals, must be >= 1;
    ///   larger values produce smoother rendered curves.
    ///
    /// returns the ordered sample points, from the start point to the end
    /// point inclusive, or an error if `num_points` is zero.
    pub fn sample(&self, num_points: usize) -> Result<Vec<Point>, &'static str> {
        if num_points < 1 {
            return Err("num_points must be at least 1");
        }

        #[allow(clippy::cast_precision_loss)]
        let n = num_points as f64;
        let points = (0..=num_points)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let t = i as f64 / n;
                self.point_at(t)
            })
            .collect();

        Ok(points)
    }
}
