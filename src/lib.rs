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

//! This library computes great-circle (geodesic) paths between positions on
//! the surface of a unit sphere and converts them into polylines that can be
//! drawn on a flat equirectangular (longitude/latitude) map.
//!
//! The `geo` module holds geographic positions in degrees; the `sphere`
//! module converts them to unit vectors and samples the minor great-circle
//! arc between two such vectors using quaternion rotations; the `path`
//! module projects the samples back to `[longitude, latitude]` pairs and
//! splits the polyline wherever it crosses the ±180° antimeridian, so that
//! a straight-line renderer never draws a spurious line wrapping across the
//! whole map.
//!
//! The library uses the [contracts](https://crates.io/crates/contracts) crate
//! to implement Design By Contract [(DbC)](https://wiki.c2.com/?DesignByContract).
//! It also defines a `Validate` trait to define an `is_valid` invariant
//! function to support Design By Contract invariants.
//!
//! All types are immutable value types: every operation returns a new value,
//! so the library may be called freely from multiple threads.

pub mod geo;
pub mod path;
pub mod sphere;
pub mod trig;

use contracts::debug_requires;

/// The Validate trait.
pub trait Validate {
    /// return true if the type is valid, false otherwise.
    fn is_valid(&self) -> bool;
}

/// Check whether a pair of values are within tolerance of each other
/// * `value` the value to test
/// * `tolerance` the permitted tolerance
/// return true if value is <= tolerance
#[debug_requires(value >= 0.0)]
#[inline]
#[must_use]
pub fn is_small(value: f64, tolerance: f64) -> bool {
    value <= tolerance
}

/// Check whether a value are within tolerance of a reference value.
/// * `reference` the required value
/// * `value` the value to test
/// * `tolerance` the permitted tolerance
/// return true if abs(reference - value) is <= tolerance
#[inline]
#[must_use]
pub fn is_within_tolerance(reference: f64, value: f64, tolerance: f64) -> bool {
    is_small(libm::fabs(reference - value), tolerance)
}
