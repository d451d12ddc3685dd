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

//! The trig module contains the `Degrees` and `Radians` newtypes and their
//! associated conversion and validation functions.
//!
//! Angles are carried in `Degrees` at the geographic boundaries of the
//! library and converted to `Radians` for the rotation calculations.

#![allow(clippy::float_cmp)]

use crate::Validate;
use serde::{Deserialize, Serialize};
use std::convert::From;
use std::ops::Neg;

/// The conversion factor from Degrees to Radians.
pub const DEG2RAD: f64 = std::f64::consts::PI / 180.0;

/// The Degrees newtype an f64.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Degrees(pub f64);

/// The Radians newtype an f64.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Radians(pub f64);

impl Degrees {
    /// Test whether a value is a valid latitude.
    /// I.e. whether it lies in the range: -90.0 <= value <= 90.0
    #[must_use]
    pub fn is_latitude(value: f64) -> bool {
        (-90.0..=90.0).contains(&value)
    }

    /// Test whether a value is a valid longitude.
    /// I.e. whether it lies in the range: -180.0 <= value <= 180.0
    #[must_use]
    pub fn is_longitude(value: f64) -> bool {
        (-180.0..=180.0).contains(&value)
    }

    /// Normalise a Degrees value into the range: -180.0 < value <= 180.0
    /// # Examples
    /// ```
    /// use geodesic_path::trig::Degrees;
    ///
    /// assert_eq!(0.0, Degrees(-360.0).normalise().0);
    /// assert_eq!(180.0, Degrees(-180.0).normalise().0);
    /// assert_eq!(180.0, Degrees(180.0).normalise().0);
    /// assert_eq!(0.0, Degrees(360.0).normalise().0);
    /// ```
    #[must_use]
    pub fn normalise(&self) -> Self {
        if self.0 <= -180.0 {
            Self(self.0 + 360.0)
        } else if self.0 <= 180.0 {
            *self
        } else {
            Self(self.0 - 360.0)
        }
    }

    /// Test whether a Degrees value is a valid latitude.
    /// I.e. whether it lies in the range: -90.0 <= value <= 90.0
    /// # Examples
    /// ```
    /// use geodesic_path::trig::Degrees;
    ///
    /// assert!(!Degrees(-90.0 * (1.0 + std::f64::EPSILON)).is_valid_latitude());
    /// assert!(Degrees(-90.0).is_valid_latitude());
    /// assert!(Degrees(90.0).is_valid_latitude());
    /// assert!(!(Degrees(90.0 * (1.0 + std::f64::EPSILON)).is_valid_latitude()));
    /// ```
    #[must_use]
    pub fn is_valid_latitude(&self) -> bool {
        Self::is_latitude(self.0)
    }
}

impl Validate for Degrees {
    /// Test whether a Degrees is valid.
    /// I.e. whether it lies in the range: -180.0 <= value <= 180.0
    /// # Examples
    /// ```
    /// use geodesic_path::trig::Degrees;
    /// use geodesic_path::Validate;
    ///
    /// assert!(!Degrees(-180.0 * (1.0 + std::f64::EPSILON)).is_valid());
    /// assert!(Degrees(-180.0).is_valid());
    /// assert!(Degrees(180.0).is_valid());
    /// assert!(!(Degrees(180.0 * (1.0 + std::f64::EPSILON)).is_valid()));
    /// ```
    fn is_valid(&self) -> bool {
        Self::is_longitude(self.0)
    }
}

impl Neg for Degrees {
    type Output = Self;

    /// An implementation of Neg for Degrees, i.e. -angle.
    /// # Examples
    /// ```
    /// use geodesic_path::trig::Degrees;
    ///
    /// let angle_45 = Degrees(45.0);
    /// let result_m45 = -angle_45;
    /// assert_eq!(Degrees(-45.0), result_m45);
    /// ```
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<Radians> for Degrees {
    /// Construct an angle in Degrees from an angle in Radians.
    /// # Examples
    /// ```
    /// use geodesic_path::trig::{Degrees, Radians};
    ///
    /// let arg = Radians(std::f64::consts::FRAC_PI_2);
    /// let answer = Degrees::from(arg);
    /// assert_eq!(90.0, answer.0);
    /// ```
    fn from(a: Radians) -> Self {
        Self(a.0.to_degrees())
    }
}

impl Validate for Radians {
    /// Test whether a Radians is valid.
    /// I.e. whether it lies in the range: -PI <= value <= PI
    fn is_valid(&self) -> bool {
        (-std::f64::consts::PI..=std::f64::consts::PI).contains(&self.0)
    }
}

impl Neg for Radians {
    type Output = Self;

    /// An implementation of Neg for Radians, i.e. -angle.
    /// # Examples
    /// ```
    /// use geodesic_path::trig::Radians;
    ///
    /// let angle_45 = Radians(std::f64::consts::FRAC_PI_4);
    /// let result_m45 = -angle_45;
    /// assert_eq!(Radians(-std::f64::consts::FRAC_PI_4), result_m45);
    /// ```
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<Degrees> for Radians {
    /// Construct an angle in Radians from an angle in Degrees.
    /// # Examples
    /// ```
    /// use geodesic_path::trig::{Degrees, Radians};
    ///
    /// let arg = Degrees(-90.0);
    /// let answer = Radians::from(arg);
    /// assert_eq!(-std::f64::consts::FRAC_PI_2, answer.0);
    /// ```
    fn from(a: Degrees) -> Self {
        Self(a.0.to_radians())
    }
}
