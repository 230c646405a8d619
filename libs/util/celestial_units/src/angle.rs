// This file is part of Celestial.
//
// Celestial is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Celestial is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Celestial.  If not, see <http://www.gnu.org/licenses/>.
use crate::{format::write_scaled, Quantity, Rate, Time, EPSILON};
use ordered_float::OrderedFloat;
use std::{
    f64::consts::{PI, TAU},
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

const RADIANS_PER_DEGREE: f64 = TAU / 360.0;

fn normalize(radians: f64) -> f64 {
    let r = radians.rem_euclid(TAU);
    // rem_euclid may round up to exactly TAU for tiny negative inputs.
    if r >= TAU {
        0.0
    } else {
        r + 0.0
    }
}

/// A planar angle, held in radians and always normalized into `[0, 2π)`.
///
/// Equality is circular: two angles are equal when they are within
/// `EPSILON` of each other going either way around the turn. Ordering
/// compares the normalized radians directly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Angle {
    v: OrderedFloat<f64>, // radians in [0, TAU)
}

impl Angle {
    pub const ZERO: Angle = Angle {
        v: OrderedFloat(0.0),
    };

    pub fn radians(v: f64) -> Self {
        Self {
            v: OrderedFloat(normalize(v)),
        }
    }

    pub fn degrees(v: f64) -> Self {
        Self::radians(v * RADIANS_PER_DEGREE)
    }

    pub fn total_radians(self) -> f64 {
        self.v.0
    }

    pub fn total_degrees(self) -> f64 {
        self.v.0 / RADIANS_PER_DEGREE
    }

    pub fn f64(self) -> f64 {
        self.v.0
    }

    /// Half a turn around.
    pub fn invert(self) -> Self {
        Self::radians(self.v.0 + PI)
    }

    pub fn cos(self) -> f64 {
        self.v.0.cos()
    }

    pub fn sin(self) -> f64 {
        self.v.0.sin()
    }

    pub fn tan(self) -> f64 {
        self.v.0.tan()
    }
}

impl Quantity for Angle {
    const KIND: &'static str = "Angle";
    const SYMBOL: &'static str = "rad";

    fn canonical(&self) -> f64 {
        self.v.0
    }

    fn from_canonical(v: f64) -> Self {
        Self::radians(v)
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        let d = (self.v.0 - other.v.0).abs();
        d < EPSILON || TAU - d < EPSILON
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self == other {
            Some(std::cmp::Ordering::Equal)
        } else {
            self.v.0.partial_cmp(&other.v.0)
        }
    }

    fn lt(&self, other: &Self) -> bool {
        self.v.0 < other.v.0
    }

    fn le(&self, other: &Self) -> bool {
        self.v.0 <= other.v.0
    }

    fn gt(&self, other: &Self) -> bool {
        self.v.0 > other.v.0
    }

    fn ge(&self, other: &Self) -> bool {
        self.v.0 >= other.v.0
    }
}

impl approx::AbsDiffEq for Angle {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        let d = (self.v.0 - other.v.0).abs();
        d <= epsilon || TAU - d <= epsilon
    }
}

impl Add<Angle> for Angle {
    type Output = Angle;

    fn add(self, other: Angle) -> Angle {
        Angle::radians(self.v.0 + other.v.0)
    }
}

impl Sub<Angle> for Angle {
    type Output = Angle;

    fn sub(self, other: Angle) -> Angle {
        Angle::radians(self.v.0 - other.v.0)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::radians(-self.v.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, s: f64) -> Angle {
        Angle::radians(self.v.0 * s)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;

    fn mul(self, a: Angle) -> Angle {
        a * self
    }
}

impl Div<f64> for Angle {
    type Output = Angle;

    fn div(self, s: f64) -> Angle {
        Angle::radians(self.v.0 / s)
    }
}

impl Div<Rate<Angle>> for Angle {
    type Output = Time;

    fn div(self, rate: Rate<Angle>) -> Time {
        rate.time_to_reach(self)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_scaled(f, self.total_degrees(), "°")
    }
}

#[macro_export]
macro_rules! radians {
    ($num:expr) => {
        $crate::Angle::radians($num as f64)
    };
}

#[macro_export]
macro_rules! degrees {
    ($num:expr) => {
        $crate::Angle::degrees($num as f64)
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normalization() {
        assert_abs_diff_eq!(radians!(-PI).total_radians(), PI);
        assert_abs_diff_eq!(radians!(3.0 * PI).total_radians(), PI, epsilon = 1e-12);
        assert_eq!(radians!(TAU).total_radians(), 0.0);
        assert_eq!(radians!(-1e-20).total_radians(), 0.0);
        // Inputs more than one turn below zero fully normalize.
        assert_abs_diff_eq!(radians!(-5.0 * PI).total_radians(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(degrees!(-90).total_degrees(), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn test_circular_equality() {
        assert_eq!(radians!(TAU - EPSILON / 4.0), radians!(0));
        assert_ne!(degrees!(1), degrees!(359));
        assert!(degrees!(1) < degrees!(359));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(degrees!(350) + degrees!(20), degrees!(10));
        assert_eq!(degrees!(10) - degrees!(20), degrees!(350));
        assert_eq!(-degrees!(90), degrees!(270));
        assert_eq!(degrees!(100) * 3.0, degrees!(300));
        assert_eq!(degrees!(300) / 3.0, degrees!(100));
        assert_eq!(2.0 * degrees!(200), degrees!(40));
    }

    #[test]
    fn test_invert() {
        assert_eq!(degrees!(45).invert(), degrees!(225));
        assert_eq!(degrees!(270).invert(), degrees!(90));
        assert_eq!(degrees!(90).invert().invert(), degrees!(90));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{:.1}", degrees!(-90)), "270.0[°]");
        assert_eq!(format!("{:.2}", radians!(PI)), "180.00[°]");
    }
}
