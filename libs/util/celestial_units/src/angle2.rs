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
use crate::{Angle, EPSILON};
use std::{f64::consts::PI, fmt};

/// A direction in space: `horizontal` is the heading in the XY plane,
/// measured from +X toward +Y, and `vertical` is the elevation above that
/// plane toward +Z.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Angle2 {
    horizontal: Angle,
    vertical: Angle,
}

impl Angle2 {
    pub const ZERO: Angle2 = Angle2 {
        horizontal: Angle::ZERO,
        vertical: Angle::ZERO,
    };

    pub fn new(horizontal: Angle, vertical: Angle) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn from_radians(horizontal: f64, vertical: f64) -> Self {
        Self::new(Angle::radians(horizontal), Angle::radians(vertical))
    }

    /// Direction of the vector `(x, y, z)`. The heading of a vector with
    /// no planar extent is zero.
    pub fn of_components(x: f64, y: f64, z: f64) -> Self {
        let horizontal = if x == 0.0 && y == 0.0 { 0.0 } else { y.atan2(x) };
        Self::from_radians(horizontal, z.atan2(x.hypot(y)))
    }

    /// Cartesian components of a vector of length `magnitude` pointing
    /// this way.
    pub fn components(&self, magnitude: f64) -> [f64; 3] {
        let (sin_h, cos_h) = self.horizontal.total_radians().sin_cos();
        let (sin_v, cos_v) = self.vertical.total_radians().sin_cos();
        [
            magnitude * cos_v * cos_h,
            magnitude * cos_v * sin_h,
            magnitude * sin_v,
        ]
    }

    pub fn horizontal(&self) -> Angle {
        self.horizontal
    }

    pub fn vertical(&self) -> Angle {
        self.vertical
    }

    /// Adds half a turn to both angles.
    pub fn invert(&self) -> Self {
        Self::new(self.horizontal.invert(), self.vertical.invert())
    }

    /// The direction pointing exactly the other way.
    pub fn opposite(&self) -> Self {
        Self::new(
            Angle::radians(self.horizontal.total_radians() + PI),
            -self.vertical,
        )
    }
}

impl approx::AbsDiffEq for Angle2 {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.horizontal.abs_diff_eq(&other.horizontal, epsilon)
            && self.vertical.abs_diff_eq(&other.vertical, epsilon)
    }
}

impl fmt::Display for Angle2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*})", p, self.horizontal, p, self.vertical),
            None => write!(f, "({}, {})", self.horizontal, self.vertical),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::degrees;
    use approx::{assert_abs_diff_eq, AbsDiffEq};

    #[test]
    fn test_invert_both() {
        let a = Angle2::new(degrees!(30), degrees!(10));
        let b = a.invert();
        assert_eq!(b.horizontal(), degrees!(210));
        assert_eq!(b.vertical(), degrees!(190));
        assert_eq!(b.invert(), a);
    }

    #[test]
    fn test_opposite_reverses_components() {
        let a = Angle2::new(degrees!(30), degrees!(10));
        let [x, y, z] = a.components(2.0);
        let [ox, oy, oz] = a.opposite().components(2.0);
        assert_abs_diff_eq!(x, -ox, epsilon = 1e-12);
        assert_abs_diff_eq!(y, -oy, epsilon = 1e-12);
        assert_abs_diff_eq!(z, -oz, epsilon = 1e-12);
    }

    #[test]
    fn test_components_round_trip() {
        let a = Angle2::of_components(1.0, 1.0, 2f64.sqrt());
        assert_abs_diff_eq!(a.horizontal(), degrees!(45), epsilon = 1e-12);
        assert_abs_diff_eq!(a.vertical(), degrees!(45), epsilon = 1e-12);
        let [x, y, z] = a.components(2.0);
        assert_abs_diff_eq!(x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(z, 2f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_components() {
        let up = Angle2::of_components(0.0, 0.0, 5.0);
        assert_eq!(up.horizontal(), Angle::ZERO);
        assert_eq!(up.vertical(), degrees!(90));
        assert!(Angle2::of_components(0.0, 0.0, 0.0).abs_diff_eq(&Angle2::default(), 0.0));
    }

    #[test]
    fn test_display() {
        let a = Angle2::new(degrees!(90), degrees!(0));
        assert_eq!(format!("{:.1}", a), "(90.0[°], 0.0[°])");
    }
}
