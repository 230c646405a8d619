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
use crate::{format::write_triple, Angle, Angle2, Length, Time, Velocity};
use nalgebra::{Vector2, Vector3};
use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// A position or displacement in space. The Cartesian components are the
/// stored representation; magnitude and direction are derived on request.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Length3 {
    x: Length,
    y: Length,
    z: Length,
}

impl Length3 {
    pub const ZERO: Length3 = Length3 {
        x: Length::ZERO,
        y: Length::ZERO,
        z: Length::ZERO,
    };

    pub fn new(x: Length, y: Length, z: Length) -> Self {
        Self { x, y, z }
    }

    pub fn from_meters(x: f64, y: f64, z: f64) -> Self {
        Self::new(Length::meters(x), Length::meters(y), Length::meters(z))
    }

    pub fn splat(v: Length) -> Self {
        Self::new(v, v, v)
    }

    pub fn from_polar(length: Length, direction: Angle2) -> Self {
        let [x, y, z] = direction.components(length.total_meters());
        Self::from_meters(x, y, z)
    }

    pub fn from_vector3_kilometers(v: &Vector3<f64>) -> Self {
        Self::new(
            Length::kilometers(v.x),
            Length::kilometers(v.y),
            Length::kilometers(v.z),
        )
    }

    pub fn x(&self) -> Length {
        self.x
    }

    pub fn y(&self) -> Length {
        self.y
    }

    pub fn z(&self) -> Length {
        self.z
    }

    pub fn length(&self) -> Length {
        let (x, y, z) = self.meters();
        Length::meters((x * x + y * y + z * z).sqrt())
    }

    pub fn direction(&self) -> Angle2 {
        let (x, y, z) = self.meters();
        Angle2::of_components(x, y, z)
    }

    /// Length of the projection onto the XY plane.
    pub fn xy_length(&self) -> Length {
        Length::meters(self.x.total_meters().hypot(self.y.total_meters()))
    }

    /// Heading of the projection onto the XY plane, with zero elevation.
    pub fn xy_direction(&self) -> Angle2 {
        let (x, y, _) = self.meters();
        let heading = if x == 0.0 && y == 0.0 { 0.0 } else { y.atan2(x) };
        Angle2::new(Angle::radians(heading), Angle::ZERO)
    }

    pub fn distance_to(&self, other: &Length3) -> Length {
        (*other - *self).length()
    }

    pub fn xy_distance_to(&self, other: &Length3) -> Length {
        (*other - *self).xy_length()
    }

    pub fn to_vector2_meters(&self) -> Vector2<f64> {
        Vector2::new(self.x.total_meters(), self.y.total_meters())
    }

    pub fn to_vector3_meters(&self) -> Vector3<f64> {
        let (x, y, z) = self.meters();
        Vector3::new(x, y, z)
    }

    pub fn to_vector3_kilometers(&self) -> Vector3<f64> {
        Vector3::new(
            self.x.total_kilometers(),
            self.y.total_kilometers(),
            self.z.total_kilometers(),
        )
    }

    fn meters(&self) -> (f64, f64, f64) {
        (
            self.x.total_meters(),
            self.y.total_meters(),
            self.z.total_meters(),
        )
    }
}

impl approx::AbsDiffEq for Length3 {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        crate::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl Add<Length3> for Length3 {
    type Output = Length3;

    fn add(self, other: Length3) -> Length3 {
        Length3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub<Length3> for Length3 {
    type Output = Length3;

    fn sub(self, other: Length3) -> Length3 {
        Length3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Neg for Length3 {
    type Output = Length3;

    fn neg(self) -> Length3 {
        Length3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Length3 {
    type Output = Length3;

    fn mul(self, s: f64) -> Length3 {
        Length3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Length3> for f64 {
    type Output = Length3;

    fn mul(self, v: Length3) -> Length3 {
        v * self
    }
}

impl Div<f64> for Length3 {
    type Output = Length3;

    fn div(self, s: f64) -> Length3 {
        Length3::new(self.x / s, self.y / s, self.z / s)
    }
}

/// Components as multiples of `unit`.
impl Div<Length> for Length3 {
    type Output = Vector3<f64>;

    fn div(self, unit: Length) -> Vector3<f64> {
        Vector3::new(self.x / unit, self.y / unit, self.z / unit)
    }
}

impl Mul<Vector3<f64>> for Length3 {
    type Output = Length3;

    fn mul(self, s: Vector3<f64>) -> Length3 {
        Length3::new(self.x * s.x, self.y * s.y, self.z * s.z)
    }
}

impl Div<Vector3<f64>> for Length3 {
    type Output = Length3;

    fn div(self, s: Vector3<f64>) -> Length3 {
        Length3::new(self.x / s.x, self.y / s.y, self.z / s.z)
    }
}

impl Div<Time> for Length3 {
    type Output = Velocity;

    fn div(self, t: Time) -> Velocity {
        Velocity::from_components(self.x / t, self.y / t, self.z / t)
    }
}

impl fmt::Display for Length3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_triple(f, &self.x, &self.y, &self.z)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{degrees, kilometers, meters, seconds, Result, Speed};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_polar_round_trip() {
        for &(x, y, z) in &[
            (3.0, 4.0, 12.0),
            (-1.0, 2.0, -3.0),
            (0.0, 0.0, 7.0),
            (0.0, 0.0, -7.0),
            (5.0, 0.0, 0.0),
            (-2.5, -0.5, 0.0),
        ] {
            let p = Length3::from_meters(x, y, z);
            let back = Length3::from_polar(p.length(), p.direction());
            assert_abs_diff_eq!(back, p, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_vertical_vector_has_zero_heading() {
        let p = Length3::from_meters(0.0, 0.0, 3.0);
        assert_eq!(p.direction().horizontal(), Angle::ZERO);
        assert_eq!(p.direction().vertical(), degrees!(90));
        assert_eq!(p.xy_direction(), Angle2::ZERO);
        assert_eq!(Length3::ZERO.direction(), Angle2::ZERO);
    }

    #[test]
    fn test_lengths_and_distances() {
        let a = Length3::from_meters(1.0, 1.0, 1.0);
        let b = Length3::from_meters(4.0, 5.0, 13.0);
        assert_eq!((b - a).length(), meters!(13));
        assert_eq!(a.distance_to(&b), meters!(13));
        assert_eq!(a.xy_distance_to(&b), meters!(5));
        assert_eq!((b - a).xy_length(), meters!(5));
    }

    #[test]
    fn test_arithmetic() {
        let a = Length3::from_meters(1.0, -2.0, 3.0);
        assert_eq!(a + a, a * 2.0);
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a - a, Length3::ZERO);
        assert_eq!(-a, Length3::from_meters(-1.0, 2.0, -3.0));
        assert_eq!(a / 2.0, Length3::from_meters(0.5, -1.0, 1.5));
        assert_eq!(Length3::splat(meters!(2)) * Vector3::new(1.0, 2.0, 3.0), Length3::from_meters(2.0, 4.0, 6.0));
        assert_eq!(Length3::splat(meters!(6)) / Vector3::new(1.0, 2.0, 3.0), Length3::from_meters(6.0, 3.0, 2.0));
        assert_eq!(a / meters!(0.5), Vector3::new(2.0, -4.0, 6.0));
    }

    #[test]
    fn test_projections() {
        let a = Length3::new(kilometers!(1), kilometers!(2), kilometers!(3));
        assert_eq!(a.to_vector2_meters(), Vector2::new(1_000.0, 2_000.0));
        assert_eq!(a.to_vector3_kilometers(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(a.to_vector3_meters(), Vector3::new(1_000.0, 2_000.0, 3_000.0));
        assert_eq!(Length3::from_vector3_kilometers(&Vector3::new(1.0, 2.0, 3.0)), a);
    }

    #[test]
    fn test_divide_by_time() -> Result<()> {
        let v = Length3::from_meters(30.0, 40.0, 0.0) / seconds!(10);
        assert_eq!(v.speed(), Speed::meters_per_second(5.0)?);
        assert_abs_diff_eq!(v.x().f64(), 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(v.y().f64(), 4.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_display() {
        let a = Length3::from_meters(0.5, 20.0, 5_000.0);
        assert_eq!(a.to_string(), "(50[cm], 20[m], 5[km])");
        assert_eq!(format!("{:.1}", a), "(50.0[cm], 20.0[m], 5.0[km])");
    }
}
