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
use crate::{
    format::write_triple, Angle2, Force, Mass, Quantity, SpeedRate, Time, Velocity,
};
use std::{
    fmt,
    ops::{Add, Mul, Neg},
};

/// A rate of change of velocity: a `SpeedRate` magnitude in a direction.
/// Components are derived on read, as for `Velocity`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Acceleration {
    speed_rate: SpeedRate,
    direction: Angle2,
}

impl Acceleration {
    pub const ZERO: Acceleration = Acceleration {
        speed_rate: SpeedRate::ZERO,
        direction: Angle2::ZERO,
    };

    pub fn new(speed_rate: SpeedRate, direction: Angle2) -> Self {
        Self {
            speed_rate,
            direction,
        }
    }

    pub fn meters_per_second2(v: f64, direction: Angle2) -> Self {
        Self::new(SpeedRate::meters_per_second_per_second(v), direction)
    }

    pub fn from_components(x: SpeedRate, y: SpeedRate, z: SpeedRate) -> Self {
        let (x, y, z) = (x.f64(), y.f64(), z.f64());
        Self::new(
            SpeedRate::from_canonical((x * x + y * y + z * z).sqrt()),
            Angle2::of_components(x, y, z),
        )
    }

    pub fn speed_rate(&self) -> SpeedRate {
        self.speed_rate
    }

    pub fn direction(&self) -> Angle2 {
        self.direction
    }

    pub fn total_meters_per_second_per_second(&self) -> f64 {
        self.speed_rate.total_meters_per_second_per_second()
    }

    pub fn x(&self) -> SpeedRate {
        SpeedRate::from_canonical(self.direction.components(self.speed_rate.f64())[0])
    }

    pub fn y(&self) -> SpeedRate {
        SpeedRate::from_canonical(self.direction.components(self.speed_rate.f64())[1])
    }

    pub fn z(&self) -> SpeedRate {
        SpeedRate::from_canonical(self.direction.components(self.speed_rate.f64())[2])
    }
}

impl PartialEq for Acceleration {
    fn eq(&self, other: &Self) -> bool {
        self.x() == other.x() && self.y() == other.y() && self.z() == other.z()
    }
}

impl approx::AbsDiffEq for Acceleration {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        crate::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x().abs_diff_eq(&other.x(), epsilon)
            && self.y().abs_diff_eq(&other.y(), epsilon)
            && self.z().abs_diff_eq(&other.z(), epsilon)
    }
}

impl Neg for Acceleration {
    type Output = Acceleration;

    fn neg(self) -> Acceleration {
        Acceleration::new(-self.speed_rate, self.direction)
    }
}

impl Add<Acceleration> for Acceleration {
    type Output = Acceleration;

    fn add(self, other: Acceleration) -> Acceleration {
        Acceleration::from_components(self.x() + other.x(), self.y() + other.y(), self.z() + other.z())
    }
}

impl Mul<f64> for Acceleration {
    type Output = Acceleration;

    fn mul(self, s: f64) -> Acceleration {
        Acceleration::new(self.speed_rate * s, self.direction)
    }
}

impl Mul<Acceleration> for f64 {
    type Output = Acceleration;

    fn mul(self, a: Acceleration) -> Acceleration {
        a * self
    }
}

impl Mul<Time> for Acceleration {
    type Output = Velocity;

    fn mul(self, t: Time) -> Velocity {
        Velocity::new(self.speed_rate * t, self.direction)
    }
}

impl Mul<Acceleration> for Time {
    type Output = Velocity;

    fn mul(self, a: Acceleration) -> Velocity {
        a * self
    }
}

// Only the magnitude takes part; force is a scalar kind.
impl Mul<Acceleration> for Mass {
    type Output = Force;

    fn mul(self, a: Acceleration) -> Force {
        self * a.speed_rate
    }
}

impl Mul<Mass> for Acceleration {
    type Output = Force;

    fn mul(self, m: Mass) -> Force {
        m * self
    }
}

impl fmt::Display for Acceleration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_triple(f, &self.x(), &self.y(), &self.z())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{degrees, kilograms, seconds, Angle, Result, Speed};
    use approx::assert_abs_diff_eq;

    fn g(v: f64) -> SpeedRate {
        SpeedRate::meters_per_second_per_second(v)
    }

    #[test]
    fn test_force_uses_magnitude() -> Result<()> {
        let a = Acceleration::meters_per_second2(3.0, Angle2::ZERO);
        assert_eq!(kilograms!(2)? * a, Force::newtons(6.0));
        let tilted = Acceleration::meters_per_second2(3.0, Angle2::new(degrees!(135), degrees!(30)));
        assert_eq!(tilted * kilograms!(2)?, Force::newtons(6.0));
        Ok(())
    }

    #[test]
    fn test_velocity_from_acceleration() -> Result<()> {
        let dir = Angle2::new(degrees!(45), Angle::ZERO);
        let v = Acceleration::meters_per_second2(2.0, dir) * seconds!(5);
        assert_eq!(v.speed(), Speed::meters_per_second(10.0)?);
        assert_eq!(v.direction(), dir);
        assert_eq!(seconds!(5) * Acceleration::meters_per_second2(2.0, dir), v);
        Ok(())
    }

    #[test]
    fn test_components() {
        let a = Acceleration::from_components(g(0.0), g(-3.0), g(4.0));
        assert_abs_diff_eq!(a.speed_rate(), g(5.0), epsilon = 1e-12);
        assert_abs_diff_eq!(a.x(), g(0.0), epsilon = 1e-9);
        assert_abs_diff_eq!(a.y(), g(-3.0), epsilon = 1e-9);
        assert_abs_diff_eq!(a.z(), g(4.0), epsilon = 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Acceleration::from_components(g(1.0), g(0.0), g(0.0));
        let b = Acceleration::from_components(g(0.0), g(1.0), g(0.0));
        assert_abs_diff_eq!((a + b).speed_rate(), g(2f64.sqrt()), epsilon = 1e-12);
        assert_abs_diff_eq!(-a + a, Acceleration::ZERO, epsilon = 1e-12);
        assert_abs_diff_eq!((2.0 * a).x(), g(2.0), epsilon = 1e-12);
        assert_abs_diff_eq!((a * 2.0).x(), g(2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        let a = Acceleration::meters_per_second2(1.5, Angle2::ZERO);
        assert_eq!(a.to_string(), "(1.5[m/s2], 0[m/s2], 0[m/s2])");
    }
}
