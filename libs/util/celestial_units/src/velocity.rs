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
    error::Result, format::write_triple, Acceleration, Angle2, Length3, Quantity, Speed, Time,
};
use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// A speed in a direction. The magnitude and direction are stored; the
/// Cartesian components are recomputed on every read.
#[derive(Clone, Copy, Debug, Default)]
pub struct Velocity {
    speed: Speed,
    direction: Angle2,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity {
        speed: Speed::ZERO,
        direction: Angle2::ZERO,
    };

    pub fn new(speed: Speed, direction: Angle2) -> Self {
        Self { speed, direction }
    }

    pub fn meters_per_second(v: f64, direction: Angle2) -> Result<Self> {
        Ok(Self::new(Speed::meters_per_second(v)?, direction))
    }

    pub fn from_components(x: Speed, y: Speed, z: Speed) -> Self {
        let (x, y, z) = (x.f64(), y.f64(), z.f64());
        Self::new(
            Speed::from_canonical((x * x + y * y + z * z).sqrt()),
            Angle2::of_components(x, y, z),
        )
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn direction(&self) -> Angle2 {
        self.direction
    }

    pub fn total_meters_per_second(&self) -> f64 {
        self.speed.total_meters_per_second()
    }

    pub fn x(&self) -> Speed {
        self.component(0)
    }

    pub fn y(&self) -> Speed {
        self.component(1)
    }

    pub fn z(&self) -> Speed {
        self.component(2)
    }

    fn component(&self, axis: usize) -> Speed {
        Speed::from_canonical(self.direction.components(self.speed.f64())[axis])
    }
}

impl PartialEq for Velocity {
    fn eq(&self, other: &Self) -> bool {
        self.x() == other.x() && self.y() == other.y() && self.z() == other.z()
    }
}

impl approx::AbsDiffEq for Velocity {
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

// Sums are taken component-wise and projected back to polar form.
impl Add<Velocity> for Velocity {
    type Output = Velocity;

    fn add(self, other: Velocity) -> Velocity {
        Velocity::from_components(self.x() + other.x(), self.y() + other.y(), self.z() + other.z())
    }
}

impl Sub<Velocity> for Velocity {
    type Output = Velocity;

    fn sub(self, other: Velocity) -> Velocity {
        Velocity::from_components(self.x() - other.x(), self.y() - other.y(), self.z() - other.z())
    }
}

impl Neg for Velocity {
    type Output = Velocity;

    fn neg(self) -> Velocity {
        Velocity::new(-self.speed, self.direction)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, s: f64) -> Velocity {
        Velocity::new(self.speed * s, self.direction)
    }
}

impl Mul<Velocity> for f64 {
    type Output = Velocity;

    fn mul(self, v: Velocity) -> Velocity {
        v * self
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, s: f64) -> Velocity {
        Velocity::new(self.speed / s, self.direction)
    }
}

impl Mul<Time> for Velocity {
    type Output = Length3;

    fn mul(self, t: Time) -> Length3 {
        Length3::new(self.x() * t, self.y() * t, self.z() * t)
    }
}

impl Mul<Velocity> for Time {
    type Output = Length3;

    fn mul(self, v: Velocity) -> Length3 {
        v * self
    }
}

impl Div<Time> for Velocity {
    type Output = Acceleration;

    fn div(self, t: Time) -> Acceleration {
        Acceleration::new(self.speed / t, self.direction)
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_triple(f, &self.x(), &self.y(), &self.z())
    }
}
