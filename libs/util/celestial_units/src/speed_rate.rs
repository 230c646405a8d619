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
    supports_absdiffeq, supports_canonical_display, supports_quantity_ops, supports_scalar_ops,
};
use ordered_float::OrderedFloat;

const STANDARD_GRAVITY: f64 = 9.806_65;

/// Rate of change of a scalar speed, stored in meters per second squared.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpeedRate {
    v: OrderedFloat<f64>, // m/s^2
}
supports_quantity_ops!(SpeedRate, "SpeedRate", "m/s2");
supports_scalar_ops!(SpeedRate);
supports_absdiffeq!(SpeedRate);
supports_canonical_display!(SpeedRate);

impl SpeedRate {
    pub const STANDARD_GRAVITY: SpeedRate = SpeedRate {
        v: OrderedFloat(STANDARD_GRAVITY),
    };

    pub fn meters_per_second_per_second(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    pub fn standard_gravities(v: f64) -> Self {
        Self::meters_per_second_per_second(v * STANDARD_GRAVITY)
    }

    pub fn total_meters_per_second_per_second(self) -> f64 {
        self.v.0
    }

    pub fn total_standard_gravities(self) -> f64 {
        self.v.0 / STANDARD_GRAVITY
    }
}

#[macro_export]
macro_rules! meters_per_second_per_second {
    ($num:expr) => {
        $crate::SpeedRate::meters_per_second_per_second($num as f64)
    };
}
