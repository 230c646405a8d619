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
    error::{ensure_finite, Result},
    format::write_scaled,
    supports_absdiffeq, supports_quantity_ops, supports_scalar_ops, Length, Quantity, Time,
};
use ordered_float::OrderedFloat;
use std::fmt;

const METERS_PER_SECOND_PER_LIGHT: f64 = 299_792_458.0;
const METERS_PER_SECOND_PER_KILOMETER_PER_SECOND: f64 = 1_000.0;
const METERS_PER_SECOND_PER_MACH: f64 = 343.2;

/// A scalar speed, stored in meters per second.
///
/// The named constructors refuse NaN and infinities.
#[derive(Clone, Copy, Debug, Default)]
pub struct Speed {
    v: OrderedFloat<f64>, // meters per second
}
supports_quantity_ops!(Speed, "Speed", "m/s");
supports_scalar_ops!(Speed);
supports_absdiffeq!(Speed);

impl Speed {
    pub const LIGHT: Speed = Speed {
        v: OrderedFloat(METERS_PER_SECOND_PER_LIGHT),
    };
    pub const SOUND: Speed = Speed {
        v: OrderedFloat(METERS_PER_SECOND_PER_MACH),
    };

    pub fn meters_per_second(v: f64) -> Result<Self> {
        Ok(Self {
            v: OrderedFloat(ensure_finite(Self::KIND, v)?),
        })
    }

    pub fn kilometers_per_second(v: f64) -> Result<Self> {
        Self::meters_per_second(v * METERS_PER_SECOND_PER_KILOMETER_PER_SECOND)
    }

    pub fn mach(v: f64) -> Result<Self> {
        Self::meters_per_second(v * METERS_PER_SECOND_PER_MACH)
    }

    pub fn c(v: f64) -> Result<Self> {
        Self::meters_per_second(v * METERS_PER_SECOND_PER_LIGHT)
    }

    /// Distance covered over an arbitrary span, normalized to one second.
    pub fn from_length_per_time(length: Length, time: Time) -> Self {
        length / time
    }

    pub fn total_meters_per_second(self) -> f64 {
        self.v.0
    }

    pub fn total_kilometers_per_second(self) -> f64 {
        self.v.0 / METERS_PER_SECOND_PER_KILOMETER_PER_SECOND
    }

    pub fn total_mach(self) -> f64 {
        self.v.0 / METERS_PER_SECOND_PER_MACH
    }

    pub fn total_c(self) -> f64 {
        self.v.0 / METERS_PER_SECOND_PER_LIGHT
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.total_c().abs() >= 0.01 {
            write_scaled(f, self.total_c(), "c")
        } else if self.total_kilometers_per_second().abs() > 1.0 {
            write_scaled(f, self.total_kilometers_per_second(), "km/s")
        } else if self.total_mach().abs() > 1.0 {
            write_scaled(f, self.total_mach(), "mach")
        } else {
            write_scaled(f, self.total_meters_per_second(), "m/s")
        }
    }
}

#[macro_export]
macro_rules! meters_per_second {
    ($num:expr) => {
        $crate::Speed::meters_per_second($num as f64)
    };
}

#[macro_export]
macro_rules! kilometers_per_second {
    ($num:expr) => {
        $crate::Speed::kilometers_per_second($num as f64)
    };
}
