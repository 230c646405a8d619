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
    format::write_scaled, supports_absdiffeq, supports_quantity_ops, supports_scalar_ops,
    Acceleration, ElectricCurrent, ElectricalResistance, Mass, Speed, Voltage,
};
use ordered_float::OrderedFloat;
use std::fmt;

const WATTS_PER_SOLAR_LUMINOSITY: f64 = 3.828e26;
const WATTS_PER_HORSEPOWER: f64 = 746.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct Power {
    v: OrderedFloat<f64>, // watts
}
supports_quantity_ops!(Power, "Power", "W");
supports_scalar_ops!(Power);
supports_absdiffeq!(Power);

impl Power {
    pub const SOLAR_LUMINOSITY: Power = Power {
        v: OrderedFloat(WATTS_PER_SOLAR_LUMINOSITY),
    };

    pub fn watts(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    pub fn horsepower(v: f64) -> Self {
        Self::watts(v * WATTS_PER_HORSEPOWER)
    }

    pub fn solar_luminosities(v: f64) -> Self {
        Self::watts(v * WATTS_PER_SOLAR_LUMINOSITY)
    }

    /// Power needed to keep `mass` accelerating at `accel` while moving at
    /// `speed`. Only the magnitude of the acceleration is used.
    pub fn from_mass_acceleration_speed(mass: Mass, accel: Acceleration, speed: Speed) -> Self {
        Self::watts(
            mass.total_kilograms()
                * accel.speed_rate().total_meters_per_second_per_second()
                * speed.total_meters_per_second(),
        )
    }

    /// V^2 / R
    pub fn from_voltage_resistance(voltage: Voltage, ohms: ElectricalResistance) -> Self {
        Self::watts(voltage.total_volts() * voltage.total_volts() / ohms.total_ohms())
    }

    /// I^2 R
    pub fn from_current_resistance(current: ElectricCurrent, ohms: ElectricalResistance) -> Self {
        Self::watts(current.total_amperes() * current.total_amperes() * ohms.total_ohms())
    }

    pub fn total_watts(self) -> f64 {
        self.v.0
    }

    pub fn total_horsepower(self) -> f64 {
        self.v.0 / WATTS_PER_HORSEPOWER
    }

    pub fn total_solar_luminosities(self) -> f64 {
        self.v.0 / WATTS_PER_SOLAR_LUMINOSITY
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.total_solar_luminosities().abs() < 0.0001 {
            write_scaled(f, self.total_watts(), "W")
        } else {
            write_scaled(f, self.total_solar_luminosities(), "SL")
        }
    }
}

#[macro_export]
macro_rules! watts {
    ($num:expr) => {
        $crate::Power::watts($num as f64)
    };
}
