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

const KELVIN_AT_ZERO_CELSIUS: f64 = 273.15;
const RANKINE_AT_ZERO_FAHRENHEIT: f64 = 459.67;
const KELVIN_PER_PLANCK_TEMPERATURE: f64 = 1.416_833_85e32;

/// A thermodynamic temperature, stored in kelvin. Celsius and Fahrenheit
/// are the only offset units in the crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Temperature {
    v: OrderedFloat<f64>, // kelvin
}
supports_quantity_ops!(Temperature, "Temperature", "K");
supports_scalar_ops!(Temperature);
supports_absdiffeq!(Temperature);
supports_canonical_display!(Temperature);

impl Temperature {
    pub const WATER_TRIPLE_POINT: Temperature = Temperature {
        v: OrderedFloat(273.16),
    };

    pub fn kelvin(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    pub fn celsius(v: f64) -> Self {
        Self::kelvin(v + KELVIN_AT_ZERO_CELSIUS)
    }

    pub fn fahrenheit(v: f64) -> Self {
        Self::kelvin((v + RANKINE_AT_ZERO_FAHRENHEIT) * 5.0 / 9.0)
    }

    pub fn planck_temperatures(v: f64) -> Self {
        Self::kelvin(v * KELVIN_PER_PLANCK_TEMPERATURE)
    }

    pub fn total_kelvin(self) -> f64 {
        self.v.0
    }

    pub fn total_celsius(self) -> f64 {
        self.v.0 - KELVIN_AT_ZERO_CELSIUS
    }

    pub fn total_fahrenheit(self) -> f64 {
        self.total_celsius() * 9.0 / 5.0 + 32.0
    }

    pub fn total_planck_temperatures(self) -> f64 {
        self.v.0 / KELVIN_PER_PLANCK_TEMPERATURE
    }
}

#[macro_export]
macro_rules! kelvin {
    ($num:expr) => {
        $crate::Temperature::kelvin($num as f64)
    };
}

#[macro_export]
macro_rules! celsius {
    ($num:expr) => {
        $crate::Temperature::celsius($num as f64)
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_offset_scales() {
        assert_abs_diff_eq!(celsius!(100).total_kelvin(), 373.15, epsilon = 1e-9);
        assert_abs_diff_eq!(Temperature::fahrenheit(212.0).total_celsius(), 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(kelvin!(0).total_fahrenheit(), -459.67, epsilon = 1e-9);
        assert_abs_diff_eq!(Temperature::fahrenheit(-40.0).total_celsius(), -40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_planck() {
        assert_abs_diff_eq!(
            Temperature::planck_temperatures(1.0).total_planck_temperatures(),
            1.0
        );
        assert!(Temperature::planck_temperatures(1.0) > kelvin!(1e31));
        assert_eq!(Temperature::WATER_TRIPLE_POINT.to_string(), "273.16[K]");
    }
}
