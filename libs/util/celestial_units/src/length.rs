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
};
use ordered_float::OrderedFloat;
use std::fmt;

const MEGALIGHTYEARS_PER_GIGALIGHTYEAR: f64 = 1_000.0;
const KILOLIGHTYEARS_PER_MEGALIGHTYEAR: f64 = 1_000.0;
const LIGHTYEARS_PER_KILOLIGHTYEAR: f64 = 1_000.0;
const PARSECS_PER_KILOPARSEC: f64 = 1_000.0;
const LIGHTYEARS_PER_PARSEC: f64 = 3.261_56;

const KILOMETERS_PER_LIGHTYEAR: f64 = 8_703_094_972_723.2;
const KILOMETERS_PER_ASTRONOMICAL_UNIT: f64 = 1.496e8;
const KILOMETERS_PER_SOLAR_RADIUS: f64 = 6.957e5;
const KILOMETERS_PER_JUPITER_RADIUS: f64 = 71_492.0;
const METERS_PER_KILOMETER: f64 = 1_000.0;
const CENTIMETERS_PER_METER: f64 = 100.0;
const PLANCK_LENGTHS_PER_METER: f64 = 6.25e34;

/// A distance, stored in meters.
#[derive(Clone, Copy, Debug, Default)]
pub struct Length {
    v: OrderedFloat<f64>, // meters
}
supports_quantity_ops!(Length, "Length", "m");
supports_scalar_ops!(Length);
supports_absdiffeq!(Length);

impl Length {
    pub const ASTRONOMICAL_UNIT: Length = Length {
        v: OrderedFloat(KILOMETERS_PER_ASTRONOMICAL_UNIT * METERS_PER_KILOMETER),
    };
    pub const LIGHTYEAR: Length = Length {
        v: OrderedFloat(KILOMETERS_PER_LIGHTYEAR * METERS_PER_KILOMETER),
    };
    pub const SOLAR_RADIUS: Length = Length {
        v: OrderedFloat(KILOMETERS_PER_SOLAR_RADIUS * METERS_PER_KILOMETER),
    };
    pub const JUPITER_RADIUS: Length = Length {
        v: OrderedFloat(KILOMETERS_PER_JUPITER_RADIUS * METERS_PER_KILOMETER),
    };

    pub fn meters(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    pub fn centimeters(v: f64) -> Self {
        Self::meters(v / CENTIMETERS_PER_METER)
    }

    pub fn kilometers(v: f64) -> Self {
        Self::meters(v * METERS_PER_KILOMETER)
    }

    pub fn jupiter_radii(v: f64) -> Self {
        Self::kilometers(v * KILOMETERS_PER_JUPITER_RADIUS)
    }

    pub fn solar_radii(v: f64) -> Self {
        Self::kilometers(v * KILOMETERS_PER_SOLAR_RADIUS)
    }

    pub fn astronomical_units(v: f64) -> Self {
        Self::kilometers(v * KILOMETERS_PER_ASTRONOMICAL_UNIT)
    }

    pub fn lightyears(v: f64) -> Self {
        Self::kilometers(v * KILOMETERS_PER_LIGHTYEAR)
    }

    pub fn kilolightyears(v: f64) -> Self {
        Self::lightyears(v * LIGHTYEARS_PER_KILOLIGHTYEAR)
    }

    pub fn megalightyears(v: f64) -> Self {
        Self::kilolightyears(v * KILOLIGHTYEARS_PER_MEGALIGHTYEAR)
    }

    pub fn gigalightyears(v: f64) -> Self {
        Self::megalightyears(v * MEGALIGHTYEARS_PER_GIGALIGHTYEAR)
    }

    pub fn parsecs(v: f64) -> Self {
        Self::lightyears(v * LIGHTYEARS_PER_PARSEC)
    }

    pub fn kiloparsecs(v: f64) -> Self {
        Self::parsecs(v * PARSECS_PER_KILOPARSEC)
    }

    pub fn planck_lengths(v: f64) -> Self {
        Self::meters(v / PLANCK_LENGTHS_PER_METER)
    }

    pub fn total_planck_lengths(self) -> f64 {
        self.v.0 * PLANCK_LENGTHS_PER_METER
    }

    pub fn total_centimeters(self) -> f64 {
        self.v.0 * CENTIMETERS_PER_METER
    }

    pub fn total_meters(self) -> f64 {
        self.v.0
    }

    pub fn total_kilometers(self) -> f64 {
        self.v.0 / METERS_PER_KILOMETER
    }

    pub fn total_jupiter_radii(self) -> f64 {
        self.total_kilometers() / KILOMETERS_PER_JUPITER_RADIUS
    }

    pub fn total_solar_radii(self) -> f64 {
        self.total_kilometers() / KILOMETERS_PER_SOLAR_RADIUS
    }

    pub fn total_astronomical_units(self) -> f64 {
        self.total_kilometers() / KILOMETERS_PER_ASTRONOMICAL_UNIT
    }

    pub fn total_lightyears(self) -> f64 {
        self.total_kilometers() / KILOMETERS_PER_LIGHTYEAR
    }

    pub fn total_kilolightyears(self) -> f64 {
        self.total_lightyears() / LIGHTYEARS_PER_KILOLIGHTYEAR
    }

    pub fn total_megalightyears(self) -> f64 {
        self.total_kilolightyears() / KILOLIGHTYEARS_PER_MEGALIGHTYEAR
    }

    pub fn total_gigalightyears(self) -> f64 {
        self.total_megalightyears() / MEGALIGHTYEARS_PER_GIGALIGHTYEAR
    }

    pub fn total_parsecs(self) -> f64 {
        self.total_lightyears() / LIGHTYEARS_PER_PARSEC
    }

    pub fn total_kiloparsecs(self) -> f64 {
        self.total_parsecs() / PARSECS_PER_KILOPARSEC
    }
}

// Anything under a hundredth of a solar radius, or up to 10,000km, stays in
// kilometers; past that we walk up the astronomical scale.
impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.total_meters().abs() < 1.0 {
            write_scaled(f, self.total_centimeters(), "cm")
        } else if self.total_kilometers().abs() < 1.0 {
            write_scaled(f, self.total_meters(), "m")
        } else if self.total_solar_radii().abs() < 0.01 || self.total_kilometers().abs() <= 10_000.0
        {
            write_scaled(f, self.total_kilometers(), "km")
        } else if self.total_astronomical_units().abs() < 1.0 {
            write_scaled(f, self.total_solar_radii(), "Sr")
        } else if self.total_lightyears().abs() < 1.0 {
            write_scaled(f, self.total_astronomical_units(), "Au")
        } else if self.total_kilolightyears().abs() < 1.0 {
            write_scaled(f, self.total_lightyears(), "Lyr")
        } else if self.total_megalightyears().abs() < 1.0 {
            write_scaled(f, self.total_kilolightyears(), "KLyr")
        } else if self.total_gigalightyears().abs() < 1.0 {
            write_scaled(f, self.total_megalightyears(), "MLyr")
        } else {
            write_scaled(f, self.total_gigalightyears(), "GLyr")
        }
    }
}

#[macro_export]
macro_rules! centimeters {
    ($num:expr) => {
        $crate::Length::centimeters($num as f64)
    };
}

#[macro_export]
macro_rules! meters {
    ($num:expr) => {
        $crate::Length::meters($num as f64)
    };
}

#[macro_export]
macro_rules! kilometers {
    ($num:expr) => {
        $crate::Length::kilometers($num as f64)
    };
}

#[macro_export]
macro_rules! astronomical_units {
    ($num:expr) => {
        $crate::Length::astronomical_units($num as f64)
    };
}

#[macro_export]
macro_rules! lightyears {
    ($num:expr) => {
        $crate::Length::lightyears($num as f64)
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::EPSILON;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_kilometers_to_meters() {
        let km = kilometers!(5);
        assert_abs_diff_eq!(km.total_meters(), 5_000.0);
        assert_abs_diff_eq!(meters!(250).total_kilometers(), 0.25);
        assert_abs_diff_eq!(centimeters!(250).total_meters(), 2.5);
    }

    #[test]
    fn test_astronomical_chain() {
        let pc = Length::kiloparsecs(1.0);
        assert_abs_diff_eq!(pc.total_parsecs(), 1_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pc.total_lightyears(), 3_261.56, epsilon = 1e-6);
        assert_abs_diff_eq!(
            Length::gigalightyears(1.0).total_lightyears(),
            1e9,
            epsilon = 1e-3
        );
        assert_eq!(Length::astronomical_units(1.0), Length::ASTRONOMICAL_UNIT);
    }

    #[test]
    fn test_epsilon_equality() {
        assert_eq!(meters!(1), meters!(1.0 + EPSILON / 2.0));
        assert_ne!(meters!(1), meters!(1.0 + 2.0 * EPSILON));
        // Ordering does not use the tolerance.
        assert!(meters!(1) < meters!(1.0 + EPSILON / 2.0));
    }

    #[test]
    fn test_length_arithmetic() {
        assert_eq!(meters!(2) + kilometers!(1), meters!(1_002));
        assert_eq!(meters!(2) - meters!(5), meters!(-3));
        assert_eq!(-meters!(2), meters!(-2));
        assert_eq!(meters!(3) * 2.0, meters!(6));
        assert_eq!(2.0 * meters!(3), meters!(6));
        assert_eq!(meters!(3) / 2.0, meters!(1.5));
        assert_abs_diff_eq!(kilometers!(1) / meters!(250), 4.0);
        let total: Length = [meters!(1), meters!(2), meters!(3)].into_iter().sum();
        assert_eq!(total, meters!(6));
    }

    #[test]
    fn test_display_scale() {
        assert_eq!(meters!(0.5).to_string(), "50[cm]");
        assert_eq!(meters!(20).to_string(), "20[m]");
        assert_eq!(meters!(5_000).to_string(), "5[km]");
        assert_eq!(kilometers!(10_000).to_string(), "10000[km]");
        assert!(Length::solar_radii(2.0).to_string().ends_with("[Sr]"));
        assert!(Length::astronomical_units(3.0).to_string().ends_with("[Au]"));
        assert!(lightyears!(4).to_string().ends_with("[Lyr]"));
        assert!(Length::kilolightyears(20.0).to_string().ends_with("[KLyr]"));
        assert!(Length::megalightyears(2.0).to_string().ends_with("[MLyr]"));
        assert!(Length::gigalightyears(13.0).to_string().ends_with("[GLyr]"));
        assert_eq!(format!("{:.2}", meters!(-1_500)), "-1.50[km]");
    }
}
