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
    error::{ensure_finite, Result, UnitError},
    format::write_scaled,
    supports_absdiffeq, supports_quantity_ops, supports_scalar_ops, EPSILON,
};
use log::trace;
use ordered_float::OrderedFloat;
use std::fmt;

const SOLAR_MASSES_PER_MILKY_WAY_MASS: f64 = 8.5e11;
const KILOGRAMS_PER_SOLAR_MASS: f64 = 1.989e30;
const KILOGRAMS_PER_JUPITER_MASS: f64 = 1.898e27;
const KILOGRAMS_PER_EARTH_MASS: f64 = 5.9742e24;
const KILOGRAMS_PER_TON: f64 = 1_000.0;
const PLANCK_MASSES_PER_KILOGRAM: f64 = 4.595e7;
const DALTONS_PER_KILOGRAM: f64 = 6.022e26;
const ELECTRON_REST_MASSES_PER_KILOGRAM: f64 = 1.098e30;

/// A non-negative amount of matter, stored in kilograms.
///
/// Named-unit constructors reject negative and non-finite input. Results of
/// arithmetic are not re-checked; use `checked_add` and `checked_sub` where
/// the sign matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mass {
    v: OrderedFloat<f64>, // kilograms
}
supports_quantity_ops!(Mass, "Mass", "kg");
supports_scalar_ops!(Mass);
supports_absdiffeq!(Mass);

impl Mass {
    pub const EARTH: Mass = Mass {
        v: OrderedFloat(KILOGRAMS_PER_EARTH_MASS),
    };
    pub const JUPITER: Mass = Mass {
        v: OrderedFloat(KILOGRAMS_PER_JUPITER_MASS),
    };
    pub const SUN: Mass = Mass {
        v: OrderedFloat(KILOGRAMS_PER_SOLAR_MASS),
    };

    /// Fails on negative input, except that negatives closer to zero than
    /// `EPSILON` are taken as zero.
    pub fn kilograms(v: f64) -> Result<Self> {
        let v = ensure_finite(<Self as crate::Quantity>::KIND, v)?;
        if v < 0.0 {
            if v > -EPSILON {
                trace!("clamping near-zero mass {} to zero", v);
                return Ok(Self::ZERO);
            }
            log::debug!("rejecting negative Mass: {}", v);
            return Err(UnitError::InvalidMagnitude {
                kind: <Self as crate::Quantity>::KIND,
                value: v,
            });
        }
        Ok(Self { v: OrderedFloat(v) })
    }

    pub fn tons(v: f64) -> Result<Self> {
        Self::kilograms(v * KILOGRAMS_PER_TON)
    }

    pub fn earth_masses(v: f64) -> Result<Self> {
        Self::kilograms(v * KILOGRAMS_PER_EARTH_MASS)
    }

    pub fn jupiter_masses(v: f64) -> Result<Self> {
        Self::kilograms(v * KILOGRAMS_PER_JUPITER_MASS)
    }

    pub fn solar_masses(v: f64) -> Result<Self> {
        Self::kilograms(v * KILOGRAMS_PER_SOLAR_MASS)
    }

    pub fn milky_way_masses(v: f64) -> Result<Self> {
        Self::solar_masses(v * SOLAR_MASSES_PER_MILKY_WAY_MASS)
    }

    pub fn planck_masses(v: f64) -> Result<Self> {
        Self::kilograms(v / PLANCK_MASSES_PER_KILOGRAM)
    }

    pub fn daltons(v: f64) -> Result<Self> {
        Self::kilograms(v / DALTONS_PER_KILOGRAM)
    }

    pub fn electron_rest_masses(v: f64) -> Result<Self> {
        Self::kilograms(v / ELECTRON_REST_MASSES_PER_KILOGRAM)
    }

    pub fn total_kilograms(self) -> f64 {
        self.v.0
    }

    pub fn total_tons(self) -> f64 {
        self.v.0 / KILOGRAMS_PER_TON
    }

    pub fn total_earth_masses(self) -> f64 {
        self.v.0 / KILOGRAMS_PER_EARTH_MASS
    }

    pub fn total_jupiter_masses(self) -> f64 {
        self.v.0 / KILOGRAMS_PER_JUPITER_MASS
    }

    pub fn total_solar_masses(self) -> f64 {
        self.v.0 / KILOGRAMS_PER_SOLAR_MASS
    }

    pub fn total_milky_way_masses(self) -> f64 {
        self.total_solar_masses() / SOLAR_MASSES_PER_MILKY_WAY_MASS
    }

    pub fn total_planck_masses(self) -> f64 {
        self.v.0 * PLANCK_MASSES_PER_KILOGRAM
    }

    pub fn total_daltons(self) -> f64 {
        self.v.0 * DALTONS_PER_KILOGRAM
    }

    pub fn total_electron_rest_masses(self) -> f64 {
        self.v.0 * ELECTRON_REST_MASSES_PER_KILOGRAM
    }

    pub fn checked_add(self, other: Mass) -> Result<Mass> {
        Self::kilograms(self.v.0 + other.v.0)
    }

    pub fn checked_sub(self, other: Mass) -> Result<Mass> {
        Self::kilograms(self.v.0 - other.v.0)
    }
}

impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.total_earth_masses().abs() < 0.001 {
            write_scaled(f, self.total_kilograms(), "kg")
        } else if self.total_solar_masses().abs() < 1.0 {
            write_scaled(f, self.total_earth_masses(), "Em")
        } else if self.total_milky_way_masses().abs() < 0.001 {
            write_scaled(f, self.total_solar_masses(), "Sm")
        } else {
            write_scaled(f, self.total_milky_way_masses(), "MWm")
        }
    }
}

#[macro_export]
macro_rules! kilograms {
    ($num:expr) => {
        $crate::Mass::kilograms($num as f64)
    };
}

#[macro_export]
macro_rules! earth_masses {
    ($num:expr) => {
        $crate::Mass::earth_masses($num as f64)
    };
}

#[macro_export]
macro_rules! solar_masses {
    ($num:expr) => {
        $crate::Mass::solar_masses($num as f64)
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_negative_clamp() -> Result<()> {
        let m = kilograms!(-1e-20)?;
        assert_eq!(m, Mass::ZERO);
        assert_eq!(m.total_kilograms(), 0.0);
        assert!(matches!(
            kilograms!(-1.0),
            Err(UnitError::InvalidMagnitude { kind: "Mass", .. })
        ));
        assert!(matches!(
            Mass::tons(f64::NAN),
            Err(UnitError::NotFinite { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_checked_arithmetic() -> Result<()> {
        let a = kilograms!(5)?;
        let b = kilograms!(3)?;
        assert_eq!(a.checked_sub(b)?, kilograms!(2)?);
        assert!(b.checked_sub(a).is_err());
        assert_eq!(a.checked_add(b)?, kilograms!(8)?);
        // Plain arithmetic is unchecked.
        assert_abs_diff_eq!((b - a).total_kilograms(), -2.0);
        Ok(())
    }

    #[test]
    fn test_astronomical_masses() -> Result<()> {
        assert_eq!(earth_masses!(1)?, Mass::EARTH);
        assert_abs_diff_eq!(Mass::SUN.total_solar_masses(), 1.0);
        assert_abs_diff_eq!(
            Mass::milky_way_masses(1.0)?.total_solar_masses(),
            8.5e11,
            epsilon = 1.0
        );
        assert_abs_diff_eq!(Mass::tons(2.5)?.total_kilograms(), 2_500.0);
        Ok(())
    }

    #[test]
    fn test_display_scale() -> Result<()> {
        assert_eq!(kilograms!(70)?.to_string(), "70[kg]");
        assert_eq!(Mass::EARTH.to_string(), "1[Em]");
        assert_eq!(format!("{:.1}", Mass::JUPITER), "317.7[Em]");
        assert_eq!(solar_masses!(2)?.to_string(), "2[Sm]");
        assert!(Mass::milky_way_masses(1.5)?.to_string().ends_with("[MWm]"));
        Ok(())
    }
}
