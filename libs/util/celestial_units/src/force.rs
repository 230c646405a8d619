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

const NEWTONS_PER_KILONEWTON: f64 = 1_000.0;
const NEWTONS_PER_KILOGRAM_FORCE: f64 = 9.806_65;

#[derive(Clone, Copy, Debug, Default)]
pub struct Force {
    v: OrderedFloat<f64>, // newtons
}
supports_quantity_ops!(Force, "Force", "N");
supports_scalar_ops!(Force);
supports_absdiffeq!(Force);
supports_canonical_display!(Force);

impl Force {
    pub fn newtons(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    pub fn kilonewtons(v: f64) -> Self {
        Self::newtons(v * NEWTONS_PER_KILONEWTON)
    }

    pub fn kilograms_force(v: f64) -> Self {
        Self::newtons(v * NEWTONS_PER_KILOGRAM_FORCE)
    }

    pub fn total_newtons(self) -> f64 {
        self.v.0
    }

    pub fn total_kilonewtons(self) -> f64 {
        self.v.0 / NEWTONS_PER_KILONEWTON
    }

    pub fn total_kilograms_force(self) -> f64 {
        self.v.0 / NEWTONS_PER_KILOGRAM_FORCE
    }
}

#[macro_export]
macro_rules! newtons {
    ($num:expr) => {
        $crate::Force::newtons($num as f64)
    };
}

#[macro_export]
macro_rules! kilonewtons {
    ($num:expr) => {
        $crate::Force::kilonewtons($num as f64)
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{kilograms, Mass, Result, SpeedRate};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_units() {
        assert_abs_diff_eq!(kilonewtons!(2).total_newtons(), 2_000.0);
        assert_abs_diff_eq!(Force::kilograms_force(1.0).total_newtons(), 9.80665);
    }

    #[test]
    fn test_weight() -> Result<()> {
        let weight = kilograms!(10)? * SpeedRate::STANDARD_GRAVITY;
        assert_abs_diff_eq!(weight.total_kilograms_force(), 10.0, epsilon = 1e-9);
        assert_eq!(weight / SpeedRate::STANDARD_GRAVITY, Mass::kilograms(10.0)?);
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(newtons!(12.5).to_string(), "12.5[N]");
        assert_eq!(format!("{:.2}", kilonewtons!(1)), "1000.00[N]");
    }
}
