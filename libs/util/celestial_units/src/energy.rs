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

const JOULES_PER_BTU: f64 = 1_055.0;
const JOULES_PER_KILOCALORIE: f64 = 4_184.0;
const ELECTRONVOLTS_PER_JOULE: f64 = 6.242e18;

#[derive(Clone, Copy, Debug, Default)]
pub struct Energy {
    v: OrderedFloat<f64>, // joules
}
supports_quantity_ops!(Energy, "Energy", "J");
supports_scalar_ops!(Energy);
supports_absdiffeq!(Energy);
supports_canonical_display!(Energy);

impl Energy {
    pub fn joules(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    pub fn btu(v: f64) -> Self {
        Self::joules(v * JOULES_PER_BTU)
    }

    pub fn kilocalories(v: f64) -> Self {
        Self::joules(v * JOULES_PER_KILOCALORIE)
    }

    pub fn electronvolts(v: f64) -> Self {
        Self::joules(v / ELECTRONVOLTS_PER_JOULE)
    }

    pub fn total_joules(self) -> f64 {
        self.v.0
    }

    pub fn total_btu(self) -> f64 {
        self.v.0 / JOULES_PER_BTU
    }

    pub fn total_kilocalories(self) -> f64 {
        self.v.0 / JOULES_PER_KILOCALORIE
    }

    pub fn total_electronvolts(self) -> f64 {
        self.v.0 * ELECTRONVOLTS_PER_JOULE
    }
}

#[macro_export]
macro_rules! joules {
    ($num:expr) => {
        $crate::Energy::joules($num as f64)
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_units() {
        assert_abs_diff_eq!(Energy::kilocalories(2.0).total_joules(), 8_368.0);
        assert_abs_diff_eq!(Energy::btu(1.0).total_kilocalories(), 1055.0 / 4184.0);
        assert_abs_diff_eq!(
            Energy::electronvolts(6.242e18).total_joules(),
            1.0,
            epsilon = 1e-12
        );
        assert_eq!(joules!(7).to_string(), "7[J]");
    }
}
