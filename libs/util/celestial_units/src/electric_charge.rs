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

const ELECTRON_CHARGES_PER_COULOMB: f64 = 6.242e18;
const PLANCK_CHARGES_PER_COULOMB: f64 = 5.332e17;

#[derive(Clone, Copy, Debug, Default)]
pub struct ElectricCharge {
    v: OrderedFloat<f64>, // coulombs
}
supports_quantity_ops!(ElectricCharge, "ElectricCharge", "C");
supports_scalar_ops!(ElectricCharge);
supports_absdiffeq!(ElectricCharge);
supports_canonical_display!(ElectricCharge);

impl ElectricCharge {
    pub fn coulombs(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    pub fn electron_charges(v: f64) -> Self {
        Self::coulombs(v / ELECTRON_CHARGES_PER_COULOMB)
    }

    pub fn planck_charges(v: f64) -> Self {
        Self::coulombs(v / PLANCK_CHARGES_PER_COULOMB)
    }

    pub fn total_coulombs(self) -> f64 {
        self.v.0
    }

    pub fn total_electron_charges(self) -> f64 {
        self.v.0 * ELECTRON_CHARGES_PER_COULOMB
    }

    pub fn total_planck_charges(self) -> f64 {
        self.v.0 * PLANCK_CHARGES_PER_COULOMB
    }
}

#[macro_export]
macro_rules! coulombs {
    ($num:expr) => {
        $crate::ElectricCharge::coulombs($num as f64)
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{seconds, ElectricCurrent, Energy, Voltage};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_units() {
        assert_abs_diff_eq!(coulombs!(2).total_electron_charges(), 1.2484e19);
        assert_abs_diff_eq!(ElectricCharge::planck_charges(5.332e17).total_coulombs(), 1.0);
    }

    #[test]
    fn test_combinators() {
        let q = ElectricCurrent::amperes(2.0) * seconds!(3);
        assert_eq!(q, coulombs!(6));
        assert_eq!(q * Voltage::volts(2.0), Energy::joules(12.0));
        assert_eq!(q.to_string(), "6[C]");
    }
}
