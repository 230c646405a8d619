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
    ElectricalResistance,
};
use ordered_float::OrderedFloat;

#[derive(Clone, Copy, Debug, Default)]
pub struct ElectricalConductance {
    v: OrderedFloat<f64>, // siemens
}
supports_quantity_ops!(ElectricalConductance, "ElectricalConductance", "S");
supports_scalar_ops!(ElectricalConductance);
supports_absdiffeq!(ElectricalConductance);
supports_canonical_display!(ElectricalConductance);

impl ElectricalConductance {
    pub fn siemens(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    pub fn total_siemens(self) -> f64 {
        self.v.0
    }

    /// The reciprocal resistance.
    pub fn ohms(self) -> ElectricalResistance {
        ElectricalResistance::ohms(1.0 / self.v.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reciprocal() {
        let g = ElectricalConductance::siemens(4.0);
        assert_eq!(g.ohms(), ElectricalResistance::ohms(0.25));
        assert_eq!(g.ohms().siemens(), g);
        assert_eq!(g.to_string(), "4[S]");
    }
}
