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

#[derive(Clone, Copy, Debug, Default)]
pub struct ElectricalInduction {
    v: OrderedFloat<f64>, // henrys
}
supports_quantity_ops!(ElectricalInduction, "ElectricalInduction", "H");
supports_scalar_ops!(ElectricalInduction);
supports_absdiffeq!(ElectricalInduction);
supports_canonical_display!(ElectricalInduction);

impl ElectricalInduction {
    pub fn henrys(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    pub fn total_henrys(self) -> f64 {
        self.v.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{amperes, ohms, seconds, MagneticFlux};

    #[test]
    fn test_combinators() {
        let h = ohms!(2) * seconds!(3);
        assert_eq!(h, ElectricalInduction::henrys(6.0));
        assert_eq!(h * amperes!(2), MagneticFlux::webers(12.0));
        assert_eq!(MagneticFlux::webers(12.0) / amperes!(2), h);
        assert_eq!(h.to_string(), "6[H]");
    }
}
