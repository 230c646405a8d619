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
pub struct ElectricCurrent {
    v: OrderedFloat<f64>, // amperes
}
supports_quantity_ops!(ElectricCurrent, "ElectricCurrent", "A");
supports_scalar_ops!(ElectricCurrent);
supports_absdiffeq!(ElectricCurrent);
supports_canonical_display!(ElectricCurrent);

impl ElectricCurrent {
    pub fn amperes(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    pub fn total_amperes(self) -> f64 {
        self.v.0
    }
}

#[macro_export]
macro_rules! amperes {
    ($num:expr) => {
        $crate::ElectricCurrent::amperes($num as f64)
    };
}
