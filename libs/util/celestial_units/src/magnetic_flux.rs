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

const MAXWELLS_PER_WEBER: f64 = 1e8;

#[derive(Clone, Copy, Debug, Default)]
pub struct MagneticFlux {
    v: OrderedFloat<f64>, // webers
}
supports_quantity_ops!(MagneticFlux, "MagneticFlux", "Wb");
supports_scalar_ops!(MagneticFlux);
supports_absdiffeq!(MagneticFlux);
supports_canonical_display!(MagneticFlux);

impl MagneticFlux {
    pub fn webers(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    pub fn maxwells(v: f64) -> Self {
        Self::webers(v / MAXWELLS_PER_WEBER)
    }

    pub fn total_webers(self) -> f64 {
        self.v.0
    }

    pub fn total_maxwells(self) -> f64 {
        self.v.0 * MAXWELLS_PER_WEBER
    }
}
