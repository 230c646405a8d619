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

const LITERS_PER_CUBIC_METER: f64 = 1_000.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct Volume {
    v: OrderedFloat<f64>, // m^3
}
supports_quantity_ops!(Volume, "Volume", "m3");
supports_scalar_ops!(Volume);
supports_absdiffeq!(Volume);
supports_canonical_display!(Volume);

impl Volume {
    pub fn cubic_meters(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    pub fn liters(v: f64) -> Self {
        Self::cubic_meters(v / LITERS_PER_CUBIC_METER)
    }

    pub fn total_cubic_meters(self) -> f64 {
        self.v.0
    }

    pub fn total_liters(self) -> f64 {
        self.v.0 * LITERS_PER_CUBIC_METER
    }
}
