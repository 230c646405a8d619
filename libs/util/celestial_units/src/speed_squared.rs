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
    Quantity, Speed,
};
use ordered_float::OrderedFloat;

/// Square of a speed, as it appears in kinetic energy and v^2 = 2as.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpeedSquared {
    v: OrderedFloat<f64>, // m^2/s^2
}
supports_quantity_ops!(SpeedSquared, "SpeedSquared", "m^2/s^2");
supports_scalar_ops!(SpeedSquared);
supports_absdiffeq!(SpeedSquared);
supports_canonical_display!(SpeedSquared);

impl SpeedSquared {
    pub fn meters_squared_per_second_squared(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    pub fn total_meters_squared_per_second_squared(self) -> f64 {
        self.v.0
    }

    /// NaN for negative values.
    pub fn sqrt(self) -> Speed {
        Speed::from_canonical(self.v.0.sqrt())
    }
}
