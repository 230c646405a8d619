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
    error::{ensure_non_negative, Result},
    supports_absdiffeq, supports_canonical_display, supports_quantity_ops, supports_scalar_ops,
    Quantity,
};
use ordered_float::OrderedFloat;

const SQUARE_METERS_PER_SQUARE_KILOMETER: f64 = 1e6;
const SQUARE_METERS_PER_ACRE: f64 = 4_046.86;

/// A non-negative surface area, stored in square meters.
#[derive(Clone, Copy, Debug, Default)]
pub struct Area {
    v: OrderedFloat<f64>, // m^2
}
supports_quantity_ops!(Area, "Area", "m2");
supports_scalar_ops!(Area);
supports_absdiffeq!(Area);
supports_canonical_display!(Area);

impl Area {
    pub fn square_meters(v: f64) -> Result<Self> {
        Ok(Self {
            v: OrderedFloat(ensure_non_negative(Self::KIND, v)?),
        })
    }

    pub fn square_kilometers(v: f64) -> Result<Self> {
        Self::square_meters(v * SQUARE_METERS_PER_SQUARE_KILOMETER)
    }

    pub fn acres(v: f64) -> Result<Self> {
        Self::square_meters(v * SQUARE_METERS_PER_ACRE)
    }

    pub fn total_square_meters(self) -> f64 {
        self.v.0
    }

    pub fn total_square_kilometers(self) -> f64 {
        self.v.0 / SQUARE_METERS_PER_SQUARE_KILOMETER
    }

    pub fn total_acres(self) -> f64 {
        self.v.0 / SQUARE_METERS_PER_ACRE
    }
}

#[macro_export]
macro_rules! square_meters {
    ($num:expr) => {
        $crate::Area::square_meters($num as f64)
    };
}
