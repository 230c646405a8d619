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

const PASCALS_PER_KILOPASCAL: f64 = 1_000.0;
const KILOPASCALS_PER_MEGAPASCAL: f64 = 1_000.0;
const PASCALS_PER_BAR: f64 = 1e5;
const PASCALS_PER_ATMOSPHERE: f64 = 1.013_25e5;
const PASCALS_PER_PSI: f64 = 6.894_8e3;

#[derive(Clone, Copy, Debug, Default)]
pub struct Pressure {
    v: OrderedFloat<f64>, // pascals
}
supports_quantity_ops!(Pressure, "Pressure", "Pa");
supports_scalar_ops!(Pressure);
supports_absdiffeq!(Pressure);
supports_canonical_display!(Pressure);

impl Pressure {
    pub const STANDARD_ATMOSPHERE: Pressure = Pressure {
        v: OrderedFloat(PASCALS_PER_ATMOSPHERE),
    };

    pub fn pascals(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    pub fn kilopascals(v: f64) -> Self {
        Self::pascals(v * PASCALS_PER_KILOPASCAL)
    }

    pub fn megapascals(v: f64) -> Self {
        Self::kilopascals(v * KILOPASCALS_PER_MEGAPASCAL)
    }

    pub fn bars(v: f64) -> Self {
        Self::pascals(v * PASCALS_PER_BAR)
    }

    pub fn atmospheres(v: f64) -> Self {
        Self::pascals(v * PASCALS_PER_ATMOSPHERE)
    }

    pub fn psi(v: f64) -> Self {
        Self::pascals(v * PASCALS_PER_PSI)
    }

    pub fn total_pascals(self) -> f64 {
        self.v.0
    }

    pub fn total_kilopascals(self) -> f64 {
        self.v.0 / PASCALS_PER_KILOPASCAL
    }

    pub fn total_megapascals(self) -> f64 {
        self.total_kilopascals() / KILOPASCALS_PER_MEGAPASCAL
    }

    pub fn total_bars(self) -> f64 {
        self.v.0 / PASCALS_PER_BAR
    }

    pub fn total_atmospheres(self) -> f64 {
        self.v.0 / PASCALS_PER_ATMOSPHERE
    }

    pub fn total_psi(self) -> f64 {
        self.v.0 / PASCALS_PER_PSI
    }
}

#[macro_export]
macro_rules! pascals {
    ($num:expr) => {
        $crate::Pressure::pascals($num as f64)
    };
}
