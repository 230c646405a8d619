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
    Acceleration, ElectricCharge, ElectricCurrent, Force, Length, Mass, Speed,
};
use ordered_float::OrderedFloat;

#[derive(Clone, Copy, Debug, Default)]
pub struct Voltage {
    v: OrderedFloat<f64>, // volts
}
supports_quantity_ops!(Voltage, "Voltage", "V");
supports_scalar_ops!(Voltage);
supports_absdiffeq!(Voltage);
supports_canonical_display!(Voltage);

impl Voltage {
    pub fn volts(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    /// Work per unit charge: F l / Q
    pub fn from_force_length_charge(force: Force, length: Length, charge: ElectricCharge) -> Self {
        Self::volts(force.total_newtons() * length.total_meters() / charge.total_coulombs())
    }

    /// Power per unit current: m a v / I, using the magnitude of `accel`.
    pub fn from_mass_acceleration_speed_current(
        mass: Mass,
        accel: Acceleration,
        speed: Speed,
        current: ElectricCurrent,
    ) -> Self {
        Self::volts(
            mass.total_kilograms()
                * accel.speed_rate().total_meters_per_second_per_second()
                * speed.total_meters_per_second()
                / current.total_amperes(),
        )
    }

    pub fn total_volts(self) -> f64 {
        self.v.0
    }
}

#[macro_export]
macro_rules! volts {
    ($num:expr) => {
        $crate::Voltage::volts($num as f64)
    };
}
