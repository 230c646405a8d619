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
    ElectricCharge, ElectricCurrent, ElectricalConductance, Energy, Power, Time, Voltage,
};
use ordered_float::OrderedFloat;

#[derive(Clone, Copy, Debug, Default)]
pub struct ElectricalResistance {
    v: OrderedFloat<f64>, // ohms
}
supports_quantity_ops!(ElectricalResistance, "ElectricalResistance", "Ohm");
supports_scalar_ops!(ElectricalResistance);
supports_absdiffeq!(ElectricalResistance);
supports_canonical_display!(ElectricalResistance);

impl ElectricalResistance {
    pub fn ohms(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    /// P / I^2
    pub fn from_power_current(p: Power, a: ElectricCurrent) -> Self {
        Self::ohms(p.total_watts() / (a.total_amperes() * a.total_amperes()))
    }

    /// V^2 / P
    pub fn from_voltage_power(v: Voltage, p: Power) -> Self {
        Self::ohms(v.total_volts() * v.total_volts() / p.total_watts())
    }

    /// E t / Q^2
    pub fn from_energy_time_charge(e: Energy, t: Time, q: ElectricCharge) -> Self {
        Self::ohms(e.total_joules() * t.total_seconds() / (q.total_coulombs() * q.total_coulombs()))
    }

    pub fn from_energy_time_current(e: Energy, t: Time, a: ElectricCurrent) -> Self {
        Self::from_power_current(e / t, a)
    }

    pub fn total_ohms(self) -> f64 {
        self.v.0
    }

    /// The reciprocal conductance.
    pub fn siemens(self) -> ElectricalConductance {
        ElectricalConductance::siemens(1.0 / self.v.0)
    }
}

#[macro_export]
macro_rules! ohms {
    ($num:expr) => {
        $crate::ElectricalResistance::ohms($num as f64)
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{amperes, seconds};

    #[test]
    fn test_ohms_law() {
        let r = Voltage::volts(12.0) / amperes!(3);
        assert_eq!(r, ohms!(4));
        assert_eq!(amperes!(3) * r, Voltage::volts(12.0));
        assert_eq!(r * amperes!(3), Voltage::volts(12.0));
        assert_eq!(r.to_string(), "4[Ohm]");
    }

    #[test]
    fn test_derived_constructors() {
        let p = Power::watts(36.0);
        assert_eq!(ElectricalResistance::from_power_current(p, amperes!(3)), ohms!(4));
        assert_eq!(ElectricalResistance::from_voltage_power(Voltage::volts(12.0), p), ohms!(4));
        let e = Energy::joules(72.0);
        assert_eq!(
            ElectricalResistance::from_energy_time_current(e, seconds!(2), amperes!(3)),
            ohms!(4)
        );
        assert_eq!(
            ElectricalResistance::from_energy_time_charge(e, seconds!(2), ElectricCharge::coulombs(6.0)),
            ohms!(4)
        );
    }
}
