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
    Area, ElectricCharge, ElectricCurrent, ElectricalInduction, Energy, Force, Length, Mass, Power,
    Time, Voltage,
};
use ordered_float::OrderedFloat;

#[derive(Clone, Copy, Debug, Default)]
pub struct ElectricalCapacitance {
    v: OrderedFloat<f64>, // farads
}
supports_quantity_ops!(ElectricalCapacitance, "ElectricalCapacitance", "F");
supports_scalar_ops!(ElectricalCapacitance);
supports_absdiffeq!(ElectricalCapacitance);
supports_canonical_display!(ElectricalCapacitance);

// Each of the alternate constructors below is an SI identity for the farad
// written in terms of other kinds.
impl ElectricalCapacitance {
    pub fn farads(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    /// I t / V
    pub fn from_current_time_voltage(a: ElectricCurrent, t: Time, v: Voltage) -> Self {
        Self::farads(a.total_amperes() * t.total_seconds() / v.total_volts())
    }

    /// E / V^2
    pub fn from_energy_voltage(e: Energy, v: Voltage) -> Self {
        Self::farads(e.total_joules() / (v.total_volts() * v.total_volts()))
    }

    /// P t / V^2
    pub fn from_power_time_voltage(p: Power, t: Time, v: Voltage) -> Self {
        Self::farads(p.total_watts() * t.total_seconds() / (v.total_volts() * v.total_volts()))
    }

    /// Q^2 / E
    pub fn from_charge_energy(q: ElectricCharge, e: Energy) -> Self {
        Self::farads(q.total_coulombs() * q.total_coulombs() / e.total_joules())
    }

    /// Q^2 / (F l)
    pub fn from_charge_force_length(q: ElectricCharge, f: Force, l: Length) -> Self {
        Self::farads(q.total_coulombs() * q.total_coulombs() / (f.total_newtons() * l.total_meters()))
    }

    /// Q^2 t^2 / (A m)
    pub fn from_charge_time_area_mass(q: ElectricCharge, t: Time, area: Area, m: Mass) -> Self {
        let qt = q.total_coulombs() * t.total_seconds();
        Self::farads(qt * qt / (area.total_square_meters() * m.total_kilograms()))
    }

    /// I^2 t^4 / (A m)
    pub fn from_current_time_area_mass(
        a: ElectricCurrent,
        t: Time,
        area: Area,
        m: Mass,
    ) -> Self {
        Self::farads(
            a.total_amperes() * a.total_amperes() * t.total_seconds().powi(4)
                / (area.total_square_meters() * m.total_kilograms()),
        )
    }

    /// t^2 / L
    pub fn from_time_induction(t: Time, h: ElectricalInduction) -> Self {
        Self::farads(t.total_seconds() * t.total_seconds() / h.total_henrys())
    }

    pub fn total_farads(self) -> f64 {
        self.v.0
    }
}

#[macro_export]
macro_rules! farads {
    ($num:expr) => {
        $crate::ElectricalCapacitance::farads($num as f64)
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{amperes, meters, seconds, ElectricalResistance, Result};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_combinators() {
        let q = ElectricCharge::coulombs(6.0);
        let c = q / Voltage::volts(3.0);
        assert_eq!(c, farads!(2));
        assert_eq!(Voltage::volts(3.0) * c, q);
        assert_eq!(c * Voltage::volts(3.0), q);
        assert_eq!(seconds!(8) / ElectricalResistance::ohms(4.0), farads!(2));
        assert_eq!(seconds!(8) / c, ElectricalResistance::ohms(4.0));
    }

    // 2F at 3V, so Q = 6C and CV^2 = 18J.
    #[test]
    fn test_derived_constructors() -> Result<()> {
        let v = Voltage::volts(3.0);
        let q = ElectricCharge::coulombs(6.0);
        let e = Energy::joules(18.0);
        let expect = farads!(2);
        assert_eq!(ElectricalCapacitance::from_current_time_voltage(amperes!(2), seconds!(3), v), expect);
        assert_eq!(ElectricalCapacitance::from_energy_voltage(e, v), expect);
        assert_eq!(
            ElectricalCapacitance::from_power_time_voltage(Power::watts(6.0), seconds!(3), v),
            expect
        );
        assert_eq!(ElectricalCapacitance::from_charge_energy(q, e), expect);
        assert_eq!(
            ElectricalCapacitance::from_charge_force_length(q, Force::newtons(6.0), meters!(3)),
            expect
        );
        let area = Area::square_meters(9.0)?;
        let m = Mass::kilograms(2.0)?;
        assert_abs_diff_eq!(
            ElectricalCapacitance::from_charge_time_area_mass(q, seconds!(1), area, m).total_farads(),
            2.0
        );
        assert_abs_diff_eq!(
            ElectricalCapacitance::from_current_time_area_mass(amperes!(3), seconds!(2), area, m)
                .total_farads(),
            8.0
        );
        assert_eq!(
            ElectricalCapacitance::from_time_induction(seconds!(4), ElectricalInduction::henrys(8.0)),
            expect
        );
        Ok(())
    }
}
