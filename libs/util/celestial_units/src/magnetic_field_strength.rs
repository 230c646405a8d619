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
    Area, ElectricCharge, ElectricCurrent, ElectricalInduction, Force, Length, MagneticFlux, Mass,
    Time, Voltage,
};
use ordered_float::OrderedFloat;

/// Magnetic flux density, stored in teslas.
#[derive(Clone, Copy, Debug, Default)]
pub struct MagneticFieldStrength {
    v: OrderedFloat<f64>, // teslas
}
supports_quantity_ops!(MagneticFieldStrength, "MagneticFieldStrength", "T");
supports_scalar_ops!(MagneticFieldStrength);
supports_absdiffeq!(MagneticFieldStrength);
supports_canonical_display!(MagneticFieldStrength);

impl MagneticFieldStrength {
    pub fn teslas(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    /// V t / A
    pub fn from_voltage_time_area(v: Voltage, t: Time, a: Area) -> Self {
        Self::teslas(v.total_volts() * t.total_seconds() / a.total_square_meters())
    }

    /// F / (I l)
    pub fn from_force_current_length(f: Force, a: ElectricCurrent, l: Length) -> Self {
        Self::teslas(f.total_newtons() / (a.total_amperes() * l.total_meters()))
    }

    /// L I / A
    pub fn from_induction_current_area(h: ElectricalInduction, c: ElectricCurrent, a: Area) -> Self {
        Self::teslas(h.total_henrys() * c.total_amperes() / a.total_square_meters())
    }

    /// Φ / A
    pub fn from_flux_area(w: MagneticFlux, a: Area) -> Self {
        Self::teslas(w.total_webers() / a.total_square_meters())
    }

    /// m / (Q t)
    pub fn from_mass_charge_time(m: Mass, c: ElectricCharge, t: Time) -> Self {
        Self::teslas(m.total_kilograms() / (c.total_coulombs() * t.total_seconds()))
    }

    /// F t / (Q l)
    pub fn from_force_charge_time_length(f: Force, c: ElectricCharge, t: Time, l: Length) -> Self {
        Self::teslas(f.total_newtons() * t.total_seconds() / (c.total_coulombs() * l.total_meters()))
    }

    /// m / (I t^2)
    pub fn from_mass_current_time(m: Mass, a: ElectricCurrent, t: Time) -> Self {
        Self::teslas(m.total_kilograms() / (a.total_amperes() * t.total_seconds() * t.total_seconds()))
    }

    pub fn total_teslas(self) -> f64 {
        self.v.0
    }
}

#[macro_export]
macro_rules! teslas {
    ($num:expr) => {
        $crate::MagneticFieldStrength::teslas($num as f64)
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{amperes, meters, seconds, volts, Result};

    #[test]
    fn test_derived_constructors() -> Result<()> {
        let area = Area::square_meters(4.0)?;
        let m = Mass::kilograms(8.0)?;
        let q = ElectricCharge::coulombs(2.0);
        assert_eq!(
            MagneticFieldStrength::from_voltage_time_area(volts!(2), seconds!(4), area),
            teslas!(2)
        );
        assert_eq!(
            MagneticFieldStrength::from_force_current_length(Force::newtons(8.0), amperes!(2), meters!(2)),
            teslas!(2)
        );
        assert_eq!(
            MagneticFieldStrength::from_induction_current_area(
                ElectricalInduction::henrys(4.0),
                amperes!(2),
                area
            ),
            teslas!(2)
        );
        assert_eq!(
            MagneticFieldStrength::from_flux_area(MagneticFlux::webers(8.0), area),
            teslas!(2)
        );
        assert_eq!(MagneticFieldStrength::from_mass_charge_time(m, q, seconds!(2)), teslas!(2));
        assert_eq!(
            MagneticFieldStrength::from_force_charge_time_length(
                Force::newtons(4.0),
                q,
                seconds!(2),
                meters!(2)
            ),
            teslas!(2)
        );
        assert_eq!(
            MagneticFieldStrength::from_mass_current_time(m, amperes!(1), seconds!(2)),
            teslas!(2)
        );
        assert_eq!(teslas!(2).to_string(), "2[T]");
        Ok(())
    }
}
