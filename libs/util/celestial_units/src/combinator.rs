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
    Area, ElectricCharge, ElectricCurrent, ElectricalCapacitance, ElectricalConductance,
    ElectricalInduction, ElectricalResistance, Energy, Force, Illuminance, Length, LuminousFlux,
    MagneticFieldStrength, MagneticFlux, Mass, Power, Pressure, Quantity, Speed, SpeedRate,
    SpeedSquared, Time, Voltage, Volume,
};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operator {
    Mul,
    Div,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
        }
    }
}

/// One cross-kind arithmetic rule: `lhs op rhs` yields `output`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Combinator {
    pub lhs: &'static str,
    pub op: Operator,
    pub rhs: &'static str,
    pub output: &'static str,
}

impl Combinator {
    /// Find the rule for a pair of kinds, by kind name.
    pub fn lookup(lhs: &str, op: Operator, rhs: &str) -> Option<&'static Combinator> {
        combinator_table()
            .iter()
            .find(|c| c.lhs == lhs && c.op == op && c.rhs == rhs)
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} => {}", self.lhs, self.op, self.rhs, self.output)
    }
}

macro_rules! operator {
    (*) => {
        Operator::Mul
    };
    (/) => {
        Operator::Div
    };
}

macro_rules! combinator_impl {
    ($lhs:ident * $rhs:ident => $out:ident) => {
        impl std::ops::Mul<$rhs> for $lhs {
            type Output = $out;

            fn mul(self, rhs: $rhs) -> $out {
                <$out as Quantity>::from_canonical(self.canonical() * rhs.canonical())
            }
        }
    };
    ($lhs:ident / $rhs:ident => $out:ident) => {
        impl std::ops::Div<$rhs> for $lhs {
            type Output = $out;

            fn div(self, rhs: $rhs) -> $out {
                <$out as Quantity>::from_canonical(self.canonical() / rhs.canonical())
            }
        }
    };
    (@commutes $lhs:ident * $rhs:ident => $out:ident) => {
        impl std::ops::Mul<$lhs> for $rhs {
            type Output = $out;

            fn mul(self, lhs: $lhs) -> $out {
                lhs * self
            }
        }
    };
}

macro_rules! combinator_row {
    ($lhs:ident $op:tt $rhs:ident => $out:ident) => {
        Combinator {
            lhs: stringify!($lhs),
            op: operator!($op),
            rhs: stringify!($rhs),
            output: stringify!($out),
        }
    };
    (@commutes $lhs:ident $op:tt $rhs:ident => $out:ident) => {
        combinator_row!($rhs $op $lhs => $out)
    };
}

// Rules under `derived` get their operator impls generated here. Rules under
// `manual` involve vector kinds, whose impls live next to those types; they
// are listed so that the table is complete.
macro_rules! dimensional_table {
    (
        derived {
            $($lhs:ident $op:tt $rhs:ident => $out:ident $(, $commutes:ident)?;)*
        }
        manual {
            $($mlhs:ident $mop:tt $mrhs:ident => $mout:ident $(, $mcommutes:ident)?;)*
        }
    ) => {
        $(
            combinator_impl!($lhs $op $rhs => $out);
            $(combinator_impl!(@$commutes $lhs $op $rhs => $out);)?
        )*

        const TABLE: &[Combinator] = &[
            $(
                combinator_row!($lhs $op $rhs => $out),
                $(combinator_row!(@$commutes $lhs $op $rhs => $out),)?
            )*
            $(
                combinator_row!($mlhs $mop $mrhs => $mout),
                $(combinator_row!(@$mcommutes $mlhs $mop $mrhs => $mout),)?
            )*
        ];

        /// Every cross-kind arithmetic rule the crate implements, including
        /// the commuted forms.
        pub fn combinator_table() -> &'static [Combinator] {
            TABLE
        }
    };
}

dimensional_table! {
    derived {
        // Geometry and motion
        Length * Length => Area;
        Area * Length => Volume, commutes;
        Area / Length => Length;
        Volume / Length => Area;
        Volume / Area => Length;
        Length / Time => Speed;
        Length / Speed => Time;
        Speed * Time => Length, commutes;
        Speed / Time => SpeedRate;
        Speed / SpeedRate => Time;
        SpeedRate * Time => Speed, commutes;
        Speed * Speed => SpeedSquared;
        SpeedRate * Length => SpeedSquared, commutes;
        SpeedSquared / SpeedRate => Length;
        SpeedSquared / Speed => Speed;

        // Mechanics
        Mass * SpeedRate => Force, commutes;
        Force / Mass => SpeedRate;
        Force / SpeedRate => Mass;
        Force * Length => Energy, commutes;
        Force / Area => Pressure;
        Force * Speed => Power, commutes;
        Pressure * Area => Force, commutes;
        Pressure * Volume => Energy, commutes;
        Energy / Length => Force;
        Energy / Force => Length;

        // Energy and power
        Energy / Time => Power;
        Energy / Power => Time;
        Power * Time => Energy, commutes;
        Power / Speed => Force;
        Energy / ElectricCurrent => MagneticFlux;
        Energy / ElectricCharge => Voltage;
        Energy / Voltage => ElectricCharge;
        Power / ElectricCurrent => Voltage;
        Power / Voltage => ElectricCurrent;

        // Circuits
        Voltage * ElectricCurrent => Power, commutes;
        Voltage / ElectricCurrent => ElectricalResistance;
        ElectricCurrent / Voltage => ElectricalConductance;
        Voltage / ElectricalResistance => ElectricCurrent;
        ElectricCurrent * ElectricalResistance => Voltage, commutes;
        ElectricCurrent * Time => ElectricCharge, commutes;
        ElectricCharge / Time => ElectricCurrent;
        ElectricCharge * Voltage => Energy, commutes;
        ElectricCharge / Voltage => ElectricalCapacitance;
        ElectricalCapacitance * Voltage => ElectricCharge, commutes;
        Time / ElectricalResistance => ElectricalCapacitance;
        Time / ElectricalCapacitance => ElectricalResistance;
        ElectricalResistance * Time => ElectricalInduction, commutes;
        ElectricalConductance * Voltage => ElectricCurrent, commutes;

        // Magnetism
        Voltage * Time => MagneticFlux, commutes;
        MagneticFlux / Time => Voltage;
        ElectricalInduction * ElectricCurrent => MagneticFlux, commutes;
        MagneticFlux / ElectricCurrent => ElectricalInduction;
        MagneticFlux / Area => MagneticFieldStrength;
        MagneticFieldStrength * Area => MagneticFlux, commutes;

        // Photometry
        LuminousFlux / Area => Illuminance;
        Illuminance * Area => LuminousFlux, commutes;
    }
    manual {
        Mass * Acceleration => Force, commutes;
        Velocity * Time => Length3, commutes;
        Length3 / Time => Velocity;
        Velocity / Time => Acceleration;
        Acceleration * Time => Velocity, commutes;
    }
}
