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
pub(crate) mod acceleration;
pub(crate) mod angle;
pub(crate) mod angle2;
pub(crate) mod area;
pub(crate) mod combinator;
pub(crate) mod electric_charge;
pub(crate) mod electric_current;
pub(crate) mod electrical_capacitance;
pub(crate) mod electrical_conductance;
pub(crate) mod electrical_induction;
pub(crate) mod electrical_resistance;
pub(crate) mod energy;
pub(crate) mod error;
pub(crate) mod force;
pub(crate) mod format;
pub(crate) mod generic;
pub(crate) mod illuminance;
pub(crate) mod length;
pub(crate) mod length3;
pub(crate) mod luminous_flux;
pub(crate) mod luminous_intensity;
pub(crate) mod magnetic_field_strength;
pub(crate) mod magnetic_flux;
pub(crate) mod mass;
pub(crate) mod power;
pub(crate) mod pressure;
pub(crate) mod rate;
pub(crate) mod speed;
pub(crate) mod speed_rate;
pub(crate) mod speed_squared;
pub(crate) mod temperature;
pub(crate) mod time;
pub(crate) mod travel_path;
pub(crate) mod velocity;
pub(crate) mod voltage;
pub(crate) mod volume;

pub use crate::{
    acceleration::Acceleration,
    angle::Angle,
    angle2::Angle2,
    area::Area,
    combinator::{combinator_table, Combinator, Operator},
    electric_charge::ElectricCharge,
    electric_current::ElectricCurrent,
    electrical_capacitance::ElectricalCapacitance,
    electrical_conductance::ElectricalConductance,
    electrical_induction::ElectricalInduction,
    electrical_resistance::ElectricalResistance,
    energy::Energy,
    error::{Result, UnitError},
    force::Force,
    generic::Quantity,
    illuminance::Illuminance,
    length::Length,
    length3::Length3,
    luminous_flux::LuminousFlux,
    luminous_intensity::LuminousIntensity,
    magnetic_field_strength::MagneticFieldStrength,
    magnetic_flux::MagneticFlux,
    mass::Mass,
    power::Power,
    pressure::Pressure,
    rate::Rate,
    speed::Speed,
    speed_rate::SpeedRate,
    speed_squared::SpeedSquared,
    temperature::Temperature,
    time::Time,
    travel_path::TravelPath,
    velocity::Velocity,
    voltage::Voltage,
    volume::Volume,
};

pub use approx;
pub use nalgebra;
pub use num_traits;
pub use ordered_float;

/// Absolute tolerance used by `==` on every quantity kind.
pub const EPSILON: f64 = 1e-9;
