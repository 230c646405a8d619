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
use anyhow::Result;
use approx::assert_abs_diff_eq;
use celestial_units::{
    kilograms, meters, seconds, Acceleration, Angle, Angle2, Energy, Force, Length, Length3, Mass,
    Quantity, Rate, Speed, Time, UnitError, EPSILON,
};
use std::f64::consts::TAU;

#[test]
fn length3_survives_polar_round_trip() {
    let samples = [-7.5, -1.0, 0.0, 0.25, 3.0, 1e6];
    for &x in &samples {
        for &y in &samples {
            for &z in &samples {
                let p = Length3::from_meters(x, y, z);
                let q = Length3::from_polar(p.length(), p.direction());
                // Relative to the magnitude, since 1e6 components are in the mix.
                let tolerance = EPSILON * p.length().total_meters().max(1.0);
                assert_abs_diff_eq!(q, p, epsilon = tolerance);
            }
        }
    }
}

#[test]
fn length3_on_the_z_axis_has_zero_heading() {
    let p = Length3::from_meters(0.0, 0.0, -4.0);
    assert_eq!(p.direction().horizontal(), Angle::ZERO);
    assert_eq!(p.length(), meters!(4));
}

#[test]
fn angles_normalize_across_several_turns() {
    let steps = 600;
    for i in 0..=steps {
        let r = -TAU + 3.0 * TAU * i as f64 / steps as f64;
        let a = Angle::radians(r);
        assert!(a.total_radians() >= 0.0, "{} -> {}", r, a.total_radians());
        assert!(a.total_radians() < TAU, "{} -> {}", r, a.total_radians());
        assert_eq!(a, Angle::radians(r + TAU));
    }
}

#[test]
fn equality_uses_epsilon_but_ordering_does_not() {
    assert_eq!(meters!(1), meters!(1.0 + EPSILON / 2.0));
    assert_ne!(meters!(1), meters!(1.0 + 2.0 * EPSILON));
    assert!(meters!(1) < meters!(1.0 + EPSILON / 2.0));
    assert!(meters!(1) <= meters!(1.0 + EPSILON / 2.0));
    assert!(meters!(2) > meters!(1));
}

#[test]
fn dimensional_closure() -> Result<()> {
    assert_eq!(Force::newtons(10.0) * Length::meters(5.0), Energy::joules(50.0));
    let a = Acceleration::meters_per_second2(3.0, Angle2::from_radians(0.0, 0.0));
    assert_eq!(Mass::kilograms(2.0)? * a, Force::newtons(6.0));
    assert_eq!(a * Mass::kilograms(2.0)?, Force::newtons(6.0));
    assert_eq!(Speed::meters_per_second(10.0)? * seconds!(2), meters!(20));
    Ok(())
}

#[test]
fn formatting_thresholds() {
    assert!(meters!(0.5).to_string().ends_with("[cm]"));
    assert!(meters!(5000).to_string().ends_with("[km]"));
    assert_eq!(Mass::EARTH.to_string(), "1[Em]");
}

#[test]
fn mass_clamps_tiny_negatives_and_rejects_others() -> Result<()> {
    assert_eq!(kilograms!(-1e-20)?, Mass::ZERO);
    match kilograms!(-1.0) {
        Err(UnitError::InvalidMagnitude { kind, value }) => {
            assert_eq!(kind, "Mass");
            assert_eq!(value, -1.0);
        }
        other => anyhow::bail!("expected InvalidMagnitude, got {:?}", other),
    }
    Ok(())
}

#[test]
fn rate_recovers_quantity() -> Result<()> {
    let rate = Rate::new(kilograms!(10)?, seconds!(2));
    assert_eq!(rate * seconds!(4), kilograms!(20)?);
    assert_eq!(kilograms!(20)? / rate, seconds!(4));
    Ok(())
}

#[test]
fn derived_arithmetic_is_unchecked() -> Result<()> {
    // Checked constructors refuse non-finite values, but arithmetic lets
    // them through for the next checked construction to catch.
    let fast = meters!(1) / Time::ZERO;
    assert!(!fast.is_finite());
    assert!(matches!(
        Speed::meters_per_second(fast.canonical()),
        Err(UnitError::NotFinite { .. })
    ));
    let negative = kilograms!(1)? - kilograms!(3)?;
    assert!(negative < Mass::ZERO);
    assert!(Mass::kilograms(negative.canonical()).is_err());
    Ok(())
}

#[test]
fn errors_render_for_humans() {
    let err = Mass::kilograms(-2.0).unwrap_err();
    assert_eq!(err.to_string(), "Mass cannot be negative, got -2");
}
