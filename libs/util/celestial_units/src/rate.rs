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
use crate::{Mass, Quantity, Time};
use std::{
    fmt,
    ops::{Div, Mul},
};

/// An amount of `T` accumulated over a span of `Time`.
///
/// Both parts are kept exactly as given: "10kg per 2s" and "5kg per 1s"
/// behave the same under arithmetic but do not compare equal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rate<T: Quantity> {
    units: T,
    time: Time,
}

impl<T: Quantity> Rate<T> {
    pub fn new(units: T, time: Time) -> Self {
        Self { units, time }
    }

    pub fn units(&self) -> T {
        self.units
    }

    pub fn time(&self) -> Time {
        self.time
    }

    /// How long it takes to accumulate `target` at this rate.
    pub fn time_to_reach(&self, target: T) -> Time {
        Time::seconds(target.canonical() / self.units.canonical() * self.time.total_seconds())
    }
}

impl Rate<f64> {
    pub fn per_second(count: f64) -> Self {
        Self::new(count, Time::seconds(1.0))
    }

    pub fn per_year(count: f64) -> Self {
        Self::new(count, Time::years(1.0))
    }
}

impl<T: Quantity> Mul<Time> for Rate<T> {
    type Output = T;

    fn mul(self, elapsed: Time) -> T {
        T::from_canonical(
            self.units.canonical() * (elapsed.total_seconds() / self.time.total_seconds()),
        )
    }
}

impl<T: Quantity> Mul<Rate<T>> for Time {
    type Output = T;

    fn mul(self, rate: Rate<T>) -> T {
        rate * self
    }
}

impl Div<Time> for Mass {
    type Output = Rate<Mass>;

    fn div(self, time: Time) -> Rate<Mass> {
        Rate::new(self, time)
    }
}

impl Div<Time> for f64 {
    type Output = Rate<f64>;

    fn div(self, time: Time) -> Rate<f64> {
        Rate::new(self, time)
    }
}

impl Div<Rate<f64>> for f64 {
    type Output = Time;

    fn div(self, rate: Rate<f64>) -> Time {
        rate.time_to_reach(self)
    }
}

impl<T: Quantity + fmt::Display> fmt::Display for Rate<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.units, f)?;
        write!(f, "/")?;
        fmt::Display::fmt(&self.time, f)
    }
}
