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
    format::write_scaled, supports_absdiffeq, supports_quantity_ops, supports_scalar_ops,
};
use ordered_float::OrderedFloat;
use std::{fmt, time::Duration};

// Calendar arithmetic runs on a fixed 28 day month and 12 month year.
const MONTHS_PER_YEAR: f64 = 12.0;
const DAYS_PER_WEEK: f64 = 7.0;
const DAYS_PER_MONTH: f64 = 28.0;
const HOURS_PER_DAY: f64 = 24.0;
const MINUTES_PER_HOUR: f64 = 60.0;
const SECONDS_PER_MINUTE: f64 = 60.0;
const MILLISECONDS_PER_SECOND: f64 = 1_000.0;
const PLANCK_TIMES_PER_SECOND: f64 = 1.855e43;

const SECONDS_PER_HOUR: f64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;
const SECONDS_PER_DAY: f64 = SECONDS_PER_HOUR * HOURS_PER_DAY;
const SECONDS_PER_MONTH: f64 = SECONDS_PER_DAY * DAYS_PER_MONTH;
const SECONDS_PER_YEAR: f64 = SECONDS_PER_MONTH * MONTHS_PER_YEAR;

/// A span of time, stored in seconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct Time {
    v: OrderedFloat<f64>, // seconds
}
supports_quantity_ops!(Time, "Time", "s");
supports_scalar_ops!(Time);
supports_absdiffeq!(Time);

impl Time {
    pub fn seconds(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    pub fn planck_times(v: f64) -> Self {
        Self::seconds(v / PLANCK_TIMES_PER_SECOND)
    }

    pub fn milliseconds(v: f64) -> Self {
        Self::seconds(v / MILLISECONDS_PER_SECOND)
    }

    pub fn minutes(v: f64) -> Self {
        Self::seconds(v * SECONDS_PER_MINUTE)
    }

    pub fn hours(v: f64) -> Self {
        Self::minutes(v * MINUTES_PER_HOUR)
    }

    pub fn days(v: f64) -> Self {
        Self::hours(v * HOURS_PER_DAY)
    }

    pub fn weeks(v: f64) -> Self {
        Self::days(v * DAYS_PER_WEEK)
    }

    pub fn months(v: f64) -> Self {
        Self::days(v * DAYS_PER_MONTH)
    }

    pub fn years(v: f64) -> Self {
        Self::months(v * MONTHS_PER_YEAR)
    }

    pub fn total_planck_times(self) -> f64 {
        self.v.0 * PLANCK_TIMES_PER_SECOND
    }

    pub fn total_milliseconds(self) -> f64 {
        self.v.0 * MILLISECONDS_PER_SECOND
    }

    pub fn total_seconds(self) -> f64 {
        self.v.0
    }

    pub fn total_minutes(self) -> f64 {
        self.v.0 / SECONDS_PER_MINUTE
    }

    pub fn total_hours(self) -> f64 {
        self.total_minutes() / MINUTES_PER_HOUR
    }

    pub fn total_days(self) -> f64 {
        self.total_hours() / HOURS_PER_DAY
    }

    pub fn total_weeks(self) -> f64 {
        self.total_days() / DAYS_PER_WEEK
    }

    pub fn total_months(self) -> f64 {
        self.total_days() / DAYS_PER_MONTH
    }

    pub fn total_years(self) -> f64 {
        self.total_months() / MONTHS_PER_YEAR
    }

    /// Exactly zero, as opposed to `==` which is within tolerance.
    pub fn is_exactly_zero(self) -> bool {
        self.v.0 == 0.0
    }

    pub fn year_component(self) -> i64 {
        (self.v.0 / SECONDS_PER_YEAR) as i64
    }

    pub fn month_component(self) -> i64 {
        let rest = self.v.0 - self.year_component() as f64 * SECONDS_PER_YEAR;
        (rest / SECONDS_PER_MONTH) as i64
    }

    pub fn day_component(self) -> i64 {
        let rest = self.v.0
            - self.year_component() as f64 * SECONDS_PER_YEAR
            - self.month_component() as f64 * SECONDS_PER_MONTH;
        (rest / SECONDS_PER_DAY) as i64
    }

    pub fn hour_component(self) -> i64 {
        (self.seconds_into_day() / SECONDS_PER_HOUR) as i64
    }

    pub fn minute_component(self) -> i64 {
        let rest = self.seconds_into_day() - self.hour_component() as f64 * SECONDS_PER_HOUR;
        (rest / SECONDS_PER_MINUTE) as i64
    }

    pub fn second_component(self) -> i64 {
        (self.seconds_into_day()
            - self.hour_component() as f64 * SECONDS_PER_HOUR
            - self.minute_component() as f64 * SECONDS_PER_MINUTE) as i64
    }

    fn seconds_into_day(self) -> f64 {
        self.v.0
            - self.year_component() as f64 * SECONDS_PER_YEAR
            - self.month_component() as f64 * SECONDS_PER_MONTH
            - self.day_component() as f64 * SECONDS_PER_DAY
    }

    /// Render as a calendar stamp counted from 1/1/0, e.g. "2/3/1 4:05:06".
    pub fn to_date_string(self) -> String {
        format!(
            "{}/{}/{} {}:{:02}:{:02}",
            self.month_component() + 1,
            self.day_component() + 1,
            self.year_component(),
            self.hour_component(),
            self.minute_component(),
            self.second_component()
        )
    }
}

impl From<Duration> for Time {
    fn from(d: Duration) -> Self {
        Self::seconds(d.as_secs_f64())
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.total_seconds().abs() < 1.0 {
            write_scaled(f, self.total_milliseconds(), "ms")
        } else if self.total_minutes().abs() < 1.0 {
            write_scaled(f, self.total_seconds(), "s")
        } else if self.total_hours().abs() < 1.0 {
            write_scaled(f, self.total_minutes(), "min")
        } else if self.total_days().abs() < 1.0 {
            write_scaled(f, self.total_hours(), "hr")
        } else if self.total_months().abs() < 1.0 {
            write_scaled(f, self.total_days(), "d")
        } else if self.total_years().abs() < 1.0 {
            write_scaled(f, self.total_months(), "mth")
        } else {
            write_scaled(f, self.total_years(), "yr")
        }
    }
}

#[macro_export]
macro_rules! seconds {
    ($num:expr) => {
        $crate::Time::seconds($num as f64)
    };
}

#[macro_export]
macro_rules! minutes {
    ($num:expr) => {
        $crate::Time::minutes($num as f64)
    };
}

#[macro_export]
macro_rules! hours {
    ($num:expr) => {
        $crate::Time::hours($num as f64)
    };
}

#[macro_export]
macro_rules! days {
    ($num:expr) => {
        $crate::Time::days($num as f64)
    };
}

#[macro_export]
macro_rules! years {
    ($num:expr) => {
        $crate::Time::years($num as f64)
    };
}
