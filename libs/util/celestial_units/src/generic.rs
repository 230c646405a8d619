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
use std::fmt::Debug;

/// A kind of physical quantity stored as a single value in its canonical SI
/// unit.
pub trait Quantity: Copy + Debug + PartialEq + PartialOrd + 'static {
    /// Human readable name of the kind, e.g. "Length".
    const KIND: &'static str;

    /// Symbol of the canonical unit, e.g. "m".
    const SYMBOL: &'static str;

    fn canonical(&self) -> f64;

    /// Wrap a canonical value without any of the checks the named-unit
    /// constructors apply. Derived arithmetic goes through here, so IEEE
    /// infinities and NaN propagate instead of failing.
    fn from_canonical(v: f64) -> Self;
}

// Dimensionless counts, so that `Rate<f64>` can express "n per year".
impl Quantity for f64 {
    const KIND: &'static str = "Scalar";
    const SYMBOL: &'static str = "";

    fn canonical(&self) -> f64 {
        *self
    }

    fn from_canonical(v: f64) -> Self {
        v
    }
}

#[macro_export]
macro_rules! supports_quantity_ops {
    ($TypeName:ident, $kind:literal, $symbol:literal) => {
        impl $TypeName {
            pub const ZERO: $TypeName = $TypeName {
                v: $crate::ordered_float::OrderedFloat(0.0),
            };

            /// The raw canonical value.
            pub fn f64(self) -> f64 {
                self.v.0
            }

            pub fn abs(self) -> Self {
                Self {
                    v: $crate::ordered_float::OrderedFloat(self.v.0.abs()),
                }
            }

            pub fn is_finite(self) -> bool {
                self.v.0.is_finite()
            }

            pub fn min(self, other: Self) -> Self {
                if other.v.0 < self.v.0 {
                    other
                } else {
                    self
                }
            }

            pub fn max(self, other: Self) -> Self {
                if other.v.0 > self.v.0 {
                    other
                } else {
                    self
                }
            }
        }

        impl $crate::Quantity for $TypeName {
            const KIND: &'static str = $kind;
            const SYMBOL: &'static str = $symbol;

            fn canonical(&self) -> f64 {
                self.v.0
            }

            fn from_canonical(v: f64) -> Self {
                Self {
                    v: $crate::ordered_float::OrderedFloat(v),
                }
            }
        }

        impl PartialEq for $TypeName {
            fn eq(&self, other: &Self) -> bool {
                (self.v.0 - other.v.0).abs() < $crate::EPSILON
            }
        }

        // Equal means "within epsilon", but the inequalities look at the
        // canonical values directly.
        impl PartialOrd for $TypeName {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                if self == other {
                    Some(std::cmp::Ordering::Equal)
                } else {
                    self.v.0.partial_cmp(&other.v.0)
                }
            }

            fn lt(&self, other: &Self) -> bool {
                self.v.0 < other.v.0
            }

            fn le(&self, other: &Self) -> bool {
                self.v.0 <= other.v.0
            }

            fn gt(&self, other: &Self) -> bool {
                self.v.0 > other.v.0
            }

            fn ge(&self, other: &Self) -> bool {
                self.v.0 >= other.v.0
            }
        }

        impl std::ops::Add<$TypeName> for $TypeName {
            type Output = $TypeName;

            fn add(self, other: $TypeName) -> Self {
                Self {
                    v: $crate::ordered_float::OrderedFloat(self.v.0 + other.v.0),
                }
            }
        }

        impl std::ops::AddAssign<$TypeName> for $TypeName {
            fn add_assign(&mut self, other: $TypeName) {
                self.v.0 += other.v.0;
            }
        }

        impl std::ops::Sub<$TypeName> for $TypeName {
            type Output = $TypeName;

            fn sub(self, other: $TypeName) -> Self {
                Self {
                    v: $crate::ordered_float::OrderedFloat(self.v.0 - other.v.0),
                }
            }
        }

        impl std::ops::SubAssign<$TypeName> for $TypeName {
            fn sub_assign(&mut self, other: $TypeName) {
                self.v.0 -= other.v.0;
            }
        }

        impl std::ops::Neg for $TypeName {
            type Output = $TypeName;

            fn neg(self) -> Self {
                Self {
                    v: $crate::ordered_float::OrderedFloat(-self.v.0),
                }
            }
        }

        // Cancellation: like kinds divide out to a plain ratio.
        impl std::ops::Div<$TypeName> for $TypeName {
            type Output = f64;

            fn div(self, other: $TypeName) -> f64 {
                self.v.0 / other.v.0
            }
        }

        impl std::iter::Sum for $TypeName {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |acc, v| acc + v)
            }
        }

        impl $crate::num_traits::Zero for $TypeName {
            fn zero() -> Self {
                Self::ZERO
            }

            fn is_zero(&self) -> bool {
                *self == Self::ZERO
            }
        }

        impl std::ops::Div<$crate::Rate<$TypeName>> for $TypeName {
            type Output = $crate::Time;

            fn div(self, rate: $crate::Rate<$TypeName>) -> $crate::Time {
                rate.time_to_reach(self)
            }
        }
    };
}

#[macro_export]
macro_rules! supports_scalar_ops {
    ($TypeName:ident) => {
        impl std::ops::Mul<f64> for $TypeName {
            type Output = $TypeName;

            fn mul(self, s: f64) -> Self {
                Self {
                    v: $crate::ordered_float::OrderedFloat(self.v.0 * s),
                }
            }
        }

        impl std::ops::Mul<$TypeName> for f64 {
            type Output = $TypeName;

            fn mul(self, other: $TypeName) -> $TypeName {
                other * self
            }
        }

        impl std::ops::MulAssign<f64> for $TypeName {
            fn mul_assign(&mut self, s: f64) {
                self.v.0 *= s;
            }
        }

        impl std::ops::Div<f64> for $TypeName {
            type Output = $TypeName;

            fn div(self, s: f64) -> Self {
                Self {
                    v: $crate::ordered_float::OrderedFloat(self.v.0 / s),
                }
            }
        }

        impl std::ops::DivAssign<f64> for $TypeName {
            fn div_assign(&mut self, s: f64) {
                self.v.0 /= s;
            }
        }
    };
}

#[macro_export]
macro_rules! supports_absdiffeq {
    ($TypeName:ident) => {
        impl $crate::approx::AbsDiffEq for $TypeName {
            type Epsilon = f64;

            fn default_epsilon() -> Self::Epsilon {
                $crate::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                (self.v.0 - other.v.0).abs() <= epsilon
            }
        }
    };
}

/// For kinds that always print in their canonical unit.
#[macro_export]
macro_rules! supports_canonical_display {
    ($TypeName:ident) => {
        impl std::fmt::Display for $TypeName {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                $crate::format::write_scaled(f, self.v.0, <Self as $crate::Quantity>::SYMBOL)
            }
        }
    };
}
