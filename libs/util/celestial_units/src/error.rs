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
use log::debug;
use thiserror::Error;

/// Construction failures. Derived arithmetic never produces these; only the
/// checked named-unit constructors do.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum UnitError {
    #[error("{kind} cannot be negative, got {value}")]
    InvalidMagnitude { kind: &'static str, value: f64 },

    #[error("{kind} must be a finite number, got {value}")]
    NotFinite { kind: &'static str, value: f64 },
}

pub type Result<T, E = UnitError> = std::result::Result<T, E>;

pub(crate) fn ensure_finite(kind: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        debug!("rejecting non-finite {}: {}", kind, value);
        Err(UnitError::NotFinite { kind, value })
    }
}

pub(crate) fn ensure_non_negative(kind: &'static str, value: f64) -> Result<f64> {
    let value = ensure_finite(kind, value)?;
    if value < 0.0 {
        debug!("rejecting negative {}: {}", kind, value);
        return Err(UnitError::InvalidMagnitude { kind, value });
    }
    Ok(value)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ensure_non_negative("Area", -2.0).unwrap_err();
        assert_eq!(err.to_string(), "Area cannot be negative, got -2");
        let err = ensure_finite("Speed", f64::INFINITY).unwrap_err();
        assert_eq!(err.to_string(), "Speed must be a finite number, got inf");
    }

    #[test]
    fn test_non_negative_checks_finite_first() {
        assert!(matches!(
            ensure_non_negative("Mass", f64::NAN),
            Err(UnitError::NotFinite { kind: "Mass", .. })
        ));
        assert_eq!(ensure_non_negative("Mass", 0.0), Ok(0.0));
    }
}
