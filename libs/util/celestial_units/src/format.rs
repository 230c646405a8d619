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
use std::fmt;

/// Write `value` followed by a bracketed unit suffix, honoring any precision
/// requested by the caller, e.g. `format!("{:.2}", length)`.
pub(crate) fn write_scaled(f: &mut fmt::Formatter, value: f64, suffix: &str) -> fmt::Result {
    match f.precision() {
        Some(precision) => write!(f, "{:.*}[{}]", precision, value, suffix),
        None => write!(f, "{}[{}]", value, suffix),
    }
}

/// Write a three component tuple, forwarding precision to each component.
pub(crate) fn write_triple<T: fmt::Display>(
    f: &mut fmt::Formatter,
    x: &T,
    y: &T,
    z: &T,
) -> fmt::Result {
    match f.precision() {
        Some(p) => write!(f, "({:.*}, {:.*}, {:.*})", p, x, p, y, p, z),
        None => write!(f, "({}, {}, {})", x, y, z),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Probe(f64);

    impl fmt::Display for Probe {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write_scaled(f, self.0, "u")
        }
    }

    #[test]
    fn test_write_scaled() {
        assert_eq!(format!("{}", Probe(1.5)), "1.5[u]");
        assert_eq!(format!("{:.3}", Probe(1.5)), "1.500[u]");
        assert_eq!(format!("{}", Probe(-20.0)), "-20[u]");
    }

    #[test]
    fn test_write_triple() {
        struct Triple;
        impl fmt::Display for Triple {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write_triple(f, &Probe(1.0), &Probe(2.0), &Probe(3.26))
            }
        }
        assert_eq!(format!("{}", Triple), "(1[u], 2[u], 3.26[u])");
        assert_eq!(format!("{:.1}", Triple), "(1.0[u], 2.0[u], 3.3[u])");
    }
}
