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
};
use ordered_float::OrderedFloat;

#[derive(Clone, Copy, Debug, Default)]
pub struct LuminousFlux {
    v: OrderedFloat<f64>, // lumens
}
supports_quantity_ops!(LuminousFlux, "LuminousFlux", "lm");
supports_scalar_ops!(LuminousFlux);
supports_absdiffeq!(LuminousFlux);
supports_canonical_display!(LuminousFlux);

impl LuminousFlux {
    pub fn lumens(v: f64) -> Self {
        Self { v: OrderedFloat(v) }
    }

    pub fn total_lumens(self) -> f64 {
        self.v.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Area, Illuminance, Result};

    #[test]
    fn test_illuminance() -> Result<()> {
        let area = Area::square_meters(2.0)?;
        let lux = LuminousFlux::lumens(800.0) / area;
        assert_eq!(lux, Illuminance::lux(400.0));
        assert_eq!(lux * area, LuminousFlux::lumens(800.0));
        assert_eq!(LuminousFlux::lumens(800.0).to_string(), "800[lm]");
        Ok(())
    }
}
