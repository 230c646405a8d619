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
use crate::{Angle2, Length, Length3};

/// A straight leg between two positions, measured in the XY plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TravelPath {
    from: Length3,
    to: Length3,
    length: Length,
    angle: Angle2,
}

impl TravelPath {
    pub fn new(from: Length3, to: Length3) -> Self {
        let offset = to - from;
        Self {
            from,
            to,
            length: offset.xy_length(),
            angle: offset.xy_direction(),
        }
    }

    pub fn from(&self) -> Length3 {
        self.from
    }

    pub fn to(&self) -> Length3 {
        self.to
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn angle(&self) -> Angle2 {
        self.angle
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{degrees, meters, Angle};

    #[test]
    fn test_planar_measure() {
        let path = TravelPath::new(
            Length3::from_meters(1.0, 1.0, 100.0),
            Length3::from_meters(4.0, 5.0, -50.0),
        );
        assert_eq!(path.length(), meters!(5));
        assert_eq!(path.angle().vertical(), Angle::ZERO);
        assert_eq!(path.angle().horizontal(), Angle::radians(4f64.atan2(3.0)));
        assert_eq!(path.to() - path.from(), Length3::from_meters(3.0, 4.0, -150.0));
    }

    #[test]
    fn test_heading_south() {
        let path = TravelPath::new(Length3::ZERO, Length3::from_meters(0.0, -2.0, 0.0));
        assert_eq!(path.angle().horizontal(), degrees!(270));
    }
}
