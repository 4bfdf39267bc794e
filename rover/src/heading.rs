use serde::{Deserialize, Serialize};

/// The direction a [rover](crate::Rover) is facing.
///
/// The variants are declared in clockwise order, starting at north, and
/// their discriminants double as the heading index reported in a
/// [`RoverState`](crate::RoverState).
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Heading {
    #[default]
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

/// All headings, in clockwise order.
pub const HEADINGS: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

impl Heading {
    /// The heading after a quarter turn to the right.
    pub fn next_clockwise(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// The heading after a quarter turn to the left.
    ///
    /// This is the exact inverse of [`Self::next_clockwise()`].
    pub fn next_anticlockwise(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// 0 for north, 1 for east, 2 for south, 3 for west.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        HEADINGS.get(usize::from(index)).copied()
    }

    /// The unit step `(dx, dy)` taken when driving forward with this heading.
    ///
    /// North and south move along the y axis, east and west along the x axis.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    /// An arrow pointing in this direction, for drawing the grid.
    pub fn arrow(self) -> char {
        match self {
            Heading::North => '↑',
            Heading::East => '→',
            Heading::South => '↓',
            Heading::West => '←',
        }
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Heading::North => "North",
            Heading::East => "East",
            Heading::South => "South",
            Heading::West => "West",
        };
        write!(f, "{}", name)
    }
}
