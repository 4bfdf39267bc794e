use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{GridError, Heading};

/// A cell on the grid.
///
/// Serialized as an `[x, y]` pair.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for (i64, i64) {
    fn from(position: Position) -> Self {
        (position.x, position.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The size of a wrap-around grid.
///
/// Valid coordinates are `0 <= x < x_limit` and `0 <= y < y_limit`; both
/// limits are positive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    x_limit: i64,
    y_limit: i64,
}

impl Bounds {
    pub fn new(x_limit: i64, y_limit: i64) -> Result<Self, GridError> {
        if x_limit <= 0 || y_limit <= 0 {
            return Err(GridError::InvalidBounds { x_limit, y_limit });
        }
        Ok(Self { x_limit, y_limit })
    }

    pub fn x_limit(&self) -> i64 {
        self.x_limit
    }

    pub fn y_limit(&self) -> i64 {
        self.y_limit
    }

    pub fn contains(&self, position: Position) -> bool {
        (0..self.x_limit).contains(&position.x) && (0..self.y_limit).contains(&position.y)
    }

    /// Maps any position onto the grid, so that leaving one edge re-enters
    /// at the opposite edge.
    pub fn wrap(&self, position: Position) -> Position {
        Position {
            x: position.x.rem_euclid(self.x_limit),
            y: position.y.rem_euclid(self.y_limit),
        }
    }
}

/// A fixed set of cells the rover may never occupy.
///
/// Serialized as a list of `[x, y]` pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Obstacles(BTreeSet<Position>);

impl Obstacles {
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, position: Position) -> bool {
        self.0.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Position> for Obstacles {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<(i64, i64)> for Obstacles {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(Position::from).collect())
    }
}

// Backs every grid that was not given obstacles of its own.
static NO_OBSTACLES: Obstacles = Obstacles::new();

/// Which way along the heading a move goes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Gear {
    Forward,
    Reverse,
}

impl Gear {
    pub fn sign(self) -> i64 {
        match self {
            Gear::Forward => 1,
            Gear::Reverse => -1,
        }
    }
}

/// The world a rover drives on: optional wrap-around bounds plus a borrowed
/// set of obstacles.
#[derive(Copy, Clone, Debug)]
pub struct Grid<'a> {
    bounds: Option<Bounds>,
    obstacles: &'a Obstacles,
}

impl Grid<'static> {
    /// An infinite grid without obstacles.
    pub fn unbounded() -> Self {
        Self {
            bounds: None,
            obstacles: &NO_OBSTACLES,
        }
    }

    /// A toroidal grid without obstacles.
    pub fn wrapping(bounds: Bounds) -> Self {
        Self {
            bounds: Some(bounds),
            obstacles: &NO_OBSTACLES,
        }
    }
}

impl<'a> Grid<'a> {
    /// The same grid, with `obstacles` in place of the current obstacles.
    pub fn with_obstacles<'b>(self, obstacles: &'b Obstacles) -> Grid<'b> {
        Grid {
            bounds: self.bounds,
            obstacles,
        }
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn obstacles(&self) -> &'a Obstacles {
        self.obstacles
    }

    pub fn wrap(&self, position: Position) -> Position {
        match self.bounds {
            Some(bounds) => bounds.wrap(position),
            None => position,
        }
    }

    pub fn is_blocked(&self, position: Position) -> bool {
        self.obstacles.contains(position)
    }

    /// The cell reached by moving a single cell from `from`, or `None` if
    /// that cell is an obstacle.
    ///
    /// Only unit steps are offered: the obstacle check looks at the
    /// destination cell, not at the cells in between.
    pub fn step(&self, from: Position, heading: Heading, gear: Gear) -> Option<Position> {
        let (dx, dy) = heading.delta();
        let candidate = self.wrap(Position {
            x: from.x + gear.sign() * dx,
            y: from.y + gear.sign() * dy,
        });
        if self.is_blocked(candidate) {
            None
        } else {
            Some(candidate)
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn wrapped_positions_are_in_bounds(x_limit: u8, y_limit: u8, x: i64, y: i64) -> bool {
            let x_limit = i64::from(x_limit) + 1;
            let y_limit = i64::from(y_limit) + 1;
            let bounds = Bounds::new(x_limit, y_limit).unwrap();
            bounds.contains(bounds.wrap(Position::new(x, y)))
        }

        fn wrap_keeps_positions_inside(x_limit: u8, y_limit: u8) -> bool {
            let bounds = Bounds::new(i64::from(x_limit) + 1, i64::from(y_limit) + 1).unwrap();
            let inside = Position::new(bounds.x_limit() - 1, bounds.y_limit() - 1);
            bounds.wrap(inside) == inside
        }
    }

    #[test]
    fn non_positive_limits_are_rejected() {
        assert_eq!(
            Bounds::new(0, 5),
            Err(GridError::InvalidBounds {
                x_limit: 0,
                y_limit: 5
            })
        );
        assert!(Bounds::new(3, -1).is_err());
        assert!(Bounds::new(1, 1).is_ok());
    }

    #[test]
    fn negative_coordinates_wrap_to_the_far_edge() {
        let bounds = Bounds::new(10, 50).unwrap();
        assert_eq!(bounds.wrap(Position::new(-1, -1)), Position::new(9, 49));
        assert_eq!(bounds.wrap(Position::new(10, 50)), Position::ORIGIN);
        assert_eq!(bounds.wrap(Position::new(-21, 101)), Position::new(9, 1));
    }

    #[test]
    fn step_on_unbounded_grid() {
        let grid = Grid::unbounded();
        assert_eq!(
            grid.step(Position::ORIGIN, Heading::South, Gear::Forward),
            Some(Position::new(0, -1))
        );
        assert_eq!(
            grid.step(Position::ORIGIN, Heading::West, Gear::Reverse),
            Some(Position::new(1, 0))
        );
    }

    #[test]
    fn step_into_obstacle_is_refused() {
        let obstacles = Obstacles::from_iter([(0, 9)]);
        let grid = Grid::wrapping(Bounds::new(10, 10).unwrap()).with_obstacles(&obstacles);
        assert_eq!(grid.step(Position::ORIGIN, Heading::North, Gear::Reverse), None);
        assert_eq!(
            grid.step(Position::ORIGIN, Heading::North, Gear::Forward),
            Some(Position::new(0, 1))
        );
    }

    #[test]
    fn obstacles_deserialize_from_pairs() {
        let obstacles: Obstacles = serde_json::from_str("[[1, 2], [-3, 4], [1, 2]]").unwrap();
        assert_eq!(obstacles.len(), 2);
        assert!(obstacles.contains(Position::new(-3, 4)));
        assert_eq!(serde_json::to_string(&Position::new(1, 2)).unwrap(), "[1,2]");
    }
}
