use serde::{Deserialize, Serialize};

use crate::{Bounds, Command, Gear, Grid, GridError, Heading, Obstacles, Position, UnknownCommand};

/// A snapshot of where a rover is and which way it faces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverState {
    pub x: i64,
    pub y: i64,
    pub heading: Heading,
}

impl RoverState {
    /// `(x, y, heading index)`, e.g. `(0, 1, 0)` one cell north of the start.
    pub fn as_triple(&self) -> (i64, i64, u8) {
        (self.x, self.y, self.heading.index())
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

impl std::fmt::Display for RoverState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}) facing {}", self.x, self.y, self.heading)
    }
}

/// What a single command did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    /// The destination was an obstacle, so the rover stayed put.
    Blocked,
    Turned,
}

/// Summarizes the execution of a command string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    pub moved: usize,
    pub blocked: usize,
    pub turned: usize,
    /// Characters that were skipped because they are not commands.
    pub ignored: Vec<UnknownCommand>,
}

impl ExecutionReport {
    fn record(&mut self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Moved => self.moved += 1,
            StepOutcome::Blocked => self.blocked += 1,
            StepOutcome::Turned => self.turned += 1,
        }
    }

    /// Number of commands that were applied, whether or not they were blocked.
    pub fn commands_applied(&self) -> usize {
        self.moved + self.blocked + self.turned
    }

    /// Adds the counts of `other` to this report.
    ///
    /// Indices of ignored characters stay relative to their own command string.
    pub fn merge(&mut self, other: ExecutionReport) {
        self.moved += other.moved;
        self.blocked += other.blocked;
        self.turned += other.turned;
        self.ignored.extend(other.ignored);
    }
}

/// A rover driving around on a [`Grid`].
///
/// It starts at `(0, 0)` facing north and only changes through
/// [`Self::execute()`], [`Self::execute_strict()`] and [`Self::apply()`].
/// The obstacles are borrowed from the caller and never modified.
#[derive(Clone, Debug)]
pub struct Rover<'a> {
    position: Position,
    heading: Heading,
    grid: Grid<'a>,
}

impl Rover<'static> {
    /// A rover on an infinite grid without obstacles.
    pub fn new() -> Self {
        Self {
            position: Position::ORIGIN,
            heading: Heading::North,
            grid: Grid::unbounded(),
        }
    }
}

impl Default for Rover<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Rover<'a> {
    /// A rover on an `x_limit` by `y_limit` wrap-around grid.
    pub fn bounded(
        x_limit: i64,
        y_limit: i64,
        obstacles: &'a Obstacles,
    ) -> Result<Self, GridError> {
        let bounds = Bounds::new(x_limit, y_limit)?;
        Self::on_grid(Grid::wrapping(bounds).with_obstacles(obstacles))
    }

    /// Places a rover at the origin of `grid`.
    ///
    /// Fails if the origin is an obstacle.
    pub fn on_grid(grid: Grid<'a>) -> Result<Self, GridError> {
        let position = grid.wrap(Position::ORIGIN);
        if grid.is_blocked(position) {
            return Err(GridError::StartBlocked);
        }
        Ok(Self {
            position,
            heading: Heading::North,
            grid,
        })
    }

    /// Executes the commands from left to right.
    ///
    /// Characters other than `F`, `B`, `L` and `R` are skipped without
    /// changing the rover; they are listed in the returned report.
    pub fn execute(&mut self, commands: &str) -> ExecutionReport {
        let mut report = ExecutionReport::default();
        for (index, token) in commands.chars().enumerate() {
            match Command::from_char(token) {
                Some(command) => report.record(self.apply(command)),
                None => report.ignored.push(UnknownCommand { index, token }),
            }
        }
        report
    }

    /// Like [`Self::execute()`], but rejects the whole string if it contains
    /// anything that is not a command.
    ///
    /// If an error is returned, the rover is unmodified.
    pub fn execute_strict(&mut self, commands: &str) -> Result<ExecutionReport, UnknownCommand> {
        let commands = Command::parse_strict(commands)?;
        let mut report = ExecutionReport::default();
        for command in commands {
            report.record(self.apply(command));
        }
        Ok(report)
    }

    pub fn apply(&mut self, command: Command) -> StepOutcome {
        match command {
            Command::Forward => self.drive(Gear::Forward),
            Command::Backward => self.drive(Gear::Reverse),
            Command::Left => {
                self.heading = self.heading.next_anticlockwise();
                StepOutcome::Turned
            }
            Command::Right => {
                self.heading = self.heading.next_clockwise();
                StepOutcome::Turned
            }
        }
    }

    fn drive(&mut self, gear: Gear) -> StepOutcome {
        match self.grid.step(self.position, self.heading, gear) {
            Some(position) => {
                self.position = position;
                StepOutcome::Moved
            }
            None => StepOutcome::Blocked,
        }
    }

    pub fn state(&self) -> RoverState {
        RoverState {
            x: self.position.x,
            y: self.position.y,
            heading: self.heading,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn grid(&self) -> Grid<'a> {
        self.grid
    }
}
