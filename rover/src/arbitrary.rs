use quickcheck::{Arbitrary, Gen};

use crate::{Bounds, Command, Heading, Obstacles, Position};

/// A command string that is mostly commands, with the odd stray character.
#[derive(Clone, Debug)]
pub struct CommandString(pub String);

impl Arbitrary for CommandString {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 64;
        let text = (0..len)
            .map(|_| {
                if u8::arbitrary(g) % 8 == 0 {
                    *g.choose(&['x', ' ', 'f', '9', 'é']).unwrap()
                } else {
                    Command::arbitrary(g).as_char()
                }
            })
            .collect();
        CommandString(text)
    }
}

/// A small wrap-around grid with obstacles inside it, and commands to drive on it.
///
/// The origin is never an obstacle.
#[derive(Clone, Debug)]
pub struct ObstacleCourse {
    pub bounds: Bounds,
    pub obstacles: Obstacles,
    pub commands: String,
}

impl Arbitrary for ObstacleCourse {
    fn arbitrary(g: &mut Gen) -> Self {
        let x_limit = i64::from(u8::arbitrary(g) % 12) + 1;
        let y_limit = i64::from(u8::arbitrary(g) % 12) + 1;
        let bounds = Bounds::new(x_limit, y_limit).unwrap();

        let num_obstacles = usize::arbitrary(g) % 16;
        let obstacles = (0..num_obstacles)
            .map(|_| {
                Position::new(
                    i64::from(u8::arbitrary(g)) % x_limit,
                    i64::from(u8::arbitrary(g)) % y_limit,
                )
            })
            .filter(|&p| p != Position::ORIGIN)
            .collect();

        ObstacleCourse {
            bounds,
            obstacles,
            commands: CommandString::arbitrary(g).0,
        }
    }
}

impl Arbitrary for Heading {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Heading::North, Heading::East, Heading::South, Heading::West])
            .unwrap()
    }
}

impl Arbitrary for Command {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Command::ALL).unwrap()
    }
}
