use serde::{Deserialize, Serialize};

use crate::UnknownCommand;

/// A single instruction for the rover.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Move one cell along the current heading.
    #[serde(rename = "F")]
    Forward,
    /// Move one cell against the current heading.
    #[serde(rename = "B")]
    Backward,
    /// Quarter turn anticlockwise.
    #[serde(rename = "L")]
    Left,
    /// Quarter turn clockwise.
    #[serde(rename = "R")]
    Right,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::Forward,
        Command::Backward,
        Command::Left,
        Command::Right,
    ];

    pub fn from_char(token: char) -> Option<Self> {
        match token {
            'F' => Some(Command::Forward),
            'B' => Some(Command::Backward),
            'L' => Some(Command::Left),
            'R' => Some(Command::Right),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Command::Forward => 'F',
            Command::Backward => 'B',
            Command::Left => 'L',
            Command::Right => 'R',
        }
    }

    /// Parses a whole command string, failing on the first character that
    /// is not a command.
    pub fn parse_strict(commands: &str) -> Result<Vec<Command>, UnknownCommand> {
        commands
            .chars()
            .enumerate()
            .map(|(index, token)| Command::from_char(token).ok_or(UnknownCommand { index, token }))
            .collect()
    }

    /// Parses a command string, skipping characters that are not commands.
    ///
    /// The skipped characters are returned alongside the parsed commands.
    pub fn parse_lenient(commands: &str) -> (Vec<Command>, Vec<UnknownCommand>) {
        let mut parsed = Vec::with_capacity(commands.len());
        let mut skipped = Vec::new();
        for (index, token) in commands.chars().enumerate() {
            match Command::from_char(token) {
                Some(command) => parsed.push(command),
                None => skipped.push(UnknownCommand { index, token }),
            }
        }
        (parsed, skipped)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::CommandString;

    quickcheck! {
        fn char_roundtrip(command: Command) -> bool {
            Command::from_char(command.as_char()) == Some(command)
        }

        fn lenient_and_strict_agree_on_valid_input(commands: Vec<Command>) -> bool {
            let text: String = commands.iter().map(|c| c.as_char()).collect();
            let (lenient, skipped) = Command::parse_lenient(&text);
            skipped.is_empty()
                && lenient == commands
                && Command::parse_strict(&text) == Ok(commands)
        }

        fn lenient_accounts_for_every_char(input: CommandString) -> bool {
            let (parsed, skipped) = Command::parse_lenient(&input.0);
            parsed.len() + skipped.len() == input.0.chars().count()
        }
    }

    #[test]
    fn strict_reports_first_unknown_char() {
        assert_eq!(
            Command::parse_strict("FFxRy"),
            Err(UnknownCommand {
                index: 2,
                token: 'x'
            })
        );
    }

    #[test]
    fn lowercase_is_not_a_command() {
        assert_eq!(Command::from_char('f'), None);
        let (parsed, skipped) = Command::parse_lenient("fF");
        assert_eq!(parsed, vec![Command::Forward]);
        assert_eq!(skipped, vec![UnknownCommand { index: 0, token: 'f' }]);
    }

    #[test]
    fn indices_count_chars_not_bytes() {
        let (parsed, skipped) = Command::parse_lenient("é R");
        assert_eq!(parsed, vec![Command::Right]);
        assert_eq!(
            skipped,
            vec![
                UnknownCommand { index: 0, token: 'é' },
                UnknownCommand { index: 1, token: ' ' },
            ]
        );
    }
}
