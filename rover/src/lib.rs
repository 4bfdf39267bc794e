pub use command::*;
pub use errors::*;
pub use grid::*;
pub use heading::*;
pub use rover::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod command;
mod errors;
mod grid;
mod heading;
mod rover;
mod visualization;
