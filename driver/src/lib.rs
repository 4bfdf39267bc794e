mod mission;
mod random;
mod recording;
pub use mission::*;
pub use random::*;
pub use recording::*;
