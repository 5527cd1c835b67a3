//! One game: daily draws settled against every player until the days run
//! out or everyone is below the minimum.
mod game;
mod outcome;
mod rules;

pub use game::*;
pub use outcome::*;
pub use rules::*;
