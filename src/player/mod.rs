//! Players and the templates they are spawned from.
//!
//! - [`Player`] — wealth, stake and bets within one game
//! - [`Settlement`] — one day's payout and cost for one player
//! - [`Template`] — per-experiment description used to spawn fresh players
mod player;
mod settlement;
mod template;

pub use player::*;
pub use settlement::*;
pub use template::*;
