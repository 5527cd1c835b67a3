//! Winning-number draws.
mod gametype;

pub use gametype::*;
