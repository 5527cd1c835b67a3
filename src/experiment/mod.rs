//! Batches of independent games and what they add up to.
//!
//! - [`Experiment`] — runs many games from the same templates and rules
//! - [`Results`] — games × players matrix of final wealth
//! - [`Summary`] — per-strategy reduction over [`Results`]
mod experiment;
mod results;
mod summary;

pub use experiment::*;
pub use results::*;
pub use summary::*;
