//! Betting strategies.
//!
//! - [`Strategy`] — closed set of number-picking rules
//! - [`Frequency`] — stable frequency ranking of past winning numbers
mod frequency;
mod strategy;

pub use frequency::*;
pub use strategy::*;
