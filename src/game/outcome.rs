use crate::Day;
use crate::Wealth;
use serde::Deserialize;
use serde::Serialize;

/// How one game ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Final wealth, one entry per player in seating order.
    pub wealth: Vec<Wealth>,
    /// Days actually played.
    pub days: Day,
    /// Wealth after every day, per player, starting with the initial wealth.
    /// Only present when the game was recording.
    pub trajectories: Option<Vec<Vec<Wealth>>>,
}
