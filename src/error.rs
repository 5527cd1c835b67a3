//! Configuration errors.
//!
//! Every variant describes a configuration that would fail identically in
//! every game, so experiments abort on the first one instead of retrying.
//! Running out of money is never an error: players trim their bets and
//! eventually sit out.

use crate::Number;
use crate::Strategy;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("unknown game type: {0}")]
    UnknownGameType(String),
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
    #[error("malformed strategy parameter in {0:?}")]
    MalformedParameter(String),
    #[error("number {0} is outside 0..{max}", max = crate::NUMBERS)]
    NumberOutOfRange(Number),
    #[error(
        "{strategy} requests {requested} distinct numbers, only {max} exist",
        max = crate::NUMBERS
    )]
    TooManyBets { strategy: Strategy, requested: usize },
    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("invalid distribution: {0}")]
    Distribution(String),
}
