use super::Frequency;
use crate::Error;
use crate::NORMAL_DEVIATION;
use crate::NORMAL_MEAN;
use crate::NUMBERS;
use crate::Number;
use crate::Result;
use rand::Rng;
use rand_distr::Distribution;
use rand_distr::Normal;
use serde::Deserialize;
use serde::Serialize;

/// A rule for picking the numbers to bet on each day.
///
/// Each variant carries only its own parameter:
/// - `Deterministic(n)` always bets on `n`
/// - `Multiple(k)` bets on `k` distinct uniformly random numbers
/// - `Hot(k)` bets on the `k` most frequent past winners
/// - `Cold(k)` bets on the `k` least frequent past winners
/// - `Normal(k)` bets on `k` draws from Normal(50, 15), possibly repeated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Deterministic(Number),
    Multiple(usize),
    Hot(usize),
    Cold(usize),
    Normal(usize),
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Deterministic(_) => "deterministic",
            Self::Multiple(_) => "multiple",
            Self::Hot(_) => "hot",
            Self::Cold(_) => "cold",
            Self::Normal(_) => "normal",
        }
    }

    pub fn parameter(&self) -> usize {
        match *self {
            Self::Deterministic(n) => n as usize,
            Self::Multiple(k) | Self::Hot(k) | Self::Cold(k) | Self::Normal(k) => k,
        }
    }

    /// Reject parameters no history could satisfy.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Deterministic(n) if n as usize >= NUMBERS => Err(Error::NumberOutOfRange(n)),
            Self::Multiple(k) | Self::Hot(k) | Self::Cold(k) if k > NUMBERS => {
                Err(Error::TooManyBets {
                    strategy: *self,
                    requested: k,
                })
            }
            _ => Ok(()),
        }
    }

    /// Pick this day's numbers, in preference order, given every past winner.
    pub fn choose<R: Rng>(&self, history: &[Number], rng: &mut R) -> Result<Vec<Number>> {
        self.choose_at_most(history, usize::MAX, rng)
    }

    /// Like [`Strategy::choose`], but keeps only the first `limit` numbers of
    /// the preference list. Normal draws stop sampling at `limit`.
    pub fn choose_at_most<R: Rng>(
        &self,
        history: &[Number],
        limit: usize,
        rng: &mut R,
    ) -> Result<Vec<Number>> {
        self.validate()?;
        match *self {
            Self::Deterministic(n) => Ok(std::iter::once(n).take(limit).collect()),
            Self::Multiple(k) => Ok(rand::seq::index::sample(rng, NUMBERS, k)
                .into_iter()
                .take(limit)
                .map(|i| i as Number)
                .collect()),
            Self::Hot(k) => Ok(Frequency::from(history).hot(k.min(limit))),
            Self::Cold(k) => Ok(Frequency::from(history).cold(k.min(limit))),
            Self::Normal(k) => {
                let normal = Normal::new(NORMAL_MEAN, NORMAL_DEVIATION)
                    .map_err(|e| Error::Distribution(e.to_string()))?;
                Ok((0..k.min(limit))
                    .map(|_| crate::wrap(normal.sample(rng) as i64))
                    .collect())
            }
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} : {}", self.name(), self.parameter())
    }
}

impl std::str::FromStr for Strategy {
    type Err = Error;
    /// Parses `kind:parameter`, e.g. `hot:5` or `deterministic:50`.
    fn from_str(s: &str) -> Result<Self> {
        let (kind, parameter) = s
            .split_once(':')
            .ok_or_else(|| Error::MalformedParameter(s.to_string()))?;
        let kind = kind.trim().to_lowercase();
        let parameter = parameter.trim();
        let strategy = match kind.as_str() {
            "deterministic" => Self::Deterministic(
                parameter
                    .parse()
                    .map_err(|_| Error::MalformedParameter(s.to_string()))?,
            ),
            "multiple" | "hot" | "cold" | "normal" => {
                let k = parameter
                    .parse()
                    .map_err(|_| Error::MalformedParameter(s.to_string()))?;
                match kind.as_str() {
                    "multiple" => Self::Multiple(k),
                    "hot" => Self::Hot(k),
                    "cold" => Self::Cold(k),
                    _ => Self::Normal(k),
                }
            }
            _ => return Err(Error::UnknownStrategy(kind)),
        };
        strategy.validate()?;
        Ok(strategy)
    }
}
