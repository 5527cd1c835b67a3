use crate::DEFAULT_DAYS;
use crate::DEFAULT_GAME_TYPE;
use crate::DEFAULT_MIN_MONEY;
use crate::DEFAULT_MULTIPLIER;
use crate::Day;
use crate::Error;
use crate::GameType;
use crate::Result;
use crate::Wealth;
use serde::Deserialize;
use serde::Serialize;

/// Everything about a game except who plays it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    /// Upper bound on the number of draws.
    pub max_days: Day,
    /// The game stops early once every player is strictly below this.
    pub min_money: Wealth,
    /// A winning bet pays this many stakes.
    pub multiplier: Wealth,
    pub game_type: GameType,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_days: DEFAULT_DAYS,
            min_money: DEFAULT_MIN_MONEY,
            multiplier: DEFAULT_MULTIPLIER,
            game_type: DEFAULT_GAME_TYPE,
        }
    }
}

impl Rules {
    pub fn validate(&self) -> Result<()> {
        if !self.min_money.is_finite() {
            return Err(Error::InvalidParameter {
                name: "min_money",
                value: self.min_money,
            });
        }
        if !(self.multiplier.is_finite() && self.multiplier >= 0.) {
            return Err(Error::InvalidParameter {
                name: "multiplier",
                value: self.multiplier,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} draws, up to {} days, {}x payout, min money {}",
            self.game_type, self.max_days, self.multiplier, self.min_money
        )
    }
}
