use super::Player;
use crate::Error;
use crate::Result;
use crate::Strategy;
use crate::Wealth;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// How to spawn one seat's player at the start of every game.
///
/// Without a fixed stake, every game draws a fresh one, exactly as a newly
/// constructed player would.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub strategy: Strategy,
    pub wealth: Wealth,
    pub stake: Option<Wealth>,
}

impl From<(Strategy, Wealth)> for Template {
    fn from((strategy, wealth): (Strategy, Wealth)) -> Self {
        Self {
            strategy,
            wealth,
            stake: None,
        }
    }
}

impl Template {
    pub fn staked(self, stake: Wealth) -> Self {
        Self {
            stake: Some(stake),
            ..self
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.strategy.validate()?;
        if !self.wealth.is_finite() {
            return Err(Error::InvalidParameter {
                name: "wealth",
                value: self.wealth,
            });
        }
        match self.stake {
            Some(stake) if !(stake.is_finite() && stake > 0.) => Err(Error::InvalidParameter {
                name: "stake",
                value: stake,
            }),
            _ => Ok(()),
        }
    }

    pub fn spawn<R: Rng>(&self, rng: &mut R) -> Player {
        match self.stake {
            Some(stake) => Player::with_stake(self.strategy, self.wealth, stake),
            None => Player::new(self.strategy, self.wealth, rng),
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn fixed_stake_is_kept() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let template = Template::from((Strategy::Cold(3), 5_000.)).staked(250.);
        let player = template.spawn(rng);
        assert_eq!(player.stake(), 250.);
        assert_eq!(player.wealth(), 5_000.);
        assert_eq!(player.strategy(), Strategy::Cold(3));
    }

    #[test]
    fn fresh_players_draw_fresh_stakes() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let template = Template::from((Strategy::Cold(3), 5_000.));
        let a = template.spawn(rng);
        let b = template.spawn(rng);
        assert_ne!(a.stake(), b.stake());
    }

    #[test]
    fn rejects_nonsense_stakes() {
        let template = Template::from((Strategy::Hot(1), 5_000.));
        assert!(template.validate().is_ok());
        assert!(template.staked(0.).validate().is_err());
        assert!(template.staked(f64::NAN).validate().is_err());
        assert!(Template::from((Strategy::Hot(101), 5_000.)).validate().is_err());
    }
}
