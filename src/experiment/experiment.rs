use super::Results;
use crate::Game;
use crate::Outcome;
use crate::Result;
use crate::Rules;
use crate::Template;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Deserialize;
use serde::Serialize;
use std::hash::Hash;
use std::hash::Hasher;

/// A batch of independent games played from the same seats and rules.
///
/// Each game spawns its own players and owns its own random stream, so games
/// share nothing and can run in any order. With a seed, game `i` always sees
/// the same stream whether the batch runs sequentially or in parallel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub games: usize,
    pub templates: Vec<Template>,
    pub rules: Rules,
    pub seed: Option<u64>,
    pub record: bool,
}

impl Experiment {
    pub fn new(games: usize, templates: Vec<Template>, rules: Rules) -> Self {
        Self {
            games,
            templates,
            rules,
            seed: None,
            record: false,
        }
    }
    pub fn seeded(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
    /// Keep per-day wealth trajectories for every game.
    pub fn recording(self) -> Self {
        Self {
            record: true,
            ..self
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.rules.validate()?;
        self.templates.iter().try_for_each(Template::validate)
    }

    fn rng(&self, index: usize) -> SmallRng {
        match self.seed {
            Some(seed) => {
                let ref mut hasher = std::hash::DefaultHasher::new();
                (seed, index).hash(hasher);
                SmallRng::seed_from_u64(hasher.finish())
            }
            None => SmallRng::from_rng(&mut rand::rng()),
        }
    }

    /// Play game `index` from scratch: fresh players, empty history.
    pub fn game(&self, index: usize) -> Result<Outcome> {
        let ref mut rng = self.rng(index);
        let players = self.templates.iter().map(|t| t.spawn(rng)).collect();
        let game = Game::new(players, self.rules);
        let outcome = match self.record {
            true => game.recording().play(rng)?,
            false => game.play(rng)?,
        };
        log::debug!("game {:>4} ended after {:>4} days", index, outcome.days);
        Ok(outcome)
    }

    /// Play every game and collect final wealth by game index. A bad
    /// configuration fails here, before the first game.
    pub fn run(&self) -> Result<Results> {
        self.validate()?;
        log::info!(
            "simulating {} games of {} players ({})",
            self.games,
            self.templates.len(),
            self.rules
        );
        #[cfg(feature = "server")]
        let outcomes = {
            use rayon::prelude::*;
            (0..self.games)
                .into_par_iter()
                .map(|i| self.game(i))
                .collect::<Result<Vec<Outcome>>>()?
        };
        #[cfg(not(feature = "server"))]
        let outcomes = (0..self.games)
            .map(|i| self.game(i))
            .collect::<Result<Vec<Outcome>>>()?;
        Ok(Results::new(self.templates.clone(), self.rules, outcomes))
    }
}
