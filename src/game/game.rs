use super::Outcome;
use super::Rules;
use crate::Day;
use crate::Number;
use crate::Player;
use crate::Result;
use crate::Wealth;
use rand::Rng;

/// A single game in progress.
///
/// Lifecycle: [`Game::start`] places everyone's opening bets against an empty
/// history, then each [`Game::round`] draws, settles and re-bets. [`Game::play`]
/// runs both until the days run out or every player is below the minimum.
#[derive(Debug, Clone)]
pub struct Game {
    rules: Rules,
    players: Vec<Player>,
    history: Vec<Number>,
    trajectories: Option<Vec<Vec<Wealth>>>,
}

impl Game {
    pub fn new(players: Vec<Player>, rules: Rules) -> Self {
        Self {
            rules,
            players,
            history: Vec::new(),
            trajectories: None,
        }
    }

    /// Keep every player's wealth after every day.
    pub fn recording(self) -> Self {
        let trajectories = self.players.iter().map(|p| vec![p.wealth()]).collect();
        Self {
            trajectories: Some(trajectories),
            ..self
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    /// Every winning number so far, oldest first.
    pub fn history(&self) -> &[Number] {
        &self.history
    }
    pub fn day(&self) -> Day {
        self.history.len()
    }
    pub fn wealth(&self) -> Vec<Wealth> {
        self.players.iter().map(Player::wealth).collect()
    }

    pub fn is_exhausted(&self) -> bool {
        self.day() >= self.rules.max_days
    }
    /// Every player, not just one, has fallen below the minimum.
    pub fn is_ruined(&self) -> bool {
        self.players
            .iter()
            .all(|p| p.wealth() < self.rules.min_money)
    }

    /// Opening bets, placed before any number has been drawn.
    pub fn start<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        for player in self.players.iter_mut() {
            player.choose(&self.history, rng)?;
        }
        Ok(())
    }

    /// Draw one winning number, settle every player against it, and let
    /// everyone still solvent pick tomorrow's bets.
    pub fn round<R: Rng>(&mut self, rng: &mut R) -> Result<Number> {
        let winner = self.rules.game_type.draw(rng)?;
        self.history.push(winner);
        for player in self.players.iter_mut() {
            debug_assert!(player.is_affordable());
            let settlement = player.settle(winner, self.rules.multiplier);
            log::trace!("{:<20} {}", player.strategy().to_string(), settlement);
            if player.is_active() {
                player.choose(&self.history, rng)?;
            } else {
                player.retire();
            }
        }
        if let Some(ref mut trajectories) = self.trajectories {
            for (trajectory, player) in trajectories.iter_mut().zip(self.players.iter()) {
                trajectory.push(player.wealth());
            }
        }
        log::trace!("day {:>4} drew {:>2}", self.day(), winner);
        Ok(winner)
    }

    pub fn play<R: Rng>(mut self, rng: &mut R) -> Result<Outcome> {
        self.start(rng)?;
        while !self.is_exhausted() {
            self.round(rng)?;
            if self.is_ruined() {
                let day = self.day();
                log::debug!("every player below {} on day {}", self.rules.min_money, day);
                break;
            }
        }
        Ok(Outcome {
            wealth: self.wealth(),
            days: self.day(),
            trajectories: self.trajectories,
        })
    }
}
