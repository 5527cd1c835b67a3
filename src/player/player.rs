use super::Settlement;
use crate::Number;
use crate::Result;
use crate::STAKE_MAX;
use crate::STAKE_MIN;
use crate::Strategy;
use crate::Wealth;
use rand::Rng;

/// A bettor within one game.
///
/// The stake is fixed at creation. Bets are only ever as many as the current
/// wealth can cover, so wealth never goes below zero through settlement.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    strategy: Strategy,
    wealth: Wealth,
    stake: Wealth,
    bets: Vec<Number>,
}

impl Player {
    /// Spawn a player whose stake is drawn uniformly from `STAKE_MIN..STAKE_MAX`.
    pub fn new<R: Rng>(strategy: Strategy, wealth: Wealth, rng: &mut R) -> Self {
        Self::with_stake(strategy, wealth, rng.random_range(STAKE_MIN..STAKE_MAX))
    }
    pub fn with_stake(strategy: Strategy, wealth: Wealth, stake: Wealth) -> Self {
        Self {
            strategy,
            wealth,
            stake,
            bets: Vec::new(),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
    pub fn wealth(&self) -> Wealth {
        self.wealth
    }
    pub fn stake(&self) -> Wealth {
        self.stake
    }
    pub fn bets(&self) -> &[Number] {
        &self.bets
    }
    /// Total staked on the current bets.
    pub fn risked(&self) -> Wealth {
        self.bets.len() as Wealth * self.stake
    }
    /// Broke players sit out the rest of the game.
    pub fn is_active(&self) -> bool {
        self.wealth > 0.
    }
    pub fn is_affordable(&self) -> bool {
        self.risked() <= self.wealth
    }

    /// Ask the strategy for as many numbers as the wealth covers at this
    /// stake, dropping from the back of its preference list.
    pub fn choose<R: Rng>(&mut self, history: &[Number], rng: &mut R) -> Result<()> {
        if !self.is_active() {
            self.retire();
            return Ok(());
        }
        let affordable = (self.wealth / self.stake).floor() as usize;
        let mut bets = self.strategy.choose_at_most(history, affordable, rng)?;
        while bets.len() as Wealth * self.stake > self.wealth {
            bets.pop();
        }
        self.bets = bets;
        Ok(())
    }

    /// Stop betting for the rest of the game.
    pub fn retire(&mut self) {
        self.bets.clear();
    }

    /// Pay out every bet on the winning number and charge for every bet placed.
    pub fn settle(&mut self, winner: Number, multiplier: Wealth) -> Settlement {
        let hits = self.bets.iter().filter(|&&n| n == winner).count();
        let settlement = Settlement {
            reward: multiplier * self.stake * hits as Wealth,
            risked: self.risked(),
        };
        self.wealth += settlement.pnl();
        settlement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn stake_is_drawn_within_bounds() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..1000 {
            let player = Player::new(Strategy::Hot(3), 1e6, rng);
            assert!(player.stake() >= STAKE_MIN);
            assert!(player.stake() < STAKE_MAX);
            assert_eq!(player.wealth(), 1e6);
            assert!(player.bets().is_empty());
        }
    }

    #[test]
    fn bets_are_trimmed_from_the_back() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let history = [10, 10, 10, 20, 20, 30, 40];
        let mut player = Player::with_stake(Strategy::Hot(4), 250., 100.);
        player.choose(&history, rng).unwrap();
        assert_eq!(player.bets(), &[10, 20]);
        assert!(player.is_affordable());
    }

    #[test]
    fn huge_normal_requests_sample_only_what_is_affordable() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut player = Player::with_stake(Strategy::Normal(100_000_000), 1_000., 100.);
        player.choose(&[], rng).unwrap();
        assert_eq!(player.bets().len(), 10);
        assert!(player.is_affordable());
    }

    #[test]
    fn exact_wealth_covers_every_bet() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut player = Player::with_stake(Strategy::Multiple(5), 500., 100.);
        player.choose(&[], rng).unwrap();
        assert_eq!(player.bets().len(), 5);
    }

    #[test]
    fn poor_players_place_nothing() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut player = Player::with_stake(Strategy::Deterministic(7), 99., 100.);
        player.choose(&[], rng).unwrap();
        assert!(player.bets().is_empty());
        let mut broke = Player::with_stake(Strategy::Deterministic(7), 0., 100.);
        broke.choose(&[], rng).unwrap();
        assert!(!broke.is_active());
        assert!(broke.bets().is_empty());
    }

    #[test]
    fn settlement_pays_hits_and_charges_every_bet() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let history = [1, 1, 2, 2, 3];
        let mut player = Player::with_stake(Strategy::Hot(3), 1_000., 100.);
        player.choose(&history, rng).unwrap();
        assert_eq!(player.bets(), &[1, 2, 3]);
        let settlement = player.settle(2, 90.);
        assert_eq!(settlement.reward, 9_000.);
        assert_eq!(settlement.risked, 300.);
        assert_eq!(player.wealth(), 1_000. + 9_000. - 300.);
        let settlement = player.settle(50, 90.);
        assert_eq!(settlement.pnl(), -300.);
        assert_eq!(player.wealth(), 9_400.);
    }

    #[test]
    fn repeated_numbers_pay_once_per_bet() {
        let mut player = Player::with_stake(Strategy::Normal(3), 1_000., 100.);
        player.bets = vec![50, 50, 12];
        let settlement = player.settle(50, 90.);
        assert_eq!(settlement.reward, 18_000.);
        assert_eq!(player.wealth(), 1_000. + 18_000. - 300.);
    }

    #[test]
    fn retired_players_are_untouched_by_settlement() {
        let mut player = Player::with_stake(Strategy::Deterministic(5), 400., 100.);
        player.retire();
        assert_eq!(player.settle(5, 90.).pnl(), 0.);
        assert_eq!(player.wealth(), 400.);
    }
}
