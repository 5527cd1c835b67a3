use super::Summary;
use crate::Outcome;
use crate::Rules;
use crate::Strategy;
use crate::Template;
use crate::Wealth;
use serde::Deserialize;
use serde::Serialize;

/// Final wealth of every player in every game, plus what produced it.
///
/// Rows are games in index order, columns are seats in template order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Results {
    templates: Vec<Template>,
    rules: Rules,
    outcomes: Vec<Outcome>,
}

impl Results {
    pub fn new(templates: Vec<Template>, rules: Rules, outcomes: Vec<Outcome>) -> Self {
        Self {
            templates,
            rules,
            outcomes,
        }
    }

    pub fn games(&self) -> usize {
        self.outcomes.len()
    }
    pub fn players(&self) -> usize {
        self.templates.len()
    }
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }
    pub fn strategies(&self) -> Vec<Strategy> {
        self.templates.iter().map(|t| t.strategy).collect()
    }
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// games × players final wealth.
    pub fn matrix(&self) -> Vec<Vec<Wealth>> {
        self.outcomes.iter().map(|o| o.wealth.clone()).collect()
    }
    /// One seat's final wealth across every game, if the seat exists.
    pub fn column(&self, player: usize) -> Option<Vec<Wealth>> {
        self.outcomes
            .iter()
            .map(|o| o.wealth.get(player).copied())
            .collect()
    }
    /// Mean final wealth per seat. Empty when no games were played.
    pub fn means(&self) -> Vec<Wealth> {
        if self.outcomes.is_empty() {
            return Vec::new();
        }
        (0..self.players())
            .filter_map(|i| self.column(i))
            .map(|c| c.iter().sum::<Wealth>() / self.games() as Wealth)
            .collect()
    }
    /// log10 of one seat's final wealth per game, skipping games it ended
    /// with nothing. This is the series a density plot is drawn from.
    pub fn log_wealth(&self, player: usize) -> Option<Vec<f64>> {
        self.column(player).map(|column| {
            column
                .into_iter()
                .filter(|w| *w > 0.)
                .map(f64::log10)
                .collect()
        })
    }
    /// Per-day wealth of every seat in one game, if it was recorded.
    pub fn trajectories(&self, game: usize) -> Option<&[Vec<Wealth>]> {
        self.outcomes
            .get(game)
            .and_then(|o| o.trajectories.as_deref())
    }
    pub fn summaries(&self) -> Vec<Summary> {
        self.templates
            .iter()
            .enumerate()
            .filter_map(|(i, t)| self.column(i).map(|c| (t, c)))
            .map(|(t, c)| Summary::new(*t, self.rules.min_money, &c))
            .collect()
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Results {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Games: {}  Rules: {}", self.games(), self.rules)?;
        writeln!(f, "┌──────────────────────┬──────────────────┬──────────────────┬──────────────────┬─────────┬─────────┐")?;
        writeln!(f, "│ Strategy             │             Mean │              Min │              Max │ Profits │  Ruined │")?;
        writeln!(f, "├──────────────────────┼──────────────────┼──────────────────┼──────────────────┼─────────┼─────────┤")?;
        for summary in self.summaries() {
            writeln!(f, "{}", summary)?;
        }
        writeln!(f, "└──────────────────────┴──────────────────┴──────────────────┴──────────────────┴─────────┴─────────┘")?;
        Ok(())
    }
}
