use crate::Strategy;
use crate::Template;
use crate::Wealth;
use serde::Serialize;

/// One seat's final wealth reduced across every game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub strategy: Strategy,
    pub mean: Wealth,
    pub min: Wealth,
    pub max: Wealth,
    /// Games that ended above the starting wealth.
    pub profits: usize,
    /// Games that ended below the minimum money of the rules.
    pub ruined: usize,
}

impl Summary {
    pub fn new(template: Template, min_money: Wealth, column: &[Wealth]) -> Self {
        if column.is_empty() {
            return Self {
                strategy: template.strategy,
                mean: Wealth::NAN,
                min: Wealth::NAN,
                max: Wealth::NAN,
                profits: 0,
                ruined: 0,
            };
        }
        Self {
            strategy: template.strategy,
            mean: column.iter().sum::<Wealth>() / column.len() as Wealth,
            min: column.iter().copied().fold(Wealth::INFINITY, Wealth::min),
            max: column.iter().copied().fold(Wealth::NEG_INFINITY, Wealth::max),
            profits: column.iter().filter(|&&w| w > template.wealth).count(),
            ruined: column.iter().filter(|&&w| w < min_money).count(),
        }
    }

    /// Mean final wealth relative to the starting wealth.
    pub fn is_profitable(&self, wealth: Wealth) -> bool {
        self.mean > wealth
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "│ {:<20} │ {:>16.2} │ {:>16.2} │ {:>16.2} │ {:>7} │ {:>7} │",
            self.strategy.to_string(),
            self.mean,
            self.min,
            self.max,
            self.profits,
            self.ruined
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_a_column() {
        let template = Template::from((Strategy::Normal(3), 1_000.));
        let summary = Summary::new(template, 600., &[500., 2_000., 1_500., 1_000.]);
        assert_eq!(summary.mean, 1_250.);
        assert_eq!(summary.min, 500.);
        assert_eq!(summary.max, 2_000.);
        assert_eq!(summary.profits, 2);
        assert_eq!(summary.ruined, 1);
        assert!(summary.is_profitable(1_000.));
    }

    #[test]
    fn counts_games_that_ended_ruined() {
        let template = Template::from((Strategy::Hot(3), 1_000.));
        let summary = Summary::new(template, 1_000., &[0., 0., 5_000.]);
        assert_eq!(summary.profits, 1);
        assert_eq!(summary.ruined, 2);
        let row = summary.to_string();
        assert!(row.ends_with("│       1 │       2 │"));
    }

    #[test]
    fn ending_exactly_at_the_minimum_is_not_ruin() {
        let template = Template::from((Strategy::Multiple(2), 5_000.));
        let summary = Summary::new(template, 1_000., &[1_000., 999.99]);
        assert_eq!(summary.ruined, 1);
    }

    #[test]
    fn empty_columns_have_no_statistics() {
        let template = Template::from((Strategy::Normal(3), 1_000.));
        let summary = Summary::new(template, 1_000., &[]);
        assert!(summary.mean.is_nan());
        assert_eq!(summary.profits, 0);
        assert_eq!(summary.ruined, 0);
    }
}
