//! Command line driver: turns flags into an [`Experiment`], runs it, and
//! hands the results to whoever plots them.

use crate::*;
use clap::Parser;
use colored::Colorize;

#[derive(Debug, Parser)]
#[command(author, version, about = "Compare lottery betting strategies", long_about = None)]
pub struct Args {
    /// Independent games to simulate
    #[arg(long, default_value_t = DEFAULT_GAMES)]
    pub games: usize,
    /// Maximum days (draws) per game
    #[arg(long, default_value_t = DEFAULT_DAYS)]
    pub days: Day,
    /// Stop a game early once every player is below this
    #[arg(long, default_value_t = DEFAULT_MIN_MONEY)]
    pub min_money: Wealth,
    /// Payout multiple of the stake on a winning number
    #[arg(long, default_value_t = DEFAULT_MULTIPLIER)]
    pub multiplier: Wealth,
    /// Starting wealth of every player
    #[arg(long, default_value_t = DEFAULT_WEALTH)]
    pub wealth: Wealth,
    /// Fixed per-bet stake instead of a random one per player
    #[arg(long)]
    pub stake: Option<Wealth>,
    /// Draw distribution: uniform, normal, geometric or exponential
    #[arg(long, default_value_t = DEFAULT_GAME_TYPE)]
    pub game: GameType,
    /// Seat a player, e.g. `hot:5` or `deterministic:50`; repeat for more
    #[arg(long = "strategy", value_name = "KIND:PARAM")]
    pub strategies: Vec<Strategy>,
    /// Seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
    /// Record per-day wealth trajectories
    #[arg(long)]
    pub record: bool,
    /// Write the full results as JSON
    #[arg(long)]
    pub output: Option<std::path::PathBuf>,
}

impl Args {
    pub fn experiment(&self) -> Experiment {
        let strategies = match self.strategies.is_empty() {
            true => DEFAULT_ROSTER.to_vec(),
            false => self.strategies.clone(),
        };
        let templates = strategies
            .into_iter()
            .map(|s| Template::from((s, self.wealth)))
            .map(|t| match self.stake {
                Some(stake) => t.staked(stake),
                None => t,
            })
            .collect();
        let rules = Rules {
            max_days: self.days,
            min_money: self.min_money,
            multiplier: self.multiplier,
            game_type: self.game,
        };
        let experiment = Experiment::new(self.games, templates, rules);
        let experiment = match self.seed {
            Some(seed) => experiment.seeded(seed),
            None => experiment,
        };
        match self.record {
            true => experiment.recording(),
            false => experiment,
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let experiment = self.experiment();
        let results = experiment.run()?;
        println!("{}", results);
        for (summary, template) in results.summaries().iter().zip(results.templates()) {
            let mean = format!("{:.2}", summary.mean);
            let mean = match summary.is_profitable(template.wealth) {
                true => mean.green(),
                false => mean.red(),
            };
            println!(
                "{:<20} average money at the end of the games: {}",
                summary.strategy.to_string(),
                mean
            );
        }
        if let Some(ref path) = self.output {
            std::fs::write(path, serde_json::to_string_pretty(&results)?)?;
            log::info!("wrote results to {}", path.display());
        }
        Ok(())
    }
}
