//! Simulation Binary
//!
//! Runs a lottery experiment and prints each strategy's final wealth.
//!
//! Options: --games, --days, --min-money, --multiplier, --wealth, --stake,
//! --game, --strategy, --seed, --record, --output

use clap::Parser;
use lotteria::*;

fn main() -> anyhow::Result<()> {
    log()?;
    cli::Args::parse().run()
}
