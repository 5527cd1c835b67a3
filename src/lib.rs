//! Lottery strategy simulator.
//!
//! Players wager a fixed stake on numbers in `0..100` every day, each following
//! its own [`Strategy`]. A [`Game`] draws one winning number per day from a
//! [`GameType`] distribution and settles every player's bets. An [`Experiment`]
//! repeats independent games and collects final wealth into [`Results`].

#[cfg(feature = "server")]
pub mod cli;
pub mod draw;
pub mod error;
pub mod experiment;
pub mod game;
pub mod player;
pub mod strategy;

pub use draw::*;
pub use error::*;
pub use experiment::*;
pub use game::*;
pub use player::*;
pub use strategy::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// A lottery number, always in `0..NUMBERS`.
pub type Number = u8;
/// Player wealth, stakes and payouts.
pub type Wealth = f64;
/// Round counter within a game.
pub type Day = usize;

// ============================================================================
// LOTTERY PARAMETERS
// ============================================================================
/// Size of the number range players bet on.
pub const NUMBERS: usize = 100;
/// Lower bound (inclusive) of the per-bet stake drawn at player creation.
pub const STAKE_MIN: Wealth = 100.;
/// Upper bound (exclusive) of the per-bet stake drawn at player creation.
pub const STAKE_MAX: Wealth = 50_001.;

// ============================================================================
// DRAW DISTRIBUTIONS
// Every continuous or unbounded sample is truncated and wrapped into 0..NUMBERS.
// ============================================================================
/// Mean of the normal draw and of the normal betting strategy.
pub const NORMAL_MEAN: f64 = 50.;
/// Standard deviation of the normal draw and of the normal betting strategy.
pub const NORMAL_DEVIATION: f64 = 15.;
/// Success probability of the geometric draw.
pub const GEOMETRIC_SUCCESS: f64 = 0.02;
/// Rate (1 / mean) of the exponential draw.
pub const EXPONENTIAL_RATE: f64 = 0.02;

// ============================================================================
// DEFAULT EXPERIMENT
// The reference run: a year of daily draws, repeated for a year of games.
// ============================================================================
/// Independent games per experiment.
pub const DEFAULT_GAMES: usize = 365;
/// Maximum days per game.
pub const DEFAULT_DAYS: Day = 365;
/// A game ends early once every player is below this.
pub const DEFAULT_MIN_MONEY: Wealth = 1_000.;
/// Payout multiple of the stake on a winning number.
pub const DEFAULT_MULTIPLIER: Wealth = 90.;
/// Starting wealth of every player.
pub const DEFAULT_WEALTH: Wealth = 1_000_000_000.;
/// Draw distribution of the reference run.
pub const DEFAULT_GAME_TYPE: GameType = GameType::Normal;
/// Strategy roster of the reference run.
pub const DEFAULT_ROSTER: [Strategy; 10] = [
    Strategy::Deterministic(50),
    Strategy::Multiple(5),
    Strategy::Hot(5),
    Strategy::Cold(5),
    Strategy::Deterministic(45),
    Strategy::Multiple(3),
    Strategy::Hot(3),
    Strategy::Cold(3),
    Strategy::Normal(3),
    Strategy::Normal(5),
];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Wrap a truncated sample into `0..NUMBERS`, including negative samples.
pub fn wrap(sample: i64) -> Number {
    sample.rem_euclid(NUMBERS as i64) as Number
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
