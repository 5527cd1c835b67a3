use crate::EXPONENTIAL_RATE;
use crate::Error;
use crate::GEOMETRIC_SUCCESS;
use crate::NORMAL_DEVIATION;
use crate::NORMAL_MEAN;
use crate::NUMBERS;
use crate::Number;
use crate::Result;
use rand::Rng;
use rand_distr::Distribution;
use rand_distr::Exp;
use rand_distr::Geometric;
use rand_distr::Normal;
use serde::Deserialize;
use serde::Serialize;

/// The process that draws each day's winning number.
///
/// Only `Uniform` is a fair lottery. The other three skew toward particular
/// numbers, which is what gives frequency-chasing strategies something to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Uniform,
    Normal,
    Geometric,
    Exponential,
}

impl GameType {
    pub const ALL: [Self; 4] = [
        Self::Uniform,
        Self::Normal,
        Self::Geometric,
        Self::Exponential,
    ];

    /// Draw a winning number in `0..NUMBERS`.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Result<Number> {
        match self {
            Self::Uniform => Ok(rng.random_range(0..NUMBERS as Number)),
            Self::Normal => Normal::new(NORMAL_MEAN, NORMAL_DEVIATION)
                .map_err(|e| Error::Distribution(e.to_string()))
                .map(|d| crate::wrap(d.sample(rng) as i64)),
            // trials until first success, so the support starts at 1
            Self::Geometric => Geometric::new(GEOMETRIC_SUCCESS)
                .map_err(|e| Error::Distribution(e.to_string()))
                .map(|d| crate::wrap(d.sample(rng).saturating_add(1) as i64)),
            Self::Exponential => Exp::new(EXPONENTIAL_RATE)
                .map_err(|e| Error::Distribution(e.to_string()))
                .map(|d| crate::wrap(d.sample(rng) as i64)),
        }
    }
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Uniform => write!(f, "uniform"),
            Self::Normal => write!(f, "normal"),
            Self::Geometric => write!(f, "geometric"),
            Self::Exponential => write!(f, "exponential"),
        }
    }
}

impl std::str::FromStr for GameType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "uniform" => Ok(Self::Uniform),
            "normal" => Ok(Self::Normal),
            "geometric" => Ok(Self::Geometric),
            "exponential" => Ok(Self::Exponential),
            _ => Err(Error::UnknownGameType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn histogram(game: GameType, n: usize) -> [usize; NUMBERS] {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut counts = [0; NUMBERS];
        for _ in 0..n {
            counts[game.draw(rng).unwrap() as usize] += 1;
        }
        counts
    }

    #[test]
    fn draws_stay_in_range() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        for game in GameType::ALL {
            for _ in 0..10_000 {
                assert!((game.draw(rng).unwrap() as usize) < NUMBERS);
            }
        }
    }

    #[test]
    fn uniform_covers_every_number() {
        let counts = histogram(GameType::Uniform, 20_000);
        assert!(counts.iter().all(|&c| c > 0));
    }

    #[test]
    fn normal_concentrates_near_the_mean() {
        let counts = histogram(GameType::Normal, 20_000);
        let center = counts[35..65].iter().sum::<usize>();
        let tails = counts[..10].iter().chain(&counts[90..]).sum::<usize>();
        assert!(center > 10 * tails);
    }

    #[test]
    fn geometric_never_draws_zero_first() {
        // trials start at 1, so 0 is only reachable by wrapping at 100
        let counts = histogram(GameType::Geometric, 20_000);
        assert!(counts[1] > counts[0]);
        assert!(counts[1] > counts[99]);
    }

    #[test]
    fn exponential_favours_small_numbers() {
        let counts = histogram(GameType::Exponential, 20_000);
        let low = counts[..10].iter().sum::<usize>();
        let high = counts[90..].iter().sum::<usize>();
        assert!(low > high);
    }

    #[test]
    fn parses_known_tags_only() {
        for game in GameType::ALL {
            assert_eq!(game.to_string().parse::<GameType>().unwrap(), game);
        }
        assert_eq!("  Normal ".parse::<GameType>().unwrap(), GameType::Normal);
        assert_eq!(
            "poisson".parse::<GameType>(),
            Err(Error::UnknownGameType("poisson".to_string()))
        );
    }
}
