use crate::Wealth;

/// What one player won and paid on one day.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Settlement {
    pub reward: Wealth,
    pub risked: Wealth,
}

impl Settlement {
    pub fn pnl(&self) -> Wealth {
        self.reward - self.risked
    }
    pub fn is_win(&self) -> bool {
        self.reward > 0.
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_win() {
            write!(f, "+{:.2} -{:.2}", self.reward, self.risked)
        } else {
            write!(f, "      -{:.2}", self.risked)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pnl_is_reward_minus_risk() {
        let win = Settlement {
            reward: 9_000.,
            risked: 300.,
        };
        assert_eq!(win.pnl(), 8_700.);
        assert!(win.is_win());
        assert_eq!(win.to_string(), "+9000.00 -300.00");
        let loss = Settlement {
            reward: 0.,
            risked: 300.,
        };
        assert!(!loss.is_win());
        assert_eq!(Settlement::default().pnl(), 0.);
    }
}
