use crate::play::strategy::Strategy;
use crate::workers::pool::Pool;
use colored::Colorize;

/// A single strategy's simulated return.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Report {
    strategy: Strategy,
    trials: usize,
    mean: f64,
    mad: f64,
    total: u64,
}

impl Report {
    pub fn run(strategy: Strategy, trials: usize, pool: &Pool) -> Self {
        let summary = pool.run(strategy, trials);
        Self {
            strategy,
            trials: summary.n(),
            mean: summary.mean(),
            mad: summary.mad(),
            total: summary.total(),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
    pub fn mean(&self) -> f64 {
        self.mean
    }
    pub fn mad(&self) -> f64 {
        self.mad
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<8} {:>9} trials   mean {:.4}   mad {:.4}",
            self.strategy.to_string().bold(),
            self.trials,
            self.mean,
            self.mad,
        )
    }
}
