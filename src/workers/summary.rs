use crate::Payout;

/// Aggregate over a run's per-trial payouts.
///
/// Collection order carries no meaning: every statistic is a commutative
/// reduction, so results may arrive from the completion channel in any
/// interleaving. Totals accumulate in integers and only the final
/// divisions go through floating point.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    scores: Vec<Payout>,
}

impl FromIterator<Payout> for Summary {
    fn from_iter<I: IntoIterator<Item = Payout>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

impl Summary {
    pub fn n(&self) -> usize {
        self.scores.len()
    }
    pub fn total(&self) -> u64 {
        self.scores.iter().map(|&s| u64::from(s)).sum()
    }
    /// average return per trial, in bet units
    pub fn mean(&self) -> f64 {
        match self.n() {
            0 => 0.,
            n => self.total() as f64 / n as f64,
        }
    }
    /// mean absolute deviation about the mean, the dispersion measure
    /// behind the randomness-influence ratio
    pub fn mad(&self) -> f64 {
        match self.n() {
            0 => 0.,
            n => {
                let mean = self.mean();
                self.scores
                    .iter()
                    .map(|&s| (f64::from(s) - mean).abs())
                    .sum::<f64>()
                    / n as f64
            }
        }
    }
}
