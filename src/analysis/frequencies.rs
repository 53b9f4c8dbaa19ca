use crate::cards::evaluator::Evaluator;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::cards::ranking::Ranking;
use crate::Payout;

/// One row of the exhaustive table.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct Entry {
    category: Ranking,
    payout: Payout,
    count: usize,
    probability: f64,
    contribution: f64,
}

impl From<(Ranking, usize, usize)> for Entry {
    fn from((category, count, total): (Ranking, usize, usize)) -> Self {
        Self {
            category,
            payout: category.payout(),
            count,
            probability: count as f64 / total as f64,
            contribution: (count as u64 * u64::from(category.payout())) as f64 / total as f64,
        }
    }
}

/// Exact category frequencies over every possible deal.
///
/// Classifies all C(52,5) = 2,598,960 hands, so the resulting
/// probabilities and the dealt-hand expectation are exact rather than
/// sampled. This is the calibration anchor for the stand-pat baseline.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Frequencies(Vec<Entry>);

impl Frequencies {
    pub fn exhaust() -> Self {
        use rayon::iter::IntoParallelRefIterator;
        use rayon::iter::ParallelIterator;
        let hands = HandIterator::from((crate::HAND_SIZE, Hand::empty())).collect::<Vec<_>>();
        log::info!("classifying all {} possible deals", hands.len());
        let counts = hands
            .par_iter()
            .map(|hand| Evaluator::try_from(*hand).expect("iterator deals five cards"))
            .map(|evaluator| evaluator.ranking())
            .fold(
                || [0usize; 10],
                |mut counts, ranking| {
                    counts[ranking as usize] += 1;
                    counts
                },
            )
            .reduce(
                || [0usize; 10],
                |mut a, b| {
                    for (x, y) in a.iter_mut().zip(b.iter()) {
                        *x += y;
                    }
                    a
                },
            );
        Self(
            Ranking::all()
                .iter()
                .map(|r| Entry::from((*r, counts[*r as usize], hands.len())))
                .collect(),
        )
    }

    pub fn count(&self, category: Ranking) -> usize {
        self.0[category as usize].count
    }
    pub fn combinations(&self) -> usize {
        self.0.iter().map(|entry| entry.count).sum()
    }
    /// the exact expected payout of standing pat on a random deal
    pub fn expectation(&self) -> f64 {
        self.0.iter().map(|entry| entry.contribution).sum()
    }
}

impl std::fmt::Display for Frequencies {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for entry in self.0.iter().rev() {
            writeln!(
                f,
                "{} {:>4} {:>9} {:>11.8} {:>9.6}",
                entry.category,
                entry.payout,
                entry.count,
                entry.probability,
                entry.contribution,
            )?;
        }
        write!(f, "expected value {:.6}", self.expectation())
    }
}
