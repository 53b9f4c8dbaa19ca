use super::strategy::Strategy;
use crate::cards::deck::Deck;
use crate::cards::evaluator::{Evaluator, HandError};
use crate::Payout;

/// A single video poker trial.
///
/// Deal five, hold per the strategy, complete from the remainder, score
/// against the pay table. The deck is constructed here and owned for the
/// whole trial, so nothing is shared between concurrent trials.
pub struct Game;

impl Game {
    pub fn play(strategy: Strategy) -> Result<Payout, HandError> {
        let mut deck = Deck::new();
        let dealt = deck.deal(crate::HAND_SIZE);
        let hand = strategy.select(dealt, &mut deck);
        let ranking = Evaluator::try_from(hand)?.ranking();
        log::trace!("{} held into {} making {}", dealt, hand, ranking);
        Ok(ranking.payout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ranking::Ranking;

    #[test]
    fn payouts_come_off_the_table() {
        let table = Ranking::all().map(|r| r.payout());
        for strategy in Strategy::all() {
            for _ in 0..100 {
                let payout = Game::play(*strategy).unwrap();
                assert!(table.contains(&payout));
            }
        }
    }

    #[test]
    fn standing_pat_scores_the_deal() {
        // KeepAll never draws, so the trial sees exactly five cards
        for _ in 0..100 {
            assert!(Game::play(Strategy::KeepAll).is_ok());
        }
    }
}
