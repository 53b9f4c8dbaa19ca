use super::hand::Hand;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;
use crate::Payout;

/// Errors that can occur scoring a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandError {
    InvalidSize(usize),
}

impl std::fmt::Display for HandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSize(n) => {
                write!(f, "hand must contain exactly {} cards, got {}", crate::HAND_SIZE, n)
            }
        }
    }
}

impl std::error::Error for HandError {}

/// Classifier for a complete 5-card hand.
///
/// Construction is the contract gate: a partial or oversized hand is a
/// caller bug and refuses to evaluate. Once constructed, classification
/// is total, searching categories from highest payout to lowest so the
/// first match wins and categories stay mutually exclusive.
pub struct Evaluator(Hand);

impl TryFrom<Hand> for Evaluator {
    type Error = HandError;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            crate::HAND_SIZE => Ok(Self(hand)),
            n => Err(HandError::InvalidSize(n)),
        }
    }
}

impl Evaluator {
    /// A-2-3-4-5, the only straight where the ace plays low
    const WHEEL: u16 = 0b_1000000001111;
    /// T-J-Q-K-A
    const ROYALS: u16 = 0b_1111100000000;

    pub fn ranking(&self) -> Ranking {
        None.or_else(|| self.find_royal_flush())
            .or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_full_house())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_pair())
            .or_else(|| self.find_high_pair())
            .unwrap_or(Ranking::Nothing)
    }

    pub fn payout(&self) -> Payout {
        self.ranking().payout()
    }

    ///

    fn find_royal_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .filter(|_| u16::from(self.0) == Self::ROYALS)
            .map(|_| Ranking::RoyalFlush)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .filter(|_| self.find_rank_of_straight().is_some())
            .map(|_| Ranking::StraightFlush)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4).map(|_| Ranking::FourOAK)
    }
    fn find_full_house(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3)
            .and_then(|_| self.find_rank_of_n_oak(2))
            .map(|_| Ranking::FullHouse)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().map(|_| Ranking::Flush)
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight().map(|_| Ranking::Straight)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).map(|_| Ranking::ThreeOAK)
    }
    fn find_2_pair(&self) -> Option<Ranking> {
        match Rank::all().iter().filter(|r| self.0.count(**r) == 2).count() {
            2 => Some(Ranking::TwoPair),
            _ => None,
        }
    }
    fn find_high_pair(&self) -> Option<Ranking> {
        Rank::all()
            .iter()
            .filter(|r| r.is_high())
            .find(|r| self.0.count(**r) >= 2)
            .map(|_| Ranking::JacksOrBetter)
    }

    ///

    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .iter()
            .copied()
            .find(|s| self.0.of(s).size() == crate::HAND_SIZE)
    }
    /// a straight is five consecutive bits on the rank ladder, found by
    /// smearing the rank mask against itself, or the wheel exactly
    fn find_rank_of_straight(&self) -> Option<Rank> {
        let ranks = u16::from(self.0);
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from((15 - bits.leading_zeros()) as u8))
        } else if ranks == Self::WHEEL {
            Some(Rank::Five)
        } else {
            None
        }
    }
    fn find_rank_of_n_oak(&self, n: usize) -> Option<Rank> {
        Rank::all().iter().rev().copied().find(|r| self.0.count(*r) == n)
    }
}
