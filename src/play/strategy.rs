use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::draws::Draws;
use crate::cards::evaluator::Evaluator;
use crate::cards::hand::Hand;
use crate::cards::ranking::Ranking;
use crate::cards::suit::Suit;

/// Errors that can occur resolving a strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    UnknownStrategy(String),
}

impl std::fmt::Display for StrategyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStrategy(s) => write!(f, "unknown strategy: {}", s),
        }
    }
}

impl std::error::Error for StrategyError {}

/// A card-retention policy.
///
/// Every variant is a pure decision over the dealt hand: `keep` picks the
/// subset worth holding, `select` completes it back to five cards from the
/// trial's deck. The deck already excludes everything dealt, so a redraw
/// can never produce a card seen earlier in the hand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub enum Strategy {
    /// expected-value cascade over made hands and draw patterns
    Perfect,
    /// hold duplicated ranks and high cards, nothing else
    Basic,
    /// hold pairs, else high cards, else a suited majority, else one at random
    Amateur,
    /// hold exactly what Perfect would throw away
    Worst,
    /// hold each card on a coin flip
    Random,
    /// stand pat
    KeepAll,
    /// throw away all five
    KeepNone,
}

impl Strategy {
    pub const fn all() -> &'static [Self; 7] {
        &[
            Strategy::Perfect,
            Strategy::Basic,
            Strategy::Amateur,
            Strategy::Worst,
            Strategy::Random,
            Strategy::KeepAll,
            Strategy::KeepNone,
        ]
    }

    /// hold a subset of the dealt hand, then redraw back up to five
    pub fn select(&self, hand: Hand, deck: &mut Deck) -> Hand {
        let kept = self.keep(hand);
        (kept.size()..crate::HAND_SIZE)
            .map(|_| deck.draw())
            .map(Hand::from)
            .fold(kept, Hand::add)
    }

    /// the subset of the dealt hand worth holding
    pub fn keep(&self, hand: Hand) -> Hand {
        match self {
            Strategy::Perfect => Self::perfect(hand),
            Strategy::Basic => Self::basic(hand),
            Strategy::Amateur => Self::amateur(hand),
            Strategy::Worst => hand.minus(Self::perfect(hand)),
            Strategy::Random => Self::coinflips(hand),
            Strategy::KeepAll => hand,
            Strategy::KeepNone => Hand::empty(),
        }
    }

    /// Priority cascade mirroring the expected-value ranking of holds in
    /// 9/6 Jacks or Better. Made hands from a straight up stand pat, then
    /// draws and partial holds in descending order of expected return.
    /// The exact order is what makes the payout statistics meaningful.
    fn perfect(hand: Hand) -> Hand {
        let draws = Draws::from(hand);
        let ranking = Evaluator::try_from(hand)
            .expect("strategies decide over five dealt cards")
            .ranking();
        if ranking >= Ranking::Straight {
            hand
        } else if ranking == Ranking::ThreeOAK {
            Self::of_count(hand, 3)
        } else if let Some(kept) = draws.four_to_royal_flush() {
            kept
        } else if let Some(kept) = draws.four_to_straight_flush() {
            kept
        } else if ranking == Ranking::TwoPair {
            Self::of_count(hand, 2)
        } else if ranking == Ranking::JacksOrBetter {
            Self::high_pair(hand)
        } else if let Some(kept) = draws.three_to_royal_flush() {
            kept
        } else if let Some(kept) = draws.four_to_flush() {
            kept
        } else if let Some(kept) = draws.four_to_outside_straight() {
            kept
        } else {
            Self::high_cards(hand)
        }
    }

    fn basic(hand: Hand) -> Hand {
        hand.into_iter()
            .filter(|c| hand.count(c.rank()) > 1 || c.rank().is_high())
            .collect()
    }

    fn amateur(hand: Hand) -> Hand {
        let pairs = Self::of_count(hand, 2);
        let highs = Self::high_cards(hand);
        if pairs.size() > 0 {
            pairs
        } else if highs.size() > 0 {
            highs
        } else if let Some(suited) = Self::suited_majority(hand) {
            suited
        } else {
            Self::one_at_random(hand)
        }
    }

    ///

    /// the cards whose rank appears exactly n times
    fn of_count(hand: Hand, n: usize) -> Hand {
        hand.into_iter()
            .filter(|c| hand.count(c.rank()) == n)
            .collect()
    }

    /// the paying pair, J..A ranks only
    fn high_pair(hand: Hand) -> Hand {
        hand.into_iter()
            .filter(|c| c.rank().is_high() && hand.count(c.rank()) >= 2)
            .collect()
    }

    fn high_cards(hand: Hand) -> Hand {
        hand.into_iter().filter(|c| c.rank().is_high()).collect()
    }

    /// three or more of one suit. at most one suit can qualify
    fn suited_majority(hand: Hand) -> Option<Hand> {
        Suit::all()
            .iter()
            .map(|suit| hand.of(suit))
            .find(|suited| suited.size() >= 3)
    }

    fn one_at_random(hand: Hand) -> Hand {
        let cards = Vec::<Card>::from(hand);
        Hand::from(cards[rand::random_range(0..cards.len())])
    }

    fn coinflips(hand: Hand) -> Hand {
        hand.into_iter().filter(|_| rand::random::<bool>()).collect()
    }
}

/// str isomorphism over the CLI names
impl TryFrom<&str> for Strategy {
    type Error = StrategyError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "perfect" => Ok(Strategy::Perfect),
            "basic" => Ok(Strategy::Basic),
            "amateur" => Ok(Strategy::Amateur),
            "worst" => Ok(Strategy::Worst),
            "random" => Ok(Strategy::Random),
            "all" => Ok(Strategy::KeepAll),
            "none" => Ok(Strategy::KeepNone),
            other => Err(StrategyError::UnknownStrategy(other.to_string())),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Strategy::Perfect => "perfect",
                Strategy::Basic => "basic",
                Strategy::Amateur => "amateur",
                Strategy::Worst => "worst",
                Strategy::Random => "random",
                Strategy::KeepAll => "all",
                Strategy::KeepNone => "none",
            }
        )
    }
}
