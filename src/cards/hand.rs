use super::card::Card;
use super::deck::Deck;
use super::rank::Rank;
use super::suit::Suit;

/// Hand represents an unordered set of Cards, stored as the 52 LSBs
/// of a u64. Each bit is one unique card, so membership, suit filters,
/// and set algebra are single bitwise operations, and evaluation is
/// order-insensitive by construction.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }

    /// disjoint union
    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }
    /// set difference
    pub fn minus(&self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }

    /// the cards of one suit
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    /// how many cards of one rank. each rank owns a nibble of the layout
    pub fn count(self, rank: Rank) -> usize {
        (self.0 >> (u8::from(rank) * 4) & 0xF).count_ones() as usize
    }

    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low card to high card
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// singleton
impl From<Card> for Hand {
    fn from(c: Card) -> Self {
        Self(u64::from(c))
    }
}

/// we OR the cards to get the bitstring. duplicates collapse silently,
/// which is why dealing goes through Deck rather than this
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

/// Vec<Card> isomorphism (up to permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}

/// one-way conversion to the u16 rank-set mask,
/// collapsing suits onto the 13-rank ladder
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        Rank::all()
            .iter()
            .filter(|rank| h.count(**rank) > 0)
            .map(|rank| u16::from(*rank))
            .fold(0u16, |a, b| a | b)
    }
}

/// str isomorphism, whitespace-separated cards: "As Kh Qd Jc Ts"
impl TryFrom<&str> for Hand {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Self, _>>()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}

/// a uniformly random 5-card deal
impl crate::Arbitrary for Hand {
    fn random() -> Self {
        Deck::new().deal(crate::HAND_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_u64() {
        let hand = Hand::random();
        assert!(hand == Hand::from(u64::from(hand)));
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert!(iter.next() == Some(Card::try_from("2c").unwrap()));
        assert!(iter.next() == Some(Card::try_from("Ts").unwrap()));
        assert!(iter.next() == Some(Card::try_from("Jc").unwrap()));
        assert!(iter.next() == Some(Card::try_from("Js").unwrap()));
        assert!(iter.next() == None);
    }

    #[test]
    fn suit_filter() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c").unwrap();
        assert!(hand.of(&Suit::Club).size() == 2);
        assert!(hand.of(&Suit::Spade).size() == 1);
        assert!(hand.of(&Suit::Club).into_iter().all(|c| c.suit() == Suit::Club));
    }

    #[test]
    fn rank_counts() {
        let hand = Hand::try_from("2c 2d 2h 5s 9c").unwrap();
        assert!(hand.count(Rank::Two) == 3);
        assert!(hand.count(Rank::Five) == 1);
        assert!(hand.count(Rank::Ace) == 0);
    }

    #[test]
    fn rank_mask() {
        let hand = Hand::try_from("2c 2d 2h 5s 9c").unwrap();
        assert!(u16::from(hand) == 0b0000010001001);
    }

    #[test]
    fn set_difference() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c").unwrap();
        let kept = Hand::try_from("3d 5s").unwrap();
        let rest = hand.minus(kept);
        assert!(rest.size() == 3);
        assert!(Hand::add(kept, rest) == hand);
    }

    #[test]
    fn five_random_distinct() {
        let hand = Hand::random();
        assert!(hand.size() == crate::HAND_SIZE);
    }
}
