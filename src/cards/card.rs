#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// u64 injection
/// each card is just one bit turned on
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism, e.g. "Th" "As" "2c"
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let rank = s.get(0..1).ok_or_else(|| anyhow::anyhow!("empty card str"))?;
        let suit = s
            .get(1..2)
            .ok_or_else(|| anyhow::anyhow!("card str missing suit: {}", s))?;
        Ok(Self {
            rank: Rank::try_from(rank)?,
            suit: Suit::try_from(suit)?,
        })
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        Self::from(rand::random_range(0..crate::DECK_SIZE) as u8)
    }
}

use super::rank::Rank;
use super::suit::Suit;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for n in 0..52u8 {
            assert!(n == u8::from(Card::from(n)));
        }
    }

    #[test]
    fn bijective_str() {
        let card = Card::try_from("Th").unwrap();
        assert!(card.rank() == Rank::Ten);
        assert!(card.suit() == Suit::Heart);
        assert!(card == Card::try_from(card.to_string().as_str()).unwrap());
    }

    #[test]
    fn random_cards_are_members_of_the_deck() {
        use crate::Arbitrary;
        for _ in 0..100 {
            assert!(u8::from(Card::random()) < crate::DECK_SIZE as u8);
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(Card::try_from("1h").is_err());
        assert!(Card::try_from("Tx").is_err());
        assert!(Card::try_from("").is_err());
    }
}
