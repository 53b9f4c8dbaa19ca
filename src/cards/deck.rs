use super::card::Card;
use super::hand::Hand;

/// A mutable deck of the not-yet-seen cards, supporting random draws.
///
/// Every trial constructs its own Deck, so sampling without replacement
/// holds across the whole hand lifecycle for free: dealing removes cards,
/// and completion draws can never collide with anything already dealt.
/// Uniform random draws from the remaining set are equivalent to dealing
/// off the top of a shuffled permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// the full 52-card universe
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }

    /// draw and remove a uniformly random card from the deck
    pub fn draw(&mut self) -> Card {
        assert!(self.0.size() > 0);
        let i = rand::random_range(0..self.0.size());
        let card = self.0.into_iter().nth(i).expect("index within remaining cards");
        self.0.remove(card);
        card
    }

    /// deal n cards as a Hand
    pub fn deal(&mut self, n: usize) -> Hand {
        (0..n).map(|_| self.draw()).collect()
    }

    /// mask out a whole set of cards, for rigging known scenarios
    pub fn remove(&mut self, hand: Hand) {
        self.0 = self.0.minus(hand);
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0.size() > 0 {
            Some(self.draw())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_deck_is_full() {
        assert!(Deck::new().size() == crate::DECK_SIZE);
    }

    #[test]
    fn dealing_five_distinct_members() {
        let mut deck = Deck::new();
        let hand = deck.deal(crate::HAND_SIZE);
        assert!(hand.size() == crate::HAND_SIZE);
        assert!(deck.size() == crate::DECK_SIZE - crate::HAND_SIZE);
        assert!(hand.into_iter().all(|c| !deck.contains(&c)));
    }

    #[test]
    fn exhaustion_yields_every_card_once() {
        let seen = Deck::new().collect::<Hand>();
        assert!(seen.size() == crate::DECK_SIZE);
    }

    #[test]
    fn rigged_deck_never_draws_removed_cards() {
        let mut deck = Deck::new();
        let banned = Hand::try_from("As Ah Ad Ac").unwrap();
        deck.remove(banned);
        assert!(deck.size() == crate::DECK_SIZE - 4);
        assert!(deck.all(|c| !banned.contains(&c)));
    }
}
