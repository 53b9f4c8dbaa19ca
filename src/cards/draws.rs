use super::hand::Hand;
use super::suit::Suit;

/// Partial-draw probes over a dealt hand.
///
/// Each probe is independent and pure: it returns the subset worth
/// retaining if that pattern is the best available draw, or None when
/// the pattern is absent. Absence is a normal outcome, never an error.
/// Run detection is index-based over the fixed 13-rank ladder: a window
/// of four consecutive rank bits, never wrapping through the ace.
pub struct Draws(Hand);

impl From<Hand> for Draws {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Draws {
    /// T-J-Q-K-A
    const ROYALS: u16 = 0b_1111100000000;

    /// exactly four suited cards in T..A
    pub fn four_to_royal_flush(&self) -> Option<Hand> {
        Suit::all()
            .iter()
            .map(|suit| self.royals(suit))
            .find(|kept| kept.size() == 4)
    }

    /// four or more suited cards covering a four-long rank window;
    /// keeps the suited cards inside the window
    pub fn four_to_straight_flush(&self) -> Option<Hand> {
        Suit::all()
            .iter()
            .map(|suit| self.0.of(suit))
            .filter(|suited| suited.size() >= 4)
            .find_map(|suited| Self::window(u16::from(suited)).map(|w| Self::within(suited, w)))
    }

    /// exactly three suited cards in T..A
    pub fn three_to_royal_flush(&self) -> Option<Hand> {
        Suit::all()
            .iter()
            .map(|suit| self.royals(suit))
            .find(|kept| kept.size() == 3)
    }

    /// exactly four cards of one suit. a fifth would be a made flush,
    /// which the strategy cascade consumes before probing
    pub fn four_to_flush(&self) -> Option<Hand> {
        Suit::all()
            .iter()
            .map(|suit| self.0.of(suit))
            .find(|suited| suited.size() == 4)
    }

    /// four consecutive ranks present anywhere on the ladder;
    /// keeps every card whose rank falls inside the window
    pub fn four_to_outside_straight(&self) -> Option<Hand> {
        Self::window(u16::from(self.0)).map(|w| Self::within(self.0, w))
    }

    ///

    fn royals(&self, suit: &Suit) -> Hand {
        self.0
            .of(suit)
            .into_iter()
            .filter(|card| u16::from(card.rank()) & Self::ROYALS != 0)
            .collect()
    }

    /// lowest four-long window of consecutive ranks fully covered by the mask
    fn window(ranks: u16) -> Option<u16> {
        (0..=9).map(|lo| 0b1111u16 << lo).find(|w| ranks & w == *w)
    }

    fn within(hand: Hand, window: u16) -> Hand {
        hand.into_iter()
            .filter(|card| u16::from(card.rank()) & window != 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(s: &str) -> Draws {
        Draws::from(Hand::try_from(s).unwrap())
    }

    #[test]
    fn four_to_royal() {
        let kept = draws("Ts Js Qs Ks 9h").four_to_royal_flush().unwrap();
        assert!(kept == Hand::try_from("Ts Js Qs Ks").unwrap());
        assert!(draws("Ts Js Qs 9s 9h").four_to_royal_flush().is_none());
        assert!(draws("Ts Js Qh Ks 9h").four_to_royal_flush().is_none());
    }

    #[test]
    fn four_to_straight_flush() {
        let kept = draws("5h 6h 7h 8h Kd").four_to_straight_flush().unwrap();
        assert!(kept == Hand::try_from("5h 6h 7h 8h").unwrap());
        assert!(draws("5h 6h 7h 9h Kd").four_to_straight_flush().is_none());
        assert!(draws("5h 6h 7d 8h Kd").four_to_straight_flush().is_none());
    }

    #[test]
    fn three_to_royal() {
        let kept = draws("Ts Js Qs 5h 9d").three_to_royal_flush().unwrap();
        assert!(kept == Hand::try_from("Ts Js Qs").unwrap());
        assert!(draws("Ts Js 5s 5h 9d").three_to_royal_flush().is_none());
    }

    #[test]
    fn four_to_flush() {
        let kept = draws("2s 7s Ts Ks 9h").four_to_flush().unwrap();
        assert!(kept == Hand::try_from("2s 7s Ts Ks").unwrap());
        assert!(draws("2s 7s Ts Kh 9h").four_to_flush().is_none());
    }

    #[test]
    fn four_to_outside_straight() {
        let kept = draws("4c 5d 6h 7s Kd").four_to_outside_straight().unwrap();
        assert!(kept == Hand::try_from("4c 5d 6h 7s").unwrap());
        assert!(draws("4c 5d 6h 8s Kd").four_to_outside_straight().is_none());
    }

    #[test]
    fn outside_straight_windows_span_the_ladder() {
        assert!(draws("2c 3d 4h 5s Kd").four_to_outside_straight().is_some());
        assert!(draws("Jc Qd Kh As 2d").four_to_outside_straight().is_some());
    }

    #[test]
    fn outside_straight_keeps_paired_run_cards() {
        let kept = draws("4c 5d 6h 7s 7d").four_to_outside_straight().unwrap();
        assert!(kept.size() == 5);
    }

    #[test]
    fn no_wheel_wraparound() {
        assert!(draws("As 2d 3h 4s Kd").four_to_outside_straight().is_none());
    }

    #[test]
    fn made_flush_is_not_a_draw() {
        assert!(draws("2s 7s Ts Ks 9s").four_to_flush().is_none());
    }
}
