use crate::Payout;

/// A final hand's category, ordered by payout.
///
/// This is the full taxonomy of the fixed "9/6 Jacks or Better" pay
/// table: anything below a pair of jacks returns nothing, and the wheel
/// counts as a straight (or straight flush when suited).
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, serde::Serialize)]
pub enum Ranking {
    Nothing,
    JacksOrBetter,
    TwoPair,
    ThreeOAK,
    Straight,
    Flush,
    FullHouse,
    FourOAK,
    StraightFlush,
    RoyalFlush,
}

impl Ranking {
    pub const fn all() -> &'static [Self; 10] {
        &[
            Ranking::Nothing,
            Ranking::JacksOrBetter,
            Ranking::TwoPair,
            Ranking::ThreeOAK,
            Ranking::Straight,
            Ranking::Flush,
            Ranking::FullHouse,
            Ranking::FourOAK,
            Ranking::StraightFlush,
            Ranking::RoyalFlush,
        ]
    }

    /// the fixed payout table, in bet units
    pub const fn payout(&self) -> Payout {
        match self {
            Ranking::Nothing => 0,
            Ranking::JacksOrBetter => 1,
            Ranking::TwoPair => 2,
            Ranking::ThreeOAK => 3,
            Ranking::Straight => 4,
            Ranking::Flush => 6,
            Ranking::FullHouse => 9,
            Ranking::FourOAK => 25,
            Ranking::StraightFlush => 50,
            Ranking::RoyalFlush => 800,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::Nothing => write!(f, "{:<14}", "Nothing"),
            Ranking::JacksOrBetter => write!(f, "{:<14}", "JacksOrBetter"),
            Ranking::TwoPair => write!(f, "{:<14}", "TwoPair"),
            Ranking::ThreeOAK => write!(f, "{:<14}", "ThreeOfAKind"),
            Ranking::Straight => write!(f, "{:<14}", "Straight"),
            Ranking::Flush => write!(f, "{:<14}", "Flush"),
            Ranking::FullHouse => write!(f, "{:<14}", "FullHouse"),
            Ranking::FourOAK => write!(f, "{:<14}", "FourOfAKind"),
            Ranking::StraightFlush => write!(f, "{:<14}", "StraightFlush"),
            Ranking::RoyalFlush => write!(f, "{:<14}", "RoyalFlush"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payout_table() {
        assert!(Ranking::RoyalFlush.payout() == 800);
        assert!(Ranking::StraightFlush.payout() == 50);
        assert!(Ranking::FourOAK.payout() == 25);
        assert!(Ranking::FullHouse.payout() == 9);
        assert!(Ranking::Flush.payout() == 6);
        assert!(Ranking::Straight.payout() == 4);
        assert!(Ranking::ThreeOAK.payout() == 3);
        assert!(Ranking::TwoPair.payout() == 2);
        assert!(Ranking::JacksOrBetter.payout() == 1);
        assert!(Ranking::Nothing.payout() == 0);
    }

    #[test]
    fn ordered_by_payout() {
        let payouts = Ranking::all().iter().map(Ranking::payout).collect::<Vec<_>>();
        assert!(payouts.windows(2).all(|w| w[0] < w[1]));
        assert!(Ranking::RoyalFlush > Ranking::StraightFlush);
        assert!(Ranking::JacksOrBetter > Ranking::Nothing);
    }
}
