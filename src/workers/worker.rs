use crate::play::game::Game;
use crate::play::strategy::Strategy;
use crate::Payout;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::mpsc::Sender;

/// Worker runs a batch of independent trials on its own thread.
///
/// Each trial constructs its own Deck and draws from the thread-local
/// rng, so workers share nothing but the completion channel. The hand
/// counter is atomic so the pool can read progress across threads.
pub struct Worker {
    index: usize,
    hands: AtomicUsize,
}

impl Worker {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            hands: AtomicUsize::new(0),
        }
    }

    pub fn hands(&self) -> usize {
        self.hands.load(Ordering::Relaxed)
    }

    /// play every trial in the batch, pushing each payout into the
    /// completion channel as it lands
    pub fn run(&self, strategy: Strategy, trials: usize, results: Sender<Payout>) {
        for _ in 0..trials {
            let payout = Game::play(strategy).expect("strategies complete hands to five cards");
            self.hands.fetch_add(1, Ordering::Relaxed);
            results.send(payout).expect("pool outlives its workers");
        }
        log::debug!("worker {} finished {} hands of {}", self.index, self.hands(), strategy);
    }
}
