use crate::play::strategy::Strategy;
use crate::workers::pool::Pool;
use crate::workers::summary::Summary;
use colored::Colorize;

/// Head-to-head run of two strategies, reduced to the relative
/// influence of randomness on the first one's results.
///
/// ME is the first strategy's mean return, IP its dispersion, and IC
/// the dispersion of the second strategy playing the same game. The
/// ratio IC / (|ME| + IP + IC) reads as how much of the outcome spread
/// is explained by chance rather than skill.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Comparison {
    first: Strategy,
    second: Strategy,
    trials: usize,
    me: f64,
    ip: f64,
    ic: f64,
    power: f64,
    second_mean: f64,
}

impl Comparison {
    pub fn run(first: Strategy, second: Strategy, trials: usize, pool: &Pool) -> Self {
        let ref a = pool.run(first, trials);
        let ref b = pool.run(second, trials);
        Self::from((first, second, a, b))
    }

    pub fn power(&self) -> f64 {
        self.power
    }
    pub fn means(&self) -> (f64, f64) {
        (self.me, self.second_mean)
    }
}

impl From<(Strategy, Strategy, &Summary, &Summary)> for Comparison {
    fn from((first, second, a, b): (Strategy, Strategy, &Summary, &Summary)) -> Self {
        let me = a.mean();
        let ip = a.mad();
        let ic = b.mad();
        let denom = me.abs() + ip + ic;
        Self {
            first,
            second,
            trials: a.n(),
            me,
            ip,
            ic,
            power: if denom == 0. { 0. } else { ic / denom },
            second_mean: b.mean(),
        }
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "{} vs {}  ({} trials)",
            self.first.to_string().bold(),
            self.second.to_string().bold(),
            self.trials,
        )?;
        writeln!(f, "  mean return   {:.4}  {:.4}", self.me, self.second_mean)?;
        write!(f, "  randomness    {}", format!("{:.4}", self.power).cyan())
    }
}

/// The fixed battery of strategy comparisons the simulator ships with.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Battery(Vec<Comparison>);

impl Battery {
    pub const PAIRS: [(Strategy, Strategy); 5] = [
        (Strategy::Perfect, Strategy::Worst),
        (Strategy::Perfect, Strategy::Random),
        (Strategy::Basic, Strategy::Random),
        (Strategy::Basic, Strategy::Worst),
        (Strategy::Perfect, Strategy::Basic),
    ];

    pub fn run(trials: usize, pool: &Pool) -> Self {
        Self(
            Self::PAIRS
                .iter()
                .map(|(first, second)| Comparison::run(*first, *second, trials, pool))
                .collect(),
        )
    }
}

impl std::fmt::Display for Battery {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for comparison in self.0.iter() {
            writeln!(f, "{}", comparison)?;
        }
        Ok(())
    }
}
