use clap::Parser;
use drawpoker::analysis::comparison::Battery;
use drawpoker::analysis::comparison::Comparison;
use drawpoker::analysis::frequencies::Frequencies;
use drawpoker::analysis::report::Report;
use drawpoker::play::strategy::Strategy;
use drawpoker::workers::pool::Pool;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Args {
    #[command(about = "Estimate one strategy's average return", alias = "sim")]
    Simulate {
        #[arg(required = true)]
        strategy: String,
        #[arg(long, default_value_t = 1_000_000)]
        trials: usize,
        #[arg(long)]
        workers: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    #[command(
        about = "Run two strategies head to head and measure the influence of randomness",
        alias = "cmp"
    )]
    Compare {
        #[arg(required = true)]
        first: String,
        #[arg(required = true)]
        second: String,
        #[arg(long, default_value_t = 100_000)]
        trials: usize,
        #[arg(long)]
        workers: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Run the fixed battery of strategy comparisons")]
    Battery {
        #[arg(long, default_value_t = 100_000)]
        trials: usize,
        #[arg(long)]
        workers: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Exhaustively tabulate dealt-hand category frequencies")]
    Exact {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    drawpoker::log();
    match Args::parse() {
        Args::Simulate {
            strategy,
            trials,
            workers,
            json,
        } => emit(
            Report::run(Strategy::try_from(strategy.as_str())?, trials, &pool(workers)),
            json,
        ),
        Args::Compare {
            first,
            second,
            trials,
            workers,
            json,
        } => emit(
            Comparison::run(
                Strategy::try_from(first.as_str())?,
                Strategy::try_from(second.as_str())?,
                trials,
                &pool(workers),
            ),
            json,
        ),
        Args::Battery {
            trials,
            workers,
            json,
        } => emit(Battery::run(trials, &pool(workers)), json),
        Args::Exact { json } => emit(Frequencies::exhaust(), json),
    }
}

fn pool(workers: Option<usize>) -> Pool {
    workers.map(Pool::from).unwrap_or_default()
}

fn emit<T>(report: T, json: bool) -> Result<(), Box<dyn std::error::Error>>
where
    T: std::fmt::Display + serde::Serialize,
{
    match json {
        true => println!("{}", serde_json::to_string_pretty(&report)?),
        false => println!("{}", report),
    }
    Ok(())
}
