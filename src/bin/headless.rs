//! Run the simulation without a window, sleeping between ticks to hold the target rate

use std::thread;
use std::time::Instant;

use clap::Parser;
use pixel_life::{Config, FixedRate, LifeError, Session, TickOutcome};

#[derive(Parser)]
#[command(name = "headless")]
#[command(about = "Run the pixel_life simulation loop without a window")]
struct Args {
    #[command(flatten)]
    config: Config,

    /// Generations to compute before exiting
    #[arg(long, default_value_t = 600)]
    generations: u64,

    /// Log the population every this many generations
    #[arg(long, default_value_t = 60)]
    report_every: u64,
}

fn main() -> Result<(), LifeError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.config.paused {
        log::warn!("--paused ignored in headless mode");
    }
    let mut session = Session::from_config(&args.config)?.with_paused(false);

    let mut rate = FixedRate::new(args.config.sim_hz, Instant::now());
    let started = Instant::now();

    while session.steps() < args.generations {
        thread::sleep(rate.remaining(Instant::now()));

        let tick_start = Instant::now();
        let outcome = session.simulation_tick();
        rate.complete(tick_start, Instant::now());

        let report = args.report_every.max(1);
        if outcome == TickOutcome::Stepped && session.steps() % report == 0 {
            log::info!(
                "generation {}: {} live, {} tracked",
                session.steps(),
                session.generation().live_count(),
                session.generation().len()
            );
        }
    }

    log::info!(
        "{} generations in {:.2?} ({} overran the {:?} period)",
        session.steps(),
        started.elapsed(),
        rate.overruns(),
        rate.period()
    );
    Ok(())
}
