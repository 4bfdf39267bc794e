use std::path::PathBuf;

use clap::Parser;
use driver::{random_batch, run_mission, MissionConfig, Recorder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rover::{visualize, Position};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Command batches to execute in order, e.g. `FFRF RF`
    batches: Vec<String>,

    /// Path to a mission JSON file. Batches given on the command line run after its own batches.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Width of a wrap-around grid. Requires --y-limit.
    #[arg(long)]
    x_limit: Option<i64>,

    /// Height of a wrap-around grid. Requires --x-limit.
    #[arg(long)]
    y_limit: Option<i64>,

    /// A cell the rover may not enter, as `x,y`. Can be repeated.
    #[arg(long = "obstacle", value_parser = parse_position, allow_hyphen_values = true)]
    obstacles: Vec<Position>,

    /// Reject batches containing anything other than F, B, L and R
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Append a batch of this many random commands
    #[arg(long)]
    random_steps: Option<usize>,

    /// RNG seed for --random-steps
    #[arg(long)]
    seed: Option<u64>,

    /// Record the state after every batch as JSON into this file
    #[arg(short, long)]
    record_to: Option<PathBuf>,

    /// Draw the grid after the mission
    #[arg(short, long, default_value_t = false)]
    draw: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got '{}'", s))?;
    let x = x.trim().parse::<i64>().map_err(|err| err.to_string())?;
    let y = y.trim().parse::<i64>().map_err(|err| err.to_string())?;
    Ok(Position::new(x, y))
}

fn mission_from_args(args: &Args) -> anyhow::Result<MissionConfig> {
    let mut config = if let Some(path) = &args.config {
        if args.x_limit.is_some() || args.y_limit.is_some() || !args.obstacles.is_empty() {
            anyhow::bail!("--x-limit, --y-limit and --obstacle cannot be combined with --config");
        }
        let mut config = MissionConfig::load(path)?;
        config.batches.extend(args.batches.iter().cloned());
        config
    } else {
        MissionConfig {
            x_limit: args.x_limit,
            y_limit: args.y_limit,
            obstacles: args.obstacles.iter().copied().collect(),
            batches: args.batches.clone(),
            strict: false,
        }
    };
    config.strict |= args.strict;

    if let Some(steps) = args.random_steps {
        let seed = args.seed.unwrap_or_else(rand::random);
        info!(seed, steps, "Adding random batch");
        let mut rng = StdRng::seed_from_u64(seed);
        config.batches.push(random_batch(&mut rng, steps));
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = mission_from_args(&args)?;

    let mut recorder = if let Some(path) = args.record_to {
        Some(Recorder::new(path)?)
    } else {
        None
    };

    let result = run_mission(&config, &mut recorder)?;

    if args.draw {
        println!("{}", visualize(&result.rover));
    }
    let (x, y, heading) = result.rover.state().as_triple();
    println!("{} {} {}", x, y, heading);

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
