use std::io::Read as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use topsis::{Config, DecisionEngine, Ranking, TracingSink, WeightPolicy, DEFAULT_TIE_EPSILON};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod dataset;

/// Rank alternatives against weighted criteria with TOPSIS.
#[derive(Parser)]
#[command(name = "report", version)]
struct Cli {
    /// Decision matrix as CSV ("-" for stdin). Uses the built-in project dataset when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print the ranking as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Scores closer than this are ranked in input order.
    #[arg(long, default_value_t = DEFAULT_TIE_EPSILON)]
    tie_epsilon: f64,

    /// Require criterion weights to sum to 1.
    #[arg(long)]
    strict_weights: bool,

    /// Log every pipeline stage.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let dataset = match &cli.input {
        None => dataset::projects(),
        Some(path) => {
            let input = if path.as_os_str() == "-" {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .context("failed to read stdin")?;
                input
            } else {
                std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?
            };
            dataset::parse_csv(&input).context("invalid decision matrix")?
        }
    };
    tracing::info!(
        criteria = dataset.criteria.len(),
        alternatives = dataset.alternatives.len(),
        "loaded decision matrix"
    );

    let config = Config {
        tie_epsilon: cli.tie_epsilon,
        weight_policy: if cli.strict_weights {
            WeightPolicy::RequireUnitSum { tolerance: 1e-9 }
        } else {
            WeightPolicy::Permissive
        },
    };
    let ranking = DecisionEngine::new(dataset.criteria, dataset.alternatives)
        .with_config(config)
        .with_sink(TracingSink)
        .run()
        .context("ranking failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&ranking)?);
    } else {
        print_report(&ranking);
    }
    Ok(())
}

fn print_report(ranking: &Ranking) {
    println!("================= RESULTS =================");
    for alternative in ranking.iter() {
        println!(
            "{}. {}: score={:.4}, d+={:.3}, d-={:.3}",
            alternative.rank,
            alternative.name,
            alternative.score.as_f64(),
            alternative.distance_to_ideal,
            alternative.distance_to_anti_ideal,
        );
    }
}
