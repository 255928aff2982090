//! Trade Valuation CLI
//!
//! Values players and draft picks and evaluates trades from JSON input:
//! - player: value one or more player records
//! - pick: value draft picks given as labels ("2025 1st", "1.05", ...)
//! - evaluate: score a single two-sided trade
//! - batch: score a list of trades in parallel

mod logging;
mod output;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use trade_valuation::{
    LeagueFormat, LeagueSettings, PickEntry, PlayerEntry, ScoringFormat, TradeEvaluator, TradeSide,
    ValuationConfig,
};

#[derive(Parser)]
#[command(name = "trade-cli")]
#[command(about = "Dynasty fantasy football trade valuation")]
#[command(version)]
struct Cli {
    /// Scoring format: PPR, Half-PPR, Standard, TE-Premium
    #[arg(long, global = true, default_value = "PPR")]
    scoring: ScoringFormat,

    /// League format: Dynasty, Keeper, Redraft
    #[arg(long, global = true, default_value = "Dynasty")]
    format: LeagueFormat,

    /// Number of teams in the league
    #[arg(long, global = true, default_value_t = 12, value_parser = clap::value_parser!(u32).range(1..))]
    league_size: u32,

    /// TOML config file; TRADE_VALUE_* environment variables are used otherwise
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "trade_valuation=debug" (defaults to RUST_LOG, then info)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log format: pretty, json, compact
    #[arg(long, global = true, default_value = "compact")]
    log_format: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Value player records from a JSON file (one record or an array)
    Player { file: PathBuf },

    /// Value draft picks given as labels
    Pick {
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Evaluate a trade from a JSON file with `side_a` and `side_b`
    Evaluate { file: PathBuf },

    /// Evaluate an array of trades from a JSON file
    Batch { file: PathBuf },
}

#[derive(Debug, Deserialize)]
struct TradeInput {
    side_a: TradeSide,
    side_b: TradeSide,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[derive(Debug, Serialize)]
struct ValuedItem {
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ValuedItem {
    fn new(label: String, result: trade_valuation::Result<u32>) -> Self {
        match result {
            Ok(value) => Self { label, value: Some(value), error: None },
            Err(err) => Self { label, value: None, error: Some(err.to_string()) },
        }
    }

    fn render(&self) -> String {
        match (&self.value, &self.error) {
            (Some(value), _) => output::render_value(&self.label, *value),
            (None, Some(error)) => output::render_failure(&self.label, error),
            (None, None) => output::render_failure(&self.label, &"no value"),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ValuationConfig> {
    match path {
        Some(path) => ValuationConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => ValuationConfig::from_env().context("Failed to load config from environment"),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_items(items: &[ValuedItem], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        for item in items {
            println!("{}", item.render());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    logging::initialize_logging(cli.log_level.as_deref(), &cli.log_format)?;

    let config = load_config(cli.config.as_deref())?;
    let settings = LeagueSettings::new(cli.scoring, cli.format, cli.league_size);
    debug!(
        "Settings: {} / {} / {} teams, current season {}",
        settings.scoring, settings.format, settings.size, config.pick.current_season
    );

    let evaluator = TradeEvaluator::new(config);

    match cli.command {
        Commands::Player { file } => {
            let players: OneOrMany<PlayerEntry> = read_json(&file)?;
            let items: Vec<ValuedItem> = players
                .into_vec()
                .iter()
                .map(|entry| {
                    ValuedItem::new(entry.label(), evaluator.players().value_entry(entry, Some(&settings)))
                })
                .collect();
            print_items(&items, cli.json)?;
        }
        Commands::Pick { labels } => {
            let items: Vec<ValuedItem> = labels
                .into_iter()
                .map(|label| {
                    let result = evaluator.picks().value_entry(&PickEntry::Label(label.clone()), &settings);
                    ValuedItem::new(label, result)
                })
                .collect();
            print_items(&items, cli.json)?;
        }
        Commands::Evaluate { file } => {
            let trade: TradeInput = read_json(&file)?;
            let verdict = evaluator.evaluate(&trade.side_a, &trade.side_b, &settings);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&verdict)?);
            } else {
                print!("{}", output::render_verdict(&verdict));
            }
        }
        Commands::Batch { file } => {
            let trades: Vec<TradeInput> = read_json(&file)?;
            info!("Loaded {} trades from {}", trades.len(), file.display());
            let pairs: Vec<(TradeSide, TradeSide)> =
                trades.into_iter().map(|trade| (trade.side_a, trade.side_b)).collect();
            let verdicts = evaluator.evaluate_batch(&pairs, &settings);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&verdicts)?);
            } else {
                for (index, verdict) in verdicts.iter().enumerate() {
                    println!("Trade {}", index + 1);
                    print!("{}", output::render_verdict(verdict));
                }
            }
        }
    }

    Ok(())
}
