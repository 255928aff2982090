//! # Trade Valuation
//!
//! Deterministic valuation of dynasty fantasy football assets and trade
//! balance evaluation.
//!
//! Players are valued from position, age, experience, team context, draft
//! capital and recent performance. Draft picks are valued from a season/round
//! base table with interpolation and extrapolation. Both are adjusted for the
//! league's scoring, format and size, and a trade compares the summed values of
//! its two sides against a fairness threshold.
//!
//! Every function here is pure and synchronous; nothing performs I/O except the
//! optional config file loaders.

pub mod config;
pub mod curves;
pub mod error;
pub mod evaluator;
pub mod labels;
pub mod league;
pub mod models;
pub mod pick;
pub mod player;


pub use config::{PickValuationConfig, PlayerValuationConfig, QbFormat, TradeConfig, ValuationConfig};
pub use error::{Result, ValuationError};
pub use evaluator::TradeEvaluator;
pub use labels::parse_pick_label;
pub use league::LeagueSettingsAdjuster;
pub use models::*;
pub use pick::PickValuator;
pub use player::{PlayerValuator, PlayerValueBreakdown};

/// Current version of the valuation model
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Trades whose side difference is below this are fair
pub const DEFAULT_FAIRNESS_THRESHOLD: u64 = 1000;

/// Floor applied to every player value
pub const DEFAULT_MINIMUM_PLAYER_VALUE: f64 = 300.0;

/// Substituted for players that cannot be valued
pub const DEFAULT_PLAYER_VALUE: u32 = 500;

/// Substituted for picks that cannot be valued
pub const DEFAULT_PICK_VALUE: u32 = 200;

/// Value a player with the default model
pub fn value_player(player: &PlayerAttributes, settings: Option<&LeagueSettings>) -> Result<u32> {
    PlayerValuator::default().value(player, settings)
}

/// Value a draft pick with the default model
pub fn value_pick(pick: &DraftPickIdentity, settings: &LeagueSettings) -> Result<u32> {
    PickValuator::default().value(pick, settings)
}

/// Evaluate a trade with the default model
pub fn evaluate_trade(side_a: &TradeSide, side_b: &TradeSide, settings: &LeagueSettings) -> TradeVerdict {
    TradeEvaluator::default().evaluate(side_a, side_b, settings)
}
