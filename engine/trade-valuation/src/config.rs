//! Tunable constants for the valuation model

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, ValuationError};
use crate::{
    DEFAULT_FAIRNESS_THRESHOLD, DEFAULT_MINIMUM_PLAYER_VALUE, DEFAULT_PICK_VALUE,
    DEFAULT_PLAYER_VALUE,
};

/// Configuration for player, pick, and trade valuation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    /// Player model parameters
    pub player: PlayerValuationConfig,

    /// Draft pick model parameters
    pub pick: PickValuationConfig,

    /// Trade comparison parameters
    pub trade: TradeConfig,
}

/// How many quarterbacks a lineup starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QbFormat {
    /// One QB slot plus a flex that accepts a QB (or 2QB)
    Superflex,
    /// Single starting QB
    SingleQb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerValuationConfig {
    /// Selects the QB position multiplier
    pub qb_format: QbFormat,

    /// Floor applied to every valued player
    pub minimum_value: f64,

    /// Ages above this are treated as bad data
    pub max_plausible_age: u32,

    /// Team code -> offensive environment multiplier. Unknown codes get 1.0.
    pub team_strength: HashMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickValuationConfig {
    /// Season whose rookie draft is next (offset 0 in the base table)
    pub current_season: i32,

    /// Per-season multiplier applied beyond the base table horizon
    pub season_discount: f64,

    /// Per-round multiplier applied beyond the last tabulated round
    pub beyond_round_decay: f64,

    /// Past seasons still accepted, each worth one discount step more than
    /// the season after it
    pub past_season_retention: u32,

    /// Furthest future season accepted
    pub max_future_seasons: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeConfig {
    /// A trade is fair when the side difference is strictly below this
    pub fairness_threshold: u64,

    /// Value used for players the model cannot value
    pub default_player_value: u32,

    /// Value used for picks the model cannot value
    pub default_pick_value: u32,
}

/// Offensive environment by team code
pub const TEAM_STRENGTH: &[(&str, f64)] = &[
    ("KC", 1.2),
    ("BUF", 1.15),
    ("SF", 1.15),
    ("PHI", 1.1),
    ("CIN", 1.1),
    ("DAL", 1.1),
    ("DET", 1.1),
    ("MIA", 1.05),
    ("LAR", 1.05),
    ("BAL", 1.05),
    ("GB", 1.0),
    ("MIN", 1.0),
    ("NYJ", 1.0),
    ("JAX", 1.0),
    ("CHI", 0.95),
    ("HOU", 0.95),
    ("IND", 0.95),
    ("TB", 0.95),
    ("ATL", 0.95),
    ("LV", 0.9),
    ("TEN", 0.9),
    ("WAS", 0.9),
    ("PIT", 0.9),
    ("LAC", 0.9),
    ("ARI", 0.85),
    ("CAR", 0.85),
    ("NE", 0.85),
    ("CLE", 0.85),
    ("DEN", 0.85),
    ("NYG", 0.85),
    ("SEA", 0.85),
    ("NO", 0.85),
];

/// Season used when nothing else is configured
pub const DEFAULT_CURRENT_SEASON: i32 = 2026;

/// Widest accepted retention or future horizon, in seasons
pub const MAX_SEASON_SPAN: u32 = 50;

impl Default for PlayerValuationConfig {
    fn default() -> Self {
        Self {
            qb_format: QbFormat::Superflex,
            minimum_value: DEFAULT_MINIMUM_PLAYER_VALUE,
            max_plausible_age: 50,
            team_strength: TEAM_STRENGTH
                .iter()
                .map(|(team, multiplier)| (team.to_string(), *multiplier))
                .collect(),
        }
    }
}

impl Default for PickValuationConfig {
    fn default() -> Self {
        Self {
            current_season: DEFAULT_CURRENT_SEASON,
            season_discount: 0.82,
            beyond_round_decay: 0.5,
            past_season_retention: 1,
            max_future_seasons: 10,
        }
    }
}

impl Default for TradeConfig {
    fn default() -> Self {
        Self {
            fairness_threshold: DEFAULT_FAIRNESS_THRESHOLD,
            default_player_value: DEFAULT_PLAYER_VALUE,
            default_pick_value: DEFAULT_PICK_VALUE,
        }
    }
}

impl PlayerValuationConfig {
    /// Team multiplier, 1.0 for free agents and unknown codes
    pub fn team_multiplier(&self, team: &str) -> f64 {
        self.team_strength.get(&team.trim().to_ascii_uppercase()).copied().unwrap_or(1.0)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|raw| raw.trim().parse().ok())
}

impl ValuationConfig {
    /// Load configuration from environment variables. The current season
    /// defaults to this calendar year.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.pick.current_season = chrono::Utc::now().year();

        if let Some(season) = env_parse("TRADE_VALUE_CURRENT_SEASON") {
            config.pick.current_season = season;
        }

        if let Ok(format) = std::env::var("TRADE_VALUE_QB_FORMAT") {
            config.player.qb_format = match format.trim().to_lowercase().as_str() {
                "superflex" | "2qb" | "sf" => QbFormat::Superflex,
                "single" | "1qb" | "singleqb" => QbFormat::SingleQb,
                other => {
                    return Err(ValuationError::Config(format!("unknown QB format '{other}'")))
                }
            };
        }

        if let Some(minimum) = env_parse("TRADE_VALUE_MINIMUM_PLAYER_VALUE") {
            config.player.minimum_value = minimum;
        }

        if let Some(discount) = env_parse("TRADE_VALUE_SEASON_DISCOUNT") {
            config.pick.season_discount = discount;
        }

        if let Some(threshold) = env_parse("TRADE_VALUE_FAIRNESS_THRESHOLD") {
            config.trade.fairness_threshold = threshold;
        }

        if let Some(value) = env_parse("TRADE_VALUE_DEFAULT_PLAYER_VALUE") {
            config.trade.default_player_value = value;
        }

        if let Some(value) = env_parse("TRADE_VALUE_DEFAULT_PICK_VALUE") {
            config.trade.default_pick_value = value;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ValuationConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject parameter combinations the model cannot use
    pub fn validate(&self) -> Result<()> {
        let discount = self.pick.season_discount;
        if !(discount > 0.0 && discount <= 1.0) {
            return Err(ValuationError::Config(format!(
                "season_discount must be in (0, 1], got {discount}"
            )));
        }

        let decay = self.pick.beyond_round_decay;
        if !(decay > 0.0 && decay <= 1.0) {
            return Err(ValuationError::Config(format!(
                "beyond_round_decay must be in (0, 1], got {decay}"
            )));
        }

        if !(1000..=9999).contains(&self.pick.current_season) {
            return Err(ValuationError::Config(format!(
                "current_season must be a four digit year, got {}",
                self.pick.current_season
            )));
        }

        if self.pick.past_season_retention > MAX_SEASON_SPAN
            || self.pick.max_future_seasons > MAX_SEASON_SPAN
        {
            return Err(ValuationError::Config(format!(
                "season horizons are limited to {MAX_SEASON_SPAN} seasons"
            )));
        }

        if !self.player.minimum_value.is_finite() || self.player.minimum_value < 0.0 {
            return Err(ValuationError::Config(format!(
                "minimum_value must be non-negative, got {}",
                self.player.minimum_value
            )));
        }

        if self.trade.fairness_threshold == 0 {
            return Err(ValuationError::Config("fairness_threshold must be positive".to_string()));
        }

        if let Some((team, multiplier)) =
            self.player.team_strength.iter().find(|(_, m)| !m.is_finite() || **m <= 0.0)
        {
            return Err(ValuationError::Config(format!(
                "team multiplier for {team} must be positive, got {multiplier}"
            )));
        }

        Ok(())
    }
}
