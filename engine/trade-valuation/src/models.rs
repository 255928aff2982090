//! Value types consumed and produced by the valuation core

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValuationError;

/// Roster position. Closed set; anything else is rejected at normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
}

impl Position {
    pub const ALL: [Position; 6] =
        [Position::QB, Position::RB, Position::WR, Position::TE, Position::K, Position::DEF];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" | "PK" => Ok(Position::K),
            "DEF" | "DST" | "D/ST" => Ok(Position::DEF),
            other => Err(format!("unknown position '{other}'")),
        }
    }
}

/// Scoring system of the league
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringFormat {
    #[serde(rename = "PPR")]
    Ppr,
    #[serde(rename = "Half-PPR")]
    HalfPpr,
    #[serde(rename = "Standard")]
    Standard,
    #[serde(rename = "TE Premium", alias = "TE-Premium")]
    TePremium,
}

impl fmt::Display for ScoringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoringFormat::Ppr => "PPR",
            ScoringFormat::HalfPpr => "Half-PPR",
            ScoringFormat::Standard => "Standard",
            ScoringFormat::TePremium => "TE Premium",
        };
        f.write_str(label)
    }
}

impl FromStr for ScoringFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String =
            s.chars().filter(|c| c.is_ascii_alphanumeric()).collect::<String>().to_lowercase();
        match normalized.as_str() {
            "ppr" | "full" | "fullppr" => Ok(ScoringFormat::Ppr),
            "halfppr" | "half" => Ok(ScoringFormat::HalfPpr),
            "standard" | "std" | "nonppr" => Ok(ScoringFormat::Standard),
            "tepremium" | "tep" => Ok(ScoringFormat::TePremium),
            _ => Err(format!("unknown scoring format '{s}'")),
        }
    }
}

/// Roster persistence format of the league
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeagueFormat {
    Dynasty,
    #[serde(alias = "Yearly")]
    Keeper,
    Redraft,
}

impl fmt::Display for LeagueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LeagueFormat::Dynasty => "Dynasty",
            LeagueFormat::Keeper => "Keeper",
            LeagueFormat::Redraft => "Redraft",
        };
        f.write_str(label)
    }
}

impl FromStr for LeagueFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dynasty" => Ok(LeagueFormat::Dynasty),
            "keeper" | "yearly" => Ok(LeagueFormat::Keeper),
            "redraft" => Ok(LeagueFormat::Redraft),
            _ => Err(format!("unknown league format '{s}'")),
        }
    }
}

/// League settings supplied by the caller for a single evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueSettings {
    pub scoring: ScoringFormat,
    pub format: LeagueFormat,
    #[serde(alias = "league_size")]
    pub size: u32,
}

impl LeagueSettings {
    pub fn new(scoring: ScoringFormat, format: LeagueFormat, size: u32) -> Self {
        Self { scoring, format, size }
    }

    /// Number of picks in a draft round
    pub fn slots_per_round(&self) -> u32 {
        self.size
    }

    /// Reject settings no league can have
    pub fn validate(&self) -> Result<(), ValuationError> {
        if self.size == 0 {
            return Err(ValuationError::InvalidSettings("league size must be positive".to_string()));
        }
        Ok(())
    }
}

impl Default for LeagueSettings {
    fn default() -> Self {
        Self { scoring: ScoringFormat::Ppr, format: LeagueFormat::Dynasty, size: 12 }
    }
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Per-position split of season totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatSplits {
    #[default]
    None,
    Passing(PassingSplits),
    Skill(SkillSplits),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassingSplits {
    #[serde(deserialize_with = "null_as_default")]
    pub passing_yards: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub passing_touchdowns: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub interceptions: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub rushing_yards: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub rushing_touchdowns: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillSplits {
    #[serde(deserialize_with = "null_as_default")]
    pub rushing_yards: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub rushing_touchdowns: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub receiving_yards: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub receiving_touchdowns: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub targets: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub receptions: f64,
}

/// Current-season performance. Absent or null numbers deserialize as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    #[serde(deserialize_with = "null_as_default")]
    pub games_played: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub ppg: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub yards: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub touchdowns: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub snap_pct: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub rushing_attempts: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub splits: StatSplits,
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl PlayerStats {
    /// Replace NaN and infinite numbers with 0
    pub fn sanitized(mut self) -> Self {
        for field in [
            &mut self.ppg,
            &mut self.yards,
            &mut self.touchdowns,
            &mut self.snap_pct,
            &mut self.rushing_attempts,
        ] {
            *field = finite_or_zero(*field);
        }
        match &mut self.splits {
            StatSplits::None => {}
            StatSplits::Passing(p) => {
                for field in [
                    &mut p.passing_yards,
                    &mut p.passing_touchdowns,
                    &mut p.interceptions,
                    &mut p.rushing_yards,
                    &mut p.rushing_touchdowns,
                ] {
                    *field = finite_or_zero(*field);
                }
            }
            StatSplits::Skill(s) => {
                for field in [
                    &mut s.rushing_yards,
                    &mut s.rushing_touchdowns,
                    &mut s.receiving_yards,
                    &mut s.receiving_touchdowns,
                    &mut s.targets,
                    &mut s.receptions,
                ] {
                    *field = finite_or_zero(*field);
                }
            }
        }
        self
    }

    /// Fantasy points scored from the splits, before dividing by games
    pub fn split_points(&self, points_per_reception: f64) -> f64 {
        match &self.splits {
            StatSplits::None => 0.0,
            StatSplits::Passing(p) => {
                p.passing_yards * 0.04 + p.passing_touchdowns * 4.0 - p.interceptions * 2.0
                    + p.rushing_yards * 0.1
                    + p.rushing_touchdowns * 6.0
            }
            StatSplits::Skill(s) => {
                s.rushing_yards * 0.1
                    + s.rushing_touchdowns * 6.0
                    + s.receiving_yards * 0.1
                    + s.receiving_touchdowns * 6.0
                    + s.receptions * points_per_reception
            }
        }
    }

    /// Points per game: the reported figure, or one derived from the splits
    /// when none was reported.
    pub fn points_per_game(&self, points_per_reception: f64) -> f64 {
        if self.ppg > 0.0 {
            return self.ppg;
        }
        if self.games_played == 0 {
            return 0.0;
        }
        let derived = self.split_points(points_per_reception) / self.games_played as f64;
        (derived * 10.0).round() / 10.0
    }
}

/// Normalized player record entering valuation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub position: Position,
    #[serde(default = "free_agent")]
    pub team: String,
    pub age: u32,
    #[serde(default)]
    pub experience: u32,
    #[serde(default)]
    pub draft_round: Option<u32>,
    #[serde(default)]
    pub stats: Option<PlayerStats>,
}

fn free_agent() -> String {
    "FA".to_string()
}

impl PlayerAttributes {
    pub fn new(name: impl Into<String>, position: Position, team: impl Into<String>, age: u32) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            position,
            team: team.into(),
            age,
            experience: 0,
            draft_round: None,
            stats: None,
        }
    }

    #[must_use]
    pub fn with_experience(mut self, experience: u32) -> Self {
        self.experience = experience;
        self
    }

    #[must_use]
    pub fn with_draft_round(mut self, round: u32) -> Self {
        self.draft_round = Some(round);
        self
    }

    #[must_use]
    pub fn with_stats(mut self, stats: PlayerStats) -> Self {
        self.stats = Some(stats);
        self
    }

    #[must_use]
    pub fn with_ppg(self, ppg: f64) -> Self {
        self.with_stats(PlayerStats { ppg, ..Default::default() })
    }

    /// Display label used in logs and substitution reports
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            format!("{} ({})", self.id, self.position)
        } else {
            self.name.clone()
        }
    }
}

/// Ingestion-shaped player record where anything may be missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPlayerRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub position: Option<String>,
    pub team: Option<String>,
    pub age: Option<i32>,
    pub experience: Option<i32>,
    pub draft_round: Option<i32>,
    pub stats: Option<PlayerStats>,
}

impl RawPlayerRecord {
    /// A manually entered player known only by name
    pub fn manual(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Default::default() }
    }

    pub fn label(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.id.clone())
            .unwrap_or_else(|| "unnamed player".to_string())
    }

    /// Coerce into [`PlayerAttributes`], rejecting records the model cannot value
    pub fn normalize(&self) -> Result<PlayerAttributes, ValuationError> {
        let label = self.label();

        let position = match self.position.as_deref() {
            Some(raw) => raw
                .parse::<Position>()
                .map_err(|reason| ValuationError::invalid_attributes(&label, reason))?,
            None => return Err(ValuationError::invalid_attributes(&label, "missing position")),
        };

        let age = match self.age {
            Some(age) if age < 0 => {
                return Err(ValuationError::invalid_attributes(&label, format!("negative age {age}")))
            }
            Some(age) => age as u32,
            None => return Err(ValuationError::invalid_attributes(&label, "missing age")),
        };

        let experience = match self.experience {
            Some(years) if years < 0 => {
                return Err(ValuationError::invalid_attributes(
                    &label,
                    format!("negative experience {years}"),
                ))
            }
            Some(years) => years as u32,
            None => 0,
        };

        let team = match self.team.as_deref().map(str::trim) {
            Some(team) if !team.is_empty() => team.to_ascii_uppercase(),
            _ => free_agent(),
        };

        Ok(PlayerAttributes {
            id: self.id.clone().unwrap_or_default(),
            name: self.name.clone().unwrap_or_default(),
            position,
            team,
            age,
            experience,
            draft_round: self.draft_round.filter(|round| *round > 0).map(|round| round as u32),
            stats: self.stats.clone().map(PlayerStats::sanitized),
        })
    }
}

impl From<PlayerAttributes> for RawPlayerRecord {
    fn from(player: PlayerAttributes) -> Self {
        Self {
            id: Some(player.id),
            name: Some(player.name),
            position: Some(player.position.to_string()),
            team: Some(player.team),
            age: i32::try_from(player.age).ok(),
            experience: i32::try_from(player.experience).ok(),
            draft_round: player.draft_round.and_then(|round| i32::try_from(round).ok()),
            stats: player.stats,
        }
    }
}

/// A player slot on one side of a trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerEntry {
    Known(PlayerAttributes),
    Raw(RawPlayerRecord),
}

impl PlayerEntry {
    pub fn label(&self) -> String {
        match self {
            PlayerEntry::Known(player) => player.label(),
            PlayerEntry::Raw(record) => record.label(),
        }
    }
}

impl From<PlayerAttributes> for PlayerEntry {
    fn from(player: PlayerAttributes) -> Self {
        PlayerEntry::Known(player)
    }
}

impl From<RawPlayerRecord> for PlayerEntry {
    fn from(record: RawPlayerRecord) -> Self {
        PlayerEntry::Raw(record)
    }
}

/// Canonical identity of a rookie draft pick. No slot means a round-aggregate
/// estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftPickIdentity {
    pub season: i32,
    pub round: u32,
    #[serde(default)]
    pub slot: Option<u32>,
}

impl DraftPickIdentity {
    pub fn new(season: i32, round: u32, slot: u32) -> Self {
        Self { season, round, slot: Some(slot) }
    }

    pub fn round_only(season: i32, round: u32) -> Self {
        Self { season, round, slot: None }
    }
}

impl fmt::Display for DraftPickIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot {
            Some(slot) => write!(f, "{} {}.{:02}", self.season, self.round, slot),
            None => write!(f, "{} Round {}", self.season, self.round),
        }
    }
}

/// A pick slot on one side of a trade: structured, or a free-text label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PickEntry {
    Identity(DraftPickIdentity),
    Label(String),
}

impl PickEntry {
    pub fn label(&self) -> String {
        match self {
            PickEntry::Identity(pick) => pick.to_string(),
            PickEntry::Label(label) => label.clone(),
        }
    }
}

impl From<DraftPickIdentity> for PickEntry {
    fn from(pick: DraftPickIdentity) -> Self {
        PickEntry::Identity(pick)
    }
}

impl From<&str> for PickEntry {
    fn from(label: &str) -> Self {
        PickEntry::Label(label.to_string())
    }
}

/// Everything one manager gives up in a trade
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeSide {
    pub players: Vec<PlayerEntry>,
    pub picks: Vec<PickEntry>,
}

impl TradeSide {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_player(mut self, player: impl Into<PlayerEntry>) -> Self {
        self.players.push(player.into());
        self
    }

    #[must_use]
    pub fn with_pick(mut self, pick: impl Into<PickEntry>) -> Self {
        self.picks.push(pick.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.picks.is_empty()
    }
}

/// Which side of a trade an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SideId {
    A,
    B,
}

impl fmt::Display for SideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SideId::A => f.write_str("Side A"),
            SideId::B => f.write_str("Side B"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Player,
    Pick,
}

/// One valued asset in a trade side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetValue {
    pub kind: AssetKind,
    pub label: String,
    pub value: u32,
    pub substituted: bool,
}

/// Default value used in place of an asset the model could not value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub side: SideId,
    pub kind: AssetKind,
    pub index: usize,
    pub label: String,
    pub reason: String,
    pub value: u32,
}

/// Per-side totals with the itemized assets that produced them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideValuation {
    pub total: u64,
    pub assets: Vec<AssetValue>,
}

/// Outcome of comparing two trade sides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeVerdict {
    pub side_a: SideValuation,
    pub side_b: SideValuation,
    pub difference: u64,
    pub fair: bool,
    pub threshold: u64,
    pub favored: Option<SideId>,
    pub substitutions: Vec<Substitution>,
}

impl TradeVerdict {
    pub fn total_a(&self) -> u64 {
        self.side_a.total
    }

    pub fn total_b(&self) -> u64 {
        self.side_b.total
    }

    /// Human-readable one-line summary
    pub fn summary(&self) -> String {
        match (self.fair, self.favored) {
            (true, _) => format!("Fair trade (difference {} < {})", self.difference, self.threshold),
            (false, Some(side)) => {
                format!("Unbalanced by {} points in favor of {side}", self.difference)
            }
            (false, None) => format!("Unbalanced by {} points", self.difference),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_parsing() {
        assert_eq!("qb".parse::<Position>(), Ok(Position::QB));
        assert_eq!(" DST ".parse::<Position>(), Ok(Position::DEF));
        assert!("LB".parse::<Position>().is_err());
    }

    #[test]
    fn test_settings_deserialize_source_labels() {
        let json = r#"{"scoring":"TE Premium","format":"Yearly","league_size":10}"#;
        let settings: LeagueSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.scoring, ScoringFormat::TePremium);
        assert_eq!(settings.format, LeagueFormat::Keeper);
        assert_eq!(settings.size, 10);

        assert_eq!("half ppr".parse::<ScoringFormat>(), Ok(ScoringFormat::HalfPpr));
        assert_eq!("Half-PPR".parse::<ScoringFormat>(), Ok(ScoringFormat::HalfPpr));
    }

    #[test]
    fn test_normalize_defaults_missing_fields() {
        let record = RawPlayerRecord {
            name: Some("Rookie".to_string()),
            position: Some("wr".to_string()),
            age: Some(21),
            ..Default::default()
        };
        let player = record.normalize().unwrap();
        assert_eq!(player.position, Position::WR);
        assert_eq!(player.team, "FA");
        assert_eq!(player.experience, 0);
        assert!(player.stats.is_none());
    }

    #[test]
    fn test_normalize_rejects_bad_records() {
        let missing_position = RawPlayerRecord { age: Some(25), ..RawPlayerRecord::manual("X") };
        assert!(matches!(
            missing_position.normalize(),
            Err(ValuationError::InvalidAttributes { .. })
        ));

        let negative_age = RawPlayerRecord {
            position: Some("RB".to_string()),
            age: Some(-1),
            ..RawPlayerRecord::manual("Y")
        };
        assert!(negative_age.normalize().is_err());

        let negative_exp = RawPlayerRecord {
            position: Some("RB".to_string()),
            age: Some(24),
            experience: Some(-2),
            ..RawPlayerRecord::manual("Z")
        };
        assert!(negative_exp.normalize().is_err());
    }

    #[test]
    fn test_sanitize_replaces_non_finite() {
        let stats = PlayerStats { ppg: f64::NAN, yards: f64::INFINITY, ..Default::default() };
        let clean = stats.sanitized();
        assert_eq!(clean.ppg, 0.0);
        assert_eq!(clean.yards, 0.0);
    }

    #[test]
    fn test_null_stats_deserialize_as_zero() {
        let json = r#"{"players":[
            {"name":"Nully","position":"RB","age":24,"stats":{"ppg":null,"games_played":null,"splits":null}},
            {"name":"Split Nulls","position":"qb","age":30,
             "stats":{"splits":{"kind":"passing","passing_yards":null,"passing_touchdowns":3}}}
        ]}"#;
        let side: TradeSide = serde_json::from_str(json).unwrap();
        assert_eq!(side.players.len(), 2);

        let PlayerEntry::Known(nully) = &side.players[0] else {
            panic!("expected a known player, got {:?}", side.players[0]);
        };
        assert_eq!(nully.stats, Some(PlayerStats::default()));

        let PlayerEntry::Raw(record) = &side.players[1] else {
            panic!("lowercase position should fall back to a raw record");
        };
        let stats = record.normalize().unwrap().stats.unwrap();
        let StatSplits::Passing(passing) = stats.splits else {
            panic!("expected passing splits");
        };
        assert_eq!(passing.passing_yards, 0.0);
        assert_eq!(passing.passing_touchdowns, 3.0);
    }

    #[test]
    fn test_points_per_game_derived_from_splits() {
        let stats = PlayerStats {
            games_played: 2,
            splits: StatSplits::Passing(PassingSplits {
                passing_yards: 500.0,
                passing_touchdowns: 4.0,
                interceptions: 1.0,
                rushing_yards: 30.0,
                rushing_touchdowns: 0.0,
            }),
            ..Default::default()
        };
        // 20 + 16 - 2 + 3 = 37 over 2 games
        assert_eq!(stats.points_per_game(0.5), 18.5);

        let reported = PlayerStats { ppg: 12.3, ..stats };
        assert_eq!(reported.points_per_game(0.5), 12.3);
    }

    #[test]
    fn test_entry_untagged_falls_back_to_raw() {
        let known: PlayerEntry =
            serde_json::from_str(r#"{"name":"A","position":"QB","age":27}"#).unwrap();
        assert!(matches!(known, PlayerEntry::Known(_)));

        let manual: PlayerEntry = serde_json::from_str(r#"{"name":"Manual Guy"}"#).unwrap();
        assert!(matches!(manual, PlayerEntry::Raw(_)));

        let pick: PickEntry = serde_json::from_str(r#""2025 1st""#).unwrap();
        assert_eq!(pick, PickEntry::Label("2025 1st".to_string()));

        let pick: PickEntry =
            serde_json::from_str(r#"{"season":2025,"round":1,"slot":3}"#).unwrap();
        assert_eq!(pick, PickEntry::Identity(DraftPickIdentity::new(2025, 1, 3)));
    }

    #[test]
    fn test_pick_display() {
        assert_eq!(DraftPickIdentity::new(2025, 1, 3).to_string(), "2025 1.03");
        assert_eq!(DraftPickIdentity::round_only(2026, 2).to_string(), "2026 Round 2");
    }
}
