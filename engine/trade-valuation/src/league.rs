//! League settings multipliers
//!
//! One canonical table consumed by both player and pick valuation. Each factor
//! is a step function over an enumerated category; picks and players read
//! separate columns of the same rows.

use crate::models::{LeagueFormat, LeagueSettings, Position, ScoringFormat};

/// Which column of the multiplier table to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetClass {
    Player,
    Pick,
}

/// Stateless accessor over the canonical multiplier table
#[derive(Debug, Clone, Copy, Default)]
pub struct LeagueSettingsAdjuster;

impl LeagueSettingsAdjuster {
    pub fn format_multiplier(format: LeagueFormat, class: AssetClass) -> f64 {
        match (format, class) {
            (LeagueFormat::Dynasty, AssetClass::Pick) => 1.0,
            (LeagueFormat::Dynasty, AssetClass::Player) => 1.3,
            (LeagueFormat::Keeper, AssetClass::Pick) => 0.8,
            (LeagueFormat::Keeper, AssetClass::Player) => 1.1,
            (LeagueFormat::Redraft, AssetClass::Pick) => 0.6,
            (LeagueFormat::Redraft, AssetClass::Player) => 1.0,
        }
    }

    pub fn size_multiplier(size: u32, class: AssetClass) -> f64 {
        match (size, class) {
            (14..=u32::MAX, _) => 1.2,
            (12..=13, AssetClass::Pick) => 1.0,
            (12..=13, AssetClass::Player) => 1.1,
            (10..=11, AssetClass::Pick) => 0.9,
            (10..=11, AssetClass::Player) => 1.0,
            (_, AssetClass::Pick) => 0.8,
            (_, AssetClass::Player) => 0.9,
        }
    }

    /// Scoring factor. Players only see the TE-Premium boost at TE.
    pub fn scoring_multiplier(
        scoring: ScoringFormat,
        class: AssetClass,
        position: Option<Position>,
    ) -> f64 {
        match (scoring, class) {
            (ScoringFormat::TePremium, AssetClass::Pick) => 1.05,
            (ScoringFormat::TePremium, AssetClass::Player) => {
                if position == Some(Position::TE) {
                    1.2
                } else {
                    1.0
                }
            }
            (ScoringFormat::Ppr, _) => 1.0,
            (ScoringFormat::HalfPpr, AssetClass::Pick) => 0.95,
            (ScoringFormat::HalfPpr, AssetClass::Player) => 0.75,
            (ScoringFormat::Standard, AssetClass::Pick) => 0.9,
            (ScoringFormat::Standard, AssetClass::Player) => 0.5,
        }
    }

    /// Combined multiplier for a player at `position`
    pub fn player_multiplier(settings: &LeagueSettings, position: Position) -> f64 {
        Self::format_multiplier(settings.format, AssetClass::Player)
            * Self::size_multiplier(settings.size, AssetClass::Player)
            * Self::scoring_multiplier(settings.scoring, AssetClass::Player, Some(position))
    }

    /// Combined multiplier for a draft pick
    pub fn pick_multiplier(settings: &LeagueSettings) -> f64 {
        Self::format_multiplier(settings.format, AssetClass::Pick)
            * Self::size_multiplier(settings.size, AssetClass::Pick)
            * Self::scoring_multiplier(settings.scoring, AssetClass::Pick, None)
    }

    /// Fantasy points per reception used when deriving PPG from splits.
    /// Half-PPR is assumed when no settings are known.
    pub fn points_per_reception(settings: Option<&LeagueSettings>, position: Position) -> f64 {
        match settings.map(|s| s.scoring) {
            None | Some(ScoringFormat::HalfPpr) => 0.5,
            Some(ScoringFormat::Ppr) => 1.0,
            Some(ScoringFormat::Standard) => 0.0,
            Some(ScoringFormat::TePremium) => {
                if position == Position::TE {
                    1.5
                } else {
                    1.0
                }
            }
        }
    }
}
