//! Player valuation
//!
//! A running value starts at the position base and is multiplied, in order, by
//! the position weight, age curve, experience curve, team context, draft
//! capital, positional scarcity, current-season performance and (when given)
//! the league settings. The result is floored and rounded.

use serde::Serialize;
use tracing::debug;

use crate::config::{PlayerValuationConfig, QbFormat};
use crate::curves::{age_multiplier, experience_multiplier, performance_multiplier};
use crate::error::{Result, ValuationError};
use crate::league::LeagueSettingsAdjuster;
use crate::models::{LeagueSettings, PlayerAttributes, PlayerEntry, Position};

/// Starting value by position
pub fn position_base_value(position: Position) -> f64 {
    match position {
        Position::QB => 1000.0,
        Position::RB => 950.0,
        Position::WR => 975.0,
        Position::TE => 850.0,
        Position::K => 500.0,
        Position::DEF => 550.0,
    }
}

/// Lineup weighting by position. Only the QB weight depends on the format.
pub fn position_multiplier(position: Position, qb_format: QbFormat) -> f64 {
    match (position, qb_format) {
        (Position::QB, QbFormat::Superflex) => 1.2,
        (Position::QB, QbFormat::SingleQb) => 1.0,
        (Position::RB, _) => 1.1,
        (Position::WR, _) => 1.05,
        (Position::TE, _) => 0.9,
        (Position::K | Position::DEF, _) => 1.0,
    }
}

/// Premium for positions with thin starter pools
pub fn scarcity_multiplier(position: Position) -> f64 {
    match position {
        Position::RB => 1.05,
        Position::TE => 1.03,
        _ => 1.0,
    }
}

/// Draft round premium. Halved once a player is past his fourth season.
pub fn draft_capital_multiplier(draft_round: Option<u32>, experience: u32) -> f64 {
    let full = match draft_round {
        None => return 1.0,
        Some(1) => 1.15,
        Some(2) => 1.08,
        Some(3) => 1.03,
        Some(4) => 1.0,
        Some(_) => 0.95,
    };
    if experience <= 3 {
        full
    } else {
        1.0 + (full - 1.0) / 2.0
    }
}

/// Every factor that went into a player's value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerValueBreakdown {
    pub base: f64,
    pub position: f64,
    pub age: f64,
    pub experience: f64,
    pub team: f64,
    pub draft_capital: f64,
    pub scarcity: f64,
    pub performance: f64,
    pub league: f64,
    pub raw: f64,
    pub value: u32,
}

/// Computes trade values for players
#[derive(Debug, Clone)]
pub struct PlayerValuator {
    config: PlayerValuationConfig,
}

impl PlayerValuator {
    pub fn new(config: PlayerValuationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlayerValuationConfig {
        &self.config
    }

    /// Value a player, optionally adjusted for league settings
    pub fn value(&self, player: &PlayerAttributes, settings: Option<&LeagueSettings>) -> Result<u32> {
        Ok(self.breakdown(player, settings)?.value)
    }

    /// Value a trade-side entry, normalizing raw records first
    pub fn value_entry(&self, entry: &PlayerEntry, settings: Option<&LeagueSettings>) -> Result<u32> {
        match entry {
            PlayerEntry::Known(player) => self.value(player, settings),
            PlayerEntry::Raw(record) => self.value(&record.normalize()?, settings),
        }
    }

    /// Value a player and report each multiplier applied
    pub fn breakdown(
        &self,
        player: &PlayerAttributes,
        settings: Option<&LeagueSettings>,
    ) -> Result<PlayerValueBreakdown> {
        self.validate(player)?;
        if let Some(settings) = settings {
            settings.validate()?;
        }

        let position = player.position;
        let base = position_base_value(position);
        let position_factor = position_multiplier(position, self.config.qb_format);
        let age = age_multiplier(position, player.age);
        let experience = experience_multiplier(player.experience);
        let team = self.config.team_multiplier(&player.team);
        let draft_capital = draft_capital_multiplier(player.draft_round, player.experience);
        let scarcity = scarcity_multiplier(position);

        let performance = match &player.stats {
            Some(stats) => {
                let ppr = LeagueSettingsAdjuster::points_per_reception(settings, position);
                performance_multiplier(position, stats.clone().sanitized().points_per_game(ppr))
            }
            None => 1.0,
        };

        let league = settings.map_or(1.0, |s| LeagueSettingsAdjuster::player_multiplier(s, position));

        let factors =
            [position_factor, age, experience, team, draft_capital, scarcity, performance, league];
        let raw = factors.iter().fold(base, |value, factor| value * factor);
        if !raw.is_finite() || raw > f64::from(u32::MAX) {
            return Err(ValuationError::invalid_attributes(
                player.label(),
                format!("value {raw} is out of range"),
            ));
        }

        let value = raw.max(self.config.minimum_value).round() as u32;

        debug!(
            "Valued {} ({} {} age {} exp {}): base {} pos {:.3} age {:.3} exp {:.3} team {:.3} \
             draft {:.3} scarcity {:.3} perf {:.3} league {:.3} = {}",
            player.label(),
            position,
            player.team,
            player.age,
            player.experience,
            base,
            position_factor,
            age,
            experience,
            team,
            draft_capital,
            scarcity,
            performance,
            league,
            value
        );

        Ok(PlayerValueBreakdown {
            base,
            position: position_factor,
            age,
            experience,
            team,
            draft_capital,
            scarcity,
            performance,
            league,
            raw,
            value,
        })
    }

    fn validate(&self, player: &PlayerAttributes) -> Result<()> {
        if player.age > self.config.max_plausible_age {
            return Err(ValuationError::invalid_attributes(
                player.label(),
                format!("age {} exceeds {}", player.age, self.config.max_plausible_age),
            ));
        }
        if player.experience > player.age {
            return Err(ValuationError::invalid_attributes(
                player.label(),
                format!("experience {} exceeds age {}", player.experience, player.age),
            ));
        }
        Ok(())
    }
}

impl Default for PlayerValuator {
    fn default() -> Self {
        Self::new(PlayerValuationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeagueFormat, PlayerStats, RawPlayerRecord, ScoringFormat};

    fn rb(age: u32) -> PlayerAttributes {
        PlayerAttributes::new("Test Back", Position::RB, "SF", age).with_experience(2)
    }

    #[test]
    fn test_breakdown_factors() {
        let valuator = PlayerValuator::default();
        let breakdown = valuator.breakdown(&rb(24).with_ppg(20.0), None).unwrap();

        assert_eq!(breakdown.base, 950.0);
        assert_eq!(breakdown.position, 1.1);
        assert!((breakdown.age - 1.075).abs() < 1e-9);
        assert_eq!(breakdown.experience, 1.1);
        assert_eq!(breakdown.team, 1.15);
        assert_eq!(breakdown.draft_capital, 1.0);
        assert_eq!(breakdown.scarcity, 1.05);
        assert!((breakdown.performance - 1.08).abs() < 1e-9);
        assert_eq!(breakdown.league, 1.0);
        assert_eq!(breakdown.value, 1611);
    }

    #[test]
    fn test_missing_stats_is_no_op() {
        let valuator = PlayerValuator::default();
        let without = valuator.breakdown(&rb(24), None).unwrap();
        assert_eq!(without.performance, 1.0);

        // ppg inside the neutral band matches no stats at all
        let neutral = valuator.value(&rb(24).with_ppg(15.0), None).unwrap();
        assert_eq!(neutral, without.value);
    }

    #[test]
    fn test_floor_applies() {
        let valuator = PlayerValuator::default();
        let old_kicker = PlayerAttributes::new("Old Leg", Position::K, "NO", 45).with_experience(22);
        let settings = LeagueSettings::new(ScoringFormat::Standard, LeagueFormat::Redraft, 8);
        assert_eq!(valuator.value(&old_kicker, Some(&settings)).unwrap(), 300);
    }

    #[test]
    fn test_qb_format_switch() {
        let qb = PlayerAttributes::new("Signal Caller", Position::QB, "KC", 28).with_experience(6);
        let superflex = PlayerValuator::default().value(&qb, None).unwrap();
        let single = PlayerValuator::new(PlayerValuationConfig {
            qb_format: QbFormat::SingleQb,
            ..Default::default()
        })
        .value(&qb, None)
        .unwrap();
        assert!(superflex > single);
    }

    #[test]
    fn test_draft_capital() {
        assert_eq!(draft_capital_multiplier(None, 0), 1.0);
        assert_eq!(draft_capital_multiplier(Some(1), 2), 1.15);
        assert!((draft_capital_multiplier(Some(1), 6) - 1.075).abs() < 1e-9);
        assert_eq!(draft_capital_multiplier(Some(6), 0), 0.95);
        assert!((draft_capital_multiplier(Some(7), 5) - 0.975).abs() < 1e-9);
    }

    #[test]
    fn test_te_premium_raises_tight_ends_only() {
        let valuator = PlayerValuator::default();
        let ppr = LeagueSettings::new(ScoringFormat::Ppr, LeagueFormat::Dynasty, 12);
        let tep = LeagueSettings::new(ScoringFormat::TePremium, LeagueFormat::Dynasty, 12);

        let te = PlayerAttributes::new("Big Target", Position::TE, "DET", 27).with_experience(4);
        assert!(valuator.value(&te, Some(&tep)).unwrap() > valuator.value(&te, Some(&ppr)).unwrap());

        let wr = PlayerAttributes::new("Deep Threat", Position::WR, "DET", 25).with_experience(3);
        assert_eq!(valuator.value(&wr, Some(&tep)).unwrap(), valuator.value(&wr, Some(&ppr)).unwrap());
    }

    #[test]
    fn test_derived_ppg_feeds_performance() {
        use crate::models::{SkillSplits, StatSplits};

        let valuator = PlayerValuator::default();
        let stats = PlayerStats {
            games_played: 10,
            splits: StatSplits::Skill(SkillSplits {
                rushing_yards: 1200.0,
                rushing_touchdowns: 12.0,
                receiving_yards: 400.0,
                receiving_touchdowns: 2.0,
                targets: 60.0,
                receptions: 50.0,
            }),
            ..Default::default()
        };
        // 120 + 72 + 40 + 12 + 50 (PPR) = 294 over 10 games
        let ppr = LeagueSettings::new(ScoringFormat::Ppr, LeagueFormat::Dynasty, 12);
        let breakdown = valuator.breakdown(&rb(24).with_stats(stats), Some(&ppr)).unwrap();
        assert!((breakdown.performance - (1.0 + 0.04 * (29.4 - 18.0))).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_stats_count_as_zero() {
        let valuator = PlayerValuator::default();
        let zero = valuator.value(&rb(24).with_ppg(0.0), None).unwrap();
        for ppg in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            assert_eq!(valuator.value(&rb(24).with_ppg(ppg), None).unwrap(), zero, "ppg {ppg}");
        }

        let absurd = rb(24).with_ppg(1e300);
        assert!(matches!(
            valuator.value(&absurd, None),
            Err(ValuationError::InvalidAttributes { .. })
        ));
    }

    #[test]
    fn test_zero_team_league_rejected() {
        let settings = LeagueSettings::new(ScoringFormat::Ppr, LeagueFormat::Dynasty, 0);
        assert!(matches!(
            PlayerValuator::default().value(&rb(24), Some(&settings)),
            Err(ValuationError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_rejects_implausible_attributes() {
        let valuator = PlayerValuator::default();
        let ancient = PlayerAttributes::new("Ancient", Position::QB, "FA", 70);
        assert!(matches!(
            valuator.value(&ancient, None),
            Err(ValuationError::InvalidAttributes { .. })
        ));

        let impossible = PlayerAttributes::new("Impossible", Position::WR, "FA", 20).with_experience(25);
        assert!(valuator.value(&impossible, None).is_err());

        let raw = PlayerEntry::Raw(RawPlayerRecord::manual("Nobody"));
        assert!(matches!(
            valuator.value_entry(&raw, None),
            Err(ValuationError::InvalidAttributes { .. })
        ));
    }
}
