//! Trade balance evaluation
//!
//! Values every asset on both sides, totals them and compares the totals
//! against the fairness threshold. An asset the model cannot value gets the
//! configured default value instead, and the substitution is reported in the
//! verdict so callers can flag it.

use rayon::prelude::*;
use tracing::{error, info, warn};

use crate::config::{TradeConfig, ValuationConfig};
use crate::error::ValuationError;
use crate::models::{
    AssetKind, AssetValue, LeagueSettings, SideId, SideValuation, Substitution, TradeSide,
    TradeVerdict,
};
use crate::pick::PickValuator;
use crate::player::PlayerValuator;

/// Scores two-sided trades
#[derive(Debug, Clone)]
pub struct TradeEvaluator {
    players: PlayerValuator,
    picks: PickValuator,
    config: TradeConfig,
}

impl TradeEvaluator {
    pub fn new(config: ValuationConfig) -> Self {
        Self {
            players: PlayerValuator::new(config.player),
            picks: PickValuator::new(config.pick),
            config: config.trade,
        }
    }

    pub fn players(&self) -> &PlayerValuator {
        &self.players
    }

    pub fn picks(&self) -> &PickValuator {
        &self.picks
    }

    pub fn config(&self) -> &TradeConfig {
        &self.config
    }

    /// Compare two trade sides. Never fails: bad assets are substituted.
    pub fn evaluate(&self, side_a: &TradeSide, side_b: &TradeSide, settings: &LeagueSettings) -> TradeVerdict {
        let mut substitutions = Vec::new();
        let side_a = self.value_side(SideId::A, side_a, settings, &mut substitutions);
        let side_b = self.value_side(SideId::B, side_b, settings, &mut substitutions);

        let difference = side_a.total.abs_diff(side_b.total);
        let favored = match side_a.total.cmp(&side_b.total) {
            std::cmp::Ordering::Greater => Some(SideId::A),
            std::cmp::Ordering::Less => Some(SideId::B),
            std::cmp::Ordering::Equal => None,
        };

        TradeVerdict {
            side_a,
            side_b,
            difference,
            fair: difference < self.config.fairness_threshold,
            threshold: self.config.fairness_threshold,
            favored,
            substitutions,
        }
    }

    /// Evaluate many trades in parallel, preserving input order
    pub fn evaluate_batch(
        &self,
        trades: &[(TradeSide, TradeSide)],
        settings: &LeagueSettings,
    ) -> Vec<TradeVerdict> {
        let verdicts: Vec<TradeVerdict> =
            trades.par_iter().map(|(a, b)| self.evaluate(a, b, settings)).collect();

        let fair = verdicts.iter().filter(|v| v.fair).count();
        let substituted: usize = verdicts.iter().map(|v| v.substitutions.len()).sum();
        info!(
            "Evaluated {} trades: {} fair, {} unbalanced, {} substituted assets",
            verdicts.len(),
            fair,
            verdicts.len() - fair,
            substituted
        );

        verdicts
    }

    fn value_side(
        &self,
        side: SideId,
        trade_side: &TradeSide,
        settings: &LeagueSettings,
        substitutions: &mut Vec<Substitution>,
    ) -> SideValuation {
        let mut valuation = SideValuation::default();

        for (index, entry) in trade_side.players.iter().enumerate() {
            let label = entry.label();
            let result = self.players.value_entry(entry, Some(settings));
            let asset = self.resolve(side, AssetKind::Player, index, label, result, substitutions);
            valuation.total += u64::from(asset.value);
            valuation.assets.push(asset);
        }

        for (index, entry) in trade_side.picks.iter().enumerate() {
            let label = entry.label();
            let result = self.picks.value_entry(entry, settings);
            let asset = self.resolve(side, AssetKind::Pick, index, label, result, substitutions);
            valuation.total += u64::from(asset.value);
            valuation.assets.push(asset);
        }

        valuation
    }

    fn resolve(
        &self,
        side: SideId,
        kind: AssetKind,
        index: usize,
        label: String,
        result: Result<u32, ValuationError>,
        substitutions: &mut Vec<Substitution>,
    ) -> AssetValue {
        match result {
            Ok(value) => AssetValue { kind, label, value, substituted: false },
            Err(err) => {
                let value = match kind {
                    AssetKind::Player => self.config.default_player_value,
                    AssetKind::Pick => self.config.default_pick_value,
                };
                if err.is_recoverable() {
                    warn!("{side}: substituting {value} for '{label}': {err}");
                } else {
                    error!("{side}: unexpected error valuing '{label}', substituting {value}: {err}");
                }
                substitutions.push(Substitution {
                    side,
                    kind,
                    index,
                    label: label.clone(),
                    reason: err.to_string(),
                    value,
                });
                AssetValue { kind, label, value, substituted: true }
            }
        }
    }
}

impl Default for TradeEvaluator {
    fn default() -> Self {
        Self::new(ValuationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DraftPickIdentity, PlayerAttributes, Position, RawPlayerRecord};

    fn evaluator_with_threshold(threshold: u64) -> TradeEvaluator {
        let mut config = ValuationConfig::default();
        config.trade.fairness_threshold = threshold;
        TradeEvaluator::new(config)
    }

    #[test]
    fn test_empty_sides_are_fair() {
        let verdict =
            TradeEvaluator::default().evaluate(&TradeSide::new(), &TradeSide::new(), &LeagueSettings::default());
        assert_eq!(verdict.total_a(), 0);
        assert_eq!(verdict.total_b(), 0);
        assert_eq!(verdict.difference, 0);
        assert!(verdict.fair);
        assert_eq!(verdict.favored, None);
    }

    #[test]
    fn test_threshold_is_strict() {
        // 1.01 vs 1.02 in the current season: 1000 vs 900
        let season = crate::config::DEFAULT_CURRENT_SEASON;
        let a = TradeSide::new().with_pick(DraftPickIdentity::new(season, 1, 1));
        let b = TradeSide::new().with_pick(DraftPickIdentity::new(season, 1, 2));
        let settings = LeagueSettings::default();

        let at_boundary = evaluator_with_threshold(100).evaluate(&a, &b, &settings);
        assert_eq!(at_boundary.difference, 100);
        assert!(!at_boundary.fair);
        assert_eq!(at_boundary.favored, Some(SideId::A));

        let above = evaluator_with_threshold(101).evaluate(&a, &b, &settings);
        assert!(above.fair);
    }

    #[test]
    fn test_substitutes_defaults_and_continues() {
        let evaluator = TradeEvaluator::default();
        let good = PlayerAttributes::new("Starter", Position::WR, "MIA", 25).with_experience(3);
        let good_value = evaluator.players().value(&good, Some(&LeagueSettings::default())).unwrap();

        let a = TradeSide::new()
            .with_player(good)
            .with_player(RawPlayerRecord::manual("Manual Entry"))
            .with_pick("a future first");
        let verdict = evaluator.evaluate(&a, &TradeSide::new(), &LeagueSettings::default());

        assert_eq!(verdict.total_a(), u64::from(good_value) + 500 + 200);
        assert_eq!(verdict.substitutions.len(), 2);

        let player_sub = &verdict.substitutions[0];
        assert_eq!(player_sub.side, SideId::A);
        assert_eq!(player_sub.kind, AssetKind::Player);
        assert_eq!(player_sub.index, 1);
        assert_eq!(player_sub.value, 500);

        let pick_sub = &verdict.substitutions[1];
        assert_eq!(pick_sub.kind, AssetKind::Pick);
        assert_eq!(pick_sub.label, "a future first");
        assert_eq!(pick_sub.value, 200);

        assert_eq!(verdict.side_a.assets.iter().filter(|asset| asset.substituted).count(), 2);
    }

    #[test]
    fn test_batch_preserves_order() {
        let evaluator = TradeEvaluator::default();
        let season = crate::config::DEFAULT_CURRENT_SEASON;
        let first = TradeSide::new().with_pick(DraftPickIdentity::new(season, 1, 1));
        let third = TradeSide::new().with_pick(DraftPickIdentity::new(season, 3, 1));

        let trades = vec![
            (first.clone(), third.clone()),
            (third.clone(), first.clone()),
            (first.clone(), first.clone()),
        ];
        let settings = LeagueSettings::default();
        let verdicts = evaluator.evaluate_batch(&trades, &settings);

        assert_eq!(verdicts.len(), 3);
        assert_eq!(verdicts[0].favored, Some(SideId::A));
        assert_eq!(verdicts[1].favored, Some(SideId::B));
        assert_eq!(verdicts[2].favored, None);
        assert_eq!(verdicts[0], evaluator.evaluate(&first, &third, &settings));
    }
}
