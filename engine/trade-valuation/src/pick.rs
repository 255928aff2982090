//! Draft pick valuation
//!
//! Base values come from a table indexed by season offset (0 = the current
//! season's rookie draft) and round, with anchor values at known slots.
//! Missing slots are linearly interpolated; rounds and seasons past the table
//! are extrapolated with the configured decay and discount.

use tracing::debug;

use crate::config::PickValuationConfig;
use crate::error::{Result, ValuationError};
use crate::labels::parse_pick_label;
use crate::league::LeagueSettingsAdjuster;
use crate::models::{DraftPickIdentity, LeagueSettings, PickEntry};

/// (slot, base value) anchors for one round, sorted by slot
type SlotAnchors = &'static [(u32, f64)];

const CURRENT_SEASON_ROUNDS: &[SlotAnchors] = &[
    &[
        (1, 1000.0),
        (2, 900.0),
        (3, 850.0),
        (4, 800.0),
        (5, 750.0),
        (6, 700.0),
        (7, 650.0),
        (8, 600.0),
        (9, 550.0),
        (10, 525.0),
        (11, 500.0),
        (12, 475.0),
    ],
    &[
        (1, 450.0),
        (2, 425.0),
        (3, 400.0),
        (4, 375.0),
        (5, 350.0),
        (6, 325.0),
        (7, 300.0),
        (8, 275.0),
        (9, 250.0),
        (10, 240.0),
        (11, 230.0),
        (12, 220.0),
    ],
    &[(1, 210.0), (12, 150.0)],
    &[(1, 125.0), (12, 100.0)],
];

const NEXT_SEASON_ROUNDS: &[SlotAnchors] = &[
    &[(1, 850.0), (12, 400.0)],
    &[(1, 380.0), (12, 180.0)],
    &[(1, 170.0), (12, 120.0)],
    &[(1, 110.0), (12, 80.0)],
];

const TWO_SEASONS_OUT_ROUNDS: &[SlotAnchors] = &[
    &[(1, 700.0), (12, 330.0)],
    &[(1, 310.0), (12, 150.0)],
    &[(1, 140.0), (12, 100.0)],
    &[(1, 90.0), (12, 60.0)],
];

/// Base values by season offset, then round
pub const BASE_PICK_TABLE: &[&[SlotAnchors]] =
    &[CURRENT_SEASON_ROUNDS, NEXT_SEASON_ROUNDS, TWO_SEASONS_OUT_ROUNDS];

/// Linear interpolation between the nearest anchors; clamps outside them
fn interpolate(anchors: &[(u32, f64)], slot: u32) -> f64 {
    let (Some(&(first_slot, first_value)), Some(&(last_slot, last_value))) =
        (anchors.first(), anchors.last())
    else {
        return 0.0;
    };

    if slot <= first_slot {
        return first_value;
    }
    if slot >= last_slot {
        return last_value;
    }

    for pair in anchors.windows(2) {
        let (lo_slot, lo_value) = pair[0];
        let (hi_slot, hi_value) = pair[1];
        if slot == lo_slot {
            return lo_value;
        }
        if slot > lo_slot && slot <= hi_slot {
            let t = (slot - lo_slot) as f64 / (hi_slot - lo_slot) as f64;
            return lo_value + (hi_value - lo_value) * t;
        }
    }
    last_value
}

/// Computes trade values for draft picks
#[derive(Debug, Clone)]
pub struct PickValuator {
    config: PickValuationConfig,
}

impl PickValuator {
    pub fn new(config: PickValuationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PickValuationConfig {
        &self.config
    }

    /// Resolve a trade-side pick entry to its identity
    pub fn resolve(&self, entry: &PickEntry) -> Result<DraftPickIdentity> {
        match entry {
            PickEntry::Identity(pick) => Ok(*pick),
            PickEntry::Label(label) => parse_pick_label(label, self.config.current_season),
        }
    }

    /// Value a pick under the given league settings, rounded to a whole number
    pub fn value(&self, pick: &DraftPickIdentity, settings: &LeagueSettings) -> Result<u32> {
        let unrounded = self.unrounded_value(pick, settings)?;
        let value = unrounded.round() as u32;

        debug!("Valued pick {}: {:.3} -> {}", pick, unrounded, value);

        Ok(value)
    }

    /// Value before rounding. Strictly decreasing season over season for a
    /// fixed round and slot, even where rounding makes neighbours equal.
    pub fn unrounded_value(&self, pick: &DraftPickIdentity, settings: &LeagueSettings) -> Result<f64> {
        settings.validate()?;
        let base = self.base_value(pick, settings.slots_per_round())?;
        let multiplier = LeagueSettingsAdjuster::pick_multiplier(settings);

        debug!("Pick {}: base {:.2} x league {:.4}", pick, base, multiplier);

        let value = base * multiplier;
        if !value.is_finite() {
            return Err(ValuationError::invalid_pick(pick, "value is not finite"));
        }
        Ok(value)
    }

    /// Resolve and value a trade-side pick entry
    pub fn value_entry(&self, entry: &PickEntry, settings: &LeagueSettings) -> Result<u32> {
        let pick = self.resolve(entry)?;
        self.value(&pick, settings)
    }

    /// Table value before league adjustments. Round-only picks average the
    /// first `slots_per_round` slots of their round.
    pub fn base_value(&self, pick: &DraftPickIdentity, slots_per_round: u32) -> Result<f64> {
        let offset = self.season_offset(pick)?;
        if pick.round == 0 {
            return Err(ValuationError::invalid_pick(pick, "round must be positive"));
        }

        match pick.slot {
            Some(0) => Err(ValuationError::invalid_pick(pick, "slot must be positive")),
            Some(slot) => Ok(self.slot_value(offset, pick.round, slot)),
            None if slots_per_round == 0 => {
                Err(ValuationError::InvalidSettings("league size must be positive".to_string()))
            }
            None => Ok(self.round_mean(offset, pick.round, slots_per_round)),
        }
    }

    /// Seasons after the current one. Retained past seasons are negative.
    fn season_offset(&self, pick: &DraftPickIdentity) -> Result<i32> {
        if !(1000..=9999).contains(&pick.season) {
            return Err(ValuationError::invalid_pick(pick, "season is not a four digit year"));
        }

        let offset = pick.season - self.config.current_season;
        if offset < 0 {
            let years_back = offset.unsigned_abs();
            if years_back > self.config.past_season_retention {
                return Err(ValuationError::invalid_pick(
                    pick,
                    format!(
                        "season is {years_back} seasons before {} (retention {})",
                        self.config.current_season, self.config.past_season_retention
                    ),
                ));
            }
            return Ok(offset);
        }

        if offset.unsigned_abs() > self.config.max_future_seasons {
            return Err(ValuationError::invalid_pick(
                pick,
                format!(
                    "season is {offset} seasons ahead (max {})",
                    self.config.max_future_seasons
                ),
            ));
        }
        Ok(offset)
    }

    /// Anchors for a round, and how many rounds past the table it lies
    fn round_anchors(offset: i32, round: u32) -> (SlotAnchors, u32) {
        let horizon = BASE_PICK_TABLE.len() - 1;
        let table_offset = usize::try_from(offset).unwrap_or(0).min(horizon);
        let rounds = BASE_PICK_TABLE[table_offset];
        let table_round = round.min(rounds.len() as u32);
        (rounds[(table_round - 1) as usize], round - table_round)
    }

    /// Multiplier for seasons outside the table: discounted past the horizon,
    /// premium for retained past seasons
    fn season_factor(&self, offset: i32) -> f64 {
        let horizon = (BASE_PICK_TABLE.len() - 1) as i32;
        let exponent = if offset < 0 { offset } else { (offset - horizon).max(0) };
        self.config.season_discount.powi(exponent)
    }

    fn slot_value(&self, offset: i32, round: u32, slot: u32) -> f64 {
        let (anchors, rounds_beyond) = Self::round_anchors(offset, round);
        let round_exponent = i32::try_from(rounds_beyond).unwrap_or(i32::MAX);
        interpolate(anchors, slot)
            * self.config.beyond_round_decay.powi(round_exponent)
            * self.season_factor(offset)
    }

    /// Mean slot value over `1..=slots`. Slots past the last anchor share its
    /// value, so only the tabulated slots are summed one by one.
    fn round_mean(&self, offset: i32, round: u32, slots: u32) -> f64 {
        let (anchors, _) = Self::round_anchors(offset, round);
        let last_anchor = anchors.last().map_or(1, |(slot, _)| *slot);
        let tabulated = slots.min(last_anchor);

        let mut total: f64 = (1..=tabulated).map(|slot| self.slot_value(offset, round, slot)).sum();
        if slots > tabulated {
            total += f64::from(slots - tabulated) * self.slot_value(offset, round, last_anchor);
        }
        total / f64::from(slots)
    }
}

impl Default for PickValuator {
    fn default() -> Self {
        Self::new(PickValuationConfig::default())
    }
}
