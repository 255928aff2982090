//! Shape functions shared by player valuation
//!
//! Every curve maps a position and a raw attribute to a multiplicative factor.
//! They are pure: no state, no I/O.

use serde::{Deserialize, Serialize};

use crate::models::Position;

/// Age window in which a position produces at its best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeWindow {
    pub start: u32,
    pub peak: u32,
    pub end: u32,
}

impl PrimeWindow {
    pub const DEFAULT: PrimeWindow = PrimeWindow { start: 24, peak: 27, end: 30 };

    pub fn for_position(position: Position) -> Self {
        match position {
            Position::QB => PrimeWindow { start: 25, peak: 30, end: 35 },
            Position::RB => PrimeWindow { start: 23, peak: 25, end: 27 },
            Position::WR => PrimeWindow { start: 24, peak: 27, end: 30 },
            Position::TE => PrimeWindow { start: 26, peak: 29, end: 32 },
            Position::K | Position::DEF => Self::DEFAULT,
        }
    }
}

const AGE_YOUTH_FLOOR: f64 = 0.8;
const AGE_YOUTH_BONUS: f64 = 0.1;
const AGE_PEAK_PREMIUM: f64 = 0.15;
const AGE_DECLINE_PER_YEAR: f64 = 0.1;
const AGE_STEEP_DECLINE_AFTER: u32 = 3;
const AGE_MULTIPLIER_FLOOR: f64 = 0.3;

/// Age multiplier for a position's prime window
pub fn age_multiplier(position: Position, age: u32) -> f64 {
    age_multiplier_for_window(PrimeWindow::for_position(position), age)
}

pub fn age_multiplier_for_window(window: PrimeWindow, age: u32) -> f64 {
    let age_f = age as f64;

    if age < window.start {
        let mut multiplier =
            AGE_YOUTH_FLOOR + (1.0 - AGE_YOUTH_FLOOR) * (age_f / window.start as f64);
        if age + 2 <= window.start {
            multiplier += AGE_YOUTH_BONUS;
        }
        multiplier
    } else if age <= window.peak {
        if window.peak == window.start {
            return 1.0 + AGE_PEAK_PREMIUM;
        }
        let progress = (age - window.start) as f64 / (window.peak - window.start) as f64;
        1.0 + AGE_PEAK_PREMIUM * progress
    } else if age <= window.end {
        let progress = (age - window.peak) as f64 / (window.end - window.peak) as f64;
        1.0 + AGE_PEAK_PREMIUM - AGE_PEAK_PREMIUM * progress
    } else {
        let years_past = age - window.end;
        let mut multiplier = 1.0 - AGE_DECLINE_PER_YEAR * years_past as f64;
        if years_past > AGE_STEEP_DECLINE_AFTER {
            multiplier -= AGE_DECLINE_PER_YEAR * (years_past - AGE_STEEP_DECLINE_AFTER) as f64;
        }
        multiplier.max(AGE_MULTIPLIER_FLOOR)
    }
}

/// Experience multiplier; rookies carry variance, years 2-4 the development bump
pub fn experience_multiplier(experience: u32) -> f64 {
    match experience {
        0 => 0.9,
        1 => 1.05,
        2..=4 => 1.1,
        5..=7 => 1.0,
        8..=10 => 0.9,
        years => (0.8 - 0.05 * (years - 10) as f64).max(0.5),
    }
}

/// Points-per-game thresholds and slopes for one position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceCurve {
    pub upper: f64,
    pub upper_slope: f64,
    pub lower: f64,
    pub lower_slope: f64,
}

const PERFORMANCE_MULTIPLIER_FLOOR: f64 = 0.5;

impl PerformanceCurve {
    /// Curve for a position, `None` for positions valued without one
    pub fn for_position(position: Position) -> Option<Self> {
        let curve = match position {
            Position::QB => {
                PerformanceCurve { upper: 22.0, upper_slope: 0.03, lower: 16.0, lower_slope: 0.02 }
            }
            Position::RB => {
                PerformanceCurve { upper: 18.0, upper_slope: 0.04, lower: 12.0, lower_slope: 0.03 }
            }
            Position::WR => PerformanceCurve {
                upper: 16.0,
                upper_slope: 0.035,
                lower: 10.0,
                lower_slope: 0.025,
            },
            Position::TE => {
                PerformanceCurve { upper: 14.0, upper_slope: 0.045, lower: 8.0, lower_slope: 0.02 }
            }
            Position::K | Position::DEF => return None,
        };
        Some(curve)
    }

    pub fn multiplier(&self, ppg: f64) -> f64 {
        let multiplier = if ppg > self.upper {
            1.0 + self.upper_slope * (ppg - self.upper)
        } else if ppg < self.lower {
            1.0 - self.lower_slope * (self.lower - ppg)
        } else {
            1.0
        };
        multiplier.max(PERFORMANCE_MULTIPLIER_FLOOR)
    }
}

/// Performance multiplier for a position at a given points-per-game
pub fn performance_multiplier(position: Position, ppg: f64) -> f64 {
    PerformanceCurve::for_position(position).map_or(1.0, |curve| curve.multiplier(ppg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_age_curve_segments() {
        // RB window 23/25/27
        assert!(approx(age_multiplier(Position::RB, 23), 1.0));
        assert!(approx(age_multiplier(Position::RB, 24), 1.075));
        assert!(approx(age_multiplier(Position::RB, 25), 1.15));
        assert!(approx(age_multiplier(Position::RB, 26), 1.075));
        assert!(approx(age_multiplier(Position::RB, 27), 1.0));
        assert!(approx(age_multiplier(Position::RB, 28), 0.9));
        assert!(approx(age_multiplier(Position::RB, 30), 0.7));
        // four years past: 0.6 linear, minus 0.1 steep
        assert!(approx(age_multiplier(Position::RB, 31), 0.5));
        assert!(approx(age_multiplier(Position::RB, 40), 0.3));
    }

    #[test]
    fn test_age_curve_youth_bonus() {
        // one year below start: no bonus
        assert!(approx(age_multiplier(Position::RB, 22), 0.8 + 0.2 * 22.0 / 23.0));
        // two years below start: bonus applies
        assert!(approx(age_multiplier(Position::RB, 21), 0.8 + 0.2 * 21.0 / 23.0 + 0.1));
    }

    #[test]
    fn test_unrecognized_positions_use_default_window() {
        assert_eq!(PrimeWindow::for_position(Position::K), PrimeWindow::DEFAULT);
        assert!(approx(age_multiplier(Position::DEF, 27), 1.15));
    }

    #[test]
    fn test_experience_curve() {
        assert_eq!(experience_multiplier(0), 0.9);
        assert_eq!(experience_multiplier(1), 1.05);
        assert_eq!(experience_multiplier(3), 1.1);
        assert_eq!(experience_multiplier(6), 1.0);
        assert_eq!(experience_multiplier(10), 0.9);
        assert!(approx(experience_multiplier(12), 0.7));
        assert_eq!(experience_multiplier(30), 0.5);
    }

    #[test]
    fn test_performance_curve() {
        assert!(approx(performance_multiplier(Position::RB, 20.0), 1.08));
        assert!(approx(performance_multiplier(Position::RB, 15.0), 1.0));
        assert!(approx(performance_multiplier(Position::RB, 10.0), 0.94));
        assert!(approx(performance_multiplier(Position::QB, 0.0), 0.68));
        assert_eq!(performance_multiplier(Position::K, 40.0), 1.0);
        // floor
        let steep = PerformanceCurve { upper: 30.0, upper_slope: 0.1, lower: 20.0, lower_slope: 0.1 };
        assert_eq!(steep.multiplier(0.0), 0.5);
    }
}
