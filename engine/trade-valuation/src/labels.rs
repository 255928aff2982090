//! Free-text draft pick labels
//!
//! Accepted shapes (case-insensitive):
//! - `2025 1st`, `2025 2nd round`, `2025 round 3`, `2025 1`
//! - `1.05`, `2025 1.05`
//! - `2024_round1_pick3`, `2024_round2`
//!
//! A missing season means the current one.

use crate::error::{Result, ValuationError};
use crate::models::DraftPickIdentity;

const ROUND_WORDS: [&str; 4] = ["round", "rd", "rnd", "rounder"];

/// Resolve a pick label into a [`DraftPickIdentity`]
pub fn parse_pick_label(label: &str, default_season: i32) -> Result<DraftPickIdentity> {
    let unresolved = || ValuationError::UnresolvedReference(label.to_string());

    let normalized = label.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return Err(unresolved());
    }

    if normalized.contains('_') {
        return parse_keyed(&normalized).ok_or_else(unresolved);
    }

    let mut tokens: Vec<&str> = normalized
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();

    let season = match tokens.first().and_then(|token| parse_season(token)) {
        Some(season) => {
            tokens.remove(0);
            season
        }
        None => default_season,
    };

    let (round, slot) = parse_round_tokens(&tokens).ok_or_else(unresolved)?;
    Ok(DraftPickIdentity { season, round, slot })
}

fn parse_season(token: &str) -> Option<i32> {
    if token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse().ok()
    } else {
        None
    }
}

fn parse_round_tokens(tokens: &[&str]) -> Option<(u32, Option<u32>)> {
    match tokens {
        [single] => parse_round_slot(single).or_else(|| parse_ordinal(single).map(|r| (r, None))),
        [ordinal, word] if ROUND_WORDS.contains(word) => parse_ordinal(ordinal).map(|r| (r, None)),
        [word, number] if ROUND_WORDS.contains(word) => number.parse().ok().map(|r| (r, None)),
        _ => None,
    }
}

/// `1.05` style round.slot
fn parse_round_slot(token: &str) -> Option<(u32, Option<u32>)> {
    let (round, slot) = token.split_once('.')?;
    Some((round.parse().ok()?, Some(slot.parse().ok()?)))
}

/// `1st`, `2nd`, `3rd`, `4th`, or a bare number
fn parse_ordinal(token: &str) -> Option<u32> {
    let digits =
        ["st", "nd", "rd", "th"].iter().find_map(|suffix| token.strip_suffix(suffix)).unwrap_or(token);
    digits.parse().ok()
}

/// `2024_round1_pick3` / `2024_round1`
fn parse_keyed(label: &str) -> Option<DraftPickIdentity> {
    let mut parts = label.split('_');
    let season = parse_season(parts.next()?)?;
    let round = parts.next()?.strip_prefix("round")?.parse().ok()?;
    let slot = match parts.next() {
        Some(part) => Some(part.strip_prefix("pick")?.parse().ok()?),
        None => None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(DraftPickIdentity { season, round, slot })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEASON: i32 = 2026;

    fn parse(label: &str) -> Option<DraftPickIdentity> {
        parse_pick_label(label, SEASON).ok()
    }

    #[test]
    fn test_ordinal_labels() {
        assert_eq!(parse("2025 1st"), Some(DraftPickIdentity::round_only(2025, 1)));
        assert_eq!(parse("2027 2nd Round"), Some(DraftPickIdentity::round_only(2027, 2)));
        assert_eq!(parse("2026 Round 3"), Some(DraftPickIdentity::round_only(2026, 3)));
        assert_eq!(parse("4th"), Some(DraftPickIdentity::round_only(SEASON, 4)));
        assert_eq!(parse("2028 1"), Some(DraftPickIdentity::round_only(2028, 1)));
    }

    #[test]
    fn test_round_slot_labels() {
        assert_eq!(parse("1.05"), Some(DraftPickIdentity::new(SEASON, 1, 5)));
        assert_eq!(parse("2027 2.12"), Some(DraftPickIdentity::new(2027, 2, 12)));
    }

    #[test]
    fn test_keyed_labels() {
        assert_eq!(parse("2024_round1_pick3"), Some(DraftPickIdentity::new(2024, 1, 3)));
        assert_eq!(parse("2026_round2"), Some(DraftPickIdentity::round_only(2026, 2)));
        assert_eq!(parse("2026_round2_pick1_extra"), None);
        assert_eq!(parse("2026_pick1"), None);
    }

    #[test]
    fn test_unresolvable_labels() {
        for label in ["", "   ", "2025", "future first", "2025 early 1st", "1.x", "abc 1st"] {
            let result = parse_pick_label(label, SEASON);
            assert!(
                matches!(result, Err(ValuationError::UnresolvedReference(_))),
                "label {label:?} should not resolve"
            );
        }
    }
}
