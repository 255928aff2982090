//! Human-readable rendering of valuation results

use colored::*;
use trade_valuation::{AssetValue, SideValuation, TradeVerdict};

fn render_assets(title: &str, side: &SideValuation) -> String {
    let mut out = format!("{} {}\n", title.bold(), format!("({})", side.total).cyan());
    if side.assets.is_empty() {
        out.push_str(&format!("  {}\n", "nothing".dimmed()));
    }
    for AssetValue { label, value, substituted, .. } in &side.assets {
        let marker = if *substituted { " (default)".yellow().to_string() } else { String::new() };
        out.push_str(&format!("  {label:<32} {value:>6}{marker}\n"));
    }
    out
}

/// Multi-line verdict with per-side assets and substitutions
pub fn render_verdict(verdict: &TradeVerdict) -> String {
    let mut out = String::new();
    out.push_str(&render_assets("Side A", &verdict.side_a));
    out.push_str(&render_assets("Side B", &verdict.side_b));

    let summary = verdict.summary();
    let summary = if verdict.fair { summary.green() } else { summary.red() };
    out.push_str(&format!("{summary}\n"));

    for sub in &verdict.substitutions {
        out.push_str(&format!(
            "  {} {} {:?} #{} '{}': {}\n",
            "substituted".yellow(),
            sub.side,
            sub.kind,
            sub.index,
            sub.label,
            sub.reason
        ));
    }
    out
}

/// One `label  value` line
pub fn render_value(label: &str, value: u32) -> String {
    format!("{label:<32} {}", value.to_string().bold())
}

/// One `label  error` line
pub fn render_failure(label: &str, error: &dyn std::fmt::Display) -> String {
    format!("{label:<32} {}", error.to_string().red())
}
