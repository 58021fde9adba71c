//! Table-cell fragments for ranking tables.

use crate::model::ownership::{short_label, style_class};
use crate::model::thresholds::{Tier, percent_of, rank_badge, score_tier, share_tier};
use crate::render::html::{Html, escape, fmt_coord, format_optional};

pub fn rank_badge_cell(rank: Option<u32>) -> Html {
    let badge = rank_badge(rank.map(i64::from));
    let label = rank.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string());
    Html::raw(format!(
        "<span class=\"rank-badge {}\">{label}</span>",
        badge.css_class()
    ))
}

pub fn dep_badge(code: &str) -> Html {
    Html::raw(format!(
        "<span class=\"dep-badge {}\">{}</span>",
        style_class(code),
        escape(short_label(code))
    ))
}

pub fn score_value(score: Option<f64>) -> Html {
    match score.filter(|s| s.is_finite()) {
        Some(s) => Html::raw(format!(
            "<span class=\"score-value {}\">{}</span>",
            score_tier(Some(s)).css_class(),
            format_optional(Some(s), 1)
        )),
        None => Html::raw("<span class=\"score-value\">-</span>"),
    }
}

/// Bar fill percentage, capped at 100.
pub fn top10_fill(count: u64, total: u64) -> f64 {
    percent_of(count as f64, total as f64).min(100.0)
}

pub fn top10_indicator(count: u64, total: u64) -> Html {
    let pct = percent_of(count as f64, total as f64);
    let tier = share_tier(Some(pct));
    Html::raw(format!(
        "<div class=\"top10-indicator\"><div class=\"top10-bar\">\
<div class=\"top10-bar-fill {}\" style=\"width: {}%\"></div></div>\
<span class=\"top10-value\">{count}</span></div>",
        tier.css_class(),
        fmt_coord(top10_fill(count, total))
    ))
}

pub fn school_name(name: &str) -> Html {
    Html::raw(format!("<span class=\"school-name\">{}</span>", escape(name)))
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/badges.rs"]
mod tests;
