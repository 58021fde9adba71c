use serde::Serialize;

use crate::model::histogram::Histogram;
use crate::model::thresholds::BELOW_FLOOR_SCORE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistributionSummary {
    pub total: u64,
    pub count_at_or_above_threshold: u64,
    pub pct_at_or_above_threshold: u32,
    pub count_below_floor: u64,
    pub pct_below_floor: u32,
}

/// `None` means "no data", which is different from an all-zero summary.
pub fn summarize(
    histogram: Option<&Histogram>,
    top_decile_threshold: f64,
) -> Option<DistributionSummary> {
    let histogram = histogram.filter(|h| !h.is_empty())?;

    let total = histogram.total();
    let mut above = 0u64;
    let mut below = 0u64;
    for bin in histogram.bins() {
        let start = bin.start as f64;
        if start >= top_decile_threshold {
            above += bin.count;
        }
        if start < BELOW_FLOOR_SCORE {
            below += bin.count;
        }
    }

    Some(DistributionSummary {
        total,
        count_at_or_above_threshold: above,
        pct_at_or_above_threshold: round_pct(above, total),
        count_below_floor: below,
        pct_below_floor: round_pct(below, total),
    })
}

/// Integer percentage, half rounds up. Exact integer arithmetic, 0 when `total` is 0.
pub fn round_pct(part: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    let (part, total) = (u128::from(part), u128::from(total));
    let pct = (part * 200 + total) / (2 * total);
    u32::try_from(pct).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/summarize.rs"]
mod tests;
