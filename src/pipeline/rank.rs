use std::cmp::Reverse;

use clap::ValueEnum;
use serde::Serialize;

use crate::model::histogram::Histogram;
use crate::model::school::SchoolAggregate;
use crate::model::ownership::OwnershipCode;
use crate::model::thresholds::{BIN_WIDTH, MAX_SCORE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingOrder {
    /// National rank ascending.
    #[default]
    National,
    /// Top-decile student count descending, ties by national rank.
    Top10,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankingQuery {
    pub region: Option<String>,
    pub commune: Option<String>,
    pub ownership: Option<String>,
    pub order: RankingOrder,
    pub limit: Option<usize>,
}

impl RankingQuery {
    pub fn matches(&self, school: &SchoolAggregate) -> bool {
        field_matches(self.region.as_deref(), school.region.as_deref())
            && field_matches(self.commune.as_deref(), school.commune.as_deref())
            && ownership_matches(self.ownership.as_deref(), &school.ownership_code)
    }

    /// Human-readable filter summary, empty when nothing is filtered.
    pub fn describe(&self) -> String {
        let parts: Vec<String> = [
            ("Región", &self.region),
            ("Comuna", &self.commune),
            ("Dependencia", &self.ownership),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| format!("{label}: {v}"))
        })
        .collect();
        parts.join(" · ")
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn field_matches(filter: Option<&str>, value: Option<&str>) -> bool {
    let Some(filter) = filter.map(normalize).filter(|f| !f.is_empty()) else {
        return true;
    };
    value.is_some_and(|v| normalize(v) == filter)
}

/// Known codes compare by category, so aliases such as "SLEP" and
/// "Serv. Local Educación" match each other.
fn ownership_matches(filter: Option<&str>, code: &str) -> bool {
    let Some(filter) = filter.map(str::trim).filter(|f| !f.is_empty()) else {
        return true;
    };
    match (
        OwnershipCode::parse(filter).ownership(),
        OwnershipCode::parse(code.trim()).ownership(),
    ) {
        (Some(wanted), Some(actual)) => wanted == actual,
        _ => normalize(filter) == normalize(code),
    }
}

/// Fills `top_decile_rank` from top-decile counts (descending, ties by
/// national rank) for every school that lacks one.
pub fn assign_top_decile_ranks(schools: &mut [SchoolAggregate]) {
    if schools.iter().all(|s| s.top_decile_rank.is_some()) {
        return;
    }
    let mut order: Vec<usize> = (0..schools.len()).collect();
    order.sort_by_key(|&i| (Reverse(schools[i].top_decile_count), schools[i].national_rank));
    for (position, idx) in order.into_iter().enumerate() {
        let school = &mut schools[idx];
        if school.top_decile_rank.is_none() {
            school.top_decile_rank = Some(position as u32 + 1);
        }
    }
}

/// Filters, orders and truncates. Ranks are computed on the full set before filtering.
pub fn rank_schools(schools: &[SchoolAggregate], query: &RankingQuery) -> Vec<SchoolAggregate> {
    let mut all = schools.to_vec();
    assign_top_decile_ranks(&mut all);

    let mut selected: Vec<SchoolAggregate> =
        all.into_iter().filter(|s| query.matches(s)).collect();
    match query.order {
        RankingOrder::National => selected.sort_by_key(|s| (s.national_rank, s.rbd)),
        RankingOrder::Top10 => {
            selected.sort_by_key(|s| (Reverse(s.top_decile_count), s.national_rank, s.rbd))
        }
    }
    if let Some(limit) = query.limit {
        selected.truncate(limit);
    }
    tracing::debug!(
        total = schools.len(),
        selected = selected.len(),
        "ranking filtered"
    );
    selected
}

/// Histogram of combined averages across schools, 20-point bins. Averages
/// outside `[0, MAX_SCORE]` are left out.
pub fn average_histogram(schools: &[SchoolAggregate]) -> Histogram {
    Histogram::from_pairs(
        schools
            .iter()
            .filter_map(|s| {
                s.combined_average
                    .filter(|v| (0.0..=MAX_SCORE).contains(v))
            })
            .map(|avg| {
                let start = (avg / f64::from(BIN_WIDTH)).floor() as i32 * BIN_WIDTH;
                (start, 1u64)
            }),
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/rank.rs"]
mod tests;
