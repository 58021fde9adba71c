use serde::Serialize;

use crate::model::histogram::{Distribution, TestId};
use crate::model::ownership::Ownership;
use crate::model::school::SchoolAggregate;
use crate::model::thresholds::{
    RankBadge, RenderConfig, ScoreTier, ShareTier, rank_badge, score_tier, share_tier,
};
use crate::pipeline::summarize::{DistributionSummary, summarize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestSummary {
    pub test: TestId,
    pub title: &'static str,
    pub summary: Option<DistributionSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub combined_tier: ScoreTier,
    pub reading_tier: ScoreTier,
    pub math_tier: ScoreTier,
    pub top_decile_share: f64,
    pub share_tier: ShareTier,
    pub national_badge: RankBadge,
    pub commune_badge: RankBadge,
}

/// Everything one school sheet shows, derived from the loaded aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ficha<'a> {
    pub school: &'a SchoolAggregate,
    pub ownership: Option<Ownership>,
    pub ownership_label: &'a str,
    pub ownership_class: &'static str,
    pub classification: Classification,
    pub top_decile_threshold: f64,
    pub national_median: f64,
    pub summaries: Vec<TestSummary>,
    pub distribution: &'a Distribution,
}

pub fn classify_school(school: &SchoolAggregate) -> Classification {
    let share = school.top_decile_share();
    Classification {
        combined_tier: score_tier(school.combined_average),
        reading_tier: score_tier(school.reading_average),
        math_tier: score_tier(school.math_average),
        top_decile_share: share,
        share_tier: share_tier(Some(share)),
        national_badge: rank_badge(Some(i64::from(school.national_rank))),
        commune_badge: rank_badge(school.commune_rank.map(i64::from)),
    }
}

pub fn build_ficha<'a>(
    school: &'a SchoolAggregate,
    distribution: &'a Distribution,
    config: &RenderConfig,
) -> Ficha<'a> {
    let ownership = school.ownership();
    let summaries = TestId::ALL
        .into_iter()
        .map(|test| TestSummary {
            test,
            title: test.title(),
            summary: summarize(distribution.get(test), config.top_decile_threshold),
        })
        .collect();

    tracing::debug!(rbd = school.rbd, "ficha built");

    Ficha {
        school,
        ownership: ownership.ownership(),
        ownership_label: ownership.short_label(),
        ownership_class: ownership.style_class(),
        classification: classify_school(school),
        top_decile_threshold: config.top_decile_threshold,
        national_median: config.national_median,
        summaries,
        distribution,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/ficha.rs"]
mod tests;
