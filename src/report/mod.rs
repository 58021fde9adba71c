pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::school::SchoolAggregate;
use crate::model::thresholds::{ScoreTier, ShareTier, score_tier, share_tier};

pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One ranking table row: the aggregate plus its derived classes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingRow<'a> {
    #[serde(flatten)]
    pub school: &'a SchoolAggregate,
    pub top_decile_share: f64,
    pub score_tier: ScoreTier,
    pub share_tier: ShareTier,
}

impl<'a> RankingRow<'a> {
    pub fn new(school: &'a SchoolAggregate) -> Self {
        let share = school.top_decile_share();
        Self {
            school,
            top_decile_share: share,
            score_tier: score_tier(school.combined_average),
            share_tier: share_tier(Some(share)),
        }
    }
}

pub fn format_pct(pct: u32) -> String {
    format!("{pct}%")
}

pub fn format_rank(rank: Option<u32>) -> String {
    rank.map(|r| format!("#{r}")).unwrap_or_else(|| "-".to_string())
}
