use serde::Serialize;

use crate::pipeline::ficha::Ficha;
use crate::pipeline::rank::RankingQuery;
use crate::report::{RankingRow, TOOL_NAME, TOOL_VERSION};

#[derive(Serialize)]
struct FichaDocument<'a> {
    tool: &'static str,
    version: &'static str,
    ficha: &'a Ficha<'a>,
}

#[derive(Serialize)]
struct RankingDocument<'a> {
    tool: &'static str,
    version: &'static str,
    query: &'a RankingQuery,
    count: usize,
    schools: &'a [RankingRow<'a>],
}

pub fn render_ficha_json(ficha: &Ficha<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&FichaDocument {
        tool: TOOL_NAME,
        version: TOOL_VERSION,
        ficha,
    })
}

pub fn render_ranking_json(query: &RankingQuery, rows: &[RankingRow<'_>]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&RankingDocument {
        tool: TOOL_NAME,
        version: TOOL_VERSION,
        query,
        count: rows.len(),
        schools: rows,
    })
}
