use serde::{Deserialize, Serialize};

use crate::model::ownership::OwnershipCode;
use crate::model::thresholds::percent_of;

/// Per-school aggregate as produced by the ranking export.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SchoolAggregate {
    pub rbd: u32,
    #[serde(rename = "establecimiento")]
    pub name: String,
    #[serde(rename = "dependencia")]
    pub ownership_code: String,
    #[serde(rename = "cod_region", default)]
    pub region_code: Option<u32>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(rename = "comuna", default)]
    pub commune: Option<String>,
    #[serde(rename = "cantidad", default)]
    pub total_students: u64,
    #[serde(rename = "prom_lectora", default)]
    pub reading_average: Option<f64>,
    #[serde(rename = "prom_mate1", default)]
    pub math_average: Option<f64>,
    #[serde(rename = "prom_lect_mate", default)]
    pub combined_average: Option<f64>,
    #[serde(default)]
    pub p25: Option<f64>,
    #[serde(rename = "mediana", default)]
    pub median: Option<f64>,
    #[serde(default)]
    pub p75: Option<f64>,
    #[serde(rename = "en_top10", default)]
    pub top_decile_count: u64,
    #[serde(rename = "rank_nacional")]
    pub national_rank: u32,
    #[serde(rename = "rank_comuna", default)]
    pub commune_rank: Option<u32>,
    #[serde(rename = "rank_top10", default)]
    pub top_decile_rank: Option<u32>,
}

impl SchoolAggregate {
    pub fn ownership(&self) -> OwnershipCode<'_> {
        OwnershipCode::parse(&self.ownership_code)
    }

    /// Percentage of the school's students inside the national top decile.
    pub fn top_decile_share(&self) -> f64 {
        percent_of(self.top_decile_count as f64, self.total_students as f64)
    }

    pub fn commune_label(&self) -> &str {
        self.commune.as_deref().unwrap_or("-")
    }

    pub fn region_label(&self) -> &str {
        self.region.as_deref().unwrap_or("-")
    }
}

#[cfg(test)]
pub(crate) fn test_school() -> SchoolAggregate {
    SchoolAggregate {
        rbd: 8933,
        name: "Instituto Nacional".to_string(),
        ownership_code: "Municipal".to_string(),
        region_code: Some(13),
        region: Some("Metropolitana".to_string()),
        commune: Some("Santiago".to_string()),
        total_students: 600,
        reading_average: Some(702.4),
        math_average: Some(741.9),
        combined_average: Some(722.2),
        p25: Some(650.0),
        median: Some(725.0),
        p75: Some(790.0),
        top_decile_count: 330,
        national_rank: 12,
        commune_rank: Some(2),
        top_decile_rank: None,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/school.rs"]
mod tests;
