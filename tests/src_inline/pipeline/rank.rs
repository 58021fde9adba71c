use super::*;
use crate::model::school::test_school;

fn school(rbd: u32, national_rank: u32, top10: u64, commune: &str, ownership: &str) -> SchoolAggregate {
    SchoolAggregate {
        rbd,
        national_rank,
        top_decile_count: top10,
        commune: Some(commune.to_string()),
        ownership_code: ownership.to_string(),
        name: format!("Liceo {rbd}"),
        ..test_school()
    }
}

fn fixture() -> Vec<SchoolAggregate> {
    vec![
        school(1, 3, 40, "Santiago", "Municipal"),
        school(2, 1, 90, "Providencia", "Particular Pagado"),
        school(3, 2, 90, "Ñuñoa", "Particular Subvencionado"),
        school(4, 4, 10, "Santiago", "Particular Pagado"),
    ]
}

fn rbds(schools: &[SchoolAggregate]) -> Vec<u32> {
    schools.iter().map(|s| s.rbd).collect()
}

#[test]
fn test_national_order() {
    let ranked = rank_schools(&fixture(), &RankingQuery::default());
    assert_eq!(rbds(&ranked), vec![2, 3, 1, 4]);
}

#[test]
fn test_top10_order_ties_by_national_rank() {
    let query = RankingQuery {
        order: RankingOrder::Top10,
        ..RankingQuery::default()
    };
    let ranked = rank_schools(&fixture(), &query);
    assert_eq!(rbds(&ranked), vec![2, 3, 1, 4]);

    let mut schools = fixture();
    schools[1].national_rank = 5;
    let ranked = rank_schools(&schools, &query);
    assert_eq!(rbds(&ranked), vec![3, 2, 1, 4]);
}

#[test]
fn test_filters_case_insensitive_and_trimmed() {
    let query = RankingQuery {
        commune: Some("  santiago ".to_string()),
        ..RankingQuery::default()
    };
    assert_eq!(rbds(&rank_schools(&fixture(), &query)), vec![1, 4]);

    let query = RankingQuery {
        commune: Some("SANTIAGO".to_string()),
        ownership: Some("particular pagado".to_string()),
        ..RankingQuery::default()
    };
    assert_eq!(rbds(&rank_schools(&fixture(), &query)), vec![4]);

    let query = RankingQuery {
        commune: Some("ñuñoa".to_string()),
        ..RankingQuery::default()
    };
    assert_eq!(rbds(&rank_schools(&fixture(), &query)), vec![3]);
}

#[test]
fn test_blank_filter_ignored_and_missing_field_excluded() {
    let query = RankingQuery {
        region: Some("   ".to_string()),
        ..RankingQuery::default()
    };
    assert_eq!(rank_schools(&fixture(), &query).len(), 4);

    let mut schools = fixture();
    schools[0].commune = None;
    let query = RankingQuery {
        commune: Some("Santiago".to_string()),
        ..RankingQuery::default()
    };
    assert_eq!(rbds(&rank_schools(&schools, &query)), vec![4]);
}

#[test]
fn test_limit() {
    let query = RankingQuery {
        limit: Some(2),
        ..RankingQuery::default()
    };
    assert_eq!(rbds(&rank_schools(&fixture(), &query)), vec![2, 3]);
    let query = RankingQuery {
        limit: Some(0),
        ..RankingQuery::default()
    };
    assert!(rank_schools(&fixture(), &query).is_empty());
}

#[test]
fn test_assign_top_decile_ranks() {
    let mut schools = fixture();
    schools[3].top_decile_rank = Some(9);
    assign_top_decile_ranks(&mut schools);
    assert_eq!(schools[1].top_decile_rank, Some(1));
    assert_eq!(schools[2].top_decile_rank, Some(2));
    assert_eq!(schools[0].top_decile_rank, Some(3));
    // existing values are kept
    assert_eq!(schools[3].top_decile_rank, Some(9));
}

#[test]
fn test_ranks_computed_before_filtering() {
    let query = RankingQuery {
        commune: Some("Santiago".to_string()),
        ..RankingQuery::default()
    };
    let ranked = rank_schools(&fixture(), &query);
    assert_eq!(ranked[0].top_decile_rank, Some(3));
    assert_eq!(ranked[1].top_decile_rank, Some(4));
}

#[test]
fn test_describe() {
    assert_eq!(RankingQuery::default().describe(), "");
    let query = RankingQuery {
        region: Some("Metropolitana".to_string()),
        ownership: Some(" Municipal ".to_string()),
        ..RankingQuery::default()
    };
    assert_eq!(query.describe(), "Región: Metropolitana · Dependencia: Municipal");
}

#[test]
fn test_average_histogram() {
    let mut schools = fixture();
    schools[0].combined_average = Some(611.0);
    schools[1].combined_average = Some(619.9);
    schools[2].combined_average = Some(640.0);
    schools[3].combined_average = None;
    let h = average_histogram(&schools);
    assert_eq!(h.len(), 2);
    assert_eq!(h.bins()[0].start, 600);
    assert_eq!(h.bins()[0].count, 2);
    assert_eq!(h.bins()[1].start, 640);
    assert_eq!(h.total(), 3);
}

#[test]
fn test_ownership_filter_matches_aliases() {
    let mut schools = fixture();
    schools[0].ownership_code = "Serv. Local Educación".to_string();
    schools[3].ownership_code = "SLEP".to_string();
    let query = RankingQuery {
        ownership: Some(" SLEP ".to_string()),
        ..RankingQuery::default()
    };
    assert_eq!(rbds(&rank_schools(&schools, &query)), vec![1, 4]);

    schools[2].ownership_code = "Fundación".to_string();
    let query = RankingQuery {
        ownership: Some("fundación".to_string()),
        ..RankingQuery::default()
    };
    assert_eq!(rbds(&rank_schools(&schools, &query)), vec![3]);
}

#[test]
fn test_average_histogram_skips_out_of_scale_averages() {
    let mut schools = fixture();
    schools[0].combined_average = Some(1.0e12);
    schools[1].combined_average = Some(-5.0);
    schools[2].combined_average = Some(f64::INFINITY);
    schools[3].combined_average = Some(1000.0);
    let h = average_histogram(&schools);
    assert_eq!(h.len(), 1);
    assert_eq!(h.bins()[0].start, 1000);
    assert_eq!(h.total(), 1);
}
