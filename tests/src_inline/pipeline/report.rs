use super::*;
use crate::model::histogram::Histogram;
use crate::model::school::test_school;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("paes_report_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn fixture() -> (Vec<SchoolAggregate>, BTreeMap<u32, Distribution>) {
    let first = test_school();
    let mut second = test_school();
    second.rbd = 24;
    second.name = "Liceo Bicentenario".to_string();
    second.national_rank = 1;
    second.commune = Some("Ñuñoa".to_string());
    second.combined_average = Some(801.3);

    let mut distributions = BTreeMap::new();
    distributions.insert(
        8933,
        Distribution {
            combined: Some(Histogram::from_pairs(vec![(380, 5), (600, 40), (700, 55)])),
            reading: Some(Histogram::from_pairs(vec![(620, 30), (720, 70)])),
            math: None,
        },
    );
    (vec![first, second], distributions)
}

#[test]
fn test_write_ficha_reports() {
    let dir = make_temp_dir();
    let (schools, distributions) = fixture();
    let written =
        write_ficha_reports(&schools, &distributions, 8933, &RenderConfig::default(), &dir)
            .unwrap();
    assert_eq!(written.len(), 3);
    assert!(dir.join("ficha_8933.html").exists());
    assert!(dir.join("ficha_8933.json").exists());
    assert!(dir.join("ficha_8933.txt").exists());

    let html = std::fs::read_to_string(dir.join("ficha_8933.html")).unwrap();
    assert!(html.contains("<h1>Instituto Nacional</h1>"));
    assert_eq!(html.matches("<div class=\"card\">").count(), 3);
    assert!(html.contains("Sin datos suficientes"));

    let json = std::fs::read_to_string(dir.join("ficha_8933.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["ficha"]["summaries"][0]["summary"]["total"], 100);
    assert_eq!(value["ficha"]["summaries"][0]["summary"]["pct_at_or_above_threshold"], 55);

    let text = std::fs::read_to_string(dir.join("ficha_8933.txt")).unwrap();
    assert!(text.contains("Matemática 1: sin datos suficientes"));
}

#[test]
fn test_unknown_school() {
    let dir = make_temp_dir();
    let (schools, distributions) = fixture();
    let err = write_ficha_reports(&schools, &distributions, 1, &RenderConfig::default(), &dir)
        .unwrap_err();
    assert!(matches!(err, ReportError::UnknownSchool(1)));
    assert_eq!(err.to_string(), "no school with rbd 1");
}

#[test]
fn test_missing_distribution_renders_placeholders() {
    let dir = make_temp_dir();
    let (schools, distributions) = fixture();
    write_ficha_reports(&schools, &distributions, 24, &RenderConfig::default(), &dir).unwrap();
    let html = std::fs::read_to_string(dir.join("ficha_24.html")).unwrap();
    assert_eq!(
        html.matches("<div class=\"note\">Sin datos suficientes</div>").count(),
        3
    );
}

#[test]
fn test_breakpoints_render_variants() {
    let dir = make_temp_dir();
    let (schools, distributions) = fixture();
    let config = RenderConfig {
        breakpoints: vec![280, 560],
        ..RenderConfig::default()
    };
    write_ficha_reports(&schools, &distributions, 8933, &config, &dir).unwrap();
    let html = std::fs::read_to_string(dir.join("ficha_8933.html")).unwrap();
    assert!(html.contains(".responsive-variant { display: none; }"));
    // two rendered panels, two widths each
    assert_eq!(html.matches("<svg").count(), 4);
}

#[test]
fn test_write_ranking_reports() {
    let dir = make_temp_dir();
    let (schools, _) = fixture();
    let query = RankingQuery {
        limit: Some(1),
        ..RankingQuery::default()
    };
    let written = write_ranking_reports(&schools, &query, &RenderConfig::default(), &dir).unwrap();
    assert_eq!(written.len(), 2);

    let html = std::fs::read_to_string(dir.join("ranking.html")).unwrap();
    assert!(html.contains("Liceo Bicentenario"));
    assert!(!html.contains("Instituto Nacional"));
    assert!(html.contains("<strong>Figura 1:</strong>"));

    let json = std::fs::read_to_string(dir.join("ranking.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["count"], 1);
    assert_eq!(value["schools"][0]["rbd"], 24);
    assert_eq!(value["schools"][0]["rank_top10"], 1);
    assert_eq!(value["schools"][0]["score_tier"], "good");
}

#[test]
fn test_ranking_without_matches() {
    let dir = make_temp_dir();
    let (schools, _) = fixture();
    let query = RankingQuery {
        region: Some("Magallanes".to_string()),
        ..RankingQuery::default()
    };
    write_ranking_reports(&schools, &query, &RenderConfig::default(), &dir).unwrap();
    let html = std::fs::read_to_string(dir.join("ranking.html")).unwrap();
    assert!(html.contains("0 establecimientos · Región: Magallanes"));
    assert!(!html.contains("<figure"));
}
