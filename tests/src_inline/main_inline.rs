use super::*;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("paes_main_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("paes-ficha").chain(args.iter().copied())).unwrap()
}

fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
    let schools = dir.join("schools.json");
    std::fs::write(
        &schools,
        r#"[{"rbd": 7, "establecimiento": "Liceo Siete", "dependencia": "SLEP",
             "region": "Biobío", "comuna": "Concepción", "cantidad": 50,
             "prom_lectora": 610.0, "prom_mate1": null, "prom_lect_mate": 600.5,
             "en_top10": 4, "rank_nacional": 300, "rank_comuna": 3}]"#,
    )
    .unwrap();
    let distributions = dir.join("dist.json");
    std::fs::write(&distributions, r#"{"7": {"lm": [[580, 20], [600, 30]]}}"#).unwrap();
    (schools, distributions)
}

#[test]
fn test_parse_ficha_args() {
    let cli = parse(&[
        "ficha",
        "--schools",
        "s.json",
        "--distributions",
        "d.json.gz",
        "--rbd",
        "8933",
        "--out",
        "out",
        "--p90",
        "700",
        "--breakpoints",
        "320,640",
    ]);
    assert!(!cli.verbose);
    let Command::Ficha(args) = cli.command else {
        panic!("expected ficha");
    };
    assert_eq!(args.rbd, 8933);
    let config = args.render.to_config();
    assert_eq!(config.top_decile_threshold, 700.0);
    assert_eq!(config.national_median, 524.0);
    assert_eq!(config.breakpoints, vec![320, 640]);
}

#[test]
fn test_parse_ranking_args() {
    let cli = parse(&[
        "ranking",
        "--schools",
        "s.json",
        "--out",
        "out",
        "--commune",
        "Santiago",
        "--by",
        "top10",
        "--limit",
        "20",
        "-v",
    ]);
    assert!(cli.verbose);
    let Command::Ranking(args) = cli.command else {
        panic!("expected ranking");
    };
    let query = args.query();
    assert_eq!(query.order, RankingOrder::Top10);
    assert_eq!(query.commune.as_deref(), Some("Santiago"));
    assert_eq!(query.limit, Some(20));
    assert_eq!(args.render.to_config(), RenderConfig::default());
}

#[test]
fn test_missing_required_args() {
    let result = Cli::try_parse_from(["paes-ficha", "ficha", "--schools", "s.json"]);
    assert!(result.is_err());
    let result = Cli::try_parse_from(["paes-ficha", "ranking", "--schools", "s.json", "--out", "o", "--by", "alpha"]);
    assert!(result.is_err());
}

#[test]
fn test_non_finite_scores_rejected() {
    for bad in ["NaN", "inf", "-inf", "abc"] {
        let result = Cli::try_parse_from([
            "paes-ficha", "ranking", "--schools", "s.json", "--out", "o", "--p90", bad,
        ]);
        assert!(result.is_err(), "--p90 {bad} accepted");
        let result = Cli::try_parse_from([
            "paes-ficha", "ranking", "--schools", "s.json", "--out", "o",
            "--national-median", bad,
        ]);
        assert!(result.is_err(), "--national-median {bad} accepted");
    }
    assert_eq!(parse_score(" 612.5 "), Ok(612.5));
}

#[test]
fn test_run_ficha_end_to_end() {
    let dir = make_temp_dir();
    let (schools, distributions) = write_inputs(&dir);
    let out = dir.join("out");
    let cli = parse(&[
        "ficha",
        "--schools",
        schools.to_str().unwrap(),
        "--distributions",
        distributions.to_str().unwrap(),
        "--rbd",
        "7",
        "--out",
        out.to_str().unwrap(),
    ]);
    run(cli).unwrap();
    let html = std::fs::read_to_string(out.join("ficha_7.html")).unwrap();
    assert!(html.contains("<span class=\"dep-badge slep\">SLEP</span>"));
    assert!(out.join("ficha_7.json").exists());
    assert!(out.join("ficha_7.txt").exists());
}

#[test]
fn test_run_unknown_rbd_fails() {
    let dir = make_temp_dir();
    let (schools, distributions) = write_inputs(&dir);
    let cli = parse(&[
        "ficha",
        "--schools",
        schools.to_str().unwrap(),
        "--distributions",
        distributions.to_str().unwrap(),
        "--rbd",
        "99",
        "--out",
        dir.join("out").to_str().unwrap(),
    ]);
    assert!(matches!(run(cli), Err(ReportError::UnknownSchool(99))));
}

#[test]
fn test_run_missing_input_fails() {
    let dir = make_temp_dir();
    let cli = parse(&[
        "ranking",
        "--schools",
        dir.join("absent.json").to_str().unwrap(),
        "--out",
        dir.join("out").to_str().unwrap(),
    ]);
    assert!(matches!(run(cli), Err(ReportError::Input(_))));
}
