use super::*;

#[test]
fn test_plain_card() {
    let html = stat_card("Estudiantes", "600", &CardOptions::default());
    assert_eq!(
        html.as_str(),
        "<div class=\"stat-card\"><h3>Estudiantes</h3><span class=\"value\">600</span></div>"
    );
}

#[test]
fn test_highlight_only_touches_value() {
    let options = CardOptions {
        highlight: true,
        subtitle: Some("55% del total".to_string()),
        title_level: TitleLevel::H2,
    };
    let html = stat_card("En top 10%", "330", &options).into_string();
    assert!(html.contains("<h2>En top 10%</h2>"));
    assert!(html.contains("<span class=\"value highlight\">330</span>"));
    assert!(html.contains("<small>55% del total</small>"));
    assert!(html.starts_with("<div class=\"stat-card\">"));
}

#[test]
fn test_empty_subtitle_omitted() {
    let options = CardOptions {
        subtitle: Some(String::new()),
        ..CardOptions::default()
    };
    assert!(!stat_card("a", "b", &options).as_str().contains("<small>"));
}

#[test]
fn test_text_escaped() {
    let html = stat_card("<x>", "a&b", &CardOptions::default()).into_string();
    assert!(html.contains("<h3>&lt;x&gt;</h3>"));
    assert!(html.contains(">a&amp;b<"));
}

#[test]
fn test_stats_grid() {
    let cards = vec![
        StatCard::new("Ranking nacional", "#12").level(TitleLevel::H2),
        StatCard::new("Promedio", "722,2").highlight().subtitle("Lectora + Matemática"),
    ];
    let html = stats_grid(&cards).into_string();
    assert!(html.starts_with("<div class=\"stats-grid\"><div class=\"stat-card\"><h2>"));
    assert_eq!(html.matches("<div class=\"stat-card\">").count(), 2);
    assert!(html.contains("<span class=\"value highlight\">722,2</span><small>Lectora + Matemática</small>"));
    assert_eq!(stats_grid(&[]).as_str(), "<div class=\"stats-grid\"></div>");
}
