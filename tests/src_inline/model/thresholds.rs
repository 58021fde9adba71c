use super::*;

#[test]
fn test_score_tier_boundaries() {
    assert_eq!(score_tier(Some(850.0)), ScoreTier::Excellent);
    assert_eq!(score_tier(Some(849.9)), ScoreTier::Good);
    assert_eq!(score_tier(Some(750.0)), ScoreTier::Good);
    assert_eq!(score_tier(Some(650.0)), ScoreTier::Moderate);
    assert_eq!(score_tier(Some(649.9)), ScoreTier::Normal);
    assert_eq!(score_tier(Some(0.0)), ScoreTier::Normal);
}

#[test]
fn test_score_tier_missing_and_nan() {
    assert_eq!(score_tier(None), ScoreTier::Normal);
    assert_eq!(score_tier(Some(f64::NAN)), ScoreTier::Normal);
    assert_eq!(score_tier(Some(f64::INFINITY)), ScoreTier::Excellent);
}

#[test]
fn test_rank_badges_exact_match() {
    assert_eq!(rank_badge(Some(1)), RankBadge::Gold);
    assert_eq!(rank_badge(Some(2)), RankBadge::Silver);
    assert_eq!(rank_badge(Some(3)), RankBadge::Bronze);
    assert_eq!(rank_badge(Some(4)), RankBadge::Normal);
    assert_eq!(rank_badge(Some(0)), RankBadge::Normal);
    assert_eq!(rank_badge(Some(-1)), RankBadge::Normal);
    assert_eq!(rank_badge(None), RankBadge::Normal);
}

#[test]
fn test_share_tiers() {
    assert_eq!(share_tier(Some(50.0)), ShareTier::Excellent);
    assert_eq!(share_tier(Some(49.99)), ShareTier::Good);
    assert_eq!(share_tier(Some(25.0)), ShareTier::Good);
    assert_eq!(share_tier(Some(10.0)), ShareTier::Moderate);
    assert_eq!(share_tier(Some(9.9)), ShareTier::Low);
    assert_eq!(share_tier(None), ShareTier::Low);
}

#[test]
fn test_classify_monotonic() {
    let mut prev_score = 0u8;
    let mut prev_share = 0u8;
    for step in 0..=2400 {
        let v = step as f64 * 0.5;
        let score = score_tier(Some(v)).rank();
        let share = share_tier(Some(v / 10.0)).rank();
        assert!(score >= prev_score, "score tier decreased at {v}");
        assert!(share >= prev_share, "share tier decreased at {v}");
        prev_score = score;
        prev_share = share;
    }
}

#[test]
fn test_custom_table_uses_generic_classifier() {
    static TABLE: ThresholdTable<u8> = ThresholdTable::new(&[(10.0, 2), (5.0, 1)], 0);
    assert_eq!(classify(Some(11.0), &TABLE), 2);
    assert_eq!(classify(Some(5.0), &TABLE), 1);
    assert_eq!(classify(Some(4.999), &TABLE), 0);
    assert_eq!(classify(None, &TABLE), 0);
}

#[test]
fn test_css_classes() {
    assert_eq!(ScoreTier::Moderate.css_class(), "moderate");
    assert_eq!(ShareTier::Low.css_class(), "low");
    assert_eq!(RankBadge::Bronze.css_class(), "bronze");
}

#[test]
fn test_percent_of_zero_total() {
    assert_eq!(percent_of(5.0, 0.0), 0.0);
    assert!((percent_of(1.0, 4.0) - 25.0).abs() < 1e-9);
}

#[test]
fn test_render_config_defaults() {
    let cfg = RenderConfig::default();
    assert_eq!(cfg.top_decile_threshold, 658.0);
    assert_eq!(cfg.national_median, 524.0);
    assert_eq!(cfg.fallback_width, 300);
    assert!(cfg.breakpoints.is_empty());
}
