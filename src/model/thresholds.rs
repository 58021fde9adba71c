use serde::Serialize;

/// Width in score points of every histogram bin produced upstream.
pub const BIN_WIDTH: i32 = 20;

pub const DEFAULT_TOP_DECILE_THRESHOLD: f64 = 658.0;
pub const DEFAULT_NATIONAL_MEDIAN: f64 = 524.0;
pub const BELOW_FLOOR_SCORE: f64 = 400.0;
pub const FALLBACK_WIDTH: u32 = 300;
/// Upper end of the PAES score scale.
pub const MAX_SCORE: f64 = 1000.0;
pub const PANEL_HEIGHT: u32 = 180;

/// Ordered tier scale. Higher `rank` means a better tier.
pub trait Tier: Copy {
    fn rank(self) -> u8;
    fn css_class(self) -> &'static str;
}

/// Descending list of `[boundary, +inf)` intervals with a catch-all floor.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdTable<T: 'static> {
    boundaries: &'static [(f64, T)],
    floor: T,
}

impl<T: Copy + 'static> ThresholdTable<T> {
    pub const fn new(boundaries: &'static [(f64, T)], floor: T) -> Self {
        Self { boundaries, floor }
    }

    pub fn classify(&self, value: Option<f64>) -> T {
        classify(value, self)
    }
}

/// First boundary the value meets or exceeds wins; `None` and NaN fall to the floor.
pub fn classify<T: Copy + 'static>(value: Option<f64>, table: &ThresholdTable<T>) -> T {
    let Some(v) = value.filter(|v| !v.is_nan()) else {
        return table.floor;
    };
    table
        .boundaries
        .iter()
        .find(|(boundary, _)| v >= *boundary)
        .map(|(_, tier)| *tier)
        .unwrap_or(table.floor)
}

/// Exact-match variant of [`ThresholdTable`] used for podium badges.
#[derive(Debug, Clone, Copy)]
pub struct ExactTable<T: 'static> {
    matches: &'static [(i64, T)],
    floor: T,
}

impl<T: Copy + 'static> ExactTable<T> {
    pub const fn new(matches: &'static [(i64, T)], floor: T) -> Self {
        Self { matches, floor }
    }

    pub fn classify(&self, value: Option<i64>) -> T {
        let Some(v) = value else {
            return self.floor;
        };
        self.matches
            .iter()
            .find(|(key, _)| *key == v)
            .map(|(_, tier)| *tier)
            .unwrap_or(self.floor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Excellent,
    Good,
    Moderate,
    Normal,
}

pub const SCORE_TIERS: ThresholdTable<ScoreTier> = ThresholdTable::new(
    &[
        (850.0, ScoreTier::Excellent),
        (750.0, ScoreTier::Good),
        (650.0, ScoreTier::Moderate),
    ],
    ScoreTier::Normal,
);

impl Tier for ScoreTier {
    fn rank(self) -> u8 {
        match self {
            ScoreTier::Excellent => 3,
            ScoreTier::Good => 2,
            ScoreTier::Moderate => 1,
            ScoreTier::Normal => 0,
        }
    }

    fn css_class(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "excellent",
            ScoreTier::Good => "good",
            ScoreTier::Moderate => "moderate",
            ScoreTier::Normal => "normal",
        }
    }
}

/// Share of a school's students inside the national top decile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareTier {
    Excellent,
    Good,
    Moderate,
    Low,
}

pub const SHARE_TIERS: ThresholdTable<ShareTier> = ThresholdTable::new(
    &[
        (50.0, ShareTier::Excellent),
        (25.0, ShareTier::Good),
        (10.0, ShareTier::Moderate),
    ],
    ShareTier::Low,
);

impl Tier for ShareTier {
    fn rank(self) -> u8 {
        match self {
            ShareTier::Excellent => 3,
            ShareTier::Good => 2,
            ShareTier::Moderate => 1,
            ShareTier::Low => 0,
        }
    }

    fn css_class(self) -> &'static str {
        match self {
            ShareTier::Excellent => "excellent",
            ShareTier::Good => "good",
            ShareTier::Moderate => "moderate",
            ShareTier::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RankBadge {
    Gold,
    Silver,
    Bronze,
    Normal,
}

pub const RANK_BADGES: ExactTable<RankBadge> = ExactTable::new(
    &[
        (1, RankBadge::Gold),
        (2, RankBadge::Silver),
        (3, RankBadge::Bronze),
    ],
    RankBadge::Normal,
);

impl Tier for RankBadge {
    fn rank(self) -> u8 {
        match self {
            RankBadge::Gold => 3,
            RankBadge::Silver => 2,
            RankBadge::Bronze => 1,
            RankBadge::Normal => 0,
        }
    }

    fn css_class(self) -> &'static str {
        match self {
            RankBadge::Gold => "gold",
            RankBadge::Silver => "silver",
            RankBadge::Bronze => "bronze",
            RankBadge::Normal => "normal",
        }
    }
}

pub fn score_tier(score: Option<f64>) -> ScoreTier {
    SCORE_TIERS.classify(score)
}

pub fn share_tier(pct: Option<f64>) -> ShareTier {
    SHARE_TIERS.classify(pct)
}

pub fn rank_badge(rank: Option<i64>) -> RankBadge {
    RANK_BADGES.classify(rank)
}

/// Percentage of `part` in `total`; zero when `total` is zero.
pub fn percent_of(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

/// Rendering policy knobs, overridable from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub top_decile_threshold: f64,
    pub national_median: f64,
    pub fallback_width: u32,
    pub panel_height: u32,
    pub breakpoints: Vec<u32>,
}

impl RenderConfig {
    pub fn default_v1() -> Self {
        Self {
            top_decile_threshold: DEFAULT_TOP_DECILE_THRESHOLD,
            national_median: DEFAULT_NATIONAL_MEDIAN,
            fallback_width: FALLBACK_WIDTH,
            panel_height: PANEL_HEIGHT,
            breakpoints: Vec::new(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
