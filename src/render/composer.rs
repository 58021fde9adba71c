use crate::model::histogram::{Distribution, TestId};
use crate::model::school::SchoolAggregate;
use crate::model::thresholds::{
    DEFAULT_NATIONAL_MEDIAN, DEFAULT_TOP_DECILE_THRESHOLD, FALLBACK_WIDTH, PANEL_HEIGHT,
    RenderConfig,
};
use crate::render::histogram::{HistogramOptions, render_histogram};
use crate::render::html::Html;
use crate::render::width::WidthProvider;

pub const LEGEND: &str = "Verde: mediana escuela · Gris: nacional · Rojo: top 10%";

pub struct ComposerOptions<'a> {
    pub top_decile_threshold: f64,
    pub national_median: f64,
    pub width_provider: Option<&'a dyn WidthProvider>,
    pub fallback_width: u32,
    pub panel_height: u32,
}

impl Default for ComposerOptions<'_> {
    fn default() -> Self {
        Self {
            top_decile_threshold: DEFAULT_TOP_DECILE_THRESHOLD,
            national_median: DEFAULT_NATIONAL_MEDIAN,
            width_provider: None,
            fallback_width: FALLBACK_WIDTH,
            panel_height: PANEL_HEIGHT,
        }
    }
}

impl<'a> ComposerOptions<'a> {
    pub fn from_config(config: &RenderConfig, width_provider: Option<&'a dyn WidthProvider>) -> Self {
        Self {
            top_decile_threshold: config.top_decile_threshold,
            national_median: config.national_median,
            width_provider,
            fallback_width: config.fallback_width,
            panel_height: config.panel_height,
        }
    }
}

/// Options for one of the three panels. Only the combined panel carries the
/// national median and top-decile overlays.
pub fn panel_options<'a>(
    test: TestId,
    school: &SchoolAggregate,
    options: &ComposerOptions<'a>,
) -> HistogramOptions<'a> {
    let (school_marker, national_median, top_decile_threshold) = match test {
        TestId::Combined => (
            school.combined_average,
            Some(options.national_median),
            Some(options.top_decile_threshold),
        ),
        TestId::Reading => (school.reading_average, None, None),
        TestId::Math => (school.math_average, None, None),
    };
    HistogramOptions {
        title: test.title().to_string(),
        bar_color: test.color().to_string(),
        school_median: school_marker,
        national_median,
        top_decile_threshold,
        width_provider: options.width_provider,
        fallback_width: options.fallback_width,
        height: options.panel_height,
        ..HistogramOptions::default()
    }
}

/// Three-card grid: combined, reading, math. Missing histograms become placeholders.
pub fn compose(
    distribution: &Distribution,
    school: &SchoolAggregate,
    options: &ComposerOptions<'_>,
) -> Html {
    let mut out = String::from("<div class=\"grid grid-cols-3\">");
    for test in TestId::ALL {
        let panel = render_histogram(
            distribution.get(test),
            &panel_options(test, school, options),
        );
        out.push_str("<div class=\"card\">");
        out.push_str(panel.as_str());
        if test == TestId::Combined {
            out.push_str(&format!(
                "<small style=\"color: var(--theme-foreground-muted); font-size: 0.7rem;\">{LEGEND}</small>"
            ));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    Html::raw(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/composer.rs"]
mod tests;
