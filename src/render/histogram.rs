//! Single histogram panel with optional reference lines.

use crate::model::histogram::Histogram;
use crate::model::thresholds::{BIN_WIDTH, FALLBACK_WIDTH, PANEL_HEIGHT};
use crate::render::html::{Html, escape};
use crate::render::plot::{Axis, Margins, Mark, Plot, RectMark, RuleMark, TickFormat};
use crate::render::width::{WidthProvider, render_with};

pub const NO_DATA_PLACEHOLDER: &str = "<div class=\"note\">Sin datos suficientes</div>";

const MARGINS: Margins = Margins {
    top: 20.0,
    right: 10.0,
    bottom: 35.0,
    left: 40.0,
};
const FONT_SIZE: u32 = 10;
const BAR_OPACITY: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    SchoolMedian,
    NationalMedian,
    TopDecileThreshold,
}

impl ReferenceKind {
    fn rule(self, value: f64) -> RuleMark {
        let (stroke, stroke_width, stroke_opacity, dasharray) = match self {
            ReferenceKind::SchoolMedian => ("var(--datalized-teal)", 2.0, 0.9, None),
            ReferenceKind::NationalMedian => {
                ("var(--theme-foreground-muted)", 1.5, 1.0, Some("4,3"))
            }
            ReferenceKind::TopDecileThreshold => ("#E63946", 2.0, 0.8, None),
        };
        RuleMark {
            value,
            stroke: stroke.to_string(),
            stroke_width,
            stroke_opacity,
            dasharray: dasharray.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceLine {
    pub kind: ReferenceKind,
    pub value: f64,
}

pub struct HistogramOptions<'a> {
    pub title: String,
    pub bar_color: String,
    pub school_median: Option<f64>,
    pub national_median: Option<f64>,
    pub top_decile_threshold: Option<f64>,
    pub width_provider: Option<&'a dyn WidthProvider>,
    pub fallback_width: u32,
    pub height: u32,
    /// Count axis label.
    pub y_label: String,
    /// Counted noun in bar tips.
    pub unit: String,
}

impl Default for HistogramOptions<'_> {
    fn default() -> Self {
        Self {
            title: "Distribución".to_string(),
            bar_color: "var(--datalized-teal)".to_string(),
            school_median: None,
            national_median: None,
            top_decile_threshold: None,
            width_provider: None,
            fallback_width: FALLBACK_WIDTH,
            height: PANEL_HEIGHT,
            y_label: "Estudiantes".to_string(),
            unit: "estudiantes".to_string(),
        }
    }
}

impl HistogramOptions<'_> {
    /// Present, finite reference values in drawing order.
    pub fn reference_lines(&self) -> Vec<ReferenceLine> {
        [
            (ReferenceKind::SchoolMedian, self.school_median),
            (ReferenceKind::NationalMedian, self.national_median),
            (ReferenceKind::TopDecileThreshold, self.top_decile_threshold),
        ]
        .into_iter()
        .filter_map(|(kind, value)| {
            value
                .filter(|v| v.is_finite())
                .map(|value| ReferenceLine { kind, value })
        })
        .collect()
    }
}

/// Upper bound of the count axis: 10% headroom, `1` when every count is zero.
pub fn y_domain_max(histogram: &Histogram) -> f64 {
    let max = histogram.max_count();
    if max == 0 { 1.0 } else { max as f64 * 1.1 }
}

/// Score axis covering every bar and every reference line.
pub fn x_domain(histogram: &Histogram, lines: &[ReferenceLine]) -> (f64, f64) {
    let (mut lo, mut hi) = match histogram.score_range() {
        Some((start, end)) => (start as f64, end as f64),
        None => (0.0, BIN_WIDTH as f64),
    };
    for line in lines {
        lo = lo.min(line.value);
        hi = hi.max(line.value);
    }
    (lo, hi)
}

pub fn histogram_plot(histogram: &Histogram, options: &HistogramOptions<'_>, width: u32) -> Plot {
    let lines = options.reference_lines();

    let mut marks: Vec<Mark> = histogram
        .bins()
        .iter()
        .map(|bin| {
            Mark::RectY(RectMark {
                x1: bin.start as f64,
                x2: bin.end() as f64,
                y: bin.count as f64,
                fill: options.bar_color.clone(),
                fill_opacity: BAR_OPACITY,
                tip: Some(format!(
                    "{} - {} pts\n{} {}",
                    bin.start,
                    bin.last_score(),
                    bin.count,
                    options.unit
                )),
            })
        })
        .collect();
    marks.extend(lines.iter().map(|line| Mark::RuleX(line.kind.rule(line.value))));
    marks.push(Mark::RuleY(RuleMark {
        value: 0.0,
        stroke: "currentColor".to_string(),
        stroke_width: 1.0,
        stroke_opacity: 1.0,
        dasharray: None,
    }));

    Plot {
        width,
        height: options.height,
        margins: MARGINS,
        font_size: FONT_SIZE,
        x: Axis {
            label: "Puntaje".to_string(),
            domain: x_domain(histogram, &lines),
            ticks: 5,
            format: TickFormat::Number,
        },
        y: Axis {
            label: options.y_label.clone(),
            domain: (0.0, y_domain_max(histogram)),
            ticks: 5,
            format: TickFormat::Integer,
        },
        marks,
    }
}

pub fn render_histogram(histogram: Option<&Histogram>, options: &HistogramOptions<'_>) -> Html {
    let Some(histogram) = histogram.filter(|h| !h.is_empty()) else {
        tracing::debug!(title = %options.title, "histogram without bins, placeholder");
        return Html::raw(NO_DATA_PLACEHOLDER);
    };

    let chart = render_with(options.width_provider, options.fallback_width, &|width| {
        histogram_plot(histogram, options, width).to_svg()
    });

    Html::raw(format!(
        "<figure class=\"histogram\" style=\"margin: 0;\">\
<figcaption style=\"font-weight: 600; margin-bottom: 0.5rem; font-size: 0.85rem;\">{}</figcaption>\
<div class=\"plot-container\">{}</div></figure>",
        escape(&options.title),
        chart
    ))
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/histogram.rs"]
mod tests;
