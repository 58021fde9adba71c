//! Minimal chart primitive: axis/mark specifications rendered to inline SVG.

use crate::render::html::{Html, escape, fmt_coord};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFormat {
    /// Plain number as given.
    Number,
    /// Integers only; fractional ticks are dropped.
    Integer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub label: String,
    pub domain: (f64, f64),
    pub ticks: usize,
    pub format: TickFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectMark {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
    pub fill: String,
    pub fill_opacity: f64,
    pub tip: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleMark {
    pub value: f64,
    pub stroke: String,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
    pub dasharray: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    RectY(RectMark),
    RuleX(RuleMark),
    RuleY(RuleMark),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
    pub font_size: u32,
    pub x: Axis,
    pub y: Axis,
    pub marks: Vec<Mark>,
}

struct Frame {
    left: f64,
    top: f64,
    plot_w: f64,
    plot_h: f64,
    x_domain: (f64, f64),
    y_domain: (f64, f64),
}

impl Frame {
    fn sx(&self, v: f64) -> f64 {
        let span = self.x_domain.1 - self.x_domain.0;
        let span = if span.abs() < f64::EPSILON { 1.0 } else { span };
        self.left + (v - self.x_domain.0) / span * self.plot_w
    }

    fn sy(&self, v: f64) -> f64 {
        let span = self.y_domain.1 - self.y_domain.0;
        let span = if span.abs() < f64::EPSILON { 1.0 } else { span };
        self.top + self.plot_h - (v - self.y_domain.0) / span * self.plot_h
    }
}

impl Plot {
    pub fn to_svg(&self) -> Html {
        let w = self.width as f64;
        let h = self.height as f64;
        let frame = Frame {
            left: self.margins.left,
            top: self.margins.top,
            plot_w: (w - self.margins.left - self.margins.right).max(1.0),
            plot_h: (h - self.margins.top - self.margins.bottom).max(1.0),
            x_domain: self.x.domain,
            y_domain: self.y.domain,
        };

        let mut out = String::with_capacity(4096);
        out.push_str(&format!(
            "<svg class=\"plot\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-size=\"{fs}\" role=\"img\">",
            w = self.width,
            h = self.height,
            fs = self.font_size
        ));

        self.push_x_axis(&mut out, &frame);
        self.push_y_axis(&mut out, &frame);

        for mark in &self.marks {
            match mark {
                Mark::RectY(rect) => push_rect(&mut out, &frame, rect),
                Mark::RuleX(rule) => {
                    let x = frame.sx(rule.value);
                    push_line(
                        &mut out,
                        (x, frame.top),
                        (x, frame.top + frame.plot_h),
                        rule,
                    );
                }
                Mark::RuleY(rule) => {
                    let y = frame.sy(rule.value);
                    push_line(
                        &mut out,
                        (frame.left, y),
                        (frame.left + frame.plot_w, y),
                        rule,
                    );
                }
            }
        }

        out.push_str("</svg>");
        Html::raw(out)
    }

    fn push_x_axis(&self, out: &mut String, frame: &Frame) {
        let y0 = frame.top + frame.plot_h;
        out.push_str("<g class=\"x-axis\" fill=\"currentColor\">");
        for tick in nice_ticks(self.x.domain.0, self.x.domain.1, self.x.ticks) {
            let Some(label) = format_tick(tick, self.x.format) else {
                continue;
            };
            let x = frame.sx(tick);
            out.push_str(&format!(
                "<line x1=\"{x}\" y1=\"{y1}\" x2=\"{x}\" y2=\"{y2}\" stroke=\"currentColor\"/>",
                x = fmt_coord(x),
                y1 = fmt_coord(y0),
                y2 = fmt_coord(y0 + 6.0)
            ));
            out.push_str(&format!(
                "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\">{}</text>",
                fmt_coord(x),
                fmt_coord(y0 + 16.0),
                label
            ));
        }
        if !self.x.label.is_empty() {
            out.push_str(&format!(
                "<text class=\"axis-label\" x=\"{}\" y=\"{}\" text-anchor=\"end\">{} →</text>",
                fmt_coord(frame.left + frame.plot_w),
                fmt_coord(y0 + 30.0),
                escape(&self.x.label)
            ));
        }
        out.push_str("</g>");
    }

    fn push_y_axis(&self, out: &mut String, frame: &Frame) {
        out.push_str("<g class=\"y-axis\" fill=\"currentColor\">");
        for tick in nice_ticks(self.y.domain.0, self.y.domain.1, self.y.ticks) {
            let Some(label) = format_tick(tick, self.y.format) else {
                continue;
            };
            let y = frame.sy(tick);
            out.push_str(&format!(
                "<line x1=\"{x1}\" y1=\"{y}\" x2=\"{x2}\" y2=\"{y}\" stroke=\"currentColor\"/>",
                x1 = fmt_coord(frame.left - 6.0),
                x2 = fmt_coord(frame.left),
                y = fmt_coord(y)
            ));
            out.push_str(&format!(
                "<text x=\"{}\" y=\"{}\" text-anchor=\"end\" dy=\"0.32em\">{}</text>",
                fmt_coord(frame.left - 9.0),
                fmt_coord(y),
                label
            ));
        }
        if !self.y.label.is_empty() {
            out.push_str(&format!(
                "<text class=\"axis-label\" x=\"{}\" y=\"{}\" text-anchor=\"start\">↑ {}</text>",
                fmt_coord(frame.left - 36.0),
                fmt_coord((frame.top - 4.0).max(10.0)),
                escape(&self.y.label)
            ));
        }
        out.push_str("</g>");
    }
}

fn push_rect(out: &mut String, frame: &Frame, rect: &RectMark) {
    let x_left = frame.sx(rect.x1);
    let x_right = frame.sx(rect.x2);
    let y_top = frame.sy(rect.y);
    let y_base = frame.sy(frame.y_domain.0.max(0.0));
    let width = (x_right - x_left).max(0.0);
    let height = (y_base - y_top).max(0.0);
    out.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" fill-opacity=\"{}\">",
        fmt_coord(x_left),
        fmt_coord(y_top),
        fmt_coord(width),
        fmt_coord(height),
        escape(&rect.fill),
        rect.fill_opacity
    ));
    if let Some(tip) = &rect.tip {
        out.push_str(&format!("<title>{}</title>", escape(tip)));
    }
    out.push_str("</rect>");
}

fn push_line(out: &mut String, from: (f64, f64), to: (f64, f64), rule: &RuleMark) {
    out.push_str(&format!(
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\" stroke-opacity=\"{}\"",
        fmt_coord(from.0),
        fmt_coord(from.1),
        fmt_coord(to.0),
        fmt_coord(to.1),
        escape(&rule.stroke),
        rule.stroke_width,
        rule.stroke_opacity
    ));
    if let Some(dash) = &rule.dasharray {
        out.push_str(&format!(" stroke-dasharray=\"{}\"", escape(dash)));
    }
    out.push_str("/>");
}

fn format_tick(value: f64, format: TickFormat) -> Option<String> {
    match format {
        TickFormat::Number => Some(fmt_coord(value)),
        TickFormat::Integer => {
            if (value - value.round()).abs() < 1e-9 {
                Some(format!("{}", value.round() as i64))
            } else {
                None
            }
        }
    }
}

/// Round tick values (steps of 1, 2 or 5 times a power of ten) covering `[lo, hi]`.
pub fn nice_ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    if !(hi - lo).is_finite() || count == 0 || hi < lo {
        return Vec::new();
    }
    if (hi - lo).abs() < f64::EPSILON {
        return vec![lo];
    }
    let raw_step = (hi - lo) / count as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let step = if residual >= 50f64.sqrt() {
        10.0 * magnitude
    } else if residual >= 10f64.sqrt() {
        5.0 * magnitude
    } else if residual >= 2f64.sqrt() {
        2.0 * magnitude
    } else {
        magnitude
    };
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/plot.rs"]
mod tests;
