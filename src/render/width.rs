use crate::render::html::Html;

/// Responsive host: decides at which width(s) a chart is rendered.
pub trait WidthProvider {
    fn resize(&self, render: &dyn Fn(u32) -> Html) -> Html;
}

/// Renders once at a single width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub u32);

impl WidthProvider for FixedWidth {
    fn resize(&self, render: &dyn Fn(u32) -> Html) -> Html {
        render(self.0)
    }
}

/// Renders once per breakpoint; CSS media queries show the variant matching
/// the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoints {
    widths: Vec<u32>,
}

impl Breakpoints {
    /// Sorted ascending, zero and duplicate widths removed. `None` when nothing is left.
    pub fn new(widths: impl IntoIterator<Item = u32>) -> Option<Self> {
        let mut widths: Vec<u32> = widths.into_iter().filter(|w| *w > 0).collect();
        widths.sort_unstable();
        widths.dedup();
        if widths.is_empty() {
            None
        } else {
            Some(Self { widths })
        }
    }

    pub fn widths(&self) -> &[u32] {
        &self.widths
    }

    /// Media query under which the variant at `index` is visible.
    pub fn media_query(&self, index: usize) -> String {
        let lower = if index == 0 {
            None
        } else {
            self.widths.get(index).copied()
        };
        let upper = self.widths.get(index + 1).map(|w| w - 1);
        match (lower, upper) {
            (None, None) => "all".to_string(),
            (None, Some(max)) => format!("(max-width: {max}px)"),
            (Some(min), None) => format!("(min-width: {min}px)"),
            (Some(min), Some(max)) => format!("(min-width: {min}px) and (max-width: {max}px)"),
        }
    }
}

impl WidthProvider for Breakpoints {
    fn resize(&self, render: &dyn Fn(u32) -> Html) -> Html {
        if let [only] = self.widths.as_slice() {
            return render(*only);
        }
        let mut out = String::new();
        for (idx, width) in self.widths.iter().enumerate() {
            out.push_str(&format!(
                "<div class=\"responsive-variant\" data-width=\"{width}\" data-media=\"{}\">",
                self.media_query(idx)
            ));
            out.push_str(render(*width).as_str());
            out.push_str("</div>");
        }
        Html::raw(out)
    }
}

/// CSS rules toggling `.responsive-variant` blocks for the given breakpoints.
pub fn breakpoint_css(breakpoints: &Breakpoints) -> String {
    let mut css = String::new();
    if breakpoints.widths().len() < 2 {
        return css;
    }
    css.push_str(".responsive-variant { display: none; }\n");
    for (idx, width) in breakpoints.widths().iter().enumerate() {
        css.push_str(&format!(
            "@media {} {{ .responsive-variant[data-width=\"{width}\"] {{ display: block; }} }}\n",
            breakpoints.media_query(idx)
        ));
    }
    css
}

/// Runs `render` through `provider`, or once at `fallback` when there is none.
pub fn render_with(
    provider: Option<&dyn WidthProvider>,
    fallback: u32,
    render: &dyn Fn(u32) -> Html,
) -> Html {
    match provider {
        Some(provider) => provider.resize(render),
        None => FixedWidth(fallback).resize(render),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/width.rs"]
mod tests;
