use crate::render::html::Html;
use crate::render::width::{WidthProvider, render_with};

fn caption(caption: &Html, number: Option<u32>) -> String {
    match number {
        Some(n) if n > 0 => format!("<strong>Figura {n}:</strong> {caption}"),
        _ => caption.to_string(),
    }
}

/// Figure whose chart is rendered through `provider` (or once at `fallback_width`).
pub fn plot_figure(
    plot: &dyn Fn(u32) -> Html,
    caption_html: &Html,
    number: Option<u32>,
    provider: Option<&dyn WidthProvider>,
    fallback_width: u32,
) -> Html {
    static_figure(&render_with(provider, fallback_width, plot), caption_html, number)
}

/// Figure around an already rendered chart.
pub fn static_figure(plot: &Html, caption_html: &Html, number: Option<u32>) -> Html {
    Html::raw(format!(
        "<figure><div class=\"plot-container\">{plot}</div><figcaption>{}</figcaption></figure>",
        caption(caption_html, number)
    ))
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/figure.rs"]
mod tests;
