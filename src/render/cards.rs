use crate::render::html::{Html, escape};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitleLevel {
    H2,
    #[default]
    H3,
}

impl TitleLevel {
    fn tag(self) -> &'static str {
        match self {
            TitleLevel::H2 => "h2",
            TitleLevel::H3 => "h3",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardOptions {
    pub subtitle: Option<String>,
    pub highlight: bool,
    pub title_level: TitleLevel,
}

/// One tile of a stats grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub options: CardOptions,
}

impl StatCard {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            options: CardOptions::default(),
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.options.subtitle = Some(subtitle.into());
        self
    }

    pub fn highlight(mut self) -> Self {
        self.options.highlight = true;
        self
    }

    pub fn level(mut self, level: TitleLevel) -> Self {
        self.options.title_level = level;
        self
    }

    pub fn render(&self) -> Html {
        stat_card(&self.title, &self.value, &self.options)
    }
}

pub fn stat_card(title: &str, value: &str, options: &CardOptions) -> Html {
    let tag = options.title_level.tag();
    let value_class = if options.highlight {
        "value highlight"
    } else {
        "value"
    };
    let mut out = format!(
        "<div class=\"stat-card\"><{tag}>{}</{tag}><span class=\"{value_class}\">{}</span>",
        escape(title),
        escape(value)
    );
    if let Some(subtitle) = options.subtitle.as_deref().filter(|s| !s.is_empty()) {
        out.push_str(&format!("<small>{}</small>", escape(subtitle)));
    }
    out.push_str("</div>");
    Html::raw(out)
}

pub fn stats_grid(cards: &[StatCard]) -> Html {
    Html::raw(format!(
        "<div class=\"stats-grid\">{}</div>",
        Html::concat(cards.iter().map(StatCard::render))
    ))
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/cards.rs"]
mod tests;
