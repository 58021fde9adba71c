//! Self-contained HTML documents for the school sheet and the ranking table.

use std::fmt::{self, Write as FmtWrite};

use crate::model::ownership::Ownership;
use crate::model::thresholds::Tier;
use crate::pipeline::ficha::Ficha;
use crate::pipeline::rank::RankingQuery;
use crate::render::badges::{
    dep_badge, rank_badge_cell, school_name, score_value, top10_indicator,
};
use crate::render::cards::{StatCard, TitleLevel, stats_grid};
use crate::render::composer::{ComposerOptions, compose};
use crate::render::figure::static_figure;
use crate::render::html::{Html, escape, format_es_cl, format_optional};
use crate::report::{RankingRow, format_pct, format_rank};

fn write_head(html: &mut String, title: &str, extra_css: &str) -> fmt::Result {
    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"es\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\"/>")?;
    writeln!(
        html,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>"
    )?;
    writeln!(html, "<title>{}</title>", escape(title))?;
    writeln!(html, "<style>")?;
    write_base_css(html)?;
    if !extra_css.is_empty() {
        html.push_str(extra_css);
    }
    writeln!(html, "</style>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    Ok(())
}

fn write_base_css(html: &mut String) -> fmt::Result {
    writeln!(
        html,
        ":root{{--datalized-teal:#0f8b8d;--theme-foreground-muted:#6b7280;}}"
    )?;
    writeln!(
        html,
        "body{{font-family:Arial,Helvetica,sans-serif;margin:20px;color:#222;background:#fff;}}"
    )?;
    writeln!(html, "h1{{margin:0 0 8px 0;font-size:24px;}}")?;
    writeln!(html, "h2{{margin:24px 0 8px 0;font-size:20px;}}")?;
    writeln!(
        html,
        ".meta{{color:var(--theme-foreground-muted);font-size:13px;margin-bottom:16px;}}"
    )?;
    writeln!(html, ".note{{color:var(--theme-foreground-muted);font-style:italic;padding:24px 0;}}")?;
    writeln!(
        html,
        ".stats-grid{{display:grid;grid-template-columns:repeat(auto-fit,minmax(160px,1fr));gap:12px;margin:12px 0;}}"
    )?;
    writeln!(
        html,
        ".stat-card{{border:1px solid #e5e5e5;border-radius:6px;padding:10px 12px;}}"
    )?;
    writeln!(
        html,
        ".stat-card h2,.stat-card h3{{margin:0 0 4px 0;font-size:13px;color:var(--theme-foreground-muted);}}"
    )?;
    writeln!(html, ".stat-card .value{{display:block;font-size:22px;font-weight:bold;}}")?;
    writeln!(html, ".stat-card .value.highlight{{color:var(--datalized-teal);}}")?;
    writeln!(html, ".stat-card small{{color:var(--theme-foreground-muted);}}")?;
    writeln!(
        html,
        ".grid-cols-3{{display:grid;grid-template-columns:repeat(3,minmax(0,1fr));gap:12px;}}"
    )?;
    writeln!(
        html,
        ".card{{border:1px solid #e5e5e5;border-radius:6px;padding:10px;}}"
    )?;
    writeln!(html, "figure{{margin:8px 0;}}")?;
    writeln!(html, "figcaption{{font-size:13px;color:#444;}}")?;
    writeln!(html, "svg.plot{{background:#fafafa;overflow:visible;}}")?;
    writeln!(
        html,
        ".table{{border-collapse:collapse;width:100%;font-size:12px;}}"
    )?;
    writeln!(
        html,
        ".table th,.table td{{border:1px solid #ddd;padding:4px 6px;text-align:right;}}"
    )?;
    writeln!(html, ".table td.left,.table th.left{{text-align:left;}}")?;
    writeln!(html, ".table td.center{{text-align:center;}}")?;
    writeln!(
        html,
        ".rank-badge{{display:inline-block;min-width:22px;padding:1px 6px;border-radius:10px;background:#eee;}}"
    )?;
    writeln!(html, ".rank-badge.gold{{background:#f5c518;font-weight:bold;}}")?;
    writeln!(html, ".rank-badge.silver{{background:#c0c0c0;font-weight:bold;}}")?;
    writeln!(html, ".rank-badge.bronze{{background:#cd7f32;color:#fff;font-weight:bold;}}")?;
    writeln!(
        html,
        ".dep-badge{{display:inline-block;padding:1px 6px;border-radius:4px;color:#fff;font-size:11px;}}"
    )?;
    for ownership in Ownership::ALL {
        writeln!(
            html,
            ".dep-badge.{}{{background:{};}}",
            ownership.style_class(),
            ownership.color()
        )?;
    }
    writeln!(html, ".score-value.excellent{{color:#1b7f3b;font-weight:bold;}}")?;
    writeln!(html, ".score-value.good{{color:#2a9d8f;font-weight:bold;}}")?;
    writeln!(html, ".score-value.moderate{{color:#457b9d;}}")?;
    writeln!(html, ".score-value.normal{{color:#444;}}")?;
    writeln!(html, ".top10-indicator{{display:flex;align-items:center;gap:6px;}}")?;
    writeln!(
        html,
        ".top10-bar{{flex:1;height:8px;background:#eee;border-radius:4px;overflow:hidden;min-width:60px;}}"
    )?;
    writeln!(html, ".top10-bar-fill{{height:100%;}}")?;
    writeln!(html, ".top10-bar-fill.excellent{{background:#1b7f3b;}}")?;
    writeln!(html, ".top10-bar-fill.good{{background:#2a9d8f;}}")?;
    writeln!(html, ".top10-bar-fill.moderate{{background:#e9c46a;}}")?;
    writeln!(html, ".top10-bar-fill.low{{background:#e63946;}}")?;
    Ok(())
}

fn write_tail(html: &mut String) -> fmt::Result {
    writeln!(
        html,
        "<div class=\"meta\">Generado por {} {}</div>",
        crate::report::TOOL_NAME,
        crate::report::TOOL_VERSION
    )?;
    writeln!(html, "</body></html>")?;
    Ok(())
}

fn ficha_cards(ficha: &Ficha<'_>) -> Vec<StatCard> {
    let school = ficha.school;
    let class = &ficha.classification;

    let mut national = StatCard::new("Ranking nacional", format_rank(Some(school.national_rank)))
        .level(TitleLevel::H2);
    if class.national_badge.rank() > 0 {
        national = national.highlight();
    }
    let mut commune = StatCard::new("Ranking comunal", format_rank(school.commune_rank))
        .subtitle(school.commune_label());
    if class.commune_badge.rank() > 0 {
        commune = commune.highlight();
    }
    let mut top10 = StatCard::new("En top 10% nacional", format_es_cl(school.top_decile_count as f64, 0))
        .subtitle(format!("{}% del total", format_es_cl(class.top_decile_share, 1)));
    if class.share_tier.rank() >= 2 {
        top10 = top10.highlight();
    }

    vec![
        national,
        commune,
        StatCard::new("Estudiantes", format_es_cl(school.total_students as f64, 0)),
        StatCard::new("Promedio L+M", format_optional(school.combined_average, 1)).subtitle(
            format!(
                "Lectora {} · Matemática {}",
                format_optional(school.reading_average, 1),
                format_optional(school.math_average, 1)
            ),
        ),
        top10,
        StatCard::new("Mediana", format_optional(school.median, 0)).subtitle(format!(
            "P25 {} · P75 {}",
            format_optional(school.p25, 0),
            format_optional(school.p75, 0)
        )),
    ]
}

pub fn ficha_page(
    ficha: &Ficha<'_>,
    options: &ComposerOptions<'_>,
    extra_css: &str,
) -> Result<Html, fmt::Error> {
    let school = ficha.school;
    let mut html = String::with_capacity(64 * 1024);
    write_head(&mut html, &format!("Ficha PAES: {}", school.name), extra_css)?;

    writeln!(html, "<h1>{}</h1>", escape(&school.name))?;
    writeln!(
        html,
        "<div class=\"meta\">{} RBD {} · {}, {}</div>",
        dep_badge(&school.ownership_code),
        school.rbd,
        escape(school.commune_label()),
        escape(school.region_label())
    )?;
    writeln!(html, "{}", stats_grid(&ficha_cards(ficha)))?;

    writeln!(html, "<h2>Distribución de puntajes</h2>")?;
    let grid = compose(ficha.distribution, school, options);
    let caption = Html::raw(format!(
        "Estudiantes por tramo de 20 puntos. Umbral top 10%: {} pts; mediana nacional: {} pts.",
        format_es_cl(options.top_decile_threshold, 0),
        format_es_cl(options.national_median, 0)
    ));
    writeln!(html, "{}", static_figure(&grid, &caption, Some(1)))?;

    writeln!(html, "<h2>Resumen por prueba</h2>")?;
    writeln!(html, "<table class=\"table summary\">")?;
    writeln!(
        html,
        "<tr><th class=\"left\">Prueba</th><th>Estudiantes</th><th>En top 10%</th><th>%</th><th>Bajo 400</th><th>%</th></tr>"
    )?;
    for row in &ficha.summaries {
        match &row.summary {
            Some(s) => writeln!(
                html,
                "<tr><td class=\"left\">{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(row.title),
                format_es_cl(s.total as f64, 0),
                format_es_cl(s.count_at_or_above_threshold as f64, 0),
                format_pct(s.pct_at_or_above_threshold),
                format_es_cl(s.count_below_floor as f64, 0),
                format_pct(s.pct_below_floor)
            )?,
            None => writeln!(
                html,
                "<tr><td class=\"left\">{}</td><td colspan=\"5\" class=\"left\">Sin datos suficientes</td></tr>",
                escape(row.title)
            )?,
        }
    }
    writeln!(html, "</table>")?;

    write_tail(&mut html)?;
    Ok(Html::raw(html))
}

pub fn ranking_page(
    title: &str,
    query: &RankingQuery,
    rows: &[RankingRow<'_>],
    figure: Option<&Html>,
    extra_css: &str,
) -> Result<Html, fmt::Error> {
    let mut html = String::with_capacity(256 * 1024);
    write_head(&mut html, title, extra_css)?;

    writeln!(html, "<h1>{}</h1>", escape(title))?;
    let filters = query.describe();
    writeln!(
        html,
        "<div class=\"meta\">{} establecimientos{}</div>",
        format_es_cl(rows.len() as f64, 0),
        if filters.is_empty() {
            String::new()
        } else {
            format!(" · {}", escape(&filters))
        }
    )?;

    if let Some(figure) = figure {
        writeln!(html, "{figure}")?;
    }

    writeln!(html, "<table class=\"table ranking\">")?;
    writeln!(
        html,
        "<tr><th>Nacional</th><th>Comunal</th><th>Top 10%</th><th class=\"left\">Establecimiento</th>\
<th class=\"left\">Dependencia</th><th class=\"left\">Comuna</th><th>Estudiantes</th><th>Promedio L+M</th><th>En top 10%</th></tr>"
    )?;
    for row in rows {
        let school = row.school;
        writeln!(
            html,
            "<tr><td class=\"center\">{}</td><td class=\"center\">{}</td><td class=\"center\">{}</td>\
<td class=\"left\">{}</td><td class=\"left\">{}</td><td class=\"left\">{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            rank_badge_cell(Some(school.national_rank)),
            rank_badge_cell(school.commune_rank),
            rank_badge_cell(school.top_decile_rank),
            school_name(&school.name),
            dep_badge(&school.ownership_code),
            escape(school.commune_label()),
            format_es_cl(school.total_students as f64, 0),
            score_value(school.combined_average),
            top10_indicator(school.top_decile_count, school.total_students)
        )?;
    }
    writeln!(html, "</table>")?;

    write_tail(&mut html)?;
    Ok(Html::raw(html))
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/page.rs"]
mod tests;
