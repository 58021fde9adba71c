use crate::model::ownership::Ownership;
use crate::model::thresholds::Tier;
use crate::pipeline::ficha::{Ficha, TestSummary};
use crate::render::html::{format_es_cl, format_optional};
use crate::report::{format_pct, format_rank};

pub fn render_ficha_text(ficha: &Ficha<'_>) -> String {
    let school = ficha.school;
    let class = &ficha.classification;
    let mut out = String::new();

    out.push_str(&format!("Ficha PAES: {} (RBD {})\n", school.name, school.rbd));
    out.push_str(&"=".repeat(40));
    out.push_str("\n\n");

    out.push_str("1. Establecimiento\n");
    let ownership = ficha
        .ownership
        .map(Ownership::canonical_name)
        .unwrap_or(ficha.ownership_label);
    out.push_str(&format!("Dependencia: {ownership}\n"));
    out.push_str(&format!(
        "Comuna: {} ({})\n\n",
        school.commune_label(),
        school.region_label()
    ));

    out.push_str("2. Ranking\n");
    out.push_str(&format!(
        "Nacional: {} [{}]\n",
        format_rank(Some(school.national_rank)),
        class.national_badge.css_class()
    ));
    out.push_str(&format!(
        "Comunal: {} [{}]\n",
        format_rank(school.commune_rank),
        class.commune_badge.css_class()
    ));
    out.push_str(&format!(
        "Top 10%: {}\n\n",
        format_rank(school.top_decile_rank)
    ));

    out.push_str("3. Puntajes promedio\n");
    out.push_str(&format!(
        "Lectora + Matemática: {} [{}]\n",
        format_optional(school.combined_average, 1),
        class.combined_tier.css_class()
    ));
    out.push_str(&format!(
        "Competencia Lectora: {} [{}]\n",
        format_optional(school.reading_average, 1),
        class.reading_tier.css_class()
    ));
    out.push_str(&format!(
        "Matemática 1: {} [{}]\n",
        format_optional(school.math_average, 1),
        class.math_tier.css_class()
    ));
    out.push_str(&format!(
        "P25 / Mediana / P75: {} / {} / {}\n\n",
        format_optional(school.p25, 0),
        format_optional(school.median, 0),
        format_optional(school.p75, 0)
    ));

    out.push_str("4. Top 10% nacional\n");
    out.push_str(&format!(
        "Estudiantes en top 10%: {} de {} ({}%) [{}]\n\n",
        school.top_decile_count,
        school.total_students,
        format_es_cl(class.top_decile_share, 1),
        class.share_tier.css_class()
    ));

    out.push_str(&format!(
        "5. Distribución (umbral top 10%: {} pts, mediana nacional: {} pts)\n",
        format_es_cl(ficha.top_decile_threshold, 0),
        format_es_cl(ficha.national_median, 0)
    ));
    for summary in &ficha.summaries {
        out.push_str(&summary_line(summary));
        out.push('\n');
    }

    out
}

fn summary_line(summary: &TestSummary) -> String {
    match &summary.summary {
        Some(s) => format!(
            "{}: {} estudiantes, {} sobre el umbral ({}), {} bajo 400 ({})",
            summary.title,
            s.total,
            s.count_at_or_above_threshold,
            format_pct(s.pct_at_or_above_threshold),
            s.count_below_floor,
            format_pct(s.pct_below_floor)
        ),
        None => format!("{}: sin datos suficientes", summary.title),
    }
}
