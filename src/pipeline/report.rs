use std::collections::BTreeMap;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::input::InputError;
use crate::model::histogram::Distribution;
use crate::model::school::SchoolAggregate;
use crate::model::thresholds::RenderConfig;
use crate::pipeline::ficha::build_ficha;
use crate::pipeline::rank::{RankingQuery, average_histogram, rank_schools};
use crate::render::composer::ComposerOptions;
use crate::render::figure::plot_figure;
use crate::render::histogram::{HistogramOptions, histogram_plot};
use crate::render::html::{Html, format_es_cl};
use crate::render::page::{ficha_page, ranking_page};
use crate::render::width::{Breakpoints, WidthProvider, breakpoint_css};
use crate::report::RankingRow;
use crate::report::json::{render_ficha_json, render_ranking_json};
use crate::report::text::render_ficha_text;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("HTML rendering failed")]
    Fmt(#[from] fmt::Error),
    #[error("no school with rbd {0}")]
    UnknownSchool(u32),
    #[error(transparent)]
    Input(#[from] InputError),
}

pub fn write_ficha_reports(
    schools: &[SchoolAggregate],
    distributions: &BTreeMap<u32, Distribution>,
    rbd: u32,
    config: &RenderConfig,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, ReportError> {
    let school = schools
        .iter()
        .find(|s| s.rbd == rbd)
        .ok_or(ReportError::UnknownSchool(rbd))?;
    let empty = Distribution::default();
    let distribution = distributions.get(&rbd).unwrap_or_else(|| {
        tracing::warn!(rbd, "no distribution for school, rendering placeholders");
        &empty
    });

    let breakpoints = Breakpoints::new(config.breakpoints.iter().copied());
    let provider = breakpoints.as_ref().map(|b| b as &dyn WidthProvider);
    let css = breakpoints.as_ref().map(breakpoint_css).unwrap_or_default();

    let ficha = build_ficha(school, distribution, config);
    let options = ComposerOptions::from_config(config, provider);
    let page = ficha_page(&ficha, &options, &css)?;
    let json = render_ficha_json(&ficha)?;
    let text = render_ficha_text(&ficha);

    fs::create_dir_all(out_dir)?;
    let outputs = [
        (format!("ficha_{rbd}.html"), page.into_string()),
        (format!("ficha_{rbd}.json"), json),
        (format!("ficha_{rbd}.txt"), text),
    ];
    write_all(out_dir, &outputs)
}

pub fn write_ranking_reports(
    schools: &[SchoolAggregate],
    query: &RankingQuery,
    config: &RenderConfig,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, ReportError> {
    let ranked = rank_schools(schools, query);
    let rows: Vec<RankingRow<'_>> = ranked.iter().map(RankingRow::new).collect();

    let breakpoints = Breakpoints::new(config.breakpoints.iter().copied());
    let provider = breakpoints.as_ref().map(|b| b as &dyn WidthProvider);
    let css = breakpoints.as_ref().map(breakpoint_css).unwrap_or_default();

    let histogram = average_histogram(&ranked);
    let figure = if histogram.is_empty() {
        None
    } else {
        let options = HistogramOptions {
            title: "Promedio Lectora + Matemática".to_string(),
            national_median: Some(config.national_median),
            width_provider: provider,
            fallback_width: config.fallback_width,
            height: config.panel_height,
            y_label: "Establecimientos".to_string(),
            unit: "establecimientos".to_string(),
            ..HistogramOptions::default()
        };
        let caption = Html::text(&format!(
            "Establecimientos por tramo de promedio L+M. Línea punteada: mediana nacional ({} pts).",
            format_es_cl(config.national_median, 0)
        ));
        Some(plot_figure(
            &|width| histogram_plot(&histogram, &options, width).to_svg(),
            &caption,
            Some(1),
            provider,
            config.fallback_width,
        ))
    };

    let page = ranking_page("Ranking PAES", query, &rows, figure.as_ref(), &css)?;
    let json = render_ranking_json(query, &rows)?;

    fs::create_dir_all(out_dir)?;
    let outputs = [
        ("ranking.html".to_string(), page.into_string()),
        ("ranking.json".to_string(), json),
    ];
    write_all(out_dir, &outputs)
}

fn write_all(out_dir: &Path, outputs: &[(String, String)]) -> Result<Vec<PathBuf>, ReportError> {
    let mut written = Vec::with_capacity(outputs.len());
    for (name, contents) in outputs {
        let path = out_dir.join(name);
        write_text(&path, contents)?;
        tracing::info!(path = %path.display(), bytes = contents.len(), "report written");
        written.push(path);
    }
    Ok(written)
}

fn write_text(path: &Path, contents: &str) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/report.rs"]
mod tests;
