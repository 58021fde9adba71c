mod input;
mod logging;
mod model;
mod pipeline;
mod render;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::input::{load_distributions, load_schools};
use crate::model::thresholds::RenderConfig;
use crate::pipeline::rank::{RankingOrder, RankingQuery};
use crate::pipeline::report::{ReportError, write_ficha_reports, write_ranking_reports};

#[derive(Debug, Parser)]
#[command(name = "paes-ficha", version, about = "PAES school sheets and rankings")]
struct Cli {
    /// Debug logging (RUST_LOG still takes precedence).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sheet for one school: HTML page, JSON and plain-text summary.
    Ficha(FichaArgs),
    /// Filtered ranking table.
    Ranking(RankingArgs),
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Score at which a student enters the national top decile.
    #[arg(long = "p90", value_parser = parse_score)]
    top_decile_threshold: Option<f64>,
    /// National median of the combined score.
    #[arg(long, value_parser = parse_score)]
    national_median: Option<f64>,
    /// Chart width when no breakpoints are given.
    #[arg(long)]
    width: Option<u32>,
    /// Chart widths rendered for responsive layouts, e.g. 320,640,960.
    #[arg(long, value_delimiter = ',')]
    breakpoints: Vec<u32>,
}

fn parse_score(value: &str) -> Result<f64, String> {
    let score: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("{value:?} is not a number"))?;
    if score.is_finite() {
        Ok(score)
    } else {
        Err(format!("{value:?} is not a finite score"))
    }
}

impl RenderArgs {
    fn to_config(&self) -> RenderConfig {
        let mut config = RenderConfig::default();
        if let Some(v) = self.top_decile_threshold {
            config.top_decile_threshold = v;
        }
        if let Some(v) = self.national_median {
            config.national_median = v;
        }
        if let Some(v) = self.width {
            config.fallback_width = v;
        }
        config.breakpoints = self.breakpoints.clone();
        config
    }
}

#[derive(Debug, Args)]
struct FichaArgs {
    /// Schools JSON (.json or .json.gz).
    #[arg(long)]
    schools: PathBuf,
    /// Distributions JSON keyed by rbd (.json or .json.gz).
    #[arg(long)]
    distributions: PathBuf,
    #[arg(long)]
    rbd: u32,
    #[arg(long)]
    out: PathBuf,
    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Debug, Args)]
struct RankingArgs {
    #[arg(long)]
    schools: PathBuf,
    #[arg(long)]
    out: PathBuf,
    #[arg(long)]
    region: Option<String>,
    #[arg(long)]
    commune: Option<String>,
    #[arg(long)]
    ownership: Option<String>,
    #[arg(long)]
    limit: Option<usize>,
    #[arg(long, value_enum, default_value_t = RankingOrder::National)]
    by: RankingOrder,
    #[command(flatten)]
    render: RenderArgs,
}

impl RankingArgs {
    fn query(&self) -> RankingQuery {
        RankingQuery {
            region: self.region.clone(),
            commune: self.commune.clone(),
            ownership: self.ownership.clone(),
            order: self.by,
            limit: self.limit,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ReportError> {
    let written = match cli.command {
        Command::Ficha(args) => {
            let schools = load_schools(&args.schools)?;
            let distributions = load_distributions(&args.distributions)?;
            write_ficha_reports(
                &schools,
                &distributions,
                args.rbd,
                &args.render.to_config(),
                &args.out,
            )?
        }
        Command::Ranking(args) => {
            let schools = load_schools(&args.schools)?;
            write_ranking_reports(
                &schools,
                &args.query(),
                &args.render.to_config(),
                &args.out,
            )?
        }
    };
    tracing::info!(files = written.len(), "done");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
