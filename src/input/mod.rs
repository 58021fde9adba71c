use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub mod reader;

use crate::model::histogram::{Distribution, Histogram, TestId};
use crate::model::school::SchoolAggregate;
use reader::open_maybe_gz;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Wire form of one school's histograms: `[[bin_start, count], ...]` per test.
#[derive(Debug, Default, Deserialize)]
struct RawDistribution {
    #[serde(default)]
    lm: Option<Vec<(i32, u64)>>,
    #[serde(default)]
    l: Option<Vec<(i32, u64)>>,
    #[serde(default)]
    m: Option<Vec<(i32, u64)>>,
}

pub fn load_schools(path: &Path) -> Result<Vec<SchoolAggregate>, InputError> {
    let reader = open_maybe_gz(path)?;
    let schools: Vec<SchoolAggregate> =
        serde_json::from_reader(reader).map_err(|source| InputError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = std::collections::BTreeSet::new();
    for school in &schools {
        if !seen.insert(school.rbd) {
            return Err(InputError::InvalidInput(format!(
                "duplicate rbd {} in {}",
                school.rbd,
                path.display()
            )));
        }
    }

    tracing::info!(
        "loaded {} schools from {}",
        schools.len(),
        path.display()
    );
    Ok(schools)
}

pub fn load_distributions(path: &Path) -> Result<BTreeMap<u32, Distribution>, InputError> {
    let reader = open_maybe_gz(path)?;
    let raw: BTreeMap<String, RawDistribution> =
        serde_json::from_reader(reader).map_err(|source| InputError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let mut out = BTreeMap::new();
    for (key, dist) in raw {
        let rbd: u32 = key.trim().parse().map_err(|_| {
            InputError::InvalidInput(format!(
                "distribution key {:?} in {} is not an rbd",
                key,
                path.display()
            ))
        })?;
        out.insert(
            rbd,
            Distribution {
                combined: dist
                    .lm
                    .map(|pairs| build_histogram(rbd, TestId::Combined, pairs)),
                reading: dist
                    .l
                    .map(|pairs| build_histogram(rbd, TestId::Reading, pairs)),
                math: dist
                    .m
                    .map(|pairs| build_histogram(rbd, TestId::Math, pairs)),
            },
        );
    }

    tracing::info!(
        "loaded distributions for {} schools from {}",
        out.len(),
        path.display()
    );
    Ok(out)
}

fn build_histogram(rbd: u32, test: TestId, pairs: Vec<(i32, u64)>) -> Histogram {
    let raw_len = pairs.len();
    let histogram = Histogram::from_pairs(pairs);
    if histogram.len() < raw_len {
        tracing::warn!(
            "rbd {} histogram {:?} repeats bin starts; merged {} bins into {}",
            rbd,
            test.wire_key(),
            raw_len,
            histogram.len()
        );
    }
    histogram
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
