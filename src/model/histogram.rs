use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::thresholds::BIN_WIDTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bin {
    pub start: i32,
    pub count: u64,
}

impl Bin {
    /// Inclusive upper score of the bin.
    pub fn last_score(&self) -> i64 {
        self.end() - 1
    }

    pub fn end(&self) -> i64 {
        i64::from(self.start) + i64::from(BIN_WIDTH)
    }
}

/// Pre-binned score counts, ascending by `start` with unique starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Histogram {
    bins: Vec<Bin>,
}

impl Histogram {
    /// Sorts by start and sums counts that share a start.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i32, u64)>,
    {
        let mut by_start: BTreeMap<i32, u64> = BTreeMap::new();
        for (start, count) in pairs {
            *by_start.entry(start).or_insert(0) += count;
        }
        let bins = by_start
            .into_iter()
            .map(|(start, count)| Bin { start, count })
            .collect();
        Self { bins }
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn total(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }

    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// `[first start, last end)` covered by the bins.
    pub fn score_range(&self) -> Option<(i64, i64)> {
        let first = self.bins.first()?;
        let last = self.bins.last()?;
        Some((i64::from(first.start), last.end()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestId {
    Combined,
    Reading,
    Math,
}

impl TestId {
    pub const ALL: [TestId; 3] = [TestId::Combined, TestId::Reading, TestId::Math];

    pub fn wire_key(self) -> &'static str {
        match self {
            TestId::Combined => "lm",
            TestId::Reading => "l",
            TestId::Math => "m",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TestId::Combined => "Promedio Lectora + Matemática",
            TestId::Reading => "Competencia Lectora",
            TestId::Math => "Matemática 1",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            TestId::Combined => "var(--datalized-teal)",
            TestId::Reading => "#457B9D",
            TestId::Math => "#2A9D8F",
        }
    }
}

/// Up to three histograms for one school.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub combined: Option<Histogram>,
    pub reading: Option<Histogram>,
    pub math: Option<Histogram>,
}

impl Distribution {
    pub fn get(&self, test: TestId) -> Option<&Histogram> {
        match test {
            TestId::Combined => self.combined.as_ref(),
            TestId::Reading => self.reading.as_ref(),
            TestId::Math => self.math.as_ref(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/histogram.rs"]
mod tests;
