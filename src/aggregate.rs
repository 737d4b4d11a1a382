//! Per-theme aggregation over a roster subset: unweighted counts or
//! rank-weighted sums.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::roster::Record;

/// Theme name -> aggregated value. Produced fresh per subset and consumed
/// immediately by the chart layer; themes with no records are absent here
/// and re-expanded to zero-radius slots there.
pub type Aggregate = BTreeMap<&'static str, f64>;

/// Rank -> weight policy. Rank 1 is the strongest theme, so the default
/// reciprocal decay gives it weight 1.0 and rank k weight 1/k: weighted
/// aggregation reflects intensity, not just presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Weighting {
    #[default]
    Reciprocal,
    /// Every record weighs 1.0; the weighted aggregate degenerates to counts.
    Uniform,
}

impl Weighting {
    pub fn weight(self, rank: u32) -> f64 {
        match self {
            Weighting::Reciprocal => 1.0 / rank as f64,
            Weighting::Uniform => 1.0,
        }
    }
}

/// Count of records per theme.
pub fn counts(records: &[&Record]) -> Aggregate {
    let mut agg = Aggregate::new();
    for rec in records {
        *agg.entry(rec.theme()).or_insert(0.0) += 1.0;
    }
    agg
}

/// Sum of derived weights per theme.
pub fn weighted(records: &[&Record]) -> Aggregate {
    let mut agg = Aggregate::new();
    for rec in records {
        *agg.entry(rec.theme()).or_insert(0.0) += rec.weight;
    }
    agg
}
