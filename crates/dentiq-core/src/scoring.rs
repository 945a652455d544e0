//! Score accumulation and bucket classification.
//!
//! The total is a plain sum over recorded responses. Items without a
//! response contribute nothing, so an unfinished walk yields a partial
//! score. Buckets are matched highest lower bound first; the first bucket
//! whose bound does not exceed the value wins.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::{Catalog, CatalogItem, Icon};
use crate::error::ScoringError;

/// Responses keyed by item id, valued by chosen option id.
pub type Responses = HashMap<String, String>;

/// Sum the points of every recorded response.
///
/// Responses naming an unknown item or option are ignored.
pub fn score<T: CatalogItem>(responses: &Responses, catalog: &Catalog<T>) -> u32 {
    responses
        .iter()
        .filter_map(|(item_id, option_id)| catalog.get(item_id)?.points_for(option_id))
        .fold(0u32, u32::saturating_add)
}

/// Best achievable total for a catalog.
pub fn max_possible<T: CatalogItem>(catalog: &Catalog<T>) -> u32 {
    catalog.max_points()
}

/// A computed total together with its ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub total: u32,
    pub max_possible: u32,
}

impl Scorecard {
    pub fn compute<T: CatalogItem>(responses: &Responses, catalog: &Catalog<T>) -> Self {
        Self {
            total: score(responses, catalog),
            max_possible: max_possible(catalog),
        }
    }

    /// Progress-bar fraction in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.max_possible == 0 {
            return 0.0;
        }
        (f64::from(self.total) / f64::from(self.max_possible)).min(1.0)
    }

    /// Whole percentage, rounded down.
    pub fn percent(&self) -> u32 {
        if self.max_possible == 0 {
            return 0;
        }
        let total = u64::from(self.total.min(self.max_possible));
        // At most 100, so the narrowing cannot truncate.
        (total * 100 / u64::from(self.max_possible)) as u32
    }
}

/// Which number a bucket table is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BucketMetric {
    /// Raw point total.
    #[default]
    Total,
    /// Integer percentage of the maximum.
    Percent,
}

/// A named score range with its static result text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultBucket {
    /// Smallest value that falls into this bucket.
    pub lower_bound: u32,
    pub label: String,
    pub icon: Icon,
    pub recommendations: Vec<String>,
}

impl ResultBucket {
    pub fn new(
        lower_bound: u32,
        label: impl Into<String>,
        icon: Icon,
        recommendations: &[&str],
    ) -> Self {
        Self {
            lower_bound,
            label: label.into(),
            icon,
            recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Ordered bucket list partitioning `[0, ∞)`.
#[derive(Debug, Clone, Serialize)]
pub struct BucketTable {
    metric: BucketMetric,
    /// Sorted by descending lower bound.
    buckets: Vec<ResultBucket>,
}

impl BucketTable {
    /// Build a table, sorting buckets highest bound first.
    ///
    /// # Errors
    ///
    /// Fails when the list is empty, two buckets share a bound, or no bucket
    /// starts at 0 (which would leave low values unmatched).
    pub fn new(
        metric: BucketMetric,
        mut buckets: Vec<ResultBucket>,
    ) -> Result<Self, ScoringError> {
        if buckets.is_empty() {
            return Err(ScoringError::NoBuckets);
        }

        buckets.sort_by(|a, b| b.lower_bound.cmp(&a.lower_bound));

        if let Some(pair) = buckets
            .windows(2)
            .find(|pair| pair[0].lower_bound == pair[1].lower_bound)
        {
            return Err(ScoringError::DuplicateBound(pair[0].lower_bound));
        }

        let lowest = buckets.last().map(|b| b.lower_bound).unwrap_or_default();
        if lowest != 0 {
            return Err(ScoringError::MissingZeroBound(lowest));
        }

        Ok(Self { metric, buckets })
    }

    pub fn metric(&self) -> BucketMetric {
        self.metric
    }

    /// Buckets, highest lower bound first.
    pub fn buckets(&self) -> &[ResultBucket] {
        &self.buckets
    }

    /// First-match lookup, highest lower bound first.
    ///
    /// # Errors
    ///
    /// Only fails if no bucket matches, which a validated table rules out.
    pub fn classify(&self, value: u32) -> Result<&ResultBucket, ScoringError> {
        self.buckets
            .iter()
            .find(|bucket| bucket.lower_bound <= value)
            .ok_or(ScoringError::NoMatch(value))
    }

    /// Classify using whichever metric this table is keyed on.
    pub fn classify_scorecard(&self, card: &Scorecard) -> Result<&ResultBucket, ScoringError> {
        match self.metric {
            BucketMetric::Total => self.classify(card.total),
            BucketMetric::Percent => self.classify(card.percent()),
        }
    }

    /// Value range `[lower, upper]` each bucket covers within `[0, max]`.
    ///
    /// Buckets whose bound lies above `max` are reported with an empty range.
    pub fn ranges(&self, max: u32) -> Vec<(u32, Option<u32>)> {
        let mut upper = Some(max);
        let mut out = Vec::with_capacity(self.buckets.len());
        for bucket in &self.buckets {
            match upper {
                Some(u) if bucket.lower_bound <= u => {
                    out.push((bucket.lower_bound, Some(u)));
                    upper = bucket.lower_bound.checked_sub(1);
                }
                _ => out.push((bucket.lower_bound, None)),
            }
        }
        out
    }
}
