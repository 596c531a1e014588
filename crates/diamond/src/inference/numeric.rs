//! Tolerance-aware clustering of numeric attribute values.
//!
//! Values are processed once in ascending order; each joins the nearest
//! existing cluster whose running median lies within tolerance, or starts a
//! new one. The single pass is deterministic but order-sensitive: a value
//! near the midpoint of two emerging clusters lands wherever the ascending
//! sweep puts it.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::classifier::PresentValue;
use super::{pick_dominant, Consensus};
use crate::format::{format_number, has_feet_hint};
use crate::input::RawValue;

/// Absolute and relative tolerance for treating two numbers as equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Minimum distance considered "the same" (in the value's own unit).
    pub abs_tol: f64,
    /// Fraction of the value's magnitude considered "the same".
    pub pct_tol: f64,
}

impl Tolerance {
    pub fn new(abs_tol: f64, pct_tol: f64) -> Self {
        Self { abs_tol, pct_tol }
    }

    /// Tolerance band around `value`.
    pub fn for_value(&self, value: f64) -> f64 {
        self.abs_tol.max(value.abs() * self.pct_tol)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            abs_tol: 5.0,
            pct_tol: 0.02,
        }
    }
}

/// A group of values judged the same within tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericCluster {
    /// Median of member values.
    pub center: f64,
    /// Indices into the present values, in ascending value order.
    pub members: Vec<usize>,
    /// Member values, ascending.
    values: Vec<f64>,
}

impl NumericCluster {
    fn singleton(index: usize, value: f64) -> Self {
        Self {
            center: value,
            members: vec![index],
            values: vec![value],
        }
    }

    fn push(&mut self, index: usize, value: f64) {
        // Input arrives ascending, so `values` stays sorted
        self.members.push(index);
        self.values.push(value);
        self.center = median(&self.values);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Cluster `(index, value)` points.
///
/// Points are sorted ascending (stable, so equal values keep input order).
/// Each joins the cluster whose center is nearest and within
/// `tolerance.for_value(value)`, the earliest cluster winning on equal
/// distance.
pub fn build_clusters(points: &[(usize, f64)], tolerance: Tolerance) -> Vec<NumericCluster> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut clusters: Vec<NumericCluster> = Vec::new();

    for (index, value) in sorted {
        let tol = tolerance.for_value(value);

        let mut nearest: Option<(usize, f64)> = None;
        for (ci, cluster) in clusters.iter().enumerate() {
            let distance = (cluster.center - value).abs();
            if distance <= tol && nearest.is_none_or(|(_, best)| distance < best) {
                nearest = Some((ci, distance));
            }
        }

        match nearest {
            Some((ci, _)) => clusters[ci].push(index, value),
            None => clusters.push(NumericCluster::singleton(index, value)),
        }
    }

    clusters
}

/// Reduce a numeric attribute to its dominant cluster.
///
/// `numbers` is aligned with `present`; present values without a number
/// still count toward the total and always end up as exceptions.
pub fn cluster_numeric(
    present: &[PresentValue<'_>],
    numbers: &[Option<f64>],
    tolerance: Tolerance,
    dominance_threshold: f64,
) -> Consensus {
    let points: Vec<(usize, f64)> = numbers
        .iter()
        .enumerate()
        .filter_map(|(i, n)| n.map(|n| (i, n)))
        .collect();

    let clusters = build_clusters(&points, tolerance);
    let sizes: Vec<usize> = clusters.iter().map(NumericCluster::len).collect();

    trace!(clusters = clusters.len(), ?sizes, total = present.len(), "numeric clusters built");

    let Some(best) = pick_dominant(&sizes, present.len(), dominance_threshold) else {
        return Consensus::Varies;
    };

    let cluster = &clusters[best];
    let feet = cluster
        .members
        .first()
        .map(|&i| match present[i].value {
            RawValue::Text(text) => has_feet_hint(text),
            _ => false,
        })
        .unwrap_or(false);

    Consensus::Dominant {
        display: format_number(cluster.center, feet),
        members: cluster.members.clone(),
    }
}
