//! Attribute discovery, classification and value reduction.
//!
//! Each attribute flows through [`discover_keys`] -> [`classify`] and then
//! either [`cluster_numeric`] or [`reduce_categorical`], both of which
//! return a [`Consensus`].

mod categorical;
mod classifier;
mod discovery;
mod numeric;

pub use categorical::reduce_categorical;
pub use classifier::{classify, collect_present, ClassifiedAttribute, PresentValue};
pub use discovery::{discover_keys, is_excluded, EXCLUDED_KEYS};
pub use numeric::{build_clusters, cluster_numeric, NumericCluster, Tolerance};

/// Outcome of reducing one attribute's present values.
#[derive(Debug, Clone, PartialEq)]
pub enum Consensus {
    /// One value dominates.
    Dominant {
        /// Display of the dominant value.
        display: String,
        /// Indices into the present values that match it.
        members: Vec<usize>,
    },
    /// No dominant value: tie for largest, or largest below threshold.
    Varies,
}

/// Pick the dominant group among `sizes`, if any.
///
/// Returns `None` when the largest size is shared, or when its share of
/// `total` falls below `threshold`. A share exactly at the threshold
/// dominates.
pub(crate) fn pick_dominant(sizes: &[usize], total: usize, threshold: f64) -> Option<usize> {
    if total == 0 {
        return None;
    }

    let (best, &largest) = sizes.iter().enumerate().max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))?;

    if sizes.iter().filter(|&&s| s == largest).count() > 1 {
        return None;
    }

    if (largest as f64 / total as f64) < threshold {
        return None;
    }

    Some(best)
}
