//! Mode detection for text attributes.

use indexmap::IndexMap;
use tracing::trace;

use super::classifier::PresentValue;
use super::{pick_dominant, Consensus};
use crate::format::{format_value, normalize};

/// Reduce a text attribute to its most frequent normalized value.
///
/// Values compare after trimming, collapsing whitespace and lowercasing;
/// the common display comes from the first raw value of the winning group.
pub fn reduce_categorical(present: &[PresentValue<'_>], dominance_threshold: f64) -> Consensus {
    let keys: Vec<String> = present.iter().map(|p| normalize(&p.value.as_text())).collect();

    // normalized value -> (count, first present index), in first-seen order
    let mut counts: IndexMap<&str, (usize, usize)> = IndexMap::new();
    for (i, key) in keys.iter().enumerate() {
        counts.entry(key.as_str()).or_insert((0, i)).0 += 1;
    }

    let sizes: Vec<usize> = counts.values().map(|(count, _)| *count).collect();
    trace!(distinct = counts.len(), total = present.len(), "categorical counts");

    let Some(best) = pick_dominant(&sizes, present.len(), dominance_threshold) else {
        return Consensus::Varies;
    };

    let Some((winner, &(_, first))) = counts.get_index(best) else {
        return Consensus::Varies;
    };

    let members = keys
        .iter()
        .enumerate()
        .filter(|(_, key)| key.as_str() == *winner)
        .map(|(i, _)| i)
        .collect();

    Consensus::Dominant {
        display: format_value(present[first].value),
        members,
    }
}
