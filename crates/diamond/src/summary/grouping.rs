//! Display group assignment and final ordering.

use super::types::{AttributeGroup, Summary};

const SURFACE_KEYWORDS: &[&str] = &["infield", "outfield", "surface", "mound", "dugout", "turf", "grass"];

const DIMENSION_KEYWORDS: &[&str] = &[
    "fence", "height", "distance", "baseline", "backstop", "radius", "width", "length", "diameter",
    "depth",
];

const AMENITY_KEYWORDS: &[&str] = &["light", "bleacher", "scoreboard", "net", "bullpen", "cage", "amenit"];

fn is_surface(key: &str) -> bool {
    SURFACE_KEYWORDS.iter().any(|k| key.contains(k))
}

fn is_dimension(key: &str) -> bool {
    DIMENSION_KEYWORDS.iter().any(|k| key.contains(k))
}

fn is_amenity(key: &str) -> bool {
    AMENITY_KEYWORDS.iter().any(|k| key.contains(k))
}

/// Rules evaluated top to bottom; the first match wins.
const GROUP_RULES: &[(fn(&str) -> bool, AttributeGroup)] = &[
    (is_surface, AttributeGroup::Surfaces),
    (is_dimension, AttributeGroup::Dimensions),
    (is_amenity, AttributeGroup::Amenities),
];

/// Assign an attribute key to its display group.
pub fn assign_group(key: &str) -> AttributeGroup {
    let lower = key.to_lowercase();
    GROUP_RULES
        .iter()
        .find(|(matches, _)| matches(&lower))
        .map(|(_, group)| *group)
        .unwrap_or(AttributeGroup::Other)
}

/// Order summaries by group, then title, then key.
pub fn sort_summaries(summaries: &mut [Summary]) {
    summaries.sort_by(|a, b| {
        a.group
            .cmp(&b.group)
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.key.cmp(&b.key))
    });
}
