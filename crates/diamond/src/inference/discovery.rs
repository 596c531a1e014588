//! Attribute key discovery across field records.

use std::collections::BTreeSet;

use crate::input::{FieldRecord, FOLDED_DISTANCE_KEY, LEGACY_DISTANCE_KEY};

/// Keys that never describe a field characteristic: identifiers, names,
/// audit timestamps, and the legacy distance key (read as `fenceDistance`).
pub const EXCLUDED_KEYS: &[&str] = &[
    "id",
    "_id",
    "__v",
    "name",
    "fieldName",
    "field_name",
    "parkId",
    "park_id",
    "createdAt",
    "created_at",
    "updatedAt",
    "updated_at",
    LEGACY_DISTANCE_KEY,
];

/// Whether a key is excluded from discovery.
pub fn is_excluded(key: &str) -> bool {
    EXCLUDED_KEYS.contains(&key)
}

/// Union of attribute keys across all records, minus excluded keys.
///
/// A legacy `distance` key contributes `fenceDistance` instead.
pub fn discover_keys(records: &[FieldRecord]) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();

    for record in records {
        for key in record.attributes.keys() {
            if key == LEGACY_DISTANCE_KEY {
                keys.insert(FOLDED_DISTANCE_KEY.to_string());
            } else if !is_excluded(key) {
                keys.insert(key.clone());
            }
        }
    }

    keys
}
