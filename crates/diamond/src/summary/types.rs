//! Core type definitions for attribute summaries.

use serde::{Deserialize, Serialize};

/// Display used when no value dominates an attribute.
pub const VARIES_BY_FIELD: &str = "Varies by field";

/// Display group an attribute belongs to.
///
/// Variant order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttributeGroup {
    /// Playing and structure surfaces (infield, mound, dugout).
    Surfaces,
    /// Measurements (fence distances, heights, baselines).
    Dimensions,
    /// Facilities (lights, bleachers, batting cages).
    Amenities,
    /// Anything else.
    Other,
}

impl AttributeGroup {
    /// All groups in display order.
    pub const ALL: [AttributeGroup; 4] = [
        AttributeGroup::Surfaces,
        AttributeGroup::Dimensions,
        AttributeGroup::Amenities,
        AttributeGroup::Other,
    ];

    /// Human-readable group label.
    pub fn label(&self) -> &'static str {
        match self {
            AttributeGroup::Surfaces => "Surfaces",
            AttributeGroup::Dimensions => "Dimensions",
            AttributeGroup::Amenities => "Amenities",
            AttributeGroup::Other => "Other",
        }
    }
}

impl std::fmt::Display for AttributeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How an attribute's values were reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// Tolerance-aware numeric clustering.
    Numeric,
    /// Frequency-based mode over normalized text.
    Text,
}

/// A field whose value differs from the common value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldException {
    pub field_name: String,
    pub display: String,
}

/// Summary of one attribute across all fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Attribute key as found in the records.
    pub key: String,
    /// Humanized key.
    pub title: String,
    pub group: AttributeGroup,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    /// True when no value dominates.
    pub tie_all_different: bool,
    /// Winning display value, or [`VARIES_BY_FIELD`].
    pub common_value_display: String,
    /// Fields not matching the common value; every present field when tied.
    pub exceptions: Vec<FieldException>,
}

impl Summary {
    /// Whether no value dominates (the `tie_all_different` flag). When set,
    /// the common value is [`VARIES_BY_FIELD`].
    pub fn varies(&self) -> bool {
        self.tie_all_different
    }
}
