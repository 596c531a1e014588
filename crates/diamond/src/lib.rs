//! Diamond: attribute summarization for park field listings.
//!
//! A park carries several playing fields, each described by an open, loosely
//! populated set of attributes (infield material, fence distances, lights).
//! Diamond reduces those per-field values to one common value per attribute
//! plus the fields that deviate from it, ready for compact display:
//!
//! ```text
//! Left Field Distance: 200 ft
//!     Field 3: 180 ft
//! ```
//!
//! # Pipeline
//!
//! - **Discovery**: union of attribute keys, minus identifiers and bookkeeping
//! - **Classification**: numeric or text, per attribute
//! - **Reduction**: tolerance-aware clustering for numbers, mode detection for text
//! - **Formatting**: booleans, feet, rounding, title case
//! - **Grouping**: Surfaces, Dimensions, Amenities, Other
//!
//! # Example
//!
//! ```
//! use diamond::{FieldRecord, Summarizer};
//!
//! let fields = vec![
//!     FieldRecord::new("Field 1").with("infieldMaterial", "dirt"),
//!     FieldRecord::new("Field 2").with("infieldMaterial", "dirt"),
//!     FieldRecord::new("Field 3").with("infieldMaterial", "turf"),
//! ];
//!
//! let summaries = Summarizer::new().summarize(&fields);
//! assert_eq!(summaries[0].common_value_display, "Dirt");
//! assert_eq!(summaries[0].exceptions[0].display, "Turf");
//! ```

pub mod error;
pub mod format;
pub mod inference;
pub mod input;
pub mod summary;

mod summarizer;

pub use crate::summarizer::{Inspection, Summarizer, SummaryConfig, ToleranceOverride};
pub use error::{DiamondError, Result};
pub use input::{FieldRecord, Parser, RawValue, SourceMetadata};
pub use summary::{AttributeGroup, AttributeType, FieldException, Summary, VARIES_BY_FIELD};
