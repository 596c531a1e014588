//! Summary types and display grouping.

mod grouping;
mod types;

pub use grouping::{assign_group, sort_summaries};
pub use types::{AttributeGroup, AttributeType, FieldException, Summary, VARIES_BY_FIELD};
