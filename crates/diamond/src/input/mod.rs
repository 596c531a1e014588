//! Field record model and input loading.

mod parser;
mod record;
mod source;

pub use parser::{InputFormat, Parser, ParserConfig};
pub use record::{FieldRecord, RawValue, FOLDED_DISTANCE_KEY, LEGACY_DISTANCE_KEY};
pub use source::SourceMetadata;
