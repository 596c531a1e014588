//! Main Summarizer struct and public API.

use std::collections::BTreeSet;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{DiamondError, Result};
use crate::format::{format_value, humanize_key};
use crate::inference::{
    classify, cluster_numeric, discover_keys, reduce_categorical, ClassifiedAttribute, Consensus,
    Tolerance,
};
use crate::input::{FieldRecord, Parser, SourceMetadata};
use crate::summary::{
    assign_group, sort_summaries, AttributeType, FieldException, Summary, VARIES_BY_FIELD,
};

/// Per-attribute tolerance override; unset parts fall back to the defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ToleranceOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abs_tol: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pct_tol: Option<f64>,
}

/// Tuning for the summarizer. Values are not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Absolute numeric tolerance.
    pub abs_tol: f64,
    /// Relative numeric tolerance (fraction of magnitude).
    pub pct_tol: f64,
    /// Minimum share of present values the winner must cover.
    pub dominance_threshold: f64,
    /// Tolerance overrides keyed by attribute.
    pub tol_by_key: IndexMap<String, ToleranceOverride>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            abs_tol: 5.0,
            pct_tol: 0.02,
            dominance_threshold: 0.65,
            tol_by_key: IndexMap::new(),
        }
    }
}

impl SummaryConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DiamondError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content)
            .map_err(|e| DiamondError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn with_abs_tol(mut self, abs_tol: f64) -> Self {
        self.abs_tol = abs_tol;
        self
    }

    pub fn with_pct_tol(mut self, pct_tol: f64) -> Self {
        self.pct_tol = pct_tol;
        self
    }

    pub fn with_dominance_threshold(mut self, threshold: f64) -> Self {
        self.dominance_threshold = threshold;
        self
    }

    /// Override the tolerance for one attribute key.
    pub fn with_key_tolerance(mut self, key: impl Into<String>, tolerance: ToleranceOverride) -> Self {
        self.tol_by_key.insert(key.into(), tolerance);
        self
    }

    /// Effective tolerance for an attribute key.
    pub fn tolerance_for(&self, key: &str) -> Tolerance {
        let over = self.tol_by_key.get(key).copied().unwrap_or_default();
        Tolerance::new(
            over.abs_tol.unwrap_or(self.abs_tol),
            over.pct_tol.unwrap_or(self.pct_tol),
        )
    }
}

/// Debug dump: the discovered key set alongside the summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inspection {
    /// Every discovered attribute key, including ones with no present value.
    pub keys: BTreeSet<String>,
    pub summaries: Vec<Summary>,
}

/// The attribute summarization engine.
///
/// Holds only configuration; every call builds its output from scratch and
/// leaves the input records untouched.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummaryConfig,
}

impl Summarizer {
    /// Create a summarizer with default configuration.
    pub fn new() -> Self {
        Self::with_config(SummaryConfig::default())
    }

    /// Create a summarizer with custom configuration.
    pub fn with_config(config: SummaryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Attribute keys present across the records, minus bookkeeping keys.
    pub fn discover_keys(&self, records: &[FieldRecord]) -> BTreeSet<String> {
        discover_keys(records)
    }

    /// Summarize every attribute with at least one present value, ordered by
    /// group then title.
    #[instrument(skip_all, fields(records = records.len()))]
    pub fn summarize(&self, records: &[FieldRecord]) -> Vec<Summary> {
        let keys = discover_keys(records);
        self.summarize_keys(&keys, records)
    }

    /// Summaries together with the discovered key set.
    pub fn inspect(&self, records: &[FieldRecord]) -> Inspection {
        let keys = discover_keys(records);
        let summaries = self.summarize_keys(&keys, records);
        Inspection { keys, summaries }
    }

    /// Load a field list from a file and summarize it.
    pub fn summarize_file(&self, path: impl AsRef<Path>) -> Result<(Vec<Summary>, SourceMetadata)> {
        let (records, source) = Parser::new().parse_file(path)?;
        Ok((self.summarize(&records), source))
    }

    fn summarize_keys(&self, keys: &BTreeSet<String>, records: &[FieldRecord]) -> Vec<Summary> {
        let mut summaries: Vec<Summary> = keys
            .iter()
            .filter_map(|key| classify(key, records))
            .map(|attribute| self.summarize_attribute(&attribute))
            .collect();

        sort_summaries(&mut summaries);

        debug!(
            keys = keys.len(),
            summaries = summaries.len(),
            "summarized field attributes"
        );

        summaries
    }

    fn summarize_attribute(&self, attribute: &ClassifiedAttribute<'_>) -> Summary {
        let threshold = self.config.dominance_threshold;

        let consensus = match attribute.attribute_type {
            AttributeType::Numeric => cluster_numeric(
                &attribute.present,
                &attribute.numbers,
                self.config.tolerance_for(attribute.key),
                threshold,
            ),
            AttributeType::Text => reduce_categorical(&attribute.present, threshold),
        };

        let (tie_all_different, common_value_display, exceptions) = match consensus {
            Consensus::Dominant { display, members } => {
                let mut matched = vec![false; attribute.present.len()];
                for i in members {
                    matched[i] = true;
                }
                let exceptions: Vec<FieldException> = attribute
                    .present
                    .iter()
                    .zip(matched)
                    .filter(|(_, matched)| !matched)
                    .map(|(p, _)| FieldException {
                        field_name: p.field_name.to_string(),
                        display: format_value(p.value),
                    })
                    .collect();
                (false, display, exceptions)
            }
            Consensus::Varies => {
                let exceptions: Vec<FieldException> = attribute
                    .present
                    .iter()
                    .map(|p| FieldException {
                        field_name: p.field_name.to_string(),
                        display: format_value(p.value),
                    })
                    .collect();
                (true, VARIES_BY_FIELD.to_string(), exceptions)
            }
        };

        debug!(
            key = attribute.key,
            kind = ?attribute.attribute_type,
            tie_all_different,
            exceptions = exceptions.len(),
            "attribute summarized"
        );

        Summary {
            key: attribute.key.to_string(),
            title: humanize_key(attribute.key),
            group: assign_group(attribute.key),
            attribute_type: attribute.attribute_type,
            tie_all_different,
            common_value_display,
            exceptions,
        }
    }
}
