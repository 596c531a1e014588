//! Per-attribute present-value collection and numeric/text classification.

use crate::format::extract_number;
use crate::input::{FieldRecord, RawValue};
use crate::summary::AttributeType;

/// One field's present value for an attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentValue<'a> {
    /// Position of the field in the input.
    pub field_index: usize,
    pub field_name: &'a str,
    pub value: &'a RawValue,
}

/// An attribute with at least one present value, classified.
#[derive(Debug, Clone)]
pub struct ClassifiedAttribute<'a> {
    pub key: &'a str,
    pub attribute_type: AttributeType,
    /// Present values in input order.
    pub present: Vec<PresentValue<'a>>,
    /// Extracted number per present value, aligned with `present`.
    pub numbers: Vec<Option<f64>>,
}

/// Collect present values for a key, in input order.
pub fn collect_present<'a>(key: &str, records: &'a [FieldRecord]) -> Vec<PresentValue<'a>> {
    records
        .iter()
        .enumerate()
        .filter_map(|(field_index, record)| {
            record
                .attribute(key)
                .filter(|v| v.is_present())
                .map(|value| PresentValue {
                    field_index,
                    field_name: record.name.as_str(),
                    value,
                })
        })
        .collect()
}

/// Classify one attribute.
///
/// Returns `None` when no field has a present value. The attribute is
/// numeric when at least two distinct finite numbers can be extracted.
pub fn classify<'a>(key: &'a str, records: &'a [FieldRecord]) -> Option<ClassifiedAttribute<'a>> {
    let present = collect_present(key, records);
    if present.is_empty() {
        return None;
    }

    let numbers: Vec<Option<f64>> = present.iter().map(|p| extract_number(p.value)).collect();

    let mut distinct: Vec<f64> = numbers.iter().flatten().copied().collect();
    distinct.sort_by(f64::total_cmp);
    distinct.dedup();

    let attribute_type = if distinct.len() >= 2 {
        AttributeType::Numeric
    } else {
        AttributeType::Text
    };

    Some(ClassifiedAttribute {
        key,
        attribute_type,
        present,
        numbers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(values: &[RawValue]) -> Vec<FieldRecord> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| FieldRecord::new(format!("Field {}", i + 1)).with("k", v.clone()))
            .collect()
    }

    #[test]
    fn test_no_present_values_is_skipped() {
        let recs = records(&[RawValue::Absent, RawValue::from("  ")]);
        assert!(classify("k", &recs).is_none());
        assert!(classify("missing", &recs).is_none());
    }

    #[test]
    fn test_two_distinct_numbers_is_numeric() {
        let recs = records(&[RawValue::from("200 ft"), RawValue::from("180'"), RawValue::from("n/a")]);
        let attr = classify("k", &recs).unwrap();
        assert_eq!(attr.attribute_type, AttributeType::Numeric);
        assert_eq!(attr.numbers, vec![Some(200.0), Some(180.0), None]);
    }

    #[test]
    fn test_single_distinct_number_is_text() {
        let recs = records(&[RawValue::from("200"), RawValue::from(200.0)]);
        let attr = classify("k", &recs).unwrap();
        assert_eq!(attr.attribute_type, AttributeType::Text);
    }

    #[test]
    fn test_boolean_tokens_are_text() {
        let recs = records(&[RawValue::from("1"), RawValue::from("0"), RawValue::from(true)]);
        let attr = classify("k", &recs).unwrap();
        assert_eq!(attr.attribute_type, AttributeType::Text);
    }

    #[test]
    fn test_present_values_keep_field_positions() {
        let recs = records(&[RawValue::Absent, RawValue::from("grass")]);
        let present = collect_present("k", &recs);
        assert_eq!(present.len(), 1);
        assert_eq!(present[0].field_index, 1);
        assert_eq!(present[0].field_name, "Field 2");
    }
}
