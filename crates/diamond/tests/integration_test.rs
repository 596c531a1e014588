//! Integration tests for Diamond.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use diamond::{
    AttributeGroup, AttributeType, FieldException, FieldRecord, Parser, RawValue, Summarizer,
    Summary, SummaryConfig, VARIES_BY_FIELD,
};

/// Helper to create a temporary file with given content and suffix.
fn create_test_file(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_data").join(name)
}

/// One record per value, all under `key`.
fn fields<V: Into<RawValue> + Clone>(key: &str, values: &[V]) -> Vec<FieldRecord> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| FieldRecord::new(format!("Field {}", i + 1)).with(key, v.clone()))
        .collect()
}

fn find<'a>(summaries: &'a [Summary], key: &str) -> &'a Summary {
    summaries
        .iter()
        .find(|s| s.key == key)
        .unwrap_or_else(|| panic!("no summary for {}", key))
}

fn exception(name: &str, display: &str) -> FieldException {
    FieldException {
        field_name: name.to_string(),
        display: display.to_string(),
    }
}

// =============================================================================
// Numeric Reduction
// =============================================================================

#[test]
fn test_numeric_dominant_cluster_with_outlier() {
    let records = fields("leftFieldDistance", &[100.0, 102.0, 98.0, 250.0]);
    let summaries = Summarizer::new().summarize(&records);
    let s = find(&summaries, "leftFieldDistance");

    assert_eq!(s.attribute_type, AttributeType::Numeric);
    assert!(!s.tie_all_different);
    assert_eq!(s.common_value_display, "100");
    assert_eq!(s.exceptions, vec![exception("Field 4", "250")]);
}

#[test]
fn test_two_equal_clusters_tie_regardless_of_order() {
    let orders: [&[f64]; 3] = [
        &[100.0, 101.0, 200.0, 201.0],
        &[201.0, 100.0, 200.0, 101.0],
        &[200.0, 201.0, 101.0, 100.0],
    ];

    for values in orders {
        let records = fields("fenceHeight", values);
        let summaries = Summarizer::new().summarize(&records);
        let s = find(&summaries, "fenceHeight");

        assert!(s.tie_all_different, "expected tie for {:?}", values);
        assert_eq!(s.common_value_display, VARIES_BY_FIELD);
        assert_eq!(s.exceptions.len(), 4);
    }
}

#[test]
fn test_dominance_threshold_boundary() {
    // 13 of 20 is exactly 65%
    let mut values = vec![300.0; 13];
    values.extend([400.0, 500.0, 600.0, 700.0, 800.0, 900.0, 1000.0]);
    let records = fields("fenceDistance", &values[..]);
    let s = find(&Summarizer::new().summarize(&records), "fenceDistance").clone();
    assert!(!s.tie_all_different);
    assert_eq!(s.common_value_display, "300");
    assert_eq!(s.exceptions.len(), 7);

    // 12 of 20 is below it
    let mut values = vec![300.0; 12];
    values.extend([400.0, 500.0, 600.0, 700.0, 800.0, 900.0, 1000.0, 1100.0]);
    let records = fields("fenceDistance", &values[..]);
    let s = find(&Summarizer::new().summarize(&records), "fenceDistance").clone();
    assert!(s.tie_all_different);
    assert_eq!(s.exceptions.len(), 20);
}

#[test]
fn test_custom_dominance_threshold() {
    let records = fields("backstopDistance", &["25 ft", "25 ft", "40 ft", "60 ft"]);

    let default = Summarizer::new().summarize(&records);
    assert!(find(&default, "backstopDistance").tie_all_different);

    let lenient = Summarizer::with_config(SummaryConfig::default().with_dominance_threshold(0.5));
    let summaries = lenient.summarize(&records);
    let s = find(&summaries, "backstopDistance");
    assert!(!s.tie_all_different);
    assert_eq!(s.common_value_display, "25 ft");
    assert_eq!(s.exceptions, vec![exception("Field 3", "40 ft"), exception("Field 4", "60 ft")]);
}

// =============================================================================
// Categorical Reduction and Formatting
// =============================================================================

#[test]
fn test_categorical_mode() {
    let records = fields("infieldMaterial", &["dirt", "dirt", "turf"]);
    let summaries = Summarizer::new().summarize(&records);
    let s = find(&summaries, "infieldMaterial");

    assert_eq!(s.attribute_type, AttributeType::Text);
    assert_eq!(s.group, AttributeGroup::Surfaces);
    assert_eq!(s.common_value_display, "Dirt");
    assert_eq!(s.exceptions, vec![exception("Field 3", "Turf")]);
}

#[test]
fn test_boolean_display() {
    let records = fields("lights", &["TRUE", " true", "True", "off"]);
    let summaries = Summarizer::new().summarize(&records);
    let s = find(&summaries, "lights");

    assert_eq!(s.common_value_display, "Yes");
    assert_eq!(s.exceptions, vec![exception("Field 4", "No")]);
}

#[test]
fn test_numeric_one_and_zero_display_as_boolean() {
    let records = fields("lights", &[1, 1, 0]);
    let summaries = Summarizer::new().summarize(&records);
    let s = find(&summaries, "lights");

    assert_eq!(s.attribute_type, AttributeType::Text);
    assert_eq!(s.common_value_display, "Yes");
    assert_eq!(s.exceptions, vec![exception("Field 3", "No")]);
}

#[test]
fn test_single_value_attribute() {
    let records = vec![
        FieldRecord::new("Field 1").with("scoreboard", "electronic"),
        FieldRecord::new("Field 2"),
    ];
    let summaries = Summarizer::new().summarize(&records);
    let s = find(&summaries, "scoreboard");

    assert_eq!(s.common_value_display, "Electronic");
    assert!(s.exceptions.is_empty());
}

// =============================================================================
// Discovery, Omission and Ordering
// =============================================================================

#[test]
fn test_empty_input() {
    let summarizer = Summarizer::new();
    assert!(summarizer.summarize(&[]).is_empty());
    assert!(summarizer.discover_keys(&[]).is_empty());
}

#[test]
fn test_fixture_summaries() {
    let (records, source) = Parser::new()
        .parse_file(fixture("riverside_park.json"))
        .expect("Failed to load fixture");
    assert_eq!(source.format, "json");
    assert_eq!(source.record_count, 4);
    assert!(source.hash.starts_with("sha256:"));

    let summarizer = Summarizer::new();
    let keys: Vec<String> = summarizer.discover_keys(&records).into_iter().collect();
    assert_eq!(
        keys,
        vec![
            "bleachers",
            "centerFieldDistance",
            "dugoutCovering",
            "fenceDistance",
            "fenceHeight",
            "infieldMaterial",
            "leftFieldDistance",
            "lights",
            "outfieldSurface",
            "parking",
        ]
    );

    let summaries = summarizer.summarize(&records);
    let titles: Vec<&str> = summaries.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Dugout Covering",
            "Infield Material",
            "Outfield Surface",
            "Center Field Distance",
            "Fence Distance",
            "Fence Height",
            "Left Field Distance",
            "Bleachers",
            "Lights",
            "Parking",
        ]
    );

    let left = find(&summaries, "leftFieldDistance");
    assert_eq!(left.group, AttributeGroup::Dimensions);
    assert_eq!(left.common_value_display, "201 ft");
    assert_eq!(left.exceptions, vec![exception("Field 3", "180 ft")]);

    let center = find(&summaries, "centerFieldDistance");
    assert_eq!(center.common_value_display, "229 ft");
    assert!(center.exceptions.is_empty());

    let height = find(&summaries, "fenceHeight");
    assert_eq!(height.attribute_type, AttributeType::Numeric);
    assert_eq!(height.common_value_display, "6");
    assert!(height.exceptions.is_empty());

    // Legacy `distance` on field 4 surfaces as fenceDistance
    let fence = find(&summaries, "fenceDistance");
    assert_eq!(fence.common_value_display, "199 ft");

    let dugout = find(&summaries, "dugoutCovering");
    assert_eq!(dugout.common_value_display, "Covered");
    assert_eq!(dugout.exceptions, vec![exception("Field 3", "Uncovered")]);

    let outfield = find(&summaries, "outfieldSurface");
    assert_eq!(outfield.common_value_display, "Natural Grass");

    let bleachers = find(&summaries, "bleachers");
    assert_eq!(bleachers.group, AttributeGroup::Amenities);
    assert_eq!(bleachers.exceptions, vec![exception("Field 3", "No")]);

    let parking = find(&summaries, "parking");
    assert_eq!(parking.group, AttributeGroup::Other);
    assert_eq!(parking.common_value_display, "Gravel Lot");
}

#[test]
fn test_input_records_unchanged() {
    let records = vec![
        FieldRecord::new("Field 1").with("distance", "300 ft"),
        FieldRecord::new("Field 2").with("fenceDistance", "310 ft"),
    ];
    let before = records.clone();

    let _ = Summarizer::new().summarize(&records);

    assert_eq!(records, before);
}

#[test]
fn test_idempotent() {
    let (records, _) = Parser::new()
        .parse_file(fixture("riverside_park.json"))
        .expect("Failed to load fixture");
    let summarizer = Summarizer::new();

    let first = summarizer.summarize(&records);
    let second = summarizer.summarize(&records);
    assert_eq!(first, second);
}

// =============================================================================
// Input Loading
// =============================================================================

#[test]
fn test_csv_and_json_agree() {
    let csv = "name,infieldMaterial,fenceDistance,lights,dugoutCovering\n\
               Field 1,dirt,300 ft,yes,none\n\
               Field 2,dirt,302 ft,yes,none\n\
               Field 3,turf,250 ft,no,roof\n";
    let json = r#"[
        {"name": "Field 1", "infieldMaterial": "dirt", "fenceDistance": "300 ft", "lights": "yes", "dugoutCovering": "none"},
        {"name": "Field 2", "infieldMaterial": "dirt", "fenceDistance": "302 ft", "lights": "yes", "dugoutCovering": "none"},
        {"name": "Field 3", "infieldMaterial": "turf", "fenceDistance": "250 ft", "lights": "no", "dugoutCovering": "roof"}
    ]"#;

    let csv_file = create_test_file(csv, ".csv");
    let json_file = create_test_file(json, ".json");
    let summarizer = Summarizer::new();

    let (from_csv, csv_source) = summarizer.summarize_file(csv_file.path()).expect("CSV failed");
    let (from_json, json_source) = summarizer.summarize_file(json_file.path()).expect("JSON failed");

    assert_eq!(csv_source.format, "csv");
    assert_eq!(json_source.format, "json");
    assert_eq!(from_csv, from_json);

    let fence = find(&from_csv, "fenceDistance");
    assert_eq!(fence.common_value_display, "301 ft");
    assert_eq!(fence.exceptions, vec![exception("Field 3", "250 ft")]);

    let dugout = find(&from_csv, "dugoutCovering");
    assert_eq!(dugout.common_value_display, "None");
    assert_eq!(dugout.exceptions, vec![exception("Field 3", "Roof")]);
}

#[test]
fn test_tsv_auto_detect() {
    let content = "name\tsurface\nNorth\tgrass\nSouth\tgrass\n";
    let file = create_test_file(content, ".tsv");

    let (records, source) = Parser::new().parse_file(file.path()).expect("Parse failed");
    assert_eq!(source.format, "tsv");
    assert_eq!(records[1].name, "South");
}

#[test]
fn test_missing_file_is_io_error() {
    let result = Parser::new().parse_file("/nonexistent/fields.json");
    assert!(matches!(result, Err(diamond::DiamondError::Io { .. })));
}

#[test]
fn test_config_load() {
    let file = create_test_file(
        r#"{"abs_tol": 1, "tol_by_key": {"fenceDistance": {"pct_tol": 0.0}}}"#,
        ".json",
    );
    let config = SummaryConfig::load(file.path()).expect("Config failed");

    assert_eq!(config.abs_tol, 1.0);
    assert_eq!(config.dominance_threshold, 0.65);
    assert_eq!(config.tolerance_for("fenceDistance").pct_tol, 0.0);

    let bad = create_test_file("{not json", ".json");
    assert!(matches!(
        SummaryConfig::load(bad.path()),
        Err(diamond::DiamondError::Config(_))
    ));
}
