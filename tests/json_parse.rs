use chart_data_analysis::parse::json::{parse_json_from_path, parse_json_str};
use chart_data_analysis::types::{DataPoint, Dataset};
use chart_data_analysis::ChartDataError;

#[test]
fn parse_single_series_from_path_happy_path() {
    let dataset = parse_json_from_path("tests/fixtures/fruit.json").unwrap();

    let Dataset::Row(row) = dataset else {
        panic!("expected a single series");
    };
    assert_eq!(row.key, "Fruit");
    assert_eq!(row.values.len(), 4);
    assert_eq!(row.values[0], DataPoint::new("Apples", 9.0));
    assert_eq!(row.values[3], DataPoint::new("Bananas", 7.0));
}

#[test]
fn parse_series_collection_from_path_happy_path() {
    let dataset = parse_json_from_path("tests/fixtures/countries.json").unwrap();

    let Dataset::Rows(rows) = dataset else {
        panic!("expected a series collection");
    };
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].key, "2000");
    assert_eq!(rows[3].values[1], DataPoint::new("France", 12.0));
}

#[test]
fn null_observations_are_carried_as_nan() {
    let input = r#"
    [
        {"key": "a", "values": [{"key": "x", "value": 1.5}, {"key": "y", "value": null}]},
        {"key": "b", "values": [{"key": "x", "value": 2.0}, {"key": "y", "value": 3.0}]}
    ]"#;

    let Dataset::Rows(rows) = parse_json_str(input).unwrap() else {
        panic!("expected a series collection");
    };
    assert!(rows[0].values[1].value.is_nan());
    assert_eq!(rows[1].values[1].value, 3.0);
}

#[test]
fn errors_on_input_matching_neither_shape() {
    for input in ["42", "\"Fruit\"", "true"] {
        let err = parse_json_str(input).unwrap_err();
        assert!(
            matches!(err, ChartDataError::ShapeMismatch { .. }),
            "input {input:?} should be a shape mismatch, got: {err}"
        );
    }
}

#[test]
fn errors_on_series_missing_key() {
    let input = r#"[{"values": [{"key": "x", "value": 1}]}]"#;
    let err = parse_json_str(input).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("shape mismatch"));
    assert!(msg.contains("series 1 missing required string field 'key'"));
}

#[test]
fn errors_on_series_missing_values() {
    let input = r#"{"key": "Fruit"}"#;
    let err = parse_json_str(input).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("missing required array field 'values'"));
}

#[test]
fn errors_on_non_numeric_observation() {
    let input = r#"{"key": "Fruit", "values": [{"key": "Apples", "value": "many"}]}"#;
    let err = parse_json_str(input).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to parse value"));
    assert!(msg.contains("column 'Apples'"));
    assert!(msg.contains("expected number or null"));
}

#[test]
fn errors_on_invalid_json() {
    let err = parse_json_str("{not json").unwrap_err();
    assert!(matches!(err, ChartDataError::Json(_)));
}
