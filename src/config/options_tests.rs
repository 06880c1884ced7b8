use std::io::Write;

use tempfile::NamedTempFile;

use super::options::options_table;
use super::{ConfigError, OptionValue, Options};
use crate::tui::Shape;

#[test]
fn test_options_default() {
    let options = Options::default();

    assert!(!options.no_colors);
    assert_eq!(options.text_bubble_shape, Shape::Round);
}

#[test]
fn test_options_builder() {
    let options = Options::builder().no_colors(true).build();

    assert!(options.no_colors);
    assert_eq!(options.text_bubble_shape, Shape::Round);
}

#[test]
fn test_set_accepts_matching_types() {
    let mut options = Options::default();

    options.set("no_colors", OptionValue::Bool(true)).unwrap();
    options
        .set("text_bubble_shape", OptionValue::Shape(Shape::Square))
        .unwrap();

    assert!(options.no_colors);
    assert_eq!(options.text_bubble_shape, Shape::Square);
}

#[test]
fn test_set_rejects_type_mismatch() {
    let mut options = Options::default();

    let err = options
        .set("no_colors", OptionValue::Shape(Shape::Square))
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::TypeMismatch {
            expected: "bool",
            actual: "Shape",
        }
    );
    assert_eq!(
        err.to_string(),
        "Type mismatch! Expected 'bool' but got 'Shape'."
    );

    let err = options
        .set("text_bubble_shape", OptionValue::Bool(false))
        .unwrap_err();
    assert!(matches!(err, ConfigError::TypeMismatch { expected: "Shape", .. }));

    // nothing changed
    assert_eq!(options, Options::default());
}

#[test]
fn test_set_rejects_unknown_option() {
    let mut options = Options::default();
    let err = options.set("colour", OptionValue::Bool(true)).unwrap_err();

    assert!(matches!(err, ConfigError::UnknownOption { ref name } if name == "colour"));
}

#[test]
fn test_option_value_parse() {
    assert_eq!(OptionValue::parse("true").unwrap(), OptionValue::Bool(true));
    assert_eq!(OptionValue::parse(" FALSE ").unwrap(), OptionValue::Bool(false));
    assert_eq!(
        OptionValue::parse("Square").unwrap(),
        OptionValue::Shape(Shape::Square)
    );
    assert_eq!(
        OptionValue::parse("round").unwrap(),
        OptionValue::Shape(Shape::Round)
    );
    assert!(matches!(
        OptionValue::parse("yes"),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_options_serialization() {
    let options = Options {
        no_colors: true,
        text_bubble_shape: Shape::Square,
    };
    let json = serde_json::to_string(&options).unwrap();

    assert!(json.contains("\"no_colors\":true"));
    assert!(json.contains("\"text_bubble_shape\":\"Square\""));

    let deserialized: Options = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, options);
}

#[test]
fn test_load_from_missing_fields_uses_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(br#"{ "no_colors": true }"#).unwrap();

    let options = Options::load_from(temp_file.path()).unwrap();

    assert!(options.no_colors);
    assert_eq!(options.text_bubble_shape, Shape::Round);
}

#[test]
fn test_load_from_invalid_json() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"not valid json").unwrap();

    assert!(Options::load_from(temp_file.path()).is_err());
}

#[test]
fn test_load_from_wrong_shape_name() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(br#"{ "text_bubble_shape": "Triangle" }"#)
        .unwrap();

    assert!(Options::load_from(temp_file.path()).is_err());
}

#[test]
fn test_save_then_load() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("config.json");
    let options = Options::builder()
        .text_bubble_shape(Shape::Square)
        .build();

    options.save_to(&path).unwrap();
    let loaded = Options::load_from(&path).unwrap();

    assert_eq!(loaded, options);
}

#[test]
fn test_options_table_lists_every_option() {
    let table = options_table(&Options::default());

    assert!(table.contains("no_colors"));
    assert!(table.contains("text_bubble_shape"));
    assert!(table.contains("Round"));
}
