use select_autocomplete::SelectError;
use select_autocomplete::config::{Appearance, ElementSelectors, SelectConfig};

#[test]
fn test_defaults() {
    let config = SelectConfig::default();
    assert_eq!(config.search_placeholder, "search...");
    assert_eq!(config.placeholder, None);
    assert_eq!(config.display_field, "display");
    assert_eq!(config.value_field, "value");
    assert_eq!(config.error_message, "Field is required");
    assert!(!config.show_error);
    assert!(config.multiple);
    assert_eq!(config.label_count, 1);
    assert_eq!(config.appearance, Appearance::Standard);
    assert!(config.selectors.is_none());
}

#[test]
fn test_from_json_partial() {
    let config = SelectConfig::from_json(
        r#"{ "displayField": "name", "labelCount": 3, "appearance": "fill", "multiple": false }"#,
    )
    .unwrap();
    assert_eq!(config.display_field, "name");
    assert_eq!(config.value_field, "value");
    assert_eq!(config.label_count, 3);
    assert_eq!(config.appearance, Appearance::Fill);
    assert!(!config.multiple);
}

#[test]
fn test_from_json_selectors() {
    let config = SelectConfig::from_json(
        r#"{
            "selectors": {
                "inputField": "in",
                "selectField": "sel",
                "clearFieldIcon": "x",
                "clearSelection": "clear"
            }
        }"#,
    )
    .unwrap();
    let selectors = config.selectors_or_default();
    assert_eq!(selectors.input_field, "in");
    assert_eq!(selectors.search_field, None);
}

#[test]
fn test_from_json_rejects_empty_field_name() {
    let err = SelectConfig::from_json(r#"{ "valueField": "" }"#).unwrap_err();
    assert!(matches!(err, SelectError::Config(_)));
}

#[test]
fn test_from_json_rejects_bad_appearance() {
    let err = SelectConfig::from_json(r#"{ "appearance": "legacy" }"#).unwrap_err();
    assert!(matches!(err, SelectError::Parse(_)));
}

#[test]
fn test_builder() {
    let config = SelectConfig::new()
        .with_fields("label", "id")
        .with_label_count(2)
        .with_search_placeholder("find")
        .single()
        .with_selectors(ElementSelectors::default());
    assert_eq!(config.field_names().display(), "label");
    assert_eq!(config.field_names().value(), "id");
    assert_eq!(config.label_count, 2);
    assert_eq!(config.search_placeholder, "find");
    assert!(!config.multiple);
    assert!(config.validate().is_ok());
    assert_eq!(Appearance::Outline.as_str(), "outline");
}
