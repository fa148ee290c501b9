use select_autocomplete::option::{
    FieldNames, OptionStore, SelectOption, apply_filter, apply_sort, filter_indices,
    resolve_options,
};
use select_autocomplete::selection::Selection;
use select_autocomplete::FieldError;
use serde_json::{Value, json};

fn fruits() -> Vec<SelectOption<Value>> {
    resolve_options(
        vec![
            json!({"display": "Banana", "value": 1}),
            json!({"display": "apple", "value": 2}),
            json!({"display": "Cherry", "value": 3}),
            json!({"display": "apricot", "value": 4}),
            json!({"display": "blueberry", "value": 5}),
        ],
        &FieldNames::default(),
    )
    .unwrap()
}

fn labels(options: &[SelectOption<Value>]) -> Vec<&str> {
    options.iter().map(|o| o.label()).collect()
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_resolve_custom_field_names() {
    let options = resolve_options(
        vec![json!({"name": "Germany", "code": "de"})],
        &FieldNames::new("name", "code"),
    )
    .unwrap();
    assert_eq!(options[0].label(), "Germany");
    assert_eq!(options[0].key(), &json!("de"));
}

#[test]
fn test_resolve_missing_value_field() {
    let err = resolve_options(
        vec![
            json!({"display": "ok", "value": 1}),
            json!({"display": "broken"}),
        ],
        &FieldNames::default(),
    )
    .unwrap_err();
    assert_eq!(err, FieldError::missing("value", 1));
}

#[test]
fn test_resolve_non_text_display() {
    let err = resolve_options(vec![json!({"display": null, "value": 1})], &FieldNames::default())
        .unwrap_err();
    assert!(matches!(err, FieldError::NotText { index: 0, .. }));
}

#[test]
fn test_resolve_numeric_display() {
    let options =
        resolve_options(vec![json!({"display": 7, "value": 1})], &FieldNames::default()).unwrap();
    assert_eq!(options[0].label(), "7");
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_sort_is_case_insensitive() {
    let mut options = resolve_options(
        vec![
            json!({"display": "Banana", "value": 1}),
            json!({"display": "apple", "value": 2}),
        ],
        &FieldNames::default(),
    )
    .unwrap();
    apply_sort(&mut options);
    assert_eq!(labels(&options), vec!["apple", "Banana"]);
    assert_eq!(options[0].key(), &json!(2));
    assert_eq!(options[1].key(), &json!(1));
}

#[test]
fn test_sort_is_non_decreasing() {
    let mut options = fruits();
    apply_sort(&mut options);
    let upper: Vec<String> = options.iter().map(|o| o.label().to_uppercase()).collect();
    assert!(upper.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_sort_is_stable_on_equal_labels() {
    let mut options = resolve_options(
        vec![
            json!({"display": "same", "value": "first"}),
            json!({"display": "SAME", "value": "second"}),
            json!({"display": "Same", "value": "third"}),
        ],
        &FieldNames::default(),
    )
    .unwrap();
    apply_sort(&mut options);
    let keys: Vec<&Value> = options.iter().map(|o| o.key()).collect();
    assert_eq!(keys, vec![&json!("first"), &json!("second"), &json!("third")]);
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_filter_matches_substring_ignoring_case() {
    let options = fruits();
    let result = apply_filter(&options, "AP");
    let found: Vec<&str> = result.iter().map(|o| o.label()).collect();
    assert_eq!(found, vec!["apple", "apricot"]);

    for option in &options {
        let included = found.contains(&option.label());
        assert_eq!(included, option.label().to_lowercase().contains("ap"));
    }
}

#[test]
fn test_filter_empty_query_returns_all() {
    let options = fruits();
    assert_eq!(filter_indices(&options, ""), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_filter_no_matches() {
    let options = fruits();
    assert!(apply_filter(&options, "xyz").is_empty());
}

#[test]
fn test_filter_is_idempotent() {
    let options = fruits();
    let once = filter_indices(&options, "rr");
    let twice = filter_indices(&options, "rr");
    assert_eq!(once, twice);
    assert_eq!(once, vec![2, 4]);
}

// ============================================================================
// Store
// ============================================================================

#[test]
fn test_store_load_sorts_into_canonical_order() {
    let mut store = OptionStore::new();
    store.load(fruits());
    assert_eq!(
        labels(store.canonical()),
        vec!["apple", "apricot", "Banana", "blueberry", "Cherry"]
    );
    assert_eq!(labels(store.options()), labels(store.canonical()));
    assert_eq!(store.filtered_len(), 5);
}

#[test]
fn test_store_rearrange_puts_selected_first() {
    let mut store = OptionStore::new();
    store.load(fruits());
    store.rearrange(&Selection::from_keys([json!(3), json!(1)]));
    assert_eq!(
        labels(store.options()),
        vec!["Banana", "Cherry", "apple", "apricot", "blueberry"]
    );
    assert_eq!(labels(store.canonical())[0], "apple");
}

#[test]
fn test_store_filter_keeps_query_across_rearrange() {
    let mut store = OptionStore::new();
    store.load(fruits());
    store.filter("b");
    store.rearrange(&Selection::from_keys([json!(5)]));
    let visible: Vec<&str> = store.filtered().map(|o| o.label()).collect();
    assert_eq!(visible, vec!["blueberry", "Banana"]);
    assert!(store.is_hidden(&json!(2)));
    assert!(!store.is_hidden(&json!(1)));
}
