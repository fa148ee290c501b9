use select_autocomplete::option::{FieldNames, SelectOption, resolve_options};
use select_autocomplete::selection::{
    Selection, compute_display_string, compute_select_all_flag, reorder_by_selection,
};
use serde_json::{Value, json};

/// Banana(1), apple(2) in input order.
fn two_fruits() -> Vec<SelectOption<Value>> {
    resolve_options(
        vec![
            json!({"display": "Banana", "value": 1}),
            json!({"display": "apple", "value": 2}),
        ],
        &FieldNames::default(),
    )
    .unwrap()
}

fn many() -> Vec<SelectOption<Value>> {
    resolve_options(
        (1..=5).map(|i| json!({"display": format!("Item {}", i), "value": i})),
        &FieldNames::default(),
    )
    .unwrap()
}

// ============================================================================
// Display string
// ============================================================================

#[test]
fn test_display_single_label() {
    let selection = Selection::from_keys([json!(2)]);
    assert_eq!(compute_display_string(&two_fruits(), &selection, true, 1), "apple");
}

#[test]
fn test_display_collapses_rest_into_others() {
    let selection = Selection::from_keys([json!(1), json!(2)]);
    assert_eq!(
        compute_display_string(&two_fruits(), &selection, true, 1),
        "Banana(+1) others"
    );
}

#[test]
fn test_display_follows_option_order_not_selection_order() {
    let selection = Selection::from_keys([json!(4), json!(2), json!(5)]);
    assert_eq!(
        compute_display_string(&many(), &selection, true, 2),
        "Item 2,Item 4(+1) others"
    );
}

#[test]
fn test_display_label_count_covers_all() {
    let selection = Selection::from_keys([json!(1), json!(3)]);
    assert_eq!(compute_display_string(&many(), &selection, true, 5), "Item 1,Item 3");
}

#[test]
fn test_display_zero_label_count() {
    let selection = Selection::from_keys([json!(1), json!(3)]);
    assert_eq!(compute_display_string(&many(), &selection, true, 0), "(+2) others");
}

#[test]
fn test_display_empty_selection() {
    assert_eq!(compute_display_string(&many(), &Selection::new(), true, 1), "");
    assert_eq!(compute_display_string(&many(), &Selection::new(), false, 1), "");
}

#[test]
fn test_display_single_mode() {
    let selection = Selection::from_keys([json!(1)]);
    assert_eq!(compute_display_string(&two_fruits(), &selection, false, 1), "Banana");
}

#[test]
fn test_display_single_mode_unknown_key() {
    let selection = Selection::from_keys([json!(99)]);
    assert_eq!(compute_display_string(&two_fruits(), &selection, false, 1), "");
}

#[test]
fn test_display_ignores_unknown_keys_in_multi_mode() {
    let selection = Selection::from_keys([json!(99), json!(2)]);
    assert_eq!(compute_display_string(&two_fruits(), &selection, true, 1), "apple");
}

// ============================================================================
// Reordering
// ============================================================================

#[test]
fn test_reorder_empty_selection_keeps_order() {
    let options = many();
    let reordered = reorder_by_selection(&options, &Selection::new());
    assert_eq!(reordered, options);
}

#[test]
fn test_reorder_selected_first_in_canonical_order() {
    let options = many();
    let reordered = reorder_by_selection(&options, &Selection::from_keys([json!(5), json!(2)]));
    let keys: Vec<&Value> = reordered.iter().map(|o| o.key()).collect();
    assert_eq!(
        keys,
        vec![&json!(2), &json!(5), &json!(1), &json!(3), &json!(4)]
    );
    assert_eq!(reordered.len(), options.len());
}

// ============================================================================
// Select-all flag
// ============================================================================

#[test]
fn test_select_all_flag_over_visible_keys() {
    let selection = Selection::from_keys([json!(1), json!(2)]);
    let visible = [json!(1), json!(2)];
    assert!(compute_select_all_flag(&visible, &selection, true));
    assert!(!compute_select_all_flag(&visible, &selection, false));

    let visible = [json!(1), json!(3)];
    assert!(!compute_select_all_flag(&visible, &selection, true));
}

// ============================================================================
// Key equality
// ============================================================================

#[test]
fn test_numeric_keys_match_by_value() {
    let mut selection = Selection::from_keys([json!(1), json!(1.0), json!(2)]);
    assert_eq!(selection.keys(), &[json!(1), json!(2)]);
    assert!(selection.contains(&json!(2.0)));

    assert!(selection.remove(&json!(1.0)));
    assert_eq!(selection.keys(), &[json!(2)]);

    let selection = Selection::from_keys([json!(2.0)]);
    assert_eq!(compute_display_string(&two_fruits(), &selection, true, 1), "apple");
    assert_eq!(compute_display_string(&two_fruits(), &selection, false, 1), "apple");
}
