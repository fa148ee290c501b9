use select_autocomplete::host::{
    FormControl, FormControlHandle, Overlay, OverlayHandle, SearchField, SearchFieldHandle,
};
use serde_json::json;

#[test]
fn test_form_control_starts_enabled_and_empty() {
    let control = FormControlHandle::new();
    assert!(control.is_enabled());
    assert_eq!(control.value(), None);
}

#[test]
fn test_form_control_clones_share_state() {
    let control = FormControlHandle::new();
    let other = control.clone();
    other.disable();
    other.set_value(Some(vec![json!("a")]));
    assert!(!control.is_enabled());
    assert_eq!(control.value(), Some(vec![json!("a")]));
    control.enable();
    assert!(other.is_enabled());
}

#[test]
fn test_overlay_toggle() {
    let overlay = OverlayHandle::new();
    assert!(!overlay.is_open());
    overlay.toggle();
    assert!(overlay.is_open());
    overlay.toggle();
    assert!(!overlay.is_open());
}

#[test]
fn test_search_field_focus_request() {
    let field = SearchFieldHandle::new();
    assert!(!field.take_focus_request());
    field.focus();
    assert!(field.focus_requested());
    assert!(field.take_focus_request());
    assert!(!field.take_focus_request());
}
