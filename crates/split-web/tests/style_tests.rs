// Host-side tests for the layer CSS helpers.
// The web crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use style::*;

#[test]
fn translate_formats_pixels() {
    assert_eq!(translate(12.0, -3.5), "translate(12px, -3.5px)");
    assert_eq!(translate(0.0, 0.0), "translate(0px, 0px)");
}

#[test]
fn translate_rounds_to_hundredths() {
    assert_eq!(translate(1.23456, -7.891), "translate(1.23px, -7.89px)");
}

#[test]
fn translate_folds_negative_zero_and_garbage() {
    assert_eq!(translate(-0.0, -0.001), "translate(0px, 0px)");
    assert_eq!(translate(f32::NAN, f32::INFINITY), "translate(0px, 0px)");
}

#[test]
fn will_change_only_while_enabled() {
    assert_eq!(will_change(false), "transform, filter");
    assert_eq!(will_change(true), "auto");
}

#[test]
fn channel_layers_do_not_intercept_pointer() {
    assert!(CHANNEL_LAYER_CSS.contains("pointer-events: none"));
    assert!(CHANNEL_LAYER_CSS.contains("mix-blend-mode: screen"));
    assert!(!BASE_LAYER_CSS.contains("position: absolute"));
}

#[test]
fn merge_inline_keeps_caller_style_last() {
    assert_eq!(merge_inline("a: 1;", None), "a: 1;");
    assert_eq!(merge_inline("a: 1;", Some("  ")), "a: 1;");
    assert_eq!(merge_inline("a: 1;", Some(" b: 2; ")), "a: 1; b: 2;");
}

#[test]
fn merged_container_css_still_ends_with_original() {
    let original = "width: 320px;";
    let merged = merge_inline(CONTAINER_CSS, Some(original));
    assert!(merged.starts_with(CONTAINER_CSS));
    assert!(merged.ends_with(original));
}
