#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_lookup_yields_defaults() {
    let cfg = EngineConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, EngineConfig::default());
    assert_eq!(cfg.page_width, DEFAULT_PAGE_WIDTH);
    assert_eq!(cfg.grid_size, 0.0);
}

#[test]
fn lookup_overrides_every_field() {
    let cfg = EngineConfig::from_lookup(lookup_from(&[
        ("PHOTOBOOK_PAGE_WIDTH", "1200"),
        ("PHOTOBOOK_PAGE_HEIGHT", " 900.5 "),
        ("PHOTOBOOK_BACKGROUND", "#f0f0f0"),
        ("PHOTOBOOK_STROKE_COLOR", "red"),
        ("PHOTOBOOK_STROKE_WIDTH", "5"),
        ("PHOTOBOOK_GRID_SIZE", "10"),
    ]))
    .unwrap();
    assert_eq!(cfg.page_width, 1200.0);
    assert_eq!(cfg.page_height, 900.5);
    assert_eq!(cfg.background_color, "#f0f0f0");
    assert_eq!(cfg.stroke_color, "red");
    assert_eq!(cfg.stroke_width, 5.0);
    assert_eq!(cfg.grid_size, 10.0);
}

#[test]
fn unparseable_number_is_error() {
    let err = EngineConfig::from_lookup(lookup_from(&[("PHOTOBOOK_PAGE_WIDTH", "wide")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::NotANumber { var: "PHOTOBOOK_PAGE_WIDTH".into(), value: "wide".into() }
    );
}

#[test]
fn non_finite_number_is_error() {
    let err = EngineConfig::from_lookup(lookup_from(&[("PHOTOBOOK_STROKE_WIDTH", "inf")])).unwrap_err();
    assert!(matches!(err, ConfigError::NotANumber { .. }));
}

#[test]
fn non_positive_size_is_error() {
    let err = EngineConfig::from_lookup(lookup_from(&[("PHOTOBOOK_PAGE_HEIGHT", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::NotPositive { ref var, .. } if var == "PHOTOBOOK_PAGE_HEIGHT"));
}

#[test]
fn zero_grid_is_allowed_negative_is_not() {
    assert!(EngineConfig::from_lookup(lookup_from(&[("PHOTOBOOK_GRID_SIZE", "0")])).is_ok());
    assert!(EngineConfig::from_lookup(lookup_from(&[("PHOTOBOOK_GRID_SIZE", "-4")])).is_err());
}

#[test]
fn blank_color_is_error() {
    let err = EngineConfig::from_lookup(lookup_from(&[("PHOTOBOOK_BACKGROUND", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::Empty { var: "PHOTOBOOK_BACKGROUND".into() });
}

#[test]
fn page_background_uses_color() {
    let cfg = EngineConfig { background_color: "#abcdef".into(), ..Default::default() };
    assert_eq!(cfg.page_background(), Background::color("#abcdef"));
}
