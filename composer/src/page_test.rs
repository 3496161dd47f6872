#![allow(clippy::float_cmp)]

use super::*;
use crate::element::{ElementKind, create_element};
use crate::geometry::Position;

fn make_element(id: &str, x: f64, y: f64, w: f64, h: f64) -> Element {
    let mut el = create_element(ElementKind::Text, Position::new(x, y), "label", &ElementPatch::size(w, h));
    el.id = id.to_owned();
    el
}

fn make_page(elements: Vec<Element>) -> Page {
    let mut page = Page::new(800.0, 600.0, Background::default());
    page.elements = elements;
    page
}

fn ids(elements: &[&Element]) -> Vec<String> {
    elements.iter().map(|e| e.id.clone()).collect()
}

// =============================================================
// Background
// =============================================================

#[test]
fn default_background_is_white() {
    assert_eq!(Background::default(), Background::color("#FFFFFF"));
    assert_eq!(Background::default().overlay_alpha(), None);
}

#[test]
fn image_background_overlay_is_one_minus_intensity() {
    let bg = Background::image("https://cdn.example/a.jpg", 0.3);
    let alpha = bg.overlay_alpha().unwrap();
    assert!((alpha - 0.7).abs() < 1e-9);
    assert_eq!(
        bg.composite(),
        "linear-gradient(rgba(255, 255, 255, 0.70), rgba(255, 255, 255, 0.70)), url(https://cdn.example/a.jpg)"
    );
}

#[test]
fn composite_is_deterministic() {
    let a = Background::image("x.png", 0.45).composite();
    let b = Background::image("x.png", 0.45).composite();
    assert_eq!(a, b);
}

#[test]
fn background_serde_tagged() {
    let json = serde_json::to_value(Background::image("a.png", 1.0)).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "image", "src": "a.png", "intensity": 1.0 }));
}

// =============================================================
// validate_page
// =============================================================

#[test]
fn valid_page_passes() {
    let page = make_page(vec![make_element("a", 0.0, 0.0, 10.0, 10.0)]);
    assert!(validate_page(&page).is_valid());
}

#[test]
fn page_size_and_id_checked() {
    let mut page = make_page(Vec::new());
    page.id = String::new();
    page.width = 0.0;
    page.height = -1.0;
    let v = validate_page(&page);
    assert!(v.has_code(ErrorCode::MissingId));
    assert_eq!(v.errors.iter().filter(|e| e.code == ErrorCode::InvalidSize).count(), 2);
}

#[test]
fn element_errors_are_prefixed_with_index() {
    let mut bad = make_element("b", -1.0, 0.0, 10.0, 10.0);
    bad.width = 0.0;
    let page = make_page(vec![make_element("a", 0.0, 0.0, 10.0, 10.0), bad]);
    let v = validate_page(&page);
    assert_eq!(v.errors.len(), 2);
    assert_eq!(v.errors[0].field, "elements[1].x");
    assert!(v.errors[0].message.starts_with("Element 1:"));
    assert_eq!(v.errors[1].field, "elements[1].width");
}

#[test]
fn duplicate_element_ids_flagged() {
    let page = make_page(vec![make_element("a", 0.0, 0.0, 10.0, 10.0), make_element("a", 5.0, 5.0, 10.0, 10.0)]);
    let v = validate_page(&page);
    assert!(v.has_code(ErrorCode::DuplicateId));
    assert_eq!(v.errors[0].field, "elements[1].id");
}

#[test]
fn background_intensity_out_of_range_flagged() {
    let mut page = make_page(Vec::new());
    page.background = Background::image("bg.jpg", 1.5);
    assert!(validate_page(&page).has_code(ErrorCode::InvalidIntensity));
}

// =============================================================
// Containment queries
// =============================================================

#[test]
fn find_and_remove_by_id() {
    let mut elements = vec![
        make_element("a", 0.0, 0.0, 10.0, 10.0),
        make_element("b", 0.0, 0.0, 10.0, 10.0),
        make_element("c", 0.0, 0.0, 10.0, 10.0),
    ];
    assert_eq!(find_element_by_id(&elements, "b").map(|e| e.id.as_str()), Some("b"));
    assert!(find_element_by_id(&elements, "zz").is_none());

    let removed = remove_element_by_id(&mut elements, "b").unwrap();
    assert_eq!(removed.id, "b");
    assert_eq!(elements.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(), vec!["a", "c"]);
    assert!(remove_element_by_id(&mut elements, "b").is_none());
}

#[test]
fn update_by_id_merges_and_reports_missing() {
    let mut elements = vec![make_element("a", 0.0, 0.0, 10.0, 10.0)];
    assert!(update_element_by_id(&mut elements, "a", &ElementPatch::position(7.0, 8.0)));
    assert_eq!((elements[0].x, elements[0].y), (7.0, 8.0));
    assert_eq!(elements[0].width, 10.0);
    assert!(!update_element_by_id(&mut elements, "missing", &ElementPatch::position(1.0, 1.0)));
}

#[test]
fn elements_in_area_uses_corner_test() {
    let elements = vec![
        make_element("inside", 10.0, 10.0, 20.0, 20.0),
        make_element("top_left_in", 90.0, 90.0, 50.0, 50.0),
        make_element("bottom_right_in", -20.0, -20.0, 30.0, 30.0),
        make_element("outside", 300.0, 300.0, 10.0, 10.0),
        // Straddles the whole area without a corner inside it.
        make_element("straddler", -10.0, 40.0, 200.0, 10.0),
    ];
    let area = Bounds::new(0.0, 0.0, 100.0, 100.0);
    let hits = get_elements_in_area(&elements, &area);
    assert_eq!(ids(&hits), vec!["inside", "top_left_in", "bottom_right_in"]);
}

// =============================================================
// Z-order
// =============================================================

#[test]
fn sort_by_z_is_stable() {
    let mut a = make_element("a", 0.0, 0.0, 1.0, 1.0);
    let mut b = make_element("b", 0.0, 0.0, 1.0, 1.0);
    let c = make_element("c", 0.0, 0.0, 1.0, 1.0);
    let mut d = make_element("d", 0.0, 0.0, 1.0, 1.0);
    a.z_index = Some(2);
    b.z_index = Some(-1);
    d.z_index = Some(2);
    let elements = vec![a, b, c, d];
    assert_eq!(ids(&sort_elements_by_z_index(&elements)), vec!["b", "c", "a", "d"]);
}

#[test]
fn min_max_of_empty_are_zero() {
    assert_eq!(max_z_index(&[]), 0);
    assert_eq!(min_z_index(&[]), 0);
}

#[test]
fn bring_to_front_and_send_to_back() {
    let mut elements = vec![
        make_element("a", 0.0, 0.0, 1.0, 1.0),
        make_element("b", 0.0, 0.0, 1.0, 1.0),
        make_element("c", 0.0, 0.0, 1.0, 1.0),
    ];
    elements[1].z_index = Some(5);

    assert!(bring_to_front(&mut elements, "a"));
    assert_eq!(elements[0].z_index, Some(6));

    assert!(send_to_back(&mut elements, "b"));
    assert_eq!(elements[1].z_index, Some(-1));

    assert_eq!(ids(&sort_elements_by_z_index(&elements)), vec!["b", "c", "a"]);
    assert!(!bring_to_front(&mut elements, "missing"));
    assert!(!send_to_back(&mut elements, "missing"));
}

#[test]
fn bring_to_front_single_element_page() {
    let mut elements = vec![make_element("solo", 0.0, 0.0, 1.0, 1.0)];
    assert!(bring_to_front(&mut elements, "solo"));
    assert_eq!(elements[0].z_index, Some(1));
}

// =============================================================
// Page helpers
// =============================================================

#[test]
fn new_pages_get_distinct_ids() {
    let a = Page::new(100.0, 100.0, Background::default());
    let b = Page::new(100.0, 100.0, Background::default());
    assert_ne!(a.id, b.id);
    assert!(a.elements.is_empty());
}

#[test]
fn page_lookup_helpers() {
    let page = make_page(vec![make_element("a", 0.0, 0.0, 1.0, 1.0), make_element("b", 0.0, 0.0, 1.0, 1.0)])
        .with_name("Cover");
    assert_eq!(page.name.as_deref(), Some("Cover"));
    assert!(page.contains("b"));
    assert_eq!(page.position_of("b"), Some(1));
    assert_eq!(page.bounds(), Bounds::new(0.0, 0.0, 800.0, 600.0));
}
