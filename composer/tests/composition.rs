//! End-to-end composition behavior through the public API.
#![allow(clippy::float_cmp)]

use composer::config::EngineConfig;
use composer::document::{Document, deserialize, serialize};
use composer::element::{ElementKind, ElementPatch, create_element, validate_element};
use composer::engine::{BackgroundScope, BackgroundSource, CompositionEngine, resized_bounds};
use composer::error::ErrorCode;
use composer::geometry::{Position, Size, clamp_to_container};
use composer::hit::ResizeHandle;
use composer::input::ResizeStart;
use composer::page::{Background, Page};
use composer::template::TemplateCatalog;

fn sample_document() -> Document {
    let mut cover = Page::new(800.0, 600.0, Background::image("/bg/linen.jpg", 0.6)).with_name("Cover");
    cover.elements.push(create_element(ElementKind::Text, Position::new(40.0, 40.0), "Summer 2026", &ElementPatch::default()));
    cover.elements.push(create_element(
        ElementKind::Image,
        Position::new(100.0, 120.0),
        "/photos/beach.jpg",
        &ElementPatch { rotation: Some(12.5), z_index: Some(3), ..Default::default() },
    ));
    let mut inner = Page::new(800.0, 600.0, Background::default());
    inner.elements.push(create_element(ElementKind::Sticker, Position::new(700.0, 500.0), "star", &ElementPatch::default()));
    Document::new(vec![cover, inner])
}

// =============================================================
// Properties
// =============================================================

#[test]
fn validation_reports_every_missing_field() {
    let mut el = create_element(ElementKind::Image, Position::new(0.0, 0.0), "", &ElementPatch::default());
    el.id = String::new();
    let validation = validate_element(&el);
    assert!(!validation.is_valid());
    assert!(validation.errors.len() >= 2);
    assert!(validation.has_code(ErrorCode::MissingId));
    assert!(validation.has_code(ErrorCode::MissingSource));
}

#[test]
fn clamp_is_idempotent() {
    for (w, h) in [(0.0, 0.0), (10.0, 20.0), (800.0, 600.0)] {
        for x in [-500.0, -1.0, 0.0, 33.3, 790.0, 5000.0] {
            for y in [-10.0, 0.0, 299.5, 600.0, 1e6] {
                let once = clamp_to_container(x, y, w, h, 800.0, 600.0);
                let twice = clamp_to_container(once.0, once.1, w, h, 800.0, 600.0);
                assert_eq!(once, twice, "x={x} y={y} w={w} h={h}");
            }
        }
    }
}

#[test]
fn serialization_round_trips() {
    let doc = sample_document();
    let text = serialize(&doc).unwrap();
    assert_eq!(deserialize(&text).unwrap(), doc);
}

#[test]
fn cross_page_move_leaves_exactly_one_copy() {
    let mut engine = CompositionEngine::with_document(sample_document(), EngineConfig::default()).unwrap();
    let id = engine.page(0).unwrap().elements[1].id.clone();
    engine.move_element_across_pages(0, 1, &id, 10.0, 10.0).unwrap();

    let holders = engine.pages().iter().filter(|p| p.contains(&id)).count();
    assert_eq!(holders, 1);
    assert!(engine.page(1).unwrap().contains(&id));
}

#[test]
fn resize_anchors_hold() {
    let start = ResizeStart {
        pointer: Position::new(0.0, 0.0),
        size: Size::new(120.0, 90.0),
        position: Position::new(200.0, 150.0),
    };
    for delta in [Position::new(35.0, -12.0), Position::new(-200.0, 400.0), Position::new(7.25, 3.5)] {
        let se = resized_bounds(ResizeHandle::Se, &start, delta, 800.0, 600.0);
        assert_eq!((se.x, se.y), (200.0, 150.0));

        let nw = resized_bounds(ResizeHandle::Nw, &start, delta, 800.0, 600.0);
        assert!((nw.x + nw.width - 320.0).abs() < 1e-9);
        assert!((nw.y + nw.height - 240.0).abs() < 1e-9);
    }
}

#[test]
fn template_ids_never_repeat_across_pages() {
    let mut engine = CompositionEngine::default();
    engine.add_page();
    let catalog = TemplateCatalog::builtin(800.0, 600.0);
    let template = catalog.get("photo-with-caption").unwrap();

    let first: Vec<String> = engine.apply_template(0, template).unwrap().iter().map(|e| e.id.clone()).collect();
    let second: Vec<String> = engine.apply_template(1, template).unwrap().iter().map(|e| e.id.clone()).collect();
    assert!(first.iter().all(|id| !second.contains(id)));
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn text_element_is_valid() {
    let el = create_element(ElementKind::Text, Position::new(10.0, 10.0), "Hello", &ElementPatch::default());
    let validation = validate_element(&el);
    assert!(validation.is_valid());
    assert!(validation.errors.is_empty());
}

#[test]
fn negative_position_is_rejected() {
    let el = create_element(ElementKind::Image, Position::new(-5.0, 0.0), "foo.png", &ElementPatch::default());
    let validation = validate_element(&el);
    assert!(!validation.is_valid());
    assert!(validation.has_code(ErrorCode::InvalidPosition));
}

#[test]
fn resize_stops_at_floor() {
    let mut engine = CompositionEngine::default();
    let el = create_element(ElementKind::Image, Position::new(100.0, 100.0), "a.jpg", &ElementPatch::size(30.0, 30.0));
    let id = engine.add_element(0, el).unwrap().id.clone();
    let start = ResizeStart {
        pointer: Position::new(130.0, 130.0),
        size: Size::new(30.0, 30.0),
        position: Position::new(100.0, 100.0),
    };
    let resized = engine
        .resize_via_handle(0, &id, ResizeHandle::Se, start, Position::new(-100.0, -100.0))
        .unwrap();
    assert_eq!((resized.width, resized.height), (20.0, 20.0));
}

#[test]
fn background_intensity_blends_with_white() {
    let mut engine = CompositionEngine::default();
    engine
        .change_background(BackgroundScope::CurrentPage, BackgroundSource::Image("/bg/paper.jpg".into()), Some(0.3))
        .unwrap();
    let background = &engine.page(0).unwrap().background;
    assert!((background.overlay_alpha().unwrap() - 0.7).abs() < 1e-9);
    assert!(background.composite().ends_with("url(/bg/paper.jpg)"));
}
