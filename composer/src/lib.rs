//! Page composition engine for the photobook editor.
//!
//! This crate owns the logical document behind the editor canvas: pages that
//! hold positioned, resizable, rotatable elements (images, text, freehand
//! drawings, stickers). It applies templates, relocates elements between pages
//! on drop, resizes through handles with boundary clamping, captures freehand
//! paths, and validates and serializes documents for persistence. Painting
//! pixels is the host's job; the host feeds pointer events in and applies the
//! returned [`engine::Action`]s to its view.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Stateful [`engine::CompositionEngine`] owning the document |
//! | [`element`] | Element variants, factories, validation and pure transforms |
//! | [`page`] | Pages, backgrounds, containment queries and z-order helpers |
//! | [`document`] | Document container, serialization and persistence seam |
//! | [`template`] | Reusable element groups and the template catalog |
//! | [`geometry`] | Points, sizes, bounds and clamp/snap math |
//! | [`input`] | Tools, page-local pointer events and the gesture state machine |
//! | [`hit`] | Hit-testing elements and their resize handles |
//! | [`error`] | Validation records and error enums |
//! | [`config`] | Engine configuration with environment overrides |
//! | [`consts`] | Fixed numeric constants (resize floor, handle radius, etc.) |

pub mod config;
pub mod consts;
pub mod document;
pub mod element;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod page;
pub mod template;
