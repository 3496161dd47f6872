//! Shared numeric constants for the composer crate.

// ── Geometry ────────────────────────────────────────────────────

/// Smallest width or height a handle resize may produce.
pub const MIN_ELEMENT_SIZE: f64 = 20.0;

/// Offset applied to both axes when duplicating an element.
pub const CLONE_OFFSET: f64 = 20.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Page-space hit slop for resize handles.
pub const HANDLE_RADIUS: f64 = 8.0;

// ── Text ────────────────────────────────────────────────────────

/// Smallest accepted font size.
pub const MIN_FONT_SIZE: f64 = 1.0;

/// Largest accepted font size.
pub const MAX_FONT_SIZE: f64 = 200.0;

// ── Element ids ─────────────────────────────────────────────────

/// Length of the random suffix appended to generated element ids.
pub const ID_SUFFIX_LEN: usize = 9;
