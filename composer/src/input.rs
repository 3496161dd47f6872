//! Input model: tools, page-local pointer events and the gesture state machine.
//!
//! `Tool` captures the user's intent at pointer-down. `InputState` is the
//! gesture being tracked between pointer-down and pointer-up, carrying all the
//! context needed to finish (or cancel) it without consulting the host again:
//!
//! ```text
//! Idle ─down(select, body)──▶ Dragging ─move*─▶ Dragging ─up(on page)──▶ Idle  (atomic move)
//!                                                        └─up(off page)─▶ Idle  (no change)
//! Idle ─down(select, handle)─▶ Resizing ─move*─▶ Resizing ─up─▶ Idle
//! Idle ─down(draw)───────────▶ Capturing ─move*─▶ Capturing ─up─▶ Idle  (drawing committed)
//! ```

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::element::{ElementId, PathDraft};
use crate::geometry::{Position, Size};
use crate::hit::ResizeHandle;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Select, drag and resize elements (default).
    #[default]
    Select,
    /// Freehand drawing.
    Draw,
}

/// A pointer location the host has resolved to a specific page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagePoint {
    pub page_index: usize,
    /// Page-local coordinates.
    pub point: Position,
}

impl PagePoint {
    #[must_use]
    pub fn new(page_index: usize, x: f64, y: f64) -> Self {
        Self { page_index, point: Position::new(x, y) }
    }
}

/// Persistent UI state visible to the host.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub tool: Tool,
    /// Index of the page the user is working on.
    pub selected_page: usize,
    /// Selected element; always refers to an element on `selected_page`.
    pub selected_element: Option<ElementId>,
}

/// Geometry captured when a resize gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeStart {
    /// Pointer position at pointer-down.
    pub pointer: Position,
    /// Element size at pointer-down.
    pub size: Size,
    /// Element top-left at pointer-down.
    pub position: Position,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// An element is being dragged. The document is untouched until drop.
    Dragging {
        /// Page the element lives on.
        page_index: usize,
        element_id: ElementId,
        /// Pointer offset from the element's top-left at grab time.
        grab_offset_x: f64,
        grab_offset_y: f64,
        /// Latest pointer location, for the host's drag preview.
        last: PagePoint,
    },
    /// An element is being resized through one of its handles.
    Resizing {
        page_index: usize,
        element_id: ElementId,
        handle: ResizeHandle,
        start: ResizeStart,
    },
    /// A freehand stroke is being captured; not yet part of any element.
    Capturing { page_index: usize, draft: PathDraft },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Where the dragged element's top-left would land if dropped at `at`.
    #[must_use]
    pub fn drag_preview(&self, at: Position) -> Option<Position> {
        match self {
            Self::Dragging { grab_offset_x, grab_offset_y, .. } => {
                Some(Position::new(at.x - grab_offset_x, at.y - grab_offset_y))
            }
            _ => None,
        }
    }
}
