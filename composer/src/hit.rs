//! Hit-testing elements and their resize handles.
//!
//! Points are page-local. Rotated elements are tested by un-rotating the
//! pointer around the element center, so the body and the handles follow the
//! element's visual orientation.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::HANDLE_RADIUS;
use crate::element::{Element, ElementId};
use crate::error::EngineError;
use crate::geometry::{Bounds, Position, is_point_in_bounds};
use crate::page::{Page, sort_elements_by_z_index};

/// One of the eight resize handles around an element's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeHandle {
    pub const ALL: [Self; 8] = [Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W, Self::Nw];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::Ne => "ne",
            Self::E => "e",
            Self::Se => "se",
            Self::S => "s",
            Self::Sw => "sw",
            Self::W => "w",
            Self::Nw => "nw",
        }
    }

    /// Handle drags the top edge.
    #[must_use]
    pub fn north(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    /// Handle drags the bottom edge.
    #[must_use]
    pub fn south(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }

    /// Handle drags the right edge.
    #[must_use]
    pub fn east(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    /// Handle drags the left edge.
    #[must_use]
    pub fn west(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }

    /// Where this handle sits on `bounds`.
    #[must_use]
    pub fn position_on(self, bounds: &Bounds) -> Position {
        let x = if self.west() {
            bounds.x
        } else if self.east() {
            bounds.x + bounds.width
        } else {
            bounds.x + bounds.width / 2.0
        };
        let y = if self.north() {
            bounds.y
        } else if self.south() {
            bounds.y + bounds.height
        } else {
            bounds.y + bounds.height / 2.0
        };
        Position::new(x, y)
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeHandle {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| EngineError::UnknownHandle(s.to_owned()))
    }
}

/// Which part of an element was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(ResizeHandle),
}

/// Result of a hit test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub element_id: ElementId,
    pub part: HitPart,
}

/// Pointer position in the element's unrotated frame.
fn local_point(element: &Element, pt: Position) -> Position {
    if element.rotation.abs() < f64::EPSILON {
        pt
    } else {
        pt.rotated_around(element.center(), -element.rotation)
    }
}

/// Handle of `element` under `pt`, if any.
#[must_use]
pub fn hit_handle(element: &Element, pt: Position) -> Option<ResizeHandle> {
    let local = local_point(element, pt);
    let bounds = element.bounds();
    ResizeHandle::ALL.into_iter().find(|h| {
        let hp = h.position_on(&bounds);
        (local.x - hp.x).abs() <= HANDLE_RADIUS && (local.y - hp.y).abs() <= HANDLE_RADIUS
    })
}

/// Whether `pt` lies on the element's body.
#[must_use]
pub fn hit_body(element: &Element, pt: Position) -> bool {
    is_point_in_bounds(local_point(element, pt), &element.bounds())
}

/// Test which element (if any) is under `pt`, checking the selected element's
/// handles first and then visible elements from the top of the paint order.
#[must_use]
pub fn hit_test(page: &Page, pt: Position, selected_id: Option<&str>) -> Option<Hit> {
    if let Some(selected) = selected_id.and_then(|id| page.element(id)) {
        if selected.visible {
            if let Some(handle) = hit_handle(selected, pt) {
                return Some(Hit { element_id: selected.id.clone(), part: HitPart::ResizeHandle(handle) });
            }
        }
    }

    sort_elements_by_z_index(&page.elements)
        .into_iter()
        .rev()
        .find(|e| e.visible && hit_body(e, pt))
        .map(|e| Hit { element_id: e.id.clone(), part: HitPart::Body })
}
