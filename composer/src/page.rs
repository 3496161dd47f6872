//! Page model: an ordered element list plus background and physical size.
//!
//! Element order is insertion order; paint order is only reordered through
//! `zIndex` (see [`sort_elements_by_z_index`]). The containment queries here
//! operate on plain element slices so the engine can use them on any page
//! without borrowing the whole document.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::element::{Element, ElementPatch, validate_element};
use crate::error::{ErrorCode, Validation, ValidationError};
use crate::geometry::{Bounds, is_point_in_bounds};

// =============================================================================
// BACKGROUND
// =============================================================================

/// What is painted behind a page's elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Background {
    /// Solid CSS color.
    Color { color: String },
    /// Image washed out by a white overlay. `intensity` 0 shows a nearly
    /// white page, 1 shows the image at full strength.
    Image { src: String, intensity: f64 },
}

impl Background {
    #[must_use]
    pub fn color(color: impl Into<String>) -> Self {
        Self::Color { color: color.into() }
    }

    #[must_use]
    pub fn image(src: impl Into<String>, intensity: f64) -> Self {
        Self::Image { src: src.into(), intensity }
    }

    /// Alpha of the white overlay composed over an image background
    /// (`1 - intensity`). `None` for solid colors.
    #[must_use]
    pub fn overlay_alpha(&self) -> Option<f64> {
        match self {
            Self::Color { .. } => None,
            Self::Image { intensity, .. } => Some(1.0 - intensity),
        }
    }

    /// CSS `background` value for this descriptor. Deterministic in
    /// `(src, intensity)`.
    #[must_use]
    pub fn composite(&self) -> String {
        match self {
            Self::Color { color } => color.clone(),
            Self::Image { src, intensity } => {
                let alpha = 1.0 - intensity;
                format!(
                    "linear-gradient(rgba(255, 255, 255, {alpha:.2}), rgba(255, 255, 255, {alpha:.2})), url({src})"
                )
            }
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::color("#FFFFFF")
    }
}

/// Check an image background's source and intensity. Solid colors always pass.
#[must_use]
pub fn validate_background(background: &Background) -> Validation {
    let mut errors = Vec::new();
    if let Background::Image { src, intensity } = background {
        if src.trim().is_empty() {
            errors.push(ValidationError::new(
                "background.src",
                "background image source is required",
                ErrorCode::MissingSource,
            ));
        }
        if !(0.0..=1.0).contains(intensity) {
            errors.push(ValidationError::new(
                "background.intensity",
                format!("intensity must be between 0 and 1, got {intensity}"),
                ErrorCode::InvalidIntensity,
            ));
        }
    }
    Validation::from_errors(errors)
}

// =============================================================================
// PAGE
// =============================================================================

/// One page of the photobook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub background: Background,
    pub width: f64,
    pub height: f64,
}

impl Page {
    /// Empty page with a fresh id.
    #[must_use]
    pub fn new(width: f64, height: f64, background: Background) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: None,
            elements: Vec::new(),
            background,
            width,
            height,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The page rectangle in its own coordinates.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.width, self.height)
    }

    #[must_use]
    pub fn element(&self, id: &str) -> Option<&Element> {
        find_element_by_id(&self.elements, id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    /// Index of the element in insertion order.
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }
}

/// Check a page's own fields and every element on it.
///
/// Element errors are re-rooted under `elements[i]` so each one can be traced
/// back to its element.
#[must_use]
pub fn validate_page(page: &Page) -> Validation {
    let mut errors = Vec::new();

    if page.id.trim().is_empty() {
        errors.push(ValidationError::new("id", "page id is required", ErrorCode::MissingId));
    }
    for (field, value) in [("width", page.width), ("height", page.height)] {
        if !value.is_finite() || value <= 0.0 {
            errors.push(ValidationError::new(
                field,
                format!("page {field} must be positive, got {value}"),
                ErrorCode::InvalidSize,
            ));
        }
    }
    errors.extend(validate_background(&page.background).errors);

    let mut seen = HashSet::new();
    for (i, element) in page.elements.iter().enumerate() {
        let prefix = format!("elements[{i}]");
        if !element.id.is_empty() && !seen.insert(element.id.as_str()) {
            errors.push(ValidationError::new(
                format!("{prefix}.id"),
                format!("Element {i}: duplicate element id {}", element.id),
                ErrorCode::DuplicateId,
            ));
        }
        for mut e in validate_element(element).errors {
            e.message = format!("Element {i}: {}", e.message);
            errors.push(e.prefixed(&prefix));
        }
    }

    Validation::from_errors(errors)
}

// =============================================================================
// CONTAINMENT QUERIES
// =============================================================================

#[must_use]
pub fn find_element_by_id<'a>(elements: &'a [Element], id: &str) -> Option<&'a Element> {
    elements.iter().find(|e| e.id == id)
}

/// Remove the element and return it, preserving the order of the rest.
pub fn remove_element_by_id(elements: &mut Vec<Element>, id: &str) -> Option<Element> {
    let index = elements.iter().position(|e| e.id == id)?;
    Some(elements.remove(index))
}

/// Merge `patch` into the matching element. Returns `false` if no element has `id`.
pub fn update_element_by_id(elements: &mut [Element], id: &str, patch: &ElementPatch) -> bool {
    let Some(element) = elements.iter_mut().find(|e| e.id == id) else {
        return false;
    };
    element.apply_patch(patch);
    true
}

/// Elements whose top-left or bottom-right corner falls inside `area`.
///
/// This is a loose "touches" test: an element straddling the area with no
/// corner inside it is not returned. Callers needing true rectangle
/// intersection must refine the result.
#[must_use]
pub fn get_elements_in_area<'a>(elements: &'a [Element], area: &Bounds) -> Vec<&'a Element> {
    elements
        .iter()
        .filter(|e| {
            let b = e.bounds();
            is_point_in_bounds(b.origin(), area) || is_point_in_bounds(b.far_corner(), area)
        })
        .collect()
}

// =============================================================================
// Z-ORDER
// =============================================================================

/// Elements in paint order: ascending `zIndex`, ties kept in list order.
#[must_use]
pub fn sort_elements_by_z_index(elements: &[Element]) -> Vec<&Element> {
    let mut sorted: Vec<&Element> = elements.iter().collect();
    // `sort_by_key` is stable, so equal z values keep insertion order.
    sorted.sort_by_key(|e| e.z());
    sorted
}

/// Highest paint order on the page; 0 for an empty page.
#[must_use]
pub fn max_z_index(elements: &[Element]) -> i64 {
    elements.iter().map(Element::z).max().unwrap_or(0)
}

/// Lowest paint order on the page; 0 for an empty page.
#[must_use]
pub fn min_z_index(elements: &[Element]) -> i64 {
    elements.iter().map(Element::z).min().unwrap_or(0)
}

/// Raise the element above every other element. Returns `false` if not found.
pub fn bring_to_front(elements: &mut [Element], id: &str) -> bool {
    let top = max_z_index(elements) + 1;
    let Some(element) = elements.iter_mut().find(|e| e.id == id) else {
        return false;
    };
    element.z_index = Some(top);
    true
}

/// Lower the element below every other element. Returns `false` if not found.
pub fn send_to_back(elements: &mut [Element], id: &str) -> bool {
    let bottom = min_z_index(elements) - 1;
    let Some(element) = elements.iter_mut().find(|e| e.id == id) else {
        return false;
    };
    element.z_index = Some(bottom);
    true
}
