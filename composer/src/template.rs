//! Template catalog: named groups of prototype elements.
//!
//! Prototype ids are placeholders. Every [`Template::instantiate`] call hands
//! out brand-new ids, so applying the same template twice (or to two pages)
//! never produces colliding elements.

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;

use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementKind, ElementPatch, TextAlign, create_element, generate_id};
use crate::geometry::Position;

/// Placeholder image used by the built-in layouts until the user drops a photo.
pub const PLACEHOLDER_SRC: &str = "/placeholders/photo.svg";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("template has no elements: {0}")]
    EmptyTemplate(String),
    #[error("template already registered: {0}")]
    DuplicateTemplate(String),
}

/// A reusable layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub elements: Vec<Element>,
}

impl Template {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, elements: Vec<Element>) -> Self {
        Self { id: id.into(), name: name.into(), category: None, description: None, elements }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Fresh copies of the prototype elements, each with a new id.
    /// Geometry and style are kept exactly as authored.
    #[must_use]
    pub fn instantiate(&self) -> Vec<Element> {
        self.elements
            .iter()
            .map(|proto| {
                let mut el = proto.clone();
                el.id = generate_id(proto.kind().as_str());
                el
            })
            .collect()
    }
}

/// Supplies templates to a [`TemplateCatalog`].
pub trait TemplateSource {
    fn templates(&self) -> Vec<Template>;
}

/// Ordered set of templates keyed by id.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a collaborator, skipping entries that would be
    /// rejected by [`TemplateCatalog::register`].
    #[must_use]
    pub fn from_source(source: &impl TemplateSource) -> Self {
        let mut catalog = Self::new();
        for template in source.templates() {
            if let Err(e) = catalog.register(template) {
                tracing::warn!(error = %e, "skipping template from source");
            }
        }
        catalog
    }

    /// Catalog holding the built-in layouts for a page of the given size.
    #[must_use]
    pub fn builtin(page_width: f64, page_height: f64) -> Self {
        Self { templates: builtin_templates(page_width, page_height) }
    }

    /// Add a template.
    ///
    /// # Errors
    ///
    /// Rejects templates with no elements and ids already in the catalog.
    pub fn register(&mut self, template: Template) -> Result<(), CatalogError> {
        if template.elements.is_empty() {
            return Err(CatalogError::EmptyTemplate(template.id));
        }
        if self.get(&template.id).is_some() {
            return Err(CatalogError::DuplicateTemplate(template.id));
        }
        self.templates.push(template);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn list(&self) -> &[Template] {
        &self.templates
    }

    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| t.category.as_deref() == Some(category))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateSource for TemplateCatalog {
    fn templates(&self) -> Vec<Template> {
        self.templates.clone()
    }
}

// =============================================================================
// BUILT-IN LAYOUTS
// =============================================================================

fn photo(x: f64, y: f64, w: f64, h: f64) -> Element {
    create_element(ElementKind::Image, Position::new(x, y), PLACEHOLDER_SRC, &ElementPatch::size(w, h))
}

fn caption(x: f64, y: f64, w: f64, h: f64, text: &str, font_size: f64) -> Element {
    let overrides = ElementPatch {
        width: Some(w),
        height: Some(h),
        font_size: Some(font_size),
        text_align: Some(TextAlign::Center),
        ..Default::default()
    };
    create_element(ElementKind::Text, Position::new(x, y), text, &overrides)
}

fn builtin_templates(w: f64, h: f64) -> Vec<Template> {
    let margin = (w.min(h) * 0.05).max(1.0);
    let gap = margin / 2.0;
    let inner_w = w - 2.0 * margin;
    let inner_h = h - 2.0 * margin;
    let half_w = (inner_w - gap) / 2.0;
    let half_h = (inner_h - gap) / 2.0;
    let caption_h = (inner_h * 0.15).max(1.0);

    vec![
        Template::new("single-photo", "Single photo", vec![photo(margin, margin, inner_w, inner_h)])
            .with_category("photo")
            .with_description("One full-bleed photo inside a margin"),
        Template::new(
            "two-photo-split",
            "Two photos side by side",
            vec![
                photo(margin, margin, half_w, inner_h),
                photo(margin + half_w + gap, margin, half_w, inner_h),
            ],
        )
        .with_category("photo"),
        Template::new(
            "photo-grid",
            "Four-photo grid",
            vec![
                photo(margin, margin, half_w, half_h),
                photo(margin + half_w + gap, margin, half_w, half_h),
                photo(margin, margin + half_h + gap, half_w, half_h),
                photo(margin + half_w + gap, margin + half_h + gap, half_w, half_h),
            ],
        )
        .with_category("photo"),
        Template::new(
            "title-page",
            "Title page",
            vec![
                caption(margin, h * 0.35, inner_w, h * 0.15, "Title", 48.0),
                caption(margin, h * 0.52, inner_w, h * 0.08, "Subtitle", 20.0),
            ],
        )
        .with_category("text")
        .with_description("Centered title and subtitle"),
        Template::new(
            "photo-with-caption",
            "Photo with caption",
            vec![
                photo(margin, margin, inner_w, inner_h - caption_h - gap),
                caption(margin, margin + inner_h - caption_h, inner_w, caption_h, "Caption", 18.0),
            ],
        )
        .with_category("mixed"),
    ]
}
