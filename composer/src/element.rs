//! Element model: the four element variants, factories, validation and pure
//! transforms.
//!
//! An [`Element`] carries the shared spatial attributes (position, size,
//! rotation, z-order, lock/visibility flags) plus an [`ElementContent`] that
//! holds the variant payload. On the wire the variant is flattened into the
//! element object and discriminated by its `type` field:
//!
//! ```json
//! { "id": "text-1717000000000-k3j9x0a2b", "x": 10, "y": 10, "width": 200,
//!   "height": 40, "rotation": 0, "locked": false, "visible": true,
//!   "type": "text", "text": "Hello", "fontSize": 16, ... }
//! ```
//!
//! Factories never fail. Validation is a separate, explicit step
//! ([`validate_element`]) that reports every violation at once; nothing in this
//! module silently corrects bad geometry.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};

use crate::consts::{CLONE_OFFSET, ID_SUFFIX_LEN, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::error::{ErrorCode, Validation, ValidationError};
use crate::geometry::{Bounds, Position, bounds_of};

/// Identifier of an element, unique within its page for the element's lifetime.
pub type ElementId = String;

// =============================================================================
// KIND
// =============================================================================

/// The variant tag of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Image,
    Text,
    Drawing,
    Sticker,
}

impl ElementKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Text => "text",
            Self::Drawing => "drawing",
            Self::Sticker => "sticker",
        }
    }

    /// Size a freshly created element of this kind gets before overrides.
    #[must_use]
    pub fn default_size(self) -> (f64, f64) {
        match self {
            Self::Image | Self::Drawing => (200.0, 200.0),
            Self::Text => (200.0, 40.0),
            Self::Sticker => (80.0, 80.0),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown element kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown element kind: {0}")]
pub struct ParseKindError(pub String);

impl FromStr for ElementKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Self::Image),
            "text" => Ok(Self::Text),
            "drawing" => Ok(Self::Drawing),
            "sticker" => Ok(Self::Sticker),
            other => Err(ParseKindError(other.to_owned())),
        }
    }
}

// =============================================================================
// VARIANT PAYLOADS
// =============================================================================

fn default_opacity() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

/// Photo placed on a page. `src` is an opaque reference (data URI, object
/// storage URL or placeholder path); the engine never inspects its contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContent {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    LineThrough,
    Overline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

fn default_font_size() -> f64 {
    16.0
}

fn default_text_color() -> String {
    "#333333".to_owned()
}

fn default_font_family() -> String {
    "Arial".to_owned()
}

fn default_font_weight() -> String {
    "normal".to_owned()
}

fn default_line_height() -> f64 {
    1.2
}

/// Styled text block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    pub text: String,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_text_color")]
    pub color: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_weight")]
    pub font_weight: String,
    #[serde(default)]
    pub text_align: TextAlign,
    #[serde(default = "default_line_height")]
    pub line_height: f64,
    #[serde(default)]
    pub letter_spacing: f64,
    #[serde(default)]
    pub text_decoration: TextDecoration,
    #[serde(default)]
    pub text_transform: TextTransform,
}

impl TextContent {
    /// Text with the house defaults (16px, `#333333`, Arial).
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: default_font_size(),
            color: default_text_color(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            text_align: TextAlign::default(),
            line_height: default_line_height(),
            letter_spacing: 0.0,
            text_decoration: TextDecoration::default(),
            text_transform: TextTransform::default(),
        }
    }
}

/// One committed freehand stroke. A path never changes after it is wrapped
/// into a drawing element; strokes in progress are a [`PathDraft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    pub id: String,
    pub points: Vec<Position>,
    pub stroke_color: String,
    pub stroke_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Path {
    /// Bounding box of the stroke's points, `None` for an empty path.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        bounds_of(&self.points)
    }
}

/// A stroke being captured. Points only ever get appended.
#[derive(Debug, Clone, PartialEq)]
pub struct PathDraft {
    points: Vec<Position>,
    stroke_color: String,
    stroke_width: f64,
}

impl PathDraft {
    #[must_use]
    pub fn new(first: Position, stroke_color: impl Into<String>, stroke_width: f64) -> Self {
        Self { points: vec![first], stroke_color: stroke_color.into(), stroke_width }
    }

    pub fn push(&mut self, point: Position) {
        self.points.push(point);
    }

    #[must_use]
    pub fn points(&self) -> &[Position] {
        &self.points
    }

    /// Freeze the draft into a committed path with a fresh id.
    #[must_use]
    pub fn finish(self, opacity: Option<f64>) -> Path {
        Path {
            id: generate_id("path"),
            points: self.points,
            stroke_color: self.stroke_color,
            stroke_width: self.stroke_width,
            opacity,
        }
    }
}

/// Freehand drawing: an ordered list of strokes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingContent {
    #[serde(default)]
    pub paths: Vec<Path>,
}

/// Decorative sticker from the sticker library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerContent {
    pub sticker_id: String,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

/// Variant payload of an element, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementContent {
    Image(ImageContent),
    Text(TextContent),
    Drawing(DrawingContent),
    Sticker(StickerContent),
}

impl ElementContent {
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Image(_) => ElementKind::Image,
            Self::Text(_) => ElementKind::Text,
            Self::Drawing(_) => ElementKind::Drawing,
            Self::Sticker(_) => ElementKind::Sticker,
        }
    }
}

// =============================================================================
// ELEMENT
// =============================================================================

/// A positioned, sized, rotatable item on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    /// Left edge in page coordinates.
    pub x: f64,
    /// Top edge in page coordinates.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Clockwise rotation in degrees around the box center.
    #[serde(default)]
    pub rotation: f64,
    /// Explicit paint order; elements without one paint as z = 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(flatten)]
    pub content: ElementContent,
}

impl Element {
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    #[must_use]
    pub fn center(&self) -> Position {
        self.bounds().center()
    }

    /// Paint order with the implicit default of 0.
    #[must_use]
    pub fn z(&self) -> i64 {
        self.z_index.unwrap_or(0)
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.x = bounds.x;
        self.y = bounds.y;
        self.width = bounds.width;
        self.height = bounds.height;
    }

    /// Merge every present field of `patch` into this element.
    ///
    /// Variant-specific fields only land on elements of the matching variant;
    /// e.g. `font_size` is ignored for an image.
    pub fn apply_patch(&mut self, patch: &ElementPatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(w) = patch.width {
            self.width = w;
        }
        if let Some(h) = patch.height {
            self.height = h;
        }
        if let Some(r) = patch.rotation {
            self.rotation = r;
        }
        if let Some(z) = patch.z_index {
            self.z_index = Some(z);
        }
        if let Some(locked) = patch.locked {
            self.locked = locked;
        }
        if let Some(visible) = patch.visible {
            self.visible = visible;
        }

        match &mut self.content {
            ElementContent::Image(img) => {
                if let Some(src) = &patch.src {
                    img.src.clone_from(src);
                }
                if let Some(alt) = &patch.alt {
                    img.alt = Some(alt.clone());
                }
                if let Some(opacity) = patch.opacity {
                    img.opacity = opacity;
                }
                if let Some(filter) = &patch.filter {
                    img.filter = Some(filter.clone());
                }
                if let Some(radius) = patch.border_radius {
                    img.border_radius = Some(radius);
                }
            }
            ElementContent::Text(text) => {
                if let Some(t) = &patch.text {
                    text.text.clone_from(t);
                }
                if let Some(size) = patch.font_size {
                    text.font_size = size;
                }
                if let Some(color) = &patch.color {
                    text.color.clone_from(color);
                }
                if let Some(family) = &patch.font_family {
                    text.font_family.clone_from(family);
                }
                if let Some(weight) = &patch.font_weight {
                    text.font_weight.clone_from(weight);
                }
                if let Some(align) = patch.text_align {
                    text.text_align = align;
                }
                if let Some(lh) = patch.line_height {
                    text.line_height = lh;
                }
                if let Some(ls) = patch.letter_spacing {
                    text.letter_spacing = ls;
                }
                if let Some(deco) = patch.text_decoration {
                    text.text_decoration = deco;
                }
                if let Some(tt) = patch.text_transform {
                    text.text_transform = tt;
                }
            }
            ElementContent::Drawing(drawing) => {
                if let Some(paths) = &patch.paths {
                    drawing.paths.clone_from(paths);
                }
            }
            ElementContent::Sticker(sticker) => {
                if let Some(id) = &patch.sticker_id {
                    sticker.sticker_id.clone_from(id);
                }
                if let Some(src) = &patch.src {
                    sticker.src.clone_from(src);
                }
                if let Some(category) = &patch.category {
                    sticker.category = Some(category.clone());
                }
                if let Some(opacity) = patch.opacity {
                    sticker.opacity = opacity;
                }
            }
        }
    }
}

/// Sparse update for an element. Only present fields are applied.
///
/// Doubles as the override bag for [`create_element`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Image or sticker source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Image or sticker opacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<Path>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticker_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ElementPatch {
    /// Patch that only moves the element.
    #[must_use]
    pub fn position(x: f64, y: f64) -> Self {
        Self { x: Some(x), y: Some(y), ..Default::default() }
    }

    /// Patch that only sets the element's size.
    #[must_use]
    pub fn size(width: f64, height: f64) -> Self {
        Self { width: Some(width), height: Some(height), ..Default::default() }
    }
}

// =============================================================================
// FACTORIES
// =============================================================================

/// Generate an id of the form `{prefix}-{unix_millis}-{random}`.
#[must_use]
pub fn generate_id(prefix: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis());
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(ID_SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    format!("{prefix}-{millis}-{suffix}")
}

/// Create an element of `kind` at `position` with a fresh id.
///
/// `payload` is the variant's primary value: the `src` of an image, the `text`
/// of a text block, the sticker id of a sticker (ignored for drawings).
/// `overrides` is merged on top of the kind's defaults.
#[must_use]
pub fn create_element(kind: ElementKind, position: Position, payload: &str, overrides: &ElementPatch) -> Element {
    let content = match kind {
        ElementKind::Image => ElementContent::Image(ImageContent {
            src: payload.to_owned(),
            alt: None,
            opacity: default_opacity(),
            filter: None,
            border_radius: None,
        }),
        ElementKind::Text => ElementContent::Text(TextContent::new(payload)),
        ElementKind::Drawing => ElementContent::Drawing(DrawingContent::default()),
        ElementKind::Sticker => ElementContent::Sticker(StickerContent {
            sticker_id: payload.to_owned(),
            src: format!("/stickers/{payload}.svg"),
            category: None,
            opacity: default_opacity(),
        }),
    };

    let (width, height) = kind.default_size();
    let mut element = Element {
        id: generate_id(kind.as_str()),
        x: position.x,
        y: position.y,
        width,
        height,
        rotation: 0.0,
        z_index: None,
        locked: false,
        visible: true,
        content,
    };
    element.apply_patch(overrides);
    element
}

/// Wrap committed paths into a drawing element occupying `bounds`.
#[must_use]
pub fn create_drawing(bounds: Bounds, paths: Vec<Path>) -> Element {
    Element {
        id: generate_id(ElementKind::Drawing.as_str()),
        x: bounds.x,
        y: bounds.y,
        width: bounds.width,
        height: bounds.height,
        rotation: 0.0,
        z_index: None,
        locked: false,
        visible: true,
        content: ElementContent::Drawing(DrawingContent { paths }),
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

fn check_opacity(field: &str, opacity: f64, errors: &mut Vec<ValidationError>) {
    if !(0.0..=1.0).contains(&opacity) {
        errors.push(ValidationError::new(
            field,
            format!("opacity must be between 0 and 1, got {opacity}"),
            ErrorCode::InvalidOpacity,
        ));
    }
}

fn check_non_empty(field: &str, value: &str, code: ErrorCode, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, format!("{field} is required"), code));
    }
}

/// Non-finite numbers serialize as `null` and would not load back.
fn check_finite(field: &str, value: f64, code: ErrorCode, errors: &mut Vec<ValidationError>) {
    if !value.is_finite() {
        errors.push(ValidationError::new(field, format!("{field} must be finite, got {value}"), code));
    }
}

fn validate_path(index: usize, path: &Path, errors: &mut Vec<ValidationError>) {
    let prefix = format!("paths[{index}]");
    if path.points.is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.points"),
            "path must contain at least one point",
            ErrorCode::EmptyPath,
        ));
    }
    for (i, point) in path.points.iter().enumerate() {
        check_finite(&format!("{prefix}.points[{i}].x"), point.x, ErrorCode::InvalidPosition, errors);
        check_finite(&format!("{prefix}.points[{i}].y"), point.y, ErrorCode::InvalidPosition, errors);
    }
    if !path.stroke_width.is_finite() || path.stroke_width <= 0.0 {
        errors.push(ValidationError::new(
            format!("{prefix}.strokeWidth"),
            format!("stroke width must be positive, got {}", path.stroke_width),
            ErrorCode::InvalidStrokeWidth,
        ));
    }
    if let Some(opacity) = path.opacity {
        check_opacity(&format!("{prefix}.opacity"), opacity, errors);
    }
}

/// Check an element's structure, collecting every violation.
#[must_use]
pub fn validate_element(element: &Element) -> Validation {
    let mut errors = Vec::new();

    check_non_empty("id", &element.id, ErrorCode::MissingId, &mut errors);

    for (field, value) in [("x", element.x), ("y", element.y)] {
        if !value.is_finite() || value < 0.0 {
            errors.push(ValidationError::new(
                field,
                format!("{field} must be a non-negative number, got {value}"),
                ErrorCode::InvalidPosition,
            ));
        }
    }
    for (field, value) in [("width", element.width), ("height", element.height)] {
        if !value.is_finite() || value <= 0.0 {
            errors.push(ValidationError::new(
                field,
                format!("{field} must be positive, got {value}"),
                ErrorCode::InvalidSize,
            ));
        }
    }
    if !element.rotation.is_finite() {
        errors.push(ValidationError::new("rotation", "rotation must be finite", ErrorCode::InvalidRotation));
    }

    match &element.content {
        ElementContent::Image(img) => {
            check_non_empty("src", &img.src, ErrorCode::MissingSource, &mut errors);
            check_opacity("opacity", img.opacity, &mut errors);
            if let Some(radius) = img.border_radius {
                check_finite("borderRadius", radius, ErrorCode::InvalidStyle, &mut errors);
            }
        }
        ElementContent::Text(text) => {
            check_non_empty("text", &text.text, ErrorCode::MissingText, &mut errors);
            if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&text.font_size) {
                errors.push(ValidationError::new(
                    "fontSize",
                    format!(
                        "font size must be between {MIN_FONT_SIZE} and {MAX_FONT_SIZE}, got {}",
                        text.font_size
                    ),
                    ErrorCode::InvalidFontSize,
                ));
            }
            check_finite("lineHeight", text.line_height, ErrorCode::InvalidStyle, &mut errors);
            check_finite("letterSpacing", text.letter_spacing, ErrorCode::InvalidStyle, &mut errors);
        }
        ElementContent::Drawing(drawing) => {
            for (i, path) in drawing.paths.iter().enumerate() {
                validate_path(i, path, &mut errors);
            }
        }
        ElementContent::Sticker(sticker) => {
            check_non_empty("stickerId", &sticker.sticker_id, ErrorCode::MissingStickerId, &mut errors);
            check_non_empty("src", &sticker.src, ErrorCode::MissingSource, &mut errors);
            check_opacity("opacity", sticker.opacity, &mut errors);
        }
    }

    Validation::from_errors(errors)
}

// =============================================================================
// PURE TRANSFORMS
// =============================================================================

/// Wrap an angle into `[0, 360)`.
#[must_use]
pub fn normalize_rotation(degrees: f64) -> f64 {
    let r = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if r >= 360.0 { 0.0 } else { r }
}

/// Copy of `element` with a fresh id, offset so it doesn't sit exactly on top
/// of the original.
#[must_use]
pub fn clone_element(element: &Element) -> Element {
    let mut copy = element.clone();
    copy.id = generate_id(element.kind().as_str());
    copy.x += CLONE_OFFSET;
    copy.y += CLONE_OFFSET;
    copy
}

#[must_use]
pub fn rotate_element(element: &Element, delta_degrees: f64) -> Element {
    let mut out = element.clone();
    out.rotation = normalize_rotation(element.rotation + delta_degrees);
    out
}

/// Scale each axis independently; neither side drops below 1.
#[must_use]
pub fn scale_element(element: &Element, sx: f64, sy: f64) -> Element {
    let mut out = element.clone();
    out.width = (element.width * sx).max(1.0);
    out.height = (element.height * sy).max(1.0);
    out
}

#[must_use]
pub fn scale_element_uniform(element: &Element, factor: f64) -> Element {
    scale_element(element, factor, factor)
}

/// Translate without any bounds checking.
#[must_use]
pub fn move_element(element: &Element, dx: f64, dy: f64) -> Element {
    let mut out = element.clone();
    out.x += dx;
    out.y += dy;
    out
}
