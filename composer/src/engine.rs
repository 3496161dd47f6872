//! Composition engine: the stateful owner of the photobook document.
//!
//! DESIGN
//! ======
//! `CompositionEngine` is the only holder of a mutable document. Every
//! operation runs to completion before returning and leaves the document
//! fully consistent; a failed operation leaves it untouched. Data-dependent
//! failures (validation, not-found) come back as values. Pointer input is
//! reduced to the gesture state machine in [`crate::input`]; the host feeds
//! page-local events in and applies the returned [`Action`]s to its view.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::consts::MIN_ELEMENT_SIZE;
use crate::document::{self, Document, DocumentStore, validate_document};
use crate::element::{
    Element, ElementId, ElementPatch, PathDraft, clone_element, create_drawing, generate_id, normalize_rotation,
    validate_element,
};
use crate::error::{EngineError, ErrorCode, ValidationError};
use crate::geometry::{Bounds, Position, clamp_to_container, snap_to_grid};
use crate::hit::{HitPart, ResizeHandle, hit_test};
use crate::input::{InputState, PagePoint, ResizeStart, Tool, UiState};
use crate::page::{self, Background, Page, validate_background, validate_page};
use crate::template::Template;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ElementCreated { page_index: usize, element: Element },
    ElementUpdated { page_index: usize, element: Element },
    ElementMoved { from_page: usize, to_page: usize, element: Element },
    SelectionChanged { page_index: usize, element_id: Option<ElementId> },
    RenderNeeded,
}

/// Which pages a background change applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundScope {
    CurrentPage,
    AllPages,
}

/// What a background change paints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundSource {
    Color(String),
    Image(String),
}

/// Options for committing a captured freehand path.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PathCommit {
    /// Box of the resulting drawing element; the full page when `None`.
    pub bounds: Option<Bounds>,
    pub opacity: Option<f64>,
}

/// Compute the box produced by dragging `handle` by `delta` from `start`.
///
/// Only the edges named by the handle move; an axis the handle doesn't drag is
/// returned exactly as it started. On a dragged axis the side is floored at
/// [`MIN_ELEMENT_SIZE`], then clamped into the page, shrinking it if needed.
/// The page clamp wins over the requested size, but never below
/// `min(MIN_ELEMENT_SIZE, page extent)`; a box that started off the page is
/// pulled back in to honor that floor.
#[must_use]
pub fn resized_bounds(handle: ResizeHandle, start: &ResizeStart, delta: Position, page_w: f64, page_h: f64) -> Bounds {
    let (x, w) = resize_axis(
        start.position.x,
        start.size.width,
        delta.x,
        handle.west(),
        handle.east(),
        page_w,
    );
    let (y, h) = resize_axis(
        start.position.y,
        start.size.height,
        delta.y,
        handle.north(),
        handle.south(),
        page_h,
    );
    Bounds::new(x, y, w, h)
}

/// One axis of [`resized_bounds`]: `low` drags the leading edge, `high` the
/// trailing edge.
fn resize_axis(pos: f64, len: f64, delta: f64, low: bool, high: bool, container: f64) -> (f64, f64) {
    let (mut pos, mut len) = if high {
        (pos, (len + delta).max(MIN_ELEMENT_SIZE))
    } else if low {
        let new_len = (len - delta).max(MIN_ELEMENT_SIZE);
        (pos + len - new_len, new_len)
    } else {
        return (pos, len);
    };

    if pos < 0.0 {
        // Keep the trailing edge where it is.
        len += pos;
        pos = 0.0;
    }
    if pos + len > container {
        len = container - pos;
    }

    let floor = MIN_ELEMENT_SIZE.min(container);
    if len < floor {
        len = floor;
        pos = pos.min(container - floor).max(0.0);
    }
    (pos, len)
}

/// The page composition engine.
#[derive(Debug)]
pub struct CompositionEngine {
    doc: Document,
    ui: UiState,
    input: InputState,
    config: EngineConfig,
}

impl Default for CompositionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl CompositionEngine {
    /// Engine holding a document with one blank page.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let first = Page::new(config.page_width, config.page_height, config.page_background());
        Self { doc: Document::new(vec![first]), ui: UiState::default(), input: InputState::Idle, config }
    }

    /// Engine taking ownership of an existing document.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Invalid`] if the document fails validation.
    pub fn with_document(doc: Document, config: EngineConfig) -> Result<Self, EngineError> {
        validate_document(&doc).into_result().map_err(EngineError::Invalid)?;
        Ok(Self { doc, ui: UiState::default(), input: InputState::Idle, config })
    }

    // --- Queries ---

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Hand the document back, ending the session.
    #[must_use]
    pub fn into_document(self) -> Document {
        self.doc
    }

    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.doc.pages
    }

    #[must_use]
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.doc.pages.get(index)
    }

    #[must_use]
    pub fn element(&self, page_index: usize, id: &str) -> Option<&Element> {
        self.page(page_index).and_then(|p| p.element(id))
    }

    #[must_use]
    pub fn selected_page(&self) -> usize {
        self.ui.selected_page
    }

    #[must_use]
    pub fn selected_element(&self) -> Option<&str> {
        self.ui.selected_element.as_deref()
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    #[must_use]
    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn page_mut(&mut self, index: usize) -> Result<&mut Page, EngineError> {
        self.doc.pages.get_mut(index).ok_or(EngineError::PageNotFound(index))
    }

    // --- Pages ---

    /// Append a page with the configured size and background. Returns its index.
    pub fn add_page(&mut self) -> usize {
        let page = Page::new(self.config.page_width, self.config.page_height, self.config.page_background());
        self.push_page(page)
    }

    /// Append a page of a specific size.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Invalid`] for a non-positive size.
    pub fn add_page_with_size(&mut self, width: f64, height: f64) -> Result<usize, EngineError> {
        let page = Page::new(width, height, self.config.page_background());
        validate_page(&page).into_result().map_err(EngineError::Invalid)?;
        Ok(self.push_page(page))
    }

    /// Append a copy of a page with a fresh page id and fresh element ids.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PageNotFound`] if `index` is out of range.
    pub fn duplicate_page(&mut self, index: usize) -> Result<usize, EngineError> {
        let source = self.page(index).ok_or(EngineError::PageNotFound(index))?;
        let mut copy = Page::new(source.width, source.height, source.background.clone());
        copy.name.clone_from(&source.name);
        copy.elements = source
            .elements
            .iter()
            .map(|e| {
                let mut el = e.clone();
                el.id = generate_id(e.kind().as_str());
                el
            })
            .collect();
        Ok(self.push_page(copy))
    }

    fn push_page(&mut self, page: Page) -> usize {
        debug!(id = %page.id, width = page.width, height = page.height, "page added");
        self.doc.pages.push(page);
        self.doc.pages.len() - 1
    }

    /// Make `index` the current page and drop the element selection.
    pub fn select_page(&mut self, index: usize) -> bool {
        if index >= self.doc.pages.len() {
            return false;
        }
        self.ui.selected_page = index;
        self.ui.selected_element = None;
        true
    }

    /// Select an element on a page. Returns `false` if it doesn't exist.
    pub fn select_element(&mut self, page_index: usize, id: &str) -> bool {
        if self.element(page_index, id).is_none() {
            return false;
        }
        self.ui.selected_page = page_index;
        self.ui.selected_element = Some(id.to_owned());
        true
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.ui.tool = tool;
    }

    // --- Element mutations ---

    /// Validate and append an element to a page.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PageNotFound`] for a bad page index and
    /// [`EngineError::Invalid`] with every violation (including an id already
    /// used on the page). Nothing is inserted on error.
    pub fn add_element(&mut self, page_index: usize, element: Element) -> Result<&Element, EngineError> {
        let page = self.page_mut(page_index)?;
        let mut errors = validate_element(&element).errors;
        if page.contains(&element.id) {
            errors.push(ValidationError::new(
                "id",
                format!("element id {} already exists on this page", element.id),
                ErrorCode::DuplicateId,
            ));
        }
        if !errors.is_empty() {
            warn!(page = page_index, id = %element.id, errors = errors.len(), "element rejected");
            return Err(EngineError::Invalid(errors));
        }

        debug!(page = page_index, id = %element.id, kind = %element.kind(), "element added");
        let index = page.elements.len();
        page.elements.push(element);
        Ok(&page.elements[index])
    }

    /// Merge `patch` into an element. Returns `false` if the page or element
    /// doesn't exist.
    pub fn update_element(&mut self, page_index: usize, id: &str, patch: &ElementPatch) -> bool {
        let Some(page) = self.doc.pages.get_mut(page_index) else {
            return false;
        };
        let found = page::update_element_by_id(&mut page.elements, id, patch);
        if found {
            debug!(page = page_index, id, "element updated");
        } else {
            warn!(page = page_index, id, "update for unknown element");
        }
        found
    }

    /// Remove an element. Returns `false` if the page or element doesn't exist.
    pub fn delete_element(&mut self, page_index: usize, id: &str) -> bool {
        let Some(page) = self.doc.pages.get_mut(page_index) else {
            return false;
        };
        if page::remove_element_by_id(&mut page.elements, id).is_none() {
            return false;
        }
        if self.ui.selected_element.as_deref() == Some(id) {
            self.ui.selected_element = None;
        }
        debug!(page = page_index, id, "element deleted");
        true
    }

    /// Add a copy of an element, offset from the original.
    ///
    /// # Errors
    ///
    /// Returns not-found errors for a bad page or element.
    pub fn duplicate_element(&mut self, page_index: usize, id: &str) -> Result<&Element, EngineError> {
        let original = self
            .element(page_index, id)
            .ok_or_else(|| EngineError::ElementNotFound { page: page_index, id: id.to_owned() })?;
        let copy = clone_element(original);
        self.add_element(page_index, copy)
    }

    /// Rotate an element by `delta_degrees`, normalized into `[0, 360)`.
    pub fn rotate_element(&mut self, page_index: usize, id: &str, delta_degrees: f64) -> bool {
        let Some(el) = self.doc.pages.get_mut(page_index).and_then(|p| p.elements.iter_mut().find(|e| e.id == id))
        else {
            return false;
        };
        el.rotation = normalize_rotation(el.rotation + delta_degrees);
        debug!(page = page_index, id, rotation = el.rotation, "element rotated");
        true
    }

    pub fn bring_to_front(&mut self, page_index: usize, id: &str) -> bool {
        self.doc
            .pages
            .get_mut(page_index)
            .is_some_and(|p| page::bring_to_front(&mut p.elements, id))
    }

    pub fn send_to_back(&mut self, page_index: usize, id: &str) -> bool {
        self.doc
            .pages
            .get_mut(page_index)
            .is_some_and(|p| page::send_to_back(&mut p.elements, id))
    }

    // --- Move / resize ---

    /// Move an element to `(raw_x, raw_y)` on the target page, clamped so it
    /// stays inside the target page.
    ///
    /// Within one page the element keeps its list position. Across pages it
    /// is removed from the source and appended to the target in one step; it
    /// is never on both pages or neither. The target page and element become
    /// the selection.
    ///
    /// # Errors
    ///
    /// Returns not-found errors for bad page indices or an element missing from
    /// the source page, and [`EngineError::Invalid`] if the target page already
    /// holds an element with the same id. Nothing changes on error.
    pub fn move_element_across_pages(
        &mut self,
        source_page: usize,
        target_page: usize,
        id: &str,
        raw_x: f64,
        raw_y: f64,
    ) -> Result<&Element, EngineError> {
        let target = self.page(target_page).ok_or(EngineError::PageNotFound(target_page))?;
        let (target_w, target_h) = (target.width, target.height);
        let target_has_id = target.contains(id);

        let source = self.page(source_page).ok_or(EngineError::PageNotFound(source_page))?;
        let index = source
            .position_of(id)
            .ok_or_else(|| EngineError::ElementNotFound { page: source_page, id: id.to_owned() })?;
        if source_page != target_page && target_has_id {
            return Err(EngineError::Invalid(vec![ValidationError::new(
                "id",
                format!("element id {id} already exists on the target page"),
                ErrorCode::DuplicateId,
            )]));
        }

        let (raw_x, raw_y) = if self.config.grid_size > 0.0 {
            (snap_to_grid(raw_x, self.config.grid_size), snap_to_grid(raw_y, self.config.grid_size))
        } else {
            (raw_x, raw_y)
        };
        let (width, height) = (source.elements[index].width, source.elements[index].height);
        let (x, y) = clamp_to_container(raw_x, raw_y, width, height, target_w, target_h);

        let landed = if source_page == target_page {
            let el = &mut self.doc.pages[source_page].elements[index];
            el.x = x;
            el.y = y;
            index
        } else {
            let mut el = self.doc.pages[source_page].elements.remove(index);
            el.x = x;
            el.y = y;
            let elements = &mut self.doc.pages[target_page].elements;
            elements.push(el);
            elements.len() - 1
        };

        debug!(from = source_page, to = target_page, id, x, y, "element moved");
        self.ui.selected_page = target_page;
        self.ui.selected_element = Some(id.to_owned());
        Ok(&self.doc.pages[target_page].elements[landed])
    }

    /// Resize an element by dragging one of its handles; see [`resized_bounds`].
    ///
    /// # Errors
    ///
    /// Returns not-found errors for a bad page or element.
    pub fn resize_via_handle(
        &mut self,
        page_index: usize,
        id: &str,
        handle: ResizeHandle,
        start: ResizeStart,
        pointer_delta: Position,
    ) -> Result<&Element, EngineError> {
        let page = self.page_mut(page_index)?;
        let (page_w, page_h) = (page.width, page.height);
        let el = page
            .elements
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| EngineError::ElementNotFound { page: page_index, id: id.to_owned() })?;

        let bounds = resized_bounds(handle, &start, pointer_delta, page_w, page_h);
        el.set_bounds(bounds);
        debug!(page = page_index, id, %handle, width = bounds.width, height = bounds.height, "element resized");
        Ok(el)
    }

    // --- Templates ---

    /// Replace every element on a page with fresh instances of a template.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyTemplate`] for a template with no elements
    /// and [`EngineError::Invalid`] if any instantiated element fails
    /// validation; the page is untouched in both cases.
    pub fn apply_template(&mut self, page_index: usize, template: &Template) -> Result<&[Element], EngineError> {
        if template.elements.is_empty() {
            return Err(EngineError::EmptyTemplate(template.id.clone()));
        }
        if self.page(page_index).is_none() {
            return Err(EngineError::PageNotFound(page_index));
        }

        let elements = template.instantiate();
        let errors: Vec<ValidationError> = elements
            .iter()
            .enumerate()
            .flat_map(|(i, e)| {
                let prefix = format!("elements[{i}]");
                validate_element(e).errors.into_iter().map(move |err| err.prefixed(&prefix))
            })
            .collect();
        if !errors.is_empty() {
            warn!(page = page_index, template = %template.id, "template rejected");
            return Err(EngineError::Invalid(errors));
        }

        if self.ui.selected_page == page_index {
            self.ui.selected_element = None;
        }
        let page = self.page_mut(page_index)?;
        page.elements = elements;
        debug!(page = page_index, template = %template.id, count = page.elements.len(), "template applied");
        Ok(page.elements.as_slice())
    }

    // --- Freehand paths ---

    /// Start capturing a freehand path on a page. Any gesture in progress is
    /// abandoned.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PageNotFound`] for a bad page index.
    pub fn begin_path(
        &mut self,
        page_index: usize,
        point: Position,
        color: impl Into<String>,
        width: f64,
    ) -> Result<(), EngineError> {
        if self.page(page_index).is_none() {
            return Err(EngineError::PageNotFound(page_index));
        }
        self.input = InputState::Capturing { page_index, draft: PathDraft::new(point, color, width) };
        Ok(())
    }

    /// Append a point to the path being captured. Returns `false` if no path
    /// is in progress.
    pub fn append_path_point(&mut self, point: Position) -> bool {
        match &mut self.input {
            InputState::Capturing { draft, .. } => {
                draft.push(point);
                true
            }
            _ => false,
        }
    }

    /// Wrap the captured path into a new drawing element and add it to the
    /// page it was started on. `Ok(None)` when no path is in progress.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Invalid`] if the drawing fails validation; the
    /// path is discarded either way.
    pub fn commit_path(&mut self, options: PathCommit) -> Result<Option<&Element>, EngineError> {
        match std::mem::take(&mut self.input) {
            InputState::Capturing { page_index, draft } => self.commit_draft(page_index, draft, options),
            other => {
                self.input = other;
                Ok(None)
            }
        }
    }

    /// Drop the path being captured. Returns `false` if none was in progress.
    pub fn cancel_path(&mut self) -> bool {
        if matches!(self.input, InputState::Capturing { .. }) {
            self.input = InputState::Idle;
            true
        } else {
            false
        }
    }

    fn commit_draft(
        &mut self,
        page_index: usize,
        draft: PathDraft,
        options: PathCommit,
    ) -> Result<Option<&Element>, EngineError> {
        if draft.points().is_empty() {
            return Ok(None);
        }
        let page_bounds = self.page(page_index).ok_or(EngineError::PageNotFound(page_index))?.bounds();
        let bounds = options.bounds.unwrap_or(page_bounds);
        let drawing = create_drawing(bounds, vec![draft.finish(options.opacity)]);
        debug!(page = page_index, id = %drawing.id, "path committed");
        self.add_element(page_index, drawing).map(Some)
    }

    // --- Background ---

    /// Set the background of the current page or of every page. For images
    /// `intensity` (default 1) controls how strongly the image shows through
    /// its white overlay. Returns the number of pages changed.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Invalid`] for an empty image source or an
    /// intensity outside `[0, 1]`, and [`EngineError::PageNotFound`] when the
    /// current page doesn't exist.
    pub fn change_background(
        &mut self,
        scope: BackgroundScope,
        source: BackgroundSource,
        intensity: Option<f64>,
    ) -> Result<usize, EngineError> {
        let background = match source {
            BackgroundSource::Color(color) => Background::color(color),
            BackgroundSource::Image(src) => Background::image(src, intensity.unwrap_or(1.0)),
        };
        validate_background(&background).into_result().map_err(EngineError::Invalid)?;

        let changed = match scope {
            BackgroundScope::CurrentPage => {
                let index = self.ui.selected_page;
                self.page_mut(index)?.background = background;
                1
            }
            BackgroundScope::AllPages => {
                for page in &mut self.doc.pages {
                    page.background = background.clone();
                }
                self.doc.pages.len()
            }
        };
        debug!(?scope, pages = changed, "background changed");
        Ok(changed)
    }

    // --- Persistence ---

    /// Canonical text of the current document.
    ///
    /// # Errors
    ///
    /// Returns the aggregated validation errors if any page is invalid.
    pub fn serialize(&self) -> Result<String, EngineError> {
        Ok(document::serialize(&self.doc)?)
    }

    /// Replace the document with one parsed from `text`. Selection and any
    /// gesture in progress are reset. On error the current document is kept.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Document`] for malformed or invalid text.
    pub fn load(&mut self, text: &str) -> Result<(), EngineError> {
        let doc = document::deserialize(text)?;
        info!(pages = doc.pages.len(), elements = doc.element_count(), "document loaded");
        self.doc = doc;
        self.ui = UiState { tool: self.ui.tool, ..UiState::default() };
        self.input = InputState::Idle;
        Ok(())
    }

    /// Serialize the document into a store under `key`.
    ///
    /// # Errors
    ///
    /// Returns validation or storage failures.
    pub fn save_to(&self, store: &mut impl DocumentStore, key: &str) -> Result<(), EngineError> {
        let text = self.serialize()?;
        store.save(key, text)?;
        info!(key, pages = self.doc.pages.len(), "document saved");
        Ok(())
    }

    /// Load the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Document`] when nothing is stored or the text is
    /// malformed or invalid.
    pub fn load_from(&mut self, store: &impl DocumentStore, key: &str) -> Result<(), EngineError> {
        let text = store.load(key)?;
        self.load(&text)
    }

    // --- Pointer input ---

    /// Handle pointer-down at a page-local point.
    pub fn on_pointer_down(&mut self, at: PagePoint) -> Vec<Action> {
        if !self.input.is_idle() {
            return Vec::new();
        }
        match self.ui.tool {
            Tool::Select => self.select_down(at),
            Tool::Draw => self.draw_down(at),
        }
    }

    fn select_down(&mut self, at: PagePoint) -> Vec<Action> {
        let Some(page) = self.page(at.page_index) else {
            return Vec::new();
        };
        let selected = if self.ui.selected_page == at.page_index { self.selected_element() } else { None };
        let hit = hit_test(page, at.point, selected)
            .and_then(|hit| page.element(&hit.element_id).map(|el| (hit, el.bounds(), el.locked)));

        let Some((hit, bounds, locked)) = hit else {
            self.ui.selected_page = at.page_index;
            self.ui.selected_element = None;
            return vec![Action::SelectionChanged { page_index: at.page_index, element_id: None }, Action::RenderNeeded];
        };

        self.ui.selected_page = at.page_index;
        self.ui.selected_element = Some(hit.element_id.clone());
        let actions = vec![
            Action::SelectionChanged { page_index: at.page_index, element_id: Some(hit.element_id.clone()) },
            Action::RenderNeeded,
        ];
        if locked {
            return actions;
        }

        self.input = match hit.part {
            HitPart::Body => InputState::Dragging {
                page_index: at.page_index,
                element_id: hit.element_id,
                grab_offset_x: at.point.x - bounds.x,
                grab_offset_y: at.point.y - bounds.y,
                last: at,
            },
            HitPart::ResizeHandle(handle) => InputState::Resizing {
                page_index: at.page_index,
                element_id: hit.element_id,
                handle,
                start: ResizeStart { pointer: at.point, size: bounds.size(), position: bounds.origin() },
            },
        };
        actions
    }

    fn draw_down(&mut self, at: PagePoint) -> Vec<Action> {
        let (color, width) = (self.config.stroke_color.clone(), self.config.stroke_width);
        match self.begin_path(at.page_index, at.point, color, width) {
            Ok(()) => vec![Action::RenderNeeded],
            Err(e) => {
                warn!(error = %e, "cannot start path");
                Vec::new()
            }
        }
    }

    /// Handle pointer movement.
    pub fn on_pointer_move(&mut self, at: PagePoint) -> Vec<Action> {
        match &mut self.input {
            InputState::Idle => Vec::new(),
            InputState::Dragging { last, .. } => {
                *last = at;
                vec![Action::RenderNeeded]
            }
            InputState::Capturing { page_index, draft } => {
                if *page_index != at.page_index {
                    return Vec::new();
                }
                draft.push(at.point);
                vec![Action::RenderNeeded]
            }
            InputState::Resizing { page_index, element_id, handle, start } => {
                if *page_index != at.page_index {
                    return Vec::new();
                }
                let (page_index, id, handle, start) = (*page_index, element_id.clone(), *handle, *start);
                self.resize_to(page_index, &id, handle, start, at.point)
            }
        }
    }

    fn resize_to(
        &mut self,
        page_index: usize,
        id: &str,
        handle: ResizeHandle,
        start: ResizeStart,
        pointer: Position,
    ) -> Vec<Action> {
        let delta = Position::new(pointer.x - start.pointer.x, pointer.y - start.pointer.y);
        match self.resize_via_handle(page_index, id, handle, start, delta) {
            Ok(el) => vec![Action::ElementUpdated { page_index, element: el.clone() }, Action::RenderNeeded],
            Err(e) => {
                warn!(error = %e, "resize target vanished");
                self.input = InputState::Idle;
                Vec::new()
            }
        }
    }

    /// Handle pointer release. `at` is `None` when the pointer was released
    /// outside every page.
    pub fn on_pointer_up(&mut self, at: Option<PagePoint>) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Dragging { page_index, element_id, grab_offset_x, grab_offset_y, .. } => {
                let Some(at) = at else {
                    debug!(id = %element_id, "drag cancelled outside pages");
                    return vec![Action::RenderNeeded];
                };
                let (x, y) = (at.point.x - grab_offset_x, at.point.y - grab_offset_y);
                match self.move_element_across_pages(page_index, at.page_index, &element_id, x, y) {
                    Ok(el) => {
                        let element = el.clone();
                        vec![
                            Action::ElementMoved { from_page: page_index, to_page: at.page_index, element },
                            Action::SelectionChanged { page_index: at.page_index, element_id: Some(element_id) },
                            Action::RenderNeeded,
                        ]
                    }
                    Err(e) => {
                        warn!(error = %e, "drop rejected");
                        vec![Action::RenderNeeded]
                    }
                }
            }
            InputState::Resizing { page_index, element_id, handle, start } => match at {
                Some(at) if at.page_index == page_index => {
                    self.resize_to(page_index, &element_id, handle, start, at.point)
                }
                _ => self
                    .element(page_index, &element_id)
                    .map(|el| vec![Action::ElementUpdated { page_index, element: el.clone() }, Action::RenderNeeded])
                    .unwrap_or_default(),
            },
            InputState::Capturing { page_index, mut draft } => {
                if let Some(at) = at.filter(|at| at.page_index == page_index) {
                    draft.push(at.point);
                }
                match self.commit_draft(page_index, draft, PathCommit::default()) {
                    Ok(Some(el)) => {
                        vec![Action::ElementCreated { page_index, element: el.clone() }, Action::RenderNeeded]
                    }
                    Ok(None) => Vec::new(),
                    Err(e) => {
                        warn!(error = %e, "drawing rejected");
                        vec![Action::RenderNeeded]
                    }
                }
            }
        }
    }

    /// Abort whatever gesture is in progress and return to idle. A resize is
    /// rolled back to its starting geometry.
    pub fn cancel_gesture(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Dragging { .. } | InputState::Capturing { .. } => vec![Action::RenderNeeded],
            InputState::Resizing { page_index, element_id, start, .. } => {
                let original = Bounds::new(start.position.x, start.position.y, start.size.width, start.size.height);
                let Some(el) = self
                    .doc
                    .pages
                    .get_mut(page_index)
                    .and_then(|p| p.elements.iter_mut().find(|e| e.id == element_id))
                else {
                    return vec![Action::RenderNeeded];
                };
                el.set_bounds(original);
                vec![Action::ElementUpdated { page_index, element: el.clone() }, Action::RenderNeeded]
            }
        }
    }
}
