//! In-memory host used by the command-line driver and the tests.
//!
//! Each type is a cheap handle over shared state: clone it, box one clone
//! into the [`Host`](super::Host), and keep the other to observe what the
//! panel did.

use super::{BackgroundSurface, ColorDialog, Cursor, DrawingSurface, IconRef, IconResolver};
use super::{PreviewSurface, WindowHost};
use crate::draw::Color;
use crate::input::{BackgroundKind, OverlayKind, ToolKind};
use crate::ui::icons;
use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

// ============================================================================
// Drawing + background surface
// ============================================================================

#[derive(Debug)]
struct SurfaceInner {
    active_tool: ToolKind,
    sizes: [u32; 3],
    color: Color,
    /// Background per page; the vector grows when paging past the end.
    pages: Vec<BackgroundKind>,
    page: usize,
    overlay: OverlayKind,
    new_page_background: BackgroundKind,
    clears: usize,
    history_position: i64,
}

/// Drawing surface with page-scoped backgrounds.
///
/// Paging back from page 0 stays on page 0; paging forward from the last page
/// appends a fresh page with the default background.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    inner: Rc<RefCell<SurfaceInner>>,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::with_background(BackgroundKind::Transparent)
    }

    /// Creates a surface whose pages start with `background`.
    pub fn with_background(background: BackgroundKind) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SurfaceInner {
                active_tool: ToolKind::Pen,
                sizes: [
                    ToolKind::Pen.clamp_size(3),
                    ToolKind::Marker.clamp_size(20),
                    ToolKind::Eraser.clamp_size(62),
                ],
                color: crate::draw::RED,
                pages: vec![background],
                page: 0,
                overlay: OverlayKind::None,
                new_page_background: background,
                clears: 0,
                history_position: 0,
            })),
        }
    }

    pub fn page_count(&self) -> usize {
        self.inner.borrow().pages.len()
    }

    pub fn overlay(&self) -> OverlayKind {
        self.inner.borrow().overlay
    }

    pub fn clear_count(&self) -> usize {
        self.inner.borrow().clears
    }

    /// Net document navigation (`go_next` minus `go_previous`).
    pub fn history_position(&self) -> i64 {
        self.inner.borrow().history_position
    }
}

impl DrawingSurface for HeadlessSurface {
    fn active_tool(&self) -> ToolKind {
        self.inner.borrow().active_tool
    }

    fn set_active_tool(&mut self, tool: ToolKind) {
        self.inner.borrow_mut().active_tool = tool;
    }

    fn tool_size(&self, tool: ToolKind) -> u32 {
        self.inner.borrow().sizes[tool.index()]
    }

    fn set_tool_size(&mut self, tool: ToolKind, size: u32) {
        self.inner.borrow_mut().sizes[tool.index()] = size;
    }

    fn stroke_color(&self) -> Color {
        self.inner.borrow().color
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.inner.borrow_mut().color = color;
    }

    fn clear(&mut self) {
        self.inner.borrow_mut().clears += 1;
    }

    fn go_next_page(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.page += 1;
        if inner.page >= inner.pages.len() {
            let background = inner.new_page_background;
            inner.pages.push(background);
        }
    }

    fn go_previous_page(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.page = inner.page.saturating_sub(1);
    }

    fn current_page_number(&self) -> usize {
        self.inner.borrow().page
    }

    fn go_next(&mut self) {
        self.inner.borrow_mut().history_position += 1;
    }

    fn go_previous(&mut self) {
        self.inner.borrow_mut().history_position -= 1;
    }
}

impl BackgroundSurface for HeadlessSurface {
    fn background_kind(&self) -> BackgroundKind {
        let inner = self.inner.borrow();
        inner.pages[inner.page]
    }

    fn set_background_kind(&mut self, kind: BackgroundKind) {
        let mut inner = self.inner.borrow_mut();
        let page = inner.page;
        inner.pages[page] = kind;
    }

    fn set_overlay_kind(&mut self, kind: OverlayKind) {
        self.inner.borrow_mut().overlay = kind;
    }
}

// ============================================================================
// Preview
// ============================================================================

/// What the panel last told the preview.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRecord {
    pub size: u32,
    pub color: Color,
    pub tint: Option<Color>,
    pub visible: bool,
    pub updates: usize,
}

/// Preview surface that only records its inputs.
#[derive(Debug, Clone)]
pub struct RecordingPreview {
    inner: Rc<RefCell<PreviewRecord>>,
}

impl Default for RecordingPreview {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingPreview {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(PreviewRecord {
                size: 0,
                color: crate::draw::BLACK,
                tint: None,
                visible: true,
                updates: 0,
            })),
        }
    }

    pub fn record(&self) -> PreviewRecord {
        self.inner.borrow().clone()
    }
}

impl PreviewSurface for RecordingPreview {
    fn set_pen(&mut self, size: u32, color: Color) {
        let mut inner = self.inner.borrow_mut();
        inner.size = size;
        inner.color = color;
    }

    fn set_background(&mut self, tint: Option<Color>) {
        self.inner.borrow_mut().tint = tint;
    }

    fn set_visible(&mut self, visible: bool) {
        self.inner.borrow_mut().visible = visible;
    }

    fn update_image(&mut self) {
        self.inner.borrow_mut().updates += 1;
    }
}

// ============================================================================
// Window
// ============================================================================

#[derive(Debug, Default)]
struct WindowInner {
    cursor: Option<Cursor>,
    minimized: usize,
    quit: bool,
    screenshots: usize,
}

/// Window host that records requests.
#[derive(Debug, Clone, Default)]
pub struct HeadlessWindow {
    inner: Rc<RefCell<WindowInner>>,
}

impl HeadlessWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Option<Cursor> {
        self.inner.borrow().cursor
    }

    pub fn minimize_count(&self) -> usize {
        self.inner.borrow().minimized
    }

    pub fn quit_requested(&self) -> bool {
        self.inner.borrow().quit
    }

    pub fn screenshot_count(&self) -> usize {
        self.inner.borrow().screenshots
    }
}

impl WindowHost for HeadlessWindow {
    fn set_cursor(&mut self, cursor: Option<Cursor>) {
        self.inner.borrow_mut().cursor = cursor;
    }

    fn minimize(&mut self) {
        self.inner.borrow_mut().minimized += 1;
    }

    fn quit(&mut self) {
        self.inner.borrow_mut().quit = true;
    }

    fn take_screenshot(&mut self) {
        self.inner.borrow_mut().screenshots += 1;
    }
}

// ============================================================================
// Color dialog
// ============================================================================

#[derive(Debug, Default)]
struct DialogInner {
    responses: VecDeque<Option<Color>>,
    requests: Vec<(Color, String)>,
}

/// Color dialog answering from a queue; an empty queue counts as cancel.
#[derive(Debug, Clone, Default)]
pub struct ScriptedColorDialog {
    inner: Rc<RefCell<DialogInner>>,
}

impl ScriptedColorDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the answer to the next `pick` (`None` = cancel).
    pub fn push_response(&self, response: Option<Color>) {
        self.inner.borrow_mut().responses.push_back(response);
    }

    /// Initial colors and titles the dialog was opened with.
    pub fn requests(&self) -> Vec<(Color, String)> {
        self.inner.borrow().requests.clone()
    }
}

impl ColorDialog for ScriptedColorDialog {
    fn pick(&mut self, initial: Color, title: &str) -> Option<Color> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push((initial, title.to_string()));
        inner.responses.pop_front().flatten()
    }
}

// ============================================================================
// Icons
// ============================================================================

/// Icon resolver over a fixed set of identifiers.
#[derive(Debug, Clone)]
pub struct StaticIcons {
    known: HashSet<IconRef>,
}

impl StaticIcons {
    /// Resolves every icon the panel uses.
    pub fn bundled() -> Self {
        Self {
            known: icons::all().into_iter().collect(),
        }
    }

    /// Resolves every bundled icon except `missing`.
    pub fn without(missing: &[IconRef]) -> Self {
        let mut resolver = Self::bundled();
        for icon in missing {
            resolver.known.remove(icon);
        }
        resolver
    }
}

impl IconResolver for StaticIcons {
    fn resolves(&self, icon: IconRef) -> bool {
        self.known.contains(icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_page_stops_at_zero() {
        let mut surface = HeadlessSurface::new();
        surface.go_previous_page();
        assert_eq!(surface.current_page_number(), 0);
    }

    #[test]
    fn next_page_appends_default_background() {
        let mut surface = HeadlessSurface::with_background(BackgroundKind::White);
        surface.set_background_kind(BackgroundKind::Black);
        surface.go_next_page();
        assert_eq!(surface.page_count(), 2);
        assert_eq!(surface.background_kind(), BackgroundKind::White);
        surface.go_previous_page();
        assert_eq!(surface.background_kind(), BackgroundKind::Black);
    }

    #[test]
    fn clones_share_state() {
        let surface = HeadlessSurface::new();
        let mut handle = surface.clone();
        handle.set_tool_size(ToolKind::Marker, 55);
        handle.clear();
        assert_eq!(surface.tool_size(ToolKind::Marker), 55);
        assert_eq!(surface.clear_count(), 1);
    }

    #[test]
    fn dialog_cancels_when_queue_is_empty() {
        let mut dialog = ScriptedColorDialog::new();
        dialog.push_response(Some(crate::draw::BLUE));
        assert_eq!(dialog.pick(crate::draw::RED, "t"), Some(crate::draw::BLUE));
        assert_eq!(dialog.pick(crate::draw::RED, "t"), None);
        assert_eq!(dialog.requests().len(), 2);
    }

    #[test]
    fn static_icons_can_omit_entries() {
        let resolver = StaticIcons::without(&[icons::CLEAR]);
        assert!(!resolver.resolves(icons::CLEAR));
        assert!(resolver.resolves(icons::CLOSE));
        assert!(!resolver.resolves(""));
    }
}
