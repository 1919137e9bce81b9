//! Collaborators the panel drives but does not own.
//!
//! The drawing surface, the page background, the stroke preview, the window,
//! the modal color dialog and the settings store are all reached through the
//! narrow traits below. A [`Host`] bundles one implementation of each and is
//! owned by the panel assembly; controllers borrow it per call.

pub mod headless;
pub mod preview;

use crate::draw::Color;
use crate::input::{BackgroundKind, OverlayKind, ToolKind};
use crate::settings::SettingsStore;

/// Opaque icon identifier resolved by the host toolkit.
pub type IconRef = &'static str;

/// Cursor shown over the drawing surface and the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub icon: IconRef,
    /// Square size in pixels
    pub size: u32,
}

/// The annotation canvas.
///
/// Page boundaries (previous at page 0, next past the last page) are the
/// surface's business; the panel only requests and then reads the result.
pub trait DrawingSurface {
    fn active_tool(&self) -> ToolKind;
    fn set_active_tool(&mut self, tool: ToolKind);
    fn tool_size(&self, tool: ToolKind) -> u32;
    fn set_tool_size(&mut self, tool: ToolKind, size: u32);
    fn stroke_color(&self) -> Color;
    fn set_stroke_color(&mut self, color: Color);
    /// Erases the current page.
    fn clear(&mut self);
    fn go_next_page(&mut self);
    fn go_previous_page(&mut self);
    fn current_page_number(&self) -> usize;
    /// Document-level forward navigation, distinct from paging.
    fn go_next(&mut self);
    /// Document-level backward navigation, distinct from paging.
    fn go_previous(&mut self);
}

/// Page background and overlay grid.
pub trait BackgroundSurface {
    fn background_kind(&self) -> BackgroundKind;
    fn set_background_kind(&mut self, kind: BackgroundKind);
    fn set_overlay_kind(&mut self, kind: OverlayKind);
}

/// Small live preview of the current stroke.
pub trait PreviewSurface {
    fn set_pen(&mut self, size: u32, color: Color);
    /// `None` means transparent.
    fn set_background(&mut self, tint: Option<Color>);
    fn set_visible(&mut self, visible: bool);
    /// Re-renders the glyph from the current size, color and tint.
    fn update_image(&mut self);
}

/// Window-level operations.
pub trait WindowHost {
    /// `None` restores the default cursor.
    fn set_cursor(&mut self, cursor: Option<Cursor>);
    fn minimize(&mut self);
    fn quit(&mut self);
    fn take_screenshot(&mut self);
}

/// Modal free-form color picker.
pub trait ColorDialog {
    /// Blocks until the user confirms (`Some`) or cancels (`None`).
    fn pick(&mut self, initial: Color, title: &str) -> Option<Color>;
}

/// Resolves icon identifiers; unresolved icons render as broken, never fail.
pub trait IconResolver {
    fn resolves(&self, icon: IconRef) -> bool;
}

/// Everything the panel talks to, bundled for injection.
pub struct Host {
    pub drawing: Box<dyn DrawingSurface>,
    pub background: Box<dyn BackgroundSurface>,
    pub preview: Box<dyn PreviewSurface>,
    pub window: Box<dyn WindowHost>,
    pub color_dialog: Box<dyn ColorDialog>,
    pub store: Box<dyn SettingsStore>,
}
