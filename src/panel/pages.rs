//! The paged settings panel.

use crate::ui::Size;
use log::{debug, warn};

/// Stable index of a page inside the [`SettingsPanel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(usize);

impl PageId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// What a page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    ToolSettings,
    Background,
    ClearConfirm,
    ExitConfirm,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToolSettings => "tool-settings",
            Self::Background => "background",
            Self::ClearConfirm => "clear-confirm",
            Self::ExitConfirm => "exit-confirm",
        }
    }
}

/// One screen of settings content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    kind: PageKind,
    size: Size,
}

impl Page {
    pub fn new(kind: PageKind, size: Size) -> Self {
        Self { kind, size }
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

/// Visibility of the panel as seen by the rest of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Hidden,
    ShowingPage(PageId),
}

/// Ordered, append-only set of pages showing at most one at a time.
///
/// Pages are addressed by the [`PageId`] returned from [`add_page`]; ids stay
/// valid for the panel's lifetime because pages are never removed.
///
/// [`add_page`]: SettingsPanel::add_page
#[derive(Debug, Default)]
pub struct SettingsPanel {
    pages: Vec<Page>,
    current: Option<PageId>,
    visible: bool,
    size: Size,
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a page and returns its id.
    pub fn add_page(&mut self, page: Page) -> PageId {
        let id = PageId(self.pages.len());
        debug!("Added {:?} page at index {}", page.kind, id.0);
        self.pages.push(page);
        id
    }

    /// Selects `id` and shows the panel.
    ///
    /// Returns false, leaving the panel untouched, when `id` does not belong
    /// to this panel.
    pub fn set_page(&mut self, id: PageId) -> bool {
        if id.0 >= self.pages.len() {
            warn!(
                "Ignoring request for page {} (panel has {})",
                id.0,
                self.pages.len()
            );
            return false;
        }
        self.current = Some(id);
        self.visible = true;
        self.reload();
        true
    }

    /// Hides the panel; the selected page is kept.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Shows the panel on the selected page, if one was ever selected.
    pub fn show(&mut self) {
        if self.current.is_some() {
            self.visible = true;
        }
    }

    /// Fixes the size of page `id`. Unknown ids are ignored.
    pub fn resize_page(&mut self, id: PageId, size: Size) {
        match self.pages.get_mut(id.0) {
            Some(page) => page.size = size,
            None => warn!("Cannot resize unknown page {}", id.0),
        }
    }

    /// Recomputes the panel size from the selected page.
    pub fn reload(&mut self) {
        self.size = self.current_page().map(Page::size).unwrap_or_default();
    }

    pub fn state(&self) -> PanelState {
        match (self.visible, self.current) {
            (true, Some(id)) => PanelState::ShowingPage(id),
            _ => PanelState::Hidden,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state() != PanelState::Hidden
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.current.and_then(|id| self.pages.get(id.0))
    }

    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.get(id.0)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Current outer size.
    pub fn size(&self) -> Size {
        self.size
    }
}
