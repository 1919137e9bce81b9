//! Page background, overlay grid and page navigation.

use super::pages::{Page, PageId, PageKind, SettingsPanel};
use super::PanelContext;
use crate::draw::Color;
use crate::input::{Action, BackgroundKind, OverlayKind};
use crate::ui::layout::{background_page_size, row_size};
use crate::ui::{icons, Button, DisplayMetrics, IconButtonFactory, Size};
use log::{debug, info};

/// Background, overlay and page number as last seen on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardState {
    pub background: BackgroundKind,
    pub overlay: OverlayKind,
    /// Owned by the drawing surface; only read back here.
    pub page: usize,
}

/// Owns the background page controls and [`BoardState`].
pub struct BackgroundController {
    state: BoardState,
    entry_button: Button,
    background_buttons: [Button; 3],
    overlay_buttons: [Button; 3],
    previous_page_button: Button,
    next_page_button: Button,
    page_label: String,
    page: PageId,
}

impl BackgroundController {
    /// Builds the controls and registers the background page.
    ///
    /// The entry button starts with the current background's icon.
    pub fn new(
        state: BoardState,
        factory: &mut IconButtonFactory,
        panel: &mut SettingsPanel,
    ) -> Self {
        let entry_button =
            factory.create_icon_button(state.background.icon(), Action::OpenBackground);
        let background_buttons = BackgroundKind::ALL
            .map(|kind| factory.create_icon_button(kind.icon(), Action::SelectBackground(kind)));
        let overlay_buttons = OverlayKind::ALL
            .map(|kind| factory.create_icon_button(kind.icon(), Action::SelectOverlay(kind)));
        let previous_page_button = factory.create_icon_button(icons::GO_BACK, Action::PreviousPage);
        let next_page_button = factory.create_icon_button(icons::GO_NEXT, Action::NextPage);

        // All three rows share the size of the background row.
        let sizes: Vec<Size> = background_buttons.iter().map(Button::size).collect();
        let row = row_size(&sizes, DisplayMetrics::PAGE_PADDING);
        let page = panel.add_page(Page::new(PageKind::Background, background_page_size(row)));

        Self {
            state,
            entry_button,
            background_buttons,
            overlay_buttons,
            previous_page_button,
            next_page_button,
            page_label: state.page.to_string(),
            page,
        }
    }

    /// Sets the page background and restyles the background buttons.
    pub fn select_background(
        &mut self,
        kind: BackgroundKind,
        color: Color,
        cx: &mut PanelContext<'_>,
    ) {
        info!("Background changed to {}", kind.as_str());
        self.state.background = kind;
        cx.host.background.set_background_kind(kind);
        self.sync_style(color, cx);
    }

    /// Sets the overlay grid. Nothing on the panel reflects it.
    pub fn select_overlay(&mut self, kind: OverlayKind, cx: &mut PanelContext<'_>) {
        info!("Overlay changed to {}", kind.as_str());
        self.state.overlay = kind;
        cx.host.background.set_overlay_kind(kind);
    }

    pub fn go_previous_page(&mut self, color: Color, cx: &mut PanelContext<'_>) {
        cx.host.drawing.go_previous_page();
        self.after_paging(color, cx);
    }

    pub fn go_next_page(&mut self, color: Color, cx: &mut PanelContext<'_>) {
        cx.host.drawing.go_next_page();
        self.after_paging(color, cx);
    }

    fn after_paging(&mut self, color: Color, cx: &mut PanelContext<'_>) {
        self.state.page = cx.host.drawing.current_page_number();
        self.page_label = self.state.page.to_string();
        debug!("Now on page {}", self.state.page);
        self.sync_style(color, cx);
    }

    /// Re-reads the surface background and restyles to match.
    ///
    /// The selected background button is highlighted with `color`, the entry
    /// button shows the selected paper and the preview takes its tint.
    pub fn sync_style(&mut self, color: Color, cx: &mut PanelContext<'_>) {
        let kind = cx.host.background.background_kind();
        self.state.background = kind;

        for button in &mut self.background_buttons {
            button.set_highlight(None);
        }
        self.background_buttons[kind.index()].set_highlight(Some(color));
        cx.factory.apply_icon(kind.icon(), &mut self.entry_button);

        cx.host.preview.set_background(kind.preview_tint());
        cx.host.preview.update_image();
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn entry_button(&self) -> &Button {
        &self.entry_button
    }

    pub fn background_button(&self, kind: BackgroundKind) -> &Button {
        &self.background_buttons[kind.index()]
    }

    pub fn background_buttons(&self) -> &[Button] {
        &self.background_buttons
    }

    pub fn overlay_buttons(&self) -> &[Button] {
        &self.overlay_buttons
    }

    pub fn previous_page_button(&self) -> &Button {
        &self.previous_page_button
    }

    pub fn next_page_button(&self) -> &Button {
        &self.next_page_button
    }

    pub fn page_label(&self) -> &str {
        &self.page_label
    }

    pub fn page(&self) -> PageId {
        self.page
    }
}
