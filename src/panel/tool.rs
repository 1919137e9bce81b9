//! Tool selection, stroke size and stroke color.

use super::pages::{Page, PageId, PageKind, SettingsPanel};
use super::suppress::SuppressionFlag;
use super::PanelContext;
use crate::draw::palette::{self, SWATCHES};
use crate::draw::Color;
use crate::host::{Cursor, DrawingSurface};
use crate::input::{Action, ToolKind};
use crate::settings::COLOR_KEY;
use crate::ui::layout::ToolPageLayout;
use crate::ui::{icons, Button, IconButtonFactory, SizeSlider};
use log::{debug, info, warn};

/// Title of the free-form color dialog.
const COLOR_DIALOG_TITLE: &str = "Select Color";

/// Active tool, remembered size per tool and the shared stroke color.
///
/// Every size is kept inside its tool's range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    active: ToolKind,
    sizes: [u32; 3],
    color: Color,
}

impl ToolConfig {
    /// Creates a config, clamping each size into its tool's range.
    pub fn new(active: ToolKind, sizes: [u32; 3], color: Color) -> Self {
        let mut config = Self {
            active,
            sizes,
            color,
        };
        for kind in ToolKind::ALL {
            config.set_size(kind, sizes[kind.index()]);
        }
        config
    }

    /// Mirrors the drawing surface's current tool state.
    pub fn from_surface(surface: &dyn DrawingSurface) -> Self {
        Self::new(
            surface.active_tool(),
            ToolKind::ALL.map(|kind| surface.tool_size(kind)),
            surface.stroke_color(),
        )
    }

    pub fn active(&self) -> ToolKind {
        self.active
    }

    pub fn size(&self, kind: ToolKind) -> u32 {
        self.sizes[kind.index()]
    }

    pub fn active_size(&self) -> u32 {
        self.size(self.active)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    fn set_size(&mut self, kind: ToolKind, size: u32) {
        self.sizes[kind.index()] = kind.clamp_size(size);
    }
}

/// Owns the tool buttons, the size slider, the color grid and [`ToolConfig`].
pub struct ToolController {
    config: ToolConfig,
    tool_buttons: [Button; 3],
    settings_button: Button,
    slider: SizeSlider,
    size_caption: String,
    color_caption: String,
    picker_button: Button,
    swatch_buttons: Vec<Button>,
    color_controls_visible: bool,
    layout: ToolPageLayout,
    page: PageId,
    suppression: SuppressionFlag,
}

impl ToolController {
    /// Builds the controls and registers the tool settings page.
    ///
    /// Captions, highlights and the preview are filled in by the first
    /// [`sync_style`](Self::sync_style).
    pub fn new(
        config: ToolConfig,
        factory: &mut IconButtonFactory,
        panel: &mut SettingsPanel,
    ) -> Self {
        let tool_buttons =
            ToolKind::ALL.map(|kind| factory.create_icon_button(kind.icon(), Action::SelectTool(kind)));
        let settings_button =
            factory.create_icon_button(icons::PEN_SETTINGS, Action::OpenToolSettings);
        let picker_button =
            factory.create_icon_button(icons::COLOR_PICKER, Action::OpenColorPicker);
        let swatch_buttons = SWATCHES
            .iter()
            .enumerate()
            .map(|(index, color)| factory.create_swatch_button(*color, Action::PickSwatch(index)))
            .collect();

        let active = config.active();
        let slider = SizeSlider::new(active.size_range(), config.size(active));
        let layout = ToolPageLayout::new(factory.metrics());
        let page = panel.add_page(Page::new(PageKind::ToolSettings, layout.page_size(true)));

        Self {
            config,
            tool_buttons,
            settings_button,
            slider,
            size_caption: String::new(),
            color_caption: String::new(),
            picker_button,
            swatch_buttons,
            color_controls_visible: true,
            layout,
            page,
            suppression: SuppressionFlag::new(),
        }
    }

    /// Makes `kind` the active tool.
    ///
    /// Reselecting the active tool only hides the panel. Otherwise the slider
    /// is rewritten to the new tool's range and remembered size under
    /// suppression, so its change notifications cannot overwrite sizes.
    pub fn select_tool(&mut self, kind: ToolKind, cx: &mut PanelContext<'_>) {
        if kind == self.config.active {
            debug!("{} already active, hiding panel", kind.label());
            cx.panel.hide();
            return;
        }

        let _guard = self.suppression.begin();
        info!("Tool changed to {}", kind.label());
        self.config.active = kind;
        cx.host.drawing.set_active_tool(kind);

        if let Some(value) = self.slider.set_range(kind.size_range()) {
            self.on_size_changed(value, cx);
        }
        if let Some(value) = self.slider.set_value(self.config.size(kind)) {
            self.on_size_changed(value, cx);
        }
        self.sync_style(cx);
    }

    /// Change notification from the size slider.
    pub fn on_size_changed(&mut self, value: u32, cx: &mut PanelContext<'_>) {
        if self.suppression.is_set() {
            debug!("Slider moved to {value} during rewrite, not stored");
            self.refresh_size_display(cx);
            return;
        }

        let kind = self.config.active;
        self.config.set_size(kind, value);
        let size = self.config.size(kind);
        cx.host.drawing.set_tool_size(kind, size);
        if let Err(err) = cx.host.store.set_int(kind.settings_key(), i64::from(size)) {
            warn!("Failed to persist {}: {:#}", kind.settings_key(), err);
        }
        debug!("{} size set to {}", kind.label(), size);
        self.sync_style(cx);
    }

    /// User drag of the slider to `value`.
    ///
    /// Like a real slider, nothing is notified when the clamped value does
    /// not change.
    pub fn user_set_size(&mut self, value: u32, cx: &mut PanelContext<'_>) {
        if let Some(value) = self.slider.set_value(value) {
            self.on_size_changed(value, cx);
        }
    }

    /// Applies a color chosen from a swatch or the picker.
    ///
    /// `None` means the picker was cancelled and nothing changes. Returns
    /// true when the color was applied so the caller can restyle the
    /// background buttons too.
    pub fn on_color_picked(&mut self, color: Option<Color>, cx: &mut PanelContext<'_>) -> bool {
        let Some(color) = color else {
            debug!("Color selection cancelled");
            return false;
        };

        self.config.color = color;
        cx.host.drawing.set_stroke_color(color);
        if let Err(err) = cx.host.store.set_string(COLOR_KEY, &color.to_hex()) {
            warn!("Failed to persist {}: {:#}", COLOR_KEY, err);
        }
        info!("Stroke color set to {}", color);
        self.sync_style(cx);
        true
    }

    /// Applies swatch `index`; unknown indices are ignored.
    pub fn pick_swatch(&mut self, index: usize, cx: &mut PanelContext<'_>) -> bool {
        match palette::swatch(index) {
            Some(color) => self.on_color_picked(Some(color), cx),
            None => {
                warn!("No swatch at index {index}");
                false
            }
        }
    }

    /// Runs the modal color dialog seeded with the current color.
    pub fn open_color_picker(&mut self, cx: &mut PanelContext<'_>) -> bool {
        let picked = cx.host.color_dialog.pick(self.config.color, COLOR_DIALOG_TITLE);
        self.on_color_picked(picked, cx)
    }

    /// Highlights the active tool button with the stroke color.
    pub fn sync_tool_buttons(&mut self) {
        for button in &mut self.tool_buttons {
            button.set_highlight(None);
        }
        let active = self.config.active.index();
        self.tool_buttons[active].set_highlight(Some(self.config.color));
    }

    /// Brings every control, the preview, the cursor and the page size in
    /// line with the current config. Never persists.
    pub fn sync_style(&mut self, cx: &mut PanelContext<'_>) {
        self.sync_tool_buttons();

        let active = self.config.active;
        let size = self.config.size(active);
        self.color_caption = format!("{} Color:", active.label());

        let erasing = active == ToolKind::Eraser;
        self.set_color_controls_visible(!erasing);
        cx.host.preview.set_visible(!erasing);
        cx.host.window.set_cursor(erasing.then_some(Cursor {
            icon: icons::CIRCLE,
            size,
        }));
        cx.panel
            .resize_page(self.page, self.layout.page_size(!erasing));

        self.refresh_size_display(cx);
        cx.panel.reload();
    }

    fn refresh_size_display(&mut self, cx: &mut PanelContext<'_>) {
        let active = self.config.active;
        let size = self.config.size(active);
        self.size_caption = format!("{} Size: {}", active.label(), size);
        cx.host.preview.set_pen(size, self.config.color);
        cx.host.preview.update_image();
    }

    fn set_color_controls_visible(&mut self, visible: bool) {
        self.color_controls_visible = visible;
        self.picker_button.set_visible(visible);
        for button in &mut self.swatch_buttons {
            button.set_visible(visible);
        }
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    pub fn tool_button(&self, kind: ToolKind) -> &Button {
        &self.tool_buttons[kind.index()]
    }

    pub fn tool_buttons(&self) -> &[Button] {
        &self.tool_buttons
    }

    pub fn settings_button(&self) -> &Button {
        &self.settings_button
    }

    pub fn slider(&self) -> &SizeSlider {
        &self.slider
    }

    pub fn size_caption(&self) -> &str {
        &self.size_caption
    }

    pub fn color_caption(&self) -> &str {
        &self.color_caption
    }

    pub fn picker_button(&self) -> &Button {
        &self.picker_button
    }

    pub fn swatch_buttons(&self) -> &[Button] {
        &self.swatch_buttons
    }

    /// Whether the color caption, grid and preview are shown.
    pub fn color_controls_visible(&self) -> bool {
        self.color_controls_visible
    }

    pub fn page(&self) -> PageId {
        self.page
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppression.is_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_sizes_into_tool_ranges() {
        let config = ToolConfig::new(ToolKind::Pen, [0, 500, 5], crate::draw::RED);
        assert_eq!(config.size(ToolKind::Pen), 1);
        assert_eq!(config.size(ToolKind::Marker), 100);
        assert_eq!(config.size(ToolKind::Eraser), 31);
    }

    #[test]
    fn config_mirrors_surface() {
        use crate::host::headless::HeadlessSurface;

        let mut surface = HeadlessSurface::new();
        surface.set_active_tool(ToolKind::Marker);
        surface.set_tool_size(ToolKind::Marker, 42);
        surface.set_stroke_color(crate::draw::BLUE);

        let config = ToolConfig::from_surface(&surface);
        assert_eq!(config.active(), ToolKind::Marker);
        assert_eq!(config.active_size(), 42);
        assert_eq!(config.size(ToolKind::Pen), 3);
        assert_eq!(config.color(), crate::draw::BLUE);
    }
}
