//! Clickable controls and the factory that binds them to actions.

use super::layout::Size;
use super::metrics::DisplayMetrics;
use crate::draw::Color;
use crate::host::{IconRef, IconResolver};
use crate::input::Action;
use log::{debug, warn};
use std::collections::HashMap;

/// Stable identity of a button, used to route clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(u32);

impl ButtonId {
    pub fn raw(&self) -> u32 {
        self.0
    }
}

/// Icon shown on a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconState {
    /// Text or swatch button
    None,
    Resolved(IconRef),
    /// The resolver did not know the icon; drawn blank
    Broken(IconRef),
}

/// A flat button bound to a single [`Action`] for its whole lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    id: ButtonId,
    action: Action,
    label: Option<String>,
    icon: IconState,
    icon_size: u32,
    size: Size,
    font_point_size: u32,
    flat: bool,
    /// Solid fill of a swatch button
    fill: Option<Color>,
    border: Option<Color>,
    /// Background used to mark the selected choice
    highlight: Option<Color>,
    visible: bool,
}

impl Button {
    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn icon(&self) -> IconState {
        self.icon
    }

    pub fn icon_size(&self) -> u32 {
        self.icon_size
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn font_point_size(&self) -> u32 {
        self.font_point_size
    }

    pub fn is_flat(&self) -> bool {
        self.flat
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn border(&self) -> Option<Color> {
        self.border
    }

    pub fn highlight(&self) -> Option<Color> {
        self.highlight
    }

    pub fn set_highlight(&mut self, highlight: Option<Color>) {
        self.highlight = highlight;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Builds buttons sized from the display and records their click bindings.
///
/// The factory owns the `ButtonId -> Action` dispatch table. Every button it
/// creates gets exactly one entry; a second binding for the same id is refused.
pub struct IconButtonFactory {
    metrics: DisplayMetrics,
    icons: Box<dyn IconResolver>,
    next_id: u32,
    bindings: HashMap<ButtonId, Action>,
}

impl IconButtonFactory {
    pub fn new(metrics: DisplayMetrics, icons: Box<dyn IconResolver>) -> Self {
        Self {
            metrics,
            icons,
            next_id: 0,
            bindings: HashMap::new(),
        }
    }

    pub fn metrics(&self) -> &DisplayMetrics {
        &self.metrics
    }

    /// Square flat button showing `icon`.
    ///
    /// An unknown icon leaves the button blank; it still works.
    pub fn create_icon_button(&mut self, icon: IconRef, action: Action) -> Button {
        let mut button = self.blank(action);
        self.apply_icon(icon, &mut button);
        button
    }

    /// Text-only button sized from the label's font metrics.
    pub fn create_text_button(&mut self, label: &str, action: Action) -> Button {
        let point = self.metrics.font_point_size();
        let chars = label.chars().count() as u32;
        let mut button = self.blank(action);
        button.label = Some(label.to_string());
        button.size = Size::new(
            chars * point * 3 / 5 + point * 2,
            point * 2 + DisplayMetrics::BUTTON_PADDING * 2,
        );
        button.flat = false;
        button
    }

    /// Round color swatch with an outline that contrasts with its fill.
    pub fn create_swatch_button(&mut self, color: Color, action: Action) -> Button {
        let side = self.metrics.icon_size();
        let mut button = self.blank(action);
        button.fill = Some(color);
        button.border = Some(color.contrast_border());
        button.size = Size::new(side, side);
        button
    }

    /// Sets `icon` on `button` and fixes its size to icon plus padding.
    pub fn apply_icon(&self, icon: IconRef, button: &mut Button) {
        button.icon = if self.icons.resolves(icon) {
            IconState::Resolved(icon)
        } else {
            debug!("Icon '{}' not found, button {} drawn blank", icon, button.id.0);
            IconState::Broken(icon)
        };
        button.icon_size = self.metrics.icon_size();
        button.size = self.metrics.icon_button_size();
        button.flat = true;
    }

    /// Action bound to `id`, if the factory created it.
    pub fn action_for(&self, id: ButtonId) -> Option<Action> {
        self.bindings.get(&id).copied()
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Records the click binding for `id`. Returns false if one already exists.
    pub fn bind(&mut self, id: ButtonId, action: Action) -> bool {
        if let Some(existing) = self.bindings.get(&id) {
            warn!(
                "Button {} already bound to {:?}, ignoring rebind to {:?}",
                id.0, existing, action
            );
            return false;
        }
        self.bindings.insert(id, action);
        true
    }

    fn blank(&mut self, action: Action) -> Button {
        let id = ButtonId(self.next_id);
        self.next_id += 1;
        self.bind(id, action);
        Button {
            id,
            action,
            label: None,
            icon: IconState::None,
            icon_size: 0,
            size: Size::default(),
            font_point_size: self.metrics.font_point_size(),
            flat: true,
            fill: None,
            border: None,
            highlight: None,
            visible: true,
        }
    }
}
