//! The always-visible strip of root controls.

use crate::ui::{ButtonId, Size};

/// A control registered on the floating root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootControl {
    /// Drag handle; has no action
    MoveHandle { size: Size },
    Button(ButtonId),
}

/// Floating widget holding the root controls in registration order.
///
/// The settings panel is anchored next to the control at `floating_offset`.
#[derive(Debug)]
pub struct FloatingRoot {
    controls: Vec<RootControl>,
    floating_offset: usize,
    visible: bool,
}

impl Default for FloatingRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl FloatingRoot {
    pub fn new() -> Self {
        Self {
            controls: Vec::new(),
            floating_offset: 0,
            visible: true,
        }
    }

    /// Appends a control and returns its slot.
    pub fn register(&mut self, control: RootControl) -> usize {
        self.controls.push(control);
        self.controls.len() - 1
    }

    pub fn slot_of(&self, id: ButtonId) -> Option<usize> {
        self.controls
            .iter()
            .position(|c| *c == RootControl::Button(id))
    }

    pub fn controls(&self) -> &[RootControl] {
        &self.controls
    }

    pub fn set_floating_offset(&mut self, slot: usize) {
        self.floating_offset = slot;
    }

    pub fn floating_offset(&self) -> usize {
        self.floating_offset
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
