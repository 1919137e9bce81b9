//! Panel input vocabulary.
//!
//! This module defines what a panel interaction can mean: the tool and
//! background choices, the actions bound to buttons, and the events the
//! host toolkit (or the headless driver) feeds into the panel assembly.

pub mod action;
pub mod board_mode;
pub mod events;
pub mod tool;

// Re-export commonly used types at module level
pub use action::Action;
pub use board_mode::{BackgroundKind, OverlayKind};
pub use events::{PanelEvent, ParseEventError};
pub use tool::ToolKind;
