//! Actions that panel buttons can be bound to.
//!
//! Every button carries exactly one [`Action`]; the panel assembly dispatches
//! clicks through a `ButtonId -> Action` table instead of per-button closures.

use super::board_mode::{BackgroundKind, OverlayKind};
use super::tool::ToolKind;

/// All possible actions that can be bound to panel buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Tool selection
    SelectTool(ToolKind),
    OpenToolSettings,
    PickSwatch(usize),
    OpenColorPicker,

    // Background page
    OpenBackground,
    SelectBackground(BackgroundKind),
    SelectOverlay(OverlayKind),
    PreviousPage,
    NextPage,

    // Confirmation pages
    OpenClear,
    ConfirmClear,
    OpenExit,
    ConfirmExit,
    Dismiss,

    // Window and document
    Minimize,
    Screenshot,
    GoPrevious,
    GoNext,
}
