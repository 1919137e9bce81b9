//! Icon identifiers used by the panel.
//!
//! Tool, background and overlay icons live on their enums; the rest are here.

use crate::host::IconRef;
use crate::input::{BackgroundKind, OverlayKind, ToolKind};

pub const PEN_SETTINGS: IconRef = ":images/pen-settings.svg";
pub const COLOR_PICKER: IconRef = ":images/color-picker.svg";
pub const CLEAR: IconRef = ":images/clear.svg";
pub const CLOSE: IconRef = ":images/close.svg";
pub const MINIMIZE: IconRef = ":images/screen.svg";
pub const SCREENSHOT: IconRef = ":images/screenshot.svg";
pub const GO_BACK: IconRef = ":images/go-back.svg";
pub const GO_NEXT: IconRef = ":images/go-next.svg";
/// Fixed cursor used while erasing.
pub const CIRCLE: IconRef = ":images/circle.svg";

/// Every icon the panel may request.
pub fn all() -> Vec<IconRef> {
    let mut icons = vec![
        PEN_SETTINGS,
        COLOR_PICKER,
        CLEAR,
        CLOSE,
        MINIMIZE,
        SCREENSHOT,
        GO_BACK,
        GO_NEXT,
        CIRCLE,
    ];
    icons.extend(ToolKind::ALL.iter().map(|k| k.icon()));
    icons.extend(BackgroundKind::ALL.iter().map(|k| k.icon()));
    icons.extend(OverlayKind::ALL.iter().map(|k| k.icon()));
    icons
}
