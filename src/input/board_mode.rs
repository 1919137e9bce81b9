//! Page background and overlay grid selection.

use crate::draw::{BLACK, Color, WHITE};

/// Page background.
///
/// The drawing surface may keep a separate background per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundKind {
    /// Transparent overlay showing the underlying screen (default)
    Transparent,
    /// Dark paper (blackboard)
    Black,
    /// Light paper (whiteboard)
    White,
}

impl Default for BackgroundKind {
    fn default() -> Self {
        Self::Transparent
    }
}

impl BackgroundKind {
    /// All backgrounds, in button order.
    pub const ALL: [BackgroundKind; 3] = [
        BackgroundKind::Transparent,
        BackgroundKind::Black,
        BackgroundKind::White,
    ];

    /// Paper icon shown on the selection button and on the page-entry button.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Transparent => ":images/paper-transparent.svg",
            Self::Black => ":images/paper-black.svg",
            Self::White => ":images/paper-white.svg",
        }
    }

    /// Tint used behind the stroke preview.
    ///
    /// Transparent returns None (no background fill).
    pub fn preview_tint(&self) -> Option<Color> {
        match self {
            Self::Transparent => None,
            Self::Black => Some(BLACK),
            Self::White => Some(WHITE),
        }
    }

    /// Position of this background in [`BackgroundKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Transparent => 0,
            Self::Black => 1,
            Self::White => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transparent => "transparent",
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

impl std::str::FromStr for BackgroundKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transparent" => Ok(Self::Transparent),
            "black" | "blackboard" => Ok(Self::Black),
            "white" | "whiteboard" => Ok(Self::White),
            _ => Err(()),
        }
    }
}

/// Grid drawn over the page background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverlayKind {
    /// No grid (default)
    #[default]
    None,
    /// Square grid
    Squares,
    /// Ruled lines
    Lines,
}

impl OverlayKind {
    /// All overlays, in button order.
    pub const ALL: [OverlayKind; 3] = [OverlayKind::None, OverlayKind::Squares, OverlayKind::Lines];

    pub fn icon(&self) -> &'static str {
        match self {
            Self::None => ":images/overlay-none.svg",
            Self::Squares => ":images/overlay-squares.svg",
            Self::Lines => ":images/overlay-lines.svg",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Squares => "squares",
            Self::Lines => "lines",
        }
    }
}

impl std::str::FromStr for OverlayKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "squares" => Ok(Self::Squares),
            "lines" => Ok(Self::Lines),
            _ => Err(()),
        }
    }
}
