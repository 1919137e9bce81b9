//! Panel input events and their textual form.

use super::action::Action;
use super::board_mode::{BackgroundKind, OverlayKind};
use super::tool::ToolKind;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A user interaction with the panel.
///
/// Clicks carry the bound action; slider drags carry the new value and go
/// through the same change notification a programmatic rewrite would.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// A bound button was clicked
    Action(Action),
    /// The size slider was moved by the user
    SizeChanged(u32),
}

/// Error returned for an unparseable event string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEventError {
    #[error("unknown event '{0}'")]
    Unknown(String),
    #[error("invalid argument '{arg}' for event '{event}'")]
    BadArgument { event: String, arg: String },
}

impl FromStr for PanelEvent {
    type Err = ParseEventError;

    /// Parses forms like `tool:marker`, `size:42`, `background:black`, `page-next`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name.trim().to_lowercase(), Some(arg.trim())),
            None => (s.to_lowercase(), None),
        };

        let bad = |arg: &str| ParseEventError::BadArgument {
            event: name.clone(),
            arg: arg.to_string(),
        };

        let action = match (name.as_str(), arg) {
            ("size", Some(arg)) => {
                let value = arg.parse::<u32>().map_err(|_| bad(arg))?;
                return Ok(PanelEvent::SizeChanged(value));
            }
            ("tool", Some(arg)) => Action::SelectTool(arg.parse::<ToolKind>().map_err(|_| bad(arg))?),
            ("swatch", Some(arg)) => Action::PickSwatch(arg.parse::<usize>().map_err(|_| bad(arg))?),
            ("background", Some(arg)) => {
                Action::SelectBackground(arg.parse::<BackgroundKind>().map_err(|_| bad(arg))?)
            }
            ("overlay", Some(arg)) => {
                Action::SelectOverlay(arg.parse::<OverlayKind>().map_err(|_| bad(arg))?)
            }
            ("background", None) => Action::OpenBackground,
            ("settings", None) => Action::OpenToolSettings,
            ("pick-color", None) => Action::OpenColorPicker,
            ("page-prev", None) => Action::PreviousPage,
            ("page-next", None) => Action::NextPage,
            ("clear", None) => Action::OpenClear,
            ("clear-yes", None) => Action::ConfirmClear,
            ("exit", None) => Action::OpenExit,
            ("exit-yes", None) => Action::ConfirmExit,
            ("no", None) => Action::Dismiss,
            ("minimize", None) => Action::Minimize,
            ("screenshot", None) => Action::Screenshot,
            ("back", None) => Action::GoPrevious,
            ("next", None) => Action::GoNext,
            _ => return Err(ParseEventError::Unknown(s.to_string())),
        };

        Ok(PanelEvent::Action(action))
    }
}

impl fmt::Display for PanelEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelEvent::SizeChanged(value) => write!(f, "size:{value}"),
            PanelEvent::Action(action) => match action {
                Action::SelectTool(kind) => write!(f, "tool:{}", kind.label().to_lowercase()),
                Action::PickSwatch(index) => write!(f, "swatch:{index}"),
                Action::SelectBackground(kind) => write!(f, "background:{}", kind.as_str()),
                Action::SelectOverlay(kind) => write!(f, "overlay:{}", kind.as_str()),
                Action::OpenBackground => f.write_str("background"),
                Action::OpenToolSettings => f.write_str("settings"),
                Action::OpenColorPicker => f.write_str("pick-color"),
                Action::PreviousPage => f.write_str("page-prev"),
                Action::NextPage => f.write_str("page-next"),
                Action::OpenClear => f.write_str("clear"),
                Action::ConfirmClear => f.write_str("clear-yes"),
                Action::OpenExit => f.write_str("exit"),
                Action::ConfirmExit => f.write_str("exit-yes"),
                Action::Dismiss => f.write_str("no"),
                Action::Minimize => f.write_str("minimize"),
                Action::Screenshot => f.write_str("screenshot"),
                Action::GoPrevious => f.write_str("back"),
                Action::GoNext => f.write_str("next"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_events_with_arguments() {
        assert_eq!(
            "tool:marker".parse::<PanelEvent>().unwrap(),
            PanelEvent::Action(Action::SelectTool(ToolKind::Marker))
        );
        assert_eq!(
            "size:42".parse::<PanelEvent>().unwrap(),
            PanelEvent::SizeChanged(42)
        );
        assert_eq!(
            "background:black".parse::<PanelEvent>().unwrap(),
            PanelEvent::Action(Action::SelectBackground(BackgroundKind::Black))
        );
        assert_eq!(
            "Overlay : Lines".parse::<PanelEvent>().unwrap(),
            PanelEvent::Action(Action::SelectOverlay(OverlayKind::Lines))
        );
    }

    #[test]
    fn bare_background_opens_the_page() {
        assert_eq!(
            "background".parse::<PanelEvent>().unwrap(),
            PanelEvent::Action(Action::OpenBackground)
        );
    }

    #[test]
    fn rejects_unknown_and_bad_arguments() {
        assert!(matches!(
            "paint".parse::<PanelEvent>(),
            Err(ParseEventError::Unknown(_))
        ));
        assert!(matches!(
            "size:big".parse::<PanelEvent>(),
            Err(ParseEventError::BadArgument { .. })
        ));
        assert!(matches!(
            "tool:brush".parse::<PanelEvent>(),
            Err(ParseEventError::BadArgument { .. })
        ));
    }

    #[test]
    fn display_matches_parse_grammar() {
        for text in ["tool:eraser", "swatch:3", "page-next", "clear-yes", "no", "overlay:squares"] {
            let event: PanelEvent = text.parse().unwrap();
            assert_eq!(event.to_string(), text);
        }
    }
}
