//! Drawing tool selection.

use std::ops::RangeInclusive;
use std::str::FromStr;

/// Drawing tool selection.
///
/// Exactly one tool is active at a time. Each tool remembers its own stroke
/// size; the stroke color is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// Freehand pen (1-31 px)
    Pen,
    /// Wide translucent marker (1-100 px)
    Marker,
    /// Eraser (31-310 px), ignores the stroke color
    Eraser,
}

impl ToolKind {
    /// All tools, in button order.
    pub const ALL: [ToolKind; 3] = [ToolKind::Pen, ToolKind::Marker, ToolKind::Eraser];

    /// Allowed stroke sizes for this tool.
    pub fn size_range(&self) -> RangeInclusive<u32> {
        match self {
            Self::Pen => 1..=31,
            Self::Marker => 1..=100,
            Self::Eraser => 31..=310,
        }
    }

    /// Clamps `size` into this tool's range.
    pub fn clamp_size(&self, size: u32) -> u32 {
        let range = self.size_range();
        size.clamp(*range.start(), *range.end())
    }

    /// Settings key under which this tool's size is persisted.
    pub fn settings_key(&self) -> &'static str {
        match self {
            Self::Pen => "pen-size",
            Self::Marker => "marker-size",
            Self::Eraser => "eraser-size",
        }
    }

    /// Display name used in the settings captions.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pen => "Pen",
            Self::Marker => "Marker",
            Self::Eraser => "Eraser",
        }
    }

    /// Icon of the tool's selection button.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Pen => ":images/pen.svg",
            Self::Marker => ":images/marker.svg",
            Self::Eraser => ":images/eraser.svg",
        }
    }

    /// Position of this tool in [`ToolKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Pen => 0,
            Self::Marker => 1,
            Self::Eraser => 2,
        }
    }
}

impl Default for ToolKind {
    fn default() -> Self {
        Self::Pen
    }
}

impl FromStr for ToolKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pen" => Ok(Self::Pen),
            "marker" => Ok(Self::Marker),
            "eraser" => Ok(Self::Eraser),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_match_tool() {
        assert_eq!(ToolKind::Pen.size_range(), 1..=31);
        assert_eq!(ToolKind::Marker.size_range(), 1..=100);
        assert_eq!(ToolKind::Eraser.size_range(), 31..=310);
    }

    #[test]
    fn clamp_size_respects_bounds() {
        assert_eq!(ToolKind::Pen.clamp_size(0), 1);
        assert_eq!(ToolKind::Pen.clamp_size(40), 31);
        assert_eq!(ToolKind::Eraser.clamp_size(3), 31);
        assert_eq!(ToolKind::Marker.clamp_size(42), 42);
    }

    #[test]
    fn settings_keys_are_distinct() {
        assert_eq!(ToolKind::Pen.settings_key(), "pen-size");
        assert_eq!(ToolKind::Marker.settings_key(), "marker-size");
        assert_eq!(ToolKind::Eraser.settings_key(), "eraser-size");
    }

    #[test]
    fn index_matches_all_order() {
        for (i, kind) in ToolKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("Marker".parse::<ToolKind>(), Ok(ToolKind::Marker));
        assert!("brush".parse::<ToolKind>().is_err());
    }
}
