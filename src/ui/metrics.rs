//! Display-relative sizing constants.

use super::layout::Size;
use crate::config::DisplayConfig;

/// Screen metrics every control is sized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMetrics {
    pub screen_width: u32,
    pub screen_height: u32,
}

impl DisplayMetrics {
    /// Gap added around an icon inside its button.
    pub const BUTTON_PADDING: u32 = 3;
    /// Margin and spacing inside settings pages.
    pub const PAGE_PADDING: u32 = 8;

    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        Self {
            screen_width,
            screen_height,
        }
    }

    /// Side of the square icon drawn on buttons.
    pub fn icon_size(&self) -> u32 {
        (self.screen_height / 23).max(1)
    }

    /// Outer size of an icon button: icon plus padding.
    pub fn icon_button_size(&self) -> Size {
        let side = self.icon_size() + Self::BUTTON_PADDING;
        Size::new(side, side)
    }

    /// Point size for button and caption text.
    pub fn font_point_size(&self) -> u32 {
        (self.screen_height / 62).max(1)
    }
}

impl From<&DisplayConfig> for DisplayMetrics {
    fn from(cfg: &DisplayConfig) -> Self {
        Self::new(cfg.screen_width, cfg.screen_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_scale_with_screen_height() {
        let metrics = DisplayMetrics::new(1920, 1080);
        assert_eq!(metrics.icon_size(), 46);
        assert_eq!(metrics.icon_button_size(), Size::new(49, 49));
        assert_eq!(metrics.font_point_size(), 17);
    }

    #[test]
    fn tiny_screens_keep_nonzero_sizes() {
        let metrics = DisplayMetrics::new(10, 10);
        assert_eq!(metrics.icon_size(), 1);
        assert_eq!(metrics.font_point_size(), 1);
    }
}
