//! Page geometry.
//!
//! Pure functions computing fixed page sizes from the sizes of their
//! children. Controllers call them again after any visibility change.

use super::metrics::DisplayMetrics;
use crate::draw::palette::{SWATCHES, SWATCH_ROW_SIZE, swatch_rows};

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A child of a vertical page, possibly hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Child {
    pub size: Size,
    pub visible: bool,
}

impl Child {
    pub fn new(size: Size, visible: bool) -> Self {
        Self { size, visible }
    }
}

/// Size of a vertical stack with `padding` margins and no spacing.
///
/// Hidden children contribute nothing.
pub fn column_size(children: &[Child], padding: u32) -> Size {
    let visible = children.iter().filter(|c| c.visible);
    let (width, height) = visible.fold((0, 0), |(w, h), c| {
        (w.max(c.size.width), h + c.size.height)
    });
    Size::new(width + padding * 2, height + padding * 2)
}

/// Size of a horizontal row of buttons.
///
/// Width is the sum of the children plus margins; height grows to the
/// tallest child plus one padding once any child exceeds the margins.
pub fn row_size(children: &[Size], padding: u32) -> Size {
    let mut width = padding * 2;
    let mut height = padding * 2;
    for child in children {
        if child.height > height {
            height = child.height + padding;
        }
        width += child.width;
    }
    Size::new(width, height)
}

/// The swatch grid: picker plus every swatch, `SWATCH_ROW_SIZE` per row.
pub fn swatch_grid_size(metrics: &DisplayMetrics) -> Size {
    let cell = metrics.icon_size();
    let pad = DisplayMetrics::PAGE_PADDING;
    let columns = SWATCH_ROW_SIZE as u32;
    let full_rows = (SWATCHES.len() / SWATCH_ROW_SIZE) as u32;
    Size::new(
        cell * columns + pad * columns,
        cell * swatch_rows() as u32 + pad * full_rows,
    )
}

/// Fixed child sizes of the tool settings page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolPageLayout {
    pub preview: Size,
    pub size_caption: Size,
    pub slider: Size,
    pub color_caption: Size,
    pub swatch_grid: Size,
}

impl ToolPageLayout {
    pub fn new(metrics: &DisplayMetrics) -> Self {
        let grid = swatch_grid_size(metrics);
        let cell = metrics.icon_size();
        Self {
            preview: Size::new(grid.width, cell * 3),
            size_caption: Size::new(grid.width, cell / 2),
            slider: Size::new(grid.width, cell),
            color_caption: Size::new(grid.width, cell / 2),
            swatch_grid: grid,
        }
    }

    /// Page size with the color controls (preview, caption, grid) shown or hidden.
    pub fn page_size(&self, color_controls_visible: bool) -> Size {
        column_size(
            &[
                Child::new(self.preview, color_controls_visible),
                Child::new(self.size_caption, true),
                Child::new(self.slider, true),
                Child::new(self.color_caption, color_controls_visible),
                Child::new(self.swatch_grid, color_controls_visible),
            ],
            DisplayMetrics::PAGE_PADDING,
        )
    }
}

/// Background page: page navigation, background and overlay rows stacked.
pub fn background_page_size(row: Size) -> Size {
    let pad = DisplayMetrics::PAGE_PADDING;
    Size::new(row.width + pad * 2, row.height * 3 + pad * 3)
}

/// Confirmation page sized from its prompt length.
pub fn confirm_page_size(metrics: &DisplayMetrics, prompt: &str) -> Size {
    let chars = prompt.chars().count() as u32;
    Size::new(
        metrics.screen_width * chars / 169,
        metrics.screen_height / 12,
    )
}
