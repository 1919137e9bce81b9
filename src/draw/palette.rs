//! Fixed swatch palette shown in the tool settings page.

use super::Color;

/// Number of cells per row in the swatch grid (the picker button takes cell 0).
pub const SWATCH_ROW_SIZE: usize = 7;

/// Swatch colors, in grid order.
pub const SWATCHES: [Color; 27] = [
    // row 1 (after the picker button)
    Color::new(0x00, 0x00, 0x00),
    Color::new(0x3c, 0x40, 0x43),
    Color::new(0x5f, 0x63, 0x68),
    Color::new(0x9a, 0xa0, 0xa6),
    Color::new(0xda, 0xdc, 0xe0),
    Color::new(0xff, 0xff, 0xff),
    // row 2
    Color::new(0xf2, 0x8b, 0x82),
    Color::new(0xfd, 0xd6, 0x63),
    Color::new(0x81, 0xc9, 0x95),
    Color::new(0x78, 0xd9, 0xec),
    Color::new(0x8a, 0xb4, 0xf8),
    Color::new(0xc5, 0x8a, 0xf9),
    Color::new(0xee, 0xc9, 0xae),
    // row 3
    Color::new(0xea, 0x43, 0x35),
    Color::new(0xfb, 0xbc, 0x04),
    Color::new(0x34, 0xa8, 0x53),
    Color::new(0x24, 0xc1, 0xe0),
    Color::new(0x42, 0x85, 0xf4),
    Color::new(0xa1, 0x42, 0xf4),
    Color::new(0xe2, 0xa1, 0x85),
    // row 4
    Color::new(0xc5, 0x22, 0x1f),
    Color::new(0xf2, 0x99, 0x00),
    Color::new(0x18, 0x80, 0x38),
    Color::new(0x12, 0xa4, 0xaf),
    Color::new(0x19, 0x67, 0xd2),
    Color::new(0x84, 0x30, 0xce),
    Color::new(0x88, 0x59, 0x45),
];

/// Returns the swatch at `index`, if any.
pub fn swatch(index: usize) -> Option<Color> {
    SWATCHES.get(index).copied()
}

/// Grid cell `(row, column)` of a swatch; the picker button sits at `(0, 0)`.
pub fn swatch_cell(index: usize) -> (usize, usize) {
    ((index + 1) / SWATCH_ROW_SIZE, (index + 1) % SWATCH_ROW_SIZE)
}

/// Number of grid rows needed for the picker plus every swatch.
pub fn swatch_rows() -> usize {
    1 + SWATCHES.len() / SWATCH_ROW_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_occupies_first_cell() {
        assert_eq!(swatch_cell(0), (0, 1));
        assert_eq!(swatch_cell(5), (0, 6));
        assert_eq!(swatch_cell(6), (1, 0));
        assert_eq!(swatch_cell(26), (3, 6));
    }

    #[test]
    fn grid_has_four_rows() {
        assert_eq!(swatch_rows(), 4);
    }

    #[test]
    fn out_of_range_swatch_is_none() {
        assert_eq!(swatch(0), Some(Color::new(0, 0, 0)));
        assert!(swatch(SWATCHES.len()).is_none());
    }
}
