//! Color primitives shared by the panel and the preview renderer.
//!
//! - [`Color`]: RGB stroke color with `#rrggbb` conversion
//! - [`palette`]: the fixed swatch grid offered in the tool settings page

pub mod color;
pub mod palette;

// Re-export commonly used types at module level
pub use color::{Color, ColorParseError};

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
