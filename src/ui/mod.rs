//! Control models: buttons, the size slider, icons and page geometry.
//!
//! These are toolkit-neutral descriptions of what the host should draw. The
//! panel controllers own them and update them; a host renders them.

pub mod button;
pub mod icons;
pub mod layout;
pub mod metrics;
pub mod slider;

pub use button::{Button, ButtonId, IconButtonFactory, IconState};
pub use layout::Size;
pub use metrics::DisplayMetrics;
pub use slider::SizeSlider;
