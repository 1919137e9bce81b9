//! Library exports for the scribe-panel controllers.
//!
//! The panel logic is toolkit-neutral: a host embeds it by implementing the
//! traits in [`host`] and feeding clicks and slider moves into a
//! [`panel::PanelAssembly`]. The bundled binary drives it against the
//! headless host.

pub mod config;
pub mod draw;
pub mod host;
pub mod input;
pub mod panel;
pub mod settings;
pub mod ui;
pub mod util;

pub use config::Config;
