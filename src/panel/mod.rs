//! Controllers for the floating settings panel.
//!
//! The [`PanelAssembly`] owns every controller, the settings panel, the
//! floating root and the [`Host`]. Controllers own their controls and state;
//! they reach shared collaborators only through a [`PanelContext`] handed to
//! each call, so no handler holds a reference beyond the call it serves.

mod assembly;
mod background;
mod confirm;
mod floating;
mod pages;
mod suppress;
mod tool;


pub use assembly::PanelAssembly;
pub use background::{BackgroundController, BoardState};
pub use confirm::ConfirmPage;
pub use floating::{FloatingRoot, RootControl};
pub use pages::{Page, PageId, PageKind, PanelState, SettingsPanel};
pub use suppress::{SuppressionFlag, SuppressionGuard};
pub use tool::{ToolConfig, ToolController};

use crate::host::Host;
use crate::ui::IconButtonFactory;

/// Collaborators borrowed by a controller for the duration of one handler.
pub struct PanelContext<'a> {
    pub panel: &'a mut SettingsPanel,
    pub factory: &'a IconButtonFactory,
    pub host: &'a mut Host,
}
