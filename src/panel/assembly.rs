//! Composition of the whole panel and click dispatch.

use super::background::{BackgroundController, BoardState};
use super::confirm::ConfirmPage;
use super::floating::{FloatingRoot, RootControl};
use super::pages::{PageId, PageKind, PanelState, SettingsPanel};
use super::tool::{ToolConfig, ToolController};
use super::PanelContext;
use crate::config::Config;
use crate::host::{Host, IconResolver};
use crate::input::{Action, OverlayKind, PanelEvent};
use crate::ui::{icons, Button, ButtonId, DisplayMetrics, IconButtonFactory, Size};
use log::{debug, info, warn};

const CLEAR_PROMPT: &str = "Do you want to clear the screen?";
const EXIT_PROMPT: &str = "Do you want to quit?";

/// Owns every controller, the settings panel, the floating root and the host.
///
/// Root controls are registered in a fixed order that determines their
/// on-screen arrangement: move handle, pen, marker, eraser, pen settings,
/// background, clear, minimize, screenshot (when enabled), go back, go next,
/// exit. Pages are added in the order tool settings, background, clear,
/// exit.
pub struct PanelAssembly {
    factory: IconButtonFactory,
    panel: SettingsPanel,
    root: FloatingRoot,
    tools: ToolController,
    board: BackgroundController,
    clear: ConfirmPage,
    exit: ConfirmPage,
    /// Minimize, screenshot, go back and go next
    window_buttons: Vec<Button>,
    host: Host,
}

impl PanelAssembly {
    /// Builds all controls, seeded from the host's current state, and syncs
    /// their style. Nothing is persisted.
    pub fn new(config: &Config, host: Host, resolver: Box<dyn IconResolver>) -> Self {
        let metrics = DisplayMetrics::from(&config.display);
        let mut factory = IconButtonFactory::new(metrics, resolver);
        let mut panel = SettingsPanel::new();
        let mut root = FloatingRoot::new();

        let handle = metrics.icon_size();
        root.register(RootControl::MoveHandle {
            size: Size::new(handle, handle),
        });

        let tools = ToolController::new(
            ToolConfig::from_surface(&*host.drawing),
            &mut factory,
            &mut panel,
        );
        for button in tools.tool_buttons() {
            root.register(RootControl::Button(button.id()));
        }
        root.register(RootControl::Button(tools.settings_button().id()));

        let board_state = BoardState {
            background: host.background.background_kind(),
            overlay: OverlayKind::default(),
            page: host.drawing.current_page_number(),
        };
        let board = BackgroundController::new(board_state, &mut factory, &mut panel);
        root.register(RootControl::Button(board.entry_button().id()));

        let clear = ConfirmPage::new(
            PageKind::ClearConfirm,
            (icons::CLEAR, Action::OpenClear),
            CLEAR_PROMPT,
            Action::ConfirmClear,
            &mut factory,
            &mut panel,
        );
        root.register(RootControl::Button(clear.opener().id()));

        let mut window_buttons = vec![factory.create_icon_button(icons::MINIMIZE, Action::Minimize)];
        if config.ui.show_screenshot_button {
            window_buttons.push(factory.create_icon_button(icons::SCREENSHOT, Action::Screenshot));
        }
        window_buttons.push(factory.create_icon_button(icons::GO_BACK, Action::GoPrevious));
        window_buttons.push(factory.create_icon_button(icons::GO_NEXT, Action::GoNext));
        for button in &window_buttons {
            root.register(RootControl::Button(button.id()));
        }

        let exit = ConfirmPage::new(
            PageKind::ExitConfirm,
            (icons::CLOSE, Action::OpenExit),
            EXIT_PROMPT,
            Action::ConfirmExit,
            &mut factory,
            &mut panel,
        );
        root.register(RootControl::Button(exit.opener().id()));

        info!(
            "Panel ready: {} root controls, {} pages, {} bound buttons",
            root.controls().len(),
            panel.page_count(),
            factory.binding_count()
        );

        let mut assembly = Self {
            factory,
            panel,
            root,
            tools,
            board,
            clear,
            exit,
            window_buttons,
            host,
        };
        assembly.sync_style();
        assembly
    }

    /// Routes a click through the dispatch table.
    pub fn click(&mut self, id: ButtonId) {
        match self.factory.action_for(id) {
            Some(action) => self.dispatch(action),
            None => warn!("Click on unbound button {}", id.raw()),
        }
    }

    pub fn handle_event(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::Action(action) => self.dispatch(action),
            PanelEvent::SizeChanged(value) => {
                let Self {
                    factory,
                    panel,
                    tools,
                    host,
                    ..
                } = self;
                let mut cx = PanelContext {
                    panel,
                    factory,
                    host,
                };
                tools.user_set_size(value, &mut cx);
            }
        }
    }

    /// Runs the handler bound to `action`.
    pub fn dispatch(&mut self, action: Action) {
        debug!("Dispatching {:?}", action);
        let Self {
            factory,
            panel,
            root,
            tools,
            board,
            clear,
            exit,
            host,
            ..
        } = self;
        let mut cx = PanelContext {
            panel,
            factory,
            host,
        };
        let color = tools.config().color();

        match action {
            Action::SelectTool(kind) => tools.select_tool(kind, &mut cx),
            Action::OpenToolSettings => {
                open_page(cx.panel, root, tools.page(), tools.settings_button().id())
            }
            Action::PickSwatch(index) => {
                if tools.pick_swatch(index, &mut cx) {
                    board.sync_style(tools.config().color(), &mut cx);
                }
            }
            Action::OpenColorPicker => {
                if tools.open_color_picker(&mut cx) {
                    board.sync_style(tools.config().color(), &mut cx);
                }
            }
            Action::OpenBackground => {
                open_page(cx.panel, root, board.page(), board.entry_button().id())
            }
            Action::SelectBackground(kind) => board.select_background(kind, color, &mut cx),
            Action::SelectOverlay(kind) => board.select_overlay(kind, &mut cx),
            Action::PreviousPage => board.go_previous_page(color, &mut cx),
            Action::NextPage => board.go_next_page(color, &mut cx),
            Action::OpenClear => open_page(cx.panel, root, clear.page(), clear.opener().id()),
            Action::ConfirmClear => {
                info!("Clearing the drawing surface");
                cx.host.drawing.clear();
                cx.panel.hide();
            }
            Action::OpenExit => open_page(cx.panel, root, exit.page(), exit.opener().id()),
            Action::ConfirmExit => {
                info!("Exit confirmed");
                cx.host.window.quit();
                cx.panel.hide();
            }
            Action::Dismiss => cx.panel.hide(),
            Action::Minimize => cx.host.window.minimize(),
            Action::Screenshot => {
                cx.panel.hide();
                root.hide();
                cx.host.window.take_screenshot();
                root.show();
            }
            Action::GoPrevious => cx.host.drawing.go_previous(),
            Action::GoNext => cx.host.drawing.go_next(),
        }
    }

    fn sync_style(&mut self) {
        let Self {
            factory,
            panel,
            tools,
            board,
            host,
            ..
        } = self;
        let mut cx = PanelContext {
            panel,
            factory,
            host,
        };
        tools.sync_style(&mut cx);
        board.sync_style(tools.config().color(), &mut cx);
    }

    pub fn state(&self) -> PanelState {
        self.panel.state()
    }

    pub fn panel(&self) -> &SettingsPanel {
        &self.panel
    }

    pub fn root(&self) -> &FloatingRoot {
        &self.root
    }

    pub fn tools(&self) -> &ToolController {
        &self.tools
    }

    pub fn board(&self) -> &BackgroundController {
        &self.board
    }

    pub fn clear_page(&self) -> &ConfirmPage {
        &self.clear
    }

    pub fn exit_page(&self) -> &ConfirmPage {
        &self.exit
    }

    pub fn window_buttons(&self) -> &[Button] {
        &self.window_buttons
    }

    pub fn factory(&self) -> &IconButtonFactory {
        &self.factory
    }
}

/// Shows `page` anchored next to the root control that opened it.
fn open_page(panel: &mut SettingsPanel, root: &mut FloatingRoot, page: PageId, opener: ButtonId) {
    if !panel.set_page(page) {
        return;
    }
    match root.slot_of(opener) {
        Some(slot) => root.set_floating_offset(slot),
        None => warn!("Button {} is not on the floating root", opener.raw()),
    }
}
