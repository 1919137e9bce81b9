use scribe_panel::config::Config;
use scribe_panel::draw::{BLUE, RED};
use scribe_panel::host::headless::{
    HeadlessSurface, HeadlessWindow, RecordingPreview, ScriptedColorDialog, StaticIcons,
};
use scribe_panel::host::{DrawingSurface, Host};
use scribe_panel::input::{BackgroundKind, PanelEvent, ToolKind};
use scribe_panel::panel::{PanelAssembly, PanelState};
use scribe_panel::settings::{self, FileStore, SettingsStore};
use scribe_panel::ui::{icons, IconState};
use std::path::Path;
use tempfile::TempDir;

struct Session {
    assembly: PanelAssembly,
    surface: HeadlessSurface,
    dialog: ScriptedColorDialog,
}

fn open_session(settings_path: &Path, config: &Config, icons: StaticIcons) -> Session {
    let store = FileStore::open(settings_path).unwrap();
    let mut surface = HeadlessSurface::with_background(config.default_background());
    settings::restore_drawing_surface(&store, &config.drawing, &mut surface);

    let dialog = ScriptedColorDialog::new();
    let host = Host {
        drawing: Box::new(surface.clone()),
        background: Box::new(surface.clone()),
        preview: Box::new(RecordingPreview::new()),
        window: Box::new(HeadlessWindow::new()),
        color_dialog: Box::new(dialog.clone()),
        store: Box::new(store),
    };
    Session {
        assembly: PanelAssembly::new(config, host, Box::new(icons)),
        surface,
        dialog,
    }
}

fn apply(session: &mut Session, events: &[&str]) {
    for event in events {
        let event: PanelEvent = event.parse().unwrap();
        session.assembly.handle_event(event);
    }
}

#[test]
fn settings_survive_restart() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("scribe-panel").join("settings.toml");
    let config = Config::default();

    let mut first = open_session(&path, &config, StaticIcons::bundled());
    first.dialog.push_response(Some(BLUE));
    apply(
        &mut first,
        &["tool:marker", "size:42", "tool:eraser", "size:120", "pick-color"],
    );
    drop(first);

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get_int("marker-size"), Some(42));
    assert_eq!(store.get_int("eraser-size"), Some(120));
    assert_eq!(store.get_int("pen-size"), None);
    assert_eq!(store.get_string("color").as_deref(), Some("#4285f4"));

    let second = open_session(&path, &config, StaticIcons::bundled());
    let tools = second.assembly.tools().config();
    assert_eq!(tools.active(), ToolKind::Pen);
    assert_eq!(tools.size(ToolKind::Marker), 42);
    assert_eq!(tools.size(ToolKind::Eraser), 120);
    assert_eq!(tools.color(), BLUE);
    assert_eq!(
        second.assembly.tools().tool_button(ToolKind::Pen).highlight(),
        Some(BLUE)
    );
}

#[test]
fn configured_default_background_seeds_board() {
    let temp = TempDir::new().unwrap();
    let mut config = Config::default();
    config.board.default_background = "whiteboard".into();

    let mut session = open_session(
        &temp.path().join("settings.toml"),
        &config,
        StaticIcons::bundled(),
    );
    assert_eq!(
        session.assembly.board().state().background,
        BackgroundKind::White
    );
    assert_eq!(
        session.assembly.board().entry_button().icon(),
        IconState::Resolved(BackgroundKind::White.icon())
    );

    // New pages start from the same background
    apply(&mut session, &["background:black", "page-next"]);
    assert_eq!(
        session.assembly.board().state().background,
        BackgroundKind::White
    );
    apply(&mut session, &["page-prev"]);
    assert_eq!(
        session.assembly.board().state().background,
        BackgroundKind::Black
    );
}

#[test]
fn missing_icons_leave_buttons_working() {
    let temp = TempDir::new().unwrap();
    let mut session = open_session(
        &temp.path().join("settings.toml"),
        &Config::default(),
        StaticIcons::without(&[icons::CLEAR, icons::PEN_SETTINGS]),
    );

    let opener = session.assembly.clear_page().opener();
    assert_eq!(opener.icon(), IconState::Broken(icons::CLEAR));
    let id = opener.id();
    session.assembly.click(id);
    assert_eq!(
        session.assembly.state(),
        PanelState::ShowingPage(session.assembly.clear_page().page())
    );

    apply(&mut session, &["clear-yes"]);
    assert_eq!(session.surface.clear_count(), 1);
    assert_eq!(session.assembly.state(), PanelState::Hidden);
}

#[test]
fn scripted_session_matches_expected_state() {
    let temp = TempDir::new().unwrap();
    let mut session = open_session(
        &temp.path().join("settings.toml"),
        &Config::default(),
        StaticIcons::bundled(),
    );
    session.dialog.push_response(None);

    apply(
        &mut session,
        &[
            "settings",
            "tool:pen",
            "pick-color",
            "background",
            "overlay:squares",
            "page-next",
            "page-next",
            "page-prev",
        ],
    );

    // Reselecting the pen closed the page; the background page reopened it
    assert_eq!(
        session.assembly.state(),
        PanelState::ShowingPage(session.assembly.board().page())
    );
    assert_eq!(session.assembly.tools().config().color(), RED);
    assert_eq!(session.assembly.board().page_label(), "1");
    assert_eq!(session.surface.current_page_number(), 1);
    assert_eq!(session.surface.page_count(), 3);
    assert_eq!(session.dialog.requests().len(), 1);
}
