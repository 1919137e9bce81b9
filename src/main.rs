use anyhow::{Context, Result};
use clap::Parser;
use scribe_panel::Config;
use scribe_panel::draw::Color;
use scribe_panel::host::headless::{
    HeadlessSurface, HeadlessWindow, RecordingPreview, ScriptedColorDialog, StaticIcons,
};
use scribe_panel::host::preview::CairoPreview;
use scribe_panel::host::{Host, PreviewSurface};
use scribe_panel::input::{PanelEvent, ToolKind};
use scribe_panel::panel::{PanelAssembly, PanelState};
use scribe_panel::settings::{self, FileStore, MemoryStore, SettingsStore};
use scribe_panel::ui::DisplayMetrics;
use scribe_panel::ui::layout::ToolPageLayout;
use scribe_panel::util::color_to_name;
use std::path::PathBuf;
use std::str::FromStr;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SCRIBE_PANEL_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "scribe-panel")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Floating tool and background panel for screen annotation overlays"
)]
struct Cli {
    /// Panel event to apply, in order (e.g. tool:marker, size:42, background:black)
    #[arg(long = "event", short = 'e', value_name = "EVENT")]
    events: Vec<PanelEvent>,

    /// Answer for each color dialog the events open (#rrggbb or "cancel")
    #[arg(long = "color-response", value_name = "COLOR")]
    color_responses: Vec<ColorResponse>,

    /// Config file (defaults to ~/.config/scribe-panel/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Settings file (defaults to ~/.config/scribe-panel/settings.toml)
    #[arg(long, value_name = "PATH", conflicts_with = "no_persist")]
    settings: Option<PathBuf>,

    /// Keep changed settings in memory only
    #[arg(long)]
    no_persist: bool,

    /// Write the stroke preview to a PNG file after all events
    #[arg(long, value_name = "PNG")]
    preview: Option<PathBuf>,
}

/// Scripted answer of the modal color dialog.
#[derive(Debug, Clone, Copy)]
struct ColorResponse(Option<Color>);

impl FromStr for ColorResponse {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("cancel") {
            return Ok(Self(None));
        }
        Color::from_hex(s)
            .map(|color| Self(Some(color)))
            .map_err(|err| err.to_string())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let store: Box<dyn SettingsStore> = if cli.no_persist {
        Box::new(MemoryStore::new())
    } else {
        let path = match cli.settings {
            Some(path) => path,
            None => FileStore::default_path()?,
        };
        Box::new(FileStore::open(path)?)
    };

    let mut surface = HeadlessSurface::with_background(config.default_background());
    settings::restore_drawing_surface(&*store, &config.drawing, &mut surface);

    let preview = RecordingPreview::new();
    let window = HeadlessWindow::new();
    let dialog = ScriptedColorDialog::new();
    for response in &cli.color_responses {
        dialog.push_response(response.0);
    }

    let host = Host {
        drawing: Box::new(surface.clone()),
        background: Box::new(surface.clone()),
        preview: Box::new(preview.clone()),
        window: Box::new(window.clone()),
        color_dialog: Box::new(dialog),
        store,
    };
    let mut assembly = PanelAssembly::new(&config, host, Box::new(StaticIcons::bundled()));

    for event in cli.events {
        log::debug!("Applying event {event}");
        assembly.handle_event(event);
        if window.quit_requested() {
            log::info!("Exit confirmed, skipping remaining events");
            break;
        }
    }

    if let Some(path) = &cli.preview {
        let size = ToolPageLayout::new(&DisplayMetrics::from(&config.display)).preview;
        let record = preview.record();
        let width = i32::try_from(size.width).context("preview width out of range")?;
        let height = i32::try_from(size.height).context("preview height out of range")?;
        let mut png = CairoPreview::new(width, height);
        png.set_background(record.tint);
        png.set_pen(record.size, record.color);
        png.update_image();
        png.write_png(path)?;
        log::info!("Wrote preview to {}", path.display());
    }

    print_summary(&assembly, &surface, &window);
    Ok(())
}

fn print_summary(assembly: &PanelAssembly, surface: &HeadlessSurface, window: &HeadlessWindow) {
    let tools = assembly.tools().config();
    let board = assembly.board().state();

    println!("tool: {}", tools.active().label().to_lowercase());
    let sizes: Vec<String> = ToolKind::ALL
        .iter()
        .map(|kind| format!("{}={}", kind.settings_key(), tools.size(*kind)))
        .collect();
    println!("sizes: {}", sizes.join(" "));
    println!("color: {} ({})", tools.color(), color_to_name(&tools.color()));
    println!("background: {}", board.background.as_str());
    println!("overlay: {}", board.overlay.as_str());
    println!("page: {}", assembly.board().page_label());

    let panel = match assembly.state() {
        PanelState::Hidden => "hidden".to_string(),
        PanelState::ShowingPage(id) => match assembly.panel().page(id) {
            Some(page) => format!("showing {}", page.kind().as_str()),
            None => format!("showing page {}", id.index()),
        },
    };
    println!("panel: {panel}");

    match window.cursor() {
        Some(cursor) => println!("cursor: circle ({})", cursor.size),
        None => println!("cursor: default"),
    }
    println!("cleared: {}", surface.clear_count());
    println!("minimized: {}", window.minimize_count());
    println!("quit: {}", if window.quit_requested() { "yes" } else { "no" });
}
