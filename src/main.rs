//! Tag Overlay Demo - preview host for the overlay widgets
//!
//! Opens one window hosting either the autocomplete dropdown or the
//! related-tags panel, filled with sample rows or a JSON row file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --panel related --mode light
//! cargo run -- --rows rows.json --anchor-x 120 --anchor-y 340
//! cargo run -- --failed "Tag server unreachable"
//! ```
//!
//! Keys: space toggles visibility, up/down move the selection, enter
//! confirms, `t` flips light/dark, escape dismisses.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use gpui::*;
use tracing::{error, info};

use tag_overlay_gpui::config::{self, Appearance};
use tag_overlay_gpui::error::ResultExt;
use tag_overlay_gpui::layout::LayoutConfig;
use tag_overlay_gpui::model::rows_from_json;
use tag_overlay_gpui::theme::{self, service::ensure_theme_service};
use tag_overlay_gpui::{
    logging, Anchor, HeaderAction, HeaderViewModel, OverlayEvent, PanelKind, RowViewModel,
    TagCategory, TagOverlay, Taxonomy, ThemeMode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PanelArg {
    Autocomplete,
    Related,
}

impl From<PanelArg> for PanelKind {
    fn from(arg: PanelArg) -> Self {
        match arg {
            PanelArg::Autocomplete => PanelKind::Autocomplete,
            PanelArg::Related => PanelKind::RelatedTags,
        }
    }
}

/// Preview the tag autocomplete and related-tags overlays.
#[derive(Debug, Parser)]
#[command(name = "tag-overlay-demo", version, about, long_about = None)]
struct Cli {
    /// Which overlay to show.
    #[arg(long, value_enum, default_value_t = PanelArg::Autocomplete)]
    panel: PanelArg,
    /// light, dark or system (overrides the config file).
    #[arg(long, value_name = "MODE")]
    mode: Option<Appearance>,
    /// Theme override file.
    #[arg(long, value_name = "PATH")]
    theme: Option<PathBuf>,
    /// Config file (default: ~/.config/tag-overlay/config.json).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// JSON array of row view models.
    #[arg(long, value_name = "PATH")]
    rows: Option<PathBuf>,
    #[arg(long, default_value_t = 120.0)]
    anchor_x: f32,
    #[arg(long, default_value_t = 80.0)]
    anchor_y: f32,
    /// Show the empty-result message.
    #[arg(long, conflicts_with = "failed")]
    empty: bool,
    /// Show a failure message instead of rows.
    #[arg(long, value_name = "MESSAGE")]
    failed: Option<String>,
}

/// Initial content for the overlay
enum DemoContent {
    Rows(Vec<RowViewModel>),
    Failed(String),
}

struct DemoSetup {
    kind: PanelKind,
    mode: ThemeMode,
    layout: LayoutConfig,
    anchor: Anchor,
    content: DemoContent,
}

fn load_rows(path: &Path) -> anyhow::Result<Vec<RowViewModel>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading rows from {}", path.display()))?;
    rows_from_json(&json).with_context(|| format!("parsing rows in {}", path.display()))
}

fn sample_rows(kind: PanelKind) -> Vec<RowViewModel> {
    match kind {
        PanelKind::Autocomplete => vec![
            RowViewModel::new("long_hair", Taxonomy::Danbooru, TagCategory::General)
                .metric(4_812_337.0),
            RowViewModel::new("looking_at_viewer", Taxonomy::Danbooru, TagCategory::General)
                .metric(3_920_114.0)
                .already_present(true),
            RowViewModel::new("lineart", Taxonomy::Danbooru, TagCategory::General).metric(51_203.0),
            RowViewModel::new("little_busters!", Taxonomy::Danbooru, TagCategory::Copyright)
                .alias("Little Busters! Ecstasy, Little Busters! Converted Edition")
                .metric(18_045.0),
            RowViewModel::new("lelouch_lamperouge", Taxonomy::Danbooru, TagCategory::Character)
                .alias("zero (code geass)")
                .metric(9_311.0),
            RowViewModel::new("lack", Taxonomy::Danbooru, TagCategory::Artist).metric(2_402.0),
            RowViewModel::new("lowres", Taxonomy::Danbooru, TagCategory::Meta).metric(1_006_544.0),
            RowViewModel::new("lupine", Taxonomy::E621, TagCategory::Species)
                .alias("wolf-like")
                .metric(640.0),
            RowViewModel::new("lore_friendly", Taxonomy::E621, TagCategory::Lore).metric(87.0),
            RowViewModel::new("legacy_tag", Taxonomy::E621, TagCategory::Unknown),
        ],
        PanelKind::RelatedTags => vec![
            RowViewModel::new("canine", Taxonomy::E621, TagCategory::Species).metric(0.962),
            RowViewModel::new("fur", Taxonomy::E621, TagCategory::General)
                .metric(0.873)
                .already_present(true),
            RowViewModel::new("tail", Taxonomy::E621, TagCategory::General).metric(0.851),
            RowViewModel::new("fox", Taxonomy::E621, TagCategory::Species)
                .alias("vulpine")
                .metric(0.604),
            RowViewModel::new("mammal", Taxonomy::E621, TagCategory::Species).metric(0.598),
            RowViewModel::new("hi_res", Taxonomy::E621, TagCategory::Meta).metric(0.311),
            RowViewModel::new("conditional_dnp", Taxonomy::E621, TagCategory::Artist)
                .metric(0.052),
        ],
    }
}

fn sample_header() -> HeaderViewModel {
    HeaderViewModel::new("wolf", Taxonomy::E621, TagCategory::Species)
        .alias("canis lupus, gray wolf, grey wolf, timber wolf, wolves, lupine canid")
        .action(HeaderAction::new("rerun", "Rerun"))
        .action(HeaderAction::new("close", "Close"))
}

struct DemoRoot {
    overlay: Entity<TagOverlay>,
    anchor: Anchor,
    mode: ThemeMode,
    focus_handle: FocusHandle,
    _overlay_events: Subscription,
}

impl DemoRoot {
    fn new(setup: DemoSetup, cx: &mut Context<Self>) -> Self {
        let kind = setup.kind;
        let overlay = cx.new(|cx| TagOverlay::new(kind, setup.layout, setup.mode, cx));

        overlay.update(cx, |overlay, cx| {
            if kind.has_header() {
                overlay.set_header(Some(sample_header()), cx);
            }
            match setup.content {
                DemoContent::Rows(rows) => overlay.set_rows(rows, cx),
                DemoContent::Failed(reason) => overlay.set_failed(reason, cx),
            }
            overlay.show_at(setup.anchor, cx);
        });

        let subscription = cx.subscribe(&overlay, |_this, _overlay, event: &OverlayEvent, _cx| {
            info!(event_type = "overlay_event", event = ?event, "Overlay event");
        });

        Self {
            overlay,
            anchor: setup.anchor,
            mode: setup.mode,
            focus_handle: cx.focus_handle(),
            _overlay_events: subscription,
        }
    }

    fn handle_key(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let anchor = self.anchor;
        match event.keystroke.key.to_lowercase().as_str() {
            "space" | " " => self.overlay.update(cx, |overlay, cx| {
                if overlay.state().is_visible() {
                    overlay.hide(cx);
                } else {
                    overlay.show_at(anchor, cx);
                }
            }),
            "up" | "arrowup" => self.overlay.update(cx, |o, cx| o.select_previous(cx)),
            "down" | "arrowdown" => self.overlay.update(cx, |o, cx| o.select_next(cx)),
            "enter" => {
                self.overlay.update(cx, |o, cx| o.confirm_selected(cx));
            }
            "escape" => self.overlay.update(cx, |o, cx| o.dismiss(cx)),
            "t" => {
                self.mode = self.mode.toggled();
                let mode = self.mode;
                self.overlay.update(cx, |o, cx| o.set_mode(mode, cx));
                cx.notify();
            }
            _ => {}
        }
    }
}

impl Render for DemoRoot {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = theme::current_theme();
        let colors = theme.tokens(self.mode).panel_colors();

        div()
            .id("demo-root")
            .key_context("DemoRoot")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key))
            .relative()
            .size_full()
            .bg(colors.header_background)
            .text_color(colors.text_muted)
            .text_sm()
            .p(px(16.))
            .child(format!(
                "space: show/hide · ↑/↓: select · enter: confirm · t: {} mode · esc: dismiss",
                self.mode.toggled()
            ))
            .child(self.overlay.clone())
    }
}

fn main() {
    let cli = Cli::parse();
    let _log_guard = logging::init();

    let loaded_config = match &cli.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let mode = cli.mode.unwrap_or(loaded_config.appearance).resolve();
    let theme_path = cli
        .theme
        .clone()
        .unwrap_or_else(|| loaded_config.get_theme_path());
    theme::set_current_theme(theme::load_theme_or_default(Some(&theme_path)));

    let kind = PanelKind::from(cli.panel);
    let content = if let Some(reason) = cli.failed.clone() {
        DemoContent::Failed(reason)
    } else if cli.empty {
        DemoContent::Rows(Vec::new())
    } else {
        let rows = cli
            .rows
            .as_deref()
            .and_then(|path| match load_rows(path) {
                Ok(rows) => Some(rows),
                Err(e) => {
                    error!(error = %format!("{:#}", e), "Failed to load rows, using samples");
                    None
                }
            })
            .unwrap_or_else(|| sample_rows(kind));
        DemoContent::Rows(rows)
    };

    let setup = DemoSetup {
        kind,
        mode,
        layout: loaded_config.get_layout(),
        anchor: Anchor::new(cli.anchor_x, cli.anchor_y),
        content,
    };
    let watch_theme = loaded_config.watch_theme;

    info!(
        panel = kind.name(),
        mode = %mode,
        theme = %theme_path.display(),
        "Starting tag overlay demo"
    );

    Application::new().run(move |cx: &mut App| {
        if watch_theme {
            ensure_theme_service(cx, theme_path);
        }

        let window_size = size(px(900.), px(600.));
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                window_size,
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some("Tag Overlay Demo".into()),
                appears_transparent: false,
                ..Default::default()
            }),
            focus: true,
            show: true,
            kind: WindowKind::Normal,
            ..Default::default()
        };

        let opened = cx.open_window(options, |window, cx| {
            let root = cx.new(|cx| DemoRoot::new(setup, cx));
            let focus_handle = root.read(cx).focus_handle.clone();
            window.focus(&focus_handle, cx);
            root
        });

        if opened.log_err().is_none() {
            cx.quit();
            return;
        }
        cx.activate(true);
    });
}
