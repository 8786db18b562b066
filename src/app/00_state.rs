use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::Duration;

use eframe::egui;
use eframe::egui::{Align, Color32, RichText, Stroke};
use egui_extras::{Column, TableBuilder};

use crate::config::{self, AppConfig, DirtyTracker, SavedWindow, UiThemeMode};
use crate::format;
use crate::listing::{self, ListEvent, TransferEvent};
use crate::logger;
use crate::model::DirectoryEntry;
use crate::nav::{LoadRequest, NavigationController};

const APP_TITLE_TEXT: &str = concat!("Remdir - v", env!("CARGO_PKG_VERSION"));
const TABLE_ROW_H: f32 = 24.0;
const ERROR_RED: Color32 = Color32::from_rgb(220, 80, 80);
const CONFIG_SETTLE: Duration = Duration::from_millis(300);

#[derive(Clone, Copy)]
struct UiTheme {
    bg: Color32,
    fg: Color32,
    top_bg: Color32,
    top_border: Color32,
    accent: Color32,
    muted: Color32,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            bg: Color32::from_rgb(10, 12, 14),
            fg: Color32::from_rgb(220, 220, 220),
            top_bg: Color32::from_rgb(18, 20, 24),
            top_border: Color32::from_rgb(45, 50, 58),
            accent: Color32::from_rgb(255, 184, 108),
            muted: Color32::from_rgb(140, 150, 160),
        }
    }
}

impl UiTheme {
    fn light_default() -> Self {
        Self {
            bg: Color32::from_rgb(245, 245, 245),
            fg: Color32::from_rgb(30, 30, 30),
            top_bg: Color32::from_rgb(228, 230, 234),
            top_border: Color32::from_rgb(190, 195, 202),
            accent: Color32::from_rgb(180, 95, 6),
            muted: Color32::from_rgb(110, 118, 126),
        }
    }

    fn for_mode(mode: UiThemeMode) -> Self {
        match mode {
            UiThemeMode::Dark => Self::default(),
            UiThemeMode::Light => Self::light_default(),
        }
    }
}

/// Clicks collected while drawing; applied after the frame is laid out so the
/// draw pass never mutates navigation state mid-render.
#[derive(Clone, Debug)]
enum BrowserAction {
    Navigate(String),
    Up,
    Refresh,
    Download(DirectoryEntry),
    Display(DirectoryEntry),
}

pub struct AppState {
    theme: UiTheme,
    config: AppConfig,
    config_tracker: DirtyTracker,
    nav: NavigationController,
    list_tx: Sender<ListEvent>,
    list_rx: Receiver<ListEvent>,
    transfer_tx: Sender<TransferEvent>,
    transfer_rx: Receiver<TransferEvent>,
    base_url_input: String,
    path_input: String,
    /// Latest transfer or viewer message, with an error flag for coloring.
    transfer_status: Option<(String, bool)>,
    transfers_in_flight: usize,
    style_initialized: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let (list_tx, list_rx) = mpsc::channel();
        let (transfer_tx, transfer_rx) = mpsc::channel();
        let base_url_input = config.server.base_url.clone();
        let theme = UiTheme::for_mode(config.ui_theme_mode);

        let mut app = Self {
            theme,
            config,
            config_tracker: DirtyTracker::new(),
            nav: NavigationController::new(),
            list_tx,
            list_rx,
            transfer_tx,
            transfer_rx,
            base_url_input,
            path_input: String::new(),
            transfer_status: None,
            transfers_in_flight: 0,
            style_initialized: false,
        };

        // Load the root listing right away so the first frame shows progress.
        let request = app.nav.navigate("");
        app.begin_load(request);
        app
    }
}
