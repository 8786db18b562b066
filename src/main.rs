#![cfg_attr(windows, windows_subsystem = "windows")]

mod app;
mod breadcrumb;
mod classify;
mod config;
mod format;
mod listing;
mod logger;
mod model;
mod nav;
mod path;

fn main() -> eframe::Result<()> {
    let cfg = config::load();

    let mut viewport = eframe::egui::ViewportBuilder::default()
        .with_title("Remdir")
        .with_inner_size([1080.0, 680.0])
        .with_min_inner_size([640.0, 400.0]);
    if let Some(saved) = cfg.saved_window {
        viewport = viewport
            .with_position(saved.outer_pos)
            .with_inner_size(saved.inner_size);
        if saved.maximized {
            viewport = viewport.with_maximized(true);
        }
    }

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        concat!("Remdir - v", env!("CARGO_PKG_VERSION")),
        native_options,
        Box::new(|_cc| Ok(Box::new(app::AppState::new(cfg)))),
    )
}
