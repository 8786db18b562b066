impl AppState {
    /// Drain listing results. Stale ones are rejected by the controller.
    fn poll_list_events(&mut self) {
        loop {
            match self.list_rx.try_recv() {
                Ok(event) => {
                    let _ = self.nav.apply(event);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    fn poll_transfer_events(&mut self) {
        loop {
            match self.transfer_rx.try_recv() {
                Ok(event) => {
                    self.transfers_in_flight = self.transfers_in_flight.saturating_sub(1);
                    self.transfer_status = Some(match event {
                        TransferEvent::Finished { name, local_path } => {
                            (format!("Saved {name} to {local_path}"), false)
                        }
                        TransferEvent::Failed { name, message } => {
                            (format!("Download of {name} failed: {message}"), true)
                        }
                    });
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    fn begin_load(&mut self, request: LoadRequest) {
        listing::spawn_list(
            self.config.server.base_url.clone(),
            request.path,
            request.request_id,
            self.list_tx.clone(),
        );
    }

    fn dispatch(&mut self, action: BrowserAction) {
        match action {
            BrowserAction::Navigate(path) => {
                let request = self.nav.navigate(&path);
                self.path_input = self.nav.current_path().to_string();
                self.begin_load(request);
            }
            BrowserAction::Up => {
                let request = self.nav.navigate_up();
                self.path_input = self.nav.current_path().to_string();
                self.begin_load(request);
            }
            BrowserAction::Refresh => {
                let request = self.nav.refresh();
                self.begin_load(request);
            }
            BrowserAction::Download(entry) => self.start_download(entry),
            BrowserAction::Display(entry) => self.open_viewer(&entry),
        }
    }

    fn start_download(&mut self, entry: DirectoryEntry) {
        let mut dialog = rfd::FileDialog::new().set_file_name(&entry.name);
        if let Some(dir) = &self.config.download_dir {
            dialog = dialog.set_directory(dir);
        }
        let Some(dest) = dialog.save_file() else {
            return;
        };

        if let Some(parent) = dest.parent() {
            self.config.download_dir = Some(parent.display().to_string());
            self.config_tracker.mark();
        }

        self.transfer_status = Some((format!("Downloading {} ...", entry.name), false));
        self.transfers_in_flight += 1;
        listing::spawn_download(
            self.config.server.base_url.clone(),
            entry.path,
            entry.name,
            dest,
            self.transfer_tx.clone(),
        );
    }

    /// Images open in the system browser, which renders them straight off the
    /// download endpoint.
    fn open_viewer(&mut self, entry: &DirectoryEntry) {
        let url = listing::download_url(&self.config.server.base_url, &entry.path);
        if let Err(err) = open_in_browser(&url) {
            logger::log_line(
                logger::APP_LOG,
                &format!("Opening viewer for {:?} failed: {err}", entry.path),
            );
            self.transfer_status = Some((format!("Could not open {}: {err}", entry.name), true));
        }
    }

    fn commit_server_input(&mut self) {
        let trimmed = self.base_url_input.trim().trim_end_matches('/').to_string();
        if trimmed.is_empty() || trimmed == self.config.server.base_url {
            return;
        }
        self.config.server.base_url = trimmed;
        self.config_tracker.mark();
        let request = self.nav.refresh();
        self.begin_load(request);
    }

    /// Persist the config once edits have settled. The config is a handful of
    /// fields, so a one-shot thread per settled burst keeps the write off the
    /// UI thread without a dedicated worker.
    fn persist_config_if_settled(&mut self) {
        if self.config_tracker.take_if_settled(CONFIG_SETTLE) {
            let cfg = self.config.clone();
            std::thread::spawn(move || config::save(&cfg));
        }
    }

    fn toggle_theme(&mut self) {
        self.config.ui_theme_mode = match self.config.ui_theme_mode {
            UiThemeMode::Dark => UiThemeMode::Light,
            UiThemeMode::Light => UiThemeMode::Dark,
        };
        self.theme = UiTheme::for_mode(self.config.ui_theme_mode);
        self.style_initialized = false;
        self.config_tracker.mark();
    }

    fn apply_global_style(&self, ctx: &egui::Context) {
        let mut visuals = match self.config.ui_theme_mode {
            UiThemeMode::Dark => egui::Visuals::dark(),
            UiThemeMode::Light => egui::Visuals::light(),
        };
        visuals.panel_fill = self.theme.bg;
        visuals.hyperlink_color = self.theme.accent;
        ctx.set_visuals(visuals);
    }

    /// Track window geometry so it can be restored next start. Persisted on
    /// exit rather than per frame.
    fn capture_window_geometry(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            let viewport = i.viewport();
            let maximized = viewport.maximized.unwrap_or(false);
            if let (Some(outer), Some(inner)) = (viewport.outer_rect, viewport.inner_rect) {
                self.config.saved_window = Some(SavedWindow {
                    outer_pos: [outer.min.x, outer.min.y],
                    inner_size: [inner.width(), inner.height()],
                    maximized,
                });
            }
        });
    }
}
