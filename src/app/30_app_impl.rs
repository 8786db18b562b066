impl eframe::App for AppState {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        self.theme.bg.to_normalized_gamma_f32()
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.style_initialized {
            self.apply_global_style(ctx);
            self.style_initialized = true;
        }

        self.poll_list_events();
        self.poll_transfer_events();
        self.capture_window_geometry(ctx);
        self.persist_config_if_settled();

        // Poll faster while something is in flight so results land promptly.
        let repaint_ms = if self.nav.is_loading() || self.transfers_in_flight > 0 {
            50
        } else {
            250
        };
        ctx.request_repaint_after(Duration::from_millis(repaint_ms));

        let mut actions: Vec<BrowserAction> = Vec::new();

        egui::TopBottomPanel::top("remdir_top_bar")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.top_bg)
                    .stroke(Stroke::new(1.0, self.theme.top_border))
                    .inner_margin(egui::Margin::symmetric(8.0, 6.0)),
            )
            .show(ctx, |ui| {
                ui.visuals_mut().override_text_color = Some(self.theme.fg);
                let bar_actions = self.top_bar(ui);
                actions.extend(bar_actions);
                self.breadcrumb_bar(ui, &mut actions);
            });

        egui::TopBottomPanel::bottom("remdir_status_bar")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.top_bg)
                    .inner_margin(egui::Margin::symmetric(8.0, 4.0)),
            )
            .show(ctx, |ui| {
                self.status_bar(ui);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg)
                    .inner_margin(egui::Margin::same(8.0)),
            )
            .show(ctx, |ui| {
                ui.visuals_mut().override_text_color = Some(self.theme.fg);
                self.entry_table(ui, &mut actions);
            });

        // Apply collected actions after the frame has been drawn.
        for action in actions {
            self.dispatch(action);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Synchronous final write; covers edits still inside the settle
        // window and the last captured window geometry.
        config::save(&self.config);
    }
}
