impl AppState {
    fn top_bar(&mut self, ui: &mut egui::Ui) -> Vec<BrowserAction> {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(APP_TITLE_TEXT)
                    .strong()
                    .color(self.theme.accent)
                    .size(16.0),
            );
            ui.separator();

            ui.label("Server:");
            let server_resp = ui.add(
                egui::TextEdit::singleline(&mut self.base_url_input).desired_width(220.0),
            );
            if server_resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.commit_server_input();
            }

            ui.label("Path:");
            let path_resp =
                ui.add(egui::TextEdit::singleline(&mut self.path_input).desired_width(200.0));
            let go_clicked = ui.button("Go").clicked();
            let path_entered =
                path_resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if go_clicked || path_entered {
                actions.push(BrowserAction::Navigate(self.path_input.clone()));
            }

            if ui.button("Up").on_hover_text("Parent folder").clicked() {
                actions.push(BrowserAction::Up);
            }
            if ui.button("Refresh").clicked() {
                actions.push(BrowserAction::Refresh);
            }

            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                let label = match self.config.ui_theme_mode {
                    UiThemeMode::Dark => "Light",
                    UiThemeMode::Light => "Dark",
                };
                if ui.button(label).on_hover_text("Switch theme").clicked() {
                    self.toggle_theme();
                }
            });
        });

        actions
    }

    fn breadcrumb_bar(&self, ui: &mut egui::Ui, actions: &mut Vec<BrowserAction>) {
        ui.horizontal(|ui| {
            for (i, crumb) in self.nav.crumbs().iter().enumerate() {
                if i > 0 {
                    ui.label(RichText::new("/").color(self.theme.muted));
                }
                if ui.link(&crumb.label).clicked() {
                    actions.push(BrowserAction::Navigate(crumb.target.clone()));
                }
            }
            if self.nav.is_loading() {
                ui.add_space(8.0);
                ui.spinner();
                ui.label(
                    RichText::new(format!(
                        "Loading {} ...",
                        display_path(self.nav.current_path())
                    ))
                    .color(self.theme.muted),
                );
            }
        });
    }

    fn entry_table(&self, ui: &mut egui::Ui, actions: &mut Vec<BrowserAction>) {
        let rows = self.nav.table().rows();

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(Align::Center))
            .column(Column::remainder().at_least(160.0))
            .column(Column::auto().at_least(70.0))
            .column(Column::auto().at_least(130.0))
            .column(Column::auto().at_least(140.0))
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Name");
                });
                header.col(|ui| {
                    ui.strong("Size");
                });
                header.col(|ui| {
                    ui.strong("Modified");
                });
                header.col(|ui| {
                    ui.strong("Actions");
                });
            })
            .body(|body| {
                body.rows(TABLE_ROW_H, rows.len(), |mut row| {
                    let data = &rows[row.index()];
                    let entry = &data.entry;
                    let class = &data.class;

                    row.col(|ui| {
                        let text = format!("{} {}", class.icon.glyph(), entry.name);
                        if entry.is_directory {
                            if ui.link(text).clicked() {
                                actions.push(BrowserAction::Navigate(entry.path.clone()));
                            }
                        } else {
                            ui.label(text);
                        }
                    });
                    row.col(|ui| {
                        ui.label(format::size_label(entry.size, entry.is_directory));
                    });
                    row.col(|ui| {
                        ui.label(&entry.modified);
                    });
                    row.col(|ui| {
                        if class.can_download && ui.small_button("Download").clicked() {
                            actions.push(BrowserAction::Download(entry.clone()));
                        }
                        if class.can_display && ui.small_button("Display").clicked() {
                            actions.push(BrowserAction::Display(entry.clone()));
                        }
                    });
                });
            });
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(error) = self.nav.error() {
                ui.label(RichText::new(error).color(ERROR_RED));
            } else if self.nav.is_loading() {
                ui.label(RichText::new("Loading ...").color(self.theme.muted));
            } else {
                ui.label(RichText::new(self.nav.status()).color(self.theme.muted));
            }

            if let Some((message, is_error)) = &self.transfer_status {
                ui.separator();
                let color = if *is_error { ERROR_RED } else { self.theme.accent };
                ui.label(RichText::new(message).color(color));
            }
        });
    }
}
