// LandSearch - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and manages the load and search lifecycles.

use crate::app::loader::{LoadManager, LoadProgress};
use crate::app::state::AppState;
use crate::ui;
use crate::util::{constants, locale};
use std::path::PathBuf;
use std::time::Instant;

/// The LandSearch application.
pub struct LandSearchApp {
    pub state: AppState,
    pub load_manager: LoadManager,
}

impl LandSearchApp {
    /// Create a new application instance and begin loading the data file.
    pub fn new(state: AppState) -> Self {
        let mut app = Self {
            state,
            load_manager: LoadManager::new(),
        };
        let path = app.state.data_path.clone();
        app.start_load(path);
        app
    }

    fn start_load(&mut self, path: PathBuf) {
        self.state.on_load_started(path.clone());
        self.load_manager.start_load(path);
    }

    /// Ask for a destination and write the current match set there.
    fn export(&mut self) {
        let now = Instant::now();
        if !self.state.on_export_requested(now) {
            return;
        }
        if let Some(dest) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(constants::EXPORT_FILE_NAME)
            .save_file()
        {
            // Outcome is reported through notifications.
            let _ = self.state.on_export(&dest, Instant::now());
        }
    }
}

impl eframe::App for LandSearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Poll for load progress
        for msg in self.load_manager.poll_progress() {
            match msg {
                LoadProgress::Started { path } => {
                    tracing::debug!(path = %path.display(), "Load thread running");
                }
                LoadProgress::Completed {
                    path,
                    records,
                    duration,
                } => {
                    tracing::info!(
                        path = %path.display(),
                        records = records.len(),
                        ms = duration.as_millis() as u64,
                        "Dataset loaded"
                    );
                    self.state.on_load_completed(records, now);
                }
                LoadProgress::Failed { error } => {
                    self.state.on_load_failed(&error, now);
                }
            }
        }
        if self.load_manager.is_active() {
            ctx.request_repaint();
        }

        // Run a submitted search once its delay has elapsed.
        self.state.poll_search(now);

        // Startup warnings become error notices once.
        for warning in std::mem::take(&mut self.state.warnings) {
            self.state.notifications.error(warning, now);
        }
        self.state.notifications.prune(now);

        // Wake up for the next timed event even when the user is idle.
        let next_wake = [
            self.state.scheduler.due_at(),
            self.state.notifications.next_expiry(),
        ]
        .into_iter()
        .flatten()
        .min();
        if let Some(at) = next_wake {
            ctx.request_repaint_after(at.saturating_duration_since(now));
        }

        // Keyboard shortcuts: Ctrl+Enter searches, Escape closes the viewer.
        let (submit, escape) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if submit && !self.state.viewer.is_open() {
            self.state.submit_form(now);
        }
        if escape && self.state.viewer.is_open() {
            self.state.close_document();
        }

        // Top menu bar
        let mut reload: Option<PathBuf> = None;
        let mut export = false;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button(locale::MENU_FILE, |ui| {
                    if ui.button(locale::MENU_OPEN_DATA).clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("JSON", &["json"])
                            .pick_file()
                        {
                            reload = Some(path);
                        }
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(!self.state.loading, egui::Button::new(locale::MENU_RELOAD))
                        .clicked()
                    {
                        reload = Some(self.state.data_path.clone());
                        ui.close_menu();
                    }
                    ui.separator();
                    let has_results = self.state.match_count() > 0;
                    if ui
                        .add_enabled(has_results, egui::Button::new(locale::MENU_EXPORT))
                        .clicked()
                    {
                        export = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button(locale::MENU_EXIT).clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button(locale::MENU_HELP, |ui| {
                    if ui.button(locale::MENU_ABOUT).clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
        if let Some(path) = reload {
            self.start_load(path);
        }
        if export {
            self.export();
        }

        // Statistics strip
        egui::TopBottomPanel::top("stats_strip").show(ctx, |ui| {
            ui.add_space(4.0);
            ui::panels::stats::render(ui, &self.state);
            ui.add_space(4.0);
        });

        // Left sidebar: the search form
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("sidebar_form")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui::panels::filters::render(ui, &mut self.state);
                    });
            });

        // Central panel (results)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::results::render(ui, &mut self.state);
        });

        // Overlays
        ui::panels::viewer::render(ctx, &mut self.state);
        ui::panels::about::render(ctx, &mut self.state);
        ui::panels::notifications::render(ctx, &mut self.state);

        // The results panel's export button.
        if std::mem::take(&mut self.state.export_requested) {
            self.export();
        }
    }
}
