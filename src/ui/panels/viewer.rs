// LandSearch - ui/panels/viewer.rs
//
// Document viewer popup. Shows the record's title and document link with
// an action to open it in the system browser. Closing hands the saved
// results scroll position back to the results panel.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::locale;

/// Render the viewer (if a document is open).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(document) = state.viewer.document().cloned() else {
        return;
    };

    let mut close = false;
    let modal = egui::Modal::new(egui::Id::new("document_viewer")).show(ctx, |ui| {
        ui.set_width(theme::VIEWER_WIDTH);
        ui.heading(&document.title);
        ui.separator();

        ui.label(egui::RichText::new(locale::LABEL_DOWNLOAD_LINK).weak());
        ui.add(egui::Label::new(egui::RichText::new(&document.link).monospace()).wrap());
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if ui.button(locale::OPEN_IN_BROWSER).clicked() {
                tracing::info!(link = %document.link, "Opening document in browser");
                ui.ctx().open_url(egui::OpenUrl::new_tab(&document.link));
            }
            if ui.button(locale::CLOSE_BUTTON).clicked() {
                close = true;
            }
        });
    });

    if close || modal.should_close() {
        state.close_document();
    }
}
