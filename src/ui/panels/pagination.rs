// LandSearch - ui/panels/pagination.rs
//
// Page navigation row: previous, one button per page, next.
// Only rendered when the match set spans more than one page.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the pagination controls.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let current = state.page.current_page();
    let total = state.page.total_pages();

    ui.horizontal_wrapped(|ui| {
        if ui
            .add_enabled(current > 1, egui::Button::new("\u{2190}"))
            .clicked()
        {
            state.on_page_change(-1);
        }

        for page in 1..=total {
            let label = page.to_string();
            let button = if page == current {
                egui::Button::new(egui::RichText::new(label).color(egui::Color32::WHITE).strong())
                    .fill(theme::ACCENT)
            } else {
                egui::Button::new(label)
            };
            if ui.add(button).clicked() {
                state.on_page_jump(page);
            }
        }

        if ui
            .add_enabled(current < total, egui::Button::new("\u{2192}"))
            .clicked()
        {
            state.on_page_change(1);
        }
    });
}
