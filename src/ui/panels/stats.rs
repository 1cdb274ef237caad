// LandSearch - ui/panels/stats.rs
//
// Header strip with dataset statistics: total records, distinct talukas,
// distinct villages, and the earliest record year.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::locale;

/// Render the statistics strip.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let stats = &state.stats;
    let start_year = stats
        .start_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "-".to_string());

    ui.horizontal(|ui| {
        stat(ui, locale::STAT_TOTAL_RECORDS, &stats.total_records.to_string());
        ui.separator();
        stat(ui, locale::STAT_TALUKAS, &stats.talukas.to_string());
        ui.separator();
        stat(ui, locale::STAT_VILLAGES, &stats.villages.to_string());
        ui.separator();
        stat(ui, locale::STAT_START_YEAR, &start_year);
    });
}

fn stat(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(
        egui::RichText::new(value)
            .strong()
            .size(18.0)
            .color(theme::ACCENT),
    );
    ui.label(egui::RichText::new(label).weak());
}
