// LandSearch - ui/panels/results.rs
//
// Results table for the current page of the match set, plus the result
// count, the empty-result message, and the pagination controls.
//
// The scroll offset is recorded every frame so the document viewer can
// hand it back on close; `restore_scroll` is consumed when set (new page,
// new search, viewer closed).

use crate::app::state::AppState;
use crate::core::model::LandRecord;
use crate::ui::panels::pagination;
use crate::util::locale;

/// Render the central results panel.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if !state.show_results {
        ui.centered_and_justified(|ui| {
            if state.loading {
                ui.label(locale::LOADING);
            } else if state.records().is_empty() {
                ui.label(locale::NOT_LOADED);
            } else {
                ui.label(locale::SEARCH_HEADING);
            }
        });
        return;
    }

    ui.horizontal(|ui| {
        ui.strong(locale::records_found(state.match_count()));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(locale::EXPORT_BUTTON).clicked() {
                state.export_requested = true;
            }
        });
    });
    ui.separator();

    if state.match_count() == 0 {
        ui.centered_and_justified(|ui| {
            ui.label(locale::NO_RESULTS);
        });
        return;
    }

    // Pagination sits below the table; reserve its row first.
    if state.page.needs_controls() {
        egui::TopBottomPanel::bottom("pagination")
            .show_inside(ui, |ui| pagination::render(ui, state));
    }

    let mut to_open: Option<LandRecord> = None;

    let mut scroll = egui::ScrollArea::vertical()
        .id_salt("results_scroll")
        .auto_shrink([false; 2]);
    if let Some(offset) = state.restore_scroll.take() {
        scroll = scroll.vertical_scroll_offset(offset);
    }

    let output = scroll.show(ui, |ui| {
        egui::Grid::new("results_table")
            .num_columns(8)
            .striped(true)
            .spacing([14.0, 6.0])
            .show(ui, |ui| {
                for label in [
                    locale::LABEL_INDEX,
                    locale::LABEL_TALUKA,
                    locale::LABEL_VILLAGE,
                    locale::LABEL_HOLDER_NAME,
                    locale::LABEL_YEAR,
                    locale::LABEL_SURVEY_NO,
                    locale::LABEL_TYPE,
                    locale::LABEL_DOWNLOAD_LINK,
                ] {
                    ui.strong(label);
                }
                ui.end_row();

                for (row, record) in state.page_rows() {
                    ui.label(row.to_string());
                    ui.label(&record.taluka);
                    ui.label(&record.village);
                    ui.label(&record.holder_name);
                    ui.label(record.year_label());
                    ui.label(&record.survey_no);
                    ui.label(&record.land_type);
                    let has_link = !record.download_link.is_empty();
                    if ui
                        .add_enabled(has_link, egui::Button::new(locale::DOWNLOAD_BUTTON).small())
                        .on_hover_text(&record.download_link)
                        .clicked()
                    {
                        to_open = Some(record.clone());
                    }
                    ui.end_row();
                }
            });
    });
    state.results_scroll = output.state.offset.y;

    if let Some(record) = to_open {
        state.open_document(&record);
    }
}
