// LandSearch - ui/panels/filters.rs
//
// Search form sidebar: selection controls for taluka, village, year and
// type, free-text fields for holder name and survey number, and the
// Search / Reset buttons. Everything is disabled while the data loads.

use crate::app::state::AppState;
use crate::core::input::{sanitize_holder_name, sanitize_survey_no};
use crate::util::locale;
use std::time::Instant;

/// Render the search form.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(locale::SEARCH_HEADING);
    ui.separator();

    let enabled = !state.loading;
    ui.add_enabled_ui(enabled, |ui| {
        egui::Grid::new("search_form")
            .num_columns(2)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                ui.label(locale::LABEL_TALUKA);
                let mut taluka = state.form.taluka.clone();
                choice_combo(ui, "taluka", &mut taluka, &state.options.talukas);
                state.set_taluka(taluka);
                ui.end_row();

                ui.label(locale::LABEL_VILLAGE);
                let villages = state.village_choices();
                choice_combo(ui, "village", &mut state.form.village, &villages);
                ui.end_row();

                ui.label(locale::LABEL_HOLDER_NAME);
                if ui
                    .text_edit_singleline(&mut state.form.holder_name)
                    .changed()
                {
                    state.form.holder_name = sanitize_holder_name(&state.form.holder_name);
                }
                ui.end_row();

                ui.label(locale::LABEL_SURVEY_NO);
                if ui.text_edit_singleline(&mut state.form.survey_no).changed() {
                    state.form.survey_no = sanitize_survey_no(&state.form.survey_no);
                }
                ui.end_row();

                ui.label(locale::LABEL_YEAR);
                let years: Vec<String> = state.options.years.iter().map(|y| y.to_string()).collect();
                choice_combo(ui, "year", &mut state.form.year, &years);
                ui.end_row();

                ui.label(locale::LABEL_TYPE);
                choice_combo(ui, "type", &mut state.form.land_type, &state.options.types);
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let pending = state.search_pending();
            if ui
                .add_enabled(!pending, egui::Button::new(locale::SEARCH_BUTTON))
                .on_hover_text("Ctrl+Enter")
                .clicked()
            {
                state.submit_form(Instant::now());
            }
            if ui.button(locale::RESET_BUTTON).clicked() {
                state.on_reset();
            }
            if pending {
                ui.spinner();
                ui.label(locale::SEARCHING);
            }
        });
    });

    if state.loading {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(locale::LOADING);
        });
    }
}

/// A combo box over `choices` with a leading "any" entry mapped to "".
fn choice_combo(ui: &mut egui::Ui, id: &str, selected: &mut String, choices: &[String]) {
    let text = if selected.is_empty() {
        locale::ANY_OPTION.to_string()
    } else {
        selected.clone()
    };
    egui::ComboBox::from_id_salt(id)
        .selected_text(text)
        .width(180.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut *selected, String::new(), locale::ANY_OPTION);
            for choice in choices {
                ui.selectable_value(&mut *selected, choice.clone(), choice.as_str());
            }
        });
}
