// LandSearch - ui/panels/notifications.rs
//
// Toast notices stacked in the top-right corner. Clicking a toast
// dismisses it; expired toasts are pruned by the shell before rendering.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render live notifications.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if state.notifications.is_empty() {
        return;
    }

    let mut dismissed: Option<usize> = None;

    egui::Area::new(egui::Id::new("notifications"))
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 36.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.set_max_width(theme::NOTICE_WIDTH);
            for (i, notice) in state.notifications.iter().enumerate() {
                let response = egui::Frame::popup(ui.style())
                    .fill(theme::notice_bg_colour(notice.kind))
                    .show(ui, |ui| {
                        ui.set_width(theme::NOTICE_WIDTH);
                        ui.label(egui::RichText::new(&notice.message).color(theme::NOTICE_TEXT));
                    })
                    .response
                    .interact(egui::Sense::click());
                if response.clicked() {
                    dismissed = Some(i);
                }
                ui.add_space(6.0);
            }
        });

    if let Some(i) = dismissed {
        state.notifications.dismiss(i);
    }
}
