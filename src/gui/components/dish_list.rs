// src/gui/components/dish_list.rs
//
// Renders the best-value dish cards. Purely a view: builds a card per
// on-screen dish and draws it; content is replaced wholesale on every
// re-render (load, reload, sort change).

use eframe::egui::{self, Align, Layout};
use crate::cards;
use crate::gui::app::App;
use crate::gui::pages::ViewData;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if let Some(err) = app.current_error() {
        let msg = s!(err);
        ui.colored_label(ui.visuals().error_fg_color, msg);
        return;
    }

    let total = match app.current_view() {
        Some(ViewData::Dishes(data)) => data.len(),
        _ => {
            ui.label("No data loaded");
            return;
        }
    };

    ui.label(format!("Showing {} of {} dishes", app.dish_rows.len(), total));
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for d in &app.dish_rows {
                let card = cards::dish_card(d);
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.heading(&card.name);
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.strong(&card.price);
                        });
                    });
                    ui.label(&card.restaurant);
                    if !card.description.is_empty() {
                        ui.label(&card.description);
                    }
                    ui.horizontal_wrapped(|ui| {
                        for (i, m) in card.metrics.iter().enumerate() {
                            if i > 0 { ui.separator(); }
                            ui.small(format!("{}: {}", m.label, m.value));
                        }
                    });
                });
                ui.add_space(4.0);
            }
        });
}
