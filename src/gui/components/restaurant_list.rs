// src/gui/components/restaurant_list.rs
//
// Renders one card per restaurant in source order. The nested menu table
// deliberately shows fewer columns than the dish cards (no overall
// rating, no cost-to-make).

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::cards::{self, RestaurantCard};
use crate::gui::app::App;
use crate::gui::pages::ViewData;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if let Some(err) = app.current_error() {
        let msg = s!(err);
        ui.colored_label(ui.visuals().error_fg_color, msg);
        return;
    }

    let restaurants = match app.current_view() {
        Some(ViewData::Restaurants(rs)) => rs.clone(),
        _ => {
            ui.label("No data loaded");
            return;
        }
    };

    let show_menus = app.state.gui.restaurants_show_menus;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (i, r) in restaurants.iter().enumerate() {
                let card = cards::restaurant_card(r);
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.heading(&card.name);
                    ui.horizontal(|ui| {
                        ui.label(&card.cuisine);
                        ui.separator();
                        ui.label(format!("Rating: {}", card.rating));
                    });
                    ui.horizontal(|ui| {
                        // URLs come straight from the dataset, unvalidated.
                        ui.hyperlink_to("Website", &card.website);
                        ui.hyperlink_to("View Menu", &card.menu_url);
                    });

                    if show_menus {
                        match card.menu_note() {
                            Some(note) => { ui.label(note); }
                            None => menu_table(ui, i, &card),
                        }
                    }
                });
                ui.add_space(4.0);
            }
        });
}

fn menu_table(ui: &mut egui::Ui, index: usize, card: &RestaurantCard) {
    ui.push_id(("menu_table", index), |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::initial(180.0).clip(true)) // Dish
            .column(Column::initial(60.0))             // Price
            .column(Column::remainder().clip(true))    // Description
            .column(Column::initial(60.0))             // Value
            .column(Column::initial(70.0))             // Perceived
            .header(20.0, |mut header| {
                for h in ["Dish", "Price", "Description", "Value", "Perceived"] {
                    header.col(|ui| { ui.strong(h); });
                }
            })
            .body(|mut body| {
                for line in &card.menu {
                    body.row(18.0, |mut row| {
                        row.col(|ui| { ui.label(&line.name); });
                        row.col(|ui| { ui.label(&line.price); });
                        row.col(|ui| { ui.label(&line.description); });
                        row.col(|ui| { ui.label(&line.value_rating); });
                        row.col(|ui| { ui.label(&line.perceived_value); });
                    });
                }
            });
    });
}
