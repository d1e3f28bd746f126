// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,load}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod load;    // src/gui/actions/load.rs

pub use copy::copy;
pub use export::export;
pub use load::load;

use crate::{
    cards,
    config::options::{ExportFormat, ExportType},
    file::{self, ExportPayload},
    gui::app::App,
    gui::pages::ViewData,
    menu,
};

/// The active view rendered as export payload(s), or None when there is
/// nothing to write.
pub(super) enum ViewPayload {
    Single(ExportPayload),
    PerRestaurant(Vec<(String, ExportPayload)>),
}

pub(super) fn current_payload(app: &App) -> Option<ViewPayload> {
    let format = app.state.options.export.format;

    match app.current_view()? {
        ViewData::Dishes(_) => {
            if app.dish_rows.is_empty() {
                return None;
            }
            // Export stays literal: exactly the dishes on screen.
            let payload = match format {
                ExportFormat::Html => {
                    let cards: Vec<_> = app.dish_rows.iter().map(cards::dish_card).collect();
                    ExportPayload::Html(file::dish_cards_document("Best Value Dishes", &cards))
                }
                _ => ExportPayload::Table {
                    headers: Some(menu::DISH_HEADERS.iter().map(|h| s!(*h)).collect()),
                    rows: menu::dish_rows(&app.dish_rows),
                },
            };
            Some(ViewPayload::Single(payload))
        }

        ViewData::Restaurants(restaurants) => {
            if restaurants.is_empty() {
                return None;
            }
            if app.state.options.export.export_type == ExportType::PerRestaurant {
                let parts = restaurants
                    .iter()
                    .map(|r| {
                        let payload = match format {
                            ExportFormat::Html => ExportPayload::Html(file::restaurant_cards_document(
                                &r.name,
                                &[cards::restaurant_card(r)],
                            )),
                            _ => ExportPayload::Table {
                                headers: Some(
                                    menu::RESTAURANT_HEADERS.iter().map(|h| s!(*h)).collect(),
                                ),
                                rows: menu::restaurant_rows(std::slice::from_ref(r)),
                            },
                        };
                        (r.name.clone(), payload)
                    })
                    .collect();
                Some(ViewPayload::PerRestaurant(parts))
            } else {
                let payload = match format {
                    ExportFormat::Html => {
                        let cards: Vec<_> = restaurants.iter().map(cards::restaurant_card).collect();
                        ExportPayload::Html(file::restaurant_cards_document("Restaurants", &cards))
                    }
                    _ => ExportPayload::Table {
                        headers: Some(menu::RESTAURANT_HEADERS.iter().map(|h| s!(*h)).collect()),
                        rows: menu::restaurant_rows(restaurants),
                    },
                };
                Some(ViewPayload::Single(payload))
            }
        }
    }
}
