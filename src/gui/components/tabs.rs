// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the view switch itself.
// Each view keeps its own loaded data (or error text), so switching is
// display-only; nothing is re-fetched.

use eframe::egui;
use crate::gui::{app::App, router};
use crate::config::options::{ExportType, ViewKind};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let pages = router::all_pages();
        let cur = app.current_index();

        for (idx, page) in pages.iter().enumerate() {
            let selected = idx == cur;

            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                let prev = app.current_page_kind();
                app.set_current_index(idx);
                let new_kind = page.kind();
                logf!("UI: Tab switch {:?} → {:?}", prev, new_kind);

                // Per-restaurant export only applies to the Restaurants view.
                if new_kind != ViewKind::Restaurants {
                    app.state.options.export.export_type = ExportType::SingleFile;
                }

                // Follow the view with its default output stem unless the
                // user has typed a path of their own.
                if !app.out_path_dirty {
                    app.state.options.export.set_default_stem_for(new_kind);
                    app.out_path_text = app
                        .state
                        .options
                        .export
                        .out_path()
                        .to_string_lossy()
                        .into_owned();
                }
            }
        }
    });
}
