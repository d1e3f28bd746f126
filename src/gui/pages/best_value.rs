// src/gui/pages/best_value.rs
use eframe::egui;

use crate::{
    config::consts::DISHES_LOAD_ERROR,
    config::options::{SortKey, ViewKind},
    config::state::AppState,
    menu::{self, BestValueData},
    progress::Progress,
    source::{self, DataSource, SourceError},
};

use super::{Page, ViewData};

pub struct BestValuePage;
pub static PAGE: BestValuePage = BestValuePage;

impl Page for BestValuePage {
    fn title(&self) -> &'static str { "Best Value" }
    fn kind(&self) -> ViewKind { ViewKind::BestValue }
    fn load_error_text(&self) -> &'static str { DISHES_LOAD_ERROR }

    fn load(
        &self,
        source: &DataSource,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<ViewData, SourceError> {
        let restaurants = source::load(source)?;
        let data = BestValueData::build(menu::flatten_dishes(&restaurants));
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Ranked {} dishes", data.len()));
        }
        Ok(ViewData::Dishes(data))
    }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        // The sort control. Changing it re-renders from the resident
        // BestValueData; it never triggers another fetch.
        let mut changed = false;
        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Sort by")
                .selected_text(state.gui.sort_key.label())
                .show_ui(ui, |ui| {
                    for key in SortKey::ALL {
                        changed |= ui
                            .selectable_value(&mut state.gui.sort_key, key, key.label())
                            .changed();
                    }
                });
        });
        if changed {
            state.gui.sort_applied = true;
            logf!("UI: Sort key → {}", state.gui.sort_key.as_str());
        }
        changed
    }
}
