// src/gui/pages/restaurants.rs
use eframe::egui;

use crate::{
    config::consts::RESTAURANTS_LOAD_ERROR,
    config::options::ViewKind,
    config::state::AppState,
    progress::Progress,
    source::{self, DataSource, SourceError},
};

use super::{Page, ViewData};

pub struct RestaurantsPage;
pub static PAGE: RestaurantsPage = RestaurantsPage;

impl Page for RestaurantsPage {
    fn title(&self) -> &'static str { "Restaurants" }
    fn kind(&self) -> ViewKind { ViewKind::Restaurants }
    fn load_error_text(&self) -> &'static str { RESTAURANTS_LOAD_ERROR }

    fn load(
        &self,
        source: &DataSource,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<ViewData, SourceError> {
        // Own read of the same document; source order is preserved.
        let restaurants = source::load(source)?;
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Loaded {} restaurant(s)", restaurants.len()));
        }
        Ok(ViewData::Restaurants(restaurants))
    }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        ui.horizontal(|ui| {
            ui.checkbox(&mut state.gui.restaurants_show_menus, "Show menu items");
        });
        false
    }
}
