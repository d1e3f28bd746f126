// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::{options::ViewKind, state::AppState};
use crate::menu::{BestValueData, Restaurant};
use crate::progress::Progress;
use crate::source::{DataSource, SourceError};

pub mod best_value;
pub mod restaurants;

/// What a view holds in memory after a successful load.
#[derive(Clone, Debug)]
pub enum ViewData {
    Dishes(BestValueData),
    Restaurants(Vec<Restaurant>),
}

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> ViewKind;

    /// Literal text shown in this view when its own load fails.
    /// The sibling view keeps whatever it has.
    fn load_error_text(&self) -> &'static str;

    /// One independent read of the data source. Pages never share a
    /// fetch; either may complete first.
    fn load(
        &self,
        source: &DataSource,
        progress: Option<&mut dyn Progress>,
    ) -> Result<ViewData, SourceError>;

    /// Draw page-specific controls above the list. Returns true when the
    /// displayed selection must be rebuilt.
    fn draw_controls(&self, _ui: &mut egui::Ui, _state: &mut AppState) -> bool {
        false
    }
}
