// src/config/state.rs
use super::options::{AppOptions, SortKey};

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Selected key in the dish-list sort control
    pub sort_key: SortKey,

    /// Whether the sort control has been touched since the last load.
    /// The initial render shows a shorter list than a sorted render.
    pub sort_applied: bool,

    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Restaurants page -> show/hide the nested menu lists
    pub restaurants_show_menus: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            sort_key: SortKey::default(),
            sort_applied: false,
            window_w: 1100,
            window_h: 700,
            current_page_index: 0,
            restaurants_show_menus: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            gui: GuiState::default(),
        }
    }
}
