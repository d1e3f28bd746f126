// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        consts::LAST_UPDATED_FORMAT,
        options::ViewKind,
        state::AppState,
    },
    menu::RankedDish,
};

use super::{
    pages::{Page, ViewData},
    router,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Menu Value",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // per-view canonical data, or the literal error text for that view
    pub views: HashMap<ViewKind, Result<ViewData, String>>,

    // dish selection currently on screen (top 5 at load, top 10 once sorted)
    pub dish_rows: Vec<RankedDish>,

    // footer stamp, "Month D, YYYY"
    pub last_updated: String,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status (actions write here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut app = Self {
            state,
            views: HashMap::new(),
            dish_rows: Vec::new(),
            last_updated: chrono::Local::now().format(LAST_UPDATED_FORMAT).to_string(),
            out_path_text: s!(),
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Loading"))),
        };

        // Load every view at startup. Each page performs its own source
        // read; a failure stays inside that page's container.
        for page in router::all_pages() {
            super::actions::load(&mut app, *page);
        }

        app.out_path_text = app
            .state
            .options
            .export
            .out_path()
            .to_string_lossy()
            .into();

        logf!(
            "Init: views={}, default page={:?}",
            app.views.len(),
            app.current_page_kind()
        );

        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> ViewKind { router::all_pages()[self.current_index()].kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// The loaded data for the active view, if its load succeeded.
    pub fn current_view(&self) -> Option<&ViewData> {
        match self.views.get(&self.current_page_kind()) {
            Some(Ok(data)) => Some(data),
            _ => None,
        }
    }

    /// Error text for the active view, if its load failed.
    pub fn current_error(&self) -> Option<&str> {
        match self.views.get(&self.current_page_kind()) {
            Some(Err(msg)) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Recompute the on-screen dish selection from the resident
    /// BestValueData. Pure re-render; no fetch.
    pub fn rebuild_dish_rows(&mut self) {
        if let Some(Ok(ViewData::Dishes(data))) = self.views.get(&ViewKind::BestValue) {
            self.dish_rows = if self.state.gui.sort_applied {
                data.sorted_view(self.state.gui.sort_key)
            } else {
                data.initial()
            };
        } else {
            self.dish_rows.clear();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Last updated: {}", self.last_updated));
                ui.separator();
                let status = self.status.lock().unwrap().clone();
                ui.label(format!("Status: {status}"));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            // Page-specific controls (sort key / menu toggle)
            let page = self.current_page();
            if page.draw_controls(ui, &mut self.state) {
                self.rebuild_dish_rows();
            }

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            match self.current_page_kind() {
                ViewKind::BestValue => crate::gui::components::dish_list::draw(ui, self),
                ViewKind::Restaurants => crate::gui::components::restaurant_list::draw(ui, self),
            }
        });
    }
}
