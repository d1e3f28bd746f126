// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use menu_value::config::state::GuiState;
use menu_value::gui;
use eframe::egui::ViewportBuilder;

fn main() {
    let size = {
        let gui = GuiState::default();
        [gui.window_w as f32, gui.window_h as f32]
    };

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size(size),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
