// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::{
        ExportFormat,
        ExportType::{PerRestaurant, SingleFile},
        ViewKind,
    },
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let cur_kind = app.current_page_kind();

    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, ExportFormat::Tsv, "TSV");
            ui.selectable_value(&mut fmt, ExportFormat::Html, "HTML");

            // headers only mean something for the delimited formats
            if fmt.delimiter().is_some() {
                let before = export.include_headers;
                ui.checkbox(&mut export.include_headers, "Include headers");
                if export.include_headers != before {
                    logf!("UI: Include_headers → {}", export.include_headers);
                }
            }
        });

        if fmt != prev_fmt {
            export.format = fmt;
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Per-restaurant toggle + Output field ---
    let per_restaurant_allowed = matches!(cur_kind, ViewKind::Restaurants);

    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;

        if per_restaurant_allowed {
            let mut single = matches!(export.export_type, SingleFile);
            if ui.checkbox(&mut single, "All restaurants in one file").changed() {
                export.export_type = if single { SingleFile } else { PerRestaurant };
                if !app.out_path_dirty {
                    app.out_path_text = export.out_path().to_string_lossy().into_owned();
                }
                logf!("UI: export_type → {:?}", export.export_type);
            }
        } else {
            export.export_type = SingleFile;
        }

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions (Copy / Export / RELOAD) ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            let ctx = ui.ctx().clone();
            actions::copy(app, &ctx);
        }

        if ui.button("Export").clicked() {
            actions::export(app);
        }

        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        if ui
            .add(
                egui::Button::new(egui::RichText::new("RELOAD").color(black).strong())
                    .fill(red),
            )
            .clicked()
        {
            let page = app.current_page();
            actions::load(app, page);
        }
    });
}
