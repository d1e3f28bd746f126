// src/gui/actions/copy.rs
use eframe::egui;
use crate::{file, gui::app::App};
use super::{current_payload, ViewPayload};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let txt = match current_payload(app) {
        None => {
            app.status("Nothing to copy");
            logd!("Copy: Clicked, but there's nothing to copy");
            return;
        }
        Some(ViewPayload::Single(payload)) => {
            file::payload_to_string(&app.state.options.export, &payload)
        }
        Some(ViewPayload::PerRestaurant(parts)) => {
            // Clipboard gets the concatenation; files stay an Export concern.
            let mut buf = s!();
            for (_, payload) in &parts {
                buf.push_str(&file::payload_to_string(&app.state.options.export, payload));
            }
            buf
        }
    };

    logf!("Copy: view={:?}, {} chars", app.current_page_kind(), txt.len());
    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
