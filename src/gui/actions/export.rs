// src/gui/actions/export.rs
use crate::{file, gui::app::App};
use super::{current_payload, ViewPayload};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    let kind = app.current_page_kind();

    let status_msg = match current_payload(app) {
        None => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
        Some(ViewPayload::Single(payload)) => {
            logf!("Export: Begin view={:?}, type=SingleFile", kind);
            match file::write_export_single(&app.state.options.export, &payload) {
                Ok(path) => {
                    logf!("Export: OK count=1 last={}", path.display());
                    format!("Exported 1 file. Last: {}", path.display())
                }
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
        Some(ViewPayload::PerRestaurant(parts)) => {
            logf!("Export: Begin view={:?}, type=PerRestaurant count={}", kind, parts.len());
            match file::write_export_per_restaurant(&app.state.options.export, &parts) {
                Ok(paths) => match paths.last() {
                    Some(last) => {
                        logf!("Export: OK count={} last={}", paths.len(), last.display());
                        format!("Exported {} file(s). Last: {}", paths.len(), last.display())
                    }
                    None => {
                        logd!("Export: PerRestaurant produced no files");
                        s!("Nothing to export")
                    }
                },
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
    };

    app.status(status_msg);
}
