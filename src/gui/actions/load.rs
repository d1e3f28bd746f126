// src/gui/actions/load.rs
use crate::{
    config::options::ViewKind,
    gui::app::App,
    gui::pages::Page,
    gui::progress::GuiProgress,
};

/// Run one page's loader and install the result. Called for every page at
/// startup and again from the Reload button. A failure replaces only this
/// page's content with its error text; other views keep what they have.
pub fn load(app: &mut App, page: &'static dyn Page) {
    let kind = page.kind();

    logf!(
        "Load: Begin view={:?} source={}",
        kind,
        app.state.options.source.describe()
    );

    let mut prog = GuiProgress::new(app.status.clone());

    let res = page.load(&app.state.options.source, Some(&mut prog));

    match res {
        Ok(data) => {
            logf!("Load: OK view={:?}", kind);
            app.views.insert(kind, Ok(data));

            if kind == ViewKind::BestValue {
                // Fresh data → back to the initial top-five selection.
                app.state.gui.sort_applied = false;
                app.rebuild_dish_rows();
            }

            app.status("Ready");
        }
        Err(e) => {
            loge!("Load: Error view={:?}: {}", kind, e);
            app.views.insert(kind, Err(s!(page.load_error_text())));

            if kind == ViewKind::BestValue {
                app.rebuild_dish_rows(); // clears the stale selection
            }

            app.status(format!("Error: {e}"));
        }
    }
}
