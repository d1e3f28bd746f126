// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    cards,
    config::consts::SORTED_DISH_LIMIT,
    config::options::{ExportFormat, ExportOptions, ExportType, SortKey, ViewKind},
    file::{self, ExportPayload},
    menu::{self, BestValueData},
    progress::Progress,
    source::{self, DataSource},
};

#[derive(Clone, Debug)]
pub struct Params {
    pub view: ViewKind,           // dishes or restaurants
    pub sort: SortKey,            // dish view only
    pub top: Option<usize>,       // override the dish-count cap
    pub source: DataSource,       // local file or the site's server
    pub format: ExportFormat,
    pub out: Option<PathBuf>,     // None → stdout
    pub include_headers: bool,
    pub per_restaurant: bool,     // one file per restaurant (restaurants view)
}

impl Params {
    pub fn new() -> Self {
        Self {
            view: ViewKind::BestValue,
            sort: SortKey::default(),
            top: None,
            source: DataSource::default(),
            format: ExportFormat::Csv,
            out: None,
            include_headers: true,
            per_restaurant: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    /// Rendered output when no out path was given.
    pub stdout: Option<String>,
}

/// Top-level runner: one source read, one view, one render.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let restaurants = source::load(&params.source)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!(
            "Loaded {} restaurant(s) from {}",
            restaurants.len(),
            params.source.describe()
        ));
    }

    let summary = match params.view {
        ViewKind::BestValue => {
            let data = BestValueData::build(menu::flatten_dishes(&restaurants));
            let limit = params.top.unwrap_or(SORTED_DISH_LIMIT);
            let dishes = data.sorted_view_top(params.sort, limit);
            logf!(
                "Run: dishes view sort={} showing {}/{}",
                params.sort.as_str(),
                dishes.len(),
                data.len()
            );

            let payload = match params.format {
                ExportFormat::Html => {
                    let cards: Vec<_> = dishes.iter().map(cards::dish_card).collect();
                    ExportPayload::Html(file::dish_cards_document("Best Value Dishes", &cards))
                }
                _ => ExportPayload::Table {
                    headers: Some(menu::DISH_HEADERS.iter().map(|h| s!(*h)).collect()),
                    rows: menu::dish_rows(&dishes),
                },
            };
            write_or_print(params, &[payload], &[])?
        }

        ViewKind::Restaurants => {
            logf!("Run: restaurants view, {} record(s)", restaurants.len());

            if params.per_restaurant {
                let parts: Vec<(String, ExportPayload)> = restaurants
                    .iter()
                    .map(|r| {
                        let card = cards::restaurant_card(r);
                        let payload = match params.format {
                            ExportFormat::Html => ExportPayload::Html(
                                file::restaurant_cards_document(&r.name, std::slice::from_ref(&card)),
                            ),
                            _ => ExportPayload::Table {
                                headers: Some(
                                    menu::RESTAURANT_HEADERS.iter().map(|h| s!(*h)).collect(),
                                ),
                                rows: menu::restaurant_rows(std::slice::from_ref(r)),
                            },
                        };
                        (r.name.clone(), payload)
                    })
                    .collect();
                write_or_print(params, &[], &parts)?
            } else {
                let payload = match params.format {
                    ExportFormat::Html => {
                        let cards: Vec<_> = restaurants.iter().map(cards::restaurant_card).collect();
                        ExportPayload::Html(file::restaurant_cards_document("Restaurants", &cards))
                    }
                    _ => ExportPayload::Table {
                        headers: Some(menu::RESTAURANT_HEADERS.iter().map(|h| s!(*h)).collect()),
                        rows: menu::restaurant_rows(&restaurants),
                    },
                };
                write_or_print(params, &[payload], &[])?
            }
        }
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

fn export_options(params: &Params) -> ExportOptions {
    let mut export = ExportOptions::default();
    export.format = params.format;
    export.export_type = if params.per_restaurant {
        ExportType::PerRestaurant
    } else {
        ExportType::SingleFile
    };
    export.include_headers = params.include_headers;
    export.set_default_stem_for(params.view);
    if let Some(out) = &params.out {
        export.set_path(out.to_string_lossy().as_ref());
    }
    export
}

fn write_or_print(
    params: &Params,
    single: &[ExportPayload],
    parts: &[(String, ExportPayload)],
) -> Result<RunSummary, Box<dyn Error>> {
    let export = export_options(params);

    if params.out.is_none() {
        // stdout: concatenate whatever we were given
        let mut text = s!();
        for p in single {
            text.push_str(&file::payload_to_string(&export, p));
        }
        for (_, p) in parts {
            text.push_str(&file::payload_to_string(&export, p));
        }
        return Ok(RunSummary { files_written: Vec::new(), stdout: Some(text) });
    }

    let files_written = if parts.is_empty() {
        let mut written = Vec::with_capacity(single.len());
        for p in single {
            written.push(file::write_export_single(&export, p)?);
        }
        written
    } else {
        file::write_export_per_restaurant(&export, parts)?
    };

    Ok(RunSummary { files_written, stdout: None })
}

/* ---------------- Restaurant-list helper (GUI/CLI can call) ---------------- */

/// Names + cuisines from one source read, for `--list`.
pub fn list_restaurants(source: &DataSource) -> Result<Vec<(String, String)>, Box<dyn Error>> {
    let restaurants = source::load(source)?;
    Ok(restaurants
        .into_iter()
        .map(|r| (r.name, r.cuisine))
        .collect())
}
