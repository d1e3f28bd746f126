// src/file.rs

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::cards::{DishCard, RestaurantCard};
use crate::config::options::ExportOptions;
use crate::core::{html, sanitize::sanitize_filename};
use crate::csv;

/// What a view hands to the writers: a delimited table or finished card
/// markup, depending on the selected format.
pub enum ExportPayload {
    Table {
        headers: Option<Vec<String>>,
        rows: Vec<Vec<String>>,
    },
    Html(String),
}

/// Render a payload to the final file contents.
pub fn payload_to_string(export: &ExportOptions, payload: &ExportPayload) -> String {
    match payload {
        ExportPayload::Table { headers, rows } => {
            // delimiter() is Some for every table format
            let sep = export.format.delimiter().unwrap_or(',');
            csv::table_to_string(headers, rows, export.include_headers, sep)
        }
        ExportPayload::Html(doc) => doc.clone(),
    }
}

/// Write a single export file at the options' out path.
/// Returns the final path written to.
pub fn write_export_single(
    export: &ExportOptions,
    payload: &ExportPayload,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, payload_to_string(export, payload))?;
    Ok(path)
}

/// Write one file per restaurant into the directory implied by
/// `export.out_path()`. `parts` pairs each restaurant name with its
/// ready-made payload.
pub fn write_export_per_restaurant(
    export: &ExportOptions,
    parts: &[(String, ExportPayload)],
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let outdir = export.out_path();
    ensure_directory(&outdir)?;

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(parts.len());
    let ext = export.format.ext();

    for (i, (name, payload)) in parts.iter().enumerate() {
        let stem = sanitize_filename(name, i);
        let path = resolve_filename(&outdir, &stem, &mut seen, ext);
        fs::write(&path, payload_to_string(export, payload))?;
        written.push(path);
    }

    Ok(written)
}

/// Assemble a standalone HTML document from dish card markup.
pub fn dish_cards_document(title: &str, cards: &[DishCard]) -> String {
    let mut body = s!();
    for c in cards {
        body.push_str(&c.to_html());
        body.push('\n');
    }
    html::document(title, &body)
}

/// Same, from restaurant card markup.
pub fn restaurant_cards_document(title: &str, cards: &[RestaurantCard]) -> String {
    let mut body = s!();
    for c in cards {
        body.push_str(&c.to_html());
        body.push('\n');
    }
    html::document(title, &body)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Duplicate handling **only within this run**
pub fn resolve_filename(
    dir: &Path,
    stem: &str,                        // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,                         // "csv" | "tsv" | "html"
) -> PathBuf {
    // How many times have we seen this base?
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem> (N).ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_filename_dedups_within_run() {
        let mut seen = HashMap::new();
        let dir = Path::new("out");
        let a = resolve_filename(dir, "Moose", &mut seen, "csv");
        let b = resolve_filename(dir, "Moose", &mut seen, "csv");
        let c = resolve_filename(dir, "Moose", &mut seen, "csv");
        assert_eq!(a, dir.join("Moose.csv"));
        assert_eq!(b, dir.join("Moose (2).csv"));
        assert_eq!(c, dir.join("Moose (3).csv"));
    }
}
