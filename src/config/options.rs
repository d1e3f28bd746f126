// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::source::DataSource;
use super::consts::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub source: DataSource,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: DataSource::default(),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewKind {
    BestValue,
    Restaurants,
}

/// Sort keys for the best-value dish view. Wire strings match the
/// scraper's field names; anything unrecognized falls back to the
/// default perceived-value ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    ValueRating,
    Price,
    Rating,
    #[default]
    PerceivedValue,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::PerceivedValue,
        SortKey::ValueRating,
        SortKey::Price,
        SortKey::Rating,
    ];

    pub fn parse(s: &str) -> SortKey {
        match s {
            "value_rating" => SortKey::ValueRating,
            "price" => SortKey::Price,
            "rating" => SortKey::Rating,
            _ => SortKey::PerceivedValue,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::ValueRating => "value_rating",
            SortKey::Price => "price",
            SortKey::Rating => "rating",
            SortKey::PerceivedValue => "perceived_value",
        }
    }

    /// Human label for the sort control.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::ValueRating => "Value rating",
            SortKey::Price => "Price (low to high)",
            SortKey::Rating => "Overall rating",
            SortKey::PerceivedValue => "Perceived value",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportType {
    SingleFile,
    PerRestaurant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Html,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Html => "html",
        }
    }

    /// Field separator for the delimited formats; None for HTML.
    pub fn delimiter(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Html => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::SingleFile,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();

        match self.export_type {
            ExportType::SingleFile => {
                let stem = self.out_path.file_stem.to_string_lossy();
                let ext = self.format.ext();
                path.push(join!(stem, ".", ext));
            }
            ExportType::PerRestaurant => { /* directory only */ }
        }
        path
    }

    /// Parse GUI text into dir + stem. Ignores pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();

        match self.export_type {
            ExportType::SingleFile => {
                let p = Path::new(s);
                if let Some(parent) = p.parent() {
                    self.out_path.dir = parent.to_path_buf();
                }
                if let Some(stem) = p.file_stem() {
                    self.out_path.file_stem = stem.to_os_string();
                }
            }
            ExportType::PerRestaurant => {
                self.out_path.dir = PathBuf::from(s);
            }
        }
    }

    /// Default file stem for a view ("dishes" / "restaurants").
    pub fn default_stem_for(kind: ViewKind) -> &'static str {
        match kind {
            ViewKind::BestValue => "dishes",
            ViewKind::Restaurants => "restaurants",
        }
    }

    /// Reset the stem to the view default, keeping dir and format.
    pub fn set_default_stem_for(&mut self, kind: ViewKind) {
        self.out_path.file_stem = OsString::from(Self::default_stem_for(kind));
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
