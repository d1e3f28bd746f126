// src/source.rs
//
// The single JSON data source: an array of restaurant records produced by
// the scraper pipeline. Each view performs its own read; the dish list
// and the restaurant list never share a fetch, so a failure in one leaves
// the other untouched.

use std::{fmt, fs, path::PathBuf};

use crate::config::consts::{DATA_FILE, DATA_HOST, DATA_PATH, DATA_PORT};
use crate::core::net;
use crate::menu::Restaurant;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// The scraper's local output file.
    File(PathBuf),
    /// The same document served by the site's static server.
    Http { host: String, port: u16, path: String },
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::File(PathBuf::from(DATA_FILE))
    }
}

impl DataSource {
    pub fn http_default() -> Self {
        DataSource::Http {
            host: s!(DATA_HOST),
            port: DATA_PORT,
            path: s!(DATA_PATH),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::File(p) => p.display().to_string(),
            DataSource::Http { host, port, path } => format!("http://{host}:{port}{path}"),
        }
    }
}

/// The two failure kinds a loader distinguishes. Both stay local to the
/// view whose read failed.
#[derive(Debug)]
pub enum SourceError {
    /// Transport: unreadable file, refused connection, non-200 status.
    Fetch(String),
    /// Body is not a valid restaurant array.
    Parse(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Fetch(e) => write!(f, "fetch failed: {e}"),
            SourceError::Parse(e) => write!(f, "parse failed: {e}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// One full read of the data source.
pub fn load(source: &DataSource) -> Result<Vec<Restaurant>, SourceError> {
    let body = match source {
        DataSource::File(path) => fs::read_to_string(path)
            .map_err(|e| SourceError::Fetch(format!("{}: {}", path.display(), e)))?,
        DataSource::Http { host, port, path } => net::http_get(host, *port, path)
            .map_err(|e| SourceError::Fetch(e.to_string()))?,
    };
    serde_json::from_str(&body).map_err(|e| SourceError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn tmp_file(name: &str, contents: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("menu_value_src_{}", name));
        fs::write(&p, contents).unwrap();
        p
    }

    #[test]
    fn missing_file_is_a_fetch_error() {
        let src = DataSource::File(PathBuf::from("no/such/menu_data.json"));
        match load(&src) {
            Err(SourceError::Fetch(_)) => {}
            other => panic!("expected Fetch error, got {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let p = tmp_file("bad.json", "{ not json");
        match load(&DataSource::File(p)) {
            Err(SourceError::Parse(_)) => {}
            other => panic!("expected Parse error, got {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn record_missing_name_is_a_parse_error() {
        let p = tmp_file("noname.json", r#"[{"cuisine": "Thai"}]"#);
        assert!(matches!(load(&DataSource::File(p)), Err(SourceError::Parse(_))));
    }

    #[test]
    fn missing_metrics_default_per_record() {
        let p = tmp_file(
            "defaults.json",
            r#"[{"name": "Bare", "menu_items": [{"name": "Mystery Dish"}]}]"#,
        );
        let rs = load(&DataSource::File(p)).unwrap();
        assert_eq!(rs.len(), 1);
        let d = &rs[0].menu_items[0];
        assert_eq!(d.perceived_value, 0.0);
        assert_eq!(d.cost_to_make, 0.0);
        assert_eq!(d.price, "");
    }

    #[test]
    fn missing_menu_items_is_an_empty_menu() {
        let p = tmp_file("nomenu.json", r#"[{"name": "Closed"}]"#);
        let rs = load(&DataSource::File(p)).unwrap();
        assert!(rs[0].menu_items.is_empty());
    }
}
