// src/csv.rs
//
// Delimited-text writing for Copy/Export. std-only, quotes + CRLF safe.
// The parser half the scraper tooling used to carry is gone: the data
// source is JSON now.

use std::io::{self, Write};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Full delimited document from headers + rows.
pub fn table_to_string(
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        if let Some(h) = headers {
            let _ = write_row(&mut buf, h, sep);
        }
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_fields_containing_separator() {
        let rows = vec![vec![s!("Fish, fried"), s!("$9.00")]];
        let out = table_to_string(&None, &rows, false, ',');
        assert_eq!(out, "\"Fish, fried\",$9.00\n");
    }

    #[test]
    fn doubles_embedded_quotes() {
        let rows = vec![vec![s!(r#"The "Big" One"#)]];
        let out = table_to_string(&None, &rows, false, ',');
        assert_eq!(out, "\"The \"\"Big\"\" One\"\n");
    }

    #[test]
    fn headers_only_when_asked() {
        let headers = Some(vec![s!("Dish"), s!("Price")]);
        let rows = vec![vec![s!("Burger"), s!("$15.00")]];
        let with = table_to_string(&headers, &rows, true, ',');
        let without = table_to_string(&headers, &rows, false, ',');
        assert!(with.starts_with("Dish,Price\n"));
        assert!(without.starts_with("Burger"));
    }
}
