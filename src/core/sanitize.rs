// src/core/sanitize.rs

/// Collapse whitespace runs to a single space and trim. Scraped names and
/// descriptions arrive with stray newlines and double spaces.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// File-system-safe stem from a restaurant name. Falls back to a numbered
/// stem when nothing survives.
pub fn sanitize_filename(name: &str, index: usize) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '_' { if !(last_us && ch == '_') { out.push(ch); } last_us = ch == '_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { format!("restaurant_{}", index) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_runs() {
        assert_eq!(normalize_ws("  Spenard \n Roadhouse  "), "Spenard Roadhouse");
        assert_eq!(normalize_ws("plain"), "plain");
    }

    #[test]
    fn sanitize_filename_variants() {
        assert_eq!(sanitize_filename("Moose's Tooth Pub & Pizzeria", 0), "Mooses_Tooth_Pub_Pizzeria");
        assert_eq!(sanitize_filename("---", 4), "restaurant_4");
    }
}
