// tests/export_views.rs
use std::fs;
use std::path::PathBuf;

use menu_value::config::options::{ExportFormat, SortKey, ViewKind};
use menu_value::runner::{self, Params};
use menu_value::source::DataSource;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("menu_value_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn write_fixture(dir: &PathBuf) -> PathBuf {
    let data = serde_json::json!([
        {
            "name": "Moose's Tooth",
            "cuisine": "Pizza",
            "website": "https://moose.example",
            "menu_url": "https://moose.example/menu",
            "menu_items": [
                {
                    "name": "Fish, Chips & <Slaw>",
                    "description": "Beer battered",
                    "price": "$18.00",
                    "price_numeric": 18.0,
                    "value_rating": 0.55,
                    "perceived_value": 7.2,
                    "overall_rating": 4.2,
                    "cost_to_make": 5.4
                }
            ]
        },
        {
            "name": "Moose's Tooth",
            "cuisine": "Pizza",
            "website": "https://moose2.example",
            "menu_url": "https://moose2.example/menu",
            "menu_items": []
        }
    ])
    .to_string();

    let path = dir.join("menu_data.json");
    fs::write(&path, data).unwrap();
    path
}

#[test]
fn dish_view_exports_quoted_csv() {
    let dir = tmp_dir("dish_csv");
    let data = write_fixture(&dir);

    let mut params = Params::new();
    params.source = DataSource::File(data);
    params.view = ViewKind::BestValue;
    params.sort = SortKey::PerceivedValue;
    params.out = Some(dir.join("dishes.csv"));

    let summary = runner::run(&params, None).unwrap();
    assert_eq!(summary.files_written.len(), 1);

    let content = fs::read_to_string(&summary.files_written[0]).unwrap();
    // header row first, then the quoted dish name (embedded comma)
    assert!(content.starts_with("Dish,Restaurant,Price,"));
    assert!(content.contains("\"Fish, Chips & <Slaw>\""));
    assert!(content.contains("$18.00"));
}

#[test]
fn html_export_escapes_scraped_fields() {
    let dir = tmp_dir("dish_html");
    let data = write_fixture(&dir);

    let mut params = Params::new();
    params.source = DataSource::File(data);
    params.format = ExportFormat::Html;
    params.out = Some(dir.join("dishes.html"));

    let summary = runner::run(&params, None).unwrap();
    let content = fs::read_to_string(&summary.files_written[0]).unwrap();

    assert!(content.starts_with("<!DOCTYPE html>"));
    assert!(content.contains("Fish, Chips &amp; &lt;Slaw&gt;"));
    assert!(!content.contains("<Slaw>"));
}

#[test]
fn per_restaurant_export_dedups_same_names() {
    let dir = tmp_dir("per_restaurant");
    let data = write_fixture(&dir);

    let mut params = Params::new();
    params.source = DataSource::File(data);
    params.view = ViewKind::Restaurants;
    params.per_restaurant = true;
    params.out = Some(dir.clone());

    let summary = runner::run(&params, None).unwrap();
    assert_eq!(summary.files_written.len(), 2);

    // Same sanitized stem twice → second gets a " (2)" suffix
    let names: Vec<String> = summary
        .files_written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names[0], "Mooses_Tooth.csv");
    assert_eq!(names[1], "Mooses_Tooth (2).csv");
}

#[test]
fn no_out_path_renders_to_stdout() {
    let dir = tmp_dir("stdout");
    let data = write_fixture(&dir);

    let mut params = Params::new();
    params.source = DataSource::File(data);
    params.view = ViewKind::Restaurants;

    let summary = runner::run(&params, None).unwrap();
    assert!(summary.files_written.is_empty());

    let text = summary.stdout.unwrap();
    assert!(text.starts_with("Restaurant,Cuisine,Rating,"));
    // two records, plus one header line
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn top_flag_caps_the_dish_count() {
    let dir = tmp_dir("top");
    let data = write_fixture(&dir);

    let mut params = Params::new();
    params.source = DataSource::File(data);
    params.top = Some(1);
    params.include_headers = false;

    let summary = runner::run(&params, None).unwrap();
    let text = summary.stdout.unwrap();
    assert_eq!(text.lines().count(), 1);
}
