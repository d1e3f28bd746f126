// tests/app_bootstrap.rs
//
// App construction without a window: both views load independently, the
// dish selection starts at the top five by perceived value, and a broken
// source swaps each view's body for its literal error text.

use std::fs;
use std::path::PathBuf;

use menu_value::config::consts::{
    DISHES_LOAD_ERROR, INITIAL_DISH_LIMIT, RESTAURANTS_LOAD_ERROR,
};
use menu_value::config::options::ViewKind;
use menu_value::config::state::AppState;
use menu_value::gui::app::App;
use menu_value::gui::pages::ViewData;
use menu_value::source::DataSource;

fn write_fixture(name: &str, dishes: usize) -> PathBuf {
    let menu: Vec<serde_json::Value> = (0..dishes)
        .map(|i| {
            serde_json::json!({
                "name": format!("Dish {i}"),
                "description": "Fixture",
                "price": format!("${}.00", 10 + i),
                "price_numeric": (10 + i) as f64,
                "value_rating": 0.7,
                "perceived_value": i as f64,
                "overall_rating": 4.0,
                "cost_to_make": 3.0
            })
        })
        .collect();

    let data = serde_json::json!([
        {
            "name": "Fixture Diner",
            "cuisine": "American",
            "website": "https://fixture.example",
            "menu_url": "https://fixture.example/menu",
            "menu_items": menu
        }
    ])
    .to_string();

    let mut p = std::env::temp_dir();
    p.push(format!("menu_value_boot_{}", name));
    fs::write(&p, data).unwrap();
    p
}

fn app_with_source(source: DataSource) -> App {
    let mut state = AppState::default();
    state.options.source = source;
    App::new(state)
}

#[test]
fn bootstrap_loads_both_views() {
    let path = write_fixture("both.json", 8);
    let app = app_with_source(DataSource::File(path));

    assert!(matches!(app.views.get(&ViewKind::BestValue), Some(Ok(ViewData::Dishes(_)))));
    assert!(matches!(app.views.get(&ViewKind::Restaurants), Some(Ok(ViewData::Restaurants(_)))));
    assert!(!app.last_updated.is_empty());
}

#[test]
fn initial_selection_is_top_five_by_perceived_value() {
    let path = write_fixture("topfive.json", 8);
    let app = app_with_source(DataSource::File(path));

    assert_eq!(app.dish_rows.len(), INITIAL_DISH_LIMIT);
    // perceived_value == dish index, so the top five are 7,6,5,4,3
    let names: Vec<&str> = app.dish_rows.iter().map(|d| d.dish.name.as_str()).collect();
    assert_eq!(names, ["Dish 7", "Dish 6", "Dish 5", "Dish 4", "Dish 3"]);
}

#[test]
fn fewer_dishes_than_the_cap_show_them_all() {
    let path = write_fixture("short.json", 2);
    let app = app_with_source(DataSource::File(path));
    assert_eq!(app.dish_rows.len(), 2);
}

#[test]
fn broken_source_swaps_in_the_literal_error_texts() {
    let app = app_with_source(DataSource::File(PathBuf::from("no/such/menu_data.json")));

    match app.views.get(&ViewKind::BestValue) {
        Some(Err(msg)) => assert_eq!(msg, DISHES_LOAD_ERROR),
        other => panic!("dish view should hold its error text, got {other:?}"),
    }
    match app.views.get(&ViewKind::Restaurants) {
        Some(Err(msg)) => assert_eq!(msg, RESTAURANTS_LOAD_ERROR),
        other => panic!("restaurant view should hold its error text, got {other:?}"),
    }
    assert!(app.dish_rows.is_empty());
}
