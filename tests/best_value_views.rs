// tests/best_value_views.rs
//
// End-to-end view behavior against a real data file: load → flatten →
// rank → render selections, without any UI.

use std::fs;
use std::path::PathBuf;

use menu_value::cards;
use menu_value::config::consts::{NO_MENU_ITEMS, NO_RATING};
use menu_value::config::options::SortKey;
use menu_value::gui::pages::{best_value, restaurants, Page, ViewData};
use menu_value::menu::{flatten_dishes, BestValueData};
use menu_value::source::{self, DataSource};

fn fixture_json() -> String {
    serde_json::json!([
        {
            "name": "Spenard Roadhouse",
            "cuisine": "American",
            "website": "https://spenard.example",
            "menu_url": "https://spenard.example/menu",
            "menu_items": [
                {
                    "name": "Burger",
                    "description": "House burger",
                    "price": "$15.00",
                    "price_numeric": 15.0,
                    "value_rating": 0.4,
                    "perceived_value": 9.1,
                    "overall_rating": 4.5,
                    "cost_to_make": 4.5
                },
                {
                    "name": "Wings",
                    "description": "A dozen",
                    "price": "$9.00",
                    "price_numeric": 9.0,
                    "value_rating": 0.9,
                    "perceived_value": 2.0,
                    "overall_rating": 3.5,
                    "cost_to_make": 2.7
                },
                {
                    "name": "Nachos",
                    "description": "Shareable",
                    "price": "$12.00",
                    "price_numeric": 12.0,
                    "value_rating": 0.7,
                    "perceived_value": 5.5,
                    "overall_rating": 4.0,
                    "cost_to_make": 3.6
                }
            ]
        },
        {
            "name": "Empty Kitchen",
            "cuisine": "Fusion",
            "website": "https://empty.example",
            "menu_url": "https://empty.example/menu",
            "menu_items": []
        }
    ])
    .to_string()
}

fn tmp_data(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("menu_value_views_{}", name));
    fs::write(&p, fixture_json()).unwrap();
    p
}

#[test]
fn initial_load_shows_all_three_dishes_by_perceived_value() {
    let path = tmp_data("initial.json");
    let restaurants = source::load(&DataSource::File(path)).unwrap();
    let data = BestValueData::build(flatten_dishes(&restaurants));

    // min(5, total) dishes, perceived value descending
    let initial = data.initial();
    let names: Vec<&str> = initial.iter().map(|d| d.dish.name.as_str()).collect();
    assert_eq!(names, ["Burger", "Nachos", "Wings"]);
}

#[test]
fn restaurant_view_keeps_source_order_and_fallback_texts() {
    let path = tmp_data("restaurants.json");
    let rs = source::load(&DataSource::File(path)).unwrap();
    assert_eq!(rs.len(), 2);

    let cards: Vec<_> = rs.iter().map(cards::restaurant_card).collect();
    assert_eq!(cards[0].name, "Spenard Roadhouse");
    assert_eq!(cards[0].rating, "4.5/5"); // first dish's rating, not an aggregate
    assert_eq!(cards[0].menu_note(), None);

    assert_eq!(cards[1].name, "Empty Kitchen");
    assert_eq!(cards[1].rating, NO_RATING);
    assert_eq!(cards[1].menu_note(), Some(NO_MENU_ITEMS));
}

#[test]
fn sort_change_needs_no_second_fetch() {
    let path = tmp_data("nosecondfetch.json");
    let restaurants = source::load(&DataSource::File(path.clone())).unwrap();
    let data = BestValueData::build(flatten_dishes(&restaurants));

    // Remove the source: sorting must keep working on resident data.
    fs::remove_file(&path).unwrap();

    let by_value_view = data.sorted_view(SortKey::ValueRating);
    let by_value: Vec<&str> = by_value_view
        .iter()
        .map(|d| d.dish.name.as_str())
        .collect();
    assert_eq!(by_value, ["Wings", "Nachos", "Burger"]);

    let by_price = data.sorted_view(SortKey::Price);
    for pair in by_price.windows(2) {
        assert!(pair[0].dish.price_numeric <= pair[1].dish.price_numeric);
    }

    let by_rating = data.sorted_view(SortKey::Rating);
    for pair in by_rating.windows(2) {
        assert!(pair[0].dish.overall_rating >= pair[1].dish.overall_rating);
    }
}

#[test]
fn loaders_are_independent_on_failure() {
    // The dish loader's source is broken; the restaurant loader's is fine.
    let good = tmp_data("independent.json");
    let bad = DataSource::File(PathBuf::from("no/such/file.json"));

    let dishes = best_value::PAGE.load(&bad, None);
    assert!(dishes.is_err());

    let rest = restaurants::PAGE.load(&DataSource::File(good), None).unwrap();
    match rest {
        ViewData::Restaurants(rs) => assert_eq!(rs.len(), 2),
        other => panic!("expected restaurants, got {:?}", std::mem::discriminant(&other)),
    }
}

#[test]
fn page_loads_produce_the_expected_view_shapes() {
    let path = tmp_data("shapes.json");
    let src = DataSource::File(path);

    match best_value::PAGE.load(&src, None).unwrap() {
        ViewData::Dishes(data) => {
            assert_eq!(data.len(), 3);
            assert_eq!(data.by_value_rating.len(), data.by_perceived_value.len());
        }
        _ => panic!("best value page must produce dish data"),
    }

    match restaurants::PAGE.load(&src, None).unwrap() {
        ViewData::Restaurants(rs) => assert_eq!(rs.len(), 2),
        _ => panic!("restaurants page must produce restaurant data"),
    }
}
