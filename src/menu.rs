// src/menu.rs
//
// Canonical menu records as the scraper pipeline emits them, plus the
// derived dish views the GUI and CLI display.
//
// All metrics (price_numeric, value_rating, perceived_value,
// overall_rating, cost_to_make) are computed upstream; this crate only
// renders them. A record missing its name fails the parse; a record
// missing a metric degrades to 0.0 instead of failing the whole load.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::config::consts::{INITIAL_DISH_LIMIT, SORTED_DISH_LIMIT};
use crate::config::options::SortKey;
use crate::format;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Display string as scraped ("$12.95"), not guaranteed numeric.
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub price_numeric: f64,
    #[serde(default)]
    pub value_rating: f64,
    #[serde(default)]
    pub perceived_value: f64,
    #[serde(default)]
    pub overall_rating: f64,
    #[serde(default)]
    pub cost_to_make: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub menu_url: String,
    /// Missing field is the same as an empty menu.
    #[serde(default)]
    pub menu_items: Vec<Dish>,
}

/// A dish flattened out of its restaurant for the ranked views.
/// Transient: built per load, never persisted.
#[derive(Clone, Debug)]
pub struct RankedDish {
    pub dish: Dish,
    pub restaurant_name: String,
    pub cuisine: String,
}

/// Copy every dish out of every restaurant. Restaurants with empty menus
/// contribute nothing.
pub fn flatten_dishes(restaurants: &[Restaurant]) -> Vec<RankedDish> {
    let mut out = Vec::new();
    for r in restaurants {
        for d in &r.menu_items {
            out.push(RankedDish {
                dish: d.clone(),
                restaurant_name: r.name.clone(),
                cuisine: r.cuisine.clone(),
            });
        }
    }
    out
}

/// Descending by `metric`; ties fall back to (restaurant, dish name) so the
/// same input always yields the same sequence. total_cmp keeps NaN
/// metrics deterministic too.
fn desc_by<F: Fn(&RankedDish) -> f64>(a: &RankedDish, b: &RankedDish, metric: F) -> Ordering {
    metric(b)
        .total_cmp(&metric(a))
        .then_with(|| a.restaurant_name.cmp(&b.restaurant_name))
        .then_with(|| a.dish.name.cmp(&b.dish.name))
}

/// The two pre-sorted dish views. Built once per load and handed to the
/// sort control by reference; a sort-key change never re-reads the source.
#[derive(Clone, Debug, Default)]
pub struct BestValueData {
    pub by_value_rating: Vec<RankedDish>,
    pub by_perceived_value: Vec<RankedDish>,
}

impl BestValueData {
    pub fn build(dishes: Vec<RankedDish>) -> Self {
        let mut by_value_rating = dishes.clone();
        by_value_rating.sort_by(|a, b| desc_by(a, b, |d| d.dish.value_rating));

        let mut by_perceived_value = dishes;
        by_perceived_value.sort_by(|a, b| desc_by(a, b, |d| d.dish.perceived_value));

        Self { by_value_rating, by_perceived_value }
    }

    pub fn len(&self) -> usize {
        self.by_perceived_value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_perceived_value.is_empty()
    }

    /// The selection rendered right after a load: top dishes by perceived
    /// value, capped at INITIAL_DISH_LIMIT.
    pub fn initial(&self) -> Vec<RankedDish> {
        self.by_perceived_value
            .iter()
            .take(INITIAL_DISH_LIMIT)
            .cloned()
            .collect()
    }

    /// The selection rendered after a sort-key change, capped at
    /// SORTED_DISH_LIMIT.
    pub fn sorted_view(&self, key: SortKey) -> Vec<RankedDish> {
        self.sorted_view_top(key, SORTED_DISH_LIMIT)
    }

    /// Same, with a caller-chosen cap (CLI --top).
    pub fn sorted_view_top(&self, key: SortKey, limit: usize) -> Vec<RankedDish> {
        let mut out = match key {
            SortKey::ValueRating => self.by_value_rating.clone(),
            _ => self.by_perceived_value.clone(),
        };
        match key {
            // Stable sorts: ties keep their perceived-value order.
            SortKey::Price => {
                out.sort_by(|a, b| a.dish.price_numeric.total_cmp(&b.dish.price_numeric));
            }
            SortKey::Rating => {
                out.sort_by(|a, b| b.dish.overall_rating.total_cmp(&a.dish.overall_rating));
            }
            SortKey::ValueRating | SortKey::PerceivedValue => {}
        }
        out.truncate(limit);
        out
    }
}

/* ---------------- Table projections (Copy/Export/CLI) ---------------- */

pub const DISH_HEADERS: [&str; 8] = [
    "Dish", "Restaurant", "Price", "Description",
    "Value rating", "Perceived value", "Overall rating", "Cost to make",
];

pub const RESTAURANT_HEADERS: [&str; 6] = [
    "Restaurant", "Cuisine", "Rating", "Website", "Menu URL", "Dishes",
];

pub fn dish_rows(dishes: &[RankedDish]) -> Vec<Vec<String>> {
    dishes
        .iter()
        .map(|d| {
            vec![
                d.dish.name.clone(),
                d.restaurant_name.clone(),
                d.dish.price.clone(),
                d.dish.description.clone(),
                format::score(d.dish.value_rating),
                format::score(d.dish.perceived_value),
                format::rating(d.dish.overall_rating),
                format::currency(d.dish.cost_to_make),
            ]
        })
        .collect()
}

pub fn restaurant_rows(restaurants: &[Restaurant]) -> Vec<Vec<String>> {
    use crate::config::consts::NO_RATING;
    restaurants
        .iter()
        .map(|r| {
            let rating = r
                .menu_items
                .first()
                .map(|d| format::rating(d.overall_rating))
                .unwrap_or_else(|| s!(NO_RATING));
            vec![
                r.name.clone(),
                r.cuisine.clone(),
                rating,
                r.website.clone(),
                r.menu_url.clone(),
                r.menu_items.len().to_string(),
            ]
        })
        .collect()
}
