// src/cards.rs
//
// Pure builders: one record in, one renderable card out. A card is plain
// data; the GUI renders it as widgets, the HTML exporter as markup.
// Escaping happens only at the markup boundary (core/html.rs); the GUI
// draws text verbatim.

use crate::config::consts::{NO_MENU_ITEMS, NO_RATING};
use crate::core::html;
use crate::core::sanitize::normalize_ws;
use crate::format;
use crate::menu::{RankedDish, Restaurant};

pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

/// Full card for the best-value dish list.
pub struct DishCard {
    pub name: String,
    pub restaurant: String,
    /// Raw display string from the source, rendered unformatted.
    pub price: String,
    pub description: String,
    pub metrics: [Metric; 4],
}

pub fn dish_card(d: &RankedDish) -> DishCard {
    DishCard {
        name: normalize_ws(&d.dish.name),
        restaurant: normalize_ws(&d.restaurant_name),
        price: d.dish.price.clone(),
        description: normalize_ws(&d.dish.description),
        metrics: [
            Metric { label: "Value rating", value: format::score(d.dish.value_rating) },
            Metric { label: "Perceived value", value: format::score(d.dish.perceived_value) },
            Metric { label: "Overall rating", value: format::rating(d.dish.overall_rating) },
            Metric { label: "Cost to make", value: format::currency(d.dish.cost_to_make) },
        ],
    }
}

/// One line of the nested menu list on a restaurant card. Overall rating
/// and cost-to-make are deliberately left out of the nested view.
pub struct MenuLine {
    pub name: String,
    pub price: String,
    pub description: String,
    pub value_rating: String,
    pub perceived_value: String,
}

pub struct RestaurantCard {
    pub name: String,
    pub cuisine: String,
    /// First menu item's overall rating (the upstream page shows exactly
    /// that, not an aggregate), or the no-rating fallback text.
    pub rating: String,
    pub website: String,
    pub menu_url: String,
    pub menu: Vec<MenuLine>,
}

impl RestaurantCard {
    /// Fallback text to render in place of an empty menu list.
    pub fn menu_note(&self) -> Option<&'static str> {
        self.menu.is_empty().then_some(NO_MENU_ITEMS)
    }
}

pub fn restaurant_card(r: &Restaurant) -> RestaurantCard {
    let rating = r
        .menu_items
        .first()
        .map(|d| format::rating(d.overall_rating))
        .unwrap_or_else(|| s!(NO_RATING));

    let menu = r
        .menu_items
        .iter()
        .map(|d| MenuLine {
            name: normalize_ws(&d.name),
            price: d.price.clone(),
            description: normalize_ws(&d.description),
            value_rating: format::score(d.value_rating),
            perceived_value: format::score(d.perceived_value),
        })
        .collect();

    RestaurantCard {
        name: normalize_ws(&r.name),
        cuisine: normalize_ws(&r.cuisine),
        rating,
        website: r.website.clone(),
        menu_url: r.menu_url.clone(),
        menu,
    }
}

/* ---------------- Markup rendering (export) ---------------- */

impl DishCard {
    pub fn to_html(&self) -> String {
        let mut body = s!();
        body.push_str(&html::tag("h3", "", &html::escape(&self.name)));
        body.push_str(&html::tag("p", "restaurant", &html::escape(&self.restaurant)));
        body.push_str(&html::tag("p", "price", &html::escape(&self.price)));
        body.push_str(&html::tag("p", "description", &html::escape(&self.description)));

        let mut metrics = s!();
        for m in &self.metrics {
            metrics.push_str(&html::tag(
                "span",
                "metric",
                &format!("{}: {}", m.label, html::escape(&m.value)),
            ));
        }
        body.push_str(&html::tag("div", "metrics", &metrics));

        html::tag("div", "dish-card", &body)
    }
}

impl RestaurantCard {
    pub fn to_html(&self) -> String {
        let mut body = s!();
        body.push_str(&html::tag("h3", "", &html::escape(&self.name)));
        body.push_str(&html::tag("p", "cuisine", &html::escape(&self.cuisine)));
        body.push_str(&html::tag(
            "p",
            "rating",
            &format!("Rating: {}", html::escape(&self.rating)),
        ));

        let links = join!(
            &html::link(&self.website, "Website"),
            " ",
            &html::link(&self.menu_url, "View Menu"),
        );
        body.push_str(&html::tag("p", "links", &links));

        match self.menu_note() {
            Some(note) => body.push_str(&html::tag("p", "no-menu", note)),
            None => {
                let mut items = s!();
                for line in &self.menu {
                    let mut li = s!();
                    li.push_str(&html::tag("strong", "", &html::escape(&line.name)));
                    li.push_str(&html::tag("span", "price", &html::escape(&line.price)));
                    li.push_str(&html::tag("span", "description", &html::escape(&line.description)));
                    li.push_str(&html::tag(
                        "span",
                        "value",
                        &format!("Value: {}", html::escape(&line.value_rating)),
                    ));
                    li.push_str(&html::tag(
                        "span",
                        "perceived",
                        &format!("Perceived: {}", html::escape(&line.perceived_value)),
                    ));
                    items.push_str(&html::tag("li", "", &li));
                }
                body.push_str(&html::tag("ul", "menu", &items));
            }
        }

        html::tag("div", "restaurant-card", &body)
    }
}
