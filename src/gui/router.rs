// src/gui/router.rs
use crate::config::options::ViewKind::{ self, * };
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::best_value::PAGE,
    &pages::restaurants::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: &ViewKind) -> &'static dyn Page {
    match kind {
        BestValue   => &pages::best_value::PAGE,
        Restaurants => &pages::restaurants::PAGE,
    }
}
