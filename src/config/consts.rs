// src/config/consts.rs

// Data source. The scraper pipeline drops its output at DATA_FILE; the
// same document is reachable over HTTP when the bundled static server
// from the original deployment is running.
pub const DATA_FILE: &str = "data/menu_data.json";
pub const DATA_HOST: &str = "localhost";
pub const DATA_PORT: u16 = 8080;
pub const DATA_PATH: &str = "/data/menu_data.json";

// Display
pub const INITIAL_DISH_LIMIT: usize = 5; // dishes shown right after load
pub const SORTED_DISH_LIMIT: usize = 10; // dishes shown after a sort change

// User-visible fallback text
pub const DISHES_LOAD_ERROR: &str = "Failed to load menu data. Please try again later.";
pub const RESTAURANTS_LOAD_ERROR: &str = "Failed to load restaurant data. Please try again later.";
pub const NO_MENU_ITEMS: &str = "No menu items available";
pub const NO_RATING: &str = "No rating available";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "menu";

// Footer stamp, "Month D, YYYY"
pub const LAST_UPDATED_FORMAT: &str = "%B %-d, %Y";
