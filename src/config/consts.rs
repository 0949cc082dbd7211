// src/config/consts.rs

// Provider
pub const DEFAULT_API_URL: &str = "https://api.jolpi.ca/ergast/f1";
pub const API_URL_ENV: &str = "GP_RESULTS_API_URL";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const RESULTS_PAGE_LIMIT: u32 = 100;
pub const USER_AGENT: &str = concat!("gp_results/", env!("CARGO_PKG_VERSION"));

// Event
pub const DEFAULT_GP_NAME: &str = "Dutch Grand Prix";

// Export
pub const DEFAULT_JSON_FILE: &str = "dutch_gp_results.json";
pub const DEFAULT_HTML_FILE: &str = "dutch_gp_results.html";
pub const HTML_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const NOT_CLASSIFIED: &str = "NC";

// Console
pub const BANNER_RULE_WIDTH: usize = 40;
pub const PODIUM_SIZE: usize = 3;
