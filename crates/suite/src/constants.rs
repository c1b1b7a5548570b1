//! Test data shared across the suites: URLs, credentials, API and database
//! fixtures. Kept in one place so environment churn touches one file.

// ---- web ----

pub const GOOGLE_URL: &str = "https://www.google.com";
pub const GOOGLE_PAGE_TITLE: &str = "Google";
pub const SEARCH_TERM_SELENIUM: &str = "Selenium WebDriver";
pub const SEARCH_TERM_APPIUM: &str = "Appium Mobile Testing";

// ---- mobile app credentials ----

pub const VALID_USERNAME: &str = "bob@example.com";
pub const VALID_PASSWORD: &str = "10203040";
pub const LOCKED_USERNAME: &str = "alice@example.com";
pub const INVALID_USERNAME: &str = "not-a-user@example.com";
pub const INVALID_PASSWORD: &str = "wrong-password";

// ---- API ----

pub const API_BASE_URL: &str = "https://api.nprd.ccbcc.com/ccponboarding-qa";
pub const PROSPECT_ID: i64 = 971124;
pub const EXPECTED_ACCOUNT_NAME: &str = "3 STAR BEER & WINE";
pub const EXPECTED_CITY: &str = "North Chicago ";
pub const EXPECTED_STATE: &str = "IL";

// ---- database ----

/// Written for engines the `Any` driver speaks that take `?` placeholders
/// (mysql, sqlite), so no vendor-specific row limiting or quoting.
pub const DB_QUERY_PLANS: &str = "SELECT * FROM t_plan WHERE created_by = ? LIMIT 10";
pub const DB_CREATED_BY: &str = "neaq5h";
