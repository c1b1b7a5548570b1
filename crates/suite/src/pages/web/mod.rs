//! Web pages exercised by the browser suite.

pub mod search;

pub use search::SearchPage;
