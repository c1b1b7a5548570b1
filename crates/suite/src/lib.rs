//! Test suites for the demo shop: mobile app flows, a browser smoke test,
//! and API/database checks. Page objects and shared test data live here;
//! session plumbing comes from `autotest-harness`.

pub mod catalog;
pub mod constants;
pub mod pages;
