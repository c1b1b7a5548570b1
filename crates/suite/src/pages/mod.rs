//! Page objects: one struct per screen, owning its locators and the
//! action/validation wrappers bound to the active session.

pub mod mobile;
pub mod web;
