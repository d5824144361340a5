//! Framework-free page logic, testable without a browser.

pub mod health;
pub mod lifecycle;
