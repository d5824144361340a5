//! Home page slice.
//!
//! # Design
//! - State transitions and text come from `core::health`.
//! - The probe runs once per mount through `core::lifecycle`.

pub(crate) mod view;
