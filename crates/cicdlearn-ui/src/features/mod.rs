//! Page feature slices.

pub(crate) mod home;
