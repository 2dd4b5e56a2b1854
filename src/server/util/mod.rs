//! Small helpers shared across the server layers.

pub mod validate;
