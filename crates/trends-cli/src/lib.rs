//! CLI library components for the social trends dashboard.

pub mod logging;
pub mod render;
