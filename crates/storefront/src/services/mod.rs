//! Domain services.

pub mod rewards;
pub mod sizing;
pub mod style;
