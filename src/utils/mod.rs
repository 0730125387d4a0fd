//! Text helpers for the driver.

pub mod groups;
