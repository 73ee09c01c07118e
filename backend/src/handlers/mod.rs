//! HTTP handlers for the Citrus Juice Tracker API

mod entry;
mod health;
mod prediction;

pub use entry::*;
pub use health::*;
pub use prediction::*;
