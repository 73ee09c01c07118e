//! Business logic services for the Citrus Juice Tracker

pub mod entry;
pub mod prediction;

pub use entry::EntryService;
pub use prediction::PredictionService;
