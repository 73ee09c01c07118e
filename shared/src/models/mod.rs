//! Domain models for the Citrus Juice Tracker

mod accuracy;
mod entry;
mod prediction;
mod profile;
mod record;

pub use accuracy::*;
pub use entry::*;
pub use prediction::*;
pub use profile::*;
pub use record::*;
