//! Shared types and yield analytics for the Citrus Juice Tracker
//!
//! This crate contains the domain models, input validation and the
//! synchronous statistics engine shared by the backend and the WASM
//! front-end bindings. Nothing here performs I/O.

pub mod engine;
pub mod error;
pub mod models;
pub mod types;
pub mod validation;

pub use engine::*;
pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
