//! Errors raised by the yield analytics engine
//!
//! Per-method gaps (no usable history, no batch quantity) are not errors;
//! they are reported as [`crate::UnavailableReason`] so the other method
//! still proceeds.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Fruit name is required")]
    EmptyFruitName,

    #[error("History window must be a positive number of records, got {0}")]
    InvalidWindow(usize),

    #[error("Invalid batch descriptor: {0}")]
    InvalidBatchDescriptor(&'static str),

    #[error("Actual yield must be a finite, non-negative amount, got {0}")]
    InvalidActual(f64),
}

pub type EngineResult<T> = Result<T, EngineError>;
