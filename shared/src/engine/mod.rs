//! Yield prediction and historical statistics engine
//!
//! Data flows record snapshot → [`filter`] → [`statistics`] → [`predictor`]
//! → [`accuracy`] once the actual yield of a batch is known. Every stage is a
//! pure function over its inputs; callers fetch one record snapshot per
//! computation cycle and reuse it for every stage.

pub mod accuracy;
pub mod entry_stats;
pub mod filter;
pub mod predictor;
pub mod statistics;

pub use accuracy::{classify_band, score, score_report};
pub use entry_stats::{entry_stats, pooled_averages};
pub use filter::{select_history, History};
pub use predictor::{predict, predict_method};
pub use statistics::{build_profile, ratio_stats};
