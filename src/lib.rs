pub mod config;
pub mod error;
pub mod ffi;
pub(crate) mod hash_iterators;
pub mod metrics;
pub(crate) mod utils;

//re-exports
pub use config::BleuConfig;
pub use error::BleuError;
pub use metrics::bleu::{bleu_similarity, score, BleuReport, BleuScorer, NgramPrecision};
