// ============================================================================
// Engine Module
// Drives token pairs through validation, normalization and exact addition
// ============================================================================

mod batch_processor;

pub mod factory;

pub use batch_processor::{evaluate_pair, BatchError, BatchOutcome, BatchProcessor};
pub use factory::{create_from_config, BatchProcessorBuilder};
