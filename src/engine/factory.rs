// ============================================================================
// Batch Processor Factory
// Creates batch processors with validated configuration
// ============================================================================

use crate::domain::config::{BatchConfig, ReportFormat};
use crate::engine::BatchProcessor;
use crate::interfaces::ReportSink;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a batch processor from configuration
///
/// # Arguments
/// * `config` - Batch configuration
/// * `sink` - Receiver for case reports
///
/// # Returns
/// * `Result<BatchProcessor, String>` - Configured processor or error
///
/// # Example
/// ```
/// use exact_decimal::prelude::*;
/// use std::sync::Arc;
///
/// let processor = create_from_config(BatchConfig::classic(), Arc::new(NoOpReportSink)).unwrap();
/// let outcome = processor.run_text("0.1 0.2").unwrap();
/// assert_eq!(outcome.reports[0].sum().unwrap().to_string(), "0.3");
/// ```
pub fn create_from_config(
    config: BatchConfig,
    sink: Arc<dyn ReportSink>,
) -> Result<BatchProcessor, String> {
    config.validate()?;
    Ok(BatchProcessor::new(config, sink))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating batch processors with fluent API
///
/// # Example
/// ```
/// use exact_decimal::prelude::*;
/// use std::sync::Arc;
///
/// let processor = BatchProcessorBuilder::new()
///     .workers(4)
///     .min_chunk_size(128)
///     .build(Arc::new(NoOpReportSink))
///     .unwrap();
/// assert_eq!(processor.config().workers, 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchProcessorBuilder {
    config: BatchConfig,
}

impl BatchProcessorBuilder {
    /// Create a new builder with default (sequential) settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Number of worker threads
    pub fn workers(mut self, workers: usize) -> Self {
        self.config.workers = workers;
        self
    }

    /// Minimum cases per worker before work is split
    pub fn min_chunk_size(mut self, size: usize) -> Self {
        self.config.min_chunk_size = size;
        self
    }

    /// Report only the first invalid token of each pair
    pub fn first_invalid_only(mut self) -> Self {
        self.config.report_all_invalid = false;
        self
    }

    /// Rendering picked up by `WriterReportSink::from_config`
    pub fn format(mut self, format: ReportFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Access the configuration built so far
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Build the processor
    pub fn build(self, sink: Arc<dyn ReportSink>) -> Result<BatchProcessor, String> {
        create_from_config(self.config, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpReportSink;

    #[test]
    fn test_create_from_config() {
        let processor = create_from_config(BatchConfig::new(), Arc::new(NoOpReportSink));
        assert!(processor.is_ok());
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let result =
            create_from_config(BatchConfig::new().with_workers(0), Arc::new(NoOpReportSink));
        assert!(result.is_err());
    }

    #[test]
    fn test_builder() {
        let processor = BatchProcessorBuilder::new()
            .workers(2)
            .first_invalid_only()
            .build(Arc::new(NoOpReportSink))
            .unwrap();

        assert_eq!(processor.config().workers, 2);
        assert!(!processor.config().report_all_invalid);
    }

    #[test]
    fn test_builder_from_config() {
        let builder = BatchProcessorBuilder::from_config(BatchConfig::classic()).workers(3);
        assert_eq!(builder.config().workers, 3);
        assert!(!builder.config().report_all_invalid);
    }
}
