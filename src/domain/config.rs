// ============================================================================
// Batch Configuration
// Settings for evaluating literal pairs and rendering their reports
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Report Format
// ============================================================================

/// How case reports are rendered by writer-backed sinks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReportFormat {
    /// Human-readable case blocks:
    ///
    /// ```text
    /// Case 1: 1 + 1.0
    ///   -> 1 + 1 = 2
    /// ```
    #[default]
    Text,

    /// One JSON object per case (NDJSON)
    #[cfg(feature = "serde")]
    JsonLines,
}

// ============================================================================
// Complete Batch Configuration
// ============================================================================

/// Configuration for a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchConfig {
    /// Number of worker threads evaluating cases (1 = sequential)
    pub workers: usize,

    /// Report every invalid token of a pair instead of only the first
    pub report_all_invalid: bool,

    /// Parallel mode only splits work when each worker gets at least this
    /// many cases
    pub min_chunk_size: usize,

    /// Rendering picked up by `WriterReportSink::from_config`
    pub format: ReportFormat,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: 1,
            report_all_invalid: true,
            min_chunk_size: 64,
            format: ReportFormat::Text,
        }
    }
}

impl BatchConfig {
    /// Create the default sequential configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set number of worker threads
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Builder method: Report only the first invalid token of a pair
    pub fn with_first_invalid_only(mut self) -> Self {
        self.report_all_invalid = false;
        self
    }

    /// Builder method: Set minimum cases per worker
    pub fn with_min_chunk_size(mut self, size: usize) -> Self {
        self.min_chunk_size = size;
        self
    }

    /// Builder method: Set report format
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.workers == 0 {
            return Err("Worker count must be at least 1".to_string());
        }

        if self.min_chunk_size == 0 {
            return Err("Minimum chunk size must be at least 1".to_string());
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl BatchConfig {
    /// Line-for-line behavior of the classic batch adder
    /// - Sequential
    /// - Only the first invalid token of a pair is reported
    pub fn classic() -> Self {
        Self::new().with_first_invalid_only()
    }

    /// Parallel evaluation using every available core
    pub fn parallel() -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::new().with_workers(workers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = BatchConfig::new();

        assert_eq!(config.workers, 1);
        assert!(config.report_all_invalid);
        assert_eq!(config.format, ReportFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = BatchConfig::new()
            .with_workers(4)
            .with_min_chunk_size(8)
            .with_first_invalid_only();

        assert_eq!(config.workers, 4);
        assert_eq!(config.min_chunk_size, 8);
        assert!(!config.report_all_invalid);
    }

    #[test]
    fn test_validation() {
        assert!(BatchConfig::new().with_workers(0).validate().is_err());
        assert!(BatchConfig::new().with_min_chunk_size(0).validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        let classic = BatchConfig::classic();
        assert!(!classic.report_all_invalid);
        assert_eq!(classic.workers, 1);

        let parallel = BatchConfig::parallel();
        assert!(parallel.workers >= 1);
        assert!(parallel.validate().is_ok());
    }
}
