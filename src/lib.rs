// ============================================================================
// Exact Decimal Library
// Decimal literal validation and exact arbitrary-precision addition
// ============================================================================

//! # Exact Decimal
//!
//! Validates textual decimal literals and adds them exactly, digit by digit,
//! without ever going through a binary floating-point type.
//!
//! ## Features
//!
//! - **Strict literal grammar**: `[+-]?digits(.digits)?`, nothing else
//! - **Canonical values**: no redundant zeros, zero is never negative
//! - **Arbitrary precision**: digit sequences grow as needed, no overflow
//! - **Batch driver**: pairs of tokens in, one report per pair out
//! - **Parallel batches**: independent pairs spread across scoped threads
//!
//! ## Example
//!
//! ```rust
//! use exact_decimal::prelude::*;
//! use std::sync::Arc;
//!
//! // Direct arithmetic
//! let a: DecimalValue = "0.1".parse().unwrap();
//! let b: DecimalValue = "0.2".parse().unwrap();
//! assert_eq!((a + b).to_string(), "0.3");
//!
//! // Batch processing of token pairs
//! let processor = BatchProcessor::new(BatchConfig::new(), Arc::new(NoOpReportSink));
//! let outcome = processor.run_text("1 1.0\n-5. 3\n").unwrap();
//!
//! println!("{}", outcome.reports[0]); // Case 1: 1 + 1.0 / -> 1 + 1 = 2
//! assert!(!outcome.reports[1].is_valid());
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        BatchConfig, BatchSummary, CaseReport, InvalidOperand, Operand, Outcome, ReportFormat,
        TokenPair, TokenPairs,
    };
    pub use crate::engine::{
        create_from_config, evaluate_pair, BatchError, BatchOutcome, BatchProcessor,
        BatchProcessorBuilder,
    };
    pub use crate::interfaces::{
        CollectingReportSink, LoggingReportSink, NoOpReportSink, ReportSink, WriterReportSink,
    };
    pub use crate::numeric::{
        is_valid_literal, normalize, DecimalValue, Literal, LiteralError, NumericError,
        NumericResult, Sign,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_batch() {
        let sink = Arc::new(WriterReportSink::text(Vec::new()));
        let processor = create_from_config(BatchConfig::classic(), sink.clone()).unwrap();

        let outcome = processor
            .run_text("1 1.0\n+0001.0 -0001.005\n-5. 3\n100 -100\n0.1 0.2\nleftover")
            .unwrap();

        assert_eq!(outcome.summary.total, 5);
        assert_eq!(outcome.summary.valid, 4);
        assert_eq!(outcome.summary.discarded_token.as_deref(), Some("leftover"));

        drop(processor);
        let Ok(sink) = Arc::try_unwrap(sink) else {
            panic!("processor dropped, sink should be unique");
        };
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            text,
            "Case 1: 1 + 1.0\n  -> 1 + 1 = 2\n\n\
             Case 2: +0001.0 + -0001.005\n  -> 1 + -1.005 = -0.005\n\n\
             Case 3: -5. + 3\n  -> INVALID: '-5.' is not a valid decimal literal.\n\n\
             Case 4: 100 + -100\n  -> 100 + -100 = 0\n\n\
             Case 5: 0.1 + 0.2\n  -> 0.1 + 0.2 = 0.3\n\n"
        );
    }

    #[test]
    fn test_long_carry_chain() {
        let a: DecimalValue = format!("{}.{}", "9".repeat(60), "9".repeat(60)).parse().unwrap();
        let b: DecimalValue = format!("0.{}1", "0".repeat(59)).parse().unwrap();

        let sum = &a + &b;
        assert_eq!(sum.to_string(), format!("1{}", "0".repeat(60)));
        assert_eq!(&sum - &b, a);
    }
}
