// ============================================================================
// Domain Models Module
// Batch inputs, reports and configuration
// ============================================================================

pub mod config;
pub mod report;
pub mod token_pair;

pub use config::{BatchConfig, ReportFormat};
pub use report::{BatchSummary, CaseReport, InvalidOperand, Operand, Outcome};
pub use token_pair::{read_tokens, TokenPair, TokenPairs};
