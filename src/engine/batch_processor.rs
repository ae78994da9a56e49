// ============================================================================
// Batch Processor
// Validates, normalizes and adds token pairs, then hands reports to a sink
// ============================================================================

use crate::domain::{
    BatchConfig, BatchSummary, CaseReport, InvalidOperand, Operand, Outcome, TokenPair,
    TokenPairs,
};
use crate::interfaces::ReportSink;
use crate::numeric::{DecimalValue, Literal};
use std::fmt;
use std::io::{self, BufRead};
use std::sync::Arc;

/// Errors that abort a batch run
#[derive(Debug)]
pub enum BatchError {
    /// Reading input or writing reports failed
    Io(io::Error),
    /// Configuration rejected by `BatchConfig::validate`
    Config(String),
    /// A worker thread panicked during parallel evaluation
    WorkerPanicked,
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::Io(err) => write!(f, "i/o error: {}", err),
            BatchError::Config(reason) => write!(f, "invalid batch configuration: {}", reason),
            BatchError::WorkerPanicked => write!(f, "a batch worker thread panicked"),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for BatchError {
    fn from(err: io::Error) -> Self {
        BatchError::Io(err)
    }
}

/// Everything a batch run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub reports: Vec<CaseReport>,
    pub summary: BatchSummary,
}

/// Evaluate one pair.
///
/// Both tokens are validated before anything is normalized. If either fails,
/// no arithmetic happens and the failing token(s) are reported, left first.
/// With `report_all_invalid == false` only the first failing token is listed.
pub fn evaluate_pair(pair: &TokenPair, report_all_invalid: bool) -> CaseReport {
    let outcome = match (Literal::parse(&pair.left), Literal::parse(&pair.right)) {
        (Ok(left), Ok(right)) => {
            let left = DecimalValue::normalize(left);
            let right = DecimalValue::normalize(right);
            let sum = &left + &right;
            Outcome::Sum { left, right, sum }
        },
        (left, right) => {
            let mut operands = Vec::with_capacity(2);
            if let Err(error) = left {
                operands.push(InvalidOperand {
                    operand: Operand::Left,
                    token: pair.left.clone(),
                    error,
                });
            }
            if let Err(error) = right {
                if report_all_invalid || operands.is_empty() {
                    operands.push(InvalidOperand {
                        operand: Operand::Right,
                        token: pair.right.clone(),
                        error,
                    });
                }
            }
            Outcome::Invalid { operands }
        },
    };

    let report = CaseReport {
        case: pair.case,
        left: pair.left.clone(),
        right: pair.right.clone(),
        outcome,
    };
    tracing::debug!(case = pair.case, valid = report.is_valid(), "Evaluated case");
    report
}

/// Runs token pairs through validation and exact addition
pub struct BatchProcessor {
    config: BatchConfig,
    sink: Arc<dyn ReportSink>,
}

impl BatchProcessor {
    /// Create a processor. Use [`crate::engine::create_from_config`] to get a
    /// validated configuration.
    pub fn new(config: BatchConfig, sink: Arc<dyn ReportSink>) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Evaluate a single pair without notifying the sink
    pub fn evaluate(&self, pair: &TokenPair) -> CaseReport {
        evaluate_pair(pair, self.config.report_all_invalid)
    }

    /// Pair up whitespace-delimited tokens from `text` and run them
    pub fn run_text(&self, text: &str) -> Result<BatchOutcome, BatchError> {
        self.run(TokenPairs::from_text(text))
    }

    /// Pair up whitespace-delimited tokens from `reader` and run them
    pub fn run_reader<R: BufRead>(&self, reader: R) -> Result<BatchOutcome, BatchError> {
        self.run(TokenPairs::from_reader(reader)?)
    }

    /// Evaluate every pair, deliver reports to the sink in input order, and
    /// return them with a summary.
    pub fn run(&self, pairs: TokenPairs) -> Result<BatchOutcome, BatchError> {
        let (pairs, discarded) = pairs.collect_pairs();
        if let Some(token) = &discarded {
            tracing::warn!("Discarding unpaired trailing token {:?}", token);
        }

        let reports = self.evaluate_all(&pairs)?;
        self.sink.on_reports(&reports)?;

        let summary = BatchSummary::from_reports(&reports, discarded);
        self.sink.on_summary(&summary)?;
        tracing::info!(
            "Batch complete: {} cases, {} valid, {} invalid",
            summary.total,
            summary.valid,
            summary.invalid
        );

        Ok(BatchOutcome { reports, summary })
    }

    fn evaluate_all(&self, pairs: &[TokenPair]) -> Result<Vec<CaseReport>, BatchError> {
        let workers = self.config.workers.max(1);
        if workers == 1 || pairs.len() <= self.config.min_chunk_size {
            return Ok(pairs.iter().map(|p| self.evaluate(p)).collect());
        }
        self.evaluate_parallel(pairs, workers)
    }

    /// Split into contiguous chunks, one scoped thread each, and concatenate
    /// results in chunk order so reports stay in input order.
    fn evaluate_parallel(
        &self,
        pairs: &[TokenPair],
        workers: usize,
    ) -> Result<Vec<CaseReport>, BatchError> {
        let chunk_size = pairs
            .len()
            .div_ceil(workers)
            .max(self.config.min_chunk_size.max(1));
        let report_all = self.config.report_all_invalid;
        tracing::debug!(
            "Evaluating {} cases in chunks of {} across up to {} workers",
            pairs.len(),
            chunk_size,
            workers
        );

        crossbeam::thread::scope(|scope| -> Result<Vec<CaseReport>, BatchError> {
            let handles: Vec<_> = pairs
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move |_| {
                        chunk
                            .iter()
                            .map(|p| evaluate_pair(p, report_all))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            let mut reports = Vec::with_capacity(pairs.len());
            for handle in handles {
                reports.extend(handle.join().map_err(|_| BatchError::WorkerPanicked)?);
            }
            Ok(reports)
        })
        .map_err(|_| BatchError::WorkerPanicked)?
    }
}
