// ============================================================================
// Report Sink Interface
// Defines the contract for consuming case reports
// ============================================================================

use crate::domain::{BatchConfig, BatchSummary, CaseReport, ReportFormat};
use parking_lot::Mutex;
use std::io::{self, Write};

/// Report sink trait for consuming batch output.
/// Implementations can print, log, collect, forward, etc.
pub trait ReportSink: Send + Sync {
    /// Handle a single case report
    fn on_report(&self, report: &CaseReport) -> io::Result<()>;

    /// Batch report handler (optional optimization)
    fn on_reports(&self, reports: &[CaseReport]) -> io::Result<()> {
        for report in reports {
            self.on_report(report)?;
        }
        Ok(())
    }

    /// Called once after the last report of a run
    fn on_summary(&self, _summary: &BatchSummary) -> io::Result<()> {
        Ok(())
    }
}

/// No-op report sink for testing
pub struct NoOpReportSink;

impl ReportSink for NoOpReportSink {
    fn on_report(&self, _report: &CaseReport) -> io::Result<()> {
        Ok(())
    }
}

/// Logging report sink
pub struct LoggingReportSink;

impl ReportSink for LoggingReportSink {
    fn on_report(&self, report: &CaseReport) -> io::Result<()> {
        tracing::debug!(case = report.case, valid = report.is_valid(), "{}", report);
        Ok(())
    }

    fn on_summary(&self, summary: &BatchSummary) -> io::Result<()> {
        tracing::info!(
            total = summary.total,
            valid = summary.valid,
            invalid = summary.invalid,
            "Batch finished"
        );
        Ok(())
    }
}

/// Keeps every report in memory
#[derive(Default)]
pub struct CollectingReportSink {
    reports: Mutex<Vec<CaseReport>>,
}

impl CollectingReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }

    /// Take the collected reports, leaving the sink empty
    pub fn take(&self) -> Vec<CaseReport> {
        std::mem::take(&mut *self.reports.lock())
    }
}

impl ReportSink for CollectingReportSink {
    fn on_report(&self, report: &CaseReport) -> io::Result<()> {
        self.reports.lock().push(report.clone());
        Ok(())
    }

    fn on_reports(&self, reports: &[CaseReport]) -> io::Result<()> {
        self.reports.lock().extend_from_slice(reports);
        Ok(())
    }
}

/// Renders reports to any `Write` (stdout, a file, a buffer)
pub struct WriterReportSink<W: Write + Send> {
    writer: Mutex<W>,
    format: ReportFormat,
}

impl<W: Write + Send> WriterReportSink<W> {
    pub fn new(writer: W, format: ReportFormat) -> Self {
        Self {
            writer: Mutex::new(writer),
            format,
        }
    }

    /// Render in the format named by `config`
    pub fn from_config(writer: W, config: &BatchConfig) -> Self {
        Self::new(writer, config.format)
    }

    /// Human-readable case blocks, each followed by a blank line
    pub fn text(writer: W) -> Self {
        Self::new(writer, ReportFormat::Text)
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_report(&self, writer: &mut W, report: &CaseReport) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => {
                writeln!(writer, "{}", report)?;
                writeln!(writer)
            },
            #[cfg(feature = "serde")]
            ReportFormat::JsonLines => {
                serde_json::to_writer(&mut *writer, report)?;
                writeln!(writer)
            },
        }
    }
}

impl<W: Write + Send> ReportSink for WriterReportSink<W> {
    fn on_report(&self, report: &CaseReport) -> io::Result<()> {
        let mut writer = self.writer.lock();
        self.write_report(&mut *writer, report)
    }

    fn on_reports(&self, reports: &[CaseReport]) -> io::Result<()> {
        let mut writer = self.writer.lock();
        for report in reports {
            self.write_report(&mut *writer, report)?;
        }
        writer.flush()
    }

    fn on_summary(&self, _summary: &BatchSummary) -> io::Result<()> {
        self.writer.lock().flush()
    }
}
