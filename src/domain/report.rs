// ============================================================================
// Case Reports
// Result of evaluating one token pair
// ============================================================================

use crate::numeric::{DecimalValue, LiteralError};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which token of a pair a finding refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operand {
    Left,
    Right,
}

/// A token that failed the literal grammar
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InvalidOperand {
    pub operand: Operand,
    pub token: String,
    pub error: LiteralError,
}

/// What happened to a pair
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum Outcome {
    /// At least one token was rejected; no arithmetic was done
    Invalid { operands: Vec<InvalidOperand> },

    /// Both tokens were valid
    Sum {
        left: DecimalValue,
        right: DecimalValue,
        sum: DecimalValue,
    },
}

/// Report for one case, carrying the raw tokens as read
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CaseReport {
    pub case: usize,
    pub left: String,
    pub right: String,
    pub outcome: Outcome,
}

impl CaseReport {
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, Outcome::Sum { .. })
    }

    /// The exact sum, when both tokens were valid.
    pub fn sum(&self) -> Option<&DecimalValue> {
        match &self.outcome {
            Outcome::Sum { sum, .. } => Some(sum),
            Outcome::Invalid { .. } => None,
        }
    }

    /// Rejected tokens, left first. Empty for a valid case.
    pub fn invalid_operands(&self) -> &[InvalidOperand] {
        match &self.outcome {
            Outcome::Invalid { operands } => operands,
            Outcome::Sum { .. } => &[],
        }
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Case {}: {} + {}", self.case, self.left, self.right)?;
        match &self.outcome {
            Outcome::Invalid { operands } => {
                for invalid in operands {
                    write!(
                        f,
                        "\n  -> INVALID: '{}' is not a valid decimal literal.",
                        invalid.token
                    )?;
                }
                Ok(())
            },
            Outcome::Sum { left, right, sum } => {
                write!(f, "\n  -> {} + {} = {}", left, right, sum)
            },
        }
    }
}

/// Totals for a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    /// Unpaired trailing token that was not evaluated
    pub discarded_token: Option<String>,
}

impl BatchSummary {
    pub fn from_reports(reports: &[CaseReport], discarded_token: Option<String>) -> Self {
        let valid = reports.iter().filter(|r| r.is_valid()).count();
        Self {
            total: reports.len(),
            valid,
            invalid: reports.len() - valid,
            discarded_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Literal, LiteralErrorKind};

    fn d(s: &str) -> DecimalValue {
        s.parse().unwrap()
    }

    fn sum_report() -> CaseReport {
        CaseReport {
            case: 2,
            left: "+0001.0".to_string(),
            right: "-0001.005".to_string(),
            outcome: Outcome::Sum {
                left: d("1"),
                right: d("-1.005"),
                sum: d("-0.005"),
            },
        }
    }

    fn invalid_report() -> CaseReport {
        let error = Literal::parse("-5.").unwrap_err();
        CaseReport {
            case: 3,
            left: "-5.".to_string(),
            right: "3".to_string(),
            outcome: Outcome::Invalid {
                operands: vec![InvalidOperand {
                    operand: Operand::Left,
                    token: "-5.".to_string(),
                    error,
                }],
            },
        }
    }

    #[test]
    fn test_sum_display() {
        assert_eq!(
            sum_report().to_string(),
            "Case 2: +0001.0 + -0001.005\n  -> 1 + -1.005 = -0.005"
        );
    }

    #[test]
    fn test_invalid_display() {
        assert_eq!(
            invalid_report().to_string(),
            "Case 3: -5. + 3\n  -> INVALID: '-5.' is not a valid decimal literal."
        );
    }

    #[test]
    fn test_accessors() {
        let ok = sum_report();
        assert!(ok.is_valid());
        assert_eq!(ok.sum(), Some(&d("-0.005")));
        assert!(ok.invalid_operands().is_empty());

        let bad = invalid_report();
        assert!(!bad.is_valid());
        assert!(bad.sum().is_none());
        assert_eq!(bad.invalid_operands()[0].operand, Operand::Left);
        assert_eq!(
            bad.invalid_operands()[0].error.kind,
            LiteralErrorKind::MissingFractionDigits
        );
    }

    #[test]
    fn test_summary() {
        let summary =
            BatchSummary::from_reports(&[sum_report(), invalid_report()], Some("7".to_string()));
        assert_eq!(summary.total, 2);
        assert_eq!(summary.valid, 1);
        assert_eq!(summary.invalid, 1);
        assert_eq!(summary.discarded_token.as_deref(), Some("7"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sum_report()).unwrap();
        assert_eq!(json["outcome"]["status"], "sum");
        assert_eq!(json["outcome"]["sum"], "-0.005");

        let json = serde_json::to_value(invalid_report()).unwrap();
        assert_eq!(json["outcome"]["status"], "invalid");
        assert_eq!(json["outcome"]["operands"][0]["operand"], "left");
    }
}
