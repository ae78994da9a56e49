// ============================================================================
// Numeric Errors
// Error types for literal validation and decimal interop
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a literal failed the decimal grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LiteralErrorKind {
    /// The input was the empty string
    Empty,
    /// No digit where the integer part should start
    MissingIntegerDigits,
    /// A '.' that is not followed by a digit
    MissingFractionDigits,
    /// A character the grammar does not allow at this position
    UnexpectedCharacter(char),
}

/// A rejected literal, with the byte offset where the grammar failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LiteralError {
    pub kind: LiteralErrorKind,
    pub position: usize,
}

impl LiteralError {
    pub(crate) const fn new(kind: LiteralErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LiteralErrorKind::Empty => write!(f, "empty literal"),
            LiteralErrorKind::MissingIntegerDigits => {
                write!(f, "expected a digit at position {}", self.position)
            },
            LiteralErrorKind::MissingFractionDigits => write!(
                f,
                "expected a digit after '.' at position {}",
                self.position
            ),
            LiteralErrorKind::UnexpectedCharacter(c) => {
                write!(f, "unexpected character {:?} at position {}", c, self.position)
            },
        }
    }
}

impl std::error::Error for LiteralError {}

/// Errors that can occur while parsing or converting decimal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is not a decimal literal
    InvalidLiteral(LiteralError),
    /// Value needs more significant digits than the target type holds
    Overflow,
    /// Conversion would lose fractional digits
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidLiteral(err) => write!(f, "invalid decimal literal: {}", err),
            NumericError::Overflow => {
                write!(f, "overflow: value exceeds the target representation")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NumericError::InvalidLiteral(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LiteralError> for NumericError {
    fn from(err: LiteralError) -> Self {
        NumericError::InvalidLiteral(err)
    }
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
