// ============================================================================
// Numeric Module
// Exact arbitrary-precision decimal arithmetic on validated literals
// ============================================================================
//
// This module provides:
// - Literal: a borrowed literal that passed the decimal grammar
// - Magnitude: unsigned digit sequences plus compare/add/subtract primitives
// - DecimalValue: canonical sign-magnitude decimal with exact addition
// - NumericError / LiteralError: error types for parsing and interop
//
// Design principles:
// - No floating-point operations anywhere
// - Digits are stored as values 0-9, text only at the parse/format boundary
// - Every public value is canonical, so equality is numeric equality
// - Preconditions are carried by types (Literal) rather than checked late

mod decimal;
mod errors;
mod literal;
mod magnitude;

#[cfg(test)]
mod proptest_properties;

pub use decimal::{normalize, DecimalValue, Sign};
pub use errors::{LiteralError, LiteralErrorKind, NumericError, NumericResult};
pub use literal::{is_valid_literal, Literal};
pub use magnitude::{add_magnitude, compare_magnitude, sub_magnitude, Magnitude};
