// ============================================================================
// Decimal Literal Grammar
// Validation of textual decimal literals
// ============================================================================
//
// Grammar:
//     literal  := sign? digits ('.' digits)?
//     sign     := '+' | '-'
//     digits   := [0-9]+
//
// A '.' needs a digit on both sides, and nothing may follow the last digit.

use super::decimal::Sign;
use super::errors::{LiteralError, LiteralErrorKind};

/// A literal that has already passed validation.
///
/// The only way to obtain one is [`Literal::parse`], so anything that takes a
/// `Literal` can rely on the grammar holding. The digit slices still carry any
/// redundant zeros from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'a> {
    text: &'a str,
    sign: Sign,
    integer: &'a str,
    fraction: &'a str,
}

impl<'a> Literal<'a> {
    /// Validate `text` against the literal grammar.
    ///
    /// # Errors
    /// Returns a [`LiteralError`] pointing at the first byte that breaks the
    /// grammar.
    ///
    /// # Example
    /// ```
    /// use exact_decimal::numeric::Literal;
    ///
    /// let lit = Literal::parse("-0001.005").unwrap();
    /// assert_eq!(lit.integer_digits(), "0001");
    /// assert_eq!(lit.fraction_digits(), "005");
    /// assert!(Literal::parse("-5.").is_err());
    /// ```
    pub fn parse(text: &'a str) -> Result<Self, LiteralError> {
        let bytes = text.as_bytes();
        if bytes.is_empty() {
            return Err(LiteralError::new(LiteralErrorKind::Empty, 0));
        }

        let (sign, int_start) = match bytes[0] {
            b'+' => (Sign::Positive, 1),
            b'-' => (Sign::Negative, 1),
            _ => (Sign::Positive, 0),
        };

        let int_end = scan_digits(bytes, int_start);
        if int_end == int_start {
            return Err(match bytes.get(int_start) {
                None | Some(b'.') => {
                    LiteralError::new(LiteralErrorKind::MissingIntegerDigits, int_start)
                },
                Some(_) => unexpected(text, int_start),
            });
        }

        let integer = &text[int_start..int_end];
        if int_end == bytes.len() {
            return Ok(Self {
                text,
                sign,
                integer,
                fraction: "",
            });
        }

        if bytes[int_end] != b'.' {
            return Err(unexpected(text, int_end));
        }

        let frac_start = int_end + 1;
        let frac_end = scan_digits(bytes, frac_start);
        if frac_end == frac_start {
            return Err(if frac_start == bytes.len() {
                LiteralError::new(LiteralErrorKind::MissingFractionDigits, frac_start)
            } else {
                unexpected(text, frac_start)
            });
        }
        if frac_end != bytes.len() {
            return Err(unexpected(text, frac_end));
        }

        Ok(Self {
            text,
            sign,
            integer,
            fraction: &text[frac_start..frac_end],
        })
    }

    /// The full source text, sign included.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Sign written in the literal (Positive when absent).
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Integer digits exactly as written (never empty).
    #[inline]
    pub fn integer_digits(&self) -> &'a str {
        self.integer
    }

    /// Fraction digits exactly as written (empty when there is no '.').
    #[inline]
    pub fn fraction_digits(&self) -> &'a str {
        self.fraction
    }
}

/// Returns true iff `text` is a well-formed decimal literal.
#[inline]
pub fn is_valid_literal(text: &str) -> bool {
    Literal::parse(text).is_ok()
}

fn scan_digits(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

// Everything before `pos` is ASCII, so `pos` is always a char boundary.
fn unexpected(text: &str, pos: usize) -> LiteralError {
    let c = text[pos..].chars().next().unwrap_or('\0');
    LiteralError::new(LiteralErrorKind::UnexpectedCharacter(c), pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_literals() {
        for text in [
            "1",
            "+1",
            "-1",
            "1.0",
            "+0001.0",
            "-0001.005",
            "0",
            "000",
            "12345678901234567890.5",
        ] {
            assert!(is_valid_literal(text), "expected {:?} to be valid", text);
        }
    }

    #[test]
    fn test_rejects_invalid_literals() {
        for text in [
            "", "+", "-", "A", "+-1", "-5.", "-.5", "1.", ".1", "1.2.3", "-5.-5", " 1", "1 ",
            "1e5", "1,000", "++1", "1-", "٣",
        ] {
            assert!(!is_valid_literal(text), "expected {:?} to be invalid", text);
        }
    }

    #[test]
    fn test_literal_parts() {
        let lit = Literal::parse("+0001.0").unwrap();
        assert_eq!(lit.sign(), Sign::Positive);
        assert_eq!(lit.integer_digits(), "0001");
        assert_eq!(lit.fraction_digits(), "0");
        assert_eq!(lit.as_str(), "+0001.0");

        let lit = Literal::parse("-42").unwrap();
        assert_eq!(lit.sign(), Sign::Negative);
        assert_eq!(lit.integer_digits(), "42");
        assert_eq!(lit.fraction_digits(), "");
    }

    #[test]
    fn test_error_positions() {
        let err = |s| Literal::parse(s).unwrap_err();

        assert_eq!(err("").kind, LiteralErrorKind::Empty);

        assert_eq!(err("-").kind, LiteralErrorKind::MissingIntegerDigits);
        assert_eq!(err("-").position, 1);

        assert_eq!(err("-.5").kind, LiteralErrorKind::MissingIntegerDigits);
        assert_eq!(err("-.5").position, 1);

        assert_eq!(err("-5.").kind, LiteralErrorKind::MissingFractionDigits);
        assert_eq!(err("-5.").position, 3);

        assert_eq!(err("+-1").kind, LiteralErrorKind::UnexpectedCharacter('-'));
        assert_eq!(err("+-1").position, 1);

        assert_eq!(err("-5.-5").kind, LiteralErrorKind::UnexpectedCharacter('-'));
        assert_eq!(err("-5.-5").position, 3);

        assert_eq!(err("1.2.3").kind, LiteralErrorKind::UnexpectedCharacter('.'));
        assert_eq!(err("1.2.3").position, 3);

        assert_eq!(err("12é").kind, LiteralErrorKind::UnexpectedCharacter('é'));
        assert_eq!(err("12é").position, 2);
    }
}
