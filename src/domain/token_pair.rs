// ============================================================================
// Token Pairs
// Whitespace-delimited tokens consumed two at a time
// ============================================================================

use std::io::{self, BufRead};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two raw tokens to be validated and added
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TokenPair {
    /// 1-based case number in input order
    pub case: usize,
    pub left: String,
    pub right: String,
}

impl TokenPair {
    pub fn new(case: usize, left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            case,
            left: left.into(),
            right: right.into(),
        }
    }
}

/// Iterator pairing up a token stream.
///
/// Pairing stops as soon as fewer than two tokens remain. A lone trailing
/// token is kept aside and can be inspected with [`TokenPairs::discarded`]
/// once the iterator is exhausted.
#[derive(Debug)]
pub struct TokenPairs {
    tokens: std::vec::IntoIter<String>,
    next_case: usize,
    discarded: Option<String>,
}

impl TokenPairs {
    pub fn new(tokens: Vec<String>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            next_case: 1,
            discarded: None,
        }
    }

    /// Split `text` on ASCII whitespace.
    pub fn from_text(text: &str) -> Self {
        Self::new(split_tokens(text.as_bytes()))
    }

    /// Read every token from `reader`.
    ///
    /// # Errors
    /// Propagates I/O errors from the underlying reader.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        Ok(Self::new(read_tokens(reader)?))
    }

    /// The unpaired trailing token, if the input had an odd token count.
    pub fn discarded(&self) -> Option<&str> {
        self.discarded.as_deref()
    }

    /// Drain all pairs, returning them with the unpaired trailing token.
    pub fn collect_pairs(mut self) -> (Vec<TokenPair>, Option<String>) {
        let pairs = self.by_ref().collect();
        (pairs, self.discarded)
    }
}

impl Iterator for TokenPairs {
    type Item = TokenPair;

    fn next(&mut self) -> Option<Self::Item> {
        let left = self.tokens.next()?;
        let Some(right) = self.tokens.next() else {
            self.discarded = Some(left);
            return None;
        };

        let pair = TokenPair::new(self.next_case, left, right);
        self.next_case += 1;
        Some(pair)
    }
}

/// Read all whitespace-delimited tokens from `reader`.
///
/// Input is split as raw bytes, so a token that is not valid UTF-8 still comes
/// through (with U+FFFD in place of the bad bytes) and fails validation later
/// instead of aborting the read.
pub fn read_tokens<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(split_tokens(&bytes))
}

/// Separators are the ASCII `isspace` set: space, \t, \n, \v, \f, \r.
#[inline]
fn is_separator(b: &u8) -> bool {
    b.is_ascii_whitespace() || *b == 0x0b
}

fn split_tokens(bytes: &[u8]) -> Vec<String> {
    bytes
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(|token| String::from_utf8_lossy(token).into_owned())
        .collect()
}
