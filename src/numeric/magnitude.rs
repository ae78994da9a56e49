// ============================================================================
// Magnitude Arithmetic
// Unsigned digit-string comparison, addition and subtraction
// ============================================================================
//
// A magnitude is an integer digit run plus a fraction digit run, each digit
// stored as a value 0..=9. Canonical magnitudes have no leading integer zeros
// (except a lone 0) and no trailing fraction zeros.
//
// Fractions are aligned virtually: a digit past the end of the shorter
// fraction reads as 0, which is the same as right-padding it with zeros.

use smallvec::SmallVec;
use std::cmp::Ordering;

/// Inline capacity covers typical literals without touching the heap.
pub(crate) type Digits = SmallVec<[u8; 24]>;

/// Unsigned decimal value held as digit sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Magnitude {
    integer: Digits,
    fraction: Digits,
}

impl Magnitude {
    /// The magnitude 0.
    pub fn zero() -> Self {
        let mut integer = Digits::new();
        integer.push(0);
        Self {
            integer,
            fraction: Digits::new(),
        }
    }

    /// Build from ASCII digit runs, stripping redundant zeros.
    ///
    /// Callers pass slices that were already checked to be ASCII digits.
    pub(crate) fn from_ascii(integer: &[u8], fraction: &[u8]) -> Self {
        Self::trimmed(
            integer.iter().map(|b| b - b'0').collect(),
            fraction.iter().map(|b| b - b'0').collect(),
        )
    }

    /// Canonicalize raw digit runs.
    pub(crate) fn trimmed(mut integer: Digits, mut fraction: Digits) -> Self {
        while fraction.last() == Some(&0) {
            fraction.pop();
        }

        let leading = integer
            .iter()
            .take(integer.len().saturating_sub(1))
            .take_while(|&&d| d == 0)
            .count();
        if leading > 0 {
            integer.drain(..leading);
        }
        if integer.is_empty() {
            integer.push(0);
        }

        Self { integer, fraction }
    }

    /// Integer digits, most significant first.
    #[inline]
    pub fn integer_digits(&self) -> &[u8] {
        &self.integer
    }

    /// Fraction digits, most significant first.
    #[inline]
    pub fn fraction_digits(&self) -> &[u8] {
        &self.fraction
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.integer.len() == 1 && self.integer[0] == 0 && self.fraction.is_empty()
    }

    /// Fraction digit at `i`, reading past the end as 0.
    #[inline]
    fn frac_at(&self, i: usize) -> u8 {
        self.fraction.get(i).copied().unwrap_or(0)
    }

    /// Integer digit `k` places left of the decimal point, 0 when absent.
    #[inline]
    fn int_from_right(&self, k: usize) -> u8 {
        if k < self.integer.len() {
            self.integer[self.integer.len() - 1 - k]
        } else {
            0
        }
    }
}

impl Default for Magnitude {
    fn default() -> Self {
        Self::zero()
    }
}

/// Number of fraction digits both operands share after alignment.
#[inline]
fn aligned_scale(a: &Magnitude, b: &Magnitude) -> usize {
    a.fraction.len().max(b.fraction.len())
}

/// Compare `|a|` against `|b|`.
///
/// Integer length decides first (no leading zeros), then integer digits, then
/// aligned fraction digits.
pub fn compare_magnitude(a: &Magnitude, b: &Magnitude) -> Ordering {
    a.integer
        .len()
        .cmp(&b.integer.len())
        .then_with(|| a.integer.cmp(&b.integer))
        .then_with(|| {
            (0..aligned_scale(a, b))
                .map(|i| a.frac_at(i).cmp(&b.frac_at(i)))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
}

/// `|a| + |b|`, schoolbook addition with carry.
pub fn add_magnitude(a: &Magnitude, b: &Magnitude) -> Magnitude {
    let scale = aligned_scale(a, b);
    let mut carry = 0u8;

    let mut fraction: Digits = SmallVec::from_elem(0, scale);
    for i in (0..scale).rev() {
        let s = a.frac_at(i) + b.frac_at(i) + carry;
        fraction[i] = s % 10;
        carry = s / 10;
    }

    let width = a.integer.len().max(b.integer.len());
    let mut integer = Digits::with_capacity(width + 1);
    for k in 0..width {
        let s = a.int_from_right(k) + b.int_from_right(k) + carry;
        integer.push(s % 10);
        carry = s / 10;
    }
    if carry > 0 {
        integer.push(carry);
    }
    integer.reverse();

    Magnitude::trimmed(integer, fraction)
}

/// `||a| - |b||`, schoolbook subtraction with borrow.
///
/// The larger operand is always taken as the minuend, so the borrow chain
/// cannot run off the top.
pub fn sub_magnitude(a: &Magnitude, b: &Magnitude) -> Magnitude {
    let (minuend, subtrahend) = match compare_magnitude(a, b) {
        Ordering::Less => (b, a),
        _ => (a, b),
    };

    let scale = aligned_scale(minuend, subtrahend);
    let mut borrow = 0u8;

    let mut fraction: Digits = SmallVec::from_elem(0, scale);
    for i in (0..scale).rev() {
        let (d, next) = sub_digit(minuend.frac_at(i), subtrahend.frac_at(i), borrow);
        fraction[i] = d;
        borrow = next;
    }

    let width = minuend.integer.len();
    let mut integer = Digits::with_capacity(width);
    for k in 0..width {
        let (d, next) = sub_digit(
            minuend.int_from_right(k),
            subtrahend.int_from_right(k),
            borrow,
        );
        integer.push(d);
        borrow = next;
    }
    debug_assert_eq!(borrow, 0, "minuend must not be smaller than subtrahend");
    integer.reverse();

    Magnitude::trimmed(integer, fraction)
}

/// One column of subtraction: returns (digit, borrow out).
#[inline]
fn sub_digit(a: u8, b: u8, borrow: u8) -> (u8, u8) {
    let taken = b + borrow;
    if a >= taken {
        (a - taken, 0)
    } else {
        (a + 10 - taken, 1)
    }
}
