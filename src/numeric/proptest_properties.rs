//! Property-based tests for the literal grammar and decimal arithmetic.
//!
//! 1. **Grammar**: generated literals validate; arbitrary text agrees with a
//!    split-based reference predicate.
//! 2. **Canonical form**: normalize strips redundant zeros and is idempotent.
//! 3. **Addition laws**: commutativity, associativity, identity, inverse.
//! 4. **Scale invariance**: trailing fraction zeros never change a result.
//! 5. **Reference agreement**: sums match `rust_decimal` inside its range.

use proptest::prelude::*;
use quickcheck::quickcheck;

use super::{is_valid_literal, normalize, DecimalValue, Sign};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn value(text: &str) -> DecimalValue {
    let Ok(v) = normalize(text) else {
        panic!("strategy produced invalid literal {:?}", text);
    };
    v
}

/// Grammar check written independently of the scanner in `literal.rs`.
fn reference_is_valid(text: &str) -> bool {
    let body = text
        .strip_prefix('+')
        .or_else(|| text.strip_prefix('-'))
        .unwrap_or(text);
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match body.split_once('.') {
        Some((int, frac)) => all_digits(int) && all_digits(frac),
        None => all_digits(body),
    }
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Any literal the grammar accepts, including redundant zeros.
fn literal_strategy() -> impl Strategy<Value = String> {
    "[+-]?[0-9]{1,30}(\\.[0-9]{1,30})?"
}

/// Literals small enough for `rust_decimal` to add without rounding.
fn bounded_literal_strategy() -> impl Strategy<Value = String> {
    "[+-]?[0-9]{1,12}(\\.[0-9]{1,12})?"
}

fn zeros_strategy() -> impl Strategy<Value = usize> {
    1usize..=8usize
}

// ---------------------------------------------------------------------------
// Property 1: Grammar
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_generated_literals_are_valid(text in literal_strategy()) {
        prop_assert!(is_valid_literal(&text));
    }

    #[test]
    fn prop_grammar_matches_reference(text in "[+\\-.0-9a ]{0,8}") {
        prop_assert_eq!(is_valid_literal(&text), reference_is_valid(&text));
    }
}

quickcheck! {
    fn qc_grammar_matches_reference(text: String) -> bool {
        is_valid_literal(&text) == reference_is_valid(&text)
    }

    fn qc_integer_literals_roundtrip(negative: bool, int: u64, frac: Option<u32>) -> bool {
        let sign = if negative { "-" } else { "" };
        let text = match frac {
            Some(f) => format!("{}{}.{}", sign, int, f),
            None => format!("{}{}", sign, int),
        };
        match normalize(&text) {
            Ok(v) => normalize(&v.to_string()) == Ok(v),
            Err(_) => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Canonical Form
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_normalize_is_idempotent(text in literal_strategy()) {
        let once = value(&text).to_string();
        let twice = value(&once).to_string();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_normalize_is_canonical(text in literal_strategy()) {
        let v = value(&text);
        let int = v.integer_digits();
        prop_assert!(!int.is_empty());
        prop_assert!(int.len() == 1 || int[0] != 0, "leading zero in {:?}", v);
        prop_assert!(v.fraction_digits().last() != Some(&0), "trailing zero in {:?}", v);
        prop_assert!(int.iter().chain(v.fraction_digits()).all(|&d| d <= 9));
        if v.is_zero() {
            prop_assert_eq!(v.sign(), Sign::Positive);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Addition Laws
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_addition_commutes(a in literal_strategy(), b in literal_strategy()) {
        let (a, b) = (value(&a), value(&b));
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn prop_addition_associates(
        a in literal_strategy(),
        b in literal_strategy(),
        c in literal_strategy(),
    ) {
        let (a, b, c) = (value(&a), value(&b), value(&c));
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn prop_zero_is_identity(a in literal_strategy()) {
        let a = value(&a);
        prop_assert_eq!(&a + &DecimalValue::zero(), a.clone());
        prop_assert_eq!(&DecimalValue::zero() + &a, a);
    }

    #[test]
    fn prop_negation_cancels(a in literal_strategy()) {
        let a = value(&a);
        let sum = &a + &a.negate();
        prop_assert_eq!(sum.sign(), Sign::Positive);
        prop_assert_eq!(sum, DecimalValue::zero());
    }

    #[test]
    fn prop_order_matches_difference(a in literal_strategy(), b in literal_strategy()) {
        let (a, b) = (value(&a), value(&b));
        let diff = &b - &a;
        if a < b {
            prop_assert!(!diff.is_zero() && !diff.is_negative());
        } else if a > b {
            prop_assert!(diff.is_negative());
        } else {
            prop_assert!(diff.is_zero());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Scale Invariance
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_trailing_zeros_are_neutral(
        a in literal_strategy(),
        b in literal_strategy(),
        zeros in zeros_strategy(),
    ) {
        let padded = if a.contains('.') {
            format!("{}{}", a, "0".repeat(zeros))
        } else {
            format!("{}.{}", a, "0".repeat(zeros))
        };
        prop_assert_eq!(value(&padded), value(&a));
        prop_assert_eq!(&value(&padded) + &value(&b), &value(&a) + &value(&b));
    }
}

// ---------------------------------------------------------------------------
// Property 5: Reference Agreement
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_sum_matches_rust_decimal(
        a in bounded_literal_strategy(),
        b in bounded_literal_strategy(),
    ) {
        let (a, b) = (value(&a), value(&b));
        let (Ok(da), Ok(db)) = (a.to_decimal(), b.to_decimal()) else {
            panic!("bounded literals fit rust_decimal");
        };
        let sum = &a + &b;
        prop_assert_eq!(sum.to_decimal(), Ok(da + db));
        prop_assert_eq!(DecimalValue::from(da + db), sum);
    }
}
