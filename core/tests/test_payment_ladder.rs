//! Payment validation ladder tests
//!
//! The ladder ordering is deliberate policy: the anti-fraud ceiling
//! dominates everything, overpayment is never fixed up automatically,
//! and an exact-zero payment for a zero bill is explicitly untrusted.

use parking_core_rs::{validate, PaymentAttempt, PaymentMethod, PaymentOutcome, MAX_TENDER};
use proptest::prelude::*;

// ============================================================================
// Fixed-point ladder cases (observed policy values)
// ============================================================================

#[test]
fn test_ladder_reference_cases() {
    assert_eq!(validate(50, 40), PaymentOutcome::InsufficientFunds);
    assert_eq!(validate(50, 60), PaymentOutcome::Overpayment);
    assert_eq!(validate(50, 50), PaymentOutcome::Accepted);
    assert_eq!(validate(0, 0), PaymentOutcome::SuspiciousZero);
    assert_eq!(validate(50, 10_000), PaymentOutcome::RejectedTooLarge);
    assert_eq!(validate(0, 10_000), PaymentOutcome::RejectedTooLarge);
}

#[test]
fn test_ceiling_is_inclusive() {
    assert_eq!(validate(9_999, 9_999), PaymentOutcome::Accepted);
    assert_eq!(validate(10_000, 10_000), PaymentOutcome::RejectedTooLarge);
    assert_eq!(validate(10_001, 10_001), PaymentOutcome::RejectedTooLarge);
}

#[test]
fn test_zero_tender_against_nonzero_bill_is_short_not_suspicious() {
    assert_eq!(validate(1, 0), PaymentOutcome::InsufficientFunds);
}

#[test]
fn test_attempt_is_ephemeral_record_of_inputs() {
    let attempt = PaymentAttempt::evaluate(15, 15, PaymentMethod::Card);
    assert!(attempt.is_accepted());
    assert_eq!(attempt.amount_due(), 15);
    assert_eq!(attempt.tendered(), 15);
    assert_eq!(attempt.method(), PaymentMethod::Card);
}

// ============================================================================
// Property-based ladder checks
// ============================================================================

proptest! {
    /// The ceiling dominates the whole ladder.
    #[test]
    fn prop_ceiling_dominates(amount_due in 0i64..1_000_000, tendered in MAX_TENDER..1_000_000) {
        prop_assert_eq!(validate(amount_due, tendered), PaymentOutcome::RejectedTooLarge);
    }

    /// Below the ceiling the ladder matches its precedence order exactly.
    #[test]
    fn prop_ladder_precedence(amount_due in 0i64..MAX_TENDER, tendered in 0i64..MAX_TENDER) {
        let expected = if tendered < amount_due {
            PaymentOutcome::InsufficientFunds
        } else if tendered > amount_due {
            PaymentOutcome::Overpayment
        } else if tendered == 0 {
            PaymentOutcome::SuspiciousZero
        } else {
            PaymentOutcome::Accepted
        };
        prop_assert_eq!(validate(amount_due, tendered), expected);
    }

    /// Accepted means exact and non-zero, always.
    #[test]
    fn prop_accepted_iff_exact_nonzero(amount_due in 0i64..1_000_000, tendered in 0i64..1_000_000) {
        let accepted = validate(amount_due, tendered) == PaymentOutcome::Accepted;
        let exact_nonzero = tendered == amount_due && tendered != 0 && tendered < MAX_TENDER;
        prop_assert_eq!(accepted, exact_nonzero);
    }

    /// Method is reporting-only: it never changes the outcome.
    #[test]
    fn prop_method_never_affects_outcome(amount_due in 0i64..20_000, tendered in 0i64..20_000) {
        let cash = PaymentAttempt::evaluate(amount_due, tendered, PaymentMethod::Cash);
        let card = PaymentAttempt::evaluate(amount_due, tendered, PaymentMethod::Card);
        prop_assert_eq!(cash.outcome(), card.outcome());
    }
}
