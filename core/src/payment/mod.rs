//! Payment validator
//!
//! Validates a tendered amount against the amount due and classifies the
//! outcome. The ladder is evaluated in a fixed precedence order and the
//! ordering is deliberate policy, under test:
//!
//! 1. `tendered >= MAX_TENDER` → [`PaymentOutcome::RejectedTooLarge`]
//!    (anti-fraud ceiling, checked before everything else)
//! 2. `tendered < amount_due` → [`PaymentOutcome::InsufficientFunds`]
//! 3. `tendered > amount_due` → [`PaymentOutcome::Overpayment`] (the
//!    system never auto-issues change; the caller must re-tender exactly)
//! 4. `tendered == 0` (reachable only when the bill is zero) →
//!    [`PaymentOutcome::SuspiciousZero`], flagged for operator review —
//!    zero-amount transactions must not be usable as a bypass
//! 5. otherwise → [`PaymentOutcome::Accepted`]
//!
//! Payment method never affects validation; it is recorded for reporting
//! only.
//!
//! CRITICAL: All money values are i64 (whole currency units)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Anti-fraud ceiling: any tender at or above this is rejected outright,
/// regardless of the amount due.
pub const MAX_TENDER: i64 = 10_000;

/// How a tender was presented. Recorded for reporting; never changes
/// validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Card,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "Cash"),
            PaymentMethod::Card => write!(f, "Card"),
        }
    }
}

/// Classification of a tender against the amount due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentOutcome {
    /// Exact, non-zero payment — the only outcome that settles
    Accepted,

    /// Tender below the amount due; caller may retry with a new tender
    InsufficientFunds,

    /// Tender above the amount due; rejected — no automatic change
    Overpayment,

    /// Zero tender for a zero bill; rejected pending operator review
    SuspiciousZero,

    /// Tender at or above [`MAX_TENDER`]; rejected outright
    RejectedTooLarge,
}

impl PaymentOutcome {
    /// Whether this outcome settles the transaction
    pub fn is_accepted(&self) -> bool {
        matches!(self, PaymentOutcome::Accepted)
    }
}

impl fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentOutcome::Accepted => write!(f, "accepted"),
            PaymentOutcome::InsufficientFunds => write!(f, "insufficient funds"),
            PaymentOutcome::Overpayment => write!(f, "overpayment"),
            PaymentOutcome::SuspiciousZero => write!(f, "suspicious zero payment"),
            PaymentOutcome::RejectedTooLarge => write!(f, "tender exceeds ceiling"),
        }
    }
}

/// Validate a tender against the amount due.
///
/// # Example
/// ```
/// use parking_core_rs::payment::{validate, PaymentOutcome};
///
/// assert_eq!(validate(50, 50), PaymentOutcome::Accepted);
/// assert_eq!(validate(50, 40), PaymentOutcome::InsufficientFunds);
/// assert_eq!(validate(50, 60), PaymentOutcome::Overpayment);
/// assert_eq!(validate(0, 0), PaymentOutcome::SuspiciousZero);
/// assert_eq!(validate(50, 10_000), PaymentOutcome::RejectedTooLarge);
/// ```
pub fn validate(amount_due: i64, tendered: i64) -> PaymentOutcome {
    // Ceiling dominates the whole ladder
    if tendered >= MAX_TENDER {
        return PaymentOutcome::RejectedTooLarge;
    }
    if tendered < amount_due {
        return PaymentOutcome::InsufficientFunds;
    }
    if tendered > amount_due {
        return PaymentOutcome::Overpayment;
    }
    if tendered == 0 {
        return PaymentOutcome::SuspiciousZero;
    }
    PaymentOutcome::Accepted
}

/// One evaluated tender. Ephemeral — lives for the duration of a `leave`
/// call; adapters may persist it if they choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAttempt {
    /// Amount owed (i64 whole units)
    amount_due: i64,

    /// Amount tendered (i64 whole units)
    tendered: i64,

    /// How the tender was presented
    method: PaymentMethod,

    /// Ladder classification of this tender
    outcome: PaymentOutcome,
}

impl PaymentAttempt {
    /// Evaluate a tender through the validation ladder.
    pub fn evaluate(amount_due: i64, tendered: i64, method: PaymentMethod) -> Self {
        Self {
            amount_due,
            tendered,
            method,
            outcome: validate(amount_due, tendered),
        }
    }

    /// Get amount owed
    pub fn amount_due(&self) -> i64 {
        self.amount_due
    }

    /// Get amount tendered
    pub fn tendered(&self) -> i64 {
        self.tendered
    }

    /// Get payment method
    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    /// Get the ladder outcome
    pub fn outcome(&self) -> PaymentOutcome {
        self.outcome
    }

    /// Whether this attempt settles the transaction
    pub fn is_accepted(&self) -> bool {
        self.outcome.is_accepted()
    }
}
