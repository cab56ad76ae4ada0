//! Rounding and tolerance rules shared by the ledger builder and the debt
//! simplifier.
//!
//! Every comparison against "settled" and every rounding to cents in the
//! engine goes through this module, so displayed balances and suggested
//! transfers always reconcile with each other.
//!
//! Rounding is **half away from zero** at cent granularity:
//! `0.005 -> 0.01`, `-0.005 -> -0.01`, `0.0049 -> 0.00`.

use crate::MoneyCents;

/// Tolerance (in major units) below which an amount is treated as settled.
pub const EPSILON: f64 = 0.01;

/// [`EPSILON`] in cents.
pub const EPSILON_CENTS: i64 = 1;

/// Largest magnitude accepted for a single record amount, in major units.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// Fixed-point units per major unit used while accumulating raw amounts.
pub(crate) const MICROS_PER_UNIT: f64 = 1_000_000.0;

/// Fixed-point units per cent.
pub(crate) const MICROS_PER_CENT: i128 = 10_000;

/// Rounds `x` to 2 decimals, half away from zero.
///
/// ```rust
/// use engine::policy::round2;
///
/// assert_eq!(round2(33.333_333), 33.33);
/// assert_eq!(round2(66.666_667), 66.67);
/// assert_eq!(round2(-0.005), -0.01);
/// ```
#[must_use]
pub fn round2(x: f64) -> f64 {
    to_cents(x).to_major()
}

/// Rounds a major-unit amount to [`MoneyCents`] with the same rule as
/// [`round2`].
///
/// Values outside the `i64` cent range saturate; NaN becomes zero.
#[must_use]
pub fn to_cents(x: f64) -> MoneyCents {
    let saturated = if x < 0.0 { i64::MIN } else { i64::MAX };
    let cents = cents_from_micros(to_micros(x)).unwrap_or(saturated);
    MoneyCents::new(cents)
}

/// Returns `true` if `|x| < 0.01`.
#[must_use]
pub fn is_zero(x: f64) -> bool {
    x.abs() < EPSILON
}

/// Returns `true` if the amount is strictly above the tolerance band.
#[must_use]
pub fn exceeds_tolerance(amount: MoneyCents) -> bool {
    amount.cents() > EPSILON_CENTS
}

/// Returns `true` if `a` and `b`, rounded to cents, differ by more than
/// [`EPSILON`].
#[must_use]
pub fn differ_beyond_tolerance(a: f64, b: f64) -> bool {
    to_cents(a).cents().abs_diff(to_cents(b).cents()) > EPSILON_CENTS.unsigned_abs()
}

/// Converts a major-unit amount into fixed-point micro units.
///
/// The cast saturates; callers bound amounts first with [`ensure_amount`].
pub(crate) fn to_micros(x: f64) -> i128 {
    (x * MICROS_PER_UNIT).round() as i128
}

/// Rounds fixed-point micro units to cents, half away from zero.
///
/// Returns `None` when the result does not fit in `i64` cents.
pub(crate) fn cents_from_micros(micros: i128) -> Option<i64> {
    let half = MICROS_PER_CENT / 2;
    let biased = if micros >= 0 {
        micros.checked_add(half)?
    } else {
        micros.checked_sub(half)?
    };
    i64::try_from(biased / MICROS_PER_CENT).ok()
}

/// Rejects NaN, infinite and out of range amounts.
pub(crate) fn ensure_amount(x: f64, label: &str) -> crate::ResultEngine<f64> {
    if !x.is_finite() {
        return Err(crate::EngineError::InvalidAmount(format!(
            "{label} must be a finite number"
        )));
    }
    if x.abs() > MAX_AMOUNT {
        return Err(crate::EngineError::InvalidAmount(format!(
            "{label} must not exceed {MAX_AMOUNT}"
        )));
    }
    Ok(x)
}
