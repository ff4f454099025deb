//! Guarded integer helpers. Not used by the evaluator, which never applies
//! operators.

use tracing::warn;

use crate::report::ErrorReport;

/// `a / b`, or `0` after reporting when `b` is zero.
pub fn divide(a: i64, b: i64, reporter: &mut impl ErrorReport) -> i64 {
    reporter.check_error(b == 0, "Division by zero");
    if b == 0 {
        warn!(a, "division by zero");
        return 0;
    }
    a.wrapping_div(b)
}

/// `a % b`, or `0` after reporting when `b` is zero.
pub fn modulo(a: i64, b: i64, reporter: &mut impl ErrorReport) -> i64 {
    reporter.check_error(b == 0, "Modulo by zero");
    if b == 0 {
        warn!(a, "modulo by zero");
        return 0;
    }
    a.wrapping_rem(b)
}
