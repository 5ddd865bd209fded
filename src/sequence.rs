//! Integer ranges and factorials for the loop demo.

use std::ops::RangeInclusive;

/// The integers `start..=end`, in order.
///
/// Lazy and restartable: clone the range to iterate it again. An `end`
/// below `start` yields nothing.
pub fn range(start: i64, end: i64) -> RangeInclusive<i64> {
    start..=end
}

/// Product of `1..=n` accumulated in a loop.
///
/// For `n <= 0` the loop never runs and the initial accumulator `1` is
/// returned; negative input is not rejected. Overflow wraps. Once the
/// wrapped product reaches zero it stays zero, so the loop stops there.
pub fn factorial(n: i64) -> i64 {
    let mut fact: i64 = 1;
    for i in range(1, n) {
        fact = fact.wrapping_mul(i);
        if fact == 0 {
            break;
        }
    }
    fact
}

/// Like [`factorial`], but `None` once the product no longer fits in `i64`.
pub fn checked_factorial(n: i64) -> Option<i64> {
    range(1, n).try_fold(1i64, |fact, i| fact.checked_mul(i))
}
