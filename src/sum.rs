// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::macros::log_debug;

/// Computes the alternating series `1 - 2 + 3 - 4 + ...` with `n` terms.
///
/// The accumulator is a signed 64-bit integer and uses wrapping arithmetic,
/// so a bound large enough to overflow wraps per two's-complement rather
/// than panicking in debug builds. For `n <= 0` the loop body never runs and
/// the result is 0.
///
/// At the start of the `i`-th iteration (1-indexed), the multiplier is +1
/// when `i` is odd and -1 when `i` is even.
pub fn oscillating_sum(n: i64) -> i64 {
    let mut total: i64 = 0;
    let mut multiplier: i64 = 1;
    for i in 1..=n {
        total = total.wrapping_add(i.wrapping_mul(multiplier));
        multiplier = -multiplier;
    }
    log_debug!("Computed oscillating sum of {n} terms: {total}");
    total
}

/// Closed form of [`oscillating_sum()`], for verification: `-n/2` for even
/// `n`, `(n+1)/2` for odd `n`, and 0 for `n <= 0`.
///
/// Results match the iterative form for every `n` whose sum fits in an
/// [`i64`]. Benchmarks use this as an O(1) baseline against the loop.
pub fn oscillating_sum_closed_form(n: i64) -> i64 {
    if n <= 0 {
        0
    } else if n % 2 == 0 {
        -(n / 2)
    } else {
        n / 2 + 1
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn small_bounds() {
        assert_eq!(oscillating_sum(1), 1);
        assert_eq!(oscillating_sum(2), -1);
        assert_eq!(oscillating_sum(5), 3);
        assert_eq!(oscillating_sum(10), -5);
    }

    #[test]
    fn non_positive_bounds() {
        assert_eq!(oscillating_sum(0), 0);
        assert_eq!(oscillating_sum(-3), 0);
        assert_eq!(oscillating_sum(i64::MIN), 0);
    }

    #[test]
    fn matches_closed_form() {
        for n in -10..=1000 {
            assert_eq!(
                oscillating_sum(n),
                oscillating_sum_closed_form(n),
                "bound {n}"
            );
        }
    }

    #[test]
    fn large_bounds() {
        assert_eq!(oscillating_sum(1_000_000), -500_000);
        assert_eq!(oscillating_sum(1_000_001), 500_001);
    }

    #[test]
    fn closed_form_parity() {
        assert_eq!(oscillating_sum_closed_form(2), -1);
        assert_eq!(oscillating_sum_closed_form(3), 2);
        assert_eq!(oscillating_sum_closed_form(0), 0);
        assert_eq!(oscillating_sum_closed_form(-42), 0);
        // (n+1)/2 computed as n/2 + 1 to avoid overflowing at the maximum
        // odd bound.
        assert_eq!(oscillating_sum_closed_form(i64::MAX), i64::MAX / 2 + 1);
    }
}
