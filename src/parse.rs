// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::macros::{log_debug, log_warn};

/// Permissive `atoi`-style conversion of a string to a signed 64-bit
/// integer.
///
/// Leading ASCII whitespace is skipped, then an optional `+` or `-` sign,
/// then decimal digits up to the first non-digit. An input with no leading
/// digits yields 0. Digits accumulate with wrapping arithmetic, so inputs
/// beyond the [`i64`] range wrap per two's-complement.
///
/// This reproduces the lenient parsing of the other-language renditions of
/// this benchmark, so invalid input silently becomes a bound of 0 rather
/// than an error. See the crate documentation for why this quirk is kept.
pub fn parse_integer(input: &str) -> i64 {
    let bytes = input.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        let digit = i64::from(bytes[pos] - b'0');
        value = value.wrapping_mul(10).wrapping_add(digit);
        pos += 1;
    }
    if negative {
        value = value.wrapping_neg();
    }

    if pos < bytes.len() {
        log_warn!(
            "Ignoring trailing non-numeric input {:?} in {input:?}",
            &input[pos..]
        );
    }
    log_debug!("Parsed bound {value} from input {input:?}");
    value
}
