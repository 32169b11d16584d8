// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![doc = include_str!("../README.md")]
#![forbid(missing_docs, unsafe_code)]

mod macros;
mod parse;
mod sum;

pub use parse::parse_integer;
pub use sum::{oscillating_sum, oscillating_sum_closed_form};

#[cfg(test)]
mod test {
    use super::*;

    // Parse and sum chained together, as the binary does.
    #[test]
    fn parse_then_sum() {
        assert_eq!(oscillating_sum(parse_integer("5")), 3);
        assert_eq!(oscillating_sum(parse_integer("10")), -5);
        assert_eq!(oscillating_sum(parse_integer("-3")), 0);
        assert_eq!(oscillating_sum(parse_integer("three")), 0);
        assert_eq!(oscillating_sum(parse_integer("12abc")), -6);
    }
}
