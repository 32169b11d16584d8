// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Simple program that computes the oscillating sum for a fixed bound.

use oscillating_sum::oscillating_sum;
use std::hint::black_box;

fn main() {
    let bound = 1_000_000;

    let total = oscillating_sum(black_box(bound));
    println!("total = {total}");
}
