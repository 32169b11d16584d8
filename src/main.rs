// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Benchmark binary computing an oscillating weighted sum over `1..=n`.
//!
//! The argument is parsed leniently and the usage message goes to standard
//! output, keeping the interface identical across the runtimes this
//! benchmark is used to compare. See the crate documentation for details.

use oscillating_sum::{oscillating_sum, parse_integer};
use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(bound) = std::env::args().nth(1) else {
        println!("Usage: ./oscillating_sum n");
        return ExitCode::FAILURE;
    };

    let n = parse_integer(&bound);
    let total = oscillating_sum(n);
    println!("{total}");
    ExitCode::SUCCESS
}
