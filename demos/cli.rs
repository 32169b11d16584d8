// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI tool to explore the oscillating sum workload.
//!
//! Unlike the faithful benchmark binary, this tool parses its arguments
//! strictly, can repeat the computation, and can cross-check the result
//! against the closed form. Run with `RUST_LOG=debug` to see the library's
//! log records.

use clap::Parser;
use oscillating_sum::{oscillating_sum, oscillating_sum_closed_form};
use std::hint::black_box;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut total = 0;
    for _ in 0..cli.repeat {
        total = oscillating_sum(black_box(cli.bound));
    }
    println!("total = {total}");

    if cli.verify {
        let expected = oscillating_sum_closed_form(cli.bound);
        assert_eq!(total, expected, "closed form disagrees with the loop");
        println!("verified against closed form");
    }
}

/// CLI tool to explore the oscillating sum workload.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(version)]
struct Cli {
    /// Upper bound of the summation range.
    #[arg(long, default_value_t = 1_000_000)]
    bound: i64,

    /// Number of times to repeat the computation.
    #[arg(long, default_value_t = 1)]
    repeat: u32,

    /// Whether to check the result against the closed form.
    #[arg(long, default_value_t = false)]
    verify: bool,
}
