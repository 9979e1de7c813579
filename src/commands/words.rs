// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::currency::{format_amount, parse_amount};
use crate::words::amount_to_words;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let raw = m.get_one::<String>("amount").map(|s| s.as_str()).unwrap_or("0");
    let n = parse_amount(raw);
    println!("{}: {}", format_amount(n), amount_to_words(n));
    Ok(())
}
