// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

/// Parse a user-typed amount such as `"2.000.000"` or `"2,000,000 VNĐ"`.
///
/// Every non-digit is discarded before parsing, so grouping separators and
/// currency suffixes are tolerated. Empty or digit-free input yields zero.
/// Values past `u64::MAX` saturate; the billing step rejects them.
pub fn parse_amount(s: &str) -> u64 {
    let mut value: u64 = 0;
    for d in s.chars().filter_map(|c| c.to_digit(10)) {
        value = match value.checked_mul(10).and_then(|v| v.checked_add(d as u64)) {
            Some(v) => v,
            None => return u64::MAX,
        };
    }
    value
}

/// vi-VN decimal display: full stops between thousands, no fraction.
pub fn format_amount(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Normalise a field while it is being edited: zero renders as empty.
pub fn format_input(s: &str) -> String {
    match parse_amount(s) {
        0 => String::new(),
        n => format_amount(n),
    }
}
