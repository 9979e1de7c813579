// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

const ONES: [&str; 10] = [
    "", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
];

const TEENS: [&str; 10] = [
    "mười",
    "mười một",
    "mười hai",
    "mười ba",
    "mười bốn",
    "mười lăm",
    "mười sáu",
    "mười bảy",
    "mười tám",
    "mười chín",
];

const TENS: [&str; 10] = [
    "",
    "mười",
    "hai mươi",
    "ba mươi",
    "bốn mươi",
    "năm mươi",
    "sáu mươi",
    "bảy mươi",
    "tám mươi",
    "chín mươi",
];

// u64 tops out below 10^20, i.e. seven base-1000 chunks.
const MAGNITUDES: [&str; 7] = [
    "",
    "nghìn",
    "triệu",
    "tỷ",
    "nghìn tỷ",
    "triệu tỷ",
    "tỷ tỷ",
];

const CURRENCY_UNIT: &str = "đồng";

/// Read an amount aloud in Vietnamese, suffixed with the currency unit.
///
/// Zero chunks are skipped entirely, so `1_000_005` reads
/// `"một triệu năm đồng"` with no placeholder for the empty thousands.
pub fn amount_to_words(amount: u64) -> String {
    if amount == 0 {
        return format!("không {}", CURRENCY_UNIT);
    }

    let mut parts: Vec<String> = Vec::new();
    let mut rest = amount;
    let mut idx = 0;
    while rest > 0 {
        let chunk = (rest % 1000) as usize;
        if chunk > 0 {
            let mut text = chunk_to_words(chunk);
            if !MAGNITUDES[idx].is_empty() {
                text.push(' ');
                text.push_str(MAGNITUDES[idx]);
            }
            parts.push(text);
        }
        rest /= 1000;
        idx += 1;
    }
    parts.reverse();
    format!("{} {}", parts.join(" "), CURRENCY_UNIT)
}

fn chunk_to_words(chunk: usize) -> String {
    let mut words: Vec<&str> = Vec::new();

    let hundreds = chunk / 100;
    if hundreds > 0 {
        words.push(ONES[hundreds]);
        words.push("trăm");
    }

    let remainder = chunk % 100;
    if remainder >= 20 {
        words.push(TENS[remainder / 10]);
        if remainder % 10 > 0 {
            words.push(ONES[remainder % 10]);
        }
    } else if remainder >= 10 {
        words.push(TEENS[remainder - 10]);
    } else if remainder > 0 {
        words.push(ONES[remainder]);
    }

    words.join(" ")
}
