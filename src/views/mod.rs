// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod admin;
pub mod calculator;

use crate::currency::format_amount;
use crate::models::BillingRecord;

/// Search box semantics shared by both views: room name (case-insensitive),
/// date text, or the formatted total.
pub fn matches_search(record: &BillingRecord, query: &str) -> bool {
    record
        .room_name
        .to_lowercase()
        .contains(&query.to_lowercase())
        || record.date.contains(query)
        || format_amount(record.total).contains(query)
}

pub fn filter_records<'r>(records: &'r [BillingRecord], query: &str) -> Vec<&'r BillingRecord> {
    records.iter().filter(|r| matches_search(r, query)).collect()
}
