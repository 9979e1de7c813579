// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::currency::format_amount;
use crate::reconcile::{parse_history, read_entry};
use crate::store::{
    BIKE_FEE_KEY, ELECTRICITY_PRICE_KEY, HISTORY_KEY, KvStore, TRASH_FEE_KEY, WATER_PRICE_KEY,
};
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle<S: KvStore + ?Sized>(store: &S) -> Result<()> {
    let rows = diagnose(store)?;
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// Inspect stored data without changing it. Invalid entries would be
/// dropped on the next load; edited totals are only reported.
pub fn diagnose<S: KvStore + ?Sized>(store: &S) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    // 1) History entries that fail validation
    if let Some(blob) = store.get(HISTORY_KEY)? {
        match parse_history(&blob) {
            Err(e) => rows.push(vec!["malformed_history".into(), e.to_string()]),
            Ok(items) => {
                for (i, item) in items.iter().enumerate() {
                    match read_entry(item) {
                        Err(defect) => {
                            rows.push(vec!["invalid_entry".into(), format!("#{} {}", i, defect)])
                        }
                        // 2) Totals that no longer match their parts after an edit
                        Ok(rec) if rec.parts_sum() != Some(rec.total) => rows.push(vec![
                            "total_mismatch".into(),
                            format!(
                                "{} '{}': total {} vs parts {}",
                                rec.id,
                                rec.room_name,
                                format_amount(rec.total),
                                rec.parts_sum()
                                    .map(format_amount)
                                    .unwrap_or_else(|| "overflow".into())
                            ),
                        ]),
                        Ok(_) => {}
                    }
                }
            }
        }
    }

    // 3) Saved prices that would be ignored
    for key in [ELECTRICITY_PRICE_KEY, WATER_PRICE_KEY, BIKE_FEE_KEY, TRASH_FEE_KEY] {
        if let Some(v) = store.get(key)? {
            if v.trim().parse::<u64>().is_err() {
                rows.push(vec!["bad_price".into(), format!("{}={}", key, v)]);
            }
        }
    }
    Ok(rows)
}
