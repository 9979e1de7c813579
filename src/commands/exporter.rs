// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::BillingRecord;
use crate::store::{KvRepository, KvStore, load_prices};
use crate::views::admin::{AdminView, export_csv};
use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::BufWriter;

pub fn handle<S: KvStore + ?Sized>(store: &S, m: &clap::ArgMatches) -> Result<()> {
    let fmt = m
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".into());
    let out = m
        .get_one::<String>("out")
        .map(|s| s.as_str())
        .unwrap_or(crate::views::admin::EXPORT_FILE_NAME);
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let view = AdminView::open(KvRepository::new(store), load_prices(store)?)?;
    let records: Vec<&BillingRecord> = match m.get_one::<String>("search") {
        Some(q) => view.filtered(q),
        None => view.history().iter().collect(),
    };

    let file = File::create(out).with_context(|| format!("Create {}", out))?;
    if fmt == "csv" {
        export_csv(BufWriter::new(file), records.iter().copied())?;
    } else {
        serde_json::to_writer_pretty(BufWriter::new(file), &records)?;
    }
    println!("Exported {} records to {}", records.len(), out);
    Ok(())
}
