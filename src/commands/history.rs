// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::BillingRecord;
use crate::store::{KvRepository, KvStore, load_prices};
use crate::utils::{maybe_print_json, parse_id, pretty_table};
use crate::views::admin::{AdminView, Column, EditInput};
use anyhow::{Result, anyhow};

pub fn handle<S: KvStore + ?Sized>(store: &S, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => {
            let removed = remove(store, sub)?;
            println!("Đã xóa {} mục!", removed);
        }
        Some(("edit", sub)) => {
            let rec = edit(store, sub)?;
            println!("Đã cập nhật! ({} / {})", rec.id, rec.room_name);
        }
        _ => {}
    }
    Ok(())
}

fn open<S: KvStore + ?Sized>(store: &S) -> Result<AdminView<KvRepository<'_, S>>> {
    let prices = load_prices(store)?;
    Ok(AdminView::open(KvRepository::new(store), prices)?)
}

fn list<S: KvStore + ?Sized>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(store, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }

    let columns = visible_columns(sub)?;
    let headers: Vec<&str> = std::iter::once("ID")
        .chain(columns.iter().map(|c| c.header()))
        .collect();
    let rows = data
        .iter()
        .map(|r| {
            let mut row = vec![r.id.to_string()];
            for c in &columns {
                let mut cell = c.cell(r);
                if *c == Column::Total {
                    cell = format!("{} ({})", cell, r.band().label());
                }
                row.push(cell);
            }
            row
        })
        .collect();
    println!("{}", pretty_table(&headers, rows));
    Ok(())
}

pub fn query_rows<S: KvStore + ?Sized>(
    store: &S,
    sub: &clap::ArgMatches,
) -> Result<Vec<BillingRecord>> {
    let view = open(store)?;
    let rows = match sub.get_one::<String>("search") {
        Some(q) => view.filtered(q).into_iter().cloned().collect(),
        None => view.history().to_vec(),
    };
    Ok(rows)
}

pub fn visible_columns(sub: &clap::ArgMatches) -> Result<Vec<Column>> {
    let mut hidden = Vec::new();
    if let Some(keys) = sub.get_many::<String>("hide") {
        for key in keys {
            let col = Column::from_key(key).ok_or_else(|| anyhow!("Unknown column '{}'", key))?;
            hidden.push(col);
        }
    }
    Ok(Column::ALL
        .into_iter()
        .filter(|c| !hidden.contains(c))
        .collect())
}

/// Select the given ids and delete them in one write.
pub fn remove<S: KvStore + ?Sized>(store: &S, sub: &clap::ArgMatches) -> Result<usize> {
    let mut view = open(store)?;
    let ids = sub
        .get_many::<String>("id")
        .into_iter()
        .flatten()
        .map(|s| parse_id(s))
        .collect::<Result<Vec<i64>>>()?;
    for id in ids {
        if !view.selected().contains(&id) {
            view.toggle_select(id);
        }
    }
    Ok(view.delete_selected()?)
}

pub fn edit<S: KvStore + ?Sized>(store: &S, sub: &clap::ArgMatches) -> Result<BillingRecord> {
    let mut view = open(store)?;
    let field = |id: &str| sub.get_one::<String>(id).cloned();
    let id_raw = sub
        .get_one::<String>("id")
        .ok_or_else(|| anyhow!("--id is required"))?;
    let input = EditInput {
        id: parse_id(id_raw)?,
        room_name: field("room"),
        room_rent: field("rent"),
        elec_usage: field("elec_usage"),
        water_usage: field("water_usage"),
        bike_fee: field("bike"),
        trash_fee: field("trash"),
        wifi_fee: field("wifi"),
    };
    Ok(view.save_edit(&input)?)
}
