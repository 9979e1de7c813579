// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::currency::format_amount;
use crate::store::{KvStore, load_prices};
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle<S: KvStore + ?Sized>(store: &S, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("show", _)) = m.subcommand() {
        let p = load_prices(store)?;
        let show = |v: Option<u64>| v.map(format_amount).unwrap_or_else(|| "-".into());
        let rows = vec![
            vec!["Giá điện/kWh".into(), show(p.electricity_price)],
            vec!["Giá nước/m³".into(), show(p.water_price)],
            vec!["Tiền xe".into(), show(p.bike_fee)],
            vec!["Tiền rác".into(), show(p.trash_fee)],
        ];
        println!("{}", pretty_table(&["Setting", "VNĐ"], rows));
    }
    Ok(())
}
