// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::billing::RawBillInput;
use crate::currency::format_amount;
use crate::models::{BillingRecord, RememberFlags};
use crate::store::{KvRepository, KvStore};
use crate::utils::{maybe_print_json, pretty_table};
use crate::views::calculator::CalculatorView;
use crate::words::amount_to_words;
use anyhow::Result;

pub fn handle<S: KvStore + ?Sized>(store: &S, m: &clap::ArgMatches) -> Result<()> {
    let record = calculate(store, m)?;
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &record)? {
        return Ok(());
    }

    let rows = vec![
        vec!["Tiền phòng".into(), format_amount(record.room_rent)],
        vec![
            "Điện".into(),
            format!("{} kWh / {}", record.elec_usage, format_amount(record.elec_cost)),
        ],
        vec![
            "Nước".into(),
            format!("{} m³ / {}", record.water_usage, format_amount(record.water_cost)),
        ],
        vec!["Tiền xe".into(), format_amount(record.bike_fee)],
        vec!["Tiền rác".into(), format_amount(record.trash_fee)],
        vec!["Tiền WiFi".into(), format_amount(record.wifi_fee)],
        vec!["Tổng".into(), format_amount(record.total)],
    ];
    println!("{}", pretty_table(&[record.room_name.as_str(), "VNĐ"], rows));
    println!(
        "Tổng cộng: {} ({}) [{}]",
        format_amount(record.total),
        amount_to_words(record.total),
        record.band().label()
    );
    Ok(())
}

/// Run the calculator with the parsed arguments; unset prices and fees fall
/// back to the remembered values.
pub fn calculate<S: KvStore + ?Sized>(store: &S, m: &clap::ArgMatches) -> Result<BillingRecord> {
    let mut view = CalculatorView::open(KvRepository::new(store), store)?;
    let prefilled = view.prefilled();
    let text = |id: &str, fallback: &str| -> String {
        m.get_one::<String>(id)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    };

    let raw = RawBillInput {
        room_rent: text("rent", ""),
        old_elec: text("elec_old", ""),
        new_elec: text("elec_new", ""),
        elec_price: text("elec_price", &prefilled.elec_price),
        old_water: text("water_old", ""),
        new_water: text("water_new", ""),
        water_price: text("water_price", &prefilled.water_price),
        bike_fee: text("bike", &prefilled.bike_fee),
        trash_fee: text("trash", &prefilled.trash_fee),
        wifi_fee: text("wifi", ""),
    };
    let remember = RememberFlags {
        electricity_price: m.get_flag("save_elec_price"),
        water_price: m.get_flag("save_water_price"),
        bike_fee: m.get_flag("save_bike_fee"),
        trash_fee: m.get_flag("save_trash_fee"),
    };
    let room = m.get_one::<String>("room").map(|s| s.as_str()).unwrap_or("");

    Ok(view.calculate(room, &raw, remember)?)
}
