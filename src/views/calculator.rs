// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::filter_records;
use crate::billing::{RawBillInput, compute};
use crate::currency::format_input;
use crate::error::RentResult;
use crate::models::{BillingRecord, RememberFlags, SavedUnitPrices, UNNAMED_ROOM};
use crate::store::{KvStore, RecordRepository, load_prices, save_prices};
use chrono::{DateTime, Local};
use tracing::info;

/// vi-VN display form: `09:05:03 7/3/2025`.
pub const DATE_FORMAT: &str = "%H:%M:%S %-d/%-m/%Y";

pub struct CalculatorView<'a, R: RecordRepository, S: KvStore + ?Sized> {
    repo: R,
    settings: &'a S,
    history: Vec<BillingRecord>,
    prices: SavedUnitPrices,
}

impl<'a, R: RecordRepository, S: KvStore + ?Sized> CalculatorView<'a, R, S> {
    /// Activate the view: reconcile the history and read remembered prices.
    pub fn open(repo: R, settings: &'a S) -> RentResult<Self> {
        let history = repo.load()?;
        let prices = load_prices(settings)?;
        Ok(Self {
            repo,
            settings,
            history,
            prices,
        })
    }

    pub fn history(&self) -> &[BillingRecord] {
        &self.history
    }

    pub fn filtered(&self, query: &str) -> Vec<&BillingRecord> {
        filter_records(&self.history, query)
    }

    pub fn saved_prices(&self) -> &SavedUnitPrices {
        &self.prices
    }

    /// Form contents on activation: remembered prices, everything else blank.
    pub fn prefilled(&self) -> RawBillInput {
        let show = |v: Option<u64>| v.map(|n| format_input(&n.to_string())).unwrap_or_default();
        RawBillInput {
            elec_price: show(self.prices.electricity_price),
            water_price: show(self.prices.water_price),
            bike_fee: show(self.prices.bike_fee),
            trash_fee: show(self.prices.trash_fee),
            ..RawBillInput::default()
        }
    }

    pub fn calculate(
        &mut self,
        room_name: &str,
        raw: &RawBillInput,
        remember: RememberFlags,
    ) -> RentResult<BillingRecord> {
        self.calculate_at(room_name, raw, remember, Local::now())
    }

    /// Compute, append to history, then persist whichever prices are flagged.
    /// A failed computation writes nothing.
    pub fn calculate_at(
        &mut self,
        room_name: &str,
        raw: &RawBillInput,
        remember: RememberFlags,
        now: DateTime<Local>,
    ) -> RentResult<BillingRecord> {
        let input = raw.parse();
        let bill = compute(&input)?;

        let room_name = room_name.trim();
        let record = BillingRecord {
            id: next_id(&self.history, now.timestamp_millis()),
            room_name: if room_name.is_empty() {
                UNNAMED_ROOM.to_string()
            } else {
                room_name.to_string()
            },
            room_rent: bill.room_rent,
            elec_usage: bill.elec_usage,
            elec_cost: bill.elec_cost,
            water_usage: bill.water_usage,
            water_cost: bill.water_cost,
            bike_fee: bill.bike_fee,
            trash_fee: bill.trash_fee,
            wifi_fee: bill.wifi_fee,
            total: bill.total,
            date: now.format(DATE_FORMAT).to_string(),
        };
        // Record first: a failed history write leaves saved prices untouched.
        self.history = self.repo.append(record.clone())?;

        save_prices(
            self.settings,
            remember,
            input.elec_price,
            input.water_price,
            input.bike_fee,
            input.trash_fee,
        )?;
        self.prices = load_prices(self.settings)?;
        info!(id = record.id, total = record.total, "calculation stored");
        Ok(record)
    }
}

/// Millisecond timestamp, bumped past the newest id so ids stay unique even
/// when two records land in the same millisecond.
pub fn next_id(history: &[BillingRecord], now_ms: i64) -> i64 {
    match history.iter().map(|r| r.id).max() {
        Some(last) if last >= now_ms => last + 1,
        _ => now_ms,
    }
}
