// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::RentResult;
use crate::models::{BillingRecord, RememberFlags, SavedUnitPrices};
use crate::reconcile::{parse_history, reconcile};
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::{debug, info, warn};

pub const HISTORY_KEY: &str = "rentHistory";
pub const ELECTRICITY_PRICE_KEY: &str = "electricityPrice";
pub const WATER_PRICE_KEY: &str = "waterPrice";
pub const BIKE_FEE_KEY: &str = "bikeFee";
pub const TRASH_FEE_KEY: &str = "trashFee";

/// Text blobs under string keys. Every write replaces the whole value.
pub trait KvStore {
    fn get(&self, key: &str) -> RentResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> RentResult<()>;
    fn remove(&self, key: &str) -> RentResult<()>;
}

/// Process-local store, used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> RentResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> RentResult<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> RentResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// The persisted history, as both views see it.
pub trait RecordRepository {
    /// Load and reconcile. Invalid entries are discarded from storage too.
    fn load(&self) -> RentResult<Vec<BillingRecord>>;
    fn save_all(&self, records: &[BillingRecord]) -> RentResult<()>;
    fn append(&self, record: BillingRecord) -> RentResult<Vec<BillingRecord>>;
    fn delete_by_ids(&self, ids: &[i64]) -> RentResult<Vec<BillingRecord>>;
}

/// History kept as one JSON array under [`HISTORY_KEY`].
pub struct KvRepository<'a, S: KvStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KvStore + ?Sized> KvRepository<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }
}

impl<S: KvStore + ?Sized> RecordRepository for KvRepository<'_, S> {
    fn load(&self) -> RentResult<Vec<BillingRecord>> {
        let Some(blob) = self.store.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };
        let raw = match parse_history(&blob) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("{}; clearing stored history", e);
                self.store.remove(HISTORY_KEY)?;
                return Ok(Vec::new());
            }
        };
        let before = raw.len();
        let (records, modified) = reconcile(raw);
        if modified {
            warn!(
                dropped = before - records.len(),
                kept = records.len(),
                "discarding invalid history entries"
            );
            self.save_all(&records)?;
        }
        debug!("loaded {} history entries", records.len());
        Ok(records)
    }

    fn save_all(&self, records: &[BillingRecord]) -> RentResult<()> {
        let blob = serde_json::to_string(records)?;
        self.store.set(HISTORY_KEY, &blob)
    }

    fn append(&self, record: BillingRecord) -> RentResult<Vec<BillingRecord>> {
        let mut records = self.load()?;
        info!(id = record.id, room = %record.room_name, total = record.total, "appending record");
        records.push(record);
        self.save_all(&records)?;
        Ok(records)
    }

    fn delete_by_ids(&self, ids: &[i64]) -> RentResult<Vec<BillingRecord>> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| !ids.contains(&r.id));
        info!(removed = before - records.len(), "deleting records");
        self.save_all(&records)?;
        Ok(records)
    }
}

/// Read the remembered prices. Values that do not parse are treated as unset.
pub fn load_prices<S: KvStore + ?Sized>(store: &S) -> RentResult<SavedUnitPrices> {
    let read = |key: &str| -> RentResult<Option<u64>> {
        Ok(store.get(key)?.and_then(|v| v.trim().parse::<u64>().ok()))
    };
    Ok(SavedUnitPrices {
        electricity_price: read(ELECTRICITY_PRICE_KEY)?,
        water_price: read(WATER_PRICE_KEY)?,
        bike_fee: read(BIKE_FEE_KEY)?,
        trash_fee: read(TRASH_FEE_KEY)?,
    })
}

/// Overwrite each price whose flag is set; the others are left alone.
pub fn save_prices<S: KvStore + ?Sized>(
    store: &S,
    flags: RememberFlags,
    electricity_price: u64,
    water_price: u64,
    bike_fee: u64,
    trash_fee: u64,
) -> RentResult<()> {
    let entries = [
        (flags.electricity_price, ELECTRICITY_PRICE_KEY, electricity_price),
        (flags.water_price, WATER_PRICE_KEY, water_price),
        (flags.bike_fee, BIKE_FEE_KEY, bike_fee),
        (flags.trash_fee, TRASH_FEE_KEY, trash_fee),
    ];
    for (remember, key, value) in entries {
        if remember {
            store.set(key, &value.to_string())?;
            info!(key, value, "saved price");
        }
    }
    Ok(())
}
