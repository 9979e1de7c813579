// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::filter_records;
use crate::currency::format_amount;
use crate::error::{RentError, RentResult};
use crate::models::{BillingRecord, SavedUnitPrices};
use crate::store::RecordRepository;
use std::io::Write;
use tracing::info;

pub const EXPORT_FILE_NAME: &str = "rent_history.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    RoomName,
    Date,
    RoomRent,
    Electricity,
    Water,
    BikeFee,
    TrashFee,
    WifiFee,
    Total,
}

impl Column {
    pub const ALL: [Column; 9] = [
        Column::RoomName,
        Column::Date,
        Column::RoomRent,
        Column::Electricity,
        Column::Water,
        Column::BikeFee,
        Column::TrashFee,
        Column::WifiFee,
        Column::Total,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Column::RoomName => "roomName",
            Column::Date => "date",
            Column::RoomRent => "roomRent",
            Column::Electricity => "elecUsage",
            Column::Water => "waterUsage",
            Column::BikeFee => "bikeFee",
            Column::TrashFee => "trashFee",
            Column::WifiFee => "wifiFee",
            Column::Total => "total",
        }
    }

    pub fn from_key(key: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|c| c.key() == key.trim())
    }

    pub fn header(self) -> &'static str {
        match self {
            Column::RoomName => "Tên Phòng",
            Column::Date => "Ngày",
            Column::RoomRent => "Tiền Phòng",
            Column::Electricity => "Điện (sử dụng/cost)",
            Column::Water => "Nước (sử dụng/cost)",
            Column::BikeFee => "Tiền Xe",
            Column::TrashFee => "Tiền Rác",
            Column::WifiFee => "Tiền WiFi",
            Column::Total => "Tổng",
        }
    }

    pub fn cell(self, r: &BillingRecord) -> String {
        match self {
            Column::RoomName => r.room_name.clone(),
            Column::Date => r.date.clone(),
            Column::RoomRent => format_amount(r.room_rent),
            Column::Electricity => {
                format!("{} kWh / {}", r.elec_usage, format_amount(r.elec_cost))
            }
            Column::Water => format!("{} m³ / {}", r.water_usage, format_amount(r.water_cost)),
            Column::BikeFee => format_amount(r.bike_fee),
            Column::TrashFee => format_amount(r.trash_fee),
            Column::WifiFee => format_amount(r.wifi_fee),
            Column::Total => format_amount(r.total),
        }
    }
}

/// Values from the edit dialog. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct EditInput {
    pub id: i64,
    pub room_name: Option<String>,
    pub room_rent: Option<String>,
    pub elec_usage: Option<String>,
    pub water_usage: Option<String>,
    pub bike_fee: Option<String>,
    pub trash_fee: Option<String>,
    pub wifi_fee: Option<String>,
}

pub struct AdminView<R: RecordRepository> {
    repo: R,
    prices: SavedUnitPrices,
    history: Vec<BillingRecord>,
    selected: Vec<i64>,
}

impl<R: RecordRepository> AdminView<R> {
    pub fn open(repo: R, prices: SavedUnitPrices) -> RentResult<Self> {
        let history = repo.load()?;
        Ok(Self {
            repo,
            prices,
            history,
            selected: Vec::new(),
        })
    }

    pub fn history(&self) -> &[BillingRecord] {
        &self.history
    }

    pub fn filtered(&self, query: &str) -> Vec<&BillingRecord> {
        filter_records(&self.history, query)
    }

    pub fn selected(&self) -> &[i64] {
        &self.selected
    }

    pub fn toggle_select(&mut self, id: i64) {
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id);
        }
    }

    pub fn toggle_select_all(&mut self) {
        if self.selected.len() == self.history.len() {
            self.selected.clear();
        } else {
            self.selected = self.history.iter().map(|r| r.id).collect();
        }
    }

    pub fn delete_entry(&mut self, id: i64) -> RentResult<()> {
        self.history = self.repo.delete_by_ids(&[id])?;
        self.selected.retain(|s| *s != id);
        Ok(())
    }

    /// Delete every selected record; returns how many were removed.
    pub fn delete_selected(&mut self) -> RentResult<usize> {
        if self.selected.is_empty() {
            return Ok(0);
        }
        let before = self.history.len();
        self.history = self.repo.delete_by_ids(&self.selected)?;
        self.selected.clear();
        Ok(before - self.history.len())
    }

    /// Overwrite the edited fields of one record.
    ///
    /// Editing a usage recomputes its cost from the saved unit price. `total`
    /// is left as it was, so an edited record may no longer add up.
    pub fn save_edit(&mut self, edit: &EditInput) -> RentResult<BillingRecord> {
        let pos = self
            .history
            .iter()
            .position(|r| r.id == edit.id)
            .ok_or(RentError::UnknownRecord(edit.id))?;
        let mut rec = self.history[pos].clone();

        if let Some(name) = &edit.room_name {
            let name = name.trim();
            if name.is_empty() {
                return Err(RentError::InvalidEditInput {
                    field: "roomName",
                    value: String::new(),
                });
            }
            rec.room_name = name.to_string();
        }
        if let Some(v) = &edit.room_rent {
            rec.room_rent = parse_edit("roomRent", v)?;
        }
        if let Some(v) = &edit.elec_usage {
            rec.elec_usage = parse_edit("elecUsage", v)?;
            rec.elec_cost = cost("elecUsage", v, rec.elec_usage, self.prices.electricity_price)?;
        }
        if let Some(v) = &edit.water_usage {
            rec.water_usage = parse_edit("waterUsage", v)?;
            rec.water_cost = cost("waterUsage", v, rec.water_usage, self.prices.water_price)?;
        }
        if let Some(v) = &edit.bike_fee {
            rec.bike_fee = parse_edit("bikeFee", v)?;
        }
        if let Some(v) = &edit.trash_fee {
            rec.trash_fee = parse_edit("trashFee", v)?;
        }
        if let Some(v) = &edit.wifi_fee {
            rec.wifi_fee = parse_edit("wifiFee", v)?;
        }

        self.history[pos] = rec.clone();
        self.repo.save_all(&self.history)?;
        info!(id = rec.id, "record updated");
        Ok(rec)
    }
}

fn parse_edit(field: &'static str, value: &str) -> RentResult<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| RentError::InvalidEditInput {
            field,
            value: value.to_string(),
        })
}

fn cost(field: &'static str, raw: &str, usage: u64, price: Option<u64>) -> RentResult<u64> {
    usage
        .checked_mul(price.unwrap_or(0))
        .ok_or_else(|| RentError::InvalidEditInput {
            field,
            value: raw.to_string(),
        })
}

/// Write records as CSV with the localized headers and formatted cells.
pub fn export_csv<'r, W, I>(writer: W, records: I) -> RentResult<()>
where
    W: Write,
    I: IntoIterator<Item = &'r BillingRecord>,
{
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(Column::ALL.iter().map(|c| c.header()))?;
    for r in records {
        wtr.write_record(Column::ALL.iter().map(|c| c.cell(r)))?;
    }
    wtr.flush()?;
    Ok(())
}
