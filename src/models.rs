// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

pub const UNNAMED_ROOM: &str = "Phòng không tên";

/// One computed monthly bill, as persisted under `rentHistory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingRecord {
    pub id: i64,
    pub room_name: String,
    pub room_rent: u64,
    #[serde(default)]
    pub elec_usage: u64,
    #[serde(default)]
    pub elec_cost: u64,
    #[serde(default)]
    pub water_usage: u64,
    #[serde(default)]
    pub water_cost: u64,
    #[serde(default)]
    pub bike_fee: u64,
    #[serde(default)]
    pub trash_fee: u64,
    #[serde(default)]
    pub wifi_fee: u64,
    pub total: u64,
    pub date: String, // HH:MM:SS dd/mm/YYYY, display only
}

impl BillingRecord {
    /// Sum of the constituent fields. Equal to `total` unless the record was
    /// edited after creation.
    pub fn parts_sum(&self) -> Option<u64> {
        [
            self.elec_cost,
            self.water_cost,
            self.bike_fee,
            self.trash_fee,
            self.wifi_fee,
        ]
        .iter()
        .try_fold(self.room_rent, |acc, v| acc.checked_add(*v))
    }

    pub fn band(&self) -> TotalBand {
        TotalBand::of(self.total)
    }
}

/// Remembered per-unit prices and fixed fees. `None` means never saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedUnitPrices {
    pub electricity_price: Option<u64>,
    pub water_price: Option<u64>,
    pub bike_fee: Option<u64>,
    pub trash_fee: Option<u64>,
}

/// Which inputs to remember after a successful calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RememberFlags {
    pub electricity_price: bool,
    pub water_price: bool,
    pub bike_fee: bool,
    pub trash_fee: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TotalBand {
    Low,
    Medium,
    High,
}

impl TotalBand {
    pub fn of(total: u64) -> Self {
        if total < 2_000_000 {
            TotalBand::Low
        } else if total < 5_000_000 {
            TotalBand::Medium
        } else {
            TotalBand::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TotalBand::Low => "Thấp",
            TotalBand::Medium => "Trung bình",
            TotalBand::High => "Cao",
        }
    }
}
