// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::currency::parse_amount;
use crate::error::{RentError, RentResult};
use serde::Serialize;

/// Calculator inputs after parsing. Meter readings are absolute values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillInput {
    pub room_rent: u64,
    pub old_elec: u64,
    pub new_elec: u64,
    pub elec_price: u64,
    pub old_water: u64,
    pub new_water: u64,
    pub water_price: u64,
    pub bike_fee: u64,
    pub trash_fee: u64,
    pub wifi_fee: u64,
}

/// Calculator inputs as typed by the user, e.g. `"2.000.000"`.
#[derive(Debug, Clone, Default)]
pub struct RawBillInput {
    pub room_rent: String,
    pub old_elec: String,
    pub new_elec: String,
    pub elec_price: String,
    pub old_water: String,
    pub new_water: String,
    pub water_price: String,
    pub bike_fee: String,
    pub trash_fee: String,
    pub wifi_fee: String,
}

impl RawBillInput {
    pub fn parse(&self) -> BillInput {
        BillInput {
            room_rent: parse_amount(&self.room_rent),
            old_elec: parse_amount(&self.old_elec),
            new_elec: parse_amount(&self.new_elec),
            elec_price: parse_amount(&self.elec_price),
            old_water: parse_amount(&self.old_water),
            new_water: parse_amount(&self.new_water),
            water_price: parse_amount(&self.water_price),
            bike_fee: parse_amount(&self.bike_fee),
            trash_fee: parse_amount(&self.trash_fee),
            wifi_fee: parse_amount(&self.wifi_fee),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bill {
    pub room_rent: u64,
    pub elec_usage: u64,
    pub elec_cost: u64,
    pub water_usage: u64,
    pub water_cost: u64,
    pub bike_fee: u64,
    pub trash_fee: u64,
    pub wifi_fee: u64,
    pub total: u64,
}

/// Compute one month's charges.
///
/// A meter that reads lower than last month bills zero usage. The only
/// failure is an amount too large to represent, which aborts the whole
/// calculation.
pub fn compute(input: &BillInput) -> RentResult<Bill> {
    let elec_usage = input.new_elec.saturating_sub(input.old_elec);
    let elec_cost = mul(elec_usage, input.elec_price, "electricity cost")?;
    let water_usage = input.new_water.saturating_sub(input.old_water);
    let water_cost = mul(water_usage, input.water_price, "water cost")?;

    let total = [
        elec_cost,
        water_cost,
        input.bike_fee,
        input.trash_fee,
        input.wifi_fee,
    ]
    .iter()
    .try_fold(input.room_rent, |acc, v| acc.checked_add(*v))
    .ok_or_else(|| RentError::InvalidComputationInput("total overflows".into()))?;

    Ok(Bill {
        room_rent: input.room_rent,
        elec_usage,
        elec_cost,
        water_usage,
        water_cost,
        bike_fee: input.bike_fee,
        trash_fee: input.trash_fee,
        wifi_fee: input.wifi_fee,
        total,
    })
}

fn mul(usage: u64, price: u64, what: &str) -> RentResult<u64> {
    usage
        .checked_mul(price)
        .ok_or_else(|| RentError::InvalidComputationInput(format!("{} overflows", what)))
}
