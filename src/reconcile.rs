// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Validity rules for persisted history entries.
//!
//! The history blob is untyped JSON written by earlier versions (or edited by
//! hand), so entries are checked as raw values before being read as
//! [`BillingRecord`]s. Only entries that break one of the validity rules are
//! dropped; a kept entry is read leniently, with odd amounts coerced rather
//! than rejected.

use crate::error::{RentError, RentResult};
use crate::models::BillingRecord;
use serde_json::Value;
use std::fmt;
use tracing::debug;

static NULL: Value = Value::Null;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Defect {
    NotAnObject,
    BadId,
    BadTotal,
    NegativeTotal,
    BadRoomRent,
    BadDate,
    MissingRoomName,
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::NotAnObject => write!(f, "entry is not an object"),
            Defect::BadId => write!(f, "id is not a number"),
            Defect::BadTotal => write!(f, "total is not a number"),
            Defect::NegativeTotal => write!(f, "total is negative"),
            Defect::BadRoomRent => write!(f, "roomRent is not a number"),
            Defect::BadDate => write!(f, "date is not a string"),
            Defect::MissingRoomName => write!(f, "roomName is empty"),
        }
    }
}

/// Parse the persisted blob. Anything other than a JSON array is malformed.
pub fn parse_history(blob: &str) -> RentResult<Vec<Value>> {
    match serde_json::from_str::<Value>(blob) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(other) => Err(RentError::MalformedStorageBlob(format!(
            "expected a list, found {}",
            kind(&other)
        ))),
        Err(e) => Err(RentError::MalformedStorageBlob(e.to_string())),
    }
}

/// First rule the entry breaks, if any.
pub fn check_entry(entry: &Value) -> Option<Defect> {
    read_entry(entry).err()
}

/// Read an entry as a typed record, or report the rule it breaks.
pub fn read_entry(entry: &Value) -> Result<BillingRecord, Defect> {
    let Some(obj) = entry.as_object() else {
        return Err(Defect::NotAnObject);
    };
    let field = |k: &str| obj.get(k).unwrap_or(&NULL);

    if !field("id").is_number() {
        return Err(Defect::BadId);
    }
    match field("total").as_f64() {
        None => return Err(Defect::BadTotal),
        Some(t) if t.is_nan() => return Err(Defect::BadTotal),
        Some(t) if t < 0.0 => return Err(Defect::NegativeTotal),
        Some(_) => {}
    }
    match field("roomRent").as_f64() {
        Some(r) if !r.is_nan() => {}
        _ => return Err(Defect::BadRoomRent),
    }
    if !field("date").is_string() {
        return Err(Defect::BadDate);
    }
    if !truthy(field("roomName")) {
        return Err(Defect::MissingRoomName);
    }

    Ok(BillingRecord {
        id: id_of(field("id")),
        room_name: name_of(field("roomName")),
        room_rent: amount_of(field("roomRent")),
        elec_usage: amount_of(field("elecUsage")),
        elec_cost: amount_of(field("elecCost")),
        water_usage: amount_of(field("waterUsage")),
        water_cost: amount_of(field("waterCost")),
        bike_fee: amount_of(field("bikeFee")),
        trash_fee: amount_of(field("trashFee")),
        wifi_fee: amount_of(field("wifiFee")),
        total: amount_of(field("total")),
        date: field("date").as_str().unwrap_or_default().to_string(),
    })
}

// Missing, null or non-numeric amounts read as 0; fractions truncate,
// negatives floor at 0 and oversized values saturate.
fn amount_of(v: &Value) -> u64 {
    match v.as_u64() {
        Some(n) => n,
        None => match v.as_f64() {
            Some(f) if f > 0.0 => f as u64,
            _ => 0,
        },
    }
}

fn id_of(v: &Value) -> i64 {
    v.as_i64()
        .unwrap_or_else(|| v.as_f64().map(|f| f as i64).unwrap_or_default())
}

fn name_of(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn validate(entry: &Value) -> RentResult<BillingRecord> {
    read_entry(entry).map_err(RentError::InvalidRecordShape)
}

/// Keep the valid entries, in order. The flag is set when anything was dropped.
pub fn reconcile(raw: Vec<Value>) -> (Vec<BillingRecord>, bool) {
    let before = raw.len();
    let valid: Vec<BillingRecord> = raw
        .iter()
        .filter_map(|v| match validate(v) {
            Ok(rec) => Some(rec),
            Err(e) => {
                debug!("dropping history entry: {}", e);
                None
            }
        })
        .collect();
    let modified = valid.len() != before;
    (valid, modified)
}

fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
