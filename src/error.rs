// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::reconcile::Defect;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentError {
    #[error("Stored history is not a readable list: {0}")]
    MalformedStorageBlob(String),

    #[error("Invalid history record: {0}")]
    InvalidRecordShape(Defect),

    #[error("Lỗi tính toán: Tổng tiền không hợp lệ! ({0})")]
    InvalidComputationInput(String),

    #[error("Dữ liệu không hợp lệ! ({field}: '{value}')")]
    InvalidEditInput { field: &'static str, value: String },

    #[error("Record {0} not found")]
    UnknownRecord(i64),

    #[error("Storage error: {source}")]
    Storage {
        #[from]
        source: rusqlite::Error,
    },

    #[error("Serialization error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("CSV error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type RentResult<T> = Result<T, RentError>;
