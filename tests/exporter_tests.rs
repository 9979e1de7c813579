// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use roombill::models::BillingRecord;
use roombill::store::{KvRepository, RecordRepository};
use roombill::views::admin::export_csv;
use roombill::{cli, commands::exporter};
use rusqlite::Connection;
use tempfile::tempdir;

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    roombill::db::init_schema(&conn).unwrap();
    conn
}

fn sample(id: i64, name: &str) -> BillingRecord {
    BillingRecord {
        id,
        room_name: name.into(),
        room_rent: 2_000_000,
        elec_usage: 50,
        elec_cost: 175_000,
        water_usage: 5,
        water_cost: 75_000,
        bike_fee: 50_000,
        trash_fee: 30_000,
        wifi_fee: 100_000,
        total: 2_430_000,
        date: "09:05:03 7/3/2025".into(),
    }
}

fn run_export(conn: &Connection, args: &[&str]) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let mut argv = vec!["roombill", "export"];
    argv.extend_from_slice(args);
    let matches = cli.get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(conn, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn csv_has_localized_headers_and_formatted_cells() {
    let mut buf = Vec::new();
    export_csv(&mut buf, &[sample(1, "A1")]).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Tên Phòng,Ngày,Tiền Phòng,Điện (sử dụng/cost),Nước (sử dụng/cost),Tiền Xe,Tiền Rác,Tiền WiFi,Tổng"
    );
    assert_eq!(
        lines.next().unwrap(),
        "A1,09:05:03 7/3/2025,2.000.000,50 kWh / 175.000,5 m³ / 75.000,50.000,30.000,100.000,2.430.000"
    );
    assert!(lines.next().is_none());
}

#[test]
fn export_command_writes_filtered_csv() {
    let conn = base_conn();
    KvRepository::new(&conn)
        .save_all(&[sample(1, "A1"), sample(2, "B2"), sample(3, "A1 gác")])
        .unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("rent_history.csv");
    let out_str = out_path.to_string_lossy().to_string();
    run_export(&conn, &["--out", &out_str, "--search", "a1"]).unwrap();

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let names: Vec<String> = rdr
        .records()
        .map(|r| r.unwrap().get(0).unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["A1", "A1 gác"]);
}

#[test]
fn export_command_streams_pretty_json() {
    let conn = base_conn();
    KvRepository::new(&conn).save_all(&[sample(1, "A1")]).unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();
    run_export(&conn, &["--format", "JSON", "--out", &out_str]).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: Vec<BillingRecord> = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed, vec![sample(1, "A1")]);
    assert!(contents.contains("\"roomName\": \"A1\""));
}

#[test]
fn export_rejects_unknown_format() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(run_export(&conn, &["--format", "xml", "--out", &out_str]).is_err());
    assert!(!out_path.exists());
}
