// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use roombill::commands::{calc, history};
use roombill::store::{KvRepository, RecordRepository, load_prices};
use roombill::views::admin::Column;
use roombill::cli;
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE kv(key TEXT PRIMARY KEY, value TEXT NOT NULL);
        "#,
    )
    .unwrap();
    conn
}

fn calc_args(conn: &Connection, args: &[&str]) -> anyhow::Result<roombill::models::BillingRecord> {
    let mut argv = vec!["roombill", "calc"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("calc", calc_m)) = matches.subcommand() {
        calc::calculate(conn, calc_m)
    } else {
        panic!("no calc subcommand");
    }
}

fn with_history<T>(argv: &[&str], f: impl FnOnce(&str, &clap::ArgMatches) -> T) -> T {
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("history", hist_m)) = matches.subcommand() {
        if let Some((name, sub)) = hist_m.subcommand() {
            return f(name, sub);
        }
    }
    panic!("no history subcommand");
}

fn seed(conn: &Connection) -> Vec<i64> {
    let mut ids = Vec::new();
    for room in ["A1", "B2", "C3"] {
        let rec = calc_args(conn, &["--room", room, "--rent", "1.000.000"]).unwrap();
        ids.push(rec.id);
    }
    ids
}

#[test]
fn calc_uses_and_remembers_prices() {
    let conn = setup();
    let first = calc_args(
        &conn,
        &[
            "--room", "A1", "--rent", "2.000.000", "--elec-old", "100", "--elec-new", "150",
            "--elec-price", "3.500", "--water-old", "10", "--water-new", "15", "--water-price",
            "15.000", "--bike", "50.000", "--trash", "30.000", "--wifi", "100.000",
            "--save-elec-price",
        ],
    )
    .unwrap();
    assert_eq!(first.total, 2_430_000);

    let prices = load_prices(&conn).unwrap();
    assert_eq!(prices.electricity_price, Some(3_500));
    assert_eq!(prices.water_price, None);

    let second = calc_args(&conn, &["--room", "A1", "--elec-old", "150", "--elec-new", "200"]).unwrap();
    assert_eq!(second.elec_cost, 175_000);
    assert_eq!(second.water_cost, 0);
    assert_eq!(KvRepository::new(&conn).load().unwrap().len(), 2);
}

#[test]
fn list_filters_by_search() {
    let conn = setup();
    seed(&conn);
    let rows = with_history(&["roombill", "history", "list", "--search", "b2"], |_, sub| {
        history::query_rows(&conn, sub).unwrap()
    });
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].room_name, "B2");
}

#[test]
fn hidden_columns_are_left_out() {
    let cols = with_history(
        &["roombill", "history", "list", "--hide", "date", "--hide", "wifiFee"],
        |_, sub| history::visible_columns(sub).unwrap(),
    );
    assert_eq!(cols.len(), 7);
    assert!(!cols.contains(&Column::Date));
    assert!(!cols.contains(&Column::WifiFee));

    let err = with_history(&["roombill", "history", "list", "--hide", "nope"], |_, sub| {
        history::visible_columns(sub).unwrap_err()
    });
    assert!(err.to_string().contains("Unknown column"));
}

#[test]
fn rm_deletes_every_given_id() {
    let conn = setup();
    let ids = seed(&conn);
    let a = ids[0].to_string();
    let c = format!(" {} ", ids[2]);
    let removed = with_history(
        &["roombill", "history", "rm", "--id", &a, "--id", &c, "--id", &a],
        |_, sub| history::remove(&conn, sub).unwrap(),
    );
    assert_eq!(removed, 2);
    let left = KvRepository::new(&conn).load().unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].id, ids[1]);
}

#[test]
fn edit_overwrites_fields_without_touching_total() {
    let conn = setup();
    let ids = seed(&conn);
    let id = ids[1].to_string();
    let rec = with_history(
        &["roombill", "history", "edit", "--id", &id, "--rent", "1200000", "--bike", "50000"],
        |_, sub| history::edit(&conn, sub).unwrap(),
    );
    assert_eq!(rec.room_rent, 1_200_000);
    assert_eq!(rec.bike_fee, 50_000);
    assert_eq!(rec.total, 1_000_000);

    let err = with_history(
        &["roombill", "history", "edit", "--id", &id, "--wifi", "1.000"],
        |_, sub| history::edit(&conn, sub).unwrap_err(),
    );
    assert!(err.to_string().contains("wifiFee"));
}
