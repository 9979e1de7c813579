// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use roombill::error::RentError;
use roombill::models::{BillingRecord, SavedUnitPrices};
use roombill::store::{HISTORY_KEY, KvRepository, KvStore, MemoryStore, RecordRepository};
use roombill::views::admin::{AdminView, EditInput};

fn record(id: i64, name: &str, total: u64) -> BillingRecord {
    BillingRecord {
        id,
        room_name: name.into(),
        room_rent: total,
        elec_usage: 0,
        elec_cost: 0,
        water_usage: 0,
        water_cost: 0,
        bike_fee: 0,
        trash_fee: 0,
        wifi_fee: 0,
        total,
        date: format!("10:00:00 {}/3/2025", id),
    }
}

fn seeded() -> MemoryStore {
    let store = MemoryStore::new();
    KvRepository::new(&store)
        .save_all(&[
            record(1, "Phòng A1", 1_500_000),
            record(2, "Phòng B2", 2_430_000),
            record(3, "Kiot", 6_000_000),
        ])
        .unwrap();
    store
}

fn prices() -> SavedUnitPrices {
    SavedUnitPrices {
        electricity_price: Some(3_500),
        water_price: Some(15_000),
        ..SavedUnitPrices::default()
    }
}

fn ids(records: &[BillingRecord]) -> Vec<i64> {
    records.iter().map(|r| r.id).collect()
}

#[test]
fn deleting_a_selected_record_clears_it_from_selection() {
    let store = seeded();
    let mut view = AdminView::open(KvRepository::new(&store), prices()).unwrap();
    view.toggle_select(1);
    view.toggle_select(2);

    view.delete_entry(1).unwrap();
    assert_eq!(ids(view.history()), vec![2, 3]);
    assert_eq!(view.selected(), &[2]);
    assert_eq!(ids(&KvRepository::new(&store).load().unwrap()), vec![2, 3]);
}

#[test]
fn bulk_delete_removes_selection() {
    let store = seeded();
    let mut view = AdminView::open(KvRepository::new(&store), prices()).unwrap();
    assert_eq!(view.delete_selected().unwrap(), 0);

    view.toggle_select(3);
    view.toggle_select(1);
    assert_eq!(view.delete_selected().unwrap(), 2);
    assert!(view.selected().is_empty());
    assert_eq!(ids(view.history()), vec![2]);
    assert_eq!(ids(&KvRepository::new(&store).load().unwrap()), vec![2]);
}

#[test]
fn select_all_toggles() {
    let store = seeded();
    let mut view = AdminView::open(KvRepository::new(&store), prices()).unwrap();
    view.toggle_select(2);
    view.toggle_select_all();
    assert_eq!(view.selected(), &[1, 2, 3]);
    view.toggle_select_all();
    assert!(view.selected().is_empty());
    view.toggle_select(2);
    view.toggle_select(2);
    assert!(view.selected().is_empty());
}

#[test]
fn search_matches_name_date_or_total() {
    let store = seeded();
    let view = AdminView::open(KvRepository::new(&store), prices()).unwrap();
    assert_eq!(view.filtered("phòng").len(), 2);
    assert_eq!(view.filtered("KIOT").len(), 1);
    assert_eq!(view.filtered("2/3/2025").len(), 1);
    assert_eq!(view.filtered("2.430").len(), 1);
    assert_eq!(view.filtered("").len(), 3);
    assert!(view.filtered("zzz").is_empty());
}

#[test]
fn edit_recomputes_usage_cost_but_not_total() {
    let store = seeded();
    let mut view = AdminView::open(KvRepository::new(&store), prices()).unwrap();
    let edit = EditInput {
        id: 2,
        room_name: Some("Phòng B2 (mới)".into()),
        elec_usage: Some("60".into()),
        water_usage: Some(" 4 ".into()),
        wifi_fee: Some("120000".into()),
        ..EditInput::default()
    };
    let rec = view.save_edit(&edit).unwrap();
    assert_eq!(rec.room_name, "Phòng B2 (mới)");
    assert_eq!(rec.elec_usage, 60);
    assert_eq!(rec.elec_cost, 210_000);
    assert_eq!(rec.water_cost, 60_000);
    assert_eq!(rec.wifi_fee, 120_000);
    assert_eq!(rec.total, 2_430_000);
    assert_ne!(rec.parts_sum(), Some(rec.total));

    let stored = KvRepository::new(&store).load().unwrap();
    assert_eq!(stored[1], rec);
}

#[test]
fn usage_edit_without_saved_price_costs_zero() {
    let store = seeded();
    let mut view = AdminView::open(KvRepository::new(&store), SavedUnitPrices::default()).unwrap();
    let edit = EditInput {
        id: 1,
        elec_usage: Some("10".into()),
        ..EditInput::default()
    };
    assert_eq!(view.save_edit(&edit).unwrap().elec_cost, 0);
}

#[test]
fn invalid_edit_writes_nothing() {
    let store = seeded();
    let before = store.get(HISTORY_KEY).unwrap();
    let mut view = AdminView::open(KvRepository::new(&store), prices()).unwrap();

    let edit = EditInput {
        id: 1,
        room_name: Some("Renamed".into()),
        room_rent: Some("abc".into()),
        ..EditInput::default()
    };
    let err = view.save_edit(&edit).unwrap_err();
    assert!(matches!(
        err,
        RentError::InvalidEditInput { field: "roomRent", .. }
    ));

    let edit = EditInput {
        id: 1,
        room_name: Some("  ".into()),
        ..EditInput::default()
    };
    assert!(matches!(
        view.save_edit(&edit),
        Err(RentError::InvalidEditInput { field: "roomName", .. })
    ));

    assert_eq!(store.get(HISTORY_KEY).unwrap(), before);
    assert_eq!(view.history()[0].room_name, "Phòng A1");
}

#[test]
fn edit_of_unknown_record_fails() {
    let store = seeded();
    let mut view = AdminView::open(KvRepository::new(&store), prices()).unwrap();
    let edit = EditInput {
        id: 99,
        bike_fee: Some("1".into()),
        ..EditInput::default()
    };
    assert!(matches!(
        view.save_edit(&edit),
        Err(RentError::UnknownRecord(99))
    ));
}
