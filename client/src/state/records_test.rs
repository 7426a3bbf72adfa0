use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schema::{AttackVector, Scope};

use super::*;

fn record(vector: AttackVector) -> CveModel {
    CveModel { attack_vector: vector, ..CveModel::default() }
}

/// List holding `[A, B, C]` where each record differs by attack vector.
fn abc() -> RecordListState {
    let mut list = RecordListState::default();
    list.apply(RecordListEvent::Seed);
    list.apply(RecordListEvent::Add);
    list.apply(RecordListEvent::Add);
    list.apply(RecordListEvent::Update(0, record(AttackVector::Network)));
    list.apply(RecordListEvent::Update(1, record(AttackVector::AdjacentNetwork)));
    list.apply(RecordListEvent::Update(2, record(AttackVector::Local)));
    list
}

// =============================================================
// Seeding
// =============================================================

#[test]
fn new_list_is_empty_until_seeded() {
    let list = RecordListState::default();
    assert!(list.is_empty());
    assert!(list.batch().is_empty());
}

#[test]
fn seed_synthesizes_one_default_record() {
    let mut list = RecordListState::default();
    assert_eq!(list.apply(RecordListEvent::Seed), Some(vec![CveModel::default()]));
    assert_eq!(list.len(), 1);
}

#[test]
fn seed_is_noop_when_not_empty() {
    let mut list = RecordListState::default();
    list.seed();
    assert_eq!(list.apply(RecordListEvent::Seed), None);
    assert_eq!(list.len(), 1);
}

// =============================================================
// addRecord
// =============================================================

#[test]
fn add_appends_default_record_and_publishes() {
    let mut list = RecordListState::default();
    list.seed();
    list.update_record(0, record(AttackVector::Physical));
    let batch = list.apply(RecordListEvent::Add).unwrap();
    assert_eq!(batch, vec![record(AttackVector::Physical), CveModel::default()]);
}

#[test]
fn add_stops_at_three_records() {
    let mut list = RecordListState::default();
    list.seed();
    assert!(list.add_record());
    assert!(list.add_record());
    assert_eq!(list.len(), 3);
    assert!(!list.can_add());
    assert_eq!(list.apply(RecordListEvent::Add), None);
    assert_eq!(list.len(), MAX_RECORDS);
}

// =============================================================
// removeRecord
// =============================================================

#[test]
fn remove_middle_keeps_order_of_survivors() {
    let mut list = abc();
    let batch = list.apply(RecordListEvent::Remove(1)).unwrap();
    assert_eq!(batch, vec![record(AttackVector::Network), record(AttackVector::Local)]);
    assert_eq!(list.len(), 2);
}

#[test]
fn remove_reindexes_but_keeps_entry_ids() {
    let mut list = abc();
    let last_id = list.entries()[2].id;
    list.remove_record(0);
    assert_eq!(list.position(last_id), Some(1));
    assert_eq!(list.entries()[1].record, record(AttackVector::Local));
}

#[test]
fn remove_last_remaining_record_is_noop() {
    let mut list = RecordListState::default();
    list.seed();
    assert!(!list.can_remove());
    assert_eq!(list.apply(RecordListEvent::Remove(0)), None);
    assert_eq!(list.len(), 1);
}

#[test]
fn remove_out_of_range_is_noop() {
    let mut list = abc();
    assert_eq!(list.apply(RecordListEvent::Remove(3)), None);
    assert_eq!(list.len(), 3);
}

#[test]
fn removed_entry_ids_are_not_reused() {
    let mut list = abc();
    let removed = list.entries()[2].id;
    list.remove_record(2);
    list.add_record();
    assert_ne!(list.entries()[2].id, removed);
    assert_eq!(list.position(removed), None);
}

// =============================================================
// updateRecord
// =============================================================

#[test]
fn update_replaces_record_and_publishes_full_batch() {
    let mut list = abc();
    let changed = CveModel { scope: Scope::Changed, ..CveModel::default() };
    let batch = list.apply(RecordListEvent::Update(2, changed)).unwrap();
    assert_eq!(batch.len(), 3);
    assert_eq!(batch[2], changed);
    assert_eq!(batch[0], record(AttackVector::Network));
}

#[test]
fn update_out_of_range_is_noop() {
    let mut list = RecordListState::default();
    list.seed();
    assert_eq!(list.apply(RecordListEvent::Update(1, CveModel::default())), None);
}

// =============================================================
// Invariants
// =============================================================

#[test]
fn length_stays_in_bounds_for_any_add_remove_sequence() {
    let mut rng = StdRng::seed_from_u64(0x2545_f491);
    let mut list = RecordListState::default();
    list.seed();
    for _ in 0..500 {
        let event = if rng.random_bool(0.5) {
            RecordListEvent::Add
        } else {
            RecordListEvent::Remove(rng.random_range(0..4))
        };
        let before = list.len();
        let published = list.apply(event);
        assert!((MIN_RECORDS..=MAX_RECORDS).contains(&list.len()));
        if let RecordListEvent::Remove(_) = event {
            if published.is_some() {
                assert_eq!(list.len(), before - 1);
            }
        }
        if let Some(batch) = published {
            assert_eq!(batch, list.batch());
        }
    }
}

#[test]
fn affordances_follow_length() {
    let mut list = RecordListState::default();
    list.seed();
    assert!(list.can_add());
    assert!(!list.can_remove());
    list.add_record();
    assert!(list.can_add());
    assert!(list.can_remove());
    list.add_record();
    assert!(!list.can_add());
    assert!(list.can_remove());
}
