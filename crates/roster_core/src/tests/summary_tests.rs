use super::*;
use crate::store::{default_seed, RecordStore};
use shared::domain::EmployeeId;

#[test]
fn empty_store_summary_uses_sentinels() {
    let summary = summarize(&[]);
    assert_eq!(summary.count, 0);
    assert_eq!(summary.average_score, 0.0);
    assert_eq!(summary.top_performer, None);
    assert_eq!(summary.top_performer_name(), "N/A");
    assert_eq!(summary.average_display(), "0");
}

#[test]
fn seed_summary_matches_dashboard() {
    let summary = summarize(&default_seed());
    assert_eq!(summary.count, 4);
    assert_eq!(summary.average_score, 79.0);
    assert_eq!(
        summary.top_performer.as_ref().map(|e| e.id),
        Some(EmployeeId(3))
    );
    assert_eq!(summary.top_performer_name(), "Fatou Kamara");
    assert_eq!(summary.average_display(), "79.0");
}

#[test]
fn ties_keep_first_top_performer() {
    let mut store = RecordStore::empty();
    store.create("First", "Dev", 95).expect("create");
    store.create("Second", "Dev", 95).expect("create");
    store.create("Third", "Dev", 10).expect("create");
    assert_eq!(summarize(store.records()).top_performer_name(), "First");
}

#[test]
fn average_rounds_to_one_decimal() {
    let mut store = RecordStore::empty();
    for score in [90, 85, 80] {
        store.create("E", "Dev", score).expect("create");
    }
    store.create("F", "Dev", 86).expect("create");
    // (90 + 85 + 80 + 86) / 4 = 85.25
    assert_eq!(summarize(store.records()).average_score, 85.3);

    let mut store = RecordStore::empty();
    for score in [1, 2, 2] {
        store.create("G", "Dev", score).expect("create");
    }
    assert_eq!(summarize(store.records()).average_display(), "1.7");
}

#[test]
fn stats_carry_card_labels() {
    let stats = summarize(&default_seed()).stats();
    let labels: Vec<_> = stats.iter().map(|s| s.label).collect();
    assert_eq!(labels, ["Total Employees", "Average Score", "Top Performer"]);
    assert_eq!(stats[0].value, "4");
    assert_eq!(stats[2].value, "Fatou Kamara");
}
