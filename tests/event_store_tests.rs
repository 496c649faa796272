use chrono::NaiveDate;
use zenplan::core::store::EventStore;
use zenplan::errors::AppError;
use zenplan::models::event::CalendarEvent;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn ev(id: &str, start: f64, end: f64) -> CalendarEvent {
    CalendarEvent::new(id, format!("block {id}"), day(), start, end)
}

fn ids(store: &EventStore) -> Vec<&str> {
    store.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn add_keeps_events_sorted_by_start() {
    let store = EventStore::new()
        .add(ev("b", 14.0, 15.0))
        .add(ev("a", 9.0, 10.0))
        .add(ev("c", 11.5, 12.0));

    assert_eq!(ids(&store), ["a", "c", "b"]);
}

#[test]
fn equal_starts_keep_insertion_order() {
    let store = EventStore::new()
        .add(ev("first", 9.0, 10.0))
        .add(ev("second", 9.0, 9.5))
        .add(ev("early", 8.0, 9.0))
        .add(ev("third", 9.0, 11.0));

    assert_eq!(ids(&store), ["early", "first", "second", "third"]);
}

#[test]
fn sort_is_global_across_dates() {
    let tomorrow = day().succ_opt().unwrap();
    let store = EventStore::new()
        .add(ev("today-late", 18.0, 19.0))
        .add(CalendarEvent::new("tomorrow-early", "x", tomorrow, 7.0, 8.0));

    assert_eq!(ids(&store), ["tomorrow-early", "today-late"]);
}

#[test]
fn update_replaces_and_resorts() {
    let store = EventStore::new()
        .add(ev("a", 9.0, 10.0))
        .add(ev("b", 10.0, 11.0));

    let mut moved = store.get("a").cloned().unwrap();
    moved.start_hour = 12.0;
    moved.end_hour = 13.0;
    moved.title = "moved".into();
    let store = store.update(moved);

    assert_eq!(ids(&store), ["b", "a"]);
    assert_eq!(store.get("a").unwrap().title, "moved");
    assert_eq!(store.len(), 2);
}

#[test]
fn update_of_unknown_id_changes_nothing() {
    let store = EventStore::new().add(ev("a", 9.0, 10.0));
    let before = store.clone();

    let store = store.update(ev("ghost", 1.0, 2.0));

    assert_eq!(store, before);
}

#[test]
fn remove_drops_the_event() {
    let store = EventStore::new()
        .add(ev("a", 9.0, 10.0))
        .add(ev("b", 10.0, 11.0))
        .remove("a");

    assert_eq!(ids(&store), ["b"]);
}

#[test]
fn remove_of_unknown_id_changes_nothing() {
    let store = EventStore::new().add(ev("a", 9.0, 10.0));
    let before = store.clone();

    assert_eq!(store.remove("nope"), before);
}

#[test]
fn from_events_restores_order() {
    let store = EventStore::from_events(vec![ev("late", 20.0, 21.0), ev("early", 6.0, 7.0)]);
    assert_eq!(ids(&store), ["early", "late"]);
}

#[test]
fn inverted_ranges_are_stored_as_given() {
    let store = EventStore::new().add(ev("odd", 15.0, 14.0));
    let e = store.get("odd").unwrap();
    assert_eq!((e.start_hour, e.end_hour), (15.0, 14.0));
}

#[test]
fn resolve_prefix_finds_unique_match() {
    let store = EventStore::new()
        .add(ev("abc123", 9.0, 10.0))
        .add(ev("abd456", 10.0, 11.0));

    assert_eq!(store.resolve_prefix("abc").unwrap().id, "abc123");
    assert_eq!(store.resolve_prefix("abd456").unwrap().id, "abd456");
}

#[test]
fn update_replaces_every_copy_of_a_duplicated_id() {
    let mut first = ev("dup", 9.0, 10.0);
    first.title = "a".into();
    let mut second = ev("dup", 13.0, 14.0);
    second.title = "b".into();
    let store = EventStore::from_events(vec![first, second]);

    let mut replacement = ev("dup", 11.0, 12.0);
    replacement.title = "new".into();
    let store = store.update(replacement);

    assert_eq!(store.len(), 2);
    assert!(store.iter().all(|e| e.title == "new" && e.start_hour == 11.0));
}

#[test]
fn resolve_prefix_reports_ambiguity_and_absence() {
    let store = EventStore::new()
        .add(ev("abc123", 9.0, 10.0))
        .add(ev("abd456", 10.0, 11.0));

    assert!(matches!(store.resolve_prefix("ab"), Err(AppError::AmbiguousId(_))));
    assert!(matches!(store.resolve_prefix("zz"), Err(AppError::EventNotFound(_))));
}

#[test]
fn serializes_with_camel_case_keys() {
    let store = EventStore::new().add(ev("a", 9.5, 10.0));
    let json = serde_json::to_value(&store).unwrap();

    let first = &json[0];
    assert_eq!(first["id"], "a");
    assert_eq!(first["date"], "2026-10-16");
    assert_eq!(first["startHour"], 9.5);
    assert_eq!(first["endHour"], 10.0);
    assert_eq!(first["category"], "work");
}
