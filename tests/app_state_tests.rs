use chrono::NaiveDate;
use std::cell::RefCell;
use std::rc::Rc;
use zenplan::core::edit::{Commit, EditSession};
use zenplan::core::layout::LayoutConfig;
use zenplan::core::state::{AppData, AppState, Change};
use zenplan::errors::AppError;
use zenplan::models::event::CalendarEvent;
use zenplan::models::task::TaskCategory;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

/// State with a listener recording every change it is told about.
fn recorded_state() -> (AppState, Rc<RefCell<Vec<Change>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut state = AppState::new(AppData::default(), day());
    let sink = Rc::clone(&seen);
    state.subscribe(move |change, _| {
        sink.borrow_mut().push(change);
        Ok(())
    });
    (state, seen)
}

#[test]
fn committed_session_notifies_and_stores() {
    let (mut state, seen) = recorded_state();

    let mut s = EditSession::new();
    s.begin_create_at_slot(10).unwrap();
    s.set_title("Write report");
    let commit = state.commit_session(&mut s).unwrap();

    assert!(matches!(commit, Commit::Create(_)));
    assert_eq!(state.events().len(), 1);
    assert_eq!(state.day_events(day()).len(), 1);
    assert_eq!(*seen.borrow(), [Change::Events]);
}

#[test]
fn rejected_session_notifies_nobody() {
    let (mut state, seen) = recorded_state();

    let mut s = EditSession::new();
    s.begin_create();
    s.set_title(" ");
    assert_eq!(state.commit_session(&mut s).unwrap(), Commit::Rejected);

    assert!(state.events().is_empty());
    assert!(seen.borrow().is_empty());
}

#[test]
fn commits_land_on_the_selected_date() {
    let (mut state, _) = recorded_state();
    let other = day().succ_opt().unwrap();
    state.select_date(other).unwrap();

    let mut s = EditSession::new();
    s.begin_create();
    s.set_title("tomorrow");
    state.commit_session(&mut s).unwrap();

    assert!(state.day_events(day()).is_empty());
    assert_eq!(state.day_events(other).len(), 1);
}

#[test]
fn selecting_the_same_date_is_silent() {
    let (mut state, seen) = recorded_state();
    state.select_date(day()).unwrap();
    assert!(seen.borrow().is_empty());

    state.select_date(day().succ_opt().unwrap()).unwrap();
    assert_eq!(*seen.borrow(), [Change::SelectedDate]);
}

#[test]
fn day_layout_places_stored_events() {
    let (mut state, _) = recorded_state();
    state
        .add_event(CalendarEvent::new("a", "a", day(), 9.0, 10.5))
        .unwrap();

    let rows = state.day_layout(day(), &LayoutConfig::default());
    let nine = rows.iter().find(|r| r.hour == 9).unwrap();
    assert_eq!(nine.blocks[0].layout.height, 120.0);
}

#[test]
fn update_and_remove_of_unknown_ids_are_no_ops() {
    let (mut state, _) = recorded_state();
    state
        .add_event(CalendarEvent::new("a", "a", day(), 9.0, 10.0))
        .unwrap();
    let before = state.events().clone();

    state
        .update_event(CalendarEvent::new("ghost", "g", day(), 1.0, 2.0))
        .unwrap();
    state.remove_event("ghost").unwrap();

    assert_eq!(*state.events(), before);
}

#[test]
fn tasks_are_prepended_and_toggled() {
    let (mut state, seen) = recorded_state();
    state.add_task("first", TaskCategory::Work).unwrap();
    let second = state.add_task("second", TaskCategory::Health).unwrap();

    assert_eq!(state.tasks()[0].title, "second");
    assert!(state.toggle_task(&second.id).unwrap());
    assert!(state.tasks()[0].completed);
    assert!(!state.toggle_task("missing").unwrap());

    let progress = state.completion();
    assert_eq!((progress.completed, progress.total), (1, 2));
    assert_eq!(progress.percent, 50.0);
    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn habit_streak_follows_toggles() {
    let (mut state, _) = recorded_state();
    let habit = state.add_habit("Read", "#16a34a").unwrap();

    state.toggle_habit(&habit.id).unwrap();
    assert_eq!(state.habits()[0].streak, 1);
    assert!(state.habits()[0].completed_today);

    state.toggle_habit(&habit.id).unwrap();
    assert_eq!(state.habits()[0].streak, 0);

    assert!(state.remove_habit(&habit.id).unwrap());
    assert!(!state.remove_habit(&habit.id).unwrap());
    assert!(state.habits().is_empty());
}

#[test]
fn clear_all_empties_everything() {
    let (mut state, seen) = recorded_state();
    state.add_task("t", TaskCategory::Personal).unwrap();
    state.add_habit("h", "#0d9488").unwrap();
    state
        .add_event(CalendarEvent::new("a", "a", day(), 9.0, 10.0))
        .unwrap();

    state.clear_all().unwrap();

    assert_eq!(*state.data(), AppData::default());
    assert_eq!(seen.borrow().last(), Some(&Change::Cleared));
}

#[test]
fn every_listener_runs_and_the_first_error_wins() {
    let mut state = AppState::new(AppData::default(), day());
    let calls = Rc::new(RefCell::new(0));

    state.subscribe(|_, _| Err(AppError::Other("first".into())));
    state.subscribe(|_, _| Err(AppError::Other("second".into())));
    let counter = Rc::clone(&calls);
    state.subscribe(move |_, _| {
        *counter.borrow_mut() += 1;
        Ok(())
    });

    let err = state.add_task("t", TaskCategory::Work).unwrap_err();
    assert!(matches!(err, AppError::Other(m) if m == "first"));
    assert_eq!(*calls.borrow(), 1);
    // the mutation itself is kept
    assert_eq!(state.tasks().len(), 1);
}

#[test]
fn unsubscribed_listeners_stop_hearing() {
    let mut state = AppState::new(AppData::default(), day());
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let id = state.subscribe(move |_, _| {
        *counter.borrow_mut() += 1;
        Ok(())
    });

    state.add_task("a", TaskCategory::Work).unwrap();
    assert!(state.unsubscribe(id));
    state.add_task("b", TaskCategory::Work).unwrap();

    assert_eq!(*calls.borrow(), 1);
    assert!(!state.unsubscribe(id));
}
