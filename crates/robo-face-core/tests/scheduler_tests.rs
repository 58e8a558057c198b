//! Deadline-keyed scheduler.

use embassy_time::{Duration, Instant};
use robo_face_core::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    A,
    B,
    C,
}

fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

#[test]
fn nothing_is_due_before_its_deadline() {
    let mut scheduler: Scheduler<Key, 2> = Scheduler::new();
    scheduler.schedule(Key::A, at(100)).unwrap();

    assert_eq!(scheduler.pop_due(at(99)), None);
    assert_eq!(scheduler.pop_due(at(100)), Some(Key::A));
    assert!(scheduler.is_empty());
}

#[test]
fn earliest_deadline_fires_first() {
    let mut scheduler: Scheduler<Key, 3> = Scheduler::new();
    scheduler.schedule(Key::A, at(300)).unwrap();
    scheduler.schedule(Key::B, at(100)).unwrap();
    scheduler.schedule(Key::C, at(200)).unwrap();

    let now = at(1_000);
    assert_eq!(scheduler.pop_due(now), Some(Key::B));
    assert_eq!(scheduler.pop_due(now), Some(Key::C));
    assert_eq!(scheduler.pop_due(now), Some(Key::A));
    assert_eq!(scheduler.pop_due(now), None);
}

#[test]
fn rescheduling_replaces_the_deadline() {
    let mut scheduler: Scheduler<Key, 2> = Scheduler::new();
    scheduler.schedule(Key::A, at(100)).unwrap();
    scheduler.schedule(Key::A, at(500)).unwrap();

    assert_eq!(scheduler.len(), 1);
    assert_eq!(scheduler.deadline(Key::A), Some(at(500)));
    assert_eq!(scheduler.pop_due(at(100)), None);
}

#[test]
fn full_scheduler_hands_the_key_back() {
    let mut scheduler: Scheduler<Key, 2> = Scheduler::new();
    scheduler.schedule(Key::A, at(1)).unwrap();
    scheduler.schedule(Key::B, at(2)).unwrap();

    assert_eq!(scheduler.schedule(Key::C, at(3)), Err(Key::C));
    // an existing key still fits
    assert_eq!(scheduler.schedule(Key::B, at(4)), Ok(()));
}

#[test]
fn cancel_reports_whether_anything_was_removed() {
    let mut scheduler: Scheduler<Key, 2> = Scheduler::new();
    scheduler.schedule(Key::A, at(1)).unwrap();

    assert!(scheduler.cancel(Key::A));
    assert!(!scheduler.cancel(Key::A));
    assert_eq!(scheduler.deadline(Key::A), None);
}

#[test]
fn deadlines_use_instant_arithmetic() {
    let mut scheduler: Scheduler<Key, 1> = Scheduler::default();
    let start = at(42);
    scheduler
        .schedule(Key::A, start + Duration::from_millis(500))
        .unwrap();

    assert_eq!(scheduler.pop_due(at(541)), None);
    assert_eq!(scheduler.pop_due(at(542)), Some(Key::A));
}
