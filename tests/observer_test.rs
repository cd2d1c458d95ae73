//! Tests for observer notification.

use std::sync::{Arc, Mutex};
use strictly_rounds::{Game, RoundStatus, SharedObserver, shared};

fn recorder(log: &Arc<Mutex<Vec<String>>>, tag: &'static str) -> SharedObserver {
    let log = Arc::clone(log);
    shared(move |g: &Game| {
        let board = g.board().to_string();
        log.lock().unwrap().push(format!("{}:{}", tag, board));
    })
}

#[test]
fn test_notified_in_subscription_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut game = Game::new().unwrap();
    game.add_observer(recorder(&log, "a"));
    game.add_observer(recorder(&log, "b"));

    let next = game.play_turn(0, 0).unwrap();
    let entries = log.lock().unwrap().clone();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].starts_with("a:"));
    assert!(entries[1].starts_with("b:"));
    assert!(entries[0].ends_with(&next.board().to_string()));
}

#[test]
fn test_observers_carry_to_successors() {
    let count = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&count);
    let mut game = Game::new().unwrap();
    game.add_observer(shared(move |_: &Game| *counter.lock().unwrap() += 1));

    let game = game.play_turn(0, 0).unwrap().play_turn(1, 1).unwrap();
    assert_eq!(game.observer_count(), 1);
    assert_eq!(*count.lock().unwrap(), 2);

    let _ = game.start_new_round().unwrap().restart().unwrap();
    assert_eq!(*count.lock().unwrap(), 4);
}

#[test]
fn test_noop_move_does_not_notify() {
    let count = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&count);
    let mut game = Game::new().unwrap();
    game.add_observer(shared(move |_: &Game| *counter.lock().unwrap() += 1));

    let game = game.play_turn(1, 1).unwrap();
    let _ = game.play_turn(1, 1).unwrap();
    assert_eq!(*count.lock().unwrap(), 1);

    assert!(game.play_turn(5, 5).is_err());
    assert_eq!(*count.lock().unwrap(), 1);
}

#[test]
fn test_remove_observer() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let a = recorder(&log, "a");
    let b = recorder(&log, "b");

    let mut game = Game::new().unwrap();
    game.add_observer(a.clone());
    game.add_observer(b);
    assert!(game.remove_observer(&a));
    assert!(!game.remove_observer(&a));
    assert_eq!(game.observer_count(), 1);

    let _ = game.play_turn(0, 0).unwrap();
    let entries = log.lock().unwrap().clone();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with("b:"));
}

#[test]
fn test_removal_does_not_affect_earlier_games() {
    let count = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&count);
    let observer = shared(move |_: &Game| *counter.lock().unwrap() += 1);

    let mut first = Game::new().unwrap();
    first.add_observer(observer.clone());
    let mut second = first.play_turn(0, 0).unwrap();
    second.remove_observer(&observer);

    let _ = second.play_turn(1, 1).unwrap();
    let _ = first.play_turn(2, 2).unwrap();
    assert_eq!(*count.lock().unwrap(), 2);
}

#[test]
fn test_observer_sees_final_state() {
    let seen = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&seen);
    let mut game = Game::new().unwrap();
    game.add_observer(shared(move |g: &Game| {
        *sink.lock().unwrap() = Some(g.status());
    }));

    let _ = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]
        .iter()
        .try_fold(game, |g, &(r, c)| g.play_turn(r, c))
        .unwrap();
    assert_eq!(*seen.lock().unwrap(), Some(RoundStatus::Won));
}
