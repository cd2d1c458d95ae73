//! Observers notified of every game transition.

use super::game::Game;
use std::sync::Arc;
use tracing::{instrument, trace};

/// Receives each new game produced by a transition.
///
/// Closures taking `&Game` implement this trait, so either a function or a
/// type with an `update` method can subscribe.
pub trait Observer: Send + Sync {
    /// Called synchronously with the new game, before the transition returns.
    fn update(&self, game: &Game);
}

impl<F> Observer for F
where
    F: Fn(&Game) + Send + Sync,
{
    fn update(&self, game: &Game) {
        self(game)
    }
}

/// Shared handle to a subscribed observer.
///
/// Removal compares handles by identity, so keep a clone of the handle you
/// subscribed with.
pub type SharedObserver = Arc<dyn Observer>;

/// Wraps an observer in a [`SharedObserver`] handle.
pub fn shared(observer: impl Observer + 'static) -> SharedObserver {
    Arc::new(observer)
}

/// Ordered list of observers owned by one game.
#[derive(Clone, Default)]
pub struct ObserverList {
    observers: Vec<SharedObserver>,
}

impl ObserverList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an observer; the same handle may be added more than once.
    pub fn add(&mut self, observer: SharedObserver) {
        self.observers.push(observer);
    }

    /// Removes every registration of `observer`, returning true if any existed.
    pub fn remove(&mut self, observer: &SharedObserver) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| !same_observer(o, observer));
        self.observers.len() != before
    }

    /// Returns the number of registrations.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns true if nothing is subscribed.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Calls every observer with `game`, in subscription order.
    #[instrument(skip_all, fields(observers = self.observers.len()))]
    pub fn notify(&self, game: &Game) {
        for (index, observer) in self.observers.iter().enumerate() {
            trace!(index, "Notifying observer");
            observer.update(game);
        }
    }
}

impl std::fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("len", &self.observers.len())
            .finish()
    }
}

/// Identity comparison on the data pointer, ignoring vtables.
fn same_observer(a: &SharedObserver, b: &SharedObserver) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}
