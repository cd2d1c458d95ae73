//! Application state and logic.

use std::sync::{Arc, Mutex, PoisonError};

use crossterm::event::KeyCode;
use strictly_rounds::{Cell, Game, Intent, Observer, SharedObserver};
use tracing::{debug, info, warn};

use super::input::{KeyAction, key_action};

/// Keeps the most recent state the engine reported.
#[derive(Debug, Default)]
pub struct LatestSnapshot {
    game: Mutex<Option<Game>>,
}

impl LatestSnapshot {
    /// Takes the stored snapshot, leaving nothing behind.
    pub fn take(&self) -> Option<Game> {
        self.game
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl Observer for LatestSnapshot {
    fn update(&self, game: &Game) {
        *self.game.lock().unwrap_or_else(PoisonError::into_inner) = Some(game.snapshot());
    }
}

/// Main application state.
pub struct App {
    game: Game,
    view: Arc<LatestSnapshot>,
    displayed: Game,
    cursor: Cell,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the app and subscribes it to the game.
    pub fn new(mut game: Game) -> Self {
        let view = Arc::new(LatestSnapshot::default());
        let observer: SharedObserver = view.clone();
        game.add_observer(observer);
        let displayed = game.snapshot();

        Self {
            game,
            view,
            displayed,
            cursor: Cell::new(1, 1),
            message: None,
            should_quit: false,
        }
    }

    /// The state shown on screen, as last reported by the engine.
    pub fn displayed(&self) -> &Game {
        &self.displayed
    }

    /// Cursor position.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Feedback from the last rejected command, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let size = self.game.board().size();
        match key_action(key, self.cursor, size) {
            Some(KeyAction::Cursor(cell)) => self.cursor = cell,
            Some(KeyAction::Intent(intent)) => self.apply(intent),
            Some(KeyAction::Quit) => {
                info!("Quit requested");
                self.should_quit = true;
            }
            None => debug!(?key, "Ignoring key"),
        }
    }

    fn apply(&mut self, intent: Intent) {
        if let Intent::Play { row, col } = intent {
            self.cursor = Cell::new(row, col);
        }

        match self.game.apply(intent) {
            Ok(next) => {
                self.game = next;
                self.message = None;
            }
            Err(e) => {
                warn!(%intent, error = %e, "Command rejected");
                self.message = Some(e.to_string());
            }
        }

        if let Some(latest) = self.view.take() {
            self.displayed = latest;
        }
    }
}
