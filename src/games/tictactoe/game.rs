//! Immutable game engine for tic-tac-toe.
//!
//! A [`Game`] is never modified by a transition. [`Game::play_turn`],
//! [`Game::start_new_round`] and [`Game::restart`] each build a new game from
//! copied parts, re-check every invariant, notify the observers carried over
//! from the previous game, and return the new value.

use super::board::{BOARD_SIZE, Board, DEFAULT_FILLER};
use super::error::{GameError, ValidationError};
use super::invariants::{GameInvariants, InvariantSet};
use super::observer::{ObserverList, SharedObserver};
use super::player::Player;
use super::tie::Tie;
use super::types::Cell;
use serde::Serialize;
use tracing::{debug, info, instrument, trace};

/// Name given to player 1 when none is supplied.
pub const DEFAULT_PLAYER1_NAME: &str = "Player 1";
/// Name given to player 2 when none is supplied.
pub const DEFAULT_PLAYER2_NAME: &str = "Player 2";
/// Symbol of player 1 when none is supplied.
pub const DEFAULT_PLAYER1_SYMBOL: char = 'x';
/// Symbol of player 2 when none is supplied.
pub const DEFAULT_PLAYER2_SYMBOL: char = 'o';

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum RoundStatus {
    /// Moves are accepted.
    Playable,
    /// A player completed a line.
    Won,
    /// The board filled without a winner.
    Tied,
}

/// Complete game state: board, both players, tie count and round flags.
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    pub(super) board: Board,
    pub(super) player1: Player,
    pub(super) player2: Player,
    pub(super) tie: Tie,
    pub(super) can_play: bool,
    pub(super) win_cells: Vec<Cell>,
    #[serde(skip)]
    observers: ObserverList,
}

impl Game {
    /// Creates a game with default names, symbols and filler.
    #[instrument]
    pub fn new() -> Result<Self, ValidationError> {
        Self::with_names(DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_NAME)
    }

    /// Creates a game for two named players with default symbols.
    #[instrument]
    pub fn with_names(player1: &str, player2: &str) -> Result<Self, ValidationError> {
        Self::with_players(
            Player::new(1, player1, DEFAULT_PLAYER1_SYMBOL)?,
            Player::new(2, player2, DEFAULT_PLAYER2_SYMBOL)?,
            Board::new(BOARD_SIZE, DEFAULT_FILLER)?,
        )
    }

    /// Starts a session for two players on `board`; player 1 moves first.
    #[instrument(skip_all, fields(player1 = %player1.name(), player2 = %player2.name()))]
    pub fn with_players(
        player1: Player,
        player2: Player,
        board: Board,
    ) -> Result<Self, ValidationError> {
        let player1 = player1.set_is_current(true)?;
        let player2 = player2.set_is_next()?;
        let game = Self::from_parts(board, player1, player2, Tie::new(), true, Vec::new())?;
        info!("New game started");
        Ok(game)
    }

    /// Rebuilds a game from prior state, validating every part.
    #[instrument(skip_all)]
    pub fn from_parts(
        board: Board,
        player1: Player,
        player2: Player,
        tie: Tie,
        can_play: bool,
        win_cells: Vec<Cell>,
    ) -> Result<Self, ValidationError> {
        Self {
            board,
            player1,
            player2,
            tie,
            can_play,
            win_cells,
            observers: ObserverList::new(),
        }
        .validated()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns player 1.
    pub fn player1(&self) -> &Player {
        &self.player1
    }

    /// Returns player 2.
    pub fn player2(&self) -> &Player {
        &self.player2
    }

    /// Returns the player whose turn it is, if any.
    pub fn current_player(&self) -> Option<&Player> {
        [&self.player1, &self.player2]
            .into_iter()
            .find(|p| p.is_current())
    }

    /// Returns the winner of the current round, if any.
    pub fn winner(&self) -> Option<&Player> {
        [&self.player1, &self.player2]
            .into_iter()
            .find(|p| p.is_winner())
    }

    /// Returns the tie counter.
    pub fn tie(&self) -> &Tie {
        &self.tie
    }

    /// Returns true while the current round accepts moves.
    pub fn can_play(&self) -> bool {
        self.can_play
    }

    /// Returns the cells of the winning line, empty when no win is active.
    pub fn win_cells(&self) -> &[Cell] {
        &self.win_cells
    }

    /// Returns where the current round stands.
    pub fn status(&self) -> RoundStatus {
        if self.can_play {
            RoundStatus::Playable
        } else if self.tie.is_tie() {
            RoundStatus::Tied
        } else {
            RoundStatus::Won
        }
    }

    /// Subscribes `observer` to every later transition of this game and its
    /// successors.
    pub fn add_observer(&mut self, observer: SharedObserver) {
        self.observers.add(observer);
        debug!(observers = self.observers.len(), "Observer added");
    }

    /// Unsubscribes every registration of `observer`.
    ///
    /// Returns false if the handle was not subscribed.
    pub fn remove_observer(&mut self, observer: &SharedObserver) -> bool {
        let removed = self.observers.remove(observer);
        debug!(removed, observers = self.observers.len(), "Observer removed");
        removed
    }

    /// Returns the number of observer registrations.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Returns a copy of this game with no observers attached.
    ///
    /// Observers that keep the latest state store a snapshot so the game does
    /// not end up holding itself.
    pub fn snapshot(&self) -> Self {
        Self {
            observers: ObserverList::new(),
            ..self.clone()
        }
    }

    /// Places the current player's symbol at `(row, col)`.
    ///
    /// Playing an occupied cell or playing after the round ended returns an
    /// equal game and notifies nobody.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Index`] if `row` or `col` is off the board.
    #[instrument(skip(self), fields(status = %self.status()))]
    pub fn play_turn(&self, row: usize, col: usize) -> Result<Self, GameError> {
        let cell = self.board.check_index(row, col)?;
        if !self.can_play || !self.board.is_empty(row, col)? {
            debug!(%cell, "Move ignored");
            return Ok(self.clone());
        }

        let mover = self
            .current_player()
            .ok_or_else(|| ValidationError::new("Playable round has no current player"))?;
        let (mover_id, symbol) = (mover.id(), mover.symbol());

        let board = self.board.set_cell(row, col, symbol)?;
        let won = board.has_win(row, col, symbol)?;
        let tied = board.has_tie(row, col, symbol)?;
        let win_cells = if won {
            board.get_win_cells(row, col, symbol)?
        } else {
            Vec::new()
        };

        // The mover waits and the opponent takes the turn, round over or not.
        let advance = |player: &Player| -> Result<Player, ValidationError> {
            if player.id() == mover_id {
                let waiting = player.set_is_next()?;
                if won {
                    waiting.increment_score()?.set_is_winner(true)
                } else {
                    Ok(waiting)
                }
            } else {
                player.set_is_current(true)
            }
        };
        let player1 = advance(&self.player1)?;
        let player2 = advance(&self.player2)?;

        let tie = if tied {
            self.tie.increment_score()?.set_is_tie(true)?
        } else {
            self.tie
        };

        let next = self.succeed(board, player1, player2, tie, !(won || tied), win_cells)?;
        debug!(%cell, player = mover_id, %symbol, "Move played");
        match next.status() {
            RoundStatus::Won => info!(winner = mover_id, cells = ?next.win_cells, "Round won"),
            RoundStatus::Tied => info!(ties = next.tie.score(), "Round tied"),
            RoundStatus::Playable => {}
        }

        self.notify(&next);
        Ok(next)
    }

    /// Clears the board and round flags for another round.
    ///
    /// Scores and the current player are carried over, so the player who did
    /// not make the last move opens the new round.
    #[instrument(skip(self), fields(status = %self.status()))]
    pub fn start_new_round(&self) -> Result<Self, ValidationError> {
        let next = self.succeed(
            self.board.reset_board()?,
            self.player1.reset_is_winner()?,
            self.player2.reset_is_winner()?,
            self.tie.reset_is_tie()?,
            true,
            Vec::new(),
        )?;
        info!(
            starts = ?next.current_player().map(Player::id),
            "New round started"
        );

        self.notify(&next);
        Ok(next)
    }

    /// Starts the session over with the same players: scores and ties reset
    /// and player 1 moves first.
    #[instrument(skip(self))]
    pub fn restart(&self) -> Result<Self, ValidationError> {
        let next = self.succeed(
            self.board.reset_board()?,
            self.player1.reset_score()?.set_is_current(true)?,
            self.player2.reset_score()?.set_is_next()?,
            self.tie.reset_tie()?,
            true,
            Vec::new(),
        )?;
        info!("Game restarted");

        self.notify(&next);
        Ok(next)
    }

    fn notify(&self, next: &Game) {
        if self.observers.is_empty() {
            trace!("No observers subscribed");
            return;
        }
        self.observers.notify(next);
    }

    /// Builds the successor of this game, carrying the observers forward.
    fn succeed(
        &self,
        board: Board,
        player1: Player,
        player2: Player,
        tie: Tie,
        can_play: bool,
        win_cells: Vec<Cell>,
    ) -> Result<Self, ValidationError> {
        Self {
            board,
            player1,
            player2,
            tie,
            can_play,
            win_cells,
            observers: self.observers.clone(),
        }
        .validated()
    }

    fn validated(self) -> Result<Self, ValidationError> {
        GameInvariants::check_all(&self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ValidationError::new(format!("Invalid game state: {}", descriptions))
        })?;
        Ok(self)
    }
}

/// Equality covers the game state only; observers are ignored.
impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.player1 == other.player1
            && self.player2 == other.player2
            && self.tie == other.tie
            && self.can_play == other.can_play
            && self.win_cells == other.win_cells
    }
}

impl Eq for Game {}
