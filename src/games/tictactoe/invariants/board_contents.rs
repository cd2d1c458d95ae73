//! Board contents invariant: only known symbols on the board.

use super::super::Game;
use super::Invariant;

/// Invariant: every cell holds the filler or one of the two player symbols.
pub struct BoardContentsInvariant;

impl Invariant for BoardContentsInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let allowed = [
            board.filler(),
            game.player1().symbol(),
            game.player2().symbol(),
        ];
        board.cells().all(|(_, symbol)| allowed.contains(&symbol))
    }

    fn description() -> &'static str {
        "Every cell holds the filler or a player symbol"
    }
}
