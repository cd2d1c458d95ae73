//! Roster invariant: two distinct players in fixed seats.

use super::super::Game;
use super::Invariant;

/// Invariant: player 1 has id 1, player 2 has id 2, and their symbols differ
/// from each other and from the board filler.
pub struct RosterInvariant;

impl Invariant for RosterInvariant {
    fn holds(game: &Game) -> bool {
        let (p1, p2) = (game.player1(), game.player2());
        let filler = game.board().filler();

        p1.id() == 1
            && p2.id() == 2
            && p1.symbol() != p2.symbol()
            && p1.symbol() != filler
            && p2.symbol() != filler
    }

    fn description() -> &'static str {
        "Players occupy seats 1 and 2 with distinct symbols that differ from the filler"
    }
}
