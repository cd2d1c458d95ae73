//! Round state invariant: a round is playable, won or tied, never a mix.

use super::super::Game;
use super::Invariant;

/// Invariant: the round flags agree with each other.
///
/// - Exactly one player is current, whether or not the round is over.
/// - A playable round has no winner, no tie flag and no win cells.
/// - A finished round has either exactly one winner or the tie flag, not both.
/// - Win cells are present exactly when a winner is, and each holds the
///   winner's symbol.
pub struct RoundStateInvariant;

impl Invariant for RoundStateInvariant {
    fn holds(game: &Game) -> bool {
        let players = [game.player1(), game.player2()];
        let current = players.iter().filter(|p| p.is_current()).count();
        let winners: Vec<_> = players.iter().filter(|p| p.is_winner()).collect();
        let is_tie = game.tie().is_tie();
        let win_cells = game.win_cells();

        if current != 1 || winners.len() > 1 {
            return false;
        }

        let flags_agree = if game.can_play() {
            winners.is_empty() && !is_tie
        } else {
            winners.len() + usize::from(is_tie) == 1
        };
        if !flags_agree {
            return false;
        }

        match winners.first() {
            Some(winner) => {
                !win_cells.is_empty()
                    && win_cells.iter().all(|cell| {
                        game.board().get_cell(cell.row, cell.col) == Ok(winner.symbol())
                    })
            }
            None => win_cells.is_empty(),
        }
    }

    fn description() -> &'static str {
        "Round is exactly one of playable, won or tied, with matching win cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell;

    #[test]
    fn test_new_game_holds() {
        assert!(RoundStateInvariant::holds(&Game::new().unwrap()));
    }

    #[test]
    fn test_two_current_players_violate() {
        let mut game = Game::new().unwrap();
        game.player2 = game.player2.set_is_current(true).unwrap();
        assert!(!RoundStateInvariant::holds(&game));
    }

    #[test]
    fn test_finished_round_without_current_player_violates() {
        let mut game = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]
            .into_iter()
            .try_fold(Game::new().unwrap(), |g, (r, c)| g.play_turn(r, c))
            .unwrap();
        assert!(RoundStateInvariant::holds(&game));

        game.player2 = game.player2.set_is_next().unwrap();
        assert!(!RoundStateInvariant::holds(&game));
    }

    #[test]
    fn test_finished_without_outcome_violates() {
        let mut game = Game::new().unwrap();
        game.can_play = false;
        assert!(!RoundStateInvariant::holds(&game));
    }

    #[test]
    fn test_stray_win_cells_violate() {
        let mut game = Game::new().unwrap();
        game.win_cells = vec![Cell::new(0, 0)];
        assert!(!RoundStateInvariant::holds(&game));
    }
}
