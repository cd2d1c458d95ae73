//! Plain-text rendering of a game snapshot.
//!
//! Everything a front end needs to redraw is read through the public
//! accessors; these helpers are shared by the headless replay and the TUI.

use super::game::{Game, RoundStatus};
use super::player::Player;

/// Describes whose turn it is or how the round ended.
pub fn render_status(game: &Game) -> String {
    match game.status() {
        RoundStatus::Playable => match game.current_player() {
            Some(player) => format!("{}'s turn ({})", player.name(), player.symbol()),
            None => "Waiting for a player".to_string(),
        },
        RoundStatus::Won => match game.winner() {
            Some(player) => format!("{} wins the round!", player.name()),
            None => "Round won".to_string(),
        },
        RoundStatus::Tied => "It's a tie!".to_string(),
    }
}

/// One line with both players' scores and the tie count.
///
/// The player to move is marked with `>`.
pub fn render_scoreboard(game: &Game) -> String {
    fn entry(player: &Player) -> String {
        let marker = if player.is_current() { ">" } else { " " };
        format!(
            "{}{} ({}): {}",
            marker,
            player.name(),
            player.symbol(),
            player.score()
        )
    }

    format!(
        "{} | {} | Ties: {}",
        entry(game.player1()),
        entry(game.player2()),
        game.tie().score()
    )
}

/// Board, scoreboard and status, with the winning cells upper-cased.
pub fn render_text(game: &Game) -> String {
    let board = game.board();
    let mut out = String::new();
    for (row, cells) in board.rows().iter().enumerate() {
        if row > 0 {
            out.push_str(&vec!["-"; board.size()].join("+"));
            out.push('\n');
        }
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, symbol)| {
                let on_line = game
                    .win_cells()
                    .iter()
                    .any(|c| c.row == row && c.col == col);
                if on_line {
                    symbol.to_uppercase().to_string()
                } else {
                    symbol.to_string()
                }
            })
            .collect();
        out.push_str(&line.join("|"));
        out.push('\n');
    }
    out.push_str(&render_scoreboard(game));
    out.push('\n');
    out.push_str(&render_status(game));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_new_game() {
        let game = Game::new().unwrap();
        assert_eq!(
            render_text(&game),
            "_|_|_\n-+-+-\n_|_|_\n-+-+-\n_|_|_\n\
             >Player 1 (x): 0 |  Player 2 (o): 0 | Ties: 0\n\
             Player 1's turn (x)"
        );
    }

    #[test]
    fn test_render_win_highlights_line() {
        let game = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]
            .into_iter()
            .try_fold(Game::new().unwrap(), |g, (r, c)| g.play_turn(r, c))
            .unwrap();
        let text = render_text(&game);
        assert!(text.starts_with("X|X|X\n"));
        assert!(text.ends_with("Player 1 wins the round!"));
        assert!(text.contains(" Player 1 (x): 1 | >Player 2 (o): 0"));
    }
}
