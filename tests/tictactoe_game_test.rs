//! Tests for round play, scoring and round transitions.

use strictly_rounds::{Cell, Game, GameConfig, GameError, RoundStatus};

fn play(game: Game, moves: &[(usize, usize)]) -> Game {
    moves
        .iter()
        .try_fold(game, |g, &(row, col)| g.play_turn(row, col))
        .expect("Valid moves")
}

const TIE_MOVES: [(usize, usize); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 1),
    (1, 0),
    (1, 2),
    (2, 1),
    (2, 0),
    (2, 2),
];

#[test]
fn test_new_game_defaults() {
    let game = Game::new().unwrap();
    assert_eq!(game.current_player().map(|p| p.id()), Some(1));
    assert_eq!(game.status(), RoundStatus::Playable);
    assert!(game.can_play());
    assert!(game.win_cells().is_empty());
    assert_eq!(game.tie().score(), 0);
    assert!(game.board().cells().all(|(_, c)| c == '_'));
}

#[test]
fn test_turns_alternate() {
    let game = play(Game::new().unwrap(), &[(1, 1)]);
    assert_eq!(game.board().get_cell(1, 1), Ok('x'));
    assert_eq!(game.current_player().map(|p| p.id()), Some(2));
    assert!(!game.player1().is_current());

    let game = play(game, &[(0, 0)]);
    assert_eq!(game.board().get_cell(0, 0), Ok('o'));
    assert_eq!(game.current_player().map(|p| p.id()), Some(1));
}

#[test]
fn test_first_move_on_every_cell() {
    let fresh = Game::new().unwrap();
    for row in 0..3 {
        for col in 0..3 {
            let game = fresh.play_turn(row, col).unwrap();
            assert_eq!(game.board().get_cell(row, col), Ok('x'), "cell ({row}, {col})");
            assert_eq!(game.board().cells().filter(|&(_, c)| c != '_').count(), 1);
            assert_eq!(game.current_player().map(|p| p.id()), Some(2));
            assert!(!game.player1().is_current());

            let reply = game.play_turn((row + 1) % 3, col).unwrap();
            assert_eq!(reply.board().get_cell((row + 1) % 3, col), Ok('o'));
            assert_eq!(reply.current_player().map(|p| p.id()), Some(1));
        }
    }
}

#[test]
fn test_original_is_unchanged() {
    let game = Game::new().unwrap();
    let next = game.play_turn(2, 2).unwrap();
    assert_eq!(game.board().get_cell(2, 2), Ok('_'));
    assert_ne!(game, next);
}

#[test]
fn test_occupied_cell_is_noop() {
    let game = play(Game::new().unwrap(), &[(1, 1)]);
    let again = game.play_turn(1, 1).unwrap();
    assert_eq!(again, game);
    assert_eq!(again.current_player().map(|p| p.id()), Some(2));
}

#[test]
fn test_row_win() {
    let game = play(Game::new().unwrap(), &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert_eq!(game.status(), RoundStatus::Won);
    assert!(!game.can_play());
    assert_eq!(game.win_cells(), &[Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]);
    assert!(game.board().has_win(0, 2, 'x').unwrap());

    let winner = game.winner().expect("Round has a winner");
    assert_eq!(winner.id(), 1);
    assert_eq!(winner.score(), 1);
    assert_eq!(game.player2().score(), 0);
    assert_eq!(game.current_player().map(|p| p.id()), Some(2));
}

#[test]
fn test_moves_after_win_are_ignored() {
    let game = play(Game::new().unwrap(), &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let after = game.play_turn(2, 2).unwrap();
    assert_eq!(after, game);
    assert_eq!(after.board().get_cell(2, 2), Ok('_'));
}

#[test]
fn test_double_line_win_cells_are_unique() {
    // x completes row 0 and the main diagonal with the corner move
    let game = play(
        Game::new().unwrap(),
        &[(0, 1), (1, 0), (0, 2), (2, 1), (1, 1), (1, 2), (2, 2), (2, 0), (0, 0)],
    );
    assert_eq!(game.status(), RoundStatus::Won);
    assert_eq!(
        game.win_cells(),
        &[
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(1, 1),
            Cell::new(2, 2),
        ]
    );
}

#[test]
fn test_tie() {
    let before_last = play(Game::new().unwrap(), &TIE_MOVES[..8]);
    assert!(before_last.can_play());

    let game = play(before_last, &TIE_MOVES[8..]);
    assert!(game.board().has_tie(2, 2, 'x').unwrap());
    assert_eq!(game.status(), RoundStatus::Tied);
    assert!(game.tie().is_tie());
    assert_eq!(game.tie().score(), 1);
    assert!(game.winner().is_none());
    assert!(game.win_cells().is_empty());
    assert_eq!(game.player1().score(), 0);
    assert_eq!(game.player2().score(), 0);
}

#[test]
fn test_new_round_keeps_scores() {
    let won = play(Game::new().unwrap(), &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let round = won.start_new_round().unwrap();

    assert_eq!(round.status(), RoundStatus::Playable);
    assert!(round.board().cells().all(|(_, c)| c == '_'));
    assert!(round.winner().is_none());
    assert!(round.win_cells().is_empty());
    assert_eq!(round.player1().score(), 1);
    assert_eq!(round.current_player().map(|p| p.id()), Some(2));

    let tied = play(round, &TIE_MOVES).start_new_round().unwrap();
    assert_eq!(tied.tie().score(), 1);
    assert!(!tied.tie().is_tie());
    assert_eq!(tied.player1().score(), 1);
}

#[test]
fn test_loser_opens_next_round() {
    // o wins, so x opens the next round
    let game = play(Game::new().unwrap(), &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
    assert_eq!(game.winner().map(|p| p.id()), Some(2));

    let round = game.start_new_round().unwrap();
    assert_eq!(round.current_player().map(|p| p.id()), Some(1));
}

#[test]
fn test_restart_resets_scores() {
    let game = play(Game::new().unwrap(), &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let restarted = game.restart().unwrap();

    assert_eq!(restarted.player1().score(), 0);
    assert_eq!(restarted.tie().score(), 0);
    assert_eq!(restarted.current_player().map(|p| p.id()), Some(1));
    assert_eq!(restarted.status(), RoundStatus::Playable);
}

#[test]
fn test_out_of_range() {
    let game = Game::new().unwrap();
    assert!(matches!(game.play_turn(3, 0), Err(GameError::Index(_))));
    assert!(matches!(game.play_turn(0, 7), Err(GameError::Index(_))));
}

#[test]
fn test_configured_game() {
    let config = GameConfig::from_toml(
        "player1_name = \"Ada\"\nplayer1_symbol = \"A\"\nplayer2_symbol = \"G\"\nfiller = \".\"",
    )
    .unwrap();
    let game = play(config.new_game().unwrap(), &[(0, 0), (0, 1)]);

    assert_eq!(game.board().get_cell(0, 0), Ok('A'));
    assert_eq!(game.board().get_cell(0, 1), Ok('G'));
    assert_eq!(game.board().get_cell(2, 2), Ok('.'));
    assert_eq!(game.player1().name(), "Ada");
}
