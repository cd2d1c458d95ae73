//! Keyboard input mapping.

use crossterm::event::KeyCode;
use strictly_rounds::{Cell, Intent};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the cursor to a cell.
    Cursor(Cell),
    /// Forward a command to the game.
    Intent(Intent),
    /// Leave the UI.
    Quit,
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Cell, key: KeyCode, size: usize) -> Cell {
    let last = size.saturating_sub(1);
    match key {
        KeyCode::Right => Cell::new(cursor.row, (cursor.col + 1).min(last)),
        KeyCode::Left => Cell::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Down => Cell::new((cursor.row + 1).min(last), cursor.col),
        KeyCode::Up => Cell::new(cursor.row.saturating_sub(1), cursor.col),
        _ => cursor,
    }
}

/// Maps a key to an action; unmapped keys return `None`.
///
/// Digits `1`-`9` address cells in reading order.
pub fn key_action(key: KeyCode, cursor: Cell, size: usize) -> Option<KeyAction> {
    match key {
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            Some(KeyAction::Cursor(move_cursor(cursor, key, size)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::Intent(Intent::Play {
            row: cursor.row,
            col: cursor.col,
        })),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let digit = c.to_digit(10)? as usize;
            if (1..=size * size).contains(&digit) {
                let index = digit - 1;
                Some(KeyAction::Intent(Intent::Play {
                    row: index / size,
                    col: index % size,
                }))
            } else {
                None
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') => Some(KeyAction::Intent(Intent::NewRound)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyAction::Intent(Intent::Restart)),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(KeyAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        let center = Cell::new(1, 1);
        assert_eq!(move_cursor(center, KeyCode::Right, 3), Cell::new(1, 2));
        assert_eq!(move_cursor(center, KeyCode::Left, 3), Cell::new(1, 0));
        assert_eq!(move_cursor(center, KeyCode::Up, 3), Cell::new(0, 1));
        assert_eq!(move_cursor(center, KeyCode::Down, 3), Cell::new(2, 1));
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        let corner = Cell::new(0, 0);
        assert_eq!(move_cursor(corner, KeyCode::Left, 3), corner);
        assert_eq!(move_cursor(corner, KeyCode::Up, 3), corner);

        let far = Cell::new(2, 2);
        assert_eq!(move_cursor(far, KeyCode::Right, 3), far);
        assert_eq!(move_cursor(far, KeyCode::Down, 3), far);
    }

    #[test]
    fn test_digits_address_cells() {
        let cursor = Cell::new(0, 0);
        assert_eq!(
            key_action(KeyCode::Char('1'), cursor, 3),
            Some(KeyAction::Intent(Intent::Play { row: 0, col: 0 }))
        );
        assert_eq!(
            key_action(KeyCode::Char('6'), cursor, 3),
            Some(KeyAction::Intent(Intent::Play { row: 1, col: 2 }))
        );
        assert_eq!(key_action(KeyCode::Char('0'), cursor, 3), None);
    }

    #[test]
    fn test_commands() {
        let cursor = Cell::new(2, 1);
        assert_eq!(
            key_action(KeyCode::Enter, cursor, 3),
            Some(KeyAction::Intent(Intent::Play { row: 2, col: 1 }))
        );
        assert_eq!(
            key_action(KeyCode::Char('n'), cursor, 3),
            Some(KeyAction::Intent(Intent::NewRound))
        );
        assert_eq!(
            key_action(KeyCode::Char('r'), cursor, 3),
            Some(KeyAction::Intent(Intent::Restart))
        );
        assert_eq!(key_action(KeyCode::Esc, cursor, 3), Some(KeyAction::Quit));
        assert_eq!(key_action(KeyCode::Tab, cursor, 3), None);
    }
}
