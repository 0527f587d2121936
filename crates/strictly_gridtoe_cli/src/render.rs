//! Box-drawing board renderer.

use strictly_gridtoe::{Board, Cell, Player};
use tracing::instrument;

/// Symbol drawn for a cell.
fn symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Occupied(Player::X) => 'x',
        Cell::Occupied(Player::O) => 'o',
    }
}

/// Renders the board as a grid of heavy box-drawing lines.
///
/// ```text
/// ┏━━━┳━━━┓
/// ┃ x ┃   ┃
/// ┣━━━╋━━━┫
/// ┃   ┃ o ┃
/// ┗━━━┻━━━┛
/// ```
#[instrument(skip(board), fields(size = board.size()))]
pub fn render_board(board: &Board) -> String {
    let rule = |left: &str, middle: &str, right: &str| {
        let inner = vec!["━━━"; board.size()].join(middle);
        format!("{}{}{}", left, inner, right)
    };

    let mut lines = vec![rule("┏", "┳", "┓")];
    for (i, row) in board.rows().enumerate() {
        let mut line: String = row.iter().map(|&c| format!("┃ {} ", symbol(c))).collect();
        line.push('┃');
        lines.push(line);
        if i + 1 < board.size() {
            lines.push(rule("┣", "╋", "┫"));
        }
    }
    lines.push(rule("┗", "┻", "┛"));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_gridtoe::{BoardSize, Position};

    #[test]
    fn test_empty_small_board() {
        let board = Board::with_size(BoardSize::Small);
        let expected = [
            "┏━━━┳━━━┳━━━┓",
            "┃   ┃   ┃   ┃",
            "┣━━━╋━━━╋━━━┫",
            "┃   ┃   ┃   ┃",
            "┣━━━╋━━━╋━━━┫",
            "┃   ┃   ┃   ┃",
            "┗━━━┻━━━┻━━━┛",
        ]
        .join("\n");
        assert_eq!(render_board(&board), expected);
    }

    #[test]
    fn test_marks_rendered_in_place() {
        let mut board = Board::new(2).unwrap();
        board.set(Position::new(0, 0), Cell::Occupied(Player::X)).unwrap();
        board.set(Position::new(1, 1), Cell::Occupied(Player::O)).unwrap();
        let expected = [
            "┏━━━┳━━━┓",
            "┃ x ┃   ┃",
            "┣━━━╋━━━┫",
            "┃   ┃ o ┃",
            "┗━━━┻━━━┛",
        ]
        .join("\n");
        assert_eq!(render_board(&board), expected);
    }

    #[test]
    fn test_large_board_dimensions() {
        let board = Board::with_size(BoardSize::Large);
        let rendered = render_board(&board);
        // 7 cell rows, 6 separators, top and bottom.
        assert_eq!(rendered.lines().count(), 15);
        assert!(rendered.lines().all(|l| l.chars().count() == 29));
    }
}
