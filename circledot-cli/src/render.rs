//! Text rendering of the board
//!
//! Odd rows are shifted half a cell right so the six-neighbour layout reads
//! the way it plays.

use circledot_core::{Board, CellState};

/// Glyph for a cell
pub fn glyph(state: CellState) -> char {
    match state {
        CellState::Available => '.',
        CellState::Blocked => 'o',
        CellState::Occupied => '@',
    }
}

/// Render the board with row and column labels
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("    ");
    let header: Vec<String> = (0..board.size()).map(|c| (c % 10).to_string()).collect();
    out.push_str(&header.join(" "));
    out.push('\n');

    for (row, cells) in board.rows().enumerate() {
        out.push_str(&format!("{:>3} ", row));
        if row % 2 == 1 {
            out.push(' ');
        }
        let line: Vec<String> = cells.iter().map(|&c| glyph(c).to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use circledot_core::Coord;

    #[test]
    fn test_render_small_board() {
        let mut board = Board::empty(4, Coord::new(1, 2)).unwrap();
        board.block(Coord::new(0, 0)).unwrap();
        board.block(Coord::new(3, 3)).unwrap();

        let expected = "    0 1 2 3\n  0 o . . .\n  1  . . @ .\n  2 . . . .\n  3  . . . o\n";
        assert_eq!(render_board(&board), expected);
    }
}
