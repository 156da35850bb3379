//! Board-transition validation: given a before/after pair and the endpoints
//! of one jump run, decide whether the change is a legal simple move, single
//! capture, or chained capture along a diagonal.
//!
//! This is a pure predicate. Illegal transitions are `false`, never errors,
//! because search probes it with speculative states; see
//! [`crate::memo::MemoizedRules`] for the cached front-end.

use crate::board::Board;
use crate::types::{Cell, Piece, PieceKind, Player, Square};

pub fn is_valid_transition(before: &Board, after: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = before.piece_at(from) else {
        return false;
    };
    let expected = expected_piece(piece, to);

    // The mover must have left `from` and landed on `to` as the expected
    // piece, whatever the shape of the jump.
    if after.piece_at(to) != Some(expected) || after.get(from) != Cell::Empty {
        return false;
    }

    let row_diff = to.row as i8 - from.row as i8;
    let col_diff = to.col as i8 - from.col as i8;
    match (row_diff.abs(), col_diff.abs()) {
        (1, 1) => true,
        (2, 2) => single_capture_ok(before, after, from, to, piece.owner),
        (rows, cols) if rows == cols && rows > 2 => {
            chained_capture_ok(before, after, from, to, piece.owner)
        }
        _ => false,
    }
}

/// The piece expected on the landing square: the mover, crowned when a man
/// ends the jump on its farthest row.
fn expected_piece(piece: Piece, to: Square) -> Piece {
    if piece.kind == PieceKind::Man && to.row == piece.owner.crown_row() {
        Piece::king(piece.owner)
    } else {
        piece
    }
}

fn single_capture_ok(
    before: &Board,
    after: &Board,
    from: Square,
    to: Square,
    mover: Player,
) -> bool {
    let mid_row = (from.row + to.row) as i8 / 2;
    let mid_col = (from.col + to.col) as i8 / 2;
    before.opponent_at(mid_row, mid_col, mover) && after.empty_playable(mid_row, mid_col)
}

/// Walks the diagonal strictly between the endpoints. Every interior cell is
/// either a capture (opponent before, empty after) or a pass-through empty
/// square; at least one capture must occur.
fn chained_capture_ok(
    before: &Board,
    after: &Board,
    from: Square,
    to: Square,
    mover: Player,
) -> bool {
    let step_row = (to.row as i8 - from.row as i8).signum();
    let step_col = (to.col as i8 - from.col as i8).signum();

    let mut row = from.row as i8 + step_row;
    let mut col = from.col as i8 + step_col;
    let mut captures = 0;
    while (row, col) != (to.row as i8, to.col as i8) {
        if before.opponent_at(row, col, mover) && after.empty_playable(row, col) {
            captures += 1;
        } else if !(before.empty_playable(row, col) && after.empty_playable(row, col)) {
            return false;
        }
        row += step_row;
        col += step_col;
    }
    captures > 0
}
