//! Move application and scoring.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::board::Board;
use crate::constants::{KING_SCORE_BONUS, PIECES_PER_SIDE, PLAYABLE_SQUARES};
use crate::types::{Cell, Move, Piece, PieceKind, Player, Scores, Square, MAX_CHAIN_LEN};

/// Caller-contract violations. Rule legality is the generator's and
/// validator's business; these only fire on malformed input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApplyError {
    #[error("move has no segments")]
    EmptyMove,
    #[error("segment is not a diagonal jump")]
    NonDiagonal,
    #[error("segment origin does not hold the mover's piece")]
    OriginNotMoversPiece,
    #[error("segment destination is not an empty playable square")]
    DestinationBlocked,
}

/// What a move did to the board: captured squares in capture order, and
/// whether the mover was crowned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedMove {
    pub captured: ArrayVec<Square, MAX_CHAIN_LEN>,
    pub crowned: bool,
}

/// Commits `mv` for `player`: relocates the piece segment by segment, clears
/// every captured opponent between segment endpoints, and crowns a man that
/// ends a segment on its farthest row (it stays a king for the rest of the
/// move).
pub fn apply_move(board: &mut Board, mv: &Move, player: Player) -> Result<AppliedMove, ApplyError> {
    if mv.segments().is_empty() {
        return Err(ApplyError::EmptyMove);
    }

    let mut applied = AppliedMove::default();
    for segment in mv.segments() {
        let piece = board
            .piece_at(segment.from)
            .filter(|piece| piece.owner == player)
            .ok_or(ApplyError::OriginNotMoversPiece)?;
        if board.get(segment.to) != Cell::Empty {
            return Err(ApplyError::DestinationBlocked);
        }

        let row_diff = segment.row_delta();
        let col_diff = segment.col_delta();
        let span = row_diff.abs();
        if span == 0 || span != col_diff.abs() {
            return Err(ApplyError::NonDiagonal);
        }

        board.set_cell(segment.from, Cell::Empty);

        if span == 2 {
            let mid = segment.midpoint().expect("2-step segment has a midpoint");
            if board.opponent_at(mid.row as i8, mid.col as i8, player) {
                board.set_cell(mid, Cell::Empty);
                let _ = applied.captured.try_push(mid);
            }
        } else if span > 2 {
            clear_captured_along(board, segment.from, segment.to, player, &mut applied);
        }

        let landed = if piece.kind == PieceKind::Man && segment.to.row == player.crown_row() {
            applied.crowned = true;
            Piece::king(player)
        } else {
            piece
        };
        board.set_cell(segment.to, Cell::Occupied(landed));
    }
    Ok(applied)
}

fn clear_captured_along(
    board: &mut Board,
    from: Square,
    to: Square,
    player: Player,
    applied: &mut AppliedMove,
) {
    let step_row = (to.row as i8 - from.row as i8).signum();
    let step_col = (to.col as i8 - from.col as i8).signum();
    let mut row = from.row as i8 + step_row;
    let mut col = from.col as i8 + step_col;
    while (row, col) != (to.row as i8, to.col as i8) {
        if board.opponent_at(row, col, player) {
            let square = Square::new_unchecked(row as u8, col as u8);
            board.set_cell(square, Cell::Empty);
            let _ = applied.captured.try_push(square);
        }
        row += step_row;
        col += step_col;
    }
}

/// One point per opposing piece off the board, plus three per own king.
pub fn scores(board: &Board) -> Scores {
    let mut white_pieces = 0;
    let mut white_kings = 0;
    let mut black_pieces = 0;
    let mut black_kings = 0;
    for square in PLAYABLE_SQUARES {
        let Some(piece) = board.piece_at(square) else {
            continue;
        };
        match piece.owner {
            Player::White => {
                white_pieces += 1;
                if piece.is_king() {
                    white_kings += 1;
                }
            }
            Player::Black => {
                black_pieces += 1;
                if piece.is_king() {
                    black_kings += 1;
                }
            }
        }
    }
    Scores {
        white: (PIECES_PER_SIDE - black_pieces) + KING_SCORE_BONUS * white_kings,
        black: (PIECES_PER_SIDE - white_pieces) + KING_SCORE_BONUS * black_kings,
    }
}
