//! Legal-move generation with the forced-capture rule.
//!
//! Generation is a single two-phase pass: maximal capture chains are
//! collected for every piece of the moving player first, and only when none
//! exist anywhere on the board are one-step moves offered.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::constants::PLAYABLE_SQUARES;
use crate::types::{
    Cell, Move, MoveList, MoveSet, Piece, PieceKind, Player, Segment, Square, MAX_CHAIN_LEN,
};

pub const WHITE_FORWARD: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
pub const BLACK_FORWARD: [(i8, i8); 2] = [(1, -1), (1, 1)];
pub const ALL_DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

type CapturePath = ArrayVec<Segment, MAX_CHAIN_LEN>;

/// Men step and capture toward the opponent's edge only; kings use all four
/// diagonals. Directions come from the piece currently on the board, so a man
/// crowned mid-chain finishes the chain with king directions.
pub fn move_directions(piece: Piece) -> &'static [(i8, i8)] {
    match (piece.kind, piece.owner) {
        (PieceKind::King, _) => &ALL_DIAGONALS,
        (PieceKind::Man, Player::White) => &WHITE_FORWARD,
        (PieceKind::Man, Player::Black) => &BLACK_FORWARD,
    }
}

pub fn legal_moves(board: &Board, player: Player) -> MoveSet {
    let mut captures = MoveList::new();
    for square in PLAYABLE_SQUARES {
        if piece_of(board, square, player).is_some() {
            let mut path = CapturePath::new();
            collect_capture_chains(board, square, player, &mut path, &mut captures);
        }
    }
    if !captures.is_empty() {
        return MoveSet::Captures(captures);
    }

    let mut steps = MoveList::new();
    for square in PLAYABLE_SQUARES {
        if let Some(piece) = piece_of(board, square, player) {
            collect_steps(board, square, piece, &mut steps);
        }
    }
    MoveSet::Steps(steps)
}

fn piece_of(board: &Board, square: Square, player: Player) -> Option<Piece> {
    board.piece_at(square).filter(|piece| piece.owner == player)
}

/// Depth-first capture search. Each hop is applied to a scratch copy of the
/// board (mover out, victim out, mover in on the landing square, crowned when
/// it lands on the farthest row) and the search continues from there. A path
/// is recorded only when no further hop exists, so every emitted chain is
/// maximal; sibling branches become separate moves.
fn collect_capture_chains(
    board: &Board,
    from: Square,
    player: Player,
    path: &mut CapturePath,
    out: &mut MoveList,
) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };

    let mut extended = false;
    for &(row_dir, col_dir) in move_directions(piece) {
        let mid_row = from.row as i8 + row_dir;
        let mid_col = from.col as i8 + col_dir;
        let land_row = from.row as i8 + 2 * row_dir;
        let land_col = from.col as i8 + 2 * col_dir;
        if !board.empty_playable(land_row, land_col)
            || !board.opponent_at(mid_row, mid_col, player)
        {
            continue;
        }

        let mid = Square::new_unchecked(mid_row as u8, mid_col as u8);
        let landing = Square::new_unchecked(land_row as u8, land_col as u8);

        let mut scratch = board.clone();
        scratch.set_cell(from, Cell::Empty);
        scratch.set_cell(mid, Cell::Empty);
        scratch.set_cell(landing, Cell::Occupied(crowned_on(piece, landing)));

        path.push(Segment::new(from, landing));
        collect_capture_chains(&scratch, landing, player, path, out);
        path.pop();
        extended = true;
    }

    if !extended && !path.is_empty() {
        if let Some(mv) = Move::from_segments(path.iter().copied()) {
            let _ = out.try_push(mv);
        }
    }
}

fn collect_steps(board: &Board, from: Square, piece: Piece, out: &mut MoveList) {
    for &(row_dir, col_dir) in move_directions(piece) {
        let row = from.row as i8 + row_dir;
        let col = from.col as i8 + col_dir;
        if board.empty_playable(row, col) {
            let to = Square::new_unchecked(row as u8, col as u8);
            let _ = out.try_push(Move::single(Segment::new(from, to)));
        }
    }
}

fn crowned_on(piece: Piece, landing: Square) -> Piece {
    if piece.kind == PieceKind::Man && landing.row == piece.owner.crown_row() {
        Piece::king(piece.owner)
    } else {
        piece
    }
}
