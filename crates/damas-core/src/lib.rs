//! Checkers (draughts) rules engine.
//!
//! Enumerates every legal move for a player, including chained multi-square
//! captures under the forced-capture rule, validates proposed board
//! transitions, applies moves with crowning and scoring, detects repetition
//! draws, and memoizes rule results behind a frequency-counting cache.
//!
//! Everything is synchronous and allocation-light: boards are small values,
//! generation and validation are pure functions over an explicit board
//! argument. A [`Board`], [`GameSession`] or [`MemoizedRules`] instance is
//! not safe for unsynchronized shared mutation; give each concurrent game its
//! own, or wrap shared caches in a lock.

pub mod apply;
pub mod board;
pub mod constants;
pub mod memo;
pub mod movegen;
pub mod notation;
pub mod policy;
pub mod session;
pub mod transition;
pub mod types;
pub mod zobrist;

pub use apply::{apply_move, scores, AppliedMove, ApplyError};
pub use board::{Board, BoardError};
pub use constants::{BOARD_SIZE, KING_SCORE_BONUS, PIECES_PER_SIDE, PLAYABLE_SQUARES};
pub use memo::{Memo, MemoError, MemoizedRules};
pub use movegen::{legal_moves, move_directions};
pub use notation::{encode_board, parse_board, NotationError, STARTING_POSITION};
pub use policy::{FirstMove, Policy};
pub use session::{GameSession, LoopDetector, SessionConfig, SessionError};
pub use transition::is_valid_transition;
pub use types::{
    Cell, Move, MoveList, MoveSet, Piece, PieceKind, Player, Scores, Segment, Square,
    MAX_CHAIN_LEN,
};
pub use zobrist::{zobrist_keys, ZobristKeys};
