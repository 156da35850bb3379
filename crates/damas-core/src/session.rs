//! Per-game state: move counters, scores, the most recent captures, and the
//! repetition heuristic that calls long shuttling games a draw.

use std::collections::VecDeque;

use thiserror::Error;

use crate::apply::{apply_move, scores, AppliedMove, ApplyError};
use crate::board::Board;
use crate::movegen::legal_moves;
use crate::policy::Policy;
use crate::types::{Move, MoveSet, Player, Scores, Square};

pub const DEFAULT_LOOP_WINDOW: usize = 5;
pub const DEFAULT_LOOP_THRESHOLD: u32 = 3;
pub const DEFAULT_MOVE_LIMIT: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// How many recent board fingerprints the loop detector remembers.
    pub loop_window: usize,
    /// Consecutive repeats before a loop is reported.
    pub loop_threshold: u32,
    /// Total-move budget after which the caller should call the game a tie.
    pub move_limit: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            loop_window: DEFAULT_LOOP_WINDOW,
            loop_threshold: DEFAULT_LOOP_THRESHOLD,
            move_limit: DEFAULT_MOVE_LIMIT,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Apply(#[from] ApplyError),
    /// The policy produced no choice (or an out-of-range one) from a
    /// non-empty move set. A programmer error on the caller's side.
    #[error("policy chose no move from a non-empty move set")]
    PolicyRefused,
}

/// Heuristic repetition detector: not a threefold-repetition proof, just a
/// bounded window of recent fingerprints and a streak counter.
#[derive(Debug, Clone)]
pub struct LoopDetector {
    recent: VecDeque<u64>,
    window: usize,
    threshold: u32,
    streak: u32,
}

impl LoopDetector {
    pub fn new(window: usize, threshold: u32) -> Self {
        Self {
            recent: VecDeque::with_capacity(window + 1),
            window,
            threshold,
            streak: 0,
        }
    }

    /// Feeds one fingerprint: a hit anywhere in the window extends the streak,
    /// a miss resets it. Returns whether the streak has reached the threshold.
    pub fn observe(&mut self, fingerprint: u64) -> bool {
        if self.recent.contains(&fingerprint) {
            self.streak += 1;
        } else {
            self.streak = 0;
        }
        self.recent.push_back(fingerprint);
        if self.recent.len() > self.window {
            self.recent.pop_front();
        }
        self.streak >= self.threshold
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }
}

impl Default for LoopDetector {
    fn default() -> Self {
        Self::new(DEFAULT_LOOP_WINDOW, DEFAULT_LOOP_THRESHOLD)
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    config: SessionConfig,
    scores: Scores,
    white_moves: u32,
    black_moves: u32,
    total_moves: u32,
    last_applied: AppliedMove,
    loop_detector: LoopDetector,
}

impl GameSession {
    pub fn new() -> Self {
        Self::from_board_with_config(Board::new(), SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self::from_board_with_config(Board::new(), config)
    }

    pub fn from_board(board: Board) -> Self {
        Self::from_board_with_config(board, SessionConfig::default())
    }

    pub fn from_board_with_config(board: Board, config: SessionConfig) -> Self {
        let scores = scores(&board);
        Self {
            board,
            config,
            scores,
            white_moves: 0,
            black_moves: 0,
            total_moves: 1,
            last_applied: AppliedMove::default(),
            loop_detector: LoopDetector::new(config.loop_window, config.loop_threshold),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn moves_played(&self, player: Player) -> u32 {
        match player {
            Player::White => self.white_moves,
            Player::Black => self.black_moves,
        }
    }

    pub fn total_moves(&self) -> u32 {
        self.total_moves
    }

    /// Squares captured by the most recent [`GameSession::play`], for
    /// presentation. Reset on every play.
    pub fn captured_squares(&self) -> &[Square] {
        &self.last_applied.captured
    }

    pub fn legal_moves(&self, player: Player) -> MoveSet {
        legal_moves(&self.board, player)
    }

    /// Commits a move: applies it to the board, records the captures,
    /// recomputes both scores and bumps the move counters.
    pub fn play(&mut self, mv: &Move, player: Player) -> Result<AppliedMove, SessionError> {
        let applied = apply_move(&mut self.board, mv, player)?;
        self.scores = scores(&self.board);
        match player {
            Player::White => self.white_moves += 1,
            Player::Black => self.black_moves += 1,
        }
        self.total_moves += 1;
        self.last_applied = applied.clone();
        Ok(applied)
    }

    /// Generates for `player`, lets `policy` choose, and commits the choice.
    /// `Ok(None)` means the player has no legal moves: the game is over, not
    /// in error. A policy returning nothing from a non-empty set is fatal.
    pub fn play_policy(
        &mut self,
        policy: &mut dyn Policy,
        player: Player,
    ) -> Result<Option<AppliedMove>, SessionError> {
        let moves = self.legal_moves(player);
        if moves.is_empty() {
            return Ok(None);
        }
        let chosen = policy
            .choose(&self.board, player, &moves)
            .and_then(|idx| moves.moves().get(idx))
            .cloned()
            .ok_or(SessionError::PolicyRefused)?;
        self.play(&chosen, player).map(Some)
    }

    /// Feeds the current board fingerprint to the loop detector.
    pub fn detect_loop(&mut self) -> bool {
        let fingerprint = self.board.fingerprint();
        self.loop_detector.observe(fingerprint)
    }

    pub fn move_limit_reached(&self) -> bool {
        self.total_moves >= self.config.move_limit
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
