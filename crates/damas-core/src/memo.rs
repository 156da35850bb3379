//! Frequency-counting memo cache.
//!
//! Unlike an LRU cache there is no recency signal: every hit bumps a per-key
//! counter, nothing is evicted implicitly, and an explicit [`Memo::trim`]
//! drops the least-used 90% in one sweep. That keeps long self-play runs
//! bounded without paying eviction bookkeeping on the hot path.

use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;

use crate::board::Board;
use crate::movegen::legal_moves;
use crate::transition::is_valid_transition;
use crate::types::{MoveSet, Player, Segment, Square};

/// Share of entries removed by a trim, lowest hit counts first.
const TRIM_FRACTION: f64 = 0.9;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MemoError {
    #[error("key not found")]
    KeyNotFound,
}

#[derive(Debug, Clone)]
struct MemoEntry<V> {
    value: V,
    hits: u64,
}

#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    entries: HashMap<K, MemoEntry<V>>,
}

impl<K: Eq + Hash + Clone, V> Memo<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Inserts, resetting the hit counter (also when overwriting).
    pub fn insert(&mut self, key: K, value: V) {
        self.entries.insert(key, MemoEntry { value, hits: 0 });
    }

    /// Looks up and counts the hit. Misses are an explicit failure; callers
    /// either check [`Memo::contains`] first or handle the error.
    pub fn get(&mut self, key: &K) -> Result<&V, MemoError> {
        let entry = self.entries.get_mut(key).ok_or(MemoError::KeyNotFound)?;
        entry.hits += 1;
        Ok(&entry.value)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &K) -> Result<V, MemoError> {
        self.entries
            .remove(key)
            .map(|entry| entry.value)
            .ok_or(MemoError::KeyNotFound)
    }

    pub fn hits(&self, key: &K) -> Option<u64> {
        self.entries.get(key).map(|entry| entry.hits)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evicts the least-used [`TRIM_FRACTION`] of entries (hit counts
    /// ascending) and returns how many were removed.
    pub fn trim(&mut self) -> usize {
        let mut by_hits: Vec<(K, u64)> = self
            .entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.hits))
            .collect();
        by_hits.sort_by_key(|&(_, hits)| hits);

        let to_remove = (by_hits.len() as f64 * TRIM_FRACTION) as usize;
        for (key, _) in by_hits.into_iter().take(to_remove) {
            self.entries.remove(&key);
        }
        to_remove
    }
}

impl<K: Eq + Hash + Clone, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

type TransitionKey = (u64, u64, Segment);

/// Memoized front-end over the generator and the transition validator, keyed
/// by board fingerprints. Results are identical to the uncached calls; the
/// cache only changes how often the rules run.
#[derive(Debug, Clone, Default)]
pub struct MemoizedRules {
    moves: Memo<(u64, Player), MoveSet>,
    transitions: Memo<TransitionKey, bool>,
}

impl MemoizedRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn legal_moves(&mut self, board: &Board, player: Player) -> MoveSet {
        let key = (board.fingerprint(), player);
        if let Ok(cached) = self.moves.get(&key) {
            return cached.clone();
        }
        let generated = legal_moves(board, player);
        self.moves.insert(key, generated.clone());
        generated
    }

    pub fn is_valid_transition(
        &mut self,
        before: &Board,
        after: &Board,
        from: Square,
        to: Square,
    ) -> bool {
        let key = (
            before.fingerprint(),
            after.fingerprint(),
            Segment::new(from, to),
        );
        if let Ok(&cached) = self.transitions.get(&key) {
            return cached;
        }
        let valid = is_valid_transition(before, after, from, to);
        self.transitions.insert(key, valid);
        valid
    }

    pub fn len(&self) -> usize {
        self.moves.len() + self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.transitions.is_empty()
    }

    /// Trims both underlying caches; returns the total evicted.
    pub fn trim(&mut self) -> usize {
        self.moves.trim() + self.transitions.trim()
    }
}
