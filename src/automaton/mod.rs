//! Multi-pattern Aho-Corasick automaton.
//!
//! This module is the core of Yari: a set of patterns is compiled into a
//! trie, failure (suffix) links are computed by a one-time breadth-first
//! sealing pass, and a single scan of the text then reports every
//! occurrence of every pattern. Total work is linear in the text length
//! plus the match count.
//!
//! The automaton has an explicit two-phase lifecycle:
//!
//! - *open*: patterns may be inserted; failure links are undefined and
//!   scanning is rejected with [`YariError::NotSealed`].
//! - *sealed*: failure links and output sets are fixed; insertion is
//!   rejected with [`YariError::SealedAutomaton`] and any number of scans
//!   may run, concurrently if desired.
//!
//! The core is alphabet-agnostic: the symbol type `S` is opaque and the
//! automaton performs no case folding, tokenization, or symbol filtering.
//! Callers needing such behavior normalize patterns and text first (see
//! [`crate::analysis::normalizer`]).
//!
//! # Examples
//!
//! ```
//! use yari::automaton::AhoCorasick;
//!
//! let mut ac = AhoCorasick::new();
//! ac.insert("he".chars()).unwrap();
//! ac.insert("she".chars()).unwrap();
//! ac.insert("hers".chars()).unwrap();
//! ac.seal().unwrap();
//!
//! let report = ac.scan("ushershe".chars()).unwrap();
//! let she: Vec<char> = "she".chars().collect();
//! assert_eq!(report.offsets_of(&she), Some(&[1, 5][..]));
//! ```

pub mod scanner;

mod arena;

use std::collections::VecDeque;
use std::hash::Hash;

use ahash::AHashMap;

use crate::error::{Result, YariError};

use arena::{NodeArena, NodeId, ROOT};

pub use scanner::{ScanReport, StreamScanner};

/// Identifier assigned to each distinct inserted pattern, in insertion
/// order starting from zero.
pub type PatternId = usize;

/// An Aho-Corasick automaton over an opaque symbol alphabet.
///
/// `S` is typically `char` (scan `text.chars()`) or `u8` (scan
/// `text.bytes()`), but any `Copy + Eq + Hash` type works, e.g. interned
/// grapheme-cluster ids produced by an upstream normalization stage.
#[derive(Debug, Clone)]
pub struct AhoCorasick<S> {
    arena: NodeArena<S>,
    patterns: Vec<Vec<S>>,
    pattern_ids: AHashMap<Vec<S>, PatternId>,
    sealed: bool,
    pending_inserts: usize,
}

impl<S: Copy + Eq + Hash> AhoCorasick<S> {
    /// Create a new, open automaton with no patterns.
    pub fn new() -> Self {
        AhoCorasick {
            arena: NodeArena::new(),
            patterns: Vec::new(),
            pattern_ids: AHashMap::new(),
            sealed: false,
            pending_inserts: 0,
        }
    }

    /// Insert a pattern, returning its id.
    ///
    /// Walks from the root, creating one node per symbol transition not
    /// yet present, and marks the final node as the end of this pattern.
    /// Cost is O(|pattern|). Inserting a pattern that is already present
    /// returns the existing id and changes nothing.
    ///
    /// # Errors
    ///
    /// - [`YariError::SealedAutomaton`] if the automaton has been sealed.
    /// - [`YariError::InvalidPattern`] if the pattern is empty.
    pub fn insert<I>(&mut self, pattern: I) -> Result<PatternId>
    where
        I: IntoIterator<Item = S>,
    {
        if self.sealed {
            return Err(YariError::SealedAutomaton);
        }

        let pattern: Vec<S> = pattern.into_iter().collect();
        if pattern.is_empty() {
            return Err(YariError::InvalidPattern);
        }
        if let Some(&id) = self.pattern_ids.get(pattern.as_slice()) {
            return Ok(id);
        }

        let mut current = ROOT;
        for &symbol in &pattern {
            current = match self.arena.node(current).children.get(&symbol) {
                Some(&child) => child,
                None => {
                    let child = self.arena.alloc();
                    self.arena.node_mut(current).children.insert(symbol, child);
                    child
                }
            };
        }

        let id = self.patterns.len();
        self.arena.node_mut(current).pattern_end = Some(id);
        self.pattern_ids.insert(pattern.clone(), id);
        self.patterns.push(pattern);
        self.pending_inserts += 1;
        Ok(id)
    }

    /// Seal the automaton, computing failure links and output sets.
    ///
    /// Must be called after all insertions and before any scan. The pass
    /// is breadth-first, so every node's failure target (which sits at a
    /// strictly smaller depth) is finalized before the node itself, and
    /// each node's output set is the pattern ending there plus everything
    /// inherited from its failure node.
    ///
    /// Sealing an already-sealed automaton with no intervening inserts is
    /// a no-op.
    ///
    /// # Errors
    ///
    /// [`YariError::AlreadySealedWithPendingInserts`] if insertions are
    /// pending on a sealed automaton.
    pub fn seal(&mut self) -> Result<()> {
        if self.sealed {
            if self.pending_inserts > 0 {
                return Err(YariError::AlreadySealedWithPendingInserts);
            }
            return Ok(());
        }

        // Reset to own outputs so sealing after reopen() starts clean.
        for node in self.arena.nodes_mut() {
            node.outputs.clear();
            if let Some(id) = node.pattern_end {
                node.outputs.push(id);
            }
        }

        self.arena.node_mut(ROOT).failure = ROOT;

        let mut queue: VecDeque<NodeId> = VecDeque::new();
        let root_children: Vec<NodeId> =
            self.arena.node(ROOT).children.values().copied().collect();
        for child in root_children {
            self.arena.node_mut(child).failure = ROOT;
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            let edges: Vec<(S, NodeId)> = self
                .arena
                .node(current)
                .children
                .iter()
                .map(|(&symbol, &child)| (symbol, child))
                .collect();

            for (symbol, child) in edges {
                // Chase the parent's failure chain for a node with an
                // outgoing edge labeled `symbol`.
                let mut fallback = self.arena.node(current).failure;
                while fallback != ROOT
                    && !self.arena.node(fallback).children.contains_key(&symbol)
                {
                    fallback = self.arena.node(fallback).failure;
                }

                let target = match self.arena.node(fallback).children.get(&symbol) {
                    Some(&next) if next != child => next,
                    _ => ROOT,
                };
                self.arena.node_mut(child).failure = target;

                // Patterns ending on the failure chain are also reported
                // at this node. The inherited ids are strictly shorter
                // than the pattern ending here, so no duplicates arise.
                let inherited = self.arena.node(target).outputs.clone();
                self.arena.node_mut(child).outputs.extend(inherited);

                queue.push_back(child);
            }
        }

        self.sealed = true;
        self.pending_inserts = 0;
        Ok(())
    }

    /// Return the automaton to the open state so more patterns can be
    /// inserted, discarding failure links and inherited output sets.
    /// Previously inserted patterns are kept; call [`seal`](Self::seal)
    /// again before scanning.
    pub fn reopen(&mut self) {
        for node in self.arena.nodes_mut() {
            node.failure = ROOT;
            node.outputs.clear();
        }
        self.sealed = false;
    }

    /// Whether the automaton has been sealed.
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Number of distinct patterns inserted.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// The pattern registered under `id`, if any.
    pub fn pattern(&self, id: PatternId) -> Option<&[S]> {
        self.patterns.get(id).map(Vec::as_slice)
    }

    /// The id of `pattern`, if it has been inserted.
    pub fn pattern_id(&self, pattern: &[S]) -> Option<PatternId> {
        self.pattern_ids.get(pattern).copied()
    }

    /// Iterate over all inserted patterns in insertion order.
    pub fn patterns(&self) -> impl Iterator<Item = &[S]> {
        self.patterns.iter().map(Vec::as_slice)
    }

    /// Total number of automaton states, including the root.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub(crate) fn arena(&self) -> &NodeArena<S> {
        &self.arena
    }

    pub(crate) fn pattern_len(&self, id: PatternId) -> usize {
        self.patterns[id].len()
    }
}

impl<S: Copy + Eq + Hash> Default for AhoCorasick<S> {
    fn default() -> Self {
        Self::new()
    }
}
