//! Linear-time scanning over a sealed automaton.
//!
//! Scanning keeps a single "current state" cursor and, for each text
//! symbol, retreats along failure links until a matching child edge is
//! found (or the root is reached). Each retreat strictly decreases the
//! state depth while each consumed symbol increases it by at most one,
//! so total transition work is O(|text|) amortized; output work adds
//! O(match count).
//!
//! No per-call state is stored in the node graph, so a sealed automaton
//! can be shared across threads with each scan holding its own
//! [`StreamScanner`] or using [`AhoCorasick::scan`] independently.

use std::hash::Hash;

use super::arena::{NodeId, ROOT};
use super::{AhoCorasick, PatternId};
use crate::error::{Result, YariError};

/// Per-pattern match offsets produced by a scan.
///
/// Every inserted pattern is present, including patterns with no
/// occurrences. Offsets are in the same indexing unit as the scanned
/// symbol sequence and are ordered by discovery, which is increasing
/// position per pattern.
#[derive(Debug)]
pub struct ScanReport<'a, S> {
    automaton: &'a AhoCorasick<S>,
    offsets: Vec<Vec<usize>>,
}

impl<'a, S: Copy + Eq + Hash> ScanReport<'a, S> {
    fn new(automaton: &'a AhoCorasick<S>) -> Self {
        ScanReport {
            offsets: vec![Vec::new(); automaton.pattern_count()],
            automaton,
        }
    }

    /// Offsets recorded for `pattern`, or `None` if the pattern was never
    /// inserted into the automaton.
    pub fn offsets_of(&self, pattern: &[S]) -> Option<&[usize]> {
        let id = self.automaton.pattern_id(pattern)?;
        Some(&self.offsets[id])
    }

    /// Offsets recorded for the pattern registered under `id`.
    pub fn offsets_by_id(&self, id: PatternId) -> Option<&[usize]> {
        self.offsets.get(id).map(Vec::as_slice)
    }

    /// Iterate over `(pattern, offsets)` pairs in pattern-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a [S], &[usize])> {
        self.automaton
            .patterns()
            .zip(self.offsets.iter().map(Vec::as_slice))
    }

    /// Number of patterns covered by this report.
    pub fn pattern_count(&self) -> usize {
        self.offsets.len()
    }

    /// Total number of recorded occurrences across all patterns.
    pub fn total_matches(&self) -> usize {
        self.offsets.iter().map(Vec::len).sum()
    }
}

/// A scan in progress, fed one chunk at a time.
///
/// The scanner carries the current automaton state and the global symbol
/// offset across chunk boundaries, so a pattern straddling two chunks is
/// still reported at its correct start offset. Obtain one from
/// [`AhoCorasick::scanner`], push any number of chunks, then call
/// [`finish`](StreamScanner::finish).
#[derive(Debug)]
pub struct StreamScanner<'a, S> {
    automaton: &'a AhoCorasick<S>,
    state: NodeId,
    consumed: usize,
    report: ScanReport<'a, S>,
}

impl<'a, S: Copy + Eq + Hash> StreamScanner<'a, S> {
    fn new(automaton: &'a AhoCorasick<S>) -> Self {
        StreamScanner {
            automaton,
            state: ROOT,
            consumed: 0,
            report: ScanReport::new(automaton),
        }
    }

    /// Feed the next chunk of the text.
    pub fn push<I>(&mut self, chunk: I)
    where
        I: IntoIterator<Item = S>,
    {
        let arena = self.automaton.arena();
        for symbol in chunk {
            let mut state = self.state;
            while state != ROOT && !arena.node(state).children.contains_key(&symbol) {
                state = arena.node(state).failure;
            }
            if let Some(&next) = arena.node(state).children.get(&symbol) {
                state = next;
            }
            self.state = state;

            for &id in &arena.node(state).outputs {
                // The pattern length never exceeds the state depth, which
                // is at most consumed + 1, so this cannot underflow.
                let offset = self.consumed + 1 - self.automaton.pattern_len(id);
                self.report.offsets[id].push(offset);
            }
            self.consumed += 1;
        }
    }

    /// Number of symbols consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Finish the scan and return the accumulated report.
    pub fn finish(self) -> ScanReport<'a, S> {
        self.report
    }
}

impl<S: Copy + Eq + Hash> AhoCorasick<S> {
    /// Scan a complete symbol sequence, reporting all occurrences of all
    /// patterns.
    ///
    /// # Errors
    ///
    /// [`YariError::NotSealed`] if [`seal`](AhoCorasick::seal) has not
    /// been called.
    pub fn scan<I>(&self, text: I) -> Result<ScanReport<'_, S>>
    where
        I: IntoIterator<Item = S>,
    {
        let mut scanner = self.scanner()?;
        scanner.push(text);
        Ok(scanner.finish())
    }

    /// Start a chunked scan. Each scanner carries its own cursor, so any
    /// number may run against the same sealed automaton at once.
    ///
    /// # Errors
    ///
    /// [`YariError::NotSealed`] if [`seal`](AhoCorasick::seal) has not
    /// been called.
    pub fn scanner(&self) -> Result<StreamScanner<'_, S>> {
        if !self.sealed {
            return Err(YariError::NotSealed);
        }
        Ok(StreamScanner::new(self))
    }
}
