use std::mem::size_of;

use crate::error::SbomError;
use crate::search;
use crate::state_id::StateID;
use crate::trie::{build_trie, Trie};

type PatternID = usize;
type PatternLength = usize;

/// A single state's outgoing transitions, stored sorted by symbol so lookups
/// are a binary search rather than a hash: a sparse, cache-friendly
/// representation for states whose branching factor is typically small
/// relative to the alphabet.
#[derive(Clone)]
pub(crate) struct Transitions<S>(Vec<(u8, S)>);

impl<S: StateID> Transitions<S> {
    fn get(&self, symbol: u8) -> Option<S> {
        self.0
            .binary_search_by_key(&symbol, |&(s, _)| s)
            .ok()
            .map(|i| self.0[i].1)
    }

    /// Sets the transition if (and only if) it isn't already defined.
    /// Returns `true` if this call actually wrote the entry.
    fn set_if_undefined(&mut self, symbol: u8, next: S) -> bool {
        match self.0.binary_search_by_key(&symbol, |&(s, _)| s) {
            Ok(_) => false,
            Err(i) => {
                self.0.insert(i, (symbol, next));
                true
            }
        }
    }

    fn heap_bytes(&self) -> usize {
        self.0.len() * size_of::<(u8, S)>()
    }
}

/// A built Set Backwards Oracle Matching automaton for a fixed pattern set.
///
/// Immutable once constructed and safe to share by reference across
/// concurrent searches: construction and search are both pure functions of
/// their inputs.
pub struct Oracle<'p, S: StateID = usize> {
    trans: Vec<Transitions<S>>,
    terms: Vec<Vec<(PatternID, PatternLength)>>,
    patterns: Vec<&'p [u8]>,
    root_id: S,
    window_len: usize,
}

impl<'p, S: StateID> Oracle<'p, S> {
    /// Builds an oracle from `patterns`, deduplicating exact repeats and
    /// rejecting an empty set or any empty pattern.
    pub fn new<I>(patterns: I) -> Result<Self, SbomError>
    where
        I: IntoIterator<Item = &'p str>,
    {
        let patterns = crate::prepare_patterns(patterns)?;
        let window_len = patterns.iter().map(|p| p.len()).min().unwrap();
        let trie: Trie<'p, S> = build_trie(&patterns, window_len);
        let (trans, terms) = build_oracle_transitions(&trie);

        log::debug!(
            "built factor oracle: {} states, {} patterns, window_len={}",
            trans.len(),
            patterns.len(),
            window_len
        );

        Ok(Oracle {
            trans,
            terms,
            patterns,
            root_id: trie.root_id(),
            window_len,
        })
    }

    /// Returns true iff the document contains every pattern this oracle was
    /// built from, as a substring.
    pub fn search(&self, document: &str) -> bool {
        search::run(self, document.as_bytes())
    }

    /// The window size: the shortest pattern's length.
    pub fn window_len(&self) -> usize {
        self.window_len
    }

    /// Number of distinct patterns this oracle was built from.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Approximate heap usage of the transition table and terminal sets,
    /// for callers who want to reason about the automaton's memory
    /// footprint without digging through its internals.
    pub fn heap_bytes(&self) -> usize {
        let trans_bytes: usize = self.trans.iter().map(Transitions::heap_bytes).sum();
        let terms_bytes: usize = self
            .terms
            .iter()
            .map(|t| t.len() * size_of::<(PatternID, PatternLength)>())
            .sum();
        trans_bytes + terms_bytes
    }

    pub(crate) fn root_id(&self) -> S {
        self.root_id
    }

    pub(crate) fn transition(&self, state: S, symbol: u8) -> Option<S> {
        self.trans[state.to_usize()].get(symbol)
    }

    pub(crate) fn terms(&self, state: S) -> &[(PatternID, PatternLength)] {
        &self.terms[state.to_usize()]
    }

    pub(crate) fn pattern_bytes(&self, pattern_id: PatternID) -> &'p [u8] {
        self.patterns[pattern_id]
    }

    #[cfg(feature = "dot-export")]
    pub(crate) fn state_count(&self) -> usize {
        self.trans.len()
    }

    #[cfg(feature = "dot-export")]
    pub(crate) fn transitions_of(&self, state: S) -> impl Iterator<Item = (u8, S)> + '_ {
        self.trans[state.to_usize()].0.iter().copied()
    }
}

/// Augments a trie with supplementary transitions, turning it into a factor
/// oracle: additional edges that let the search driver stay inside the
/// automaton longer, reaching the deepest state whose path is still a suffix
/// of what has been read so far.
///
/// Starts from the trie's primary (parent-to-child) edges, then walks the
/// trie in breadth-first order (root excluded) adding internal supplementary
/// transitions and root-fallback transitions. Trie node ids and oracle state
/// ids coincide: the oracle never introduces a state the trie didn't already
/// have, only additional edges between existing states.
fn build_oracle_transitions<'p, S: StateID>(
    trie: &Trie<'p, S>,
) -> (Vec<Transitions<S>>, Vec<Vec<(PatternID, PatternLength)>>) {
    let n = trie.node_count();
    let root = trie.root_id();

    // Seed every state's transitions with its trie children: the primary
    // edges are always present.
    let mut trans: Vec<Transitions<S>> = trie
        .node_ids()
        .map(|id| Transitions(trie.children_of(id).to_vec()))
        .collect();
    let mut terms: Vec<Vec<(PatternID, PatternLength)>> = trie
        .node_ids()
        .map(|id| trie.terms_of(id).to_vec())
        .collect();
    // `node_ids` yields exactly `n` states in dense order, so plain indexing
    // below (by `.to_usize()`) is always in bounds.
    debug_assert_eq!(trans.len(), n);
    debug_assert_eq!(terms.len(), n);

    let mut marked = vec![false; n];

    for node in trie.bfs_order() {
        let c = trie
            .parent_symbol_of(node)
            .expect("non-root node always has a parent symbol");
        let parent = trie
            .parent_of(node)
            .expect("non-root node always has a parent");

        // Step 2: internal supplementary edge. Walk upward from `parent`
        // towards the root, collecting parent symbols, stopping at the root
        // or at a node already marked as having an inbound supplementary
        // transition.
        let mut collected = Vec::new();
        let mut cur = parent;
        while cur != root && !marked[cur.to_usize()] {
            let sym = trie
                .parent_symbol_of(cur)
                .expect("non-root node always has a parent symbol");
            collected.push(sym);
            cur = trie
                .parent_of(cur)
                .expect("non-root node always has a parent");
        }
        // `collected` was built walking away from the root (deepest symbol
        // first); replaying it forward from the root needs the opposite
        // order.
        collected.reverse();

        let mut state = root;
        let mut reachable = true;
        for &sym in &collected {
            match trans[state.to_usize()].get(sym) {
                Some(next) => state = next,
                None => {
                    reachable = false;
                    break;
                }
            }
        }

        if reachable && state != root && trans[state.to_usize()].get(c).is_none() {
            let wrote = trans[state.to_usize()].set_if_undefined(c, node);
            debug_assert!(wrote, "checked get(c).is_none() just above");
            marked[state.to_usize()] = true;
        }

        // Step 3: root fallback.
        if trans[root.to_usize()].get(c).is_none() {
            let wrote = trans[root.to_usize()].set_if_undefined(c, node);
            debug_assert!(wrote, "checked get(c).is_none() just above");
            marked[node.to_usize()] = true;
        }
    }

    (trans, terms)
}

#[cfg(feature = "dot-export")]
pub(crate) mod dot {
    use super::Oracle;
    use crate::state_id::StateID;
    use std::fmt::Write;

    /// Renders an oracle's transition table as a Graphviz DOT digraph.
    ///
    /// Purely a debugging aid: borrows the oracle, allocates
    /// its own `String`, and is never invoked from `Oracle::new` or
    /// `Oracle::search`.
    pub fn to_dot<'p, S: StateID>(oracle: &Oracle<'p, S>) -> String {
        let mut out = String::new();
        writeln!(out, "digraph oracle {{").unwrap();
        writeln!(out, "  rankdir=LR;").unwrap();
        for state in 0..oracle.state_count() {
            let id = crate::state_id::usize_to_state_id::<S>(state).unwrap();
            let match_count = oracle.terms(id).len();
            if match_count > 0 {
                writeln!(
                    out,
                    "  {state} [shape=doublecircle, label=\"{state}\\n{match_count} pattern(s)\"];"
                )
                .unwrap();
            } else {
                writeln!(out, "  {state} [shape=circle];").unwrap();
            }
            for (symbol, next) in oracle.transitions_of(id) {
                writeln!(
                    out,
                    "  {state} -> {} [label=\"{}\"];",
                    next.to_usize(),
                    escape_symbol(symbol)
                )
                .unwrap();
            }
        }
        writeln!(out, "}}").unwrap();
        out
    }

    fn escape_symbol(b: u8) -> String {
        match b {
            b'"' => "\\\"".to_string(),
            b'\\' => "\\\\".to_string(),
            0x20..=0x7e => (b as char).to_string(),
            _ => format!("\\\\x{:02x}", b),
        }
    }
}
