use std::collections::VecDeque;

use crate::state_id::{usize_to_state_id, StateID};

type PatternID = usize;
type PatternLength = usize;

/// A trie over the reversed length-`window_len` prefixes of a pattern set.
///
/// Paths from the root spell the reversed length-`window_len` prefix of every
/// pattern. Ownership (the node arena, indexed by dense id) is kept separate
/// from topology (parent pointers, child lists) the same way the oracle keeps
/// its transition table separate from the arena it was built over.
pub(crate) struct Trie<'p, S> {
    parent: Vec<Option<S>>,
    parent_symbol: Vec<Option<u8>>,
    children: Vec<Vec<(u8, S)>>,
    terms: Vec<Vec<(PatternID, PatternLength)>>,
    root_id: S,
    window_len: usize,
    _patterns: std::marker::PhantomData<&'p [u8]>,
}

impl<'p, S: StateID> Trie<'p, S> {
    fn add_node(&mut self, parent: Option<S>, parent_symbol: Option<u8>) -> S {
        let id = usize_to_state_id(self.parent.len()).unwrap_or_else(|| {
            panic!(
                "trie grew past the largest state id representable by {}",
                std::any::type_name::<S>()
            )
        });
        self.parent.push(parent);
        self.parent_symbol.push(parent_symbol);
        self.children.push(Vec::new());
        self.terms.push(Vec::new());
        id
    }

    fn child(&self, node: S, symbol: u8) -> Option<S> {
        let children = &self.children[node.to_usize()];
        children
            .binary_search_by_key(&symbol, |&(s, _)| s)
            .ok()
            .map(|i| children[i].1)
    }

    fn set_child(&mut self, node: S, symbol: u8, child: S) {
        let children = &mut self.children[node.to_usize()];
        match children.binary_search_by_key(&symbol, |&(s, _)| s) {
            Ok(i) => children[i].1 = child,
            Err(i) => children.insert(i, (symbol, child)),
        }
    }

    pub(crate) fn root_id(&self) -> S {
        self.root_id
    }

    pub(crate) fn window_len(&self) -> usize {
        self.window_len
    }

    pub(crate) fn node_count(&self) -> usize {
        self.parent.len()
    }

    pub(crate) fn parent_of(&self, node: S) -> Option<S> {
        self.parent[node.to_usize()]
    }

    pub(crate) fn parent_symbol_of(&self, node: S) -> Option<u8> {
        self.parent_symbol[node.to_usize()]
    }

    pub(crate) fn children_of(&self, node: S) -> &[(u8, S)] {
        &self.children[node.to_usize()]
    }

    pub(crate) fn terms_of(&self, node: S) -> &[(PatternID, PatternLength)] {
        &self.terms[node.to_usize()]
    }

    /// All node ids, in the dense order they were assigned during insertion.
    pub(crate) fn node_ids(&self) -> impl Iterator<Item = S> + '_ {
        (0..self.node_count()).map(|i| usize_to_state_id::<S>(i).expect("id was valid on insertion"))
    }

    /// Breadth-first order over every non-root node.
    ///
    /// Deterministic given each node's children insertion order, independent
    /// of the order ids happened to be assigned in during the per-pattern
    /// descents that built the trie.
    pub(crate) fn bfs_order(&self) -> Vec<S> {
        let mut order = Vec::with_capacity(self.node_count().saturating_sub(1));
        let mut queue = VecDeque::new();
        queue.push_back(self.root_id);
        while let Some(node) = queue.pop_front() {
            for &(_, child) in self.children_of(node) {
                order.push(child);
                queue.push_back(child);
            }
        }
        order
    }
}

/// Builds the reversed-prefix trie over `patterns`, each clipped to its first
/// `window_len` bytes and walked in reverse.
///
/// `patterns` must already be deduplicated and non-empty, and every pattern
/// must be at least `window_len` bytes long; the public entry points enforce
/// this before calling in.
pub(crate) fn build_trie<'p, S: StateID>(patterns: &[&'p [u8]], window_len: usize) -> Trie<'p, S> {
    let mut trie = Trie {
        parent: Vec::new(),
        parent_symbol: Vec::new(),
        children: Vec::new(),
        terms: Vec::new(),
        root_id: usize_to_state_id(0).expect("0 always fits a StateID"),
        window_len,
        _patterns: std::marker::PhantomData,
    };
    let root = trie.add_node(None, None);
    debug_assert_eq!(root, trie.root_id);

    for (pattern_id, &pattern) in patterns.iter().enumerate() {
        let prefix = &pattern[..window_len];
        let mut node = root;
        for &symbol in prefix.iter().rev() {
            node = match trie.child(node, symbol) {
                Some(existing) => existing,
                None => {
                    let child = trie.add_node(Some(node), Some(symbol));
                    trie.set_child(node, symbol, child);
                    child
                }
            };
        }
        trie.terms[node.to_usize()].push((pattern_id, pattern.len()));
    }

    log::debug!(
        "built reversed-prefix trie: {} nodes over {} patterns, window_len={}",
        trie.node_count(),
        patterns.len(),
        window_len
    );

    trie
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build<'p>(patterns: &[&'p str]) -> Trie<'p, usize> {
        let bytes: Vec<&'p [u8]> = patterns.iter().map(|p| p.as_bytes()).collect();
        let window_len = bytes.iter().map(|p| p.len()).min().unwrap();
        build_trie(&bytes, window_len)
    }

    #[test]
    fn single_pattern_is_a_linear_path() {
        let trie = build(&["abc"]);
        // root + 3 nodes on the single path
        assert_eq!(trie.node_count(), 4);
        assert_eq!(trie.bfs_order().len(), 3);
    }

    #[test]
    fn shared_reversed_prefix_shares_a_path() {
        // reversed prefixes (len 3): "abc" -> "cba", "aabc" clipped to "aab" -> "baa"
        // "aabc" and "abc" do NOT share a reversed prefix; use two that do.
        let trie = build(&["abc", "xbc"]);
        // reversed prefixes: "cba", "cbx" -> share the "c", "b" path, diverge at depth 2
        assert_eq!(trie.node_count(), 1 + 2 + 2); // root, c, b, (a, x)
    }

    #[test]
    fn terminal_terms_hold_every_pattern_sharing_a_reversed_prefix() {
        // Both patterns have "abc" as their first 3 bytes, so they share the
        // reversed prefix "cba" and terminate at the same trie node.
        let trie = build(&["abc", "abcxyz"]);
        let leaf = trie
            .node_ids()
            .find(|&id| !trie.terms_of(id).is_empty())
            .expect("a terminal node must exist");
        let mut ids: Vec<_> = trie.terms_of(leaf).iter().map(|&(id, _)| id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn window_len_one_is_a_single_level_fan_out() {
        let trie = build(&["a", "b", "c"]);
        assert_eq!(trie.node_count(), 4); // root + 3 children, no grandchildren
        for &(_, child) in trie.children_of(trie.root_id()) {
            assert!(trie.children_of(child).is_empty());
            assert_eq!(trie.terms_of(child).len(), 1);
        }
    }

    #[test]
    fn root_to_leaf_path_reversed_is_a_pattern_prefix() {
        let trie = build(&["hello"]);
        let mut node = trie
            .node_ids()
            .find(|&id| !trie.terms_of(id).is_empty())
            .unwrap();
        let mut reversed_path = Vec::new();
        while let Some(sym) = trie.parent_symbol_of(node) {
            reversed_path.push(sym);
            node = trie.parent_of(node).unwrap();
        }
        reversed_path.reverse();
        assert_eq!(reversed_path, b"hello".to_vec());
    }
}
