//! Prefix expansion over the term trie.

use crate::index::trie::{NodeId, Trie};

/// Expand a prefix into every stored term extending it.
///
/// Locates the node for the exact prefix, then walks its subtree in
/// preorder, emitting each node that has a posting head together with the
/// accumulated term string. A missing prefix yields an empty result.
///
/// The exact prefix, when stored, is always emitted first because a node is
/// visited before its descendants. Beyond that, output order follows the
/// child/sibling structure as built by the index and is not sorted.
///
/// Liveness of the postings is not verified here; an expansion whose
/// postings are all stale is weeded out by the scanner.
pub fn expand_prefix(trie: &Trie, prefix: &str) -> Vec<(String, NodeId)> {
    let Some(start) = trie.lookup(prefix) else {
        return Vec::new();
    };

    let mut expansions = Vec::new();
    let mut term = String::from(prefix);
    collect(trie, start, &mut term, &mut expansions);
    expansions
}

fn collect(trie: &Trie, node: NodeId, term: &mut String, out: &mut Vec<(String, NodeId)>) {
    if trie.node(node).posting_head.is_some() {
        out.push((term.clone(), node));
    }

    let mut child = trie.node(node).first_child;
    while let Some(id) = child {
        let node = trie.node(id);
        term.push(node.code);
        collect(trie, id, term, out);
        term.pop();
        child = node.next_sibling;
    }
}
