//! Arena-allocated term trie.
//!
//! Each node represents one character extending its parent's prefix. Nodes
//! link to their first child and to their next sibling (the next node at
//! the same depth under the same parent), and optionally point at the head
//! of a posting list when the prefix ending at the node is a stored term.
//!
//! A node with no posting head may still have children: longer terms exist
//! as extensions of a prefix that no document contains verbatim.

use crate::index::posting::PostingId;

/// Index of a node in the trie arena.
pub type NodeId = u32;

/// One node of the term trie.
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// The character this node contributes to the prefix.
    pub code: char,

    /// First child node, if any.
    pub first_child: Option<NodeId>,

    /// Next sibling node under the same parent, if any.
    pub next_sibling: Option<NodeId>,

    /// Head of the posting list for the exact term ending here.
    ///
    /// `None` means no document contains this exact term.
    pub posting_head: Option<PostingId>,
}

impl TrieNode {
    fn new(code: char) -> Self {
        TrieNode {
            code,
            first_child: None,
            next_sibling: None,
            posting_head: None,
        }
    }
}

/// A trie over all indexed terms, stored in a flat arena.
///
/// The arena is append-only; node 0 is the root and carries no character.
#[derive(Debug)]
pub struct Trie {
    /// Node arena. `nodes[0]` is the root.
    nodes: Vec<TrieNode>,
}

impl Trie {
    /// Create a new trie containing only the root node.
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::new('\0')],
        }
    }

    /// Get the root node id.
    pub fn root(&self) -> NodeId {
        0
    }

    /// Get a shared reference to a node.
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id as usize]
    }

    /// Get a mutable reference to a node.
    pub fn node_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id as usize]
    }

    /// Number of nodes in the arena, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the trie holds any term nodes besides the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Find the child of `parent` carrying `code`, walking the sibling chain.
    fn child_with_code(&self, parent: NodeId, code: char) -> Option<NodeId> {
        let mut current = self.node(parent).first_child;
        while let Some(id) = current {
            let node = self.node(id);
            if node.code == code {
                return Some(id);
            }
            current = node.next_sibling;
        }
        None
    }

    /// Locate the node for the exact string `term`.
    ///
    /// Returns `None` if any character along the path is absent. The
    /// returned node may or may not have a posting head.
    pub fn lookup(&self, term: &str) -> Option<NodeId> {
        let mut current = self.root();
        for code in term.chars() {
            current = self.child_with_code(current, code)?;
        }
        Some(current)
    }

    /// Walk to the node for `term`, creating nodes as needed.
    ///
    /// New children are prepended to the parent's child list, so sibling
    /// order reflects insertion history, not any sorted order.
    pub fn insert(&mut self, term: &str) -> NodeId {
        let mut current = self.root();
        for code in term.chars() {
            current = match self.child_with_code(current, code) {
                Some(id) => id,
                None => {
                    let id = self.nodes.len() as NodeId;
                    let mut node = TrieNode::new(code);
                    node.next_sibling = self.node(current).first_child;
                    self.nodes.push(node);
                    self.node_mut(current).first_child = Some(id);
                    id
                }
            };
        }
        current
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
