//! Posting list scanning with lazy deletion.

use ahash::AHashSet;

use crate::index::inverted_index::InvertedIndex;
use crate::index::posting::PostingId;
use crate::index::trie::NodeId;
use crate::index::types::DocId;

/// Walk the posting list headed at `node` once, unlinking stale entries.
///
/// Any posting whose document is in `removed` is physically unlinked: the
/// node's posting head is advanced when the first entry dies, otherwise the
/// previous survivor's next-link skips it. The excision outlives the query;
/// later queries over the same term never see the removed entries again.
///
/// Returns the ids of the surviving postings in list order. Their count is
/// the term's document frequency. With no removed set the pass performs no
/// membership checks and every posting survives.
pub fn scan_postings(
    index: &mut InvertedIndex,
    node: NodeId,
    removed: Option<&AHashSet<DocId>>,
) -> Vec<PostingId> {
    let mut survivors = Vec::new();
    let mut prev: Option<PostingId> = None;
    let mut current = index.trie.node(node).posting_head;

    while let Some(id) = current {
        let posting = index.postings.get(id);
        let next = posting.next;
        let dead = removed.is_some_and(|set| set.contains(&posting.doc_id));

        if dead {
            match prev {
                None => index.trie.node_mut(node).posting_head = next,
                Some(prev_id) => index.postings.get_mut(prev_id).next = next,
            }
        } else {
            survivors.push(id);
            prev = Some(id);
        }

        current = next;
    }

    survivors
}
