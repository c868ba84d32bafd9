//! Index-addressed node arena shared by the forward and reverse tries
//!
//! Nodes live in one `Vec` and refer to their children by index. Slot 0 is
//! the synthetic root, which is never recycled. Removed subtrees go to a free
//! list and are reused by later insertions.

use super::digits::{ALPHABET_SIZE, codes};
use crate::errors::{PhoneForwardError, Result};

pub(crate) type NodeId = usize;

pub(crate) const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
struct Node<P> {
    children: [Option<NodeId>; ALPHABET_SIZE],
    payload: Option<P>,
}

impl<P> Node<P> {
    fn new() -> Self {
        Self {
            children: [None; ALPHABET_SIZE],
            payload: None,
        }
    }
}

/// A digit-indexed tree whose nodes may each carry one payload `P`.
///
/// A node's key is the sequence of digit codes on the path from the root.
#[derive(Debug, Clone)]
pub(crate) struct Trie<P> {
    nodes: Vec<Node<P>>,
    free_list: Vec<NodeId>,
}

impl<P> Trie<P> {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            free_list: Vec::new(),
        }
    }

    pub fn try_new() -> Result<Self> {
        let mut nodes = Vec::new();
        nodes
            .try_reserve(1)
            .map_err(|e| PhoneForwardError::resource_exhausted(e.to_string()))?;
        nodes.push(Node::new());
        Ok(Self {
            nodes,
            free_list: Vec::new(),
        })
    }

    /// Make sure `additional` new nodes can be created without reallocating.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let needed = additional.saturating_sub(self.free_list.len());
        self.nodes
            .try_reserve(needed)
            .map_err(|e| PhoneForwardError::resource_exhausted(e.to_string()))
    }

    #[inline]
    pub fn child(&self, id: NodeId, code: usize) -> Option<NodeId> {
        self.nodes[id].children[code]
    }

    /// Present children of `id` as `(digit code, child id)`, ascending by code.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (usize, NodeId)> + '_ {
        self.nodes[id]
            .children
            .iter()
            .enumerate()
            .filter_map(|(code, child)| child.map(|c| (code, c)))
    }

    #[inline]
    pub fn payload(&self, id: NodeId) -> Option<&P> {
        self.nodes[id].payload.as_ref()
    }

    #[inline]
    pub fn payload_mut(&mut self, id: NodeId) -> Option<&mut P> {
        self.nodes[id].payload.as_mut()
    }

    /// Install `payload` at `id`, returning the previous one.
    pub fn replace_payload(&mut self, id: NodeId, payload: P) -> Option<P> {
        self.nodes[id].payload.replace(payload)
    }

    pub fn take_payload(&mut self, id: NodeId) -> Option<P> {
        self.nodes[id].payload.take()
    }

    /// Node addressed by `key`, if the whole path exists.
    pub fn find(&self, key: &str) -> Option<NodeId> {
        codes(key).try_fold(ROOT, |id, code| self.child(id, code))
    }

    /// Like [`Trie::find`], also returning the parent and the last digit code
    /// so the caller can detach the node. `key` must be non-empty.
    pub fn find_with_parent(&self, key: &str) -> Option<(NodeId, usize, NodeId)> {
        let mut parent = ROOT;
        let mut id = ROOT;
        let mut last = None;
        for code in codes(key) {
            parent = id;
            id = self.child(id, code)?;
            last = Some(code);
        }
        last.map(|code| (parent, code, id))
    }

    /// Nodes visited while following `key` from the root, paired with the
    /// number of digits consumed to reach them. Stops at the first missing
    /// child.
    pub fn path<'a>(&'a self, key: &'a str) -> impl Iterator<Item = (usize, NodeId)> + 'a {
        let mut current = Some(ROOT);
        codes(key).enumerate().map_while(move |(i, code)| {
            let next = self.child(current?, code)?;
            current = Some(next);
            Some((i + 1, next))
        })
    }

    /// Walk `key`, creating missing nodes, and return the node it addresses.
    ///
    /// Never fails once [`Trie::try_reserve`] succeeded for `key.len()` nodes.
    pub fn ensure_path(&mut self, key: &str) -> NodeId {
        let mut id = ROOT;
        for code in codes(key) {
            id = match self.child(id, code) {
                Some(next) => next,
                None => {
                    let next = self.allocate_node();
                    self.nodes[id].children[code] = Some(next);
                    next
                }
            };
        }
        id
    }

    /// Unlink the child of `parent` at `code`, returning it.
    pub fn detach(&mut self, parent: NodeId, code: usize) -> Option<NodeId> {
        self.nodes[parent].children[code].take()
    }

    /// Release every node of the (already detached) subtree rooted at `id`,
    /// dropping their payloads.
    pub fn recycle_subtree(&mut self, id: NodeId) -> usize {
        debug_assert_ne!(id, ROOT);
        let mut released = 0;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = std::mem::replace(&mut self.nodes[current], Node::new());
            stack.extend(node.children.iter().flatten().copied());
            self.free_list.push(current);
            released += 1;
        }
        released
    }

    /// Number of reachable nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    fn allocate_node(&mut self) -> NodeId {
        if let Some(id) = self.free_list.pop() {
            id
        } else {
            self.nodes.push(Node::new());
            self.nodes.len() - 1
        }
    }
}

impl<P> Default for Trie<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_path_and_find() {
        let mut trie: Trie<u32> = Trie::new();
        let id = trie.ensure_path("123");
        trie.replace_payload(id, 7);

        assert_eq!(trie.find("123"), Some(id));
        assert_eq!(trie.payload(id), Some(&7));
        assert!(trie.find("12").is_some());
        assert!(trie.find("124").is_none());
        assert_eq!(trie.node_count(), 4);
    }

    #[test]
    fn test_ensure_path_reuses_existing_nodes() {
        let mut trie: Trie<u32> = Trie::new();
        let a = trie.ensure_path("55");
        let b = trie.ensure_path("55");
        assert_eq!(a, b);
        trie.ensure_path("56");
        assert_eq!(trie.node_count(), 4);
    }

    #[test]
    fn test_path_stops_at_missing_child() {
        let mut trie: Trie<u32> = Trie::new();
        trie.ensure_path("12");
        let depths: Vec<usize> = trie.path("1299").map(|(depth, _)| depth).collect();
        assert_eq!(depths, vec![1, 2]);
        assert_eq!(trie.path("9").count(), 0);
    }

    #[test]
    fn test_recycle_subtree_reuses_slots() {
        let mut trie: Trie<u32> = Trie::new();
        trie.ensure_path("1234");
        let (parent, code, id) = trie.find_with_parent("12").unwrap();
        assert_eq!(trie.detach(parent, code), Some(id));
        assert_eq!(trie.recycle_subtree(id), 3);
        assert_eq!(trie.node_count(), 2);
        assert!(trie.find("12").is_none());

        let before = trie.nodes.len();
        trie.ensure_path("199");
        assert_eq!(trie.nodes.len(), before);
    }

    #[test]
    fn test_find_with_parent_rejects_empty_key() {
        let trie: Trie<u32> = Trie::new();
        assert!(trie.find_with_parent("").is_none());
    }

    #[test]
    fn test_children_ascending() {
        let mut trie: Trie<u32> = Trie::new();
        trie.ensure_path(";");
        trie.ensure_path("3");
        trie.ensure_path("0");
        let codes: Vec<usize> = trie.children(ROOT).map(|(code, _)| code).collect();
        assert_eq!(codes, vec![0, 3, 11]);
    }
}
