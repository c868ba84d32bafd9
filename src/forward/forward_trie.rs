//! Forward trie: source prefix -> redirection target

use super::digits::digit_char;
use super::trie::{NodeId, ROOT, Trie};
use crate::errors::Result;

/// Trie keyed by source prefix. A node holds at most one target, the one
/// most recently assigned to that exact prefix.
#[derive(Debug, Clone, Default)]
pub(crate) struct ForwardTrie {
    trie: Trie<String>,
}

impl ForwardTrie {
    pub fn new() -> Self {
        Self { trie: Trie::new() }
    }

    pub fn try_new() -> Result<Self> {
        Ok(Self {
            trie: Trie::try_new()?,
        })
    }

    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.trie.try_reserve(additional)
    }

    /// Current target of exactly `source`, if any.
    pub fn target(&self, source: &str) -> Option<&str> {
        self.trie
            .find(source)
            .and_then(|id| self.trie.payload(id))
            .map(String::as_str)
    }

    /// Install `target` for `source`, returning the target it replaces.
    pub fn assign(&mut self, source: &str, target: String) -> Option<String> {
        let id = self.trie.ensure_path(source);
        self.trie.replace_payload(id, target)
    }

    /// Longest prefix of `num` carrying a redirection, as
    /// `(prefix length, target)`.
    pub fn longest_match<'a>(&'a self, num: &'a str) -> Option<(usize, &'a str)> {
        self.trie
            .path(num)
            .filter_map(|(depth, id)| self.trie.payload(id).map(|t| (depth, t.as_str())))
            .last()
    }

    /// Delete every redirection whose source is `prefix` or extends it.
    ///
    /// `on_removed(source, target)` is called once per deleted redirection
    /// with the full source rebuilt from the traversal path. Returns the
    /// number of redirections removed; 0 if no node exists for `prefix`.
    pub fn remove_subtree<F>(&mut self, prefix: &str, mut on_removed: F) -> usize
    where
        F: FnMut(&str, &str),
    {
        let Some((parent, code, subtree)) = self.trie.find_with_parent(prefix) else {
            return 0;
        };

        let mut removed = 0;
        self.for_each_redirection(subtree, prefix, |source, target| {
            on_removed(source, target);
            removed += 1;
        });

        self.trie.detach(parent, code);
        let released = self.trie.recycle_subtree(subtree);
        tracing::trace!(prefix, removed, released, "forward subtree released");
        removed
    }

    /// Every `(source, target)` pair stored, in lexicographic source order.
    pub fn redirections(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        self.for_each_redirection(ROOT, "", |source, target| {
            pairs.push((source.to_string(), target.to_string()));
        });
        pairs
    }

    pub fn node_count(&self) -> usize {
        self.trie.node_count()
    }

    /// Depth-first walk of the subtree at `start`, whose key is `prefix`.
    /// One growable path buffer is threaded through the walk; each stack
    /// entry records how long the buffer was at its parent.
    fn for_each_redirection<F>(&self, start: NodeId, prefix: &str, mut visit: F)
    where
        F: FnMut(&str, &str),
    {
        let mut path = String::with_capacity(prefix.len() * 2);
        path.push_str(prefix);

        let mut stack: Vec<(NodeId, usize, Option<usize>)> = vec![(start, prefix.len(), None)];
        while let Some((id, parent_len, code)) = stack.pop() {
            path.truncate(parent_len);
            if let Some(code) = code {
                path.push(digit_char(code));
            }

            if let Some(target) = self.trie.payload(id) {
                visit(&path, target);
            }

            // Reversed so lower digits are visited first.
            let children: Vec<(usize, NodeId)> = self.trie.children(id).collect();
            for (code, child) in children.into_iter().rev() {
                stack.push((child, path.len(), Some(code)));
            }
        }
    }
}
