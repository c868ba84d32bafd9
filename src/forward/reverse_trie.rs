//! Reverse trie: target prefix -> sources redirected to it

use super::digits::digit_char;
use super::numbers::PhoneNumbers;
use super::trie::{NodeId, ROOT, Trie};
use crate::errors::Result;

/// Trie keyed by target prefix. A node's list holds every source prefix
/// currently redirected to exactly that target. Lists are created on first
/// insert and dropped as soon as they become empty.
#[derive(Debug, Clone, Default)]
pub(crate) struct ReverseTrie {
    trie: Trie<PhoneNumbers>,
}

impl ReverseTrie {
    pub fn new() -> Self {
        Self { trie: Trie::new() }
    }

    pub fn try_new() -> Result<Self> {
        Ok(Self {
            trie: Trie::try_new()?,
        })
    }

    /// Make the node for `target` exist and guarantee that one more source can
    /// be inserted into its list without allocating.
    ///
    /// On failure only empty structural nodes may have been added; no list is
    /// left behind empty.
    pub fn prepare(&mut self, target: &str) -> Result<NodeId> {
        self.trie.try_reserve(target.len())?;
        let id = self.trie.ensure_path(target);
        match self.trie.payload_mut(id) {
            Some(list) => list.try_reserve_one()?,
            None => {
                let list = PhoneNumbers::try_with_slot()?;
                self.trie.replace_payload(id, list);
            }
        }
        Ok(id)
    }

    /// Record `source` at a node obtained from [`ReverseTrie::prepare`].
    pub fn insert_prepared(&mut self, id: NodeId, source: String) {
        if let Some(list) = self.trie.payload_mut(id) {
            list.insert(source);
        }
    }

    /// Forget that `source` redirects to `target`, dropping the list if it
    /// becomes empty.
    pub fn remove(&mut self, target: &str, source: &str) -> bool {
        let Some(id) = self.trie.find(target) else {
            return false;
        };
        let Some(list) = self.trie.payload_mut(id) else {
            return false;
        };
        let removed = list.remove(source);
        if list.is_empty() {
            self.trie.take_payload(id);
        }
        removed
    }

    /// Sources redirected to exactly `target`.
    pub fn sources(&self, target: &str) -> Option<&PhoneNumbers> {
        self.trie.find(target).and_then(|id| self.trie.payload(id))
    }

    /// All numbers that could forward into `num`, `num` itself included.
    ///
    /// For every prefix of `num` that is a redirection target, each recorded
    /// source followed by the rest of `num` is a candidate.
    pub fn reverse(&self, num: &str) -> PhoneNumbers {
        let mut result = PhoneNumbers::single(num.to_string());
        for (depth, id) in self.trie.path(num) {
            let Some(sources) = self.trie.payload(id) else {
                continue;
            };
            let suffix = &num[depth..];
            for source in sources.iter() {
                let mut candidate = String::with_capacity(source.len() + suffix.len());
                candidate.push_str(source);
                candidate.push_str(suffix);
                result.insert(candidate);
            }
        }
        result
    }

    #[inline]
    pub(crate) fn child(&self, id: NodeId, code: usize) -> Option<NodeId> {
        self.trie.child(id, code)
    }

    /// Whether the node carries a (necessarily non-empty) source list.
    #[inline]
    pub(crate) fn has_sources(&self, id: NodeId) -> bool {
        self.trie.payload(id).is_some_and(|list| !list.is_empty())
    }

    /// Every `(target, source)` pair recorded, plus the number of lists found
    /// empty (always 0 when the structure is consistent).
    pub(crate) fn entries(&self) -> (Vec<(String, String)>, usize) {
        let mut pairs = Vec::new();
        let mut empty_lists = 0;
        let mut path = String::new();
        let mut stack: Vec<(NodeId, usize, Option<usize>)> = vec![(ROOT, 0, None)];
        while let Some((id, parent_len, code)) = stack.pop() {
            path.truncate(parent_len);
            if let Some(code) = code {
                path.push(digit_char(code));
            }
            if let Some(list) = self.trie.payload(id) {
                if list.is_empty() {
                    empty_lists += 1;
                }
                pairs.extend(list.iter().map(|s| (path.clone(), s.to_string())));
            }
            for (code, child) in self.trie.children(id) {
                stack.push((child, path.len(), Some(code)));
            }
        }
        (pairs, empty_lists)
    }

    pub fn node_count(&self) -> usize {
        self.trie.node_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(trie: &mut ReverseTrie, target: &str, source: &str) {
        let id = trie.prepare(target).unwrap();
        trie.insert_prepared(id, source.to_string());
    }

    #[test]
    fn test_insert_and_sources() {
        let mut trie = ReverseTrie::new();
        add(&mut trie, "602", "601");
        add(&mut trie, "602", "600");

        let sources: Vec<&str> = trie.sources("602").unwrap().iter().collect();
        assert_eq!(sources, vec!["600", "601"]);
        assert!(trie.sources("60").is_none());
    }

    #[test]
    fn test_remove_drops_empty_list() {
        let mut trie = ReverseTrie::new();
        add(&mut trie, "5", "1");
        assert!(trie.remove("5", "1"));
        assert!(trie.sources("5").is_none());
        assert!(!trie.remove("5", "1"));
        assert!(!trie.remove("77", "1"));
    }

    #[test]
    fn test_reverse_includes_identity() {
        let trie = ReverseTrie::new();
        let result = trie.reverse("123");
        assert_eq!(result.len(), 1);
        assert_eq!(result.get(0), Some("123"));
    }

    #[test]
    fn test_reverse_appends_suffix() {
        let mut trie = ReverseTrie::new();
        add(&mut trie, "2", "22");
        add(&mut trie, "23", "9");

        let result = trie.reverse("234").into_vec();
        assert_eq!(result, vec!["2234", "234", "94"]);
    }

    #[test]
    fn test_prepare_twice_keeps_single_list() {
        let mut trie = ReverseTrie::new();
        let a = trie.prepare("12").unwrap();
        let b = trie.prepare("12").unwrap();
        assert_eq!(a, b);
        trie.insert_prepared(a, "3".to_string());
        assert_eq!(trie.sources("12").unwrap().len(), 1);
    }

    #[test]
    fn test_entries_lists_every_pair() {
        let mut trie = ReverseTrie::new();
        add(&mut trie, "1", "5");
        add(&mut trie, "12", "6");
        add(&mut trie, "12", "7");
        let (mut pairs, empty) = trie.entries();
        pairs.sort();
        assert_eq!(empty, 0);
        assert_eq!(
            pairs,
            vec![
                ("1".to_string(), "5".to_string()),
                ("12".to_string(), "6".to_string()),
                ("12".to_string(), "7".to_string()),
            ]
        );
    }
}
