//! Phone number forwarding index
//!
//! [`PhoneForward`] keeps two tries in lockstep:
//! - the forward trie maps a source prefix to its target and answers
//!   longest-prefix `get` queries;
//! - the reverse trie maps a target prefix to the sources redirected to it
//!   and answers `reverse` and `non_trivial_count`.
//!
//! Every successful `add`/`remove` leaves both tries describing exactly the
//! same set of `(source, target)` pairs.

pub mod count;
pub mod digits;
mod forward_trie;
pub mod numbers;
mod reverse_trie;
mod trie;

pub use count::OverflowPolicy;
pub use digits::{ALPHABET_SIZE, is_number};
pub use numbers::PhoneNumbers;

use forward_trie::ForwardTrie;
use reverse_trie::ReverseTrie;
use tracing::debug;

use crate::errors::{PhoneForwardError, Result};

/// Bidirectional prefix-redirection index.
#[derive(Debug, Clone, Default)]
pub struct PhoneForward {
    forward: ForwardTrie,
    reverse: ReverseTrie,
    redirections: usize,
}

impl PhoneForward {
    /// Create an index with no redirections.
    pub fn new() -> Self {
        Self {
            forward: ForwardTrie::new(),
            reverse: ReverseTrie::new(),
            redirections: 0,
        }
    }

    /// Like [`PhoneForward::new`], reporting allocation failure as
    /// [`PhoneForwardError::ResourceExhausted`].
    pub fn try_new() -> Result<Self> {
        Ok(Self {
            forward: ForwardTrie::try_new()?,
            reverse: ReverseTrie::try_new()?,
            redirections: 0,
        })
    }

    /// Redirect every number starting with `source` to the same number with
    /// that prefix replaced by `target`. Replaces any earlier redirection of
    /// exactly `source`.
    ///
    /// Fails with `InvalidArgument` if either string is not a number or both
    /// are equal, and with `ResourceExhausted` if memory runs out; in both
    /// cases the index is left unchanged.
    pub fn add(&mut self, source: &str, target: &str) -> Result<()> {
        if !is_number(source) || !is_number(target) {
            return Err(PhoneForwardError::invalid_argument(
                "redirection endpoints must be non-empty digit strings",
            ));
        }
        if source == target {
            return Err(PhoneForwardError::invalid_argument(
                "a number cannot be redirected to itself",
            ));
        }

        // Every allocation happens before the first mutation.
        self.forward.try_reserve(source.len())?;
        let owned_target = try_to_owned(target)?;
        let owned_source = try_to_owned(source)?;
        let slot = self.reverse.prepare(target)?;

        match self.forward.assign(source, owned_target) {
            Some(old_target) => {
                if old_target != target {
                    self.reverse.remove(&old_target, source);
                }
                debug!(source, old_target = %old_target, target, "redirection overwritten");
            }
            None => {
                self.redirections += 1;
                debug!(source, target, "redirection added");
            }
        }
        self.reverse.insert_prepared(slot, owned_source);
        Ok(())
    }

    /// Remove every redirection whose source starts with `prefix`.
    ///
    /// Invalid or unknown prefixes are ignored.
    pub fn remove(&mut self, prefix: &str) {
        if !is_number(prefix) {
            return;
        }
        let reverse = &mut self.reverse;
        let removed = self.forward.remove_subtree(prefix, |source, target| {
            reverse.remove(target, source);
        });
        self.redirections -= removed;
        if removed > 0 {
            debug!(prefix, removed, "redirections removed");
        }
    }

    /// Where `num` is forwarded to: the longest redirected prefix of `num`
    /// is replaced by its target. A number without any matching prefix
    /// forwards to itself.
    ///
    /// Returns an empty list if `num` is not a number, one entry otherwise.
    pub fn get(&self, num: &str) -> PhoneNumbers {
        if !is_number(num) {
            return PhoneNumbers::new();
        }
        let forwarded = match self.forward.longest_match(num) {
            Some((matched, target)) => {
                let mut out = String::with_capacity(target.len() + num.len() - matched);
                out.push_str(target);
                out.push_str(&num[matched..]);
                out
            }
            None => num.to_string(),
        };
        PhoneNumbers::single(forwarded)
    }

    /// Numbers that may be forwarded to `num`, `num` included, sorted and
    /// without duplicates.
    ///
    /// Returns an empty list if `num` is not a number.
    pub fn reverse(&self, num: &str) -> PhoneNumbers {
        if !is_number(num) {
            return PhoneNumbers::new();
        }
        self.reverse.reverse(num)
    }

    /// How many numbers of length `len`, using only the digits found in
    /// `set`, have a prefix that is a redirection target. Saturates at
    /// `u64::MAX`.
    pub fn non_trivial_count(&self, set: &str, len: usize) -> u64 {
        self.non_trivial_count_with(set, len, OverflowPolicy::Saturate)
    }

    /// [`PhoneForward::non_trivial_count`] with an explicit overflow policy.
    pub fn non_trivial_count_with(&self, set: &str, len: usize, policy: OverflowPolicy) -> u64 {
        count::non_trivial_count(&self.reverse, set, len, policy)
    }

    /// Number of active redirections.
    pub fn len(&self) -> usize {
        self.redirections
    }

    pub fn is_empty(&self) -> bool {
        self.redirections == 0
    }

    /// Target redirected to from exactly `source`, ignoring shorter prefixes.
    pub fn target_of(&self, source: &str) -> Option<&str> {
        self.forward.target(source)
    }

    /// Sources redirected to exactly `target`.
    pub fn sources_of(&self, target: &str) -> Option<&PhoneNumbers> {
        self.reverse.sources(target)
    }

    /// Current `(source, target)` pairs, ordered by source.
    pub fn redirections(&self) -> Vec<(String, String)> {
        self.forward.redirections()
    }

    /// Verify that both tries describe the same redirections.
    pub fn check_invariants(&self) -> Result<()> {
        let mut forward = self.forward.redirections();
        let (reverse, empty_lists) = self.reverse.entries();
        let mut reverse: Vec<(String, String)> =
            reverse.into_iter().map(|(target, source)| (source, target)).collect();
        forward.sort();
        reverse.sort();

        if empty_lists > 0 {
            return Err(PhoneForwardError::inconsistent(format!(
                "{} empty source lists left in the reverse trie",
                empty_lists
            )));
        }
        if forward != reverse {
            return Err(PhoneForwardError::inconsistent(format!(
                "forward trie holds {} redirections, reverse trie {}, or they disagree",
                forward.len(),
                reverse.len()
            )));
        }
        if forward.len() != self.redirections {
            return Err(PhoneForwardError::inconsistent(format!(
                "redirection counter is {} but {} are stored",
                self.redirections,
                forward.len()
            )));
        }
        Ok(())
    }

    /// Live nodes in the forward and reverse tries, roots included.
    pub fn node_counts(&self) -> (usize, usize) {
        (self.forward.node_count(), self.reverse.node_count())
    }
}

fn try_to_owned(s: &str) -> Result<String> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(s.len())
        .map_err(|e| PhoneForwardError::resource_exhausted(e.to_string()))?;
    owned.push_str(s);
    Ok(owned)
}
