//! Counting numbers affected by at least one redirection

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::digits::digit_set;
use super::reverse_trie::ReverseTrie;
use super::trie::{NodeId, ROOT};

/// What to do when a count no longer fits in `u64`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OverflowPolicy {
    /// Clamp at `u64::MAX`.
    #[default]
    Saturate,
    /// Arithmetic modulo 2^64.
    Wrap,
}

impl OverflowPolicy {
    #[inline]
    fn add(self, a: u64, b: u64) -> u64 {
        match self {
            Self::Saturate => a.saturating_add(b),
            Self::Wrap => a.wrapping_add(b),
        }
    }

    #[inline]
    fn mul(self, a: u64, b: u64) -> u64 {
        match self {
            Self::Saturate => a.saturating_mul(b),
            Self::Wrap => a.wrapping_mul(b),
        }
    }

    /// `base^exp` by repeated squaring.
    pub fn pow(self, base: u64, mut exp: usize) -> u64 {
        let mut result = 1u64;
        let mut square = base;
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, square);
            }
            exp >>= 1;
            if exp > 0 {
                square = self.mul(square, square);
            }
        }
        result
    }
}

/// Count numbers of length `len`, built from the digits present in `set`,
/// that have some prefix which is a redirection target.
///
/// Once a node on the path carries sources, all `k^(len - level)`
/// completions below it are counted at once and the subtree is not
/// explored further, so no number is counted twice.
pub(crate) fn non_trivial_count(
    reverse: &ReverseTrie,
    set: &str,
    len: usize,
    policy: OverflowPolicy,
) -> u64 {
    if len == 0 {
        return 0;
    }
    let digits = digit_set(set);
    if digits.is_empty() {
        return 0;
    }
    let k = digits.len() as u64;

    let mut total = 0u64;
    let mut stack: Vec<(NodeId, usize)> = digits
        .iter()
        .filter_map(|&code| reverse.child(ROOT, code))
        .map(|id| (id, 1))
        .collect();

    while let Some((id, level)) = stack.pop() {
        if reverse.has_sources(id) && level <= len {
            total = policy.add(total, policy.pow(k, len - level));
        } else if level < len {
            stack.extend(
                digits
                    .iter()
                    .filter_map(|&code| reverse.child(id, code))
                    .map(|child| (child, level + 1)),
            );
        }
    }

    tracing::trace!(set, len, k, total, "non-trivial count");
    total
}
