//! Clause boundary resolution
//!
//! For one clause root, work out which tokens belong to it: its subtree minus
//! the subtrees of nested clause roots, minus punctuation, plus an orphaned
//! marker or conjunction immediately to its left, minus anything an earlier
//! clause already claimed.

use super::types::Span;
use crate::{language::LanguageProfile, tree::DependencyTree};

/// Fixed-size set of token positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSet {
    bits: Vec<bool>,
    count: usize,
}

impl PositionSet {
    /// Empty set able to hold positions `0..capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: vec![false; capacity],
            count: 0,
        }
    }

    #[inline]
    pub fn contains(&self, position: usize) -> bool {
        self.bits.get(position).copied().unwrap_or(false)
    }

    /// Add a position; out-of-range positions are ignored
    pub fn insert(&mut self, position: usize) -> bool {
        match self.bits.get_mut(position) {
            Some(bit) if !*bit => {
                *bit = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, position: usize) -> bool {
        match self.bits.get_mut(position) {
            Some(bit) if *bit => {
                *bit = false;
                self.count -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Members in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(pos, &set)| set.then_some(pos))
    }

    pub fn min(&self) -> Option<usize> {
        self.bits.iter().position(|&set| set)
    }

    pub fn max(&self) -> Option<usize> {
        self.bits.iter().rposition(|&set| set)
    }
}

impl Extend<usize> for PositionSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for position in iter {
            self.insert(position);
        }
    }
}

/// Tokens owned by one clause and their bounding interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedClause {
    pub span: Span,
    /// Exactly the positions this clause claims; may have gaps
    pub members: PositionSet,
}

/// Bounding span of the clause headed by `root`, or `None` if nothing is left
///
/// `candidates` are all clause roots of the sentence; `covered` holds the
/// positions claimed by clauses emitted earlier.
pub fn resolve_span(
    root: usize,
    tree: &DependencyTree,
    profile: &LanguageProfile,
    candidates: &PositionSet,
    covered: &PositionSet,
) -> Option<Span> {
    resolve_clause(root, tree, profile, candidates, covered).map(|resolved| resolved.span)
}

/// Like [`resolve_span`], keeping the member positions
pub fn resolve_clause(
    root: usize,
    tree: &DependencyTree,
    profile: &LanguageProfile,
    candidates: &PositionSet,
    covered: &PositionSet,
) -> Option<ResolvedClause> {
    let mut members = PositionSet::with_capacity(tree.len());
    let mut nested = Vec::new();

    // Walk the subtree, stopping at other clause roots at any depth.
    let mut stack = vec![root];
    while let Some(pos) = stack.pop() {
        members.insert(pos);
        for &child in tree.children(pos) {
            if candidates.contains(child) {
                nested.push(child);
            } else {
                stack.push(child);
            }
        }
    }

    // A nested clause takes the introducers directly in front of it with it.
    // Punctuation is transparent: a comma may hang off either clause.
    for nested_root in nested {
        let mut cursor = tree
            .subtree(nested_root)
            .into_iter()
            .find(|&pos| !profile.is_punctuation(tree.token(pos)))
            .unwrap_or(nested_root);
        while cursor > 0 {
            let prev = cursor - 1;
            let token = tree.token(prev);
            if profile.is_punctuation(token) {
                cursor = prev;
                continue;
            }
            if !members.contains(prev) || !profile.is_introducer(token) {
                break;
            }
            members.remove(prev);
            cursor = prev;
        }
    }

    let punctuation: Vec<usize> = members
        .iter()
        .filter(|&pos| profile.is_punctuation(tree.token(pos)))
        .collect();
    for pos in punctuation {
        members.remove(pos);
    }

    let mut start = members.min()?;
    while start > 0 {
        let prev = start - 1;
        if covered.contains(prev)
            || members.contains(prev)
            || !profile.is_introducer(tree.token(prev))
        {
            break;
        }
        members.insert(prev);
        start = prev;
    }

    let claimed: Vec<usize> = members.iter().filter(|&pos| covered.contains(pos)).collect();
    for pos in claimed {
        members.remove(pos);
    }

    let span = Span::new(members.min()?, members.max()? + 1);
    Some(ResolvedClause { span, members })
}
