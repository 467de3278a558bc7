//! Clause detection
//!
//! Picks the clause roots of a sentence and resolves them left to right,
//! threading a covered set through the resolutions so no token is claimed
//! twice.

use super::{
    boundary::{resolve_clause, PositionSet},
    types::{Clause, ClauseType},
};
use crate::{language::LanguageProfile, tree::DependencyTree};
use tracing::{debug, trace, warn};

/// Clause-root positions in ascending order
///
/// A token qualifies when its label can head a clause and it is verb-like.
/// When nothing qualifies the syntactic root stands in. The fallback root can
/// still resolve to nothing: a sentence made only of punctuation (a lone
/// `...`) yields zero clauses, and [`detect_clauses`] returns an empty list.
pub fn candidate_roots(tree: &DependencyTree, profile: &LanguageProfile) -> Vec<usize> {
    let roots: Vec<usize> = tree
        .tokens()
        .iter()
        .filter(|token| profile.is_clause_root_label(token.dependency_label()))
        .map(|token| token.position())
        .filter(|&pos| profile.is_verb_like(tree, pos))
        .collect();

    if roots.is_empty() {
        vec![tree.root()]
    } else {
        roots
    }
}

/// Segment a sentence into typed clauses, ordered by `span.start`
pub fn detect_clauses(tree: &DependencyTree, profile: &LanguageProfile) -> Vec<Clause> {
    let roots = candidate_roots(tree, profile);

    let mut candidates = PositionSet::with_capacity(tree.len());
    candidates.extend(roots.iter().copied());

    let mut covered = PositionSet::with_capacity(tree.len());
    let mut clauses = Vec::with_capacity(roots.len());

    for root in roots {
        let Some(resolved) = resolve_clause(root, tree, profile, &candidates, &covered) else {
            debug!(root, "clause root resolved to an empty span; dropped");
            continue;
        };

        let token = tree.token(root);
        let clause_type =
            if root == tree.root() || profile.is_independent_label(token.dependency_label()) {
                ClauseType::Independent
            } else {
                ClauseType::Dependent
            };

        trace!(root, span = %resolved.span, %clause_type, "clause");

        covered.extend(resolved.members.iter());
        clauses.push(Clause {
            span: resolved.span,
            clause_type,
            root_position: root,
            text: tree.text_of(resolved.span),
        });
    }

    clauses.sort_by_key(|clause| clause.span.start);

    let overlaps = overlapping_pairs(&clauses);
    if !overlaps.is_empty() {
        warn!(
            sentence = %tree.text(),
            pairs = ?overlaps,
            "clause spans overlap; an embedded clause sits inside another clause's interval"
        );
    }

    clauses
}

/// Index pairs `(i, j)`, `i < j`, of clauses whose spans overlap
pub fn overlapping_pairs(clauses: &[Clause]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in clauses.iter().enumerate() {
        for (j, b) in clauses.iter().enumerate().skip(i + 1) {
            if a.span.overlaps(&b.span) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
