//! Property-based tests for clause detection

use clausa_core::{
    analyze, candidate_roots, clause::resolve_clause, detect_clauses, get_profile,
    overlapping_pairs, sentence_type_for, ClauseType, DependencyTree, PositionSet, SentenceType,
    Token,
};
use proptest::prelude::*;
use proptest::sample::Index;

const LABELS: &[&str] = &[
    "ROOT", "conj", "advcl", "relcl", "ccomp", "xcomp", "mark", "cc", "nsubj", "dobj", "det",
    "punct", "cop", "advmod",
];

const POS: &[&str] = &["VERB", "AUX", "NOUN", "PRON", "ADJ", "SCONJ", "CCONJ", "DET", "PUNCT"];

/// Random well-formed tree: heads always point at a token placed earlier in
/// a random insertion order, so there is one root and no cycle.
fn arb_tree() -> impl Strategy<Value = DependencyTree> {
    (1usize..24)
        .prop_flat_map(|n| {
            (
                Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
                prop::collection::vec(any::<Index>(), n),
                prop::collection::vec(prop::sample::select(LABELS), n),
                prop::collection::vec(prop::sample::select(POS), n),
            )
        })
        .prop_map(|(order, picks, labels, pos)| {
            let n = order.len();
            let mut heads = vec![0; n];
            heads[order[0]] = order[0];
            for k in 1..n {
                heads[order[k]] = order[picks[k].index(k)];
            }

            let tokens = (0..n)
                .map(|i| Token::new(i, format!("w{i}"), pos[i], labels[i], heads[i]))
                .collect();
            DependencyTree::from_tokens(tokens).unwrap()
        })
}

fn push(tokens: &mut Vec<Token>, text: &str, pos: &str, dep: &str, head: usize) {
    let position = tokens.len();
    tokens.push(Token::new(position, text, pos, dep, head));
}

/// Coordinated chain `she said [that he was late] , and she said ...`
///
/// Each unit is `(has_subordinate, comma_on_next_conjunct)`. Every `and`
/// hangs off the first verb; a comma hangs off its own verb or the next one.
fn chain_tree(units: &[(bool, bool)]) -> DependencyTree {
    let mut said = Vec::with_capacity(units.len());
    let mut next = 0;
    for (unit, &(has_subordinate, _)) in units.iter().enumerate() {
        if unit > 0 {
            next += 1;
        }
        said.push(next + 1);
        next += if has_subordinate { 7 } else { 3 };
    }

    let first = said[0];
    let mut tokens = Vec::new();
    for (unit, &(has_subordinate, comma_on_next)) in units.iter().enumerate() {
        let verb = said[unit];
        if unit > 0 {
            push(&mut tokens, "and", "CCONJ", "cc", first);
        }
        push(&mut tokens, "she", "PRON", "nsubj", verb);
        if unit == 0 {
            push(&mut tokens, "said", "VERB", "ROOT", verb);
        } else {
            push(&mut tokens, "said", "VERB", "conj", first);
        }
        if has_subordinate {
            let was = verb + 3;
            push(&mut tokens, "that", "SCONJ", "mark", was);
            push(&mut tokens, "he", "PRON", "nsubj", was);
            push(&mut tokens, "was", "AUX", "ccomp", verb);
            push(&mut tokens, "late", "ADJ", "acomp", was);
        }
        let comma_head = match said.get(unit + 1) {
            Some(&following) if comma_on_next => following,
            _ => verb,
        };
        push(&mut tokens, ",", "PUNCT", "punct", comma_head);
    }

    DependencyTree::from_tokens(tokens).unwrap()
}

proptest! {
    #[test]
    fn prop_members_are_never_claimed_twice(tree in arb_tree()) {
        let profile = get_profile("en").unwrap();
        let roots = candidate_roots(&tree, &profile);

        let mut candidates = PositionSet::with_capacity(tree.len());
        candidates.extend(roots.iter().copied());
        let mut covered = PositionSet::with_capacity(tree.len());

        for root in roots {
            if let Some(resolved) = resolve_clause(root, &tree, &profile, &candidates, &covered) {
                for pos in resolved.members.iter() {
                    prop_assert!(!covered.contains(pos), "position {} claimed twice", pos);
                    prop_assert!(resolved.span.contains(pos));
                }
                covered.extend(resolved.members.iter());
            }
        }
    }

    #[test]
    fn prop_chain_spans_cover_every_word_once(
        units in prop::collection::vec(any::<(bool, bool)>(), 1..12)
    ) {
        let tree = chain_tree(&units);
        let profile = get_profile("en").unwrap();
        let clauses = detect_clauses(&tree, &profile);

        prop_assert!(overlapping_pairs(&clauses).is_empty());
        for token in tree.tokens() {
            let covering = clauses
                .iter()
                .filter(|c| c.span.contains(token.position()))
                .count();
            let expected = if profile.is_punctuation(token) { 0 } else { 1 };
            prop_assert_eq!(covering, expected, "token {}", token.position());
        }

        let subordinates = units.iter().filter(|(has_subordinate, _)| *has_subordinate).count();
        let independent = clauses.iter().filter(|c| c.is_independent()).count();
        prop_assert_eq!(independent, units.len());
        prop_assert_eq!(clauses.len() - independent, subordinates);
        for clause in clauses.iter().filter(|c| c.is_independent()).skip(1) {
            prop_assert!(clause.text.starts_with("and "), "{:?}", clause.text);
        }
    }


    #[test]
    fn prop_classification_is_total(independent in 0usize..64, dependent in 0usize..64) {
        let expected = match (independent, dependent) {
            (0, _) => SentenceType::Other,
            (1, 0) => SentenceType::Simple,
            (i, 0) if i >= 2 => SentenceType::Compound,
            (1, d) if d >= 1 => SentenceType::Complex,
            _ => SentenceType::CompoundComplex,
        };
        prop_assert_eq!(sentence_type_for(independent, dependent), expected);
    }

    #[test]
    fn prop_clauses_are_ordered_and_in_bounds(tree in arb_tree()) {
        let profile = get_profile("en").unwrap();
        let clauses = detect_clauses(&tree, &profile);

        for clause in &clauses {
            prop_assert!(!clause.span.is_empty());
            prop_assert!(clause.span.end <= tree.len());
            prop_assert_eq!(&clause.text, &tree.text_of(clause.span));
        }
        for pair in clauses.windows(2) {
            prop_assert!(pair[0].span.start <= pair[1].span.start);
        }
    }

    #[test]
    fn prop_detection_is_idempotent(tree in arb_tree()) {
        let profile = get_profile("en").unwrap();
        prop_assert_eq!(detect_clauses(&tree, &profile), detect_clauses(&tree, &profile));
    }

    #[test]
    fn prop_counts_match_clauses(tree in arb_tree()) {
        let profile = get_profile("fr").unwrap();
        let result = analyze(&tree, &profile);

        let independent = result
            .clauses
            .iter()
            .filter(|c| c.clause_type == ClauseType::Independent)
            .count();
        prop_assert_eq!(result.independent_count, independent);
        prop_assert_eq!(result.independent_count + result.dependent_count, result.clauses.len());
        prop_assert_eq!(
            result.sentence_type,
            sentence_type_for(result.independent_count, result.dependent_count)
        );
    }

    #[test]
    fn prop_each_root_emits_at_most_one_clause(tree in arb_tree()) {
        let profile = get_profile("en").unwrap();
        let clauses = detect_clauses(&tree, &profile);

        let mut roots: Vec<usize> = clauses.iter().map(|c| c.root_position).collect();
        roots.sort_unstable();
        roots.dedup();
        prop_assert_eq!(roots.len(), clauses.len());
    }
}
