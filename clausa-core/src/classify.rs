//! Sentence-structure classification

use crate::{
    clause::{detect_clauses, Clause},
    language::LanguageProfile,
    tree::DependencyTree,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Traditional sentence structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SentenceType {
    /// One independent clause
    Simple,
    /// Two or more independent clauses
    Compound,
    /// One independent clause and at least one dependent clause
    Complex,
    /// Two or more independent clauses and at least one dependent clause
    CompoundComplex,
    /// No independent clause
    Other,
}

impl SentenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentenceType::Simple => "simple",
            SentenceType::Compound => "compound",
            SentenceType::Complex => "complex",
            SentenceType::CompoundComplex => "compound-complex",
            SentenceType::Other => "other",
        }
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentence type plus the clauses it was derived from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub sentence_type: SentenceType,
    pub independent_count: usize,
    pub dependent_count: usize,
    pub clauses: Vec<Clause>,
}

/// Rule table from clause counts to sentence type
pub fn sentence_type_for(independent: usize, dependent: usize) -> SentenceType {
    match (independent, dependent) {
        (0, _) => SentenceType::Other,
        (1, 0) => SentenceType::Simple,
        (_, 0) => SentenceType::Compound,
        (1, _) => SentenceType::Complex,
        _ => SentenceType::CompoundComplex,
    }
}

/// Count clause kinds and apply [`sentence_type_for`]
pub fn classify(clauses: Vec<Clause>) -> ClassificationResult {
    let independent_count = clauses.iter().filter(|c| c.is_independent()).count();
    let dependent_count = clauses.len() - independent_count;

    ClassificationResult {
        sentence_type: sentence_type_for(independent_count, dependent_count),
        independent_count,
        dependent_count,
        clauses,
    }
}

/// Detect and classify in one step
pub fn analyze(tree: &DependencyTree, profile: &LanguageProfile) -> ClassificationResult {
    classify(detect_clauses(tree, profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::{ClauseType, Span};

    fn clause(clause_type: ClauseType) -> Clause {
        Clause {
            span: Span::new(0, 1),
            clause_type,
            root_position: 0,
            text: String::new(),
        }
    }

    #[test]
    fn test_rule_table() {
        assert_eq!(sentence_type_for(0, 0), SentenceType::Other);
        assert_eq!(sentence_type_for(0, 3), SentenceType::Other);
        assert_eq!(sentence_type_for(1, 0), SentenceType::Simple);
        assert_eq!(sentence_type_for(2, 0), SentenceType::Compound);
        assert_eq!(sentence_type_for(5, 0), SentenceType::Compound);
        assert_eq!(sentence_type_for(1, 1), SentenceType::Complex);
        assert_eq!(sentence_type_for(1, 4), SentenceType::Complex);
        assert_eq!(sentence_type_for(2, 1), SentenceType::CompoundComplex);
    }

    #[test]
    fn test_classify_counts() {
        let result = classify(vec![
            clause(ClauseType::Independent),
            clause(ClauseType::Dependent),
            clause(ClauseType::Independent),
        ]);

        assert_eq!(result.independent_count, 2);
        assert_eq!(result.dependent_count, 1);
        assert_eq!(result.sentence_type, SentenceType::CompoundComplex);
        assert_eq!(result.clauses.len(), 3);

        assert_eq!(classify(Vec::new()).sentence_type, SentenceType::Other);
    }

    #[test]
    fn test_punctuation_only_sentence_is_other() {
        let tree = crate::tree::TreeBuilder::new()
            .token("...", "PUNCT", "ROOT", 0)
            .build()
            .unwrap();
        let profile = crate::language::get_profile("en").unwrap();

        let result = analyze(&tree, &profile);
        assert_eq!(result.sentence_type, SentenceType::Other);
        assert!(result.clauses.is_empty());
    }

    #[test]
    fn test_sentence_type_names() {
        assert_eq!(SentenceType::CompoundComplex.to_string(), "compound-complex");
        assert_eq!(
            serde_json::to_string(&SentenceType::CompoundComplex).unwrap(),
            "\"compound-complex\""
        );
        let parsed: SentenceType = serde_json::from_str("\"simple\"").unwrap();
        assert_eq!(parsed, SentenceType::Simple);
    }
}
