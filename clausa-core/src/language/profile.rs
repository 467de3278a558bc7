//! Runtime language profile
//!
//! Bridges a validated [`ProfileConfig`] and the label lookups the clause
//! detector performs for every token.

use crate::{
    error::{CoreError, Result},
    language::config::ProfileConfig,
    tree::{DependencyTree, PartOfSpeech, Token},
};
use std::collections::HashSet;

/// Label conventions of one language/parser combination
///
/// Immutable after construction; share it across sentences and threads
/// behind an `Arc`.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    code: String,
    name: String,
    aliases: Vec<String>,

    root_labels: HashSet<String>,
    coordination_labels: HashSet<String>,
    subordinate_labels: HashSet<String>,
    marker_labels: HashSet<String>,
    conjunction_labels: HashSet<String>,
    punctuation_labels: HashSet<String>,

    verb_pos: Vec<PartOfSpeech>,
    verb_tag_prefixes: Vec<String>,
    predicate_child_labels: HashSet<String>,
}

fn label_set(labels: &[String]) -> HashSet<String> {
    labels.iter().cloned().collect()
}

impl LanguageProfile {
    /// Create from configuration
    pub fn from_config(config: &ProfileConfig) -> Result<Self> {
        config.validate().map_err(CoreError::InvalidProfile)?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            aliases: config.metadata.aliases.clone(),
            root_labels: label_set(&config.labels.root),
            coordination_labels: label_set(&config.labels.coordination),
            subordinate_labels: label_set(&config.labels.subordinate),
            marker_labels: label_set(&config.labels.marker),
            conjunction_labels: label_set(&config.labels.conjunction),
            punctuation_labels: label_set(&config.labels.punctuation),
            verb_pos: config.verbs.pos.clone(),
            verb_tag_prefixes: config.verbs.tag_prefixes.clone(),
            predicate_child_labels: label_set(&config.verbs.predicate_child_labels),
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Every label that may head a clause
    pub fn clause_root_labels(&self) -> impl Iterator<Item = &str> {
        self.root_labels
            .iter()
            .chain(&self.coordination_labels)
            .chain(&self.subordinate_labels)
            .map(String::as_str)
    }

    #[inline]
    pub fn is_clause_root_label(&self, label: &str) -> bool {
        self.is_independent_label(label) || self.subordinate_labels.contains(label)
    }

    /// Root and coordination labels head independent clauses
    #[inline]
    pub fn is_independent_label(&self, label: &str) -> bool {
        self.root_labels.contains(label) || self.coordination_labels.contains(label)
    }

    #[inline]
    pub fn is_marker_label(&self, label: &str) -> bool {
        self.marker_labels.contains(label)
    }

    #[inline]
    pub fn is_conjunction_label(&self, label: &str) -> bool {
        self.conjunction_labels.contains(label)
    }

    /// Marker or conjunction: a token that introduces the clause after it
    #[inline]
    pub fn is_introducer(&self, token: &Token) -> bool {
        let label = token.dependency_label();
        self.is_marker_label(label) || self.is_conjunction_label(label)
    }

    #[inline]
    pub fn is_punctuation(&self, token: &Token) -> bool {
        token.part_of_speech() == PartOfSpeech::Punctuation
            || self.punctuation_labels.contains(token.dependency_label())
    }

    /// Verb-identification rule: POS, fine tag prefix, or a copula-like child
    pub fn is_verb_like(&self, tree: &DependencyTree, position: usize) -> bool {
        let token = tree.token(position);

        if self.verb_pos.contains(&token.part_of_speech()) {
            return true;
        }

        if let Some(tag) = token.tag() {
            if self
                .verb_tag_prefixes
                .iter()
                .any(|prefix| tag.starts_with(prefix.as_str()))
            {
                return true;
            }
        }

        !self.predicate_child_labels.is_empty()
            && tree.children(position).iter().any(|&child| {
                self.predicate_child_labels
                    .contains(tree.token(child).dependency_label())
            })
    }
}
