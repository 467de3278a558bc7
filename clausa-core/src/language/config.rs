//! Configuration structures and validation
//!
//! This module defines the TOML schema for language profiles.

use crate::tree::PartOfSpeech;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Root profile configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub metadata: Metadata,
    pub labels: Labels,
    #[serde(default)]
    pub verbs: Verbs,
}

/// Profile metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
    /// Extra lookup keys (e.g. "english")
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Dependency-label categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Labels {
    /// Sentence root; heads an independent clause
    pub root: Vec<String>,
    /// Coordinated predicate; heads an independent clause
    pub coordination: Vec<String>,
    /// Adverbial, relative, complement and clausal-subject clauses
    pub subordinate: Vec<String>,
    /// Subordinating markers ("because", "parce")
    pub marker: Vec<String>,
    /// Coordinating conjunctions ("and", "et")
    pub conjunction: Vec<String>,
    #[serde(default)]
    pub punctuation: Vec<String>,
    /// Open complements; listed so validation can keep them out of the clause sets
    #[serde(default)]
    pub open_complement: Vec<String>,
}

/// Verb-identification rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verbs {
    #[serde(default = "default_verb_pos")]
    pub pos: Vec<PartOfSpeech>,
    /// Fine-grained tag prefixes (e.g. Penn "VB")
    #[serde(default)]
    pub tag_prefixes: Vec<String>,
    /// A token with a child under one of these labels is a predicate
    #[serde(default)]
    pub predicate_child_labels: Vec<String>,
}

impl Default for Verbs {
    fn default() -> Self {
        Self {
            pos: default_verb_pos(),
            tag_prefixes: Vec::new(),
            predicate_child_labels: Vec::new(),
        }
    }
}

fn default_verb_pos() -> Vec<PartOfSpeech> {
    vec![PartOfSpeech::Verb, PartOfSpeech::Auxiliary]
}

impl ProfileConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Profile code must not be empty".to_string());
        }

        if self.labels.root.is_empty() {
            return Err("No root labels defined".to_string());
        }

        let clause_labels: HashSet<&str> = self
            .labels
            .root
            .iter()
            .chain(&self.labels.coordination)
            .chain(&self.labels.subordinate)
            .map(String::as_str)
            .collect();

        if let Some(label) = self
            .labels
            .open_complement
            .iter()
            .find(|l| clause_labels.contains(l.as_str()))
        {
            return Err(format!(
                "Open-complement label '{label}' cannot also start a clause"
            ));
        }

        if let Some(label) = self
            .labels
            .marker
            .iter()
            .chain(&self.labels.conjunction)
            .find(|l| clause_labels.contains(l.as_str()))
        {
            return Err(format!(
                "Introducer label '{label}' cannot also start a clause"
            ));
        }

        Ok(())
    }
}
