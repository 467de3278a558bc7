//! Token and part-of-speech types

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Coarse part-of-speech category, parsed from Universal POS tags
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PartOfSpeech {
    /// Lexical verb (`VERB`)
    Verb,
    /// Auxiliary (`AUX`)
    Auxiliary,
    /// Common noun (`NOUN`)
    Noun,
    /// Proper noun (`PROPN`)
    ProperNoun,
    /// Pronoun (`PRON`)
    Pronoun,
    /// Adjective (`ADJ`)
    Adjective,
    /// Adverb (`ADV`)
    Adverb,
    /// Preposition or postposition (`ADP`)
    Adposition,
    /// Coordinating conjunction (`CCONJ`)
    CoordinatingConjunction,
    /// Subordinating conjunction (`SCONJ`)
    SubordinatingConjunction,
    /// Determiner (`DET`)
    Determiner,
    /// Numeral (`NUM`)
    Numeral,
    /// Particle (`PART`)
    Particle,
    /// Punctuation (`PUNCT`)
    Punctuation,
    /// Anything else (`INTJ`, `SYM`, `X`, unknown tags)
    Other,
}

impl PartOfSpeech {
    /// Universal POS tag for this category
    pub fn as_upos(&self) -> &'static str {
        match self {
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Auxiliary => "AUX",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::ProperNoun => "PROPN",
            PartOfSpeech::Pronoun => "PRON",
            PartOfSpeech::Adjective => "ADJ",
            PartOfSpeech::Adverb => "ADV",
            PartOfSpeech::Adposition => "ADP",
            PartOfSpeech::CoordinatingConjunction => "CCONJ",
            PartOfSpeech::SubordinatingConjunction => "SCONJ",
            PartOfSpeech::Determiner => "DET",
            PartOfSpeech::Numeral => "NUM",
            PartOfSpeech::Particle => "PART",
            PartOfSpeech::Punctuation => "PUNCT",
            PartOfSpeech::Other => "X",
        }
    }

    /// Map a tag to its category; unknown tags become `Other`
    pub fn from_upos(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "VERB" => PartOfSpeech::Verb,
            "AUX" => PartOfSpeech::Auxiliary,
            "NOUN" => PartOfSpeech::Noun,
            "PROPN" => PartOfSpeech::ProperNoun,
            "PRON" => PartOfSpeech::Pronoun,
            "ADJ" => PartOfSpeech::Adjective,
            "ADV" => PartOfSpeech::Adverb,
            "ADP" => PartOfSpeech::Adposition,
            // spaCy's English models still emit the pre-v2 "CONJ"
            "CCONJ" | "CONJ" => PartOfSpeech::CoordinatingConjunction,
            "SCONJ" => PartOfSpeech::SubordinatingConjunction,
            "DET" => PartOfSpeech::Determiner,
            "NUM" => PartOfSpeech::Numeral,
            "PART" => PartOfSpeech::Particle,
            "PUNCT" => PartOfSpeech::Punctuation,
            _ => PartOfSpeech::Other,
        }
    }
}

impl FromStr for PartOfSpeech {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_upos(s))
    }
}

impl From<&str> for PartOfSpeech {
    fn from(tag: &str) -> Self {
        Self::from_upos(tag)
    }
}

impl From<String> for PartOfSpeech {
    fn from(tag: String) -> Self {
        Self::from_upos(&tag)
    }
}

impl From<PartOfSpeech> for String {
    fn from(pos: PartOfSpeech) -> Self {
        pos.as_upos().to_string()
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_upos())
    }
}

fn default_true() -> bool {
    true
}

/// One token of a parsed sentence
///
/// Tokens are immutable once placed in a [`DependencyTree`](super::DependencyTree);
/// the tree fills in `child_positions` during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    position: usize,
    text: String,
    #[serde(rename = "pos")]
    part_of_speech: PartOfSpeech,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
    #[serde(rename = "dep")]
    dependency_label: String,
    #[serde(rename = "head")]
    head_position: usize,
    #[serde(skip)]
    child_positions: SmallVec<[usize; 4]>,
    #[serde(default = "default_true")]
    space_after: bool,
}

impl Token {
    /// Create a token; `head == position` marks the sentence root
    pub fn new(
        position: usize,
        text: impl Into<String>,
        part_of_speech: impl Into<PartOfSpeech>,
        dependency_label: impl Into<String>,
        head_position: usize,
    ) -> Self {
        Self {
            position,
            text: text.into(),
            part_of_speech: part_of_speech.into(),
            tag: None,
            dependency_label: dependency_label.into(),
            head_position,
            child_positions: SmallVec::new(),
            space_after: true,
        }
    }

    /// Attach a fine-grained parser tag (e.g. Penn `VBD`)
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set whether whitespace follows this token in the surface text
    pub fn with_space_after(mut self, space_after: bool) -> Self {
        self.space_after = space_after;
        self
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn part_of_speech(&self) -> PartOfSpeech {
        self.part_of_speech
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn dependency_label(&self) -> &str {
        &self.dependency_label
    }

    pub fn head_position(&self) -> usize {
        self.head_position
    }

    /// Direct dependents, ordered by position
    pub fn child_positions(&self) -> &[usize] {
        &self.child_positions
    }

    pub fn space_after(&self) -> bool {
        self.space_after
    }

    /// True for the sentence root
    #[inline]
    pub fn is_root(&self) -> bool {
        self.head_position == self.position
    }

    pub(crate) fn clear_children(&mut self) {
        self.child_positions.clear();
    }

    pub(crate) fn push_child(&mut self, child: usize) {
        self.child_positions.push(child);
    }
}
