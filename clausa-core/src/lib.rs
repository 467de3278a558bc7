//! Clause segmentation and sentence-structure classification
//!
//! Given a dependency parse of one sentence, this crate splits the sentence
//! into independent and dependent clauses and classifies it as simple,
//! compound, complex or compound-complex.
//!
//! # Architecture
//!
//! - **tree**: token arena with validated heads and precomputed children,
//!   plus a CoNLL-U reader for parser output
//! - **language**: data-driven label conventions per language (TOML)
//! - **clause**: root discovery, boundary resolution and detection
//! - **classify**: the clause-count rule table
//!
//! Parsing raw text is left to an external dependency parser.
//!
//! # Example
//!
//! ```rust
//! use clausa_core::{analyze, get_profile, SentenceType, TreeBuilder};
//!
//! // I think that she is right .
//! let tree = TreeBuilder::new()
//!     .token("I", "PRON", "nsubj", 1)
//!     .token("think", "VERB", "ROOT", 1)
//!     .token("that", "SCONJ", "mark", 4)
//!     .token("she", "PRON", "nsubj", 4)
//!     .token("is", "AUX", "ccomp", 1)
//!     .token("right", "ADJ", "acomp", 4)
//!     .no_space()
//!     .token(".", "PUNCT", "punct", 1)
//!     .build()
//!     .unwrap();
//!
//! let profile = get_profile("en").unwrap();
//! let result = analyze(&tree, &profile);
//!
//! assert_eq!(result.sentence_type, SentenceType::Complex);
//! assert_eq!(result.clauses[0].text, "I think");
//! assert_eq!(result.clauses[1].text, "that she is right");
//! ```

pub mod classify;
pub mod clause;
pub mod error;
pub mod language;
pub mod tree;

pub use classify::{analyze, classify, sentence_type_for, ClassificationResult, SentenceType};
pub use clause::{
    candidate_roots, detect_clauses, overlapping_pairs, resolve_span, Clause, ClauseType,
    PositionSet, Span,
};
pub use error::{CoreError, Result, TreeDefect};
pub use language::{
    available_languages, get_profile, load_profile_str, LanguageProfile, ProfileConfig,
};
pub use tree::{conllu, DependencyTree, PartOfSpeech, Token, TreeBuilder};
