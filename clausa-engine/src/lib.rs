//! Batch orchestration for clause segmentation
//!
//! This crate feeds parsed sentences (trees, CoNLL-U or JSON) through the
//! clause detector, choosing between sequential and parallel execution and
//! collecting per-sentence results with processing metadata.
//!
//! # Example
//!
//! ```rust
//! use clausa_engine::{ClauseProcessor, Input};
//!
//! let conllu = "1\tBirds\tbird\tNOUN\t_\t_\t2\tnsubj\t_\t_\n\
//!               2\tsing\tsing\tVERB\t_\t_\t0\troot\t_\t_\n";
//!
//! let processor = ClauseProcessor::builder().language("en").build().unwrap();
//! let output = processor.process(Input::from_conllu(conllu)).unwrap();
//!
//! assert_eq!(output.analyses[0].result.sentence_type.to_string(), "simple");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod executor;
pub mod input;
pub mod language;
pub mod processor;

// Re-export key types
pub use config::EngineConfig;
pub use dispatcher::{AdaptiveDispatcher, ExecutionMetrics};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use input::Input;
pub use language::{load_profile_file, resolve_profile};
pub use processor::{
    ClauseProcessor, ClauseProcessorBuilder, Output, ProcessingMetadata, SentenceAnalysis,
};

// Re-export from core for convenience
pub use clausa_core::{
    ClassificationResult, Clause, ClauseType, DependencyTree, LanguageProfile, SentenceType, Span,
};
