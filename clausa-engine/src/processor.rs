//! Main clause processor and builder

use crate::{
    config::EngineConfig,
    dispatcher::{AdaptiveDispatcher, ExecutionMetrics},
    error::{EngineError, Result},
    executor::ExecutionMode,
    input::Input,
    language::{load_profile_file, resolve_profile},
};
use clausa_core::{analyze, ClassificationResult, DependencyTree, LanguageProfile, SentenceType};
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Main clause processor
///
/// Holds one language profile and an execution dispatcher; batches of parsed
/// sentences go in, per-sentence classifications come out in input order.
pub struct ClauseProcessor {
    dispatcher: AdaptiveDispatcher,
    profile: Arc<LanguageProfile>,
}

/// Rich output with metadata
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    /// One entry per input sentence
    pub analyses: Vec<SentenceAnalysis>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Classification of a single sentence
#[derive(Debug, Clone, Serialize)]
pub struct SentenceAnalysis {
    /// Zero-based index in the input
    pub index: usize,
    /// Sentence identifier from the input, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_id: Option<String>,
    /// Sentence text
    pub text: String,
    /// Clauses and sentence type
    pub result: ClassificationResult,
}

/// Processing metadata
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingMetadata {
    /// Code of the language profile used
    pub language: String,
    /// Execution mode that was actually used
    pub execution_mode: ExecutionMode,
    /// Number of sentences analyzed
    pub sentences_processed: usize,
    /// Total clauses across all sentences
    pub clauses_emitted: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
}

impl ProcessingMetadata {
    fn new(language: &str, metrics: ExecutionMetrics, clauses_emitted: usize) -> Self {
        Self {
            language: language.to_string(),
            execution_mode: metrics.mode_used,
            sentences_processed: metrics.sentences_processed,
            clauses_emitted,
            processing_time_ms: metrics.processing_time.as_secs_f64() * 1000.0,
        }
    }
}

impl Output {
    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// How many sentences fell into each structure type
    pub fn type_counts(&self) -> HashMap<SentenceType, usize> {
        let mut counts = HashMap::new();
        for analysis in &self.analyses {
            *counts.entry(analysis.result.sentence_type).or_insert(0) += 1;
        }
        counts
    }
}

impl ClauseProcessor {
    /// Create a new English processor with default configuration
    pub fn new() -> Result<Self> {
        Self::with_language("en")
    }

    /// Create a processor for a built-in language
    pub fn with_language(language: &str) -> Result<Self> {
        Self::with_config(EngineConfig::default(), resolve_profile(language)?)
    }

    /// Create a processor with custom configuration and profile
    pub fn with_config(config: EngineConfig, profile: Arc<LanguageProfile>) -> Result<Self> {
        Ok(Self {
            dispatcher: AdaptiveDispatcher::new(config)?,
            profile,
        })
    }

    /// Start a builder
    pub fn builder() -> ClauseProcessorBuilder {
        ClauseProcessorBuilder::new()
    }

    /// Language profile in use
    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// Engine configuration in use
    pub fn config(&self) -> &EngineConfig {
        self.dispatcher.config()
    }

    /// Analyze one tree directly, bypassing the dispatcher
    pub fn analyze_tree(&self, tree: &DependencyTree) -> ClassificationResult {
        analyze(tree, &self.profile)
    }

    /// Process input with the configured execution mode
    pub fn process(&self, input: Input) -> Result<Output> {
        self.process_with_mode(input, self.config().execution_mode)
    }

    /// Process input with a specific execution mode
    pub fn process_with_mode(&self, input: Input, mode: ExecutionMode) -> Result<Output> {
        let sentences = input.into_sentences()?;

        let mut trees = Vec::with_capacity(sentences.len());
        let mut headers = Vec::with_capacity(sentences.len());
        for sentence in sentences {
            let text = sentence.surface_text();
            headers.push((sentence.sent_id, text));
            trees.push(sentence.tree);
        }

        let (results, metrics) = self
            .dispatcher
            .process_with_mode(&trees, &self.profile, mode)?;

        let clauses_emitted = results.iter().map(|r| r.clauses.len()).sum();
        let analyses = headers
            .into_iter()
            .zip(results)
            .enumerate()
            .map(|(index, ((sent_id, text), result))| SentenceAnalysis {
                index,
                sent_id,
                text,
                result,
            })
            .collect();

        Ok(Output {
            analyses,
            metadata: ProcessingMetadata::new(self.profile.code(), metrics, clauses_emitted),
        })
    }
}

enum ProfileSource {
    Code(String),
    File(PathBuf),
    Loaded(Arc<LanguageProfile>),
}

/// Builder for ClauseProcessor
///
/// Provides a fluent interface for configuring the processor.
pub struct ClauseProcessorBuilder {
    profile: ProfileSource,
    config: EngineConfig,
}

impl Default for ClauseProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClauseProcessorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            profile: ProfileSource::Code("en".to_string()),
            config: EngineConfig::default(),
        }
    }

    /// Use a built-in language
    pub fn language<S: Into<String>>(mut self, language: S) -> Self {
        self.profile = ProfileSource::Code(language.into());
        self
    }

    /// Use an already-loaded profile
    pub fn profile(mut self, profile: Arc<LanguageProfile>) -> Self {
        self.profile = ProfileSource::Loaded(profile);
        self
    }

    /// Load the profile from a TOML file at build time
    pub fn profile_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.profile = ProfileSource::File(path.into());
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the sentence count at which adaptive mode goes parallel
    pub fn parallel_threshold(mut self, sentences: usize) -> Self {
        self.config.parallel_threshold = sentences;
        self
    }

    /// Use sequential configuration preset
    pub fn sequential(mut self) -> Self {
        self.config = EngineConfig::sequential();
        self
    }

    /// Use fast configuration preset
    pub fn fast(mut self) -> Self {
        self.config = EngineConfig::fast();
        self
    }

    /// Use balanced configuration preset
    pub fn balanced(mut self) -> Self {
        self.config = EngineConfig::balanced();
        self
    }

    /// Build the processor
    pub fn build(self) -> Result<ClauseProcessor> {
        let profile = match self.profile {
            ProfileSource::Code(code) if code.trim().is_empty() => {
                return Err(EngineError::ConfigError(
                    "language code must not be empty".to_string(),
                ))
            }
            ProfileSource::Code(code) => resolve_profile(&code)?,
            ProfileSource::File(path) => load_profile_file(path)?,
            ProfileSource::Loaded(profile) => profile,
        };
        ClauseProcessor::with_config(self.config, profile)
    }
}
