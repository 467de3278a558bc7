//! Adaptive execution dispatcher
//!
//! Selects between sequential and parallel execution from the number of
//! sentences in a batch and records what actually ran.

use crate::{
    config::EngineConfig,
    error::Result,
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
};
use clausa_core::{ClassificationResult, DependencyTree, LanguageProfile};
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// What a dispatch actually did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExecutionMetrics {
    /// Concrete mode used (never `Adaptive`)
    pub mode_used: ExecutionMode,
    /// Wall-clock time spent in the executor
    pub processing_time: Duration,
    /// Number of sentences analyzed
    pub sentences_processed: usize,
}

/// Adaptive execution dispatcher
pub struct AdaptiveDispatcher {
    sequential_executor: SequentialExecutor,
    #[cfg(feature = "parallel")]
    parallel_executor: ParallelExecutor,
    config: EngineConfig,
}

impl AdaptiveDispatcher {
    /// Create a new adaptive dispatcher with the given configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            sequential_executor: SequentialExecutor,
            #[cfg(feature = "parallel")]
            parallel_executor: ParallelExecutor::new(config.threads)?,
            config,
        })
    }

    /// Configuration this dispatcher was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Select the execution mode for a batch of `sentence_count` sentences
    pub fn select_mode(&self, sentence_count: usize) -> ExecutionMode {
        match self.config.execution_mode {
            ExecutionMode::Adaptive => auto_select(sentence_count, self.config.parallel_threshold),
            mode => mode,
        }
    }

    /// Process trees with the configured mode
    pub fn process(
        &self,
        trees: &[DependencyTree],
        profile: &LanguageProfile,
    ) -> Result<(Vec<ClassificationResult>, ExecutionMetrics)> {
        self.process_with_mode(trees, profile, self.config.execution_mode)
    }

    /// Process trees with the specified execution mode
    pub fn process_with_mode(
        &self,
        trees: &[DependencyTree],
        profile: &LanguageProfile,
        mode: ExecutionMode,
    ) -> Result<(Vec<ClassificationResult>, ExecutionMetrics)> {
        let mode = match mode {
            ExecutionMode::Adaptive => auto_select(trees.len(), self.config.parallel_threshold),
            mode => mode,
        };

        tracing::debug!(?mode, sentences = trees.len(), "dispatching batch");

        let start_time = Instant::now();
        let (results, mode_used) = match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => (
                self.parallel_executor.process(trees, profile)?,
                self.parallel_executor.mode(),
            ),
            // Without the parallel feature everything runs sequentially
            _ => (
                self.sequential_executor.process(trees, profile)?,
                self.sequential_executor.mode(),
            ),
        };

        let metrics = ExecutionMetrics {
            mode_used,
            processing_time: start_time.elapsed(),
            sentences_processed: trees.len(),
        };
        Ok((results, metrics))
    }
}
