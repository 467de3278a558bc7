//! Execution strategies for batches of sentences

use crate::error::Result;
use clausa_core::{ClassificationResult, DependencyTree, LanguageProfile};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Single-threaded sequential processing
    Sequential,
    /// Sentences analyzed concurrently on a rayon pool
    Parallel,
    /// Pick one of the above from the batch size
    Adaptive,
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Analyze every tree; results keep the input order
    fn process(
        &self,
        trees: &[DependencyTree],
        profile: &LanguageProfile,
    ) -> Result<Vec<ClassificationResult>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Choose sequential or parallel execution from the sentence count
pub fn auto_select(sentence_count: usize, threshold: usize) -> ExecutionMode {
    if sentence_count < 2 || sentence_count < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}
