//! Parallel execution strategy
//!
//! Sentences are independent, so the batch is split across rayon workers
//! that share one read-only profile.

use crate::{
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
};
use clausa_core::{analyze, ClassificationResult, DependencyTree, LanguageProfile};
use rayon::prelude::*;

/// Parallel multi-threaded executor
pub struct ParallelExecutor {
    /// Dedicated pool; `None` uses rayon's global pool
    pool: Option<rayon::ThreadPool>,
}

impl std::fmt::Debug for ParallelExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelExecutor")
            .field("threads", &self.thread_count())
            .finish()
    }
}

impl ParallelExecutor {
    /// Create a new parallel executor
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let pool = match threads {
            Some(count) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(count)
                    .build()
                    .map_err(|e| EngineError::ParallelError(e.to_string()))?,
            ),
            None => None,
        };
        Ok(Self { pool })
    }

    /// Worker threads available to this executor
    pub fn thread_count(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(num_cpus::get, rayon::ThreadPool::current_num_threads)
    }
}

impl Executor for ParallelExecutor {
    fn process(
        &self,
        trees: &[DependencyTree],
        profile: &LanguageProfile,
    ) -> Result<Vec<ClassificationResult>> {
        let run = || -> Vec<ClassificationResult> {
            trees.par_iter().map(|tree| analyze(tree, profile)).collect()
        };

        Ok(match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
