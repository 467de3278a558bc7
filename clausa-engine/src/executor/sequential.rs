//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, Executor},
};
use clausa_core::{analyze, ClassificationResult, DependencyTree, LanguageProfile};

/// Sequential single-threaded executor
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn process(
        &self,
        trees: &[DependencyTree],
        profile: &LanguageProfile,
    ) -> Result<Vec<ClassificationResult>> {
        Ok(trees.iter().map(|tree| analyze(tree, profile)).collect())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
