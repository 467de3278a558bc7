//! Core error types (deterministic only)

use thiserror::Error;

/// Structural defect found while validating a dependency tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeDefect {
    /// The sentence has no tokens
    #[error("tree has no tokens")]
    Empty,
    /// A token's position does not match its index in the arena
    #[error("token at index {index} declares position {found}")]
    PositionMismatch {
        /// Index of the token in the arena
        index: usize,
        /// Position the token declared
        found: usize,
    },
    /// A head points outside the sentence
    #[error("token {position} has head {head} outside the sentence")]
    HeadOutOfRange {
        /// Offending token
        position: usize,
        /// Head it points to
        head: usize,
    },
    /// No token is its own head
    #[error("tree has no root")]
    NoRoot,
    /// More than one token is its own head
    #[error("tree has multiple roots ({first} and {second})")]
    MultipleRoots {
        /// First root found
        first: usize,
        /// Second root found
        second: usize,
    },
    /// Following heads from a token never reaches the root
    #[error("token {position} is part of a head cycle")]
    Cycle {
        /// A token on the cycle
        position: usize,
    },
}

/// Core errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Dependency tree violates the single-root/no-cycle invariant
    #[error("invalid dependency tree: {defect}")]
    InvalidTree {
        /// What is wrong with the tree
        defect: TreeDefect,
    },

    /// No profile is registered for the language code
    #[error("unknown language: {code}")]
    UnknownLanguage {
        /// Requested language code
        code: String,
    },

    /// Profile configuration could not be parsed or validated
    #[error("invalid language profile: {0}")]
    InvalidProfile(String),

    /// CoNLL-U input is malformed
    #[error("malformed CoNLL-U at line {line}: {reason}")]
    Conllu {
        /// 1-based line number
        line: usize,
        /// What went wrong
        reason: String,
    },
}

impl From<TreeDefect> for CoreError {
    fn from(defect: TreeDefect) -> Self {
        CoreError::InvalidTree { defect }
    }
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tree_display() {
        let err: CoreError = TreeDefect::MultipleRoots {
            first: 1,
            second: 4,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid dependency tree: tree has multiple roots (1 and 4)"
        );
    }

    #[test]
    fn test_unknown_language_display() {
        let err = CoreError::UnknownLanguage {
            code: "xx".to_string(),
        };
        assert_eq!(err.to_string(), "unknown language: xx");
    }

    #[test]
    fn test_conllu_display() {
        let err = CoreError::Conllu {
            line: 3,
            reason: "expected 10 columns, found 4".to_string(),
        };
        assert!(err.to_string().starts_with("malformed CoNLL-U at line 3"));
    }
}
