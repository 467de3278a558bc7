//! Clause value types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open token interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    #[inline]
    pub fn contains(&self, position: usize) -> bool {
        self.start <= position && position < self.end
    }

    /// True when the two intervals share at least one position
    pub fn overlaps(&self, other: &Span) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Whether a clause can stand alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClauseType {
    Independent,
    Dependent,
}

impl ClauseType {
    pub fn is_independent(&self) -> bool {
        matches!(self, ClauseType::Independent)
    }
}

impl fmt::Display for ClauseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClauseType::Independent => f.write_str("independent"),
            ClauseType::Dependent => f.write_str("dependent"),
        }
    }
}

/// A typed clause span within one sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub span: Span,
    pub clause_type: ClauseType,
    /// Position of the token heading this clause
    pub root_position: usize,
    /// Surface text of `span`
    pub text: String,
}

impl Clause {
    pub fn is_independent(&self) -> bool {
        self.clause_type.is_independent()
    }
}
