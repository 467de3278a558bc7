//! Clause segmentation
//!
//! [`detect_clauses`] is the entry point; [`resolve_span`] is exposed for
//! callers that pick their own roots.

mod boundary;
mod detector;
mod types;

pub use boundary::{resolve_clause, resolve_span, PositionSet, ResolvedClause};
pub use detector::{candidate_roots, detect_clauses, overlapping_pairs};
pub use types::{Clause, ClauseType, Span};
