//! Dependency tree arena
//!
//! A parsed sentence is stored as a flat arena of [`Token`]s indexed by
//! position. Construction validates the single-root/no-cycle invariant and
//! precomputes every token's child list once, so later walks never chase
//! pointers.

pub mod conllu;
mod token;

pub use token::{PartOfSpeech, Token};

use crate::{
    clause::Span,
    error::{CoreError, Result, TreeDefect},
};
use serde::{Deserialize, Serialize};

/// Immutable dependency parse of one sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Token>", into = "Vec<Token>")]
pub struct DependencyTree {
    tokens: Vec<Token>,
    root: usize,
}

impl DependencyTree {
    /// Validate tokens and build the arena
    pub fn from_tokens(mut tokens: Vec<Token>) -> Result<Self> {
        if tokens.is_empty() {
            return Err(TreeDefect::Empty.into());
        }

        let len = tokens.len();
        let mut root = None;

        for (index, token) in tokens.iter().enumerate() {
            if token.position() != index {
                return Err(TreeDefect::PositionMismatch {
                    index,
                    found: token.position(),
                }
                .into());
            }
            if token.head_position() >= len {
                return Err(TreeDefect::HeadOutOfRange {
                    position: index,
                    head: token.head_position(),
                }
                .into());
            }
            if token.is_root() {
                if let Some(first) = root {
                    return Err(TreeDefect::MultipleRoots {
                        first,
                        second: index,
                    }
                    .into());
                }
                root = Some(index);
            }
        }

        let root = root.ok_or(CoreError::InvalidTree {
            defect: TreeDefect::NoRoot,
        })?;

        for token in tokens.iter_mut() {
            token.clear_children();
        }
        for index in 0..len {
            let head = tokens[index].head_position();
            if head != index {
                tokens[head].push_child(index);
            }
        }

        // Every non-root token has exactly one head, so anything unreachable
        // from the root sits on (or hangs off) a cycle.
        let mut reached = vec![false; len];
        let mut stack = vec![root];
        while let Some(pos) = stack.pop() {
            reached[pos] = true;
            stack.extend(tokens[pos].child_positions().iter().copied());
        }
        if let Some(position) = reached.iter().position(|r| !r) {
            return Err(TreeDefect::Cycle { position }.into());
        }

        Ok(Self { tokens, root })
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false for a validated tree; kept for API symmetry
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `position`
    ///
    /// # Panics
    /// Panics if `position` is out of range.
    pub fn token(&self, position: usize) -> &Token {
        &self.tokens[position]
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Position of the syntactic root
    pub fn root(&self) -> usize {
        self.root
    }

    /// Direct dependents of `position`, ordered by position
    pub fn children(&self, position: usize) -> &[usize] {
        self.tokens[position].child_positions()
    }

    /// `position` and all of its transitive dependents, sorted
    pub fn subtree(&self, position: usize) -> Vec<usize> {
        let mut members = Vec::new();
        let mut stack = vec![position];
        while let Some(pos) = stack.pop() {
            members.push(pos);
            stack.extend(self.children(pos).iter().copied());
        }
        members.sort_unstable();
        members
    }

    /// Leftmost position in the subtree of `position`
    pub fn subtree_start(&self, position: usize) -> usize {
        let mut start = position;
        let mut stack = vec![position];
        while let Some(pos) = stack.pop() {
            start = start.min(pos);
            stack.extend(self.children(pos).iter().copied());
        }
        start
    }

    /// Surface text of the whole sentence
    pub fn text(&self) -> String {
        self.text_of(Span::new(0, self.len()))
    }

    /// Surface text of the tokens in `span`, honoring `space_after`
    pub fn text_of(&self, span: Span) -> String {
        let end = span.end.min(self.len());
        let start = span.start.min(end);
        let slice = &self.tokens[start..end];

        let mut out = String::new();
        for (i, token) in slice.iter().enumerate() {
            out.push_str(token.text());
            if token.space_after() && i + 1 < slice.len() {
                out.push(' ');
            }
        }
        out
    }
}

impl TryFrom<Vec<Token>> for DependencyTree {
    type Error = CoreError;

    fn try_from(tokens: Vec<Token>) -> Result<Self> {
        Self::from_tokens(tokens)
    }
}

impl From<DependencyTree> for Vec<Token> {
    fn from(tree: DependencyTree) -> Self {
        tree.tokens
    }
}

/// Sequential builder, mostly for tests and adapters
///
/// Positions are assigned in call order.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tokens: Vec<Token>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token whose head is `head` (its own position for the root)
    pub fn token(
        mut self,
        text: impl Into<String>,
        part_of_speech: impl Into<PartOfSpeech>,
        dependency_label: impl Into<String>,
        head: usize,
    ) -> Self {
        let position = self.tokens.len();
        self.tokens.push(Token::new(
            position,
            text,
            part_of_speech,
            dependency_label,
            head,
        ));
        self
    }

    /// Set the fine-grained tag of the last token
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        if let Some(last) = self.tokens.pop() {
            self.tokens.push(last.with_tag(tag));
        }
        self
    }

    /// Mark the last token as not followed by whitespace
    pub fn no_space(mut self) -> Self {
        if let Some(last) = self.tokens.pop() {
            self.tokens.push(last.with_space_after(false));
        }
        self
    }

    pub fn build(self) -> Result<DependencyTree> {
        DependencyTree::from_tokens(self.tokens)
    }
}
