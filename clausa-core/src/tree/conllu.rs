//! CoNLL-U reader
//!
//! Dependency parsers commonly hand their output over as CoNLL-U: one token
//! per line, ten tab-separated columns, blank lines between sentences.
//! Multi-word token ranges (`1-2`) and empty nodes (`1.1`) are skipped;
//! `HEAD = 0` marks the root.

use super::{DependencyTree, Token};
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

const COLUMNS: usize = 10;

/// One sentence read from a CoNLL-U document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSentence {
    /// `# sent_id = ...` comment, if present
    pub sent_id: Option<String>,
    /// `# text = ...` comment, if present
    pub text: Option<String>,
    /// Validated dependency tree
    pub tree: DependencyTree,
}

impl ParsedSentence {
    /// Wrap a tree that did not come with metadata
    pub fn from_tree(tree: DependencyTree) -> Self {
        Self {
            sent_id: None,
            text: None,
            tree,
        }
    }

    /// Sentence text from `# text`, falling back to the rendered tokens
    pub fn surface_text(&self) -> String {
        self.text.clone().unwrap_or_else(|| self.tree.text())
    }
}

#[derive(Default)]
struct SentenceAccumulator {
    sent_id: Option<String>,
    text: Option<String>,
    tokens: Vec<Token>,
}

impl SentenceAccumulator {
    fn is_blank(&self) -> bool {
        self.tokens.is_empty() && self.sent_id.is_none() && self.text.is_none()
    }

    fn finish(self, line: usize) -> Result<ParsedSentence> {
        if self.tokens.is_empty() {
            return Err(CoreError::Conllu {
                line,
                reason: "sentence has comments but no tokens".to_string(),
            });
        }
        Ok(ParsedSentence {
            sent_id: self.sent_id,
            text: self.text,
            tree: DependencyTree::from_tokens(self.tokens)?,
        })
    }
}

/// Parse every sentence in a CoNLL-U document
pub fn parse(input: &str) -> Result<Vec<ParsedSentence>> {
    let mut sentences = Vec::new();
    let mut current = SentenceAccumulator::default();
    let mut last_line = 0;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        last_line = line_no;
        let line = raw.trim_end_matches('\r');

        if line.trim().is_empty() {
            if !current.is_blank() {
                sentences.push(std::mem::take(&mut current).finish(line_no)?);
            }
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            if let Some((key, value)) = comment.split_once('=') {
                match key.trim() {
                    "sent_id" => current.sent_id = Some(value.trim().to_string()),
                    "text" => current.text = Some(value.trim().to_string()),
                    _ => {}
                }
            }
            continue;
        }

        if let Some(token) = parse_token_line(line, line_no, current.tokens.len())? {
            current.tokens.push(token);
        }
    }

    if !current.is_blank() {
        sentences.push(current.finish(last_line)?);
    }

    Ok(sentences)
}

/// Parse a document expected to hold exactly one sentence
pub fn parse_sentence(input: &str) -> Result<ParsedSentence> {
    let mut sentences = parse(input)?;
    match sentences.len() {
        1 => Ok(sentences.remove(0)),
        n => Err(CoreError::Conllu {
            line: 0,
            reason: format!("expected one sentence, found {n}"),
        }),
    }
}

fn parse_token_line(line: &str, line_no: usize, expected: usize) -> Result<Option<Token>> {
    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() != COLUMNS {
        return Err(malformed(
            line_no,
            format!("expected {COLUMNS} columns, found {}", columns.len()),
        ));
    }

    let id = columns[0];
    if id.contains('-') || id.contains('.') {
        return Ok(None);
    }

    let id: usize = id
        .parse()
        .map_err(|_| malformed(line_no, format!("invalid ID '{}'", columns[0])))?;
    if id != expected + 1 {
        return Err(malformed(
            line_no,
            format!("expected ID {}, found {id}", expected + 1),
        ));
    }
    let position = id - 1;

    let head: usize = columns[6]
        .parse()
        .map_err(|_| malformed(line_no, format!("invalid HEAD '{}'", columns[6])))?;
    let head_position = if head == 0 { position } else { head - 1 };

    let mut token = Token::new(position, columns[1], columns[3], columns[7], head_position);
    if columns[4] != "_" {
        token = token.with_tag(columns[4]);
    }
    if columns[9].split('|').any(|item| item == "SpaceAfter=No") {
        token = token.with_space_after(false);
    }

    Ok(Some(token))
}

fn malformed(line: usize, reason: String) -> CoreError {
    CoreError::Conllu { line, reason }
}
