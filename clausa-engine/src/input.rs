//! Input abstraction for clause processing
//!
//! Parsed sentences arrive either as ready-made trees or in one of the
//! exchange formats a dependency parser writes: CoNLL-U or JSON token arrays.

use crate::error::{EngineError, Result};
use clausa_core::{conllu, conllu::ParsedSentence, DependencyTree};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Unified input abstraction
pub enum Input {
    /// Already-validated trees
    Trees(Vec<DependencyTree>),
    /// CoNLL-U document text
    Conllu(String),
    /// CoNLL-U file to read from
    ConlluFile(PathBuf),
    /// JSON array of token arrays
    Json(String),
    /// CoNLL-U stream (stdin, network, etc.)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Trees(trees) => f
                .debug_tuple("Trees")
                .field(&format!("<{} trees>", trees.len()))
                .finish(),
            Input::Conllu(text) => f
                .debug_tuple("Conllu")
                .field(&format!("<{} bytes>", text.len()))
                .finish(),
            Input::ConlluFile(path) => f.debug_tuple("ConlluFile").field(path).finish(),
            Input::Json(text) => f
                .debug_tuple("Json")
                .field(&format!("<{} bytes>", text.len()))
                .finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from trees
    pub fn from_trees(trees: Vec<DependencyTree>) -> Self {
        Input::Trees(trees)
    }

    /// Create input from CoNLL-U text
    pub fn from_conllu<S: Into<String>>(text: S) -> Self {
        Input::Conllu(text.into())
    }

    /// Create input from a CoNLL-U file path
    pub fn from_conllu_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::ConlluFile(path.into())
    }

    /// Create input from JSON text
    pub fn from_json<S: Into<String>>(text: S) -> Self {
        Input::Json(text.into())
    }

    /// Create input from a CoNLL-U reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read and validate every sentence
    pub fn into_sentences(self) -> Result<Vec<ParsedSentence>> {
        match self {
            Input::Trees(trees) => Ok(trees.into_iter().map(ParsedSentence::from_tree).collect()),
            Input::Conllu(text) => Ok(conllu::parse(&text)?),
            Input::ConlluFile(path) => {
                let text = fs::read_to_string(&path).map_err(|e| {
                    EngineError::IoError(format!("Failed to read file {path:?}: {e}"))
                })?;
                Ok(conllu::parse(&text)?)
            }
            Input::Json(text) => {
                let trees: Vec<DependencyTree> = serde_json::from_str(&text)?;
                Ok(trees.into_iter().map(ParsedSentence::from_tree).collect())
            }
            Input::Reader(mut reader) => {
                let mut text = String::new();
                reader.read_to_string(&mut text).map_err(|e| {
                    EngineError::IoError(format!("Failed to read from stream: {e}"))
                })?;
                Ok(conllu::parse(&text)?)
            }
        }
    }
}

impl From<Vec<DependencyTree>> for Input {
    fn from(trees: Vec<DependencyTree>) -> Self {
        Input::Trees(trees)
    }
}

impl From<DependencyTree> for Input {
    fn from(tree: DependencyTree) -> Self {
        Input::Trees(vec![tree])
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::ConlluFile(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausa_core::{CoreError, TreeBuilder};
    use std::io::Cursor;

    const CONLLU: &str = "# text = Dogs bark.\n\
1\tDogs\tdog\tNOUN\t_\t_\t2\tnsubj\t_\t_\n\
2\tbark\tbark\tVERB\t_\t_\t0\troot\t_\tSpaceAfter=No\n\
3\t.\t.\tPUNCT\t_\t_\t2\tpunct\t_\t_\n";

    #[test]
    fn test_trees_pass_through() {
        let tree = TreeBuilder::new()
            .token("Go", "VERB", "ROOT", 0)
            .build()
            .unwrap();
        let input = Input::from(tree.clone());

        let sentences = input.into_sentences().unwrap();
        assert_eq!(sentences[0].tree, tree);
        assert_eq!(sentences[0].text, None);
    }

    #[test]
    fn test_conllu_text_and_reader() {
        let from_text = Input::from_conllu(CONLLU).into_sentences().unwrap();
        let from_reader = Input::from_reader(Cursor::new(CONLLU.as_bytes().to_vec()))
            .into_sentences()
            .unwrap();

        assert_eq!(from_text, from_reader);
        assert_eq!(from_text[0].text.as_deref(), Some("Dogs bark."));
    }

    #[test]
    fn test_json_trees() {
        let json = r#"[
            [{"position":0,"text":"Dogs","pos":"NOUN","dep":"nsubj","head":1},
             {"position":1,"text":"bark","pos":"VERB","dep":"ROOT","head":1}],
            [{"position":0,"text":"Run","pos":"VERB","dep":"ROOT","head":0}]
        ]"#;
        let sentences = Input::from_json(json).into_sentences().unwrap();

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].surface_text(), "Dogs bark");
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            Input::from_json("[[{}]]").into_sentences(),
            Err(EngineError::Json(_))
        ));
        assert!(matches!(
            Input::from_conllu("1\tx\n").into_sentences(),
            Err(EngineError::Core(CoreError::Conllu { .. }))
        ));
        assert!(matches!(
            Input::from_conllu_file("/definitely/not/here.conllu").into_sentences(),
            Err(EngineError::IoError(_))
        ));
    }
}
