use crate::tokenizer::tokenize;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::Path;
use tracing::{debug, trace};

/// Reserved vocabulary entry marking the fallback index for unknown words.
const UNK: &str = "<unk>";

/// Reads a word list file: one entry per line, each line trimmed of
/// surrounding whitespace. Blank lines are kept as empty entries so indices
/// stay aligned with line numbers.
pub fn load_str_list<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(|line| line.trim().to_string())
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabError {
    OutOfRange { index: usize, size: usize },
    UnknownWord { word: String },
}

impl fmt::Display for VocabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocabError::OutOfRange { index, size } => {
                write!(f, "index {} out of range for vocabulary of size {}", index, size)
            }
            VocabError::UnknownWord { word } => {
                write!(
                    f,
                    "word `{}` not in dictionary (while dictionary does not contain {})",
                    word, UNK
                )
            }
        }
    }
}

impl std::error::Error for VocabError {}

/// A fixed vocabulary loaded from a newline-delimited word file.
///
/// Line order defines each word's index. The word list keeps duplicate
/// entries; the reverse mapping is filled front to back, so a duplicated
/// word maps to its last index. Immutable after construction, safe to share
/// across threads for concurrent lookups.
#[derive(Debug, Clone)]
pub struct VocabDict {
    word_list: Vec<String>,
    word2idx_dict: HashMap<String, usize>,
    unk_idx: Option<usize>,
}

impl VocabDict {
    /// Loads the vocabulary at `path`. I/O failures are returned as-is.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let word_list = load_str_list(path)?;
        let mut word2idx_dict = HashMap::new();
        for (idx, word) in word_list.iter().enumerate() {
            word2idx_dict.insert(word.clone(), idx);
        }
        let unk_idx = word2idx_dict.get(UNK).copied();
        debug!(vocab_size = word_list.len(), unk_idx = ?unk_idx, "loaded vocabulary");
        Ok(VocabDict {
            word_list,
            word2idx_dict,
            unk_idx,
        })
    }

    /// Number of entries in the word list. Duplicate lines count.
    pub fn vocab_size(&self) -> usize {
        self.word_list.len()
    }

    /// Index of the `<unk>` entry, when the vocabulary carries one.
    pub fn unk_idx(&self) -> Option<usize> {
        self.unk_idx
    }

    /// The ordered word list, as loaded.
    pub fn words(&self) -> &[String] {
        &self.word_list
    }

    /// Word at `index` in the loaded list. No fallback.
    pub fn idx2word(&self, index: usize) -> Result<&str, VocabError> {
        self.word_list
            .get(index)
            .map(String::as_str)
            .ok_or(VocabError::OutOfRange {
                index,
                size: self.word_list.len(),
            })
    }

    /// Index of `word`, or the `<unk>` index when the word is absent and a
    /// fallback is configured.
    pub fn word2idx(&self, word: &str) -> Result<usize, VocabError> {
        if let Some(idx) = self.word2idx_dict.get(word) {
            return Ok(*idx);
        }
        match self.unk_idx {
            Some(idx) => {
                trace!(word, unk_idx = idx, "word not in dictionary, using <unk>");
                Ok(idx)
            }
            None => Err(VocabError::UnknownWord {
                word: word.to_string(),
            }),
        }
    }

    /// Tokenizes `sentence` and maps every token to its index, in order.
    /// The first token that fails [`VocabDict::word2idx`] fails the whole
    /// call; no partial result is returned.
    pub fn tokenize_and_index(&self, sentence: &str) -> Result<Vec<usize>, VocabError> {
        tokenize(sentence)
            .iter()
            .map(|token| self.word2idx(token))
            .collect()
    }
}
