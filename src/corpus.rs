use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

use crate::anagram::*;
use crate::types::*;

///The fixed vocabulary of words that are valid for play.
///The input list is kept verbatim (duplicates included), lookups go via the normalized forms.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    words: Vec<String>,

    ///Lowercased form of every entry, for membership checks
    normalized: HashSet<NormString>,
}

impl Corpus {
    pub fn new(words: Vec<String>) -> Corpus {
        let normalized = words.iter().map(|word| word.normalize()).collect();
        Corpus { words, normalized }
    }

    ///Read a corpus from a word list, one entry per line.
    ///Lines may contain multiple tab-separated columns, the text is taken from the
    ///column set in the parameters. Empty lines are skipped.
    pub fn from_reader(reader: impl Read, params: &CorpusParams) -> Result<Corpus, io::Error> {
        let mut words = Vec::new();
        let f_buffer = BufReader::new(reader);
        for line in f_buffer.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            match line.split('\t').nth(params.text_column as usize) {
                Some(text) => words.push(text.to_owned()),
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!(
                            "Expected text column {} not found in line: {}",
                            params.text_column, line
                        ),
                    ))
                }
            }
        }
        Ok(Corpus::new(words))
    }

    ///Read a corpus from a word list file, see `from_reader()`
    pub fn read_from_file(filename: &str, params: &CorpusParams) -> Result<Corpus, io::Error> {
        let f = File::open(filename)?;
        Self::from_reader(f, params)
    }

    ///Tests if the corpus has a specific entry, by text (case-insensitive)
    pub fn contains(&self, word: &str) -> bool {
        self.normalized.contains(&word.normalize())
    }

    ///The original list of words, unmodified
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<Vec<String>> for Corpus {
    fn from(words: Vec<String>) -> Self {
        Corpus::new(words)
    }
}

impl From<&[&str]> for Corpus {
    fn from(words: &[&str]) -> Self {
        Corpus::new(words.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<&str>> for Corpus {
    fn from(words: Vec<&str>) -> Self {
        Corpus::new(words.into_iter().map(|s| s.to_string()).collect())
    }
}
