use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

///Each anagram group gets assigned an ID integer (its position in the index), carries no further meaning
pub type GroupId = u32;

///A normalized (lowercased) word
pub type NormString = String;

///Character-frequency multiset of a word: maps each character to the number of times it occurs
pub type CharFrequencies = HashMap<char, usize>;

///The canonical key of a word: its lowercased characters in ascending order.
///Two words are anagrams of each other iff their keys are equal.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct AnagramKey(pub Vec<char>);

impl AnagramKey {
    ///Number of characters in the key (and in every word that has this key)
    pub fn charcount(&self) -> usize {
        self.0.len()
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }
}

impl fmt::Display for AnagramKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for c in self.0.iter() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExplorerParams {
    /// Compute canonical keys on a single thread instead of leveraging multiple cores (lowers
    /// resource use, the resulting index is identical)
    pub single_thread: bool,

    /// Output diagnostics on stderr while building
    pub debug: bool,
}

impl Default for ExplorerParams {
    fn default() -> Self {
        Self {
            single_thread: false,
            debug: false,
        }
    }
}

impl ExplorerParams {
    pub fn with_single_thread(mut self) -> Self {
        self.single_thread = true;
        self
    }
    pub fn with_debug(mut self) -> Self {
        self.debug = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CorpusParams {
    ///Column containing the text (0-indexed), columns are tab separated
    pub text_column: u8,
}

impl Default for CorpusParams {
    fn default() -> Self {
        Self { text_column: 0 }
    }
}

impl CorpusParams {
    pub fn with_text_column(mut self, column: u8) -> Self {
        self.text_column = column;
        self
    }
}
