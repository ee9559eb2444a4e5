extern crate rayon;
extern crate serde;

use std::collections::HashSet;

pub mod types;
pub mod anagram;
pub mod corpus;
pub mod index;
pub mod validate;
pub mod test;

pub use crate::types::*;
pub use crate::anagram::*;
pub use crate::corpus::*;
pub use crate::index::*;
pub use crate::validate::*;

///Indexes a corpus into anagram groups and answers anagram queries over it.
///The index is computed once, when the explorer is created, and never changes afterwards.
pub struct AnagramExplorer {
    corpus: Corpus,

    ///The main index, mapping canonical keys to the corpus words sharing them
    index: AnagramIndex,

    pub params: ExplorerParams,
}

impl AnagramExplorer {
    pub fn new(corpus: impl Into<Corpus>) -> AnagramExplorer {
        Self::new_with_params(corpus, ExplorerParams::default())
    }

    pub fn new_with_params(corpus: impl Into<Corpus>, params: ExplorerParams) -> AnagramExplorer {
        let corpus = corpus.into();
        let index = AnagramIndex::build(&corpus, &params);
        AnagramExplorer {
            corpus,
            index,
            params,
        }
    }

    ///The words the explorer was created with, unmodified
    pub fn corpus(&self) -> &[String] {
        self.corpus.words()
    }

    ///Tests if the corpus has a specific entry, by text (case-insensitive)
    pub fn has(&self, text: &str) -> bool {
        self.corpus.contains(text)
    }

    ///Checks whether a pair of words are both in the corpus, whether the first
    ///uses every one of the letters drawn for the round, and whether the two form an anagram pair.
    pub fn is_valid_anagram_pair(&self, pair: (&str, &str), letters: &[char]) -> bool {
        is_valid_pair(&self.corpus, pair.0, pair.1, letters)
    }

    ///Like `is_valid_anagram_pair()` but reports why a pair is rejected
    pub fn validate_anagram_pair(&self, pair: (&str, &str), letters: &[char]) -> Result<(), InvalidPair> {
        validate_pair(&self.corpus, pair.0, pair.1, letters)
    }

    ///The anagram lookup: every canonical key with the sorted list of corpus words sharing it
    pub fn get_lookup_dict(&self) -> &AnagramIndex {
        &self.index
    }

    ///All unique words in the corpus that form at least one anagram pair.
    ///
    ///The letters do not restrict the result, every group in the corpus is considered.
    pub fn get_all_anagrams(&self, _letters: &[char]) -> HashSet<String> {
        self.index
            .groups()
            .iter()
            .filter(|group| group.has_anagrams())
            .flat_map(|group| group.words.iter().cloned())
            .collect()
    }

    ///Returns one word (the lexicographically first) from each of the largest anagram
    ///groups, sorted. Groups without any anagram pair never qualify, so a corpus without
    ///anagrams yields an empty result.
    ///
    ///The letters do not restrict the result, every group in the corpus is considered.
    pub fn get_most_anagrams(&self, _letters: &[char]) -> Vec<String> {
        let mut max_size = 2;
        let mut largest: Vec<&AnagramGroup> = Vec::new();
        for group in self.index.groups() {
            if group.len() == max_size {
                largest.push(group);
            } else if group.len() > max_size {
                largest.clear();
                largest.push(group);
                max_size = group.len();
            }
        }
        let mut result: Vec<String> = largest
            .into_iter()
            .filter_map(|group| group.first().cloned())
            .collect();
        result.sort_unstable();
        result
    }
}
