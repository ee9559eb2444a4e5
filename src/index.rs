use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

use crate::anagram::*;
use crate::corpus::*;
use crate::types::*;

///All corpus words sharing one canonical key, in lexicographical order
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnagramGroup {
    pub key: AnagramKey,
    pub words: Vec<NormString>,
}

impl AnagramGroup {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    ///A group with more than one member holds at least one anagram pair
    pub fn has_anagrams(&self) -> bool {
        self.words.len() > 1
    }

    ///The lexicographically smallest member
    pub fn first(&self) -> Option<&NormString> {
        self.words.first()
    }
}

///The anagram index, partitions the corpus into anagram groups.
///Groups are kept in the order their key was first encountered when
///traversing the sorted corpus.
#[derive(Clone, Debug, Default)]
pub struct AnagramIndex {
    groups: Vec<AnagramGroup>,

    ///Maps keys to positions in `groups`
    lookup: HashMap<AnagramKey, GroupId>,
}

impl AnagramIndex {
    pub fn build(corpus: &Corpus, params: &ExplorerParams) -> AnagramIndex {
        let mut index = AnagramIndex::default();

        if params.debug {
            eprintln!("Computing anagram keys for all {} words in the corpus...", corpus.len());
        }

        // Normalize and sort the corpus, then key every word,
        // the sort fixes the order of words within each group
        let keyed: Vec<(AnagramKey, NormString)> = if params.single_thread {
            let mut words: Vec<NormString> = corpus.words().iter().map(|w| w.normalize()).collect();
            words.sort_unstable();
            words.into_iter().map(|w| (w.anagram_key(), w)).collect()
        } else {
            let mut words: Vec<NormString> = corpus.words().par_iter().map(|w| w.normalize()).collect();
            words.par_sort_unstable();
            words.into_par_iter().map(|w| (w.anagram_key(), w)).collect()
        };

        if params.debug {
            eprintln!("Adding all words to the index...");
        }
        for (key, word) in keyed {
            if params.debug {
                eprintln!("   -- Key={} Word={}", key, word);
            }
            index.get_or_create_group(key).words.push(word);
        }

        if params.debug {
            eprintln!(" - Found {} anagram groups", index.groups.len());
            eprintln!(
                " - Found {} groups with more than one member",
                index.groups.iter().filter(|group| group.has_anagrams()).count()
            );
        }
        index
    }

    fn get_or_create_group(&mut self, key: AnagramKey) -> &mut AnagramGroup {
        let groups = &mut self.groups;
        let group_id = *self.lookup.entry(key.clone()).or_insert_with(|| {
            groups.push(AnagramGroup {
                key,
                words: Vec::new(),
            });
            (groups.len() - 1) as GroupId
        });
        &mut self.groups[group_id as usize]
    }

    ///Read-only view of the full partition, in insertion order
    pub fn groups(&self) -> &[AnagramGroup] {
        &self.groups
    }

    ///Get the group for a key
    pub fn get(&self, key: &AnagramKey) -> Option<&AnagramGroup> {
        self.lookup
            .get(key)
            .and_then(|group_id| self.groups.get(*group_id as usize))
    }

    ///Get the group of corpus words that are anagrams of the given text.
    ///The text itself does not need to be in the corpus.
    pub fn anagrams_of(&self, text: &str) -> Option<&AnagramGroup> {
        self.get(&text.anagram_key())
    }

    pub fn contains_key(&self, key: &AnagramKey) -> bool {
        self.lookup.contains_key(key)
    }

    ///Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
