use std::error::Error;
use std::fmt;

use crate::anagram::*;
use crate::corpus::*;
use crate::types::*;

///The reason a pair of words was rejected
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidPair {
    ///The (normalized) word is not in the corpus
    NotInCorpus(NormString),

    ///A letter drawn for the round does not occur in the first word
    MissingLetter(char),

    ///The words do not consist of exactly the same letters
    NotAnagrams,
}

impl fmt::Display for InvalidPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotInCorpus(word) => write!(f, "word not in corpus: {}", word),
            Self::MissingLetter(c) => write!(f, "letter not used by first word: {}", c),
            Self::NotAnagrams => write!(f, "words are not anagrams"),
        }
    }
}

impl Error for InvalidPair {}

///Tests if every letter drawn for the round occurs at least once in the first word of a pair.
///Only presence counts, not how often a letter occurs. The second word of a pair is never
///subjected to this test.
pub fn first_word_covers_letters(first: &CharFrequencies, letters: &[char]) -> Result<(), InvalidPair> {
    for letter in letters {
        //lowercasing may yield more than one character, all of them must be present
        for c in letter.to_lowercase() {
            if !first.contains_key(&c) {
                return Err(InvalidPair::MissingLetter(c));
            }
        }
    }
    Ok(())
}

///Convert letters given as strings into characters. Returns `None` if any of them is not
///exactly one character, such a letter can never be covered by a word.
pub fn letters_from_strs<S: AsRef<str>>(items: &[S]) -> Option<Vec<char>> {
    let mut letters = Vec::with_capacity(items.len());
    for item in items {
        let mut chars = item.as_ref().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => letters.push(c),
            _ => return None,
        }
    }
    Some(letters)
}

///Check whether two words form a valid anagram pair for a round with the given letters:
///both must be in the corpus, the first must use every letter, and both must consist of
///exactly the same characters with the same counts.
///A word paired with itself is accepted.
pub fn validate_pair(corpus: &Corpus, word_a: &str, word_b: &str, letters: &[char]) -> Result<(), InvalidPair> {
    let word_a = word_a.normalize();
    let word_b = word_b.normalize();

    for word in [&word_a, &word_b] {
        if !corpus.contains(word) {
            return Err(InvalidPair::NotInCorpus(word.clone()));
        }
    }

    let freqs_a = word_a.char_frequencies();
    let freqs_b = word_b.char_frequencies();

    first_word_covers_letters(&freqs_a, letters)?;

    if freqs_a == freqs_b {
        Ok(())
    } else {
        Err(InvalidPair::NotAnagrams)
    }
}

pub fn is_valid_pair(corpus: &Corpus, word_a: &str, word_b: &str, letters: &[char]) -> bool {
    validate_pair(corpus, word_a, word_b, letters).is_ok()
}
