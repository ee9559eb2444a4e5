use crate::types::*;

///Trait for objects from which anagram keys can be derived (string-like)
pub trait Anagrammable {
    fn normalize(&self) -> NormString;
    fn anagram_key(&self) -> AnagramKey;
    fn char_frequencies(&self) -> CharFrequencies;
}

impl Anagrammable for str {
    ///Normalize a word to lowercase, this is the only normalisation applied
    ///anywhere a word is compared or keyed
    fn normalize(&self) -> NormString {
        self.to_lowercase()
    }

    ///Compute the canonical key for a word: all its lowercased characters, sorted in ascending order.
    ///Any character counts, alphabetic or not.
    ///
    /// # Examples
    ///
    /// ```
    /// # use anaexplorer::*;
    /// assert_eq!("Stressed".anagram_key(), "desserts".anagram_key());
    /// assert_eq!("rat".anagram_key().to_string(), "art");
    /// ```
    fn anagram_key(&self) -> AnagramKey {
        let mut chars: Vec<char> = self.normalize().chars().collect();
        chars.sort_unstable();
        AnagramKey(chars)
    }

    ///Count how many times each (lowercased) character occurs
    ///
    /// # Examples
    ///
    /// ```
    /// # use anaexplorer::*;
    /// let freqs = "Banana".char_frequencies();
    /// assert_eq!(freqs.get(&'a'), Some(&3));
    /// assert_eq!(freqs.get(&'b'), Some(&1));
    /// assert_eq!(freqs.get(&'B'), None);
    /// ```
    fn char_frequencies(&self) -> CharFrequencies {
        let mut freqs = CharFrequencies::new();
        for c in self.normalize().chars() {
            *freqs.entry(c).or_insert(0) += 1;
        }
        freqs
    }
}

