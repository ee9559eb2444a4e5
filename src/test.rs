use crate::types::*;

///A larger word list with many anagram groups
pub const CORPUS_BIG: &[&str] = &[
    "abed", "abet", "abets", "abut", "acme", "acre", "acres", "actors", "actress", "airmen", "alert",
    "alerted", "ales", "aligned", "allergy", "alter", "altered", "amen", "anew", "angel", "angle",
    "antler", "apt", "bade", "baste", "bead", "beast", "beat", "beats", "beta", "betas", "came",
    "care", "cares", "casters", "castor", "costar", "dealing", "gallery", "glean", "largely",
    "later", "leading", "learnt", "leas", "mace", "mane", "marine", "mean", "name", "pat", "race",
    "races", "recasts", "regally", "related", "remain", "rental", "sale", "scare", "seal", "tabu",
    "tap", "treadle", "tuba", "wane", "wean",
];

///A small word list with two anagram groups and two singletons
pub const CORPUS_SMALL: &[&str] = &["rat", "mouse", "tar", "art", "chicken", "stop", "pots", "tops"];

pub const LETTERS: &[char] = &['l', 'o', 't', 's', 'r', 'i', 'a'];

pub fn get_test_corpus() -> Vec<String> {
    CORPUS_BIG.iter().map(|s| s.to_string()).collect()
}

pub fn get_small_test_corpus() -> Vec<String> {
    CORPUS_SMALL.iter().map(|s| s.to_string()).collect()
}

pub fn get_test_params() -> ExplorerParams {
    ExplorerParams::default().with_single_thread()
}
