extern crate anaexplorer as libanaexplorer;

use rayon::prelude::*;
use pyo3::prelude::*;
use pyo3::types::*;
use std::collections::HashSet;


//letters come in from python as any iterable, normally of single-character strings.
//Returns None if there is an item that no word could ever cover (not a string, or not a single character)
fn extract_letters(letters: &Bound<'_, PyAny>) -> PyResult<Option<Vec<char>>> {
    let mut items: Vec<String> = Vec::new();
    for item in letters.iter()? {
        match item?.extract::<String>() {
            Ok(s) => items.push(s),
            Err(_) => return Ok(None),
        }
    }
    Ok(libanaexplorer::letters_from_strs(&items))
}

#[pyclass(name = "AnagramExplorer")]
pub struct PyAnagramExplorer {
    explorer: libanaexplorer::AnagramExplorer,
}

#[pymethods]
impl PyAnagramExplorer {
    #[new]
    #[pyo3(signature = (corpus, single_thread=false, debug=false))]
    fn new(corpus: Vec<String>, single_thread: bool, debug: bool) -> Self {
        let mut params = libanaexplorer::ExplorerParams::default();
        if single_thread {
            params = params.with_single_thread();
        }
        if debug {
            params = params.with_debug();
        }
        Self {
            explorer: libanaexplorer::AnagramExplorer::new_with_params(corpus, params),
        }
    }

    ///The list of words the explorer was created with
    #[getter]
    fn corpus(&self) -> Vec<String> {
        self.explorer.corpus().to_vec()
    }

    ///Is this word in the corpus (case-insensitive)?
    fn __contains__(&self, text: &str) -> bool {
        self.explorer.has(text)
    }

    ///Checks whether a pair of words are both in the corpus, whether the first uses every
    ///letter, and whether the two form a valid anagram pair
    fn is_valid_anagram_pair(&self, pair: (String, String), letters: &Bound<'_, PyAny>) -> PyResult<bool> {
        match extract_letters(letters)? {
            Some(letters) => Ok(self.explorer.is_valid_anagram_pair((pair.0.as_str(), pair.1.as_str()), &letters)),
            None => Ok(false),
        }
    }

    ///Validates multiple pairs at once, will use parallellisation under the hood.
    fn is_valid_anagram_pairs(&self, pairs: Vec<(String, String)>, letters: &Bound<'_, PyAny>, py: Python) -> PyResult<Vec<bool>> {
        let letters = match extract_letters(letters)? {
            Some(letters) => letters,
            None => return Ok(vec![false; pairs.len()]),
        };
        let explorer = &self.explorer;
        Ok(py.allow_threads(|| {
            pairs
                .par_iter()
                .map(|(word_a, word_b)| explorer.is_valid_anagram_pair((word_a.as_str(), word_b.as_str()), &letters))
                .collect()
        }))
    }

    ///Returns a dictionary mapping tuples of sorted characters to the sorted list of
    ///corpus words consisting of exactly those characters
    fn get_lookup_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new_bound(py);
        for group in self.explorer.get_lookup_dict().groups() {
            let key = PyTuple::new_bound(py, group.key.chars().iter().map(|c| c.to_string()));
            dict.set_item(key, group.words.clone())?;
        }
        Ok(dict)
    }

    ///All unique words in the corpus that form at least one anagram pair.
    ///The letters are accepted but do not restrict the result.
    #[allow(unused_variables)]
    fn get_all_anagrams(&self, letters: &Bound<'_, PyAny>) -> HashSet<String> {
        self.explorer.get_all_anagrams(&[])
    }

    ///One word from each of the largest anagram groups, sorted.
    ///The letters are accepted but do not restrict the result.
    #[allow(unused_variables)]
    fn get_most_anagrams(&self, letters: &Bound<'_, PyAny>) -> Vec<String> {
        self.explorer.get_most_anagrams(&[])
    }
}


#[pymodule]
fn anaexplorer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAnagramExplorer>()?;
    Ok(())
}
