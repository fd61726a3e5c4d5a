use color_eyre::eyre::{bail, Result, WrapErr};
use std::{
    collections::{BTreeSet, HashSet},
    fs,
    hash::BuildHasher,
    path::Path,
};
use tracing::{info, instrument};

/// Membership test over valid words. Lookups are exact: no case folding or
/// trimming happens here.
pub trait WordList {
    fn contains(&self, word: &str) -> bool;
}

impl<S: BuildHasher> WordList for HashSet<String, S> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl WordList for BTreeSet<String> {
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

impl<T: WordList + ?Sized> WordList for &T {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// An immutable, sorted word list. Build it once at startup and hand out
/// references to every game that needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    /// The Dutch base-word list bundled with the crate.
    pub fn embedded() -> Self {
        Self::parse(include_str!("../words"))
    }

    /// Reads a newline-delimited word list.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("Cannot load dictionary from {}", path.display()))?;
        let dictionary = Self::parse(&contents);
        if dictionary.is_empty() {
            bail!("Cannot load dictionary: {} contains no words", path.display());
        }
        info!(words = dictionary.len(), "dictionary loaded");
        Ok(dictionary)
    }

    /// One word per line; blank lines are skipped, everything else is kept
    /// verbatim.
    pub fn parse(contents: &str) -> Self {
        contents.lines().filter(|line| !line.is_empty()).collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Words whose first character is `first`, in sorted order.
    pub fn words_starting_with(&self, first: char) -> impl Iterator<Item = &str> + '_ {
        self.words
            .range(first.to_string()..)
            .take_while(move |word| word.starts_with(first))
            .map(String::as_str)
    }
}

impl WordList for Dictionary {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl FromIterator<String> for Dictionary {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().filter(|word| !word.is_empty()).collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Dictionary {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        iter.into_iter().map(String::from).collect()
    }
}
