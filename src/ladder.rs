use crate::edit_distance::is_adjacent;
use log::{debug, trace};
use std::collections::{BTreeSet, VecDeque};

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashSet;

#[cfg(feature = "hashbrown")]
use hashbrown::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A static set of words, iterated in ascending lexicographic order.
///
/// Words are stored as given; case normalization is the loader's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<String>,
    alphabet: BTreeSet<char>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the word was already present.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        self.alphabet.extend(word.chars());
        self.words.insert(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
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

    /// Every character appearing in some word, ascending.
    pub fn alphabet(&self) -> impl Iterator<Item = char> + '_ {
        self.alphabet.iter().copied()
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        for word in iter {
            dict.insert(word);
        }
        dict
    }
}

impl<S: Into<String>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

/// How neighbors of a word are enumerated during the search.
///
/// Both strategies examine candidates in ascending lexicographic order, so
/// they return the same ladder. Only their cost differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NeighborStrategy {
    /// Generate every single-edit variant of the word and look each one up.
    /// O(word length × alphabet size) per expansion.
    #[default]
    Variants,
    /// Test the word against every dictionary entry.
    /// O(dictionary size × word length) per expansion.
    Scan,
}

/// Result when the start and end words are the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TrivialLadder {
    /// `[word]`: a zero-step ladder.
    #[default]
    SingleWord,
    /// No ladder at all.
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LadderOptions {
    pub strategy: NeighborStrategy,
    pub trivial: TrivialLadder,
}

/// Shortest word ladder from `begin_word` to `end_word` with default options.
pub fn generate_word_ladder(begin_word: &str, end_word: &str, word_list: &Dictionary) -> Vec<String> {
    generate_word_ladder_with(begin_word, end_word, word_list, &LadderOptions::default())
}

/// Breadth-first search for the shortest ladder from `begin_word` to `end_word`.
///
/// Intermediate words must come from `word_list`; the two endpoints need
/// not. Returns an empty vector when no ladder exists. When several shortest
/// ladders exist, the one returned is the first in BFS order with each
/// word's neighbors visited in ascending lexicographic order.
pub fn generate_word_ladder_with(
    begin_word: &str,
    end_word: &str,
    word_list: &Dictionary,
    options: &LadderOptions,
) -> Vec<String> {
    if begin_word == end_word {
        return match options.trivial {
            TrivialLadder::SingleWord => vec![begin_word.to_string()],
            TrivialLadder::Empty => Vec::new(),
        };
    }

    debug!(
        "ladder {} -> {} over {} words ({:?})",
        begin_word,
        end_word,
        word_list.len(),
        options.strategy
    );

    let mut paths: VecDeque<Vec<String>> = VecDeque::new();
    paths.push_back(vec![begin_word.to_string()]);

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(begin_word.to_string());

    while let Some(path) = paths.pop_front() {
        let Some(last_word) = path.last() else {
            continue;
        };
        trace!("expanding {} at depth {}", last_word, path.len());

        // The end word finishes the ladder whatever its position among the
        // other candidates, and it may be missing from the dictionary.
        if is_adjacent(last_word, end_word) {
            let mut ladder = path.clone();
            ladder.push(end_word.to_string());
            debug!("ladder found with {} words", ladder.len());
            return ladder;
        }

        let candidates = match options.strategy {
            NeighborStrategy::Variants => variant_neighbors(last_word, word_list, &visited),
            NeighborStrategy::Scan => scan_neighbors(last_word, word_list, &visited),
        };

        for candidate in candidates {
            visited.insert(candidate.clone());
            let mut next = path.clone();
            next.push(candidate);
            paths.push_back(next);
        }
    }

    debug!("no ladder from {} to {}", begin_word, end_word);
    Vec::new()
}

fn scan_neighbors(word: &str, word_list: &Dictionary, visited: &HashSet<String>) -> Vec<String> {
    word_list
        .iter()
        .filter(|candidate| !visited.contains(*candidate) && is_adjacent(word, candidate))
        .map(str::to_string)
        .collect()
}

fn variant_neighbors(word: &str, word_list: &Dictionary, visited: &HashSet<String>) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let alphabet: Vec<char> = word_list.alphabet().collect();
    let mut found = BTreeSet::new();

    let mut keep = |variant: String| {
        if word_list.contains(&variant) && !visited.contains(&variant) {
            found.insert(variant);
        }
    };

    for i in 0..=chars.len() {
        for &letter in &alphabet {
            if i < chars.len() && chars[i] != letter {
                let mut substituted = chars.clone();
                substituted[i] = letter;
                keep(substituted.into_iter().collect());
            }

            let mut inserted = chars.clone();
            inserted.insert(i, letter);
            keep(inserted.into_iter().collect());
        }

        if i < chars.len() {
            let mut deleted = chars.clone();
            deleted.remove(i);
            keep(deleted.into_iter().collect());
        }
    }

    found.into_iter().collect()
}

/// Whether `ladder` is a well-formed ladder over `word_list`.
///
/// The ladder must be non-empty, each consecutive pair must be adjacent, and
/// every word strictly between the endpoints must be in the dictionary.
pub fn verify_word_ladder(ladder: &[String], word_list: &Dictionary) -> bool {
    if ladder.is_empty() {
        return false;
    }

    let interior_ok = ladder.len() <= 2
        || ladder[1..ladder.len() - 1]
            .iter()
            .all(|word| word_list.contains(word));

    interior_ok && ladder.windows(2).all(|pair| is_adjacent(&pair[0], &pair[1]))
}
