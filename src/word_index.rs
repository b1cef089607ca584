use serde::Serialize;

use crate::error::PredictError;
use crate::keypad;

/// Result cap used when the caller doesn't ask for another one.
pub const DEFAULT_LIMIT: usize = 10;

/// Letter stored on the root node. It never takes part in a comparison.
pub const ROOT_LETTER: char = '^';

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TrieNode {
    letter: char,
    is_word_end: bool,
    /// One child per distinct next letter, kept in first-insertion order.
    children: Vec<TrieNode>,
}

impl TrieNode {
    fn new(letter: char) -> Self {
        Self {
            letter,
            is_word_end: false,
            children: Vec::new(),
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn is_word_end(&self) -> bool {
        self.is_word_end
    }

    pub fn children(&self) -> &[TrieNode] {
        &self.children
    }

    pub fn child(&self, letter: char) -> Option<&TrieNode> {
        self.children.iter().find(|child| child.letter == letter)
    }

    fn child_or_insert(&mut self, letter: char) -> &mut TrieNode {
        let index = match self.children.iter().position(|child| child.letter == letter) {
            Some(index) => index,
            None => {
                self.children.push(TrieNode::new(letter));
                self.children.len() - 1
            }
        };

        &mut self.children[index]
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Matched words in the order the traversal found them.
    pub words: Vec<String>,
    /// Set when the result cap was reached and the traversal stopped early.
    pub finished: bool,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Prefix tree of lowercase words, searched by keypad digit sequences.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WordIndex {
    root: TrieNode,
}

impl Default for WordIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl WordIndex {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(ROOT_LETTER),
        }
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Adds a word, folded to lowercase. Empty words are ignored and
    /// inserting the same word again changes nothing.
    pub fn insert(&mut self, word: &str) {
        let mut letters = word.chars().flat_map(char::to_lowercase).peekable();
        if letters.peek().is_none() {
            return;
        }

        let mut node = &mut self.root;
        for letter in letters {
            node = node.child_or_insert(letter);
        }
        node.is_word_end = true;
    }

    pub fn insert_all<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for letter in word.chars().flat_map(char::to_lowercase) {
            match node.child(letter) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_word_end
    }

    /// Number of distinct words in the index.
    pub fn word_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.is_word_end {
                count += 1;
            }
            stack.extend(node.children.iter());
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Finds words whose first letters can be typed with `digits`.
    ///
    /// Each digit narrows the walk to the letters on its key. Once every
    /// digit is consumed, every word below the reached nodes is collected,
    /// so the digits act as a prefix rather than an exact length. Words come
    /// out depth first, following key order for the typed positions and
    /// first-insertion order below them. The walk stops as soon as `limit`
    /// words were found.
    pub fn search(&self, digits: &str, limit: usize) -> Result<SearchResult, PredictError> {
        let alphabets = keypad::alphabets(digits)?;
        let mut result = SearchResult::default();

        if limit == 0 {
            result.finished = true;
            return Ok(result);
        }
        if alphabets.is_empty() {
            return Ok(result);
        }

        // Children are pushed in reverse so they pop in order.
        let mut stack = vec![(&self.root, 0, String::new())];
        while let Some((node, depth, path)) = stack.pop() {
            if let Some(alphabet) = alphabets.get(depth) {
                for &letter in alphabet.iter().rev() {
                    if let Some(child) = node.child(letter) {
                        let mut path = path.clone();
                        path.push(letter);
                        stack.push((child, depth + 1, path));
                    }
                }
                continue;
            }

            for child in node.children.iter().rev() {
                let mut path = path.clone();
                path.push(child.letter);
                stack.push((child, depth + 1, path));
            }

            if node.is_word_end {
                result.words.push(path);
                if result.words.len() >= limit {
                    result.finished = true;
                    break;
                }
            }
        }

        Ok(result)
    }
}
