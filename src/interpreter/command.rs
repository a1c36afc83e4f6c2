//! Parsed commands.
//!
//! Tokenizing happens upstream; a command arrives here as letter/value words.

use heapless::Vec;

/// Maximum number of words held by one command.
pub const MAX_WORDS: usize = 16;

/// One letter/value pair, e.g. `X10.5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Word {
    /// Upper-case address letter.
    pub letter: char,
    /// Numeric value.
    pub value: f64,
}

/// A parsed command line.
///
/// Words keep their order. Lookups by letter return the first occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Command {
    words: Vec<Word, MAX_WORDS>,
}

impl Command {
    /// Create an empty command.
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Build a command from `(letter, value)` pairs.
    ///
    /// Words beyond [`MAX_WORDS`] are dropped with a warning; use
    /// [`push`](Self::push) to detect overflow.
    pub fn from_words(words: &[(char, f64)]) -> Self {
        let mut command = Self::new();
        for &(letter, value) in words {
            if command.push(letter, value).is_err() {
                warn!(
                    "command full, dropped {=usize} words",
                    words.len() - MAX_WORDS
                );
                break;
            }
        }
        command
    }

    /// Append a word; the letter is stored upper-case.
    ///
    /// # Errors
    ///
    /// Returns the word back if the command already holds [`MAX_WORDS`] words.
    pub fn push(&mut self, letter: char, value: f64) -> Result<(), Word> {
        self.words.push(Word {
            letter: letter.to_ascii_uppercase(),
            value,
        })
    }

    /// Builder-style [`push`](Self::push).
    ///
    /// A command already holding [`MAX_WORDS`] words is returned unchanged
    /// and the word is dropped with a warning; use [`push`](Self::push) to
    /// detect overflow.
    pub fn with(mut self, letter: char, value: f64) -> Self {
        if let Err(word) = self.push(letter, value) {
            warn!("command full, dropped word {=char}", word.letter);
        }
        self
    }

    /// Check if a letter is present.
    pub fn has_letter(&self, letter: char) -> bool {
        self.value(letter).is_some()
    }

    /// Value of the first word with this letter.
    pub fn value(&self, letter: char) -> Option<f64> {
        let letter = letter.to_ascii_uppercase();
        self.words
            .iter()
            .find(|w| w.letter == letter)
            .map(|w| w.value)
    }

    /// Values of every word with this letter, in order.
    pub fn values(&self, letter: char) -> impl Iterator<Item = f64> + '_ {
        let letter = letter.to_ascii_uppercase();
        self.words
            .iter()
            .filter(move |w| w.letter == letter)
            .map(|w| w.value)
    }

    /// All words in order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the command has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
