//! Chainable sentence builder.
//!
//! Words are appended one at a time and joined with single spaces when the
//! phrase is built:
//!
//! ```
//! use quatern::phrase::{say, say_word};
//!
//! assert_eq!(say_word("hello").and("world").build(), "hello world");
//! assert_eq!(say().build(), "");
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Accumulated words of a phrase.
///
/// Appending consumes the builder and returns it, so calls chain.
/// Empty words are kept and still contribute a separator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Say {
    words: Vec<String>,
}

/// Start an empty phrase.
pub fn say() -> Say {
    Say::new()
}

/// Start a phrase with one word.
pub fn say_word(word: impl Into<String>) -> Say {
    Say::new().append(word)
}

impl Say {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one word.
    pub fn append(mut self, word: impl Into<String>) -> Self {
        self.words.push(word.into());
        self
    }

    /// Alias for [`Say::append`], reads better in a chain.
    pub fn and(self, word: impl Into<String>) -> Self {
        self.append(word)
    }

    /// Number of words so far.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The words joined by single spaces; `""` when no word was given.
    pub fn build(&self) -> String {
        self.words.join(" ")
    }
}

impl fmt::Display for Say {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for Say {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for Say {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}

impl From<Say> for String {
    fn from(s: Say) -> Self {
        s.build()
    }
}
