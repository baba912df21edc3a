use std::collections::VecDeque;

/// Tokens of a command that remain to be consumed
///
/// `InputQueue` is an ordered sequence of owned tokens. The only mutating operation is
/// [`remove`](InputQueue::remove) which takes the front token, so tokens that were consumed by a
/// component can never be observed again and the order of the remaining ones is preserved.
///
/// Splitting the raw command line into tokens (quoting, escaping) is the responsibility of the
/// caller. [`tokenize`](InputQueue::tokenize) is provided for the common case of plain
/// whitespace-separated input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputQueue {
    tokens: VecDeque<String>,
}

impl InputQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a queue by splitting `input` on whitespace.
    pub fn tokenize(input: &str) -> Self {
        input.split_whitespace().collect()
    }

    /// Returns the front token without consuming it, or `None` if no tokens remain.
    pub fn peek(&self) -> Option<&str> {
        self.tokens.front().map(String::as_str)
    }

    /// Returns the token at `index` positions from the front without consuming anything.
    ///
    /// Parsers that consume a variable number of tokens use this to look ahead before deciding
    /// whether to remove anything.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Removes and returns the front token.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty. Parsers must [`peek`](InputQueue::peek) before removing.
    pub fn remove(&mut self) -> String {
        match self.tokens.pop_front() {
            Some(token) => token,
            None => panic!("InputQueue::remove called on an empty queue"),
        }
    }

    /// Returns the number of remaining tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if every token has been consumed.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over the remaining tokens front to back.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for InputQueue {
    fn from(tokens: Vec<String>) -> Self {
        InputQueue {
            tokens: tokens.into(),
        }
    }
}

impl<T: Into<String>> FromIterator<T> for InputQueue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        InputQueue {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}
