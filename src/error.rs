//! Types related to the failure conditions of the parsing process.
//!
//! Parsing failures are ordinary values: every [`ComponentParser`](crate::ComponentParser)
//! reports invalid or absent input by returning a [`ParseError`] rather than panicking. This
//! allows a dispatcher to try several command signatures against the same input cheaply. The only
//! fault raised by this crate for a parsing operation is a contract violation, such as calling
//! [`InputQueue::remove`](crate::InputQueue::remove) on an empty queue.

use std::borrow::Cow;
use std::fmt::Display;

/// The taxonomy tag of a [`ParseError`]
///
/// `ParseErrorKind` allows matching on the category of the failure without destructuring the
/// error itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ParseErrorKind {
    /// The input was exhausted before the component could consume a token.
    MissingInput,
    /// A token was present but it is not valid for the component's type.
    InvalidInput,
    /// The value starts at the front of the input but is not finished yet.
    IncompleteInput,
    /// A token was parsed but lies outside of the accepted bounds.
    OutOfRange,
    /// Tokens remained after every component of a command was parsed.
    TrailingInput,
    /// Parser-specific failure that fits none of the other categories.
    Custom,
}

/// Parsing error
///
/// Each variant carries the raw token that caused the failure (if there was one) and enough
/// information to render a message addressed to the sender. The rendered message is available
/// through the [`Display`] implementation.
///
/// ```
/// use cmdcomponent::error::{ParseError, ParseErrorKind};
///
/// let error = ParseError::invalid_input("atlantis", "Minecraft world");
/// assert_eq!(error.kind(), ParseErrorKind::InvalidInput);
/// assert_eq!(error.input(), Some("atlantis"));
/// assert_eq!(error.to_string(), "'atlantis' is not a valid Minecraft world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[non_exhaustive]
pub enum ParseError {
    /// No token was available for the component.
    #[error("no input was provided, expected {expected}")]
    MissingInput {
        /// Human-readable name of the value the parser was expecting.
        expected: Cow<'static, str>,
    },

    /// The token is not a valid instance of the component's type.
    #[error("{message}")]
    InvalidInput {
        /// The offending token.
        input: String,
        /// The message shown to the sender.
        message: Cow<'static, str>,
    },

    /// The value spans several tokens and the input ends before its last one, such as a quoted
    /// string that is never closed.
    #[error("{message}")]
    IncompleteInput {
        /// The token the value starts with.
        input: String,
        /// The message shown to the sender.
        message: Cow<'static, str>,
    },

    /// The token was recognized but its value is outside of the accepted bounds.
    #[error("'{input}' is not in the range {min} to {max}")]
    OutOfRange {
        /// The offending token.
        input: String,
        /// Lowest accepted value.
        min: String,
        /// Highest accepted value.
        max: String,
    },

    /// The first token that no component consumed.
    #[error("unexpected input: '{input}'")]
    TrailingInput {
        /// The first token left in the queue.
        input: String,
    },

    /// Failure with a parser-defined message.
    #[error("{message}")]
    Custom {
        /// The offending token, if the failure relates to one.
        input: Option<String>,
        /// The message shown to the sender.
        message: Cow<'static, str>,
    },
}

impl ParseError {
    /// Creates an error for the situation when the input queue is exhausted.
    ///
    /// `expected` is a human-readable name of the value the parser needed, it is included in the
    /// rendered message.
    pub fn missing_input(expected: impl Into<Cow<'static, str>>) -> Self {
        ParseError::MissingInput {
            expected: expected.into(),
        }
    }

    /// Creates an error for a token that is not a valid instance of `expected`. The rendered
    /// message reads `'<input>' is not a valid <expected>`.
    pub fn invalid_input(input: impl Into<String>, expected: impl Display) -> Self {
        let input = input.into();
        let message = format!("'{}' is not a valid {}", input, expected);
        ParseError::InvalidInput {
            input,
            message: message.into(),
        }
    }

    /// Creates an error for an invalid token with a message chosen by the parser.
    pub fn invalid_input_with_message(
        input: impl Into<String>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        ParseError::InvalidInput {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Creates an error for a value starting with `input` that the remaining tokens do not
    /// complete. [`Command::suggestions`](crate::Command::suggestions) treats the component that
    /// reports it as the owner of the last token.
    pub fn incomplete_input(
        input: impl Into<String>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        ParseError::IncompleteInput {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Creates an error for a value outside of the inclusive range `min..=max`.
    pub fn out_of_range(input: impl Into<String>, min: impl Display, max: impl Display) -> Self {
        ParseError::OutOfRange {
            input: input.into(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Creates an error for a token that remained in the queue after all components were parsed.
    pub fn trailing_input(input: impl Into<String>) -> Self {
        ParseError::TrailingInput {
            input: input.into(),
        }
    }

    /// Creates an error with a custom message. No semantics are associated with this error, it can
    /// be used when neither of other error types is applicable, for example when performing
    /// validation that depends on previously parsed values.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        ParseError::Custom {
            input: None,
            message: message.into(),
        }
    }

    /// Same as [`custom`](ParseError::custom) but records the token that caused the failure.
    pub fn custom_with_input(
        input: impl Into<String>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        ParseError::Custom {
            input: Some(input.into()),
            message: message.into(),
        }
    }

    /// Returns the taxonomy tag of this error.
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::MissingInput { .. } => ParseErrorKind::MissingInput,
            ParseError::InvalidInput { .. } => ParseErrorKind::InvalidInput,
            ParseError::IncompleteInput { .. } => ParseErrorKind::IncompleteInput,
            ParseError::OutOfRange { .. } => ParseErrorKind::OutOfRange,
            ParseError::TrailingInput { .. } => ParseErrorKind::TrailingInput,
            ParseError::Custom { .. } => ParseErrorKind::Custom,
        }
    }

    /// Returns the raw token that caused the failure, if any.
    pub fn input(&self) -> Option<&str> {
        match self {
            ParseError::MissingInput { .. } => None,
            ParseError::InvalidInput { input, .. }
            | ParseError::IncompleteInput { input, .. }
            | ParseError::OutOfRange { input, .. }
            | ParseError::TrailingInput { input } => Some(input),
            ParseError::Custom { input, .. } => input.as_deref(),
        }
    }
}
