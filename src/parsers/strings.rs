use crate::{CommandContext, ComponentParser, InputQueue, ParseError, ParseResult};
use std::fmt;
use std::sync::Arc;

/// How many tokens a [`StringParser`] consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringMode {
    /// Exactly one token.
    #[default]
    Single,
    /// Every remaining token, joined by single spaces.
    Greedy,
    /// One token, or if it starts with a double quote, every token up to the one ending with a
    /// double quote. The quotes are stripped and the tokens are joined by single spaces.
    Quoted,
}

type SuggestionProvider<S> = Arc<dyn Fn(&CommandContext<S>, &str) -> Vec<String> + Send + Sync>;

/// Parser implementation for owned [`String`]s
///
/// The number of consumed tokens is determined by the parser's [`StringMode`]. Any token is a
/// valid string, so the only failures are an empty queue and, in quoted mode, a quote that is
/// never closed. In that case no tokens are consumed.
///
/// By default the parser yields no suggestions. A suggestion provider may be attached with
/// [`with_suggestions`](StringParser::with_suggestions).
///
/// # Example
/// ```
/// use cmdcomponent::parsers::StringParser;
/// use cmdcomponent::{CommandContext, ComponentParser, InputQueue};
///
/// let parser = StringParser::quoted();
/// let ctx = CommandContext::new(());
/// let mut input = InputQueue::tokenize(r#""hello there" world"#);
/// assert_eq!(parser.parse(&ctx, &mut input), Ok("hello there".to_string()));
/// assert_eq!(input.peek(), Some("world"));
/// ```
pub struct StringParser<S> {
    mode: StringMode,
    suggestions: Option<SuggestionProvider<S>>,
}

impl<S> StringParser<S> {
    /// Creates a parser consuming a single token.
    pub fn single() -> Self {
        Self::with_mode(StringMode::Single)
    }

    /// Creates a parser consuming every remaining token.
    pub fn greedy() -> Self {
        Self::with_mode(StringMode::Greedy)
    }

    /// Creates a parser that consumes a double-quoted sequence of tokens or a single token.
    pub fn quoted() -> Self {
        Self::with_mode(StringMode::Quoted)
    }

    /// Creates a parser with the given mode.
    pub fn with_mode(mode: StringMode) -> Self {
        StringParser {
            mode,
            suggestions: None,
        }
    }

    /// Attaches a function producing the suggestions for this parser.
    pub fn with_suggestions<F>(mut self, provider: F) -> Self
    where
        F: Fn(&CommandContext<S>, &str) -> Vec<String> + Send + Sync + 'static,
    {
        self.suggestions = Some(Arc::new(provider));
        self
    }

    /// Returns the parser's mode.
    pub fn mode(&self) -> StringMode {
        self.mode
    }
}

impl<S> Default for StringParser<S> {
    fn default() -> Self {
        Self::single()
    }
}

impl<S> Clone for StringParser<S> {
    fn clone(&self) -> Self {
        StringParser {
            mode: self.mode,
            suggestions: self.suggestions.clone(),
        }
    }
}

impl<S> fmt::Debug for StringParser<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringParser")
            .field("mode", &self.mode)
            .field("suggestions", &self.suggestions.is_some())
            .finish()
    }
}

/// Returns the number of tokens forming the quoted string at the front of `input`, or `None` if
/// the quote is never closed.
fn quoted_length(input: &InputQueue) -> Option<usize> {
    let first = input.peek()?;
    let rest = &first[1..];
    if !rest.is_empty() && rest.ends_with('"') {
        return Some(1);
    }
    input
        .iter()
        .skip(1)
        .position(|token| token.ends_with('"'))
        .map(|position| position + 2)
}

impl<S> ComponentParser<S> for StringParser<S> {
    type Value = String;

    fn parse(&self, _ctx: &CommandContext<S>, input: &mut InputQueue) -> ParseResult<String> {
        let token = input
            .peek()
            .ok_or_else(|| ParseError::missing_input("string"))?;
        match self.mode {
            StringMode::Single => Ok(input.remove()),
            StringMode::Greedy => {
                let mut tokens = Vec::with_capacity(input.len());
                while !input.is_empty() {
                    tokens.push(input.remove());
                }
                Ok(tokens.join(" "))
            }
            StringMode::Quoted if token.starts_with('"') => {
                let length = match quoted_length(input) {
                    Some(length) => length,
                    None => {
                        return Err(ParseError::incomplete_input(
                            token,
                            "unterminated quoted string",
                        ))
                    }
                };
                let tokens: Vec<String> = (0..length).map(|_| input.remove()).collect();
                let joined = tokens.join(" ");
                Ok(joined[1..joined.len() - 1].to_string())
            }
            StringMode::Quoted => Ok(input.remove()),
        }
    }

    fn suggestions(&self, ctx: &CommandContext<S>, input: &str) -> Vec<String> {
        match &self.suggestions {
            Some(provider) => provider(ctx, input),
            None => Vec::new(),
        }
    }
}

/// Parser matching one of a fixed set of aliases
///
/// Aliases are compared case-insensitively; the parsed value is always the first (canonical)
/// alias. Suggestions are all aliases in declaration order.
///
/// ```
/// use cmdcomponent::parsers::LiteralParser;
/// use cmdcomponent::{CommandContext, ComponentParser, InputQueue};
///
/// let parser = LiteralParser::new(["teleport", "tp"]);
/// let ctx = CommandContext::new(());
/// assert_eq!(parser.parse(&ctx, &mut InputQueue::tokenize("TP")), Ok("teleport".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct LiteralParser {
    aliases: Vec<String>,
}

impl LiteralParser {
    /// Creates a parser for the given aliases, the first one being canonical.
    ///
    /// # Panics
    ///
    /// Panics if `aliases` is empty.
    pub fn new<I>(aliases: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let aliases: Vec<String> = aliases.into_iter().map(Into::into).collect();
        assert!(!aliases.is_empty(), "a literal needs at least one alias");
        LiteralParser { aliases }
    }

    /// Returns the aliases, canonical one first.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }
}

impl<S> ComponentParser<S> for LiteralParser {
    type Value = String;

    fn parse(&self, _ctx: &CommandContext<S>, input: &mut InputQueue) -> ParseResult<String> {
        let token = input
            .peek()
            .ok_or_else(|| ParseError::missing_input(self.aliases[0].clone()))?;
        if self
            .aliases
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(token))
        {
            input.remove();
            Ok(self.aliases[0].clone())
        } else {
            Err(ParseError::invalid_input_with_message(
                token,
                format!("'{}' is not one of: {}", token, self.aliases.join(", ")),
            ))
        }
    }

    fn suggestions(&self, _ctx: &CommandContext<S>, _input: &str) -> Vec<String> {
        self.aliases.clone()
    }
}
