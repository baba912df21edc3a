use crate::{CommandContext, ComponentParser, InputQueue, ParseError, ParseResult};
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

/// Primitive integer types accepted by [`IntegerParser`]
pub trait Integer:
    Copy + PartialOrd + fmt::Display + FromStr<Err = ParseIntError> + Send + Sync
{
    /// The smallest value of the type.
    const MIN: Self;
    /// The largest value of the type.
    const MAX: Self;
}

macro_rules! impl_integer {
    ($($type:ty)*) => {
        $(
            impl Integer for $type {
                const MIN: Self = <$type>::MIN;
                const MAX: Self = <$type>::MAX;
            }
        )*
    };
}

impl_integer!(i8 u8 i16 u16 i32 u32 i64 u64 i128 u128 isize usize);

/// Parser implementation for primitive integer types
///
/// This parser consumes exactly one token. The accepted values may be narrowed to an inclusive
/// range; a number outside of that range, or one that does not fit into `T`, results in
/// [`ParseError::OutOfRange`]. Non-numeric tokens result in [`ParseError::InvalidInput`]. It does
/// not yield any suggestions.
///
/// # Example
/// ```
/// use cmdcomponent::parsers::IntegerParser;
/// use cmdcomponent::{CommandContext, ComponentParser, InputQueue};
///
/// let parser = IntegerParser::<u8>::new().with_max(10);
/// let ctx = CommandContext::new(());
/// assert_eq!(parser.parse(&ctx, &mut InputQueue::tokenize("7")), Ok(7));
/// assert_eq!(
///     parser.parse(&ctx, &mut InputQueue::tokenize("300")).unwrap_err().to_string(),
///     "'300' is not in the range 0 to 10",
/// );
/// ```
#[derive(Clone, Copy)]
pub struct IntegerParser<T> {
    min: T,
    max: T,
}

impl<T: Integer> IntegerParser<T> {
    /// Creates a parser accepting every value of `T`.
    pub fn new() -> Self {
        IntegerParser {
            min: T::MIN,
            max: T::MAX,
        }
    }

    /// Creates a parser accepting values within `min..=max`.
    pub fn range(min: T, max: T) -> Self {
        IntegerParser { min, max }
    }

    /// Sets the lowest accepted value.
    pub fn with_min(mut self, min: T) -> Self {
        self.min = min;
        self
    }

    /// Sets the highest accepted value.
    pub fn with_max(mut self, max: T) -> Self {
        self.max = max;
        self
    }

    /// Returns the lowest accepted value.
    pub fn min(&self) -> T {
        self.min
    }

    /// Returns the highest accepted value.
    pub fn max(&self) -> T {
        self.max
    }
}

impl<T: Integer> Default for IntegerParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Debug for IntegerParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntegerParser({}..={})", self.min, self.max)
    }
}

impl<S, T: Integer> ComponentParser<S> for IntegerParser<T> {
    type Value = T;

    fn parse(&self, _ctx: &CommandContext<S>, input: &mut InputQueue) -> ParseResult<T> {
        let token = input
            .peek()
            .ok_or_else(|| ParseError::missing_input("integer"))?;
        let value = match token.parse::<T>() {
            Ok(value) => value,
            Err(error) => {
                return Err(match error.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        ParseError::out_of_range(token, self.min, self.max)
                    }
                    _ => ParseError::invalid_input(token, "integer"),
                })
            }
        };
        if value < self.min || value > self.max {
            return Err(ParseError::out_of_range(token, self.min, self.max));
        }
        input.remove();
        Ok(value)
    }
}

/// Parser implementation for [`bool`]ean values
///
/// This parser consumes exactly one token, compared case-insensitively. A strict parser only
/// recognizes `true` and `false`, a liberal one additionally accepts the following:
///
/// | Parsing result | Recognized tokens       |
/// |----------------|-------------------------|
/// | [`true`]       | `true`, `yes`, `on`     |
/// | [`false`]      | `false`, `no`, `off`    |
///
/// Suggestions are the recognized spellings, regardless of the partial input.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanParser {
    liberal: bool,
}

const STRICT_VALUES: &[(&str, bool)] = &[("true", true), ("false", false)];

const LIBERAL_VALUES: &[(&str, bool)] = &[
    ("true", true),
    ("false", false),
    ("yes", true),
    ("no", false),
    ("on", true),
    ("off", false),
];

impl BooleanParser {
    /// Creates a strict parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser that also accepts `yes`/`no` and `on`/`off`.
    pub fn liberal() -> Self {
        BooleanParser { liberal: true }
    }

    /// Returns `true` if the parser accepts the liberal spellings.
    pub fn is_liberal(&self) -> bool {
        self.liberal
    }

    fn values(&self) -> &'static [(&'static str, bool)] {
        match self.liberal {
            true => LIBERAL_VALUES,
            false => STRICT_VALUES,
        }
    }
}

impl<S> ComponentParser<S> for BooleanParser {
    type Value = bool;

    fn parse(&self, _ctx: &CommandContext<S>, input: &mut InputQueue) -> ParseResult<bool> {
        let token = input
            .peek()
            .ok_or_else(|| ParseError::missing_input("boolean"))?;
        let value = self
            .values()
            .iter()
            .find(|(spelling, _)| spelling.eq_ignore_ascii_case(token))
            .map(|(_, value)| *value);
        match value {
            Some(value) => {
                input.remove();
                Ok(value)
            }
            None => Err(ParseError::invalid_input(token, "boolean")),
        }
    }

    fn suggestions(&self, _ctx: &CommandContext<S>, _input: &str) -> Vec<String> {
        self.values()
            .iter()
            .map(|(spelling, _)| spelling.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{BooleanParser, IntegerParser};
    use crate::testing::test_parse;
    use crate::{CommandContext, ComponentParser, ParseError};

    mod integer_parser {
        use super::*;

        #[test]
        fn debug() {
            assert_eq!(
                &format!("{:?}", IntegerParser::<i8>::default()),
                "IntegerParser(-128..=127)"
            );
        }

        test_parse!(parse_u8, IntegerParser::<u8>::new(), ["15", "abc"] => Ok(15, ["abc"]));
        test_parse!(parse_negative, IntegerParser::<i32>::new(), ["-42"] => Ok(-42, []));
        test_parse!(
            parse_within_range,
            IntegerParser::<i32>::range(1, 10),
            ["10"] => Ok(10, [])
        );
        test_parse!(
            missing,
            IntegerParser::<u8>::new(),
            [] => Err(ParseError::missing_input("integer"))
        );
        test_parse!(
            not_a_number,
            IntegerParser::<u8>::new(),
            ["abc", "1"] => Err(ParseError::invalid_input("abc", "integer"))
        );
        test_parse!(
            overflow,
            IntegerParser::<u8>::new(),
            ["300"] => Err(ParseError::out_of_range("300", 0, 255))
        );
        test_parse!(
            underflow,
            IntegerParser::<i8>::new(),
            ["-200"] => Err(ParseError::out_of_range("-200", -128, 127))
        );
        test_parse!(
            above_max,
            IntegerParser::<i32>::new().with_max(10),
            ["11"] => Err(ParseError::out_of_range("11", i32::MIN, 10))
        );
        test_parse!(
            below_min,
            IntegerParser::<i32>::new().with_min(1),
            ["0"] => Err(ParseError::out_of_range("0", 1, i32::MAX))
        );

        #[test]
        fn no_suggestions() {
            let parser = IntegerParser::<u8>::new();
            let ctx = CommandContext::new(());
            assert!(parser.suggestions(&ctx, "1").is_empty());
        }
    }

    mod boolean_parser {
        use super::*;

        test_parse!(parse_true, BooleanParser::new(), ["true", "x"] => Ok(true, ["x"]));
        test_parse!(parse_false_uppercase, BooleanParser::new(), ["FALSE"] => Ok(false, []));
        test_parse!(parse_liberal_yes, BooleanParser::liberal(), ["yes"] => Ok(true, []));
        test_parse!(parse_liberal_off, BooleanParser::liberal(), ["Off"] => Ok(false, []));
        test_parse!(
            strict_rejects_yes,
            BooleanParser::new(),
            ["yes"] => Err(ParseError::invalid_input("yes", "boolean"))
        );
        test_parse!(
            missing,
            BooleanParser::liberal(),
            [] => Err(ParseError::missing_input("boolean"))
        );

        #[test]
        fn suggestions() {
            let ctx = CommandContext::new(());
            assert_eq!(BooleanParser::new().suggestions(&ctx, ""), ["true", "false"]);
            assert_eq!(
                BooleanParser::liberal().suggestions(&ctx, "o"),
                ["true", "false", "yes", "no", "on", "off"]
            );
        }
    }
}
