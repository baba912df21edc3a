//! Named, typed argument slots of a command.

use crate::{CommandContext, ComponentParser, InputQueue, ParseResult};
use std::any::{type_name, TypeId};
use std::fmt;
use std::sync::Arc;

/// Whether a component must be present in the input and what value is used when it is not
///
/// The optional forms are mutually exclusive variants rather than independent flags: a component
/// is either required, optional without a default, or optional with a default raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence {
    /// The component must be supplied.
    Required,
    /// The component may be omitted, in which case no value is produced.
    Optional,
    /// The component may be omitted, in which case the raw default is parsed in its place.
    OptionalWithDefault(String),
}

/// A named, typed argument of a command
///
/// `CommandComponent` binds a name and a [`Presence`] to a [`ComponentParser`] producing values of
/// type `T` for senders of type `S`. It is immutable once built; use [`Builder`] (via
/// [`CommandComponent::builder`]) or one of the shorthand constructors to create one.
///
/// Parsers are held behind an [`Arc`] so that one parser instance can be shared between several
/// components.
///
/// ```
/// use cmdcomponent::parsers::IntegerParser;
/// use cmdcomponent::CommandComponent;
///
/// let count = CommandComponent::<(), u32>::builder("count", IntegerParser::new())
///     .as_optional_with_default("1")
///     .build();
/// assert!(!count.is_required());
/// assert_eq!(count.default_value(), Some("1"));
/// assert_eq!(count.to_string(), "[count]");
/// ```
pub struct CommandComponent<S, T> {
    name: String,
    presence: Presence,
    parser: Arc<dyn ComponentParser<S, Value = T>>,
    value_type: TypeId,
    value_type_name: &'static str,
}

impl<S, T: 'static> CommandComponent<S, T> {
    /// Creates a builder for a component named `name` parsed by `parser`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn builder<P>(name: impl Into<String>, parser: P) -> Builder<S, T>
    where
        P: ComponentParser<S, Value = T> + 'static,
    {
        Builder::new(name, Arc::new(parser))
    }

    /// Same as [`builder`](CommandComponent::builder) but uses a parser instance that may be shared
    /// with other components.
    pub fn builder_shared(
        name: impl Into<String>,
        parser: Arc<dyn ComponentParser<S, Value = T>>,
    ) -> Builder<S, T> {
        Builder::new(name, parser)
    }

    /// Creates a required component.
    pub fn required<P>(name: impl Into<String>, parser: P) -> Self
    where
        P: ComponentParser<S, Value = T> + 'static,
    {
        Self::builder(name, parser).as_required().build()
    }

    /// Creates an optional component without a default value.
    pub fn optional<P>(name: impl Into<String>, parser: P) -> Self
    where
        P: ComponentParser<S, Value = T> + 'static,
    {
        Self::builder(name, parser).as_optional().build()
    }

    /// Creates an optional component that parses `default` when the sender omits it.
    pub fn optional_with_default<P>(
        name: impl Into<String>,
        parser: P,
        default: impl Into<String>,
    ) -> Self
    where
        P: ComponentParser<S, Value = T> + 'static,
    {
        Self::builder(name, parser)
            .as_optional_with_default(default)
            .build()
    }
}

impl<S, T> CommandComponent<S, T> {
    /// Returns the name of the component.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the component must be supplied by the sender.
    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }

    /// Returns the presence configuration of the component.
    pub fn presence(&self) -> &Presence {
        &self.presence
    }

    /// Returns the raw default value. Only optional components can have one.
    pub fn default_value(&self) -> Option<&str> {
        match &self.presence {
            Presence::OptionalWithDefault(default) => Some(default),
            Presence::Required | Presence::Optional => None,
        }
    }

    /// Returns the parser bound to this component.
    pub fn parser(&self) -> &Arc<dyn ComponentParser<S, Value = T>> {
        &self.parser
    }

    /// Returns the [`TypeId`] of the values this component produces.
    pub fn value_type(&self) -> TypeId {
        self.value_type
    }

    /// Returns the name of the type of the values this component produces, for diagnostics.
    pub fn value_type_name(&self) -> &'static str {
        self.value_type_name
    }

    /// Parses the front of `input` with the bound parser.
    pub fn parse(&self, ctx: &CommandContext<S>, input: &mut InputQueue) -> ParseResult<T> {
        self.parser.parse(ctx, input)
    }

    /// Returns the suggestions of the bound parser for the partially typed `input`.
    pub fn suggestions(&self, ctx: &CommandContext<S>, input: &str) -> Vec<String> {
        self.parser.suggestions(ctx, input)
    }
}

impl<S, T> Clone for CommandComponent<S, T> {
    fn clone(&self) -> Self {
        CommandComponent {
            name: self.name.clone(),
            presence: self.presence.clone(),
            parser: Arc::clone(&self.parser),
            value_type: self.value_type,
            value_type_name: self.value_type_name,
        }
    }
}

impl<S, T> fmt::Debug for CommandComponent<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandComponent")
            .field("name", &self.name)
            .field("presence", &self.presence)
            .field("value_type", &self.value_type_name)
            .finish()
    }
}

/// Renders the component the way it appears in a command's usage line: `<name>` for required and
/// `[name]` for optional components.
impl<S, T> fmt::Display for CommandComponent<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.presence {
            Presence::Required => write!(f, "<{}>", self.name),
            Presence::Optional | Presence::OptionalWithDefault(_) => write!(f, "[{}]", self.name),
        }
    }
}

/// Staging object for a [`CommandComponent`]
///
/// The presence methods overwrite each other, the last one called wins. A builder on which none
/// of them was called produces a required component. [`build`](Builder::build) consumes the
/// builder.
pub struct Builder<S, T> {
    name: String,
    parser: Arc<dyn ComponentParser<S, Value = T>>,
    presence: Option<Presence>,
}

impl<S, T: 'static> Builder<S, T> {
    /// Creates a builder for a component named `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn new(name: impl Into<String>, parser: Arc<dyn ComponentParser<S, Value = T>>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "component name must not be empty");
        Builder {
            name,
            parser,
            presence: None,
        }
    }

    /// Returns the name of the component being built.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Marks the component as required.
    pub fn as_required(mut self) -> Self {
        self.presence = Some(Presence::Required);
        self
    }

    /// Marks the component as optional without a default value.
    pub fn as_optional(mut self) -> Self {
        self.presence = Some(Presence::Optional);
        self
    }

    /// Marks the component as optional; `default` is parsed when the sender omits it.
    pub fn as_optional_with_default(mut self, default: impl Into<String>) -> Self {
        self.presence = Some(Presence::OptionalWithDefault(default.into()));
        self
    }

    /// Creates the component from the builder's state.
    pub fn build(self) -> CommandComponent<S, T> {
        CommandComponent {
            name: self.name,
            presence: self.presence.unwrap_or(Presence::Required),
            parser: self.parser,
            value_type: TypeId::of::<T>(),
            value_type_name: type_name::<T>(),
        }
    }
}

/// Type-erased view of a component used by [`Command`](crate::Command) to hold components of
/// different value types in one list.
pub(crate) trait ErasedComponent<S>: Send + Sync {
    fn name(&self) -> &str;

    fn presence(&self) -> &Presence;

    fn syntax(&self) -> String;

    /// Parses the component and stores the value in the context under the component's name.
    fn parse_into(&self, ctx: &mut CommandContext<S>, input: &mut InputQueue) -> ParseResult<()>;

    fn suggestions(&self, ctx: &CommandContext<S>, input: &str) -> Vec<String>;
}

impl<S, T: 'static> ErasedComponent<S> for CommandComponent<S, T> {
    fn name(&self) -> &str {
        CommandComponent::name(self)
    }

    fn presence(&self) -> &Presence {
        CommandComponent::presence(self)
    }

    fn syntax(&self) -> String {
        self.to_string()
    }

    fn parse_into(&self, ctx: &mut CommandContext<S>, input: &mut InputQueue) -> ParseResult<()> {
        let value = CommandComponent::parse(self, ctx, input)?;
        log::trace!("parsed component {:?} as {}", self.name, self.value_type_name);
        ctx.set(self.name.clone(), value);
        Ok(())
    }

    fn suggestions(&self, ctx: &CommandContext<S>, input: &str) -> Vec<String> {
        CommandComponent::suggestions(self, ctx, input)
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandComponent, Presence};
    use crate::parsers::{BooleanParser, IntegerParser};
    use crate::{CommandContext, ComponentParser, InputQueue, ParseError};
    use std::any::TypeId;
    use std::sync::Arc;

    mod builder {
        use super::*;

        #[test]
        fn required() {
            let component = CommandComponent::<(), i32>::builder("count", IntegerParser::new())
                .as_required()
                .build();
            assert!(component.is_required());
            assert_eq!(component.default_value(), None);
            assert_eq!(component.name(), "count");
        }

        #[test]
        fn unconfigured_is_required() {
            let component =
                CommandComponent::<(), i32>::builder("count", IntegerParser::new()).build();
            assert!(component.is_required());
            assert_eq!(component.presence(), &Presence::Required);
        }

        #[test]
        fn optional() {
            let component = CommandComponent::<(), i32>::builder("count", IntegerParser::new())
                .as_optional()
                .build();
            assert!(!component.is_required());
            assert_eq!(component.default_value(), None);
        }

        #[test]
        fn optional_with_default() {
            let component = CommandComponent::<(), i32>::builder("count", IntegerParser::new())
                .as_optional_with_default("x")
                .build();
            assert!(!component.is_required());
            assert_eq!(component.default_value(), Some("x"));
        }

        #[test]
        fn last_presence_wins() {
            let component = CommandComponent::<(), i32>::builder("count", IntegerParser::new())
                .as_optional_with_default("5")
                .as_required()
                .build();
            assert!(component.is_required());
            assert_eq!(component.default_value(), None);

            let component = CommandComponent::<(), i32>::builder("count", IntegerParser::new())
                .as_optional_with_default("5")
                .as_optional()
                .build();
            assert_eq!(component.presence(), &Presence::Optional);
        }

        #[test]
        #[should_panic(expected = "must not be empty")]
        fn empty_name() {
            CommandComponent::<(), i32>::builder("", IntegerParser::new());
        }
    }

    #[test]
    fn shorthand_constructors() {
        let required = CommandComponent::<(), bool>::required("flag", BooleanParser::new());
        assert!(required.is_required());

        let optional = CommandComponent::<(), bool>::optional("flag", BooleanParser::new());
        assert_eq!(optional.presence(), &Presence::Optional);

        let with_default = CommandComponent::<(), bool>::optional_with_default(
            "flag",
            BooleanParser::new(),
            "true",
        );
        assert_eq!(with_default.default_value(), Some("true"));
    }

    #[test]
    fn value_type() {
        let component = CommandComponent::<(), u8>::required("count", IntegerParser::new());
        assert_eq!(component.value_type(), TypeId::of::<u8>());
        assert_eq!(component.value_type_name(), "u8");
    }

    #[test]
    fn shares_parser() {
        let parser: Arc<dyn ComponentParser<(), Value = u8>> = Arc::new(IntegerParser::new());
        let first = CommandComponent::builder_shared("first", Arc::clone(&parser)).build();
        let second = CommandComponent::builder_shared("second", Arc::clone(&parser)).build();
        assert!(Arc::ptr_eq(first.parser(), second.parser()));
    }

    #[test]
    fn display() {
        let required = CommandComponent::<(), u8>::required("count", IntegerParser::new());
        let optional = CommandComponent::<(), u8>::optional("count", IntegerParser::new());
        assert_eq!(required.to_string(), "<count>");
        assert_eq!(optional.to_string(), "[count]");
    }

    #[test]
    fn debug() {
        let component = CommandComponent::<(), u8>::required("count", IntegerParser::new());
        assert_eq!(
            format!("{:?}", component),
            r#"CommandComponent { name: "count", presence: Required, value_type: "u8" }"#
        );
    }

    #[test]
    fn parse_delegates_to_parser() {
        let component = CommandComponent::<(), u8>::required("count", IntegerParser::new());
        let ctx = CommandContext::new(());
        let mut input = InputQueue::from_iter(["12", "rest"]);
        assert_eq!(component.parse(&ctx, &mut input), Ok(12));
        assert_eq!(input.peek(), Some("rest"));

        let mut input = InputQueue::new();
        assert_eq!(
            component.parse(&ctx, &mut input),
            Err(ParseError::missing_input("integer"))
        );
    }

    #[test]
    fn suggestions_delegate_to_parser() {
        let component = CommandComponent::<(), bool>::required("flag", BooleanParser::new());
        let ctx = CommandContext::new(());
        assert_eq!(component.suggestions(&ctx, "t"), ["true", "false"]);
    }
}
