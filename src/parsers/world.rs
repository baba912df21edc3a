//! Components whose values are worlds of the host game server.
//!
//! The host supplies its worlds through the [`WorldRegistry`] trait. [`WorldParser`] queries the
//! registry on every call, so worlds loaded or unloaded between invocations are picked up without
//! rebuilding the command.

use crate::component::{Builder, CommandComponent};
use crate::{CommandContext, ComponentParser, InputQueue, ParseError, ParseResult};
use std::sync::Arc;

/// A named world of the host application
pub trait World {
    /// Returns the name the world is addressed by in commands.
    fn name(&self) -> &str;
}

/// Lookup of the worlds currently known to the host application
///
/// Implementations must answer synchronously; parsers call them from within
/// [`ComponentParser::parse`] and [`ComponentParser::suggestions`], possibly from several threads
/// at once.
pub trait WorldRegistry: Send + Sync {
    /// The host's world handle.
    type World: World;

    /// Returns the world named `name` if it exists.
    fn lookup(&self, name: &str) -> Option<Self::World>;

    /// Returns every world, in the order the host lists them.
    fn worlds(&self) -> Vec<Self::World>;
}

impl<R: WorldRegistry + ?Sized> WorldRegistry for Arc<R> {
    type World = R::World;

    fn lookup(&self, name: &str) -> Option<Self::World> {
        (**self).lookup(name)
    }

    fn worlds(&self) -> Vec<Self::World> {
        (**self).worlds()
    }
}

/// Parser resolving a single token to a world of a [`WorldRegistry`]
///
/// An unknown name fails with [`ParseError::InvalidInput`] rendered as
/// `'<input>' is not a valid Minecraft world`.
///
/// Suggestions are the names of every world in the registry. The partial input is not used to
/// filter them; narrowing the list down by prefix is left to the caller.
#[derive(Debug, Clone)]
pub struct WorldParser<R> {
    registry: R,
}

impl<R: WorldRegistry> WorldParser<R> {
    /// Creates a parser resolving names against `registry`.
    pub fn new(registry: R) -> Self {
        WorldParser { registry }
    }

    /// Returns the registry the parser resolves names against.
    pub fn registry(&self) -> &R {
        &self.registry
    }
}

impl<S, R: WorldRegistry> ComponentParser<S> for WorldParser<R> {
    type Value = R::World;

    fn parse(&self, _ctx: &CommandContext<S>, input: &mut InputQueue) -> ParseResult<R::World> {
        let name = input
            .peek()
            .ok_or_else(|| ParseError::missing_input("world"))?;
        match self.registry.lookup(name) {
            Some(world) => {
                input.remove();
                Ok(world)
            }
            None => Err(ParseError::invalid_input(name, "Minecraft world")),
        }
    }

    fn suggestions(&self, _ctx: &CommandContext<S>, _input: &str) -> Vec<String> {
        self.registry
            .worlds()
            .iter()
            .map(|world| world.name().to_string())
            .collect()
    }
}

/// Creates a builder for a world component named `name`.
pub fn builder<S, R>(name: impl Into<String>, registry: R) -> Builder<S, R::World>
where
    R: WorldRegistry + 'static,
    R::World: 'static,
{
    CommandComponent::builder(name, WorldParser::new(registry))
}

/// Creates a required world component.
pub fn required<S, R>(name: impl Into<String>, registry: R) -> CommandComponent<S, R::World>
where
    R: WorldRegistry + 'static,
    R::World: 'static,
{
    builder(name, registry).as_required().build()
}

/// Creates an optional world component without a default.
pub fn optional<S, R>(name: impl Into<String>, registry: R) -> CommandComponent<S, R::World>
where
    R: WorldRegistry + 'static,
    R::World: 'static,
{
    builder(name, registry).as_optional().build()
}

/// Creates an optional world component that resolves the world named `default` when omitted.
pub fn optional_with_default<S, R>(
    name: impl Into<String>,
    registry: R,
    default: impl Into<String>,
) -> CommandComponent<S, R::World>
where
    R: WorldRegistry + 'static,
    R::World: 'static,
{
    builder(name, registry)
        .as_optional_with_default(default)
        .build()
}

#[cfg(test)]
mod tests {
    use super::WorldParser;
    use crate::testing::{test_parse, TestRegistry, TestWorld};
    use crate::{CommandContext, ComponentParser, InputQueue, ParseError, ParseErrorKind};
    use std::sync::Arc;

    fn registry() -> TestRegistry {
        TestRegistry::with_worlds(&["world", "world_nether"])
    }

    test_parse!(
        parse_existing,
        WorldParser::new(registry()),
        ["world_nether", "extra"] => Ok(TestWorld("world_nether".to_string()), ["extra"])
    );
    test_parse!(
        parse_unknown,
        WorldParser::new(registry()),
        ["atlantis"] => Err(ParseError::invalid_input("atlantis", "Minecraft world"))
    );
    test_parse!(
        parse_empty,
        WorldParser::new(registry()),
        [] => Err(ParseError::missing_input("world"))
    );

    #[test]
    fn unknown_world_message() {
        let parser = WorldParser::new(registry());
        let ctx = CommandContext::new(());
        let mut input = InputQueue::tokenize("atlantis");
        let error = parser.parse(&ctx, &mut input).unwrap_err();
        assert_eq!(error.kind(), ParseErrorKind::InvalidInput);
        assert_eq!(error.input(), Some("atlantis"));
        assert_eq!(error.to_string(), "'atlantis' is not a valid Minecraft world");
        assert_eq!(input.peek(), Some("atlantis"));
    }

    #[test]
    fn suggestions_list_every_world() {
        let parser = WorldParser::new(TestRegistry::with_worlds(&["world", "world_nether", "flat"]));
        let ctx = CommandContext::new(());
        for partial in ["", "wor", "flat", "zzz"] {
            assert_eq!(
                parser.suggestions(&ctx, partial),
                ["world", "world_nether", "flat"]
            );
        }
    }

    #[test]
    fn suggestions_are_idempotent() {
        let parser = WorldParser::new(registry());
        let ctx = CommandContext::new(());
        let input = InputQueue::tokenize("world");
        let first = parser.suggestions(&ctx, "w");
        let second = parser.suggestions(&ctx, "w");
        assert_eq!(first, second);
        assert_eq!(input, InputQueue::tokenize("world"));
    }

    #[test]
    fn reads_registry_on_every_call() {
        let registry = Arc::new(registry());
        let parser = WorldParser::new(Arc::clone(&registry));
        let ctx = CommandContext::new(());

        let mut input = InputQueue::tokenize("flat");
        assert!(parser.parse(&ctx, &mut input).is_err());

        registry.add("flat");
        assert_eq!(
            parser.parse(&ctx, &mut input),
            Ok(TestWorld("flat".to_string()))
        );
        assert!(input.is_empty());
        assert_eq!(
            parser.suggestions(&ctx, ""),
            ["world", "world_nether", "flat"]
        );
    }

    #[test]
    fn component_constructors() {
        let required = super::required::<(), _>("target", registry());
        assert!(required.is_required());
        assert_eq!(required.name(), "target");

        let optional = super::optional::<(), _>("target", registry());
        assert!(!optional.is_required());
        assert_eq!(optional.default_value(), None);

        let with_default = super::optional_with_default::<(), _>("target", registry(), "world");
        assert_eq!(with_default.default_value(), Some("world"));

        let ctx = CommandContext::new(());
        let mut input = InputQueue::tokenize("world");
        assert_eq!(
            required.parse(&ctx, &mut input),
            Ok(TestWorld("world".to_string()))
        );
    }
}
