//! `cmdcomponent` parses the arguments of user commands into typed values and suggests
//! completions for partially typed arguments.
//!
//! A command is described as an ordered list of [`CommandComponent`]s. Each component has a name,
//! is either required or optional (possibly with a default value) and is bound to a
//! [`ComponentParser`] that knows how to turn the front of an [`InputQueue`] into a value of the
//! component's type. Parsing is performed against a [`CommandContext`] that carries the sender of
//! the command and the values that preceding components have already produced.
//!
//! Every type in this crate is generic over the sender type `S`. The crate never inspects the
//! sender, it is only carried in the context so that parsers can take it into account.
//!
//! # Example
//!
//! ```
//! use cmdcomponent::parsers::{IntegerParser, World, WorldRegistry};
//! use cmdcomponent::{parsers::world, Command, CommandComponent, CommandContext, InputQueue};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Level(String);
//!
//! impl World for Level {
//!     fn name(&self) -> &str {
//!         &self.0
//!     }
//! }
//!
//! struct Server {
//!     levels: Vec<&'static str>,
//! }
//!
//! impl WorldRegistry for Server {
//!     type World = Level;
//!
//!     fn lookup(&self, name: &str) -> Option<Level> {
//!         self.levels.iter().find(|level| **level == name).map(|level| Level(level.to_string()))
//!     }
//!
//!     fn worlds(&self) -> Vec<Level> {
//!         self.levels.iter().map(|level| Level(level.to_string())).collect()
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let server = Server { levels: vec!["world", "world_nether"] };
//! let command = Command::builder("teleport")
//!     .component(world::required("destination", server))?
//!     .component(CommandComponent::optional_with_default("height", IntegerParser::<i32>::new(), "64"))?
//!     .build();
//! assert_eq!(command.syntax(), "teleport <destination> [height]");
//!
//! let mut ctx = CommandContext::new("console");
//! command.parse(&mut ctx, &mut InputQueue::tokenize("world_nether"))?;
//! assert_eq!(ctx.get::<Level>("destination"), Some(&Level("world_nether".into())));
//! assert_eq!(ctx.get::<i32>("height"), Some(&64));
//!
//! let mut ctx = CommandContext::new("console");
//! let error = command.parse(&mut ctx, &mut InputQueue::tokenize("atlantis")).unwrap_err();
//! assert_eq!(error.to_string(), "'atlantis' is not a valid Minecraft world");
//! # Ok(())
//! # }
//! ```

mod command;
mod component;
mod context;
pub mod error;
pub mod parsers;
mod queue;
#[cfg(test)]
pub(crate) mod testing;

pub use command::{Command, CommandBuilder, CommandError};
pub use component::{Builder, CommandComponent, Presence};
pub use context::CommandContext;
pub use error::{ParseError, ParseErrorKind};
pub use queue::InputQueue;

/// The result value returned by the individual parsers
///
/// `Ok` carries the parsed value, `Err` carries the structured cause of the failure.
pub type ParseResult<T> = Result<T, ParseError>;

/// Definition of the parsing and suggestion algorithm for one argument type
///
/// This trait is the extension point of the crate: each argument type is supported by an
/// independent implementation, new types are added by implementing it. Implementations are
/// generic over the sender type `S` whenever they do not need to inspect the sender.
///
/// # Parsing protocol
///
/// [`parse`](ComponentParser::parse) must follow these rules so that a dispatcher can try several
/// command signatures against the same input and so that later components can re-inspect the
/// tokens that were not consumed:
///
///  * the parser peeks the queue first; if no token is available, it returns
///    [`ParseError::MissingInput`];
///  * if the token is not a valid instance of the value type, it returns
///    [`ParseError::InvalidInput`] (or another variant better describing the problem) carrying
///    the raw token;
///  * tokens are removed from the queue only on success. A parser may consume several tokens, but
///    the queue must be left untouched on every failure path.
///
/// Failures are values, a parser must not panic on invalid input.
///
/// Parsers are shared by every invocation of a command, possibly on several threads at once, so
/// implementations must be `Send` and `Sync`.
///
/// # Example
///
/// ```
/// use cmdcomponent::{CommandContext, ComponentParser, InputQueue, ParseError, ParseResult};
///
/// /// Accepts the name of any player that has already been parsed into the "target" slot.
/// struct SameAsTarget;
///
/// impl<S> ComponentParser<S> for SameAsTarget {
///     type Value = String;
///
///     fn parse(&self, ctx: &CommandContext<S>, input: &mut InputQueue) -> ParseResult<String> {
///         let token = input.peek().ok_or_else(|| ParseError::missing_input("player"))?;
///         match ctx.get::<String>("target") {
///             Some(target) if target == token => Ok(input.remove()),
///             _ => Err(ParseError::invalid_input(token, "target player")),
///         }
///     }
///
///     fn suggestions(&self, ctx: &CommandContext<S>, _input: &str) -> Vec<String> {
///         ctx.get::<String>("target").cloned().into_iter().collect()
///     }
/// }
///
/// let mut ctx = CommandContext::new(());
/// ctx.set("target", "alex".to_string());
/// let mut input = InputQueue::tokenize("steve");
/// assert_eq!(
///     SameAsTarget.parse(&ctx, &mut input).unwrap_err().to_string(),
///     "'steve' is not a valid target player",
/// );
/// assert_eq!(input.peek(), Some("steve"));
/// assert_eq!(SameAsTarget.suggestions(&ctx, ""), ["alex"]);
/// ```
pub trait ComponentParser<S>: Send + Sync {
    /// The type that this parser produces.
    type Value;

    /// Parses the front of `input` into a value.
    ///
    /// `ctx` holds the sender and the values parsed by preceding components. See the trait
    /// documentation for the rules implementations must follow.
    fn parse(&self, ctx: &CommandContext<S>, input: &mut InputQueue) -> ParseResult<Self::Value>;

    /// Returns completion candidates for the partially typed `input`.
    ///
    /// The order of the returned strings is significant. This method must neither fail nor panic;
    /// if the candidates cannot be determined it returns an empty vector. State the candidates
    /// depend on must be read on every call rather than cached by the parser.
    fn suggestions(&self, ctx: &CommandContext<S>, input: &str) -> Vec<String> {
        let _ = (ctx, input);
        Vec::new()
    }
}
