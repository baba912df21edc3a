//! Ordered argument lists and the sequential parsing of a command invocation.

use crate::component::{CommandComponent, ErasedComponent, Presence};
use crate::{CommandContext, InputQueue, ParseError, ParseErrorKind, ParseResult};
use std::any::Any;
use std::fmt;

/// Error raised when components are assembled into a [`Command`] that could never be parsed
/// unambiguously.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CommandError {
    /// Two components of the same command share a name.
    #[error("command {command:?} already has a component named {name:?}")]
    DuplicateComponent {
        /// Name of the command.
        command: String,
        /// The repeated component name.
        name: String,
    },

    /// A required component was declared after an optional one.
    #[error("required component {name:?} of command {command:?} follows an optional component")]
    RequiredAfterOptional {
        /// Name of the command.
        command: String,
        /// Name of the required component.
        name: String,
    },
}

/// Named, ordered list of components
///
/// `Command` holds components with different value types and parses an invocation by running
/// them one after another against a shared [`InputQueue`] and [`CommandContext`]. Each parsed
/// value is stored in the context under its component's name, so later parsers can depend on
/// earlier values and the caller can read all of them once parsing succeeded.
///
/// Components are validated when the command is assembled: names are unique and no required
/// component follows an optional one. A built command is `Send` and `Sync` and can be shared by
/// the threads handling invocations.
pub struct Command<S> {
    name: String,
    components: Vec<Box<dyn ErasedComponent<S>>>,
}

impl<S: 'static> Command<S> {
    /// Starts building a command called `name`.
    pub fn builder(name: impl Into<String>) -> CommandBuilder<S> {
        CommandBuilder {
            name: name.into(),
            components: Vec::new(),
        }
    }

    /// Returns the name of the command.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the names of the components in declaration order.
    pub fn component_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.components.iter().map(|component| component.name())
    }

    /// Renders the usage line of the command, such as `tp <target> [height]`.
    pub fn syntax(&self) -> String {
        let mut syntax = self.name.clone();
        for component in &self.components {
            syntax.push(' ');
            syntax.push_str(&component.syntax());
        }
        syntax
    }

    /// Parses the arguments of one invocation.
    ///
    /// Components are parsed in declaration order and parsing stops at the first failure, which
    /// is returned as is. When the input is exhausted, an optional component with a default value
    /// parses that default instead, and an optional component without one is skipped. Tokens left
    /// after the last component are reported as [`ParseError::TrailingInput`].
    pub fn parse(&self, ctx: &mut CommandContext<S>, input: &mut InputQueue) -> ParseResult<()> {
        for component in &self.components {
            let result = match (input.is_empty(), component.presence()) {
                (true, Presence::Optional) => {
                    log::trace!("skipping omitted component {:?}", component.name());
                    continue;
                }
                (true, Presence::OptionalWithDefault(default)) => {
                    log::trace!(
                        "using default {:?} for component {:?}",
                        default,
                        component.name()
                    );
                    component.parse_into(ctx, &mut InputQueue::tokenize(default))
                }
                _ => component.parse_into(ctx, input),
            };
            if let Err(error) = result {
                log::debug!(
                    "command {:?} failed at component {:?}: {}",
                    self.name,
                    component.name(),
                    error
                );
                return Err(error);
            }
        }

        match input.peek() {
            Some(token) => Err(ParseError::trailing_input(token)),
            None => Ok(()),
        }
    }

    /// Returns the suggestions for the last token of `input`.
    ///
    /// `input` holds the arguments typed so far, split on whitespace. If it ends with whitespace,
    /// the sender is starting a new token and the partial input is empty. The tokens are parsed
    /// as in [`parse`](Command::parse) and the suggestions are those of the component owning the
    /// partial token: the one reached when only that token is left, the one whose value extends
    /// over it, or the one reporting [`ParseError::MissingInput`] or
    /// [`ParseError::IncompleteInput`] for it. An empty vector is returned if a preceding token
    /// fails to parse or if every component has already been consumed.
    ///
    /// Values parsed along the way are visible to the suggesting parser; once the suggestions are
    /// collected `ctx` is left as it was before the call.
    pub fn suggestions(&self, ctx: &mut CommandContext<S>, input: &str) -> Vec<String> {
        let mut tokens: Vec<&str> = input.split_whitespace().collect();
        let partial = match input.chars().last() {
            Some(ch) if !ch.is_whitespace() => tokens.pop().unwrap_or_default(),
            _ => "",
        };
        tokens.push(partial);

        let mut queue: InputQueue = tokens.into_iter().collect();
        let mut replaced = Vec::new();
        let suggestions = self.owner_suggestions(ctx, &mut queue, partial, &mut replaced);
        for (name, previous) in replaced.into_iter().rev() {
            ctx.restore_raw(name, previous);
        }
        suggestions
    }

    fn owner_suggestions(
        &self,
        ctx: &mut CommandContext<S>,
        queue: &mut InputQueue,
        partial: &str,
        replaced: &mut Vec<(String, Option<Box<dyn Any>>)>,
    ) -> Vec<String> {
        for component in &self.components {
            if queue.len() == 1 {
                return component.suggestions(ctx, partial);
            }
            replaced.push((
                component.name().to_string(),
                ctx.take_raw(component.name()),
            ));
            match component.parse_into(ctx, queue) {
                Ok(()) if queue.is_empty() => return component.suggestions(ctx, partial),
                Ok(()) => {}
                Err(error)
                    if matches!(
                        error.kind(),
                        ParseErrorKind::MissingInput | ParseErrorKind::IncompleteInput
                    ) =>
                {
                    return component.suggestions(ctx, partial);
                }
                Err(error) => {
                    log::trace!("no suggestions for command {:?}: {}", self.name, error);
                    return Vec::new();
                }
            }
        }
        Vec::new()
    }
}

impl<S> fmt::Debug for Command<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.components.iter().map(|c| c.name()).collect();
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("components", &names)
            .finish()
    }
}

/// Staging object for a [`Command`]
pub struct CommandBuilder<S> {
    name: String,
    components: Vec<Box<dyn ErasedComponent<S>>>,
}

impl<S> fmt::Debug for CommandBuilder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.components.iter().map(|c| c.name()).collect();
        f.debug_struct("CommandBuilder")
            .field("name", &self.name)
            .field("components", &names)
            .finish()
    }
}

impl<S: 'static> CommandBuilder<S> {
    /// Appends a component to the command.
    ///
    /// Fails if a component with the same name was already added, or if `component` is required
    /// and an optional component precedes it.
    pub fn component<T: 'static>(
        mut self,
        component: CommandComponent<S, T>,
    ) -> Result<Self, CommandError> {
        if self.components.iter().any(|c| c.name() == component.name()) {
            return Err(CommandError::DuplicateComponent {
                command: self.name,
                name: component.name().to_string(),
            });
        }
        let follows_optional = self
            .components
            .iter()
            .any(|c| *c.presence() != Presence::Required);
        if component.is_required() && follows_optional {
            return Err(CommandError::RequiredAfterOptional {
                command: self.name,
                name: component.name().to_string(),
            });
        }
        self.components.push(Box::new(component));
        Ok(self)
    }

    /// Creates the command.
    pub fn build(self) -> Command<S> {
        Command {
            name: self.name,
            components: self.components,
        }
    }
}
