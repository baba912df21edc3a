use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Per-invocation state shared by the components of one command
///
/// A context is created when a command invocation starts and is dropped when it ends. It owns the
/// sender that issued the command and the values that components have already produced, keyed by
/// component name, so that a parser may depend on arguments that precede it.
///
/// Values are stored type-erased and retrieved with [`get`](CommandContext::get) by downcasting to
/// the component's value type.
///
/// ```
/// use cmdcomponent::CommandContext;
///
/// let mut ctx = CommandContext::new("console");
/// ctx.set("count", 3u32);
/// assert_eq!(ctx.get::<u32>("count"), Some(&3));
/// assert_eq!(ctx.get::<i64>("count"), None);
/// assert_eq!(*ctx.sender(), "console");
/// ```
pub struct CommandContext<S> {
    sender: S,
    values: HashMap<String, Box<dyn Any>>,
}

impl<S> CommandContext<S> {
    /// Creates an empty context for a command issued by `sender`.
    pub fn new(sender: S) -> Self {
        CommandContext {
            sender,
            values: HashMap::new(),
        }
    }

    /// Returns the sender of the command.
    pub fn sender(&self) -> &S {
        &self.sender
    }

    /// Consumes the context and returns the sender.
    pub fn into_sender(self) -> S {
        self.sender
    }

    /// Returns the value stored under `name` if there is one and it has type `T`.
    pub fn get<T: 'static>(&self, name: &str) -> Option<&T> {
        self.values.get(name)?.downcast_ref()
    }

    /// Returns the value stored under `name` regardless of its type.
    pub fn get_raw(&self, name: &str) -> Option<&dyn Any> {
        self.values.get(name).map(|value| &**value)
    }

    /// Returns `true` if a value is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Stores `value` under `name`. A value previously stored under the same name is replaced.
    pub fn set<T: 'static>(&mut self, name: impl Into<String>, value: T) {
        let name = name.into();
        if self.values.insert(name.clone(), Box::new(value)).is_some() {
            log::debug!("replaced context value {:?}", name);
        }
    }

    pub(crate) fn take_raw(&mut self, name: &str) -> Option<Box<dyn Any>> {
        self.values.remove(name)
    }

    /// Puts back a value removed with `take_raw`, or clears `name` if there was none.
    pub(crate) fn restore_raw(&mut self, name: String, previous: Option<Box<dyn Any>>) {
        match previous {
            Some(value) => {
                self.values.insert(name, value);
            }
            None => {
                self.values.remove(&name);
            }
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for CommandContext<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.values.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("CommandContext")
            .field("sender", &self.sender)
            .field("values", &names)
            .finish()
    }
}
