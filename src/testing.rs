//! Helpers shared by the unit tests of the crate.

use crate::parsers::{World, WorldRegistry};
use std::sync::RwLock;

/// Generates a test that runs a parser against a fixed queue with a `()` sender.
///
/// On success the remaining tokens are compared with the expected ones; on failure the queue
/// must be left exactly as it was.
macro_rules! test_parse {
    ($name:ident, $parser:expr, [$($token:literal),*] => Ok($value:expr, [$($rest:literal),*])) => {
        #[test]
        #[allow(clippy::bool_assert_comparison)]
        fn $name() {
            let parser = $parser;
            let ctx = $crate::CommandContext::new(());
            let tokens: &[&str] = &[$($token),*];
            let mut queue: $crate::InputQueue = tokens.iter().copied().collect();
            let result = $crate::ComponentParser::<()>::parse(&parser, &ctx, &mut queue);
            assert_eq!(result, Ok($value));
            let rest: &[&str] = &[$($rest),*];
            assert_eq!(queue.iter().collect::<Vec<_>>(), rest);
        }
    };
    ($name:ident, $parser:expr, [$($token:literal),*] => Err($error:expr)) => {
        #[test]
        fn $name() {
            let parser = $parser;
            let ctx = $crate::CommandContext::new(());
            let tokens: &[&str] = &[$($token),*];
            let mut queue: $crate::InputQueue = tokens.iter().copied().collect();
            let result = $crate::ComponentParser::<()>::parse(&parser, &ctx, &mut queue);
            assert_eq!(result, Err($error));
            assert_eq!(queue.iter().collect::<Vec<_>>(), tokens);
        }
    };
}
pub(crate) use test_parse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TestWorld(pub(crate) String);

impl World for TestWorld {
    fn name(&self) -> &str {
        &self.0
    }
}

/// In-memory world registry whose contents can change between calls.
#[derive(Debug, Default)]
pub(crate) struct TestRegistry {
    names: RwLock<Vec<String>>,
}

impl TestRegistry {
    pub(crate) fn with_worlds(names: &[&str]) -> Self {
        TestRegistry {
            names: RwLock::new(names.iter().map(ToString::to_string).collect()),
        }
    }

    pub(crate) fn add(&self, name: &str) {
        self.names.write().unwrap().push(name.to_string());
    }
}

impl WorldRegistry for TestRegistry {
    type World = TestWorld;

    fn lookup(&self, name: &str) -> Option<TestWorld> {
        self.names
            .read()
            .unwrap()
            .iter()
            .find(|world| *world == name)
            .map(|world| TestWorld(world.clone()))
    }

    fn worlds(&self) -> Vec<TestWorld> {
        self.names.read().unwrap().iter().cloned().map(TestWorld).collect()
    }
}
