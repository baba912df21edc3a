//! Parser implementations for common argument types
//!
//! Each parser in this module is generic over the sender type so that it can be bound to a
//! component of any command. [`world`] additionally shows how a parser validates tokens against
//! state owned by the host application.

mod primitives;
mod strings;
pub mod world;

pub use primitives::*;
pub use strings::*;
pub use world::{World, WorldParser, WorldRegistry};
