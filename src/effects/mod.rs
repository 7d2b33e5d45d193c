//! Card effects.
//!
//! Each playable card type maps to one handler function through an
//! exhaustive `match` (see [`handler`]), so adding a card type without a
//! handler is a compile error.

pub mod resolver;

pub use resolver::{handler, resolve, EffectContext, EffectHandler};
