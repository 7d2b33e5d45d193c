//! Card containers.
//!
//! ## Key Types
//!
//! - `Deck`: shared ordered draw pile, front is the next card drawn
//! - `Hand`: one player's unordered multiset of cards
//! - `DiscardPile`: everything that has left play
//!
//! Only the rules engine mutates these during a game.

pub mod deck;
pub mod discard;
pub mod hand;

pub use deck::Deck;
pub use discard::DiscardPile;
pub use hand::Hand;
