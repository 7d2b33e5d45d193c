//! Card model.
//!
//! A card is a plain tag from a fixed set of ten types. Containers for
//! cards (deck, hands, discard pile) live in `zones`.

pub mod card;

pub use card::Card;
