#![forbid(unsafe_code)]

pub mod model;

pub use model::{Card, Deck, DeckError, Transcript};
