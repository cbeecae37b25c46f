mod card;
mod deck;
mod transcript;

pub use card::Card;
pub use deck::{Deck, DeckError};
pub use transcript::Transcript;
