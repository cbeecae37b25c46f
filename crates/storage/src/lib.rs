#![forbid(unsafe_code)]

pub mod record;
pub mod snapshot;

pub use record::{CardRecord, DeckSnapshot};
pub use snapshot::{StorageError, load_snapshot, save_deck, save_transcript};
