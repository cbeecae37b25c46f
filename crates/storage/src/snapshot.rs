use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use flashcards_core::{Deck, Transcript};

use crate::record::{CardRecord, DeckSnapshot};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors surfaced by the snapshot file operations.
///
/// Each variant keeps the path and the underlying `io::Error`; the command
/// loop maps them to the fixed user-facing messages.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

//
// ─── DECK FILES ────────────────────────────────────────────────────────────────
//

/// Reads and decodes a deck file.
///
/// # Errors
///
/// Returns `StorageError::Read` if the file cannot be read (a missing file
/// included); the deck file is never partially applied.
pub fn load_snapshot(path: &Path) -> Result<DeckSnapshot, StorageError> {
    let content = std::fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let snapshot = DeckSnapshot::decode(&content);
    debug!(
        path = %path.display(),
        records = snapshot.records().len(),
        "loaded deck snapshot"
    );
    Ok(snapshot)
}

/// Creates (or truncates) the file and writes every card as three lines, in
/// deck iteration order. Returns the number of cards in the deck.
///
/// # Errors
///
/// Returns `StorageError::Create` if the file cannot be created and
/// `StorageError::Write` if writing fails part-way; a partial file may be
/// left behind in the latter case, but no further entries are written.
pub fn save_deck(path: &Path, deck: &Deck) -> Result<usize, StorageError> {
    let file = File::create(path).map_err(|source| StorageError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    let write_err = |source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    for card in deck.cards() {
        writer
            .write_all(CardRecord::from_card(card).encode().as_bytes())
            .map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    debug!(path = %path.display(), cards = deck.len(), "saved deck snapshot");
    Ok(deck.len())
}

//
// ─── TRANSCRIPT FILES ──────────────────────────────────────────────────────────
//

/// Writes the transcript, one entry per line.
///
/// Printed-message entries already end in a newline, so they produce a
/// blank boundary line in the file. That matches the historical log format.
///
/// # Errors
///
/// Returns `StorageError::Create` or `StorageError::Write` as for
/// [`save_deck`].
pub fn save_transcript(path: &Path, transcript: &Transcript) -> Result<(), StorageError> {
    let file = File::create(path).map_err(|source| StorageError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    let write_err = |source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    for entry in transcript.entries() {
        writeln!(writer, "{entry}").map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    debug!(
        path = %path.display(),
        entries = transcript.len(),
        "saved transcript"
    );
    Ok(())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use flashcards_core::Card;

    #[test]
    fn save_then_load_round_trips_every_card() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.txt");

        let mut deck = Deck::new();
        deck.add(Card::with_mistakes("cat", "feline", 2)).unwrap();
        deck.add(Card::with_mistakes("dog", "canine", 0)).unwrap();

        let saved = save_deck(&path, &deck).unwrap();
        assert_eq!(saved, 2);

        let mut reloaded = Deck::new();
        let reported = load_snapshot(&path).unwrap().apply_to(&mut reloaded);

        assert_eq!(reported, 2);
        assert_eq!(reloaded.get("cat").unwrap().mistakes, 2);
        assert_eq!(reloaded.get("dog").unwrap().definition, "canine");
    }

    #[test]
    fn load_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_snapshot(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }));
    }

    #[test]
    fn create_failure_is_distinguished_from_write_failure() {
        // A directory path cannot be created as a file.
        let dir = tempfile::tempdir().unwrap();
        let err = save_deck(dir.path(), &Deck::new()).unwrap_err();
        assert!(matches!(err, StorageError::Create { .. }));
    }

    #[test]
    fn transcript_entries_keep_their_embedded_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.log");

        let mut transcript = Transcript::new();
        transcript.record("The card:\n");
        transcript.record("cat");

        save_transcript(&path, &transcript).unwrap();

        // The prompt entry ends in '\n' and gains another from the writer,
        // leaving a blank boundary line between entries.
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "The card:\n\ncat\n");
    }
}
