use flashcards_core::{Card, Deck};

//
// ─── CARD RECORD ───────────────────────────────────────────────────────────────
//

/// Persisted shape for a card.
///
/// This mirrors the domain `Card` so the codec can encode/decode without
/// leaking file-format concerns into the domain layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    pub term: String,
    pub definition: String,
    pub mistakes: u32,
}

impl CardRecord {
    #[must_use]
    pub fn from_card(card: &Card) -> Self {
        Self {
            term: card.term.clone(),
            definition: card.definition.clone(),
            mistakes: card.mistakes,
        }
    }

    #[must_use]
    pub fn into_card(self) -> Card {
        Card::with_mistakes(self.term, self.definition, self.mistakes)
    }

    /// Encodes the record as its three file lines, each newline-terminated.
    #[must_use]
    pub fn encode(&self) -> String {
        format!("{}\n{}\n{}\n", self.term, self.definition, self.mistakes)
    }
}

//
// ─── DECK SNAPSHOT ─────────────────────────────────────────────────────────────
//

/// A decoded deck file: the card records plus the count to report.
///
/// The file format is three lines per card (term, definition, decimal
/// mistake count) with no escaping. The reported count is computed as
/// `lines / 3` over the raw newline split (which includes the empty element
/// a trailing newline produces), so it can disagree with `records.len()`
/// for files with odd line counts. That formula is load-bearing for
/// compatibility with existing files and their historical load messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckSnapshot {
    records: Vec<CardRecord>,
    reported: usize,
}

impl DeckSnapshot {
    /// Decodes file content into card records.
    ///
    /// Groups of three are read at term-line offsets 0, 3, 6, …; a group
    /// whose definition or count line runs past the end of the content
    /// reads as empty, and a count that fails to parse as a `u32`
    /// (including negative values) defaults to 0.
    #[must_use]
    pub fn decode(content: &str) -> Self {
        let lines: Vec<&str> = content.split('\n').collect();

        let mut records = Vec::new();
        let mut i = 0;
        while i + 1 < lines.len() {
            records.push(CardRecord {
                term: lines[i].to_owned(),
                definition: lines[i + 1].to_owned(),
                mistakes: lines
                    .get(i + 2)
                    .and_then(|raw| raw.parse().ok())
                    .unwrap_or(0),
            });
            i += 3;
        }

        Self {
            records,
            reported: lines.len() / 3,
        }
    }

    /// The count the loader reports to the user.
    #[must_use]
    pub fn reported_count(&self) -> usize {
        self.reported
    }

    #[must_use]
    pub fn records(&self) -> &[CardRecord] {
        &self.records
    }

    /// Merges the snapshot into a deck, overwriting same-term cards, and
    /// returns the reported count.
    ///
    /// Definitions are not re-validated here: imported files can introduce
    /// duplicate definitions silently.
    pub fn apply_to(self, deck: &mut Deck) -> usize {
        for record in self.records {
            deck.upsert(record.into_card());
        }
        self.reported
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
