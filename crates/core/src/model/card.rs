//
// ─── CARD ──────────────────────────────────────────────────────────────────────
//

/// A single flashcard: a term, its definition, and the number of times the
/// user has answered it wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub term: String,
    pub definition: String,
    pub mistakes: u32,
}

impl Card {
    /// Creates a fresh card with a zero mistake count.
    #[must_use]
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes: 0,
        }
    }

    /// Rebuilds a card from persisted fields, mistake count included.
    #[must_use]
    pub fn with_mistakes(
        term: impl Into<String>,
        definition: impl Into<String>,
        mistakes: u32,
    ) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes,
        }
    }

    /// Records one wrong answer against this card.
    pub fn note_mistake(&mut self) {
        self.mistakes += 1;
    }

    /// Clears the mistake counter, keeping term and definition.
    pub fn reset_stats(&mut self) {
        self.mistakes = 0;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
