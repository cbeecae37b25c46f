use std::collections::HashMap;

use thiserror::Error;

use crate::model::card::Card;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("card \"{0}\" already exists")]
    DuplicateTerm(String),

    #[error("definition \"{0}\" already exists")]
    DuplicateDefinition(String),

    #[error("no card named \"{0}\"")]
    UnknownTerm(String),
}

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// The in-memory card store for one session, keyed by term.
///
/// Terms are unique by construction. Definitions are unique only across
/// [`Deck::add`]; [`Deck::upsert`] (the import path) deliberately skips the
/// definition check, so imported data may carry duplicates. Iteration order
/// is unspecified.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: HashMap<String, Card>,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a card with this exact term exists.
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.cards.contains_key(term)
    }

    /// Returns true if any card carries this exact definition.
    ///
    /// Linear scan; the deck keeps no definition index.
    #[must_use]
    pub fn definition_exists(&self, definition: &str) -> bool {
        self.cards.values().any(|c| c.definition == definition)
    }

    /// Inserts a new card, enforcing both uniqueness invariants.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::DuplicateTerm` if the term is taken, or
    /// `DeckError::DuplicateDefinition` if the definition is.
    pub fn add(&mut self, card: Card) -> Result<(), DeckError> {
        if self.contains(&card.term) {
            return Err(DeckError::DuplicateTerm(card.term));
        }
        if self.definition_exists(&card.definition) {
            return Err(DeckError::DuplicateDefinition(card.definition));
        }
        self.cards.insert(card.term.clone(), card);
        Ok(())
    }

    /// Inserts a card, replacing any existing card with the same term.
    ///
    /// No definition check: this is the import path.
    pub fn upsert(&mut self, card: Card) {
        self.cards.insert(card.term.clone(), card);
    }

    /// Removes the card for this term.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::UnknownTerm` if no such card exists.
    pub fn remove(&mut self, term: &str) -> Result<Card, DeckError> {
        self.cards
            .remove(term)
            .ok_or_else(|| DeckError::UnknownTerm(term.to_owned()))
    }

    #[must_use]
    pub fn get(&self, term: &str) -> Option<&Card> {
        self.cards.get(term)
    }

    #[must_use]
    pub fn get_mut(&mut self, term: &str) -> Option<&mut Card> {
        self.cards.get_mut(term)
    }

    /// Finds any card carrying this exact definition.
    #[must_use]
    pub fn find_by_definition(&self, definition: &str) -> Option<&Card> {
        self.cards.values().find(|c| c.definition == definition)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.cards.keys().map(String::as_str)
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Zeroes every card's mistake counter.
    pub fn reset_stats(&mut self) {
        for card in self.cards.values_mut() {
            card.reset_stats();
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_with(cards: &[(&str, &str, u32)]) -> Deck {
        let mut deck = Deck::new();
        for (term, definition, mistakes) in cards {
            deck.upsert(Card::with_mistakes(*term, *definition, *mistakes));
        }
        deck
    }

    #[test]
    fn add_rejects_duplicate_term() {
        let mut deck = deck_with(&[("cat", "feline", 0)]);
        let err = deck.add(Card::new("cat", "tabby")).unwrap_err();
        assert_eq!(err, DeckError::DuplicateTerm("cat".into()));
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn add_rejects_duplicate_definition() {
        let mut deck = deck_with(&[("cat", "feline", 0)]);
        let err = deck.add(Card::new("lion", "feline")).unwrap_err();
        assert_eq!(err, DeckError::DuplicateDefinition("feline".into()));
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn add_inserts_fresh_card() {
        let mut deck = Deck::new();
        deck.add(Card::new("cat", "feline")).unwrap();
        assert_eq!(deck.get("cat"), Some(&Card::new("cat", "feline")));
    }

    #[test]
    fn upsert_overwrites_without_definition_check() {
        let mut deck = deck_with(&[("cat", "feline", 3), ("dog", "canine", 0)]);
        deck.upsert(Card::with_mistakes("cat", "canine", 1));

        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get("cat").unwrap().definition, "canine");
        assert_eq!(deck.get("cat").unwrap().mistakes, 1);
        // duplicate definitions now coexist
        assert_eq!(deck.get("dog").unwrap().definition, "canine");
    }

    #[test]
    fn remove_unknown_term_fails_and_leaves_deck_unchanged() {
        let mut deck = deck_with(&[("cat", "feline", 0)]);
        let err = deck.remove("bird").unwrap_err();
        assert_eq!(err, DeckError::UnknownTerm("bird".into()));
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn remove_returns_the_card() {
        let mut deck = deck_with(&[("cat", "feline", 2)]);
        let card = deck.remove("cat").unwrap();
        assert_eq!(card.mistakes, 2);
        assert!(deck.is_empty());
    }

    #[test]
    fn find_by_definition_matches_exactly() {
        let deck = deck_with(&[("cat", "feline", 0), ("dog", "canine", 0)]);
        assert_eq!(deck.find_by_definition("canine").unwrap().term, "dog");
        assert!(deck.find_by_definition("Canine").is_none());
    }

    #[test]
    fn reset_stats_zeroes_all_counters() {
        let mut deck = deck_with(&[("cat", "feline", 4), ("dog", "canine", 1)]);
        deck.reset_stats();
        assert!(deck.cards().all(|c| c.mistakes == 0));
        assert_eq!(deck.get("cat").unwrap().definition, "feline");
    }
}
