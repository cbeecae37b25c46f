use flashcards_core::Deck;

//
// ─── HARDEST CARDS ─────────────────────────────────────────────────────────────
//

/// Result of the hardest-card computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HardestCards {
    /// Empty deck, or every card has a zero mistake count.
    NoMistakes,
    Single {
        term: String,
        mistakes: u32,
    },
    /// Two or more cards tied at the maximum; order is unspecified.
    Tied {
        terms: Vec<String>,
    },
}

/// Finds the card(s) with the highest mistake count.
#[must_use]
pub fn hardest_cards(deck: &Deck) -> HardestCards {
    let max = deck.cards().map(|c| c.mistakes).max().unwrap_or(0);
    if max == 0 {
        return HardestCards::NoMistakes;
    }

    let mut terms: Vec<String> = deck
        .cards()
        .filter(|c| c.mistakes == max)
        .map(|c| c.term.clone())
        .collect();

    if terms.len() == 1 {
        HardestCards::Single {
            term: terms.remove(0),
            mistakes: max,
        }
    } else {
        HardestCards::Tied { terms }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use flashcards_core::Card;

    fn deck_with(cards: &[(&str, &str, u32)]) -> Deck {
        let mut deck = Deck::new();
        for (term, definition, mistakes) in cards {
            deck.upsert(Card::with_mistakes(*term, *definition, *mistakes));
        }
        deck
    }

    #[test]
    fn empty_deck_has_no_mistakes() {
        assert_eq!(hardest_cards(&Deck::new()), HardestCards::NoMistakes);
    }

    #[test]
    fn all_zero_counters_count_as_no_mistakes() {
        let deck = deck_with(&[("cat", "feline", 0), ("dog", "canine", 0)]);
        assert_eq!(hardest_cards(&deck), HardestCards::NoMistakes);
    }

    #[test]
    fn unique_maximum_names_one_card() {
        let deck = deck_with(&[("cat", "feline", 2), ("dog", "canine", 5)]);
        assert_eq!(
            hardest_cards(&deck),
            HardestCards::Single {
                term: "dog".into(),
                mistakes: 5,
            }
        );
    }

    #[test]
    fn tie_names_exactly_the_tied_set() {
        let deck = deck_with(&[
            ("cat", "feline", 4),
            ("dog", "canine", 4),
            ("fox", "vulpine", 1),
        ]);

        let HardestCards::Tied { mut terms } = hardest_cards(&deck) else {
            panic!("expected a tie");
        };
        terms.sort();
        assert_eq!(terms, ["cat", "dog"]);
    }
}
