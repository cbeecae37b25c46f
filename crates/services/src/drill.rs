use rand::Rng;
use rand::seq::IndexedRandom;

use flashcards_core::Deck;

//
// ─── VERDICT ───────────────────────────────────────────────────────────────────
//

/// Outcome of grading one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    /// Wrong for the asked card, but the submitted text is the definition
    /// of another card.
    Misattributed {
        correct: String,
        actual_term: String,
    },
    Wrong {
        correct: String,
    },
}

//
// ─── DRILL ─────────────────────────────────────────────────────────────────────
//

/// Picks one term uniformly at random, with replacement across calls.
///
/// No weighting by mistake count and no deduplication between draws.
#[must_use]
pub fn pick_term<'a, R: Rng + ?Sized>(terms: &'a [String], rng: &mut R) -> Option<&'a str> {
    terms.choose(rng).map(String::as_str)
}

/// Grades `answer` against the card for `term`, updating mistake counts.
///
/// A wrong answer charges the asked card one mistake before the other cards
/// are scanned for a definition match, so a misattributed answer still
/// counts against the asked card. Matching is exact.
///
/// Returns `None` if `term` is not in the deck.
pub fn grade(deck: &mut Deck, term: &str, answer: &str) -> Option<Verdict> {
    let card = deck.get_mut(term)?;
    if card.definition == answer {
        return Some(Verdict::Correct);
    }

    card.note_mistake();
    let correct = card.definition.clone();

    let verdict = match deck.find_by_definition(answer) {
        Some(other) => Verdict::Misattributed {
            correct,
            actual_term: other.term.clone(),
        },
        None => Verdict::Wrong { correct },
    };
    Some(verdict)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use flashcards_core::Card;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn deck_with(cards: &[(&str, &str)]) -> Deck {
        let mut deck = Deck::new();
        for (term, definition) in cards {
            deck.add(Card::new(*term, *definition)).unwrap();
        }
        deck
    }

    #[test]
    fn exact_match_is_correct_and_charges_nothing() {
        let mut deck = deck_with(&[("cat", "feline")]);
        let verdict = grade(&mut deck, "cat", "feline").unwrap();

        assert_eq!(verdict, Verdict::Correct);
        assert_eq!(deck.get("cat").unwrap().mistakes, 0);
    }

    #[test]
    fn wrong_answer_charges_the_asked_card() {
        let mut deck = deck_with(&[("cat", "feline")]);
        let verdict = grade(&mut deck, "cat", "canine").unwrap();

        assert_eq!(
            verdict,
            Verdict::Wrong {
                correct: "feline".into()
            }
        );
        assert_eq!(deck.get("cat").unwrap().mistakes, 1);
    }

    #[test]
    fn misattributed_answer_names_the_other_term_and_still_charges() {
        let mut deck = deck_with(&[("cat", "feline"), ("dog", "canine")]);
        let verdict = grade(&mut deck, "cat", "canine").unwrap();

        assert_eq!(
            verdict,
            Verdict::Misattributed {
                correct: "feline".into(),
                actual_term: "dog".into(),
            }
        );
        assert_eq!(deck.get("cat").unwrap().mistakes, 1);
        assert_eq!(deck.get("dog").unwrap().mistakes, 0);
    }

    #[test]
    fn near_miss_is_not_a_match() {
        let mut deck = deck_with(&[("cat", "feline")]);
        let verdict = grade(&mut deck, "cat", "Feline").unwrap();
        assert!(matches!(verdict, Verdict::Wrong { .. }));
    }

    #[test]
    fn unknown_term_grades_nothing() {
        let mut deck = deck_with(&[("cat", "feline")]);
        assert_eq!(grade(&mut deck, "bird", "avian"), None);
    }

    #[test]
    fn pick_term_draws_a_member() {
        let terms = vec!["cat".to_owned(), "dog".to_owned()];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = pick_term(&terms, &mut rng).unwrap();
            assert!(picked == "cat" || picked == "dog");
        }
    }

    #[test]
    fn pick_term_on_empty_slice_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_term(&[], &mut rng), None);
    }
}
