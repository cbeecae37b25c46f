use std::io::{self, BufRead, Write};
use std::path::Path;

use rand::rng;
use tracing::debug;

use flashcards_core::{Card, Deck};
use storage::StorageError;

use crate::console::Console;
use crate::drill::{self, Verdict};
use crate::stats::{self, HardestCards};

/// The menu line printed before every command read.
pub const MENU_PROMPT: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats)\n";

//
// ─── COMMANDS ──────────────────────────────────────────────────────────────────
//

/// The nine actions of the command loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Log,
    HardestCard,
    ResetStats,
    Exit,
}

impl Command {
    /// Parses a trimmed input line.
    ///
    /// Anything unmatched is `None`; the loop ignores it silently and
    /// re-prompts. There is no unknown-command message.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            "import" => Some(Self::Import),
            "export" => Some(Self::Export),
            "ask" => Some(Self::Ask),
            "log" => Some(Self::Log),
            "hardest card" => Some(Self::HardestCard),
            "reset stats" => Some(Self::ResetStats),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

//
// ─── COMMAND LOOP ──────────────────────────────────────────────────────────────
//

/// Runs the interactive command loop until `exit` or end of input.
///
/// `exit` prints the farewell (unrecorded), exports the deck to `export_to`
/// and returns. End of input ends the loop without that export. Handlers
/// never fail the loop; only console I/O errors propagate.
///
/// # Errors
///
/// Returns `io::Error` if reading from or writing to the console fails.
pub fn run<R: BufRead, W: Write>(
    deck: &mut Deck,
    console: &mut Console<R, W>,
    export_to: &Path,
) -> io::Result<()> {
    loop {
        console.say(MENU_PROMPT)?;
        let Some(line) = console.read_line()? else {
            return Ok(());
        };
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        debug!(?command, "dispatching");
        match command {
            Command::Add => add(deck, console)?,
            Command::Remove => remove(deck, console)?,
            Command::Import => import(deck, console)?,
            Command::Export => export(deck, console)?,
            Command::Ask => ask(deck, console)?,
            Command::Log => dump_log(console)?,
            Command::HardestCard => hardest_card(deck, console)?,
            Command::ResetStats => reset_stats(deck, console)?,
            Command::Exit => {
                console.print("Bye bye!\n")?;
                export_deck_to(deck, console, export_to)?;
                return Ok(());
            }
        }
    }
}

//
// ─── HANDLERS ──────────────────────────────────────────────────────────────────
//

fn add<R: BufRead, W: Write>(deck: &mut Deck, console: &mut Console<R, W>) -> io::Result<()> {
    console.say("The card:\n")?;
    let term = loop {
        let Some(term) = console.read_line()? else {
            return Ok(());
        };
        if deck.contains(&term) {
            console.say(&format!("The card \"{term}\" already exists. Try again:\n"))?;
            continue;
        }
        break term;
    };

    console.say("The definition of the card:\n")?;
    let definition = loop {
        let Some(definition) = console.read_line()? else {
            return Ok(());
        };
        if deck.definition_exists(&definition) {
            console.say(&format!(
                "The definition \"{definition}\" already exists. Try again:\n"
            ))?;
            continue;
        }
        break definition;
    };

    // both uniqueness checks passed in the retry loops above
    if deck.add(Card::new(term.clone(), definition.clone())).is_ok() {
        console.say(&format!(
            "The pair (\"{term}\":\"{definition}\") has been added.\n"
        ))?;
    }
    Ok(())
}

fn remove<R: BufRead, W: Write>(deck: &mut Deck, console: &mut Console<R, W>) -> io::Result<()> {
    console.say("Which card?\n")?;
    let Some(term) = console.read_line()? else {
        return Ok(());
    };

    match deck.remove(&term) {
        Ok(_) => console.say("The card has been removed.\n"),
        Err(_) => console.say(&format!("Can't remove \"{term}\": there is no such card.\n")),
    }
}

fn import<R: BufRead, W: Write>(deck: &mut Deck, console: &mut Console<R, W>) -> io::Result<()> {
    console.say("File name:\n")?;
    let Some(name) = console.read_line()? else {
        return Ok(());
    };
    import_from_path(deck, console, Path::new(&name))
}

/// Loads a deck file into `deck`, reporting the loaded count or the
/// file-not-found message. Shared between the `import` command and the
/// startup import.
///
/// # Errors
///
/// Returns `io::Error` only for console writes; storage failures degrade to
/// the printed message and leave the deck unchanged.
pub fn import_from_path<R: BufRead, W: Write>(
    deck: &mut Deck,
    console: &mut Console<R, W>,
    path: &Path,
) -> io::Result<()> {
    match storage::load_snapshot(path) {
        Ok(snapshot) => {
            let count = snapshot.apply_to(deck);
            console.say(&format!("{count} cards have been loaded.\n"))
        }
        Err(err) => {
            debug!(%err, "import failed");
            console.say("File not found.\n")
        }
    }
}

fn export<R: BufRead, W: Write>(deck: &mut Deck, console: &mut Console<R, W>) -> io::Result<()> {
    console.say("File name:\n")?;
    let Some(name) = console.read_line()? else {
        return Ok(());
    };
    export_deck_to(deck, console, Path::new(&name))
}

fn export_deck_to<R: BufRead, W: Write>(
    deck: &Deck,
    console: &mut Console<R, W>,
    path: &Path,
) -> io::Result<()> {
    match storage::save_deck(path, deck) {
        Ok(count) => console.say(&format!("{count} cards have been saved.\n")),
        Err(StorageError::Create { .. }) => console.say("Error creating file.\n"),
        Err(err) => {
            debug!(%err, "export stopped part-way");
            console.say("Error writing file.\n")
        }
    }
}

fn ask<R: BufRead, W: Write>(deck: &mut Deck, console: &mut Console<R, W>) -> io::Result<()> {
    if deck.is_empty() {
        return console.say("No cards available.\n");
    }

    console.say("How many times to ask?\n")?;
    let Some(reply) = console.read_line()? else {
        return Ok(());
    };
    let Ok(times) = reply.parse::<i32>() else {
        // a non-numeric count aborts the command without a message
        return Ok(());
    };

    let terms: Vec<String> = deck.terms().map(str::to_owned).collect();
    let mut rng = rng();

    for _ in 0..times.max(0) {
        let Some(term) = drill::pick_term(&terms, &mut rng) else {
            break;
        };
        console.say(&format!("Print the definition of \"{term}\":\n"))?;
        let Some(answer) = console.read_line()? else {
            return Ok(());
        };

        match drill::grade(deck, term, &answer) {
            Some(Verdict::Correct) => console.say("Correct!\n")?,
            Some(Verdict::Misattributed {
                correct,
                actual_term,
            }) => console.say(&format!(
                "Wrong. The right answer is \"{correct}\", but your definition is correct for \"{actual_term}\".\n"
            ))?,
            Some(Verdict::Wrong { correct }) => {
                console.say(&format!("Wrong. The right answer is \"{correct}\".\n"))?;
            }
            None => {}
        }
    }
    Ok(())
}

fn dump_log<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.say("File name:\n")?;
    let Some(name) = console.read_line()? else {
        return Ok(());
    };

    // The file includes the prompt and file name recorded just above; the
    // confirmation is only recorded after the write.
    match storage::save_transcript(Path::new(&name), console.transcript()) {
        Ok(()) => console.say("The log has been saved.\n"),
        Err(StorageError::Create { .. }) => console.say("Error creating file.\n"),
        Err(err) => {
            debug!(%err, "log dump stopped part-way");
            console.say("Error writing file.\n")
        }
    }
}

fn hardest_card<R: BufRead, W: Write>(
    deck: &Deck,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    match stats::hardest_cards(deck) {
        HardestCards::NoMistakes => console.say("There are no cards with errors.\n"),
        HardestCards::Single { term, mistakes } => console.say(&format!(
            "The hardest card is \"{term}\". You have {mistakes} errors answering it\n"
        )),
        HardestCards::Tied { terms } => {
            let joined = terms
                .iter()
                .map(|term| format!("\"{term}\""))
                .collect::<Vec<_>>()
                .join(", ");
            // the tie message historically omits the error count
            console.say(&format!("The hardest cards are {joined}\n"))
        }
    }
}

fn reset_stats<R: BufRead, W: Write>(
    deck: &mut Deck,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    deck.reset_stats();
    console.say("Card statistics have been reset.\n")
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
