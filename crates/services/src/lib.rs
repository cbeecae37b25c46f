#![forbid(unsafe_code)]

pub mod console;
pub mod drill;
pub mod repl;
pub mod stats;

pub use console::Console;
pub use drill::Verdict;
pub use repl::{Command, MENU_PROMPT, import_from_path, run};
pub use stats::HardestCards;
