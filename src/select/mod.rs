//! Interactive terminal selection prompts.
//!
//! This module hosts the selection engine and its building blocks: raw-mode
//! session handling, key decoding, in-place frame painting, and option
//! sources. The split keeps blocking input logic, erase arithmetic, and
//! output styling decoupled; the engine composes them into the three prompt
//! variants.
//!
//! The `run_*` functions at this level wire the engine to the real
//! terminal. Embedders with their own streams (or tests) construct a
//! [`SelectionEngine`] directly.

pub mod engine;
pub mod frame;
pub mod key;
pub mod settings;
pub mod source;
pub mod term;

pub use engine::{SearchSelection, SearchSpec, SelectionEngine, Validator};
pub use key::Key;
pub use source::{filter_options, OptionsProvider, OptionsSource};
pub use term::{RawModeGuard, TerminalControl, TerminalSession};

use std::io;

use crate::error::PromptError;
use frame::terminal_columns;

/// Present a one-of-N list prompt on the process terminal and return the
/// committed index.
///
/// Fails with [`PromptError::NotATerminal`] when stdin/stderr is not
/// interactive; there is no non-TTY fallback.
pub fn run_single_select(
    prompt: &str,
    help: Option<&str>,
    options: &[String],
    default_index: usize,
    color: bool,
) -> Result<usize, PromptError> {
    let mut session = TerminalSession::open()?;
    let stdin = io::stdin();
    let mut engine = SelectionEngine::new(
        stdin.lock(),
        io::stderr(),
        color,
        terminal_columns(),
        &mut session,
    );
    engine.single_select(prompt, help, options, default_index)
}

/// Present a toggle-list prompt and return the checked indices in
/// ascending original-list order. An empty selection is a valid commit.
pub fn run_multi_select(
    prompt: &str,
    help: Option<&str>,
    options: &[String],
    default_checked: &[usize],
    color: bool,
) -> Result<Vec<usize>, PromptError> {
    let mut session = TerminalSession::open()?;
    let stdin = io::stdin();
    let mut engine = SelectionEngine::new(
        stdin.lock(),
        io::stderr(),
        color,
        terminal_columns(),
        &mut session,
    );
    engine.multi_select(prompt, help, options, default_checked)
}

/// Run the query/fetch/navigate search prompt over an option source.
///
/// Returns [`PromptError::Cancelled`] when the user quits with `q`; every
/// other condition is recovered internally by re-prompting.
pub async fn run_search_select(
    spec: &SearchSpec<'_>,
    source: &OptionsSource<'_>,
    color: bool,
) -> Result<SearchSelection, PromptError> {
    let mut session = TerminalSession::open()?;
    let stdin = io::stdin();
    let mut engine = SelectionEngine::new(
        stdin.lock(),
        io::stderr(),
        color,
        terminal_columns(),
        &mut session,
    );
    engine.search_select(spec, source).await
}
