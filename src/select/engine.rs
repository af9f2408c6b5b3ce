//! Selection state machines: single-select, multi-select, and search-select.
//!
//! The engine composes the key decoder, frame renderer, and option sources
//! into blocking interactive loops. It is generic over the input stream,
//! output sink, and terminal control so the full state machines can be
//! driven by tests with scripted bytes and an in-memory sink.
//!
//! Everything here is single-threaded and cooperative: one key read or one
//! provider fetch is outstanding at any time, and a fetch is awaited to
//! completion before the next key is read.

use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::error::PromptError;

use super::frame::{Frame, FrameRenderer, FrameRow};
use super::key::{Key, KeyDecoder};
use super::settings;
use super::source::OptionsSource;
use super::term::{RawModeGuard, TerminalControl};

/// Validation hook: `None` accepts the value, `Some(message)` rejects it
/// with a user-facing explanation. Failures are always recovered by
/// re-prompting; they never propagate to the caller.
pub type Validator<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Immutable description of one search-select invocation.
pub struct SearchSpec<'a> {
    pub prompt: &'a str,
    pub validator: Option<Validator<'a>>,
    /// Queries shorter than this yield no results without consulting the
    /// source.
    pub min_query_length: usize,
    pub max_results: usize,
    /// Initial highlight in the navigation sub-state, clamped to the
    /// fetched result count.
    pub default_index: Option<usize>,
}

/// Committed search choice.
///
/// The chosen string is the primary result. `index` points into the result
/// snapshot the choice was made from; for a dynamic source that snapshot is
/// transient, so the index has no stable meaning across fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSelection {
    pub value: String,
    pub index: usize,
}

/// Outcome of one navigation sub-state session.
enum Navigation {
    Commit(usize),
    Restart,
}

/// Interactive selection engine over generic streams.
pub struct SelectionEngine<'t, R, W, T> {
    keys: KeyDecoder<R>,
    frame: FrameRenderer<W>,
    term: &'t mut T,
}

impl<'t, R, W, T> SelectionEngine<'t, R, W, T>
where
    R: BufRead,
    W: Write,
    T: TerminalControl,
{
    /// Build an engine over an input byte stream, an output sink, and a
    /// terminal-control handle. `columns` bounds row width for rendering.
    pub fn new(input: R, output: W, color: bool, columns: usize, term: &'t mut T) -> Self {
        Self {
            keys: KeyDecoder::new(input),
            frame: FrameRenderer::new(output, color, columns),
            term,
        }
    }

    /// Present `options` and return the index committed with Enter.
    ///
    /// Up/Down wrap around in both directions. `default_index` is used as
    /// given; keeping it in range is the caller's responsibility. `options`
    /// must be non-empty for the result to be meaningful.
    pub fn single_select(
        &mut self,
        prompt: &str,
        help: Option<&str>,
        options: &[String],
        default_index: usize,
    ) -> Result<usize, PromptError> {
        let Self { keys, frame, term } = self;
        let _raw = RawModeGuard::acquire(&mut **term)?;

        let mut highlight = default_index;
        loop {
            frame.paint(&list_frame(prompt, help, options, highlight, None))?;
            match keys.read_key()? {
                Key::Up => highlight = step_up(highlight, options.len()),
                Key::Down => highlight = step_down(highlight, options.len()),
                Key::Enter => {
                    let answer = options.get(highlight).map(String::as_str).unwrap_or("");
                    frame.commit(prompt, answer)?;
                    return Ok(highlight);
                }
                _ => {}
            }
        }
    }

    /// Present `options` with toggleable checkboxes and return the checked
    /// indices in ascending original-list order.
    ///
    /// Space toggles the highlighted row; Up/Down move the highlight
    /// without changing the selection; Enter commits. An empty selection is
    /// a valid commit. Out-of-range entries in `default_checked` are
    /// dropped, since they could never be toggled off.
    pub fn multi_select(
        &mut self,
        prompt: &str,
        help: Option<&str>,
        options: &[String],
        default_checked: &[usize],
    ) -> Result<Vec<usize>, PromptError> {
        let Self { keys, frame, term } = self;
        let _raw = RawModeGuard::acquire(&mut **term)?;

        let mut highlight = 0usize;
        let mut chosen: BTreeSet<usize> = default_checked
            .iter()
            .copied()
            .filter(|idx| *idx < options.len())
            .collect();

        loop {
            frame.paint(&list_frame(prompt, help, options, highlight, Some(&chosen)))?;
            match keys.read_key()? {
                Key::Up => highlight = step_up(highlight, options.len()),
                Key::Down => highlight = step_down(highlight, options.len()),
                Key::Space => {
                    if highlight < options.len() && !chosen.remove(&highlight) {
                        chosen.insert(highlight);
                    }
                }
                Key::Enter => {
                    let indices: Vec<usize> = chosen.iter().copied().collect();
                    let answers: Vec<&str> = indices
                        .iter()
                        .filter_map(|idx| options.get(*idx))
                        .map(String::as_str)
                        .collect();
                    frame.commit_list(prompt, &answers, settings::COMMIT_SEPARATOR)?;
                    return Ok(indices);
                }
                _ => {}
            }
        }
    }

    /// Query/fetch/navigate loop over an option source.
    ///
    /// The query is read as a plain echoed line (canonical mode); raw mode
    /// is held only while navigating results or waiting on a keypress.
    /// Returns with `PromptError::Cancelled` when the user quits with `q`;
    /// every other condition (no results, validation failure, provider
    /// failure) is recovered by returning to the query phase.
    pub async fn search_select(
        &mut self,
        spec: &SearchSpec<'_>,
        source: &OptionsSource<'_>,
    ) -> Result<SearchSelection, PromptError> {
        let mut error: Option<String> = None;
        loop {
            let query = self.read_query(spec.prompt, error.take().as_deref())?;
            debug!(query = %query, "search query submitted");

            let results = if query.chars().count() < spec.min_query_length {
                Vec::new()
            } else {
                match source.fetch(&query, spec.max_results).await {
                    Ok(results) => results,
                    Err(e) => {
                        warn!(error = %e, query = %query, "options provider fetch failed");
                        self.notice_and_wait(
                            spec.prompt,
                            &format!("{} {e}", settings::FETCH_FAILED_LABEL),
                        )?;
                        continue;
                    }
                }
            };
            debug!(results = results.len(), "search results fetched");

            if results.is_empty() {
                self.notice_and_wait(
                    spec.prompt,
                    &format!(
                        "{} '{query}' {}",
                        settings::NO_RESULTS_LABEL,
                        settings::NO_RESULTS_HINT
                    ),
                )?;
                continue;
            }

            if results.len() == 1 {
                // A single match commits without entering navigation; a
                // validation failure here returns to the query phase, not
                // the (never-entered) result list.
                if let Some(message) = run_validator(spec.validator, &results[0]) {
                    error = Some(message);
                    continue;
                }
                self.frame.commit(spec.prompt, &results[0])?;
                return Ok(SearchSelection {
                    value: results[0].clone(),
                    index: 0,
                });
            }

            match self.navigate_results(spec, &results)? {
                Navigation::Commit(index) => {
                    self.frame.commit(spec.prompt, &results[index])?;
                    return Ok(SearchSelection {
                        value: results[index].clone(),
                        index,
                    });
                }
                Navigation::Restart => continue,
            }
        }
    }

    /// Arrow-key browsing of a multi-result snapshot.
    ///
    /// `r` discards the results and restarts the query phase; `q` cancels
    /// the whole prompt. A validation failure on Enter stays in navigation
    /// with the message shown above the rows.
    fn navigate_results(
        &mut self,
        spec: &SearchSpec<'_>,
        results: &[String],
    ) -> Result<Navigation, PromptError> {
        let Self { keys, frame, term } = self;
        let _raw = RawModeGuard::acquire(&mut **term)?;

        let mut highlight = spec
            .default_index
            .unwrap_or(0)
            .min(results.len().saturating_sub(1));
        let mut error: Option<String> = None;

        loop {
            frame.paint(&Frame {
                title: spec.prompt,
                error: error.as_deref(),
                rows: option_rows(results, highlight, None),
                help: Some(settings::HELP_SEARCH),
            })?;
            error = None;

            match keys.read_key()? {
                Key::Up => highlight = step_up(highlight, results.len()),
                Key::Down => highlight = step_down(highlight, results.len()),
                Key::Enter => match run_validator(spec.validator, &results[highlight]) {
                    Some(message) => error = Some(message),
                    None => return Ok(Navigation::Commit(highlight)),
                },
                Key::Cmd('r') => return Ok(Navigation::Restart),
                Key::Cmd('q') => return Err(PromptError::Cancelled),
                _ => {}
            }
        }
    }

    /// Paint the query prompt (optionally with an error line above it) and
    /// read one non-empty line, re-prompting in place on empty input.
    fn read_query(&mut self, prompt: &str, error: Option<&str>) -> Result<String, PromptError> {
        loop {
            self.frame.paint_query(prompt, error)?;
            let query = self.keys.read_line()?;
            self.frame.query_entered();
            let query = query.trim();
            if !query.is_empty() {
                return Ok(query.to_string());
            }
        }
    }

    /// Show a transient notice frame and block until any keypress.
    fn notice_and_wait(&mut self, prompt: &str, message: &str) -> Result<(), PromptError> {
        let Self { keys, frame, term } = self;
        frame.paint(&Frame {
            title: prompt,
            error: Some(message),
            rows: Vec::new(),
            help: None,
        })?;
        let _raw = RawModeGuard::acquire(&mut **term)?;
        keys.read_any()?;
        Ok(())
    }
}

fn run_validator(validator: Option<Validator<'_>>, value: &str) -> Option<String> {
    validator.and_then(|validate| validate(value))
}

fn list_frame<'a>(
    title: &'a str,
    help: Option<&'a str>,
    options: &'a [String],
    highlight: usize,
    chosen: Option<&BTreeSet<usize>>,
) -> Frame<'a> {
    Frame {
        title,
        error: None,
        rows: option_rows(options, highlight, chosen),
        help,
    }
}

fn option_rows<'a>(
    options: &'a [String],
    highlight: usize,
    chosen: Option<&BTreeSet<usize>>,
) -> Vec<FrameRow<'a>> {
    options
        .iter()
        .enumerate()
        .map(|(idx, text)| FrameRow {
            text,
            active: idx == highlight,
            checked: chosen.map(|set| set.contains(&idx)),
        })
        .collect()
}

/// Move the highlight up one row, wrapping to the bottom.
fn step_up(index: usize, count: usize) -> usize {
    if count == 0 {
        return index;
    }
    if index == 0 {
        count - 1
    } else {
        index - 1
    }
}

/// Move the highlight down one row, wrapping to the top.
fn step_down(index: usize, count: usize) -> usize {
    if count == 0 {
        return index;
    }
    (index + 1) % count
}
