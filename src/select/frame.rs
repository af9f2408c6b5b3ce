//! In-place frame painting with erase-before-redraw tracking.
//!
//! Every interactive frame is painted as a run of `\r\n`-terminated lines.
//! The renderer records exactly how many lines the last paint emitted and,
//! on the next paint, moves the cursor up that many rows and clears
//! downward before writing the new frame. If the recorded count ever
//! disagreed with what was actually written, the next erase would either
//! swallow unrelated scrollback or leave stale rows behind. Every write
//! path in this module therefore goes through [`FrameRenderer::line`].
//!
//! Rows are clipped to the terminal width before painting; a soft-wrapped
//! row would occupy two terminal rows while counting as one.

use std::io::{self, Write};

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::style::{Color, Print, PrintStyledContent, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;

use super::settings;

/// One option row inside a frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameRow<'a> {
    pub text: &'a str,
    /// Whether the highlight marker points at this row.
    pub active: bool,
    /// Multi-select checkbox state; `None` for variants without one.
    pub checked: Option<bool>,
}

/// One complete paint of the interactive region.
#[derive(Debug, Clone, Default)]
pub struct Frame<'a> {
    pub title: &'a str,
    /// Transient error line (validation failure, empty results).
    pub error: Option<&'a str>,
    pub rows: Vec<FrameRow<'a>>,
    pub help: Option<&'a str>,
}

/// Paints frames onto a terminal-like sink and owns the erase arithmetic.
pub struct FrameRenderer<W> {
    out: W,
    color: bool,
    columns: usize,
    last_lines: usize,
}

/// Read terminal width or fall back to a fixed column count.
pub fn terminal_columns() -> usize {
    terminal::size()
        .ok()
        .map(|(cols, _)| cols as usize)
        .filter(|cols| *cols > 0)
        .unwrap_or(settings::FALLBACK_COLUMNS)
}

impl<W: Write> FrameRenderer<W> {
    pub fn new(out: W, color: bool, columns: usize) -> Self {
        Self {
            out,
            color,
            columns,
            last_lines: 0,
        }
    }

    /// Lines emitted by the most recent paint.
    pub fn last_line_count(&self) -> usize {
        self.last_lines
    }

    /// Erase the previous frame and paint `frame`. Returns the painted line
    /// count, which the next erase will consume.
    pub fn paint(&mut self, frame: &Frame<'_>) -> io::Result<usize> {
        self.erase_previous()?;

        let mut lines = 0usize;
        self.title_line(frame.title, &mut lines)?;
        if let Some(error) = frame.error {
            self.error_line(error, &mut lines)?;
        }
        for row in &frame.rows {
            self.option_row(row, &mut lines)?;
        }
        if let Some(help) = frame.help {
            self.help_line(help, &mut lines)?;
        }
        self.out.flush()?;

        self.last_lines = lines;
        Ok(lines)
    }

    /// Erase the whole interactive region and write the persistent
    /// commit line: checkmark, prompt text, answer.
    pub fn commit(&mut self, title: &str, answer: &str) -> io::Result<()> {
        self.erase_previous()?;

        let glyph = settings::commit_glyph(self.color);
        if self.color {
            self.out
                .queue(PrintStyledContent(glyph.with(settings::COLOR_COMMIT_GLYPH)))?;
            self.out.queue(Print(" "))?;
            self.out
                .queue(PrintStyledContent(title.to_string().bold()))?;
            self.out.queue(Print(" "))?;
            self.out.queue(PrintStyledContent(
                answer.to_string().with(settings::COLOR_COMMIT_ANSWER),
            ))?;
        } else {
            self.out
                .queue(Print(format!("{glyph} {title} {answer}")))?;
        }
        self.out.queue(Print("\r\n"))?;
        self.out.flush()?;

        self.last_lines = 0;
        Ok(())
    }

    /// Commit with a list answer joined by `separator`
    /// ([`settings::COMMIT_SEPARATOR`] unless the caller wants otherwise).
    /// An empty list renders the explicit "none" marker.
    pub fn commit_list(
        &mut self,
        title: &str,
        answers: &[&str],
        separator: &str,
    ) -> io::Result<()> {
        if answers.is_empty() {
            self.commit(title, settings::COMMIT_EMPTY)
        } else {
            self.commit(title, &answers.join(separator))
        }
    }

    /// Paint the search query prompt, leaving the cursor on the prompt line
    /// for canonical-mode (echoed) input.
    ///
    /// An error line (validation failure carried over from a previous
    /// attempt) is painted above the prompt and stays on screen while the
    /// user types.
    pub fn paint_query(&mut self, title: &str, error: Option<&str>) -> io::Result<()> {
        self.erase_previous()?;

        let mut lines = 0usize;
        if let Some(error) = error {
            self.error_line(error, &mut lines)?;
        }

        if self.color {
            self.out.queue(PrintStyledContent(
                settings::PROMPT_BULLET.with(settings::COLOR_PROMPT_BULLET),
            ))?;
            self.out.queue(Print(" "))?;
            self.out.queue(PrintStyledContent(
                title.to_string().with(settings::COLOR_PROMPT_TITLE).bold(),
            ))?;
            self.out.queue(Print(" "))?;
            self.out.queue(PrintStyledContent(
                settings::QUERY_PROMPT.with(settings::COLOR_HELP),
            ))?;
        } else {
            self.out.queue(Print(format!(
                "{} {title} {}",
                settings::PROMPT_BULLET,
                settings::QUERY_PROMPT
            )))?;
        }
        self.out.flush()?;

        // The prompt line itself is not erasable until the user completes
        // it with Enter; only the error line above it is.
        self.last_lines = lines;
        Ok(())
    }

    /// Record that the echoed query line was completed by Enter, making the
    /// prompt line part of the erasable region for the next paint.
    pub fn query_entered(&mut self) {
        self.last_lines += 1;
    }

    fn erase_previous(&mut self) -> io::Result<()> {
        if self.last_lines > 0 {
            self.out.queue(MoveUp(self.last_lines as u16))?;
        }
        self.out.queue(MoveToColumn(0))?;
        self.out.queue(Clear(ClearType::FromCursorDown))?;
        Ok(())
    }

    fn title_line(&mut self, title: &str, lines: &mut usize) -> io::Result<()> {
        let text = clip(title, self.columns.saturating_sub(2));
        if self.color {
            self.out.queue(PrintStyledContent(
                settings::PROMPT_BULLET.with(settings::COLOR_PROMPT_BULLET),
            ))?;
            self.out.queue(Print(" "))?;
            self.out.queue(PrintStyledContent(
                text.with(settings::COLOR_PROMPT_TITLE).bold(),
            ))?;
        } else {
            self.out
                .queue(Print(format!("{} {text}", settings::PROMPT_BULLET)))?;
        }
        self.line(lines)
    }

    fn option_row(&mut self, row: &FrameRow<'_>, lines: &mut usize) -> io::Result<()> {
        let marker = settings::row_marker(row.active, self.color);
        let prefix = match row.checked {
            Some(checked) => format!(
                "{}{marker} {} ",
                settings::INDENT_1,
                settings::checkbox(checked)
            ),
            None => format!("{}{marker} ", settings::INDENT_1),
        };
        let text = clip(row.text, self.columns.saturating_sub(prefix.chars().count()));

        if self.color {
            let marker_color = if row.active {
                settings::COLOR_ROW_MARKER_ACTIVE
            } else {
                settings::COLOR_ROW_MARKER_INACTIVE
            };
            let text_color = if row.active {
                settings::COLOR_ROW_ACTIVE
            } else if row.checked == Some(true) {
                settings::COLOR_ROW_CHECKED
            } else {
                Color::Reset
            };
            self.out.queue(Print(settings::INDENT_1))?;
            self.out
                .queue(PrintStyledContent(marker.with(marker_color)))?;
            self.out.queue(Print(" "))?;
            if let Some(checked) = row.checked {
                self.out.queue(Print(format!(
                    "{} ",
                    settings::checkbox(checked)
                )))?;
            }
            self.out.queue(PrintStyledContent(text.with(text_color)))?;
        } else {
            self.out
                .queue(Print(format!("{prefix}{text}")))?;
        }
        self.line(lines)
    }

    fn error_line(&mut self, error: &str, lines: &mut usize) -> io::Result<()> {
        let text = clip(error, self.columns.saturating_sub(2));
        if self.color {
            self.out.queue(Print(settings::INDENT_1))?;
            self.out
                .queue(PrintStyledContent(text.with(settings::COLOR_ERROR_LINE)))?;
        } else {
            self.out
                .queue(Print(format!("{}{text}", settings::INDENT_1)))?;
        }
        self.line(lines)
    }

    fn help_line(&mut self, help: &str, lines: &mut usize) -> io::Result<()> {
        let text = clip(help, self.columns.saturating_sub(2));
        if self.color {
            self.out.queue(Print(settings::INDENT_1))?;
            self.out
                .queue(PrintStyledContent(text.with(settings::COLOR_HELP)))?;
        } else {
            self.out
                .queue(Print(format!("{}{text}", settings::INDENT_1)))?;
        }
        self.line(lines)
    }

    /// Terminate the current line and bump the frame's line count. The
    /// count returned by `paint` must equal the number of calls here.
    fn line(&mut self, lines: &mut usize) -> io::Result<()> {
        self.out.queue(Print("\r\n"))?;
        *lines += 1;
        Ok(())
    }
}

/// Clip a string to at most `max_width` visible characters.
fn clip(s: &str, max_width: usize) -> String {
    s.chars().take(max_width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Extract the row counts of every cursor-up sequence in the output.
    fn cursor_ups(bytes: &[u8]) -> Vec<usize> {
        let text = String::from_utf8_lossy(bytes);
        let mut ups = Vec::new();
        let mut rest = text.as_ref();
        while let Some(idx) = rest.find("\x1b[") {
            rest = &rest[idx + 2..];
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            if rest[digits.len()..].starts_with('A') {
                if let Ok(n) = digits.parse() {
                    ups.push(n);
                }
            }
        }
        ups
    }

    fn frame<'a>(title: &'a str, rows: &'a [String], active: usize) -> Frame<'a> {
        Frame {
            title,
            error: None,
            rows: rows
                .iter()
                .enumerate()
                .map(|(idx, text)| FrameRow {
                    text,
                    active: idx == active,
                    checked: None,
                })
                .collect(),
            help: Some("help"),
        }
    }

    #[test]
    fn paint_counts_one_line_per_terminated_write() {
        let mut out = Vec::new();
        let rows = vec!["one".to_string(), "two".to_string()];
        let mut renderer = FrameRenderer::new(&mut out, false, 80);

        let lines = renderer.paint(&frame("pick", &rows, 0)).unwrap();

        // title + 2 rows + help
        assert_eq!(lines, 4);
        assert_eq!(renderer.last_line_count(), 4);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\r\n").count(), 4);
    }

    #[test]
    fn second_paint_moves_up_exactly_the_previous_line_count() {
        let mut out = Vec::new();
        let rows = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        let mut renderer = FrameRenderer::new(&mut out, false, 80);

        let first = renderer.paint(&frame("pick", &rows, 0)).unwrap();
        renderer.paint(&frame("pick", &rows, 1)).unwrap();

        assert_eq!(cursor_ups(&out), vec![first]);
    }

    #[test]
    fn erase_distance_tracks_shrinking_frames() {
        let mut out = Vec::new();
        let tall = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let short = vec!["a".to_string()];
        let mut renderer = FrameRenderer::new(&mut out, false, 80);

        let first = renderer.paint(&frame("pick", &tall, 0)).unwrap();
        let second = renderer.paint(&frame("pick", &short, 0)).unwrap();
        renderer.paint(&frame("pick", &tall, 0)).unwrap();

        assert_eq!(first, 5);
        assert_eq!(second, 3);
        assert_eq!(cursor_ups(&out), vec![first, second]);
    }

    #[test]
    fn commit_erases_frame_and_leaves_one_persistent_line() {
        let mut out = Vec::new();
        let rows = vec!["one".to_string()];
        let mut renderer = FrameRenderer::new(&mut out, false, 80);

        let painted = renderer.paint(&frame("pick", &rows, 0)).unwrap();
        renderer.commit("pick", "one").unwrap();

        assert_eq!(renderer.last_line_count(), 0);
        assert_eq!(cursor_ups(&out), vec![painted]);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("v pick one"));
    }

    #[test]
    fn commit_list_joins_answers_and_marks_empty_selections() {
        let mut out = Vec::new();
        let mut renderer = FrameRenderer::new(&mut out, false, 80);
        renderer
            .commit_list("langs", &["A", "C"], settings::COMMIT_SEPARATOR)
            .unwrap();
        renderer
            .commit_list("langs", &[], settings::COMMIT_SEPARATOR)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("v langs A, C"));
        assert!(text.contains("v langs None selected"));
    }

    #[test]
    fn query_prompt_becomes_erasable_once_entered() {
        let mut out = Vec::new();
        let mut renderer = FrameRenderer::new(&mut out, false, 80);

        renderer.paint_query("deps", None).unwrap();
        assert_eq!(renderer.last_line_count(), 0);

        renderer.query_entered();
        renderer.paint_query("deps", None).unwrap();

        // The re-prompt erased exactly the completed prompt line.
        assert_eq!(cursor_ups(&out), vec![1]);
    }

    #[test]
    fn query_prompt_error_line_joins_the_erasable_region() {
        let mut out = Vec::new();
        let mut renderer = FrameRenderer::new(&mut out, false, 80);

        renderer.paint_query("deps", Some("not installable")).unwrap();
        assert_eq!(renderer.last_line_count(), 1);

        renderer.query_entered();
        assert_eq!(renderer.last_line_count(), 2);

        renderer.paint_query("deps", None).unwrap();
        assert_eq!(cursor_ups(&out), vec![2]);
    }

    #[test]
    fn long_rows_are_clipped_to_the_terminal_width() {
        let mut out = Vec::new();
        let rows = vec!["abcdefghijklmnopqrstuvwxyz".to_string()];
        let mut renderer = FrameRenderer::new(&mut out, false, 12);

        renderer.paint(&frame("p", &rows, 0)).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("abcdefgh"));
        assert!(!text.contains("abcdefghi"));
    }

    #[test]
    fn checkbox_rows_render_their_state() {
        let mut out = Vec::new();
        let mut renderer = FrameRenderer::new(&mut out, false, 80);
        let rows = vec![
            FrameRow {
                text: "alpha",
                active: true,
                checked: Some(true),
            },
            FrameRow {
                text: "beta",
                active: false,
                checked: Some(false),
            },
        ];
        renderer
            .paint(&Frame {
                title: "t",
                error: None,
                rows,
                help: None,
            })
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("> [x] alpha"));
        assert!(text.contains("- [ ] beta"));
    }
}
