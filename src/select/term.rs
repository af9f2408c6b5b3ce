//! Terminal session resource and raw-mode guard.
//!
//! Raw mode is process-wide terminal state, so it is modeled as an explicit
//! resource: callers open a [`TerminalSession`] once and the engine acquires
//! raw mode through an RAII guard that mutably borrows the session. A second
//! live guard cannot compile, and canonical mode is restored on every exit
//! path, including error returns.

use std::io::{self, IsTerminal};

use crossterm::terminal;

use crate::error::PromptError;

/// Raw-mode switch for a terminal-like resource.
///
/// The real implementation toggles the process terminal; tests substitute a
/// recording implementation to observe acquire/release ordering.
pub trait TerminalControl {
    fn set_raw(&mut self, enabled: bool) -> io::Result<()>;
}

/// Handle to the interactive terminal backing stdin/stderr.
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    /// Verify the process is attached to an interactive terminal.
    ///
    /// There is no non-TTY rendering path for the selection engine, so a
    /// redirected stdin or stderr fails here, before any state is touched.
    pub fn open() -> Result<Self, PromptError> {
        if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
            return Err(PromptError::NotATerminal);
        }
        Ok(Self { _private: () })
    }
}

impl TerminalControl for TerminalSession {
    fn set_raw(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        }
    }
}

/// Scoped raw-mode acquisition.
///
/// Disables line-buffering and echo on acquire and restores canonical mode
/// on drop. Restoration on drop is best-effort; there is nowhere left to
/// report a failure while unwinding.
pub struct RawModeGuard<'a> {
    term: &'a mut dyn TerminalControl,
}

impl<'a> RawModeGuard<'a> {
    pub fn acquire(term: &'a mut dyn TerminalControl) -> io::Result<Self> {
        term.set_raw(true)?;
        Ok(Self { term })
    }
}

impl Drop for RawModeGuard<'_> {
    fn drop(&mut self) {
        let _ = self.term.set_raw(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingTerm {
        transitions: Vec<bool>,
    }

    impl TerminalControl for RecordingTerm {
        fn set_raw(&mut self, enabled: bool) -> io::Result<()> {
            self.transitions.push(enabled);
            Ok(())
        }
    }

    #[test]
    fn guard_restores_canonical_mode_on_drop() {
        let mut term = RecordingTerm::default();
        {
            let _guard = RawModeGuard::acquire(&mut term).unwrap();
        }
        assert_eq!(term.transitions, vec![true, false]);
    }

    #[test]
    fn guard_restores_canonical_mode_when_scope_exits_early() {
        fn fails_midway(term: &mut RecordingTerm) -> io::Result<()> {
            let _guard = RawModeGuard::acquire(term)?;
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        }

        let mut term = RecordingTerm::default();
        assert!(fails_midway(&mut term).is_err());
        assert_eq!(term.transitions, vec![true, false]);
    }
}
