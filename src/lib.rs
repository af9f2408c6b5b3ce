//! Lineup: interactive list selection for the terminal.
//!
//! This crate presents a list of textual options and lets the user
//! navigate, filter, and commit a choice with raw keyboard input. Frames
//! are redrawn in place (no scrollback growth) until a value is confirmed,
//! at which point one persistent confirmation line replaces the whole
//! interactive region.
//!
//! Three prompt variants are provided: single-select, multi-select (toggle
//! set), and search-select (query → fetch → navigate), with option lists
//! that are either fixed in memory or produced by an async query provider.
//!
//! # Quick start
//!
//! ```no_run
//! use lineup::select::run_single_select;
//!
//! let options: Vec<String> = ["Flutter", "React", "Vue"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let chosen = run_single_select("framework", None, &options, 0, true).unwrap();
//! println!("{}", options[chosen]);
//! ```

pub mod build_info;
pub mod config;
pub mod error;
pub mod registry;
pub mod select;
