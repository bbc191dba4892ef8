//! Rewind Games - terminal tic-tac-toe with a rewindable move history.
//!
//! # Architecture
//!
//! - **Core** (`rewind_tictactoe`): rules, history controller, view model
//! - **TUI**: interactive play, one key press per command
//! - **Replay**: apply a scripted move list and print the result
//! - **Config**: TOML settings with CLI overrides
//!
//! # Example
//!
//! ```
//! use rewind_games::{ReplayScript, render_text, run_script};
//!
//! # fn example() -> anyhow::Result<()> {
//! let script = ReplayScript {
//!     moves: vec!["center".into(), "0".into()],
//!     ..ReplayScript::default()
//! };
//! let view = run_script(&script)?;
//! println!("{}", render_text(&view));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Settings};
pub use replay::{ReplayScript, render_text, run_script};
