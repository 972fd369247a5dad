//! Library error type.
//!
//! Missing files and failed lookups are not errors here, they degrade to absent values.
//! Only dispatching external commands and prompting the user can fail.

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("reqwest error: {0}")]
	Reqwest(#[from] reqwest::Error),
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
	/// The command could not be started at all, usually because the program is not on `PATH`.
	#[error("failed to start `{command}`: {source}")]
	Spawn {
		command: String,
		source: std::io::Error,
	},
	/// The command ran but exited unsuccessfully. `code` is `None` when it was killed by a signal.
	#[error("`{command}` exited with status {}", .code.map(|c| c.to_string()).unwrap_or_else(|| "unknown".to_string()))]
	CommandFailed {
		command: String,
		code: Option<i32>,
	},
	#[error("prompt failed: {0}")]
	Prompt(String),
}
