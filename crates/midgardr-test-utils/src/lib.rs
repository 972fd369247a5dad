//! Various helpers for testing
//!
//! functions in this crate return results rather than panicking so failures point at the test
//! that called them.

use std::path::Path;
use std::sync::Mutex;

use midgardr::dispatch::{CommandRunner, Invocation, ProjectNamePrompt};

/// A temporary project directory, removed on drop.
pub struct ProjectDir {
	dir: tempfile::TempDir,
}

impl ProjectDir {
	pub fn new() -> std::io::Result<Self> {
		Ok(Self { dir: tempfile::tempdir()? })
	}

	pub fn path(&self) -> &Path {
		self.dir.path()
	}

	/// Writes `config.midgardr` with raw content, comments allowed.
	pub fn with_config(self, content: &str) -> std::io::Result<Self> {
		std::fs::write(self.path().join("config.midgardr"), content)?;
		Ok(self)
	}

	/// Writes `package.json` with raw content.
	pub fn with_manifest(self, content: &str) -> std::io::Result<Self> {
		std::fs::write(self.path().join("package.json"), content)?;
		Ok(self)
	}

	/// Writes a `package.json` listing the icon package at `version`.
	pub fn with_icons(self, version: &str) -> std::io::Result<Self> {
		let manifest = format!(r#"{{ "name": "app", "dependencies": {{ "@a5gard/baldr": "{}" }} }}"#, version);
		self.with_manifest(&manifest)
	}

	/// Adds an entry to `.vscode`.
	pub fn with_extension_entry(self, name: &str) -> std::io::Result<Self> {
		let dir = self.path().join(".vscode");
		std::fs::create_dir_all(&dir)?;
		std::fs::write(dir.join(name), "{}")?;
		Ok(self)
	}

	pub fn with_file(self, name: &str) -> std::io::Result<Self> {
		std::fs::write(self.path().join(name), "")?;
		Ok(self)
	}
}

/// Records every invocation instead of running it.
#[derive(Default)]
pub struct RecordingRunner {
	calls: Mutex<Vec<Invocation>>,
	fail_program: Option<String>,
}

impl RecordingRunner {
	/// A runner that reports failure, with exit code 1, for invocations of `program`.
	pub fn failing_on(program: &str) -> Self {
		Self { calls: Default::default(), fail_program: Some(program.to_string()) }
	}

	pub fn calls(&self) -> Vec<Invocation> {
		self.calls.lock().map(|c| c.clone()).unwrap_or_default()
	}

	/// Invocations rendered as command lines.
	pub fn command_lines(&self) -> Vec<String> {
		self.calls().iter().map(ToString::to_string).collect()
	}
}

#[async_trait::async_trait]
impl CommandRunner for RecordingRunner {
	async fn run(&self, invocation: &Invocation) -> midgardr::Result<()> {
		if let Ok(mut calls) = self.calls.lock() {
			calls.push(invocation.clone());
		}
		if self.fail_program.as_deref() == Some(invocation.program.as_str()) {
			return Err(midgardr::Error::CommandFailed { command: invocation.to_string(), code: Some(1) });
		}
		Ok(())
	}
}

/// Answers the project name prompt with a fixed value, `None` meaning cancelled.
pub struct ScriptedPrompt(pub Option<String>);

impl ProjectNamePrompt for ScriptedPrompt {
	fn project_name(&self) -> midgardr::Result<Option<String>> {
		Ok(self.0.clone())
	}
}

/// HTTP client for talking to [`serve_fixed`] servers, ignoring any proxy set in the environment.
pub fn local_client() -> reqwest::Result<reqwest::Client> {
	reqwest::Client::builder().no_proxy().build()
}

/// Stub HTTP server answering every request, whatever the method or path, with the same status
/// and JSON body.
///
/// Returns the base URL, the server lives until the runtime shuts down.
pub async fn serve_fixed(status: u16, body: &str) -> std::io::Result<String> {
	let status = axum::http::StatusCode::from_u16(status).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
	let body = body.to_owned();
	let app = axum::Router::new().fallback(move || {
		let body = body.clone();
		async move { (status, [(axum::http::header::CONTENT_TYPE, "application/json")], body) }
	});

	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
	let addr = listener.local_addr()?;
	tokio::spawn(async move {
		if let Err(e) = axum::serve(listener, app).await {
			log::error!("Stub server error: {}", e);
		}
	});

	Ok(format!("http://{}", addr))
}

/// Routes `log` output through the test harness, honouring `RUST_LOG`. Safe to call from every test.
pub fn init_logging() {
	let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn serve_fixed_answers_any_request() {
		let url = serve_fixed(404, r#"{"error":"Not found"}"#).await.unwrap();
		let client = local_client().unwrap();

		let get = client.get(format!("{}/@a5gard/baldr", url)).send().await.unwrap();
		assert_eq!(get.status().as_u16(), 404);
		assert_eq!(get.headers()[reqwest::header::CONTENT_TYPE], "application/json");
		assert_eq!(get.text().await.unwrap(), r#"{"error":"Not found"}"#);

		let post = client.post(&url).body(r#"{"filters":[]}"#).send().await.unwrap();
		assert_eq!(post.status().as_u16(), 404);
	}

	#[tokio::test]
	async fn serve_fixed_rejects_invalid_status() {
		assert!(serve_fixed(42, "{}").await.is_err());
	}

	#[test]
	fn init_logging_twice() {
		init_logging();
		init_logging();
	}
}
