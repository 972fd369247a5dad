//! Running external commands.

use std::path::PathBuf;

/// A single external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
	pub program: String,
	pub args: Vec<String>,
	/// Working directory, the current one when `None`.
	pub cwd: Option<PathBuf>,
}

impl Invocation {
	pub fn new(program: impl Into<String>) -> Self {
		Self { program: program.into(), args: Vec::new(), cwd: None }
	}

	pub fn arg(mut self, arg: impl Into<String>) -> Self {
		self.args.push(arg.into());
		self
	}

	pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.args.extend(args.into_iter().map(Into::into));
		self
	}

	pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.cwd = Some(dir.into());
		self
	}
}

impl std::fmt::Display for Invocation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.program)?;
		for arg in &self.args {
			write!(f, " {}", arg)?;
		}
		Ok(())
	}
}

/// Runs invocations to completion.
#[async_trait::async_trait]
pub trait CommandRunner: Send + Sync {
	/// # Errors
	/// - [`Spawn`](crate::Error::Spawn) when the program cannot be started.
	/// - [`CommandFailed`](crate::Error::CommandFailed) when it exits unsuccessfully.
	async fn run(&self, invocation: &Invocation) -> crate::Result<()>;
}

/// Spawns real processes that share this process's terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

#[async_trait::async_trait]
impl CommandRunner for ProcessRunner {
	async fn run(&self, invocation: &Invocation) -> crate::Result<()> {
		let mut command = build_command(invocation);
		command
			.stdin(std::process::Stdio::inherit())
			.stdout(std::process::Stdio::inherit())
			.stderr(std::process::Stdio::inherit());
		if let Some(dir) = &invocation.cwd {
			command.current_dir(dir);
		}

		log::info!("Running `{}`", invocation);
		let status = command.status().await.map_err(|source| crate::Error::Spawn {
			command: invocation.to_string(),
			source,
		})?;

		if status.success() {
			Ok(())
		} else {
			Err(crate::Error::CommandFailed { command: invocation.to_string(), code: status.code() })
		}
	}
}

/// Node tooling and the editor launcher are `.cmd` shims on Windows, which only `cmd` can resolve.
fn build_command(invocation: &Invocation) -> tokio::process::Command {
	#[cfg(windows)]
	let command = {
		let mut command = tokio::process::Command::new("cmd");
		command.arg("/C").arg(&invocation.program).args(&invocation.args);
		command
	};

	#[cfg(not(windows))]
	let command = {
		let mut command = tokio::process::Command::new(&invocation.program);
		command.args(&invocation.args);
		command
	};

	command
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invocation_display() {
		let i = Invocation::new("code").args(["--install-extension", "skyler.ocrmnav", "--force"]);
		assert_eq!(i.to_string(), "code --install-extension skyler.ocrmnav --force");
	}

	#[test]
	fn command_line_matches_invocation() {
		let i = Invocation::new("npx").args(["create-remix@latest", "my-app"]);
		let command = build_command(&i);
		let std_command = command.as_std();
		let args: Vec<_> = std_command.get_args().map(|a| a.to_string_lossy().into_owned()).collect();

		#[cfg(windows)]
		{
			assert_eq!(std_command.get_program(), "cmd");
			assert_eq!(args, vec!["/C", "npx", "create-remix@latest", "my-app"]);
		}
		#[cfg(not(windows))]
		{
			assert_eq!(std_command.get_program(), "npx");
			assert_eq!(args, vec!["create-remix@latest", "my-app"]);
		}
	}

	#[cfg(windows)]
	#[tokio::test]
	async fn cmd_shim_resolves() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("midgardr-shim.cmd"), "@exit /b 0\r\n").unwrap();
		let i = Invocation::new("midgardr-shim").current_dir(dir.path());
		ProcessRunner.run(&i).await.unwrap();
	}

	#[cfg(not(windows))]
	#[tokio::test]
	async fn missing_program_is_spawn_error() {
		let i = Invocation::new("midgardr-this-program-does-not-exist");
		match ProcessRunner.run(&i).await {
			Err(crate::Error::Spawn { command, .. }) => assert_eq!(command, "midgardr-this-program-does-not-exist"),
			other => panic!("expected spawn error, got {:?}", other),
		}
	}

	#[cfg(unix)]
	#[tokio::test]
	async fn non_zero_exit_is_command_failed() {
		let i = Invocation::new("sh").args(["-c", "exit 3"]);
		match ProcessRunner.run(&i).await {
			Err(crate::Error::CommandFailed { code, .. }) => assert_eq!(code, Some(3)),
			other => panic!("expected command failure, got {:?}", other),
		}
	}
}
