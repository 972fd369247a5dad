//! Dispatches a chosen action to external tools.
//!
//! Every action maps to one or more external commands run strictly in order. The first failing
//! command stops the chain and its error is returned unchanged, nothing is retried.

use std::path::{Path, PathBuf};

use crate::action::{Action, UiCommand};
use crate::config::CommandSettings;
use crate::ProjectState;

pub mod package_manager;
pub mod runner;

pub use package_manager::PackageManager;
pub use runner::{CommandRunner, Invocation, ProcessRunner};

/// Asks the user for the name of a new project.
pub trait ProjectNamePrompt {
	/// Returns `Ok(None)` when the user cancelled.
	fn project_name(&self) -> crate::Result<Option<String>>;
}

/// What the caller should do after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	Completed,
	/// Stop immediately with a success status.
	Exit,
}

pub struct Dispatcher<R, P> {
	commands: CommandSettings,
	runner: R,
	prompt: P,
	lockfile_dir: PathBuf,
}

impl<R: CommandRunner, P: ProjectNamePrompt> Dispatcher<R, P> {
	/// # Parameters
	/// - `commands` - Programs and packages to invoke.
	/// - `runner` - Executes the commands.
	/// - `prompt` - Used by [`Action::CreateNewProject`].
	/// - `lockfile_dir` - Where to look for package manager lockfiles, usually the process working directory.
	pub fn new(commands: CommandSettings, runner: R, prompt: P, lockfile_dir: impl Into<PathBuf>) -> Self {
		Self { commands, runner, prompt, lockfile_dir: lockfile_dir.into() }
	}

	pub fn runner(&self) -> &R {
		&self.runner
	}

	/// Runs `action` against the project at `target`.
	///
	/// `state` is the snapshot the action was resolved from.
	///
	/// # Errors
	/// Any error from the runner or prompt, returned as soon as it happens.
	pub async fn dispatch(&self, action: Action, target: &Path, state: &ProjectState) -> crate::Result<Outcome> {
		log::debug!("Dispatching {} for {}", action, target.display());

		match action {
			Action::CreateNewProject => return self.create_new_project(target).await,
			Action::Ui(ui) => self.run_ui(target, Some(ui)).await?,
			Action::InstallLibrary { .. } => self.run_ui(target, Some(UiCommand::FullInstall)).await?,
			Action::InstallIcons => self.install_icons(target).await?,
			Action::UpdateIcons => self.update_icons(target).await?,
			Action::InstallExtension => self.install_extension().await?,
			Action::UpdateExtension => self.update_extension().await?,
			Action::InstallAll { .. } => {
				self.run_ui(target, Some(UiCommand::FullInstall)).await?;
				self.install_icons(target).await?;
				if state.local_has_extension() {
					self.update_extension().await?;
				} else {
					self.install_extension().await?;
				}
			}
			Action::UpdateAll => {
				self.run_ui(target, Some(UiCommand::FullInstall)).await?;
				self.update_icons(target).await?;
				self.update_extension().await?;
			}
			Action::Exit => return Ok(Outcome::Exit),
		}

		Ok(Outcome::Completed)
	}

	async fn create_new_project(&self, target: &Path) -> crate::Result<Outcome> {
		let name = match self.prompt.project_name()? {
			Some(name) => name,
			None => {
				log::info!("Project creation cancelled.");
				return Ok(Outcome::Exit);
			}
		};

		let generate = Invocation::new(&self.commands.project_generator)
			.args(&self.commands.project_generator_args)
			.arg(&name)
			.current_dir(target);
		self.runner.run(&generate).await?;

		let project_path = target.join(&name);
		/* A new project gets the interactive library setup */
		self.run_ui(&project_path, None).await?;
		self.install_icons(&project_path).await?;

		log::info!("Created new project at {}", project_path.display());
		Ok(Outcome::Completed)
	}

	/// `None` runs the companion CLI without a sub-argument.
	async fn run_ui(&self, project: &Path, ui: Option<UiCommand>) -> crate::Result<()> {
		let invocation = Invocation::new(&self.commands.ui_runner)
			.arg(&self.commands.ui_package)
			.args(ui.and_then(|ui| ui.cli_arg()))
			.current_dir(project);
		self.runner.run(&invocation).await
	}

	async fn install_icons(&self, project: &Path) -> crate::Result<()> {
		let manager = PackageManager::detect(&self.lockfile_dir).await;
		self.run_package_manager(project, manager, manager.install_subcommand()).await
	}

	async fn update_icons(&self, project: &Path) -> crate::Result<()> {
		let manager = PackageManager::detect(&self.lockfile_dir).await;
		self.run_package_manager(project, manager, manager.update_subcommand()).await
	}

	async fn run_package_manager(&self, project: &Path, manager: PackageManager, subcommand: &str) -> crate::Result<()> {
		let invocation = Invocation::new(manager.program())
			.arg(subcommand)
			.arg(&self.commands.icons_package)
			.current_dir(project);
		self.runner.run(&invocation).await
	}

	async fn install_extension(&self) -> crate::Result<()> {
		let invocation = Invocation::new(&self.commands.editor)
			.args(["--install-extension", self.commands.extension_id.as_str(), "--force"]);
		self.runner.run(&invocation).await
	}

	async fn update_extension(&self) -> crate::Result<()> {
		log::debug!("Checking for extension updates");
		self.install_extension().await
	}
}
