use std::path::Path;

use midgardr::config::CommandSettings;
use midgardr::{Action, Dispatcher, LocalState, Outcome, ProjectState, RemoteVersions, UiCommand};
use midgardr_test_utils::{ProjectDir, RecordingRunner, ScriptedPrompt};

fn state(has_extension: bool) -> ProjectState {
	ProjectState::new(
		LocalState { library_version: None, has_manifest: true, icons_version: None, has_extension },
		RemoteVersions { library: "1.0.124".into(), icons: "1.0.58".into(), extension: "4.0.115".into() },
	)
}

fn dispatcher(runner: RecordingRunner, name: Option<&str>, lockfile_dir: &Path) -> Dispatcher<RecordingRunner, ScriptedPrompt> {
	Dispatcher::new(CommandSettings::default(), runner, ScriptedPrompt(name.map(str::to_owned)), lockfile_dir)
}

#[tokio::test]
async fn ui_actions_pass_matching_argument() {
	midgardr_test_utils::init_logging();
	let project = ProjectDir::new().unwrap();
	let d = dispatcher(RecordingRunner::default(), None, project.path());

	let outcome = d.dispatch(Action::Ui(UiCommand::ConfigureNgin), project.path(), &state(false)).await.unwrap();
	assert_eq!(outcome, Outcome::Completed);
	d.dispatch(Action::Ui(UiCommand::FullInstallNgin), project.path(), &state(false)).await.unwrap();
	d.dispatch(Action::Ui(UiCommand::Interactive), project.path(), &state(false)).await.unwrap();

	assert_eq!(d.runner().command_lines(), vec![
		"bunx @catalystsoftware/ui configure-ngin",
		"bunx @catalystsoftware/ui full-w-ngin",
		"bunx @catalystsoftware/ui",
	]);
	assert!(d.runner().calls().iter().all(|c| c.cwd.as_deref() == Some(project.path())));
}

#[tokio::test]
async fn install_library_runs_full_install() {
	midgardr_test_utils::init_logging();
	let project = ProjectDir::new().unwrap();
	let d = dispatcher(RecordingRunner::default(), None, project.path());
	d.dispatch(Action::InstallLibrary { premium: true }, project.path(), &state(false)).await.unwrap();
	assert_eq!(d.runner().command_lines(), vec!["bunx @catalystsoftware/ui full-install"]);
}

#[tokio::test]
async fn icons_use_detected_package_manager() {
	midgardr_test_utils::init_logging();
	let npm = ProjectDir::new().unwrap();
	let d = dispatcher(RecordingRunner::default(), None, npm.path());
	d.dispatch(Action::InstallIcons, npm.path(), &state(false)).await.unwrap();
	d.dispatch(Action::UpdateIcons, npm.path(), &state(false)).await.unwrap();
	assert_eq!(d.runner().command_lines(), vec![
		"npm install @catalystsoftware/icons",
		"npm update @catalystsoftware/icons",
	]);

	let pnpm = ProjectDir::new().unwrap().with_file("pnpm-lock.yaml").unwrap().with_file("yarn.lock").unwrap();
	let d = dispatcher(RecordingRunner::default(), None, pnpm.path());
	d.dispatch(Action::InstallIcons, npm.path(), &state(false)).await.unwrap();
	assert_eq!(d.runner().command_lines(), vec!["pnpm install @catalystsoftware/icons"]);

	let yarn = ProjectDir::new().unwrap().with_file("yarn.lock").unwrap();
	let d = dispatcher(RecordingRunner::default(), None, yarn.path());
	d.dispatch(Action::UpdateIcons, npm.path(), &state(false)).await.unwrap();
	assert_eq!(d.runner().command_lines(), vec!["yarn upgrade @catalystsoftware/icons"]);
	assert_eq!(d.runner().calls()[0].cwd.as_deref(), Some(npm.path()));
}

#[tokio::test]
async fn extension_actions_force_reinstall() {
	midgardr_test_utils::init_logging();
	let project = ProjectDir::new().unwrap();
	let d = dispatcher(RecordingRunner::default(), None, project.path());
	d.dispatch(Action::InstallExtension, project.path(), &state(false)).await.unwrap();
	d.dispatch(Action::UpdateExtension, project.path(), &state(true)).await.unwrap();
	assert_eq!(d.runner().command_lines(), vec![
		"code --install-extension skyler.ocrmnav --force",
		"code --install-extension skyler.ocrmnav --force",
	]);
}

#[tokio::test]
async fn install_all_runs_in_order() {
	midgardr_test_utils::init_logging();
	let project = ProjectDir::new().unwrap();
	let d = dispatcher(RecordingRunner::default(), None, project.path());
	d.dispatch(Action::InstallAll { premium: false }, project.path(), &state(false)).await.unwrap();
	assert_eq!(d.runner().command_lines(), vec![
		"bunx @catalystsoftware/ui full-install",
		"npm install @catalystsoftware/icons",
		"code --install-extension skyler.ocrmnav --force",
	]);
}

#[tokio::test]
async fn update_all_runs_in_order() {
	midgardr_test_utils::init_logging();
	let project = ProjectDir::new().unwrap();
	let d = dispatcher(RecordingRunner::default(), None, project.path());
	d.dispatch(Action::UpdateAll, project.path(), &state(true)).await.unwrap();
	assert_eq!(d.runner().command_lines(), vec![
		"bunx @catalystsoftware/ui full-install",
		"npm update @catalystsoftware/icons",
		"code --install-extension skyler.ocrmnav --force",
	]);
}

#[tokio::test]
async fn first_failure_stops_the_chain() {
	midgardr_test_utils::init_logging();
	let project = ProjectDir::new().unwrap();
	let d = dispatcher(RecordingRunner::failing_on("npm"), None, project.path());
	let result = d.dispatch(Action::InstallAll { premium: false }, project.path(), &state(false)).await;

	match result {
		Err(midgardr::Error::CommandFailed { command, code }) => {
			assert_eq!(command, "npm install @catalystsoftware/icons");
			assert_eq!(code, Some(1));
		}
		other => panic!("expected command failure, got {:?}", other),
	}
	assert_eq!(d.runner().calls().len(), 2);
}

#[tokio::test]
async fn create_new_project_installs_into_new_folder() {
	midgardr_test_utils::init_logging();
	let parent = ProjectDir::new().unwrap();
	let d = dispatcher(RecordingRunner::default(), Some("my-app"), parent.path());
	let outcome = d.dispatch(Action::CreateNewProject, parent.path(), &state(false)).await.unwrap();
	assert_eq!(outcome, Outcome::Completed);

	let calls = d.runner().calls();
	assert_eq!(d.runner().command_lines(), vec![
		"npx create-remix@latest my-app",
		"bunx @catalystsoftware/ui",
		"npm install @catalystsoftware/icons",
	]);
	assert_eq!(calls[0].cwd.as_deref(), Some(parent.path()));
	assert_eq!(calls[1].cwd, Some(parent.path().join("my-app")));
	assert_eq!(calls[2].cwd, Some(parent.path().join("my-app")));
}

#[tokio::test]
async fn cancelled_project_name_exits_cleanly() {
	midgardr_test_utils::init_logging();
	let parent = ProjectDir::new().unwrap();
	let d = dispatcher(RecordingRunner::default(), None, parent.path());
	let outcome = d.dispatch(Action::CreateNewProject, parent.path(), &state(false)).await.unwrap();
	assert_eq!(outcome, Outcome::Exit);
	assert!(d.runner().calls().is_empty());
}

#[tokio::test]
async fn exit_runs_nothing() {
	midgardr_test_utils::init_logging();
	let project = ProjectDir::new().unwrap();
	let d = dispatcher(RecordingRunner::default(), None, project.path());
	assert_eq!(d.dispatch(Action::Exit, project.path(), &state(false)).await.unwrap(), Outcome::Exit);
	assert!(d.runner().calls().is_empty());
}
