//! Menu presentation and prompts.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use midgardr::{Action, MenuItem, ProjectState, UiCommand};

const SEPARATOR: &str = "──────────────";

/// Human readable label for `action`.
pub fn label(action: Action, state: &ProjectState) -> String {
	match action {
		Action::CreateNewProject if state.has_manifest() => format!("{} {}", style("Create new remix-run project in another folder").bold(), style("(Remix-based)").dim()),
		Action::CreateNewProject => format!("{} {}", style("Create new remix-run project").bold(), style("(Remix-based)").dim()),
		Action::InstallAll { .. } => format!("{} {}", style("Install All").bold(), style("Installs icons and UI in current workspace").dim()),
		Action::UpdateAll => format!("{} {}", style("Update All").bold(), style("Updates icons and UI in current workspace").dim()),
		Action::InstallLibrary { .. } => format!("{} {}", style("Install MIÐGARÐR UI").bold(), style(format!("(v{})", state.remote_library_version())).dim()),
		Action::Ui(UiCommand::ComponentsAndLibs) => format!(
			"{} MIÐGARÐR UI Components {}",
			style("Update").yellow(),
			style(format!("({} → {})", state.local_library_version().unwrap_or("?"), state.remote_library_version())).dim()
		),
		Action::Ui(ui) => {
			let (name, hint) = ui_label(ui);
			format!("{} {}", style(name).bold(), style(format!("→ {}", hint)).black().bright())
		}
		Action::InstallIcons => "Add MIÐGARÐR Icons".to_string(),
		Action::UpdateIcons => format!(
			"Update MIÐGARÐR Icons {}",
			style(format!("({} → {})", state.local_icons_version().unwrap_or("?"), state.remote_icons_version())).dim()
		),
		Action::InstallExtension => "Install VS Code Extension".to_string(),
		Action::UpdateExtension => "Update VS Code Extension".to_string(),
		Action::Exit => style("✗ Exit").red().to_string(),
	}
}

fn ui_label(ui: UiCommand) -> (&'static str, &'static str) {
	match ui {
		UiCommand::Interactive => ("Interactive UI Menu", "Components + Libraries + CSS"),
		UiCommand::FullInstall => ("Full Install", "Components + Libraries + CSS"),
		UiCommand::FullInstallNgin => ("Full Install with Ngin", "Includes presets"),
		UiCommand::SelectComponents => ("Select Components", "Specific free components"),
		UiCommand::ConfigureTailwindPostcss => ("Configure Only", "Tailwind + PostCSS setup"),
		UiCommand::ConfigureNgin => ("Configure with Ngin", "Tailwind + PostCSS + Ngin preset"),
		UiCommand::CreateConfig => ("Create Config", "Configure installation options with pre-configured config file"),
		UiCommand::ImportCall => ("Configure Import Call", "Allows the use of #midgardr & #icons"),
		UiCommand::ComponentsAndLibs => ("Update Components", "Components + Libraries"),
	}
}

/// Line printed before dispatching `action`, if any.
pub fn notice(action: Action, state: &ProjectState) -> Option<&'static str> {
	match action {
		Action::UpdateExtension => Some("Checking for extension updates..."),
		Action::InstallAll { .. } if state.local_has_extension() => Some("Checking for extension updates..."),
		_ => None,
	}
}

/// Shows the menu and returns the chosen action.
///
/// Separators cannot be chosen, picking one asks again. Esc, `q` or Ctrl-C counts as [`Action::Exit`].
pub fn select(items: &[MenuItem], state: &ProjectState) -> Result<Action, dialoguer::Error> {
	let labels: Vec<String> = items
		.iter()
		.map(|item| match item {
			MenuItem::Action(action) => label(*action, state),
			MenuItem::Separator => style(SEPARATOR).dim().to_string(),
		})
		.collect();

	let theme = ColorfulTheme::default();
	let mut default = 0;
	loop {
		let choice = match Select::with_theme(&theme)
			.with_prompt("Select an option?")
			.items(labels.as_slice())
			.default(default)
			.max_length(10)
			.interact_opt()
		{
			Ok(choice) => choice,
			Err(e) if is_interrupt(&e) => return Ok(Action::Exit),
			Err(e) => return Err(e),
		};

		match choice.map(|i| (i, items[i])) {
			None => return Ok(Action::Exit),
			Some((_, MenuItem::Action(action))) => return Ok(action),
			Some((i, MenuItem::Separator)) => default = i,
		}
	}
}

/// Ctrl-C while a prompt is active.
fn is_interrupt(error: &dialoguer::Error) -> bool {
	matches!(error, dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted)
}

/// Project name prompt backed by the terminal. An empty answer or Ctrl-C cancels.
pub struct TerminalPrompt;

impl midgardr::dispatch::ProjectNamePrompt for TerminalPrompt {
	fn project_name(&self) -> midgardr::Result<Option<String>> {
		let answer = Input::<String>::with_theme(&ColorfulTheme::default())
			.with_prompt("What is the name of your new project?")
			.allow_empty(true)
			.interact_text();

		match answer {
			Ok(name) if name.trim().is_empty() => Ok(None),
			Ok(name) => Ok(Some(name.trim().to_string())),
			Err(e) if is_interrupt(&e) => Ok(None),
			Err(e) => Err(midgardr::Error::Prompt(e.to_string())),
		}
	}
}
