//! Decides which actions to offer for a project.
//!
//! The menu is built by appending, so the order of the branches below is also the display order:
//! project, library, icons, extension, then a separator and exit. A directory without a manifest
//! is not a project yet and only gets the project branch.

use crate::action::{Action, MenuItem, UiCommand};
use crate::ProjectState;

/// Remote extension version that means the marketplace gave no usable version.
///
/// An installed extension is only offered an update when the remote version differs from this.
pub const UNTRACKED_EXTENSION_VERSION: &str = "1.0.0";

/// Companion CLI operations offered alongside a fresh library install.
const INSTALL_FAMILY: [UiCommand; 8] = [
	UiCommand::Interactive,
	UiCommand::FullInstall,
	UiCommand::FullInstallNgin,
	UiCommand::SelectComponents,
	UiCommand::ConfigureTailwindPostcss,
	UiCommand::ConfigureNgin,
	UiCommand::CreateConfig,
	UiCommand::ImportCall,
];

/// Companion CLI operations offered alongside a library update. The full installs are left out.
const UPDATE_FAMILY: [UiCommand; 6] = [
	UiCommand::Interactive,
	UiCommand::ConfigureTailwindPostcss,
	UiCommand::SelectComponents,
	UiCommand::ConfigureNgin,
	UiCommand::CreateConfig,
	UiCommand::ImportCall,
];

/// Resolves the ordered menu for `state`.
///
/// Versions are compared as plain strings, any difference counts as an update.
pub fn resolve(state: &ProjectState, is_premium: bool) -> Vec<MenuItem> {
	let mut items = Vec::<MenuItem>::new();

	/* Project */
	items.push(Action::CreateNewProject.into());
	if !state.has_manifest() {
		push_exit(&mut items);
		return items;
	}
	items.push(Action::InstallAll { premium: is_premium }.into());
	items.push(Action::UpdateAll.into());

	/* Library */
	match state.local_library_version() {
		None => {
			items.push(Action::InstallLibrary { premium: is_premium }.into());
			items.extend(INSTALL_FAMILY.iter().map(|ui| MenuItem::Action(Action::Ui(*ui))));
		}
		Some(local) if local != state.remote_library_version() => {
			items.push(Action::Ui(UiCommand::ComponentsAndLibs).into());
			items.extend(UPDATE_FAMILY.iter().map(|ui| MenuItem::Action(Action::Ui(*ui))));
		}
		Some(_) => {}
	}

	/* Icons */
	match state.local_icons_version() {
		None => items.push(Action::InstallIcons.into()),
		Some(local) if local != state.remote_icons_version() => items.push(Action::UpdateIcons.into()),
		Some(_) => {}
	}

	/* Extension */
	if !state.local_has_extension() {
		items.push(Action::InstallExtension.into());
	} else if state.remote_extension_version() != UNTRACKED_EXTENSION_VERSION {
		items.push(Action::UpdateExtension.into());
	}

	push_exit(&mut items);
	log::trace!("Resolved {} menu items", items.len());
	items
}

fn push_exit(items: &mut Vec<MenuItem>) {
	items.push(MenuItem::Separator);
	items.push(Action::Exit.into());
}
