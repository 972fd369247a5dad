//! Actions the installer can offer.

/// One offerable operation.
///
/// Actions carry no state beyond which variant they are, labels are produced by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
	/// Generate a new project and install the library and icons into it.
	CreateNewProject,
	/// Library, icons and extension in one go.
	InstallAll { premium: bool },
	UpdateAll,
	/// Install the library with its full-install flavor.
	InstallLibrary { premium: bool },
	/// Run the companion UI CLI.
	Ui(UiCommand),
	InstallIcons,
	UpdateIcons,
	InstallExtension,
	UpdateExtension,
	Exit,
}

/// Operations provided by the companion UI CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiCommand {
	Interactive,
	FullInstall,
	FullInstallNgin,
	SelectComponents,
	ConfigureTailwindPostcss,
	ConfigureNgin,
	CreateConfig,
	ImportCall,
	/// Update installed components and libraries.
	ComponentsAndLibs,
}

impl Action {
	/// Stable identifier, used in logs.
	pub fn id(&self) -> &'static str {
		match self {
			Action::CreateNewProject => "create-new",
			Action::InstallAll { premium: false } => "install-all",
			Action::InstallAll { premium: true } => "install-all-premium",
			Action::UpdateAll => "update-all",
			Action::InstallLibrary { premium: false } => "install-library",
			Action::InstallLibrary { premium: true } => "install-library-premium",
			Action::Ui(ui) => ui.id(),
			Action::InstallIcons => "install-icons",
			Action::UpdateIcons => "update-icons",
			Action::InstallExtension => "install-ext",
			Action::UpdateExtension => "update-ext",
			Action::Exit => "exit",
		}
	}
}

impl std::fmt::Display for Action {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.id())
	}
}

impl UiCommand {
	pub fn id(&self) -> &'static str {
		match self {
			UiCommand::Interactive => "ui-interactive",
			UiCommand::FullInstall => "ui-full-install",
			UiCommand::FullInstallNgin => "ui-full-install-ngin",
			UiCommand::SelectComponents => "ui-select-components",
			UiCommand::ConfigureTailwindPostcss => "ui-configure-tailwind-postcss",
			UiCommand::ConfigureNgin => "ui-configure-ngin",
			UiCommand::CreateConfig => "ui-create-config",
			UiCommand::ImportCall => "ui-import-call",
			UiCommand::ComponentsAndLibs => "ui-components-and-libs",
		}
	}

	/// Sub-argument passed to the companion CLI. The interactive menu takes none.
	pub fn cli_arg(&self) -> Option<&'static str> {
		match self {
			UiCommand::Interactive => None,
			UiCommand::FullInstall => Some("full-install"),
			UiCommand::FullInstallNgin => Some("full-w-ngin"),
			UiCommand::SelectComponents => Some("select-components"),
			UiCommand::ConfigureTailwindPostcss => Some("configure-tailwind-postcss"),
			UiCommand::ConfigureNgin => Some("configure-ngin"),
			UiCommand::CreateConfig => Some("create-config"),
			UiCommand::ImportCall => Some("import-call"),
			UiCommand::ComponentsAndLibs => Some("components-and-libs"),
		}
	}
}

/// An entry in the resolved menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
	Action(Action),
	/// Visual divider, not selectable.
	Separator,
}

impl MenuItem {
	pub fn action(&self) -> Option<Action> {
		match self {
			MenuItem::Action(a) => Some(*a),
			MenuItem::Separator => None,
		}
	}
}

impl From<Action> for MenuItem {
	fn from(action: Action) -> Self {
		MenuItem::Action(action)
	}
}
