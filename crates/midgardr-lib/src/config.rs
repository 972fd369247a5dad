//! Installer configuration.
//!
//! Every value has a default so the installer works without a config file. A file at
//! [`Config::default_path()`] may override any subset of fields.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
	/// Offers the premium variants of the install actions.
	pub premium: bool,
	pub fallbacks: FallbackVersions,
	pub endpoints: Endpoints,
	pub project: ProjectSettings,
	pub commands: CommandSettings,
}

/// Versions reported when a remote lookup fails.
///
/// These should track the latest published releases, a stale value makes an offline
/// installer offer updates that are not real.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FallbackVersions {
	pub library: String,
	pub icons: String,
	pub extension: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
	pub library_registry: String,
	pub icons_registry: String,
	pub marketplace: String,
}

/// Where the probe looks inside a project directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectSettings {
	pub config_file: String,
	pub manifest_file: String,
	pub icons_dependency: String,
	pub extension_dir: String,
	pub extension_fragment: String,
}

/// External programs the dispatcher invokes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CommandSettings {
	/// Package runner used to launch the companion UI CLI, e.g. `bunx`.
	pub ui_runner: String,
	pub ui_package: String,
	pub icons_package: String,
	pub editor: String,
	/// `publisher.name` of the editor extension.
	pub extension_id: String,
	pub project_generator: String,
	/// Arguments before the project name.
	pub project_generator_args: Vec<String>,
}

impl Default for FallbackVersions {
	fn default() -> Self {
		Self {
			library: "1.0.124".to_string(),
			icons: "1.0.58".to_string(),
			extension: "4.0.115".to_string(),
		}
	}
}

impl Default for Endpoints {
	fn default() -> Self {
		Self {
			library_registry: "https://registry.npmjs.org/@a5gard/midgardr-cli".to_string(),
			icons_registry: "https://registry.npmjs.org/@a5gard/baldr".to_string(),
			marketplace: "https://marketplace.visualstudio.com/_apis/public/gallery/extensionquery".to_string(),
		}
	}
}

impl Default for ProjectSettings {
	fn default() -> Self {
		Self {
			config_file: "config.midgardr".to_string(),
			manifest_file: "package.json".to_string(),
			icons_dependency: "@a5gard/baldr".to_string(),
			extension_dir: ".vscode".to_string(),
			extension_fragment: "midgardr".to_string(),
		}
	}
}

impl Default for CommandSettings {
	fn default() -> Self {
		Self {
			ui_runner: "bunx".to_string(),
			ui_package: "@catalystsoftware/ui".to_string(),
			icons_package: "@catalystsoftware/icons".to_string(),
			editor: "code".to_string(),
			extension_id: "skyler.ocrmnav".to_string(),
			project_generator: "npx".to_string(),
			project_generator_args: vec!["create-remix@latest".to_string()],
		}
	}
}

impl Config {
	/// Location of the user config file, `None` when no config directory can be determined.
	pub fn default_path() -> Option<std::path::PathBuf> {
		#[cfg(target_os = "windows")]
		let base = std::env::var("APPDATA").ok().map(std::path::PathBuf::from);

		#[cfg(not(target_os = "windows"))]
		let base = if let Ok(e) = std::env::var("XDG_CONFIG_HOME") {
			Some(std::path::PathBuf::from(e))
		} else {
			std::env::var("HOME").ok().map(|h| std::path::PathBuf::from(h).join(".config"))
		};

		base.map(|b| b.join("midgardr").join("config.json"))
	}

	/// Loads the config from [`Config::default_path()`].
	///
	/// # Errors
	/// - [`IO`](crate::Error::IO) when the file is missing or unreadable, including when no config directory exists.
	/// - [`SerdeJSON`](crate::Error::SerdeJSON) when the file is not valid config JSON.
	pub fn load_from_disk() -> crate::Result<Self> {
		let path = Self::default_path().ok_or_else(|| {
			std::io::Error::new(std::io::ErrorKind::NotFound, "no config directory available")
		})?;
		Self::load_from_path(path)
	}

	pub fn load_from_path(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
		let path = path.as_ref();
		log::debug!("Reading config from {}", path.display());
		let raw = std::fs::read_to_string(path)?;
		Ok(serde_json::from_str(&raw)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_file_keeps_remaining_defaults() {
		let config: Config = serde_json::from_str(r#"{ "premium": true, "fallbacks": { "icons": "2.0.0" } }"#).unwrap();
		assert!(config.premium);
		assert_eq!(config.fallbacks.icons, "2.0.0");
		assert_eq!(config.fallbacks.library, "1.0.124");
		assert_eq!(config.commands, CommandSettings::default());
	}

	#[test]
	fn missing_file_is_io_error() {
		let dir = std::env::temp_dir().join("midgardr-config-test-does-not-exist");
		match Config::load_from_path(dir.join("config.json")) {
			Err(crate::Error::IO(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
			other => panic!("expected IO error, got {:?}", other),
		}
	}
}
