//! Local state probe.
//!
//! Reads what is already installed in a project directory. Nothing here returns an error, every
//! failed read degrades to the "not installed" value for its field.

use std::path::Path;
use std::sync::LazyLock;

use crate::config::ProjectSettings;

/// What the probe found on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalState {
	/// `version` field of the project's config file.
	pub library_version: Option<String>,
	/// A manifest exists and parses as JSON.
	pub has_manifest: bool,
	/// Icon package entry in the manifest's `dependencies`.
	pub icons_version: Option<String>,
	pub has_extension: bool,
}

/// Probes `target` using the file names in `settings`.
///
/// The three reads are independent and run concurrently.
pub async fn probe(target: impl AsRef<Path>, settings: &ProjectSettings) -> LocalState {
	let target = target.as_ref();
	let config_path = target.join(&settings.config_file);
	let manifest_path = target.join(&settings.manifest_file);
	let extension_dir = target.join(&settings.extension_dir);

	let (library_version, (has_manifest, icons_version), has_extension) = tokio::join!(
		read_library_version(&config_path),
		read_manifest(&manifest_path, &settings.icons_dependency),
		has_extension(&extension_dir, &settings.extension_fragment),
	);

	let state = LocalState { library_version, has_manifest, icons_version, has_extension };
	log::debug!("Probed {}: {:?}", target.display(), state);
	state
}

/// Reads the `version` field of a config file which may contain comments.
pub async fn read_library_version(path: &Path) -> Option<String> {
	let raw = match tokio::fs::read_to_string(path).await {
		Ok(raw) => raw,
		Err(e) => {
			log::trace!("Config file {} unreadable: {}", path.display(), e);
			return None;
		}
	};

	match serde_json::from_str::<serde_json::Value>(&strip_comments(&raw)) {
		Ok(json) => non_empty_str(&json["version"]),
		Err(e) => {
			log::debug!("Config file {} is not valid JSON after removing comments: {}", path.display(), e);
			None
		}
	}
}

/// Returns whether the manifest parsed, and the version of `dependency` if it is listed.
pub async fn read_manifest(path: &Path, dependency: &str) -> (bool, Option<String>) {
	let raw = match tokio::fs::read_to_string(path).await {
		Ok(raw) => raw,
		Err(e) => {
			log::trace!("Manifest {} unreadable: {}", path.display(), e);
			return (false, None);
		}
	};

	match serde_json::from_str::<serde_json::Value>(&raw) {
		Ok(json) => (true, non_empty_str(&json["dependencies"][dependency])),
		Err(e) => {
			log::debug!("Manifest {} is not valid JSON: {}", path.display(), e);
			(false, None)
		}
	}
}

/// Whether any entry of `dir` has `fragment` in its name.
pub async fn has_extension(dir: &Path, fragment: &str) -> bool {
	let mut entries = match tokio::fs::read_dir(dir).await {
		Ok(entries) => entries,
		Err(e) => {
			log::trace!("Extension directory {} unreadable: {}", dir.display(), e);
			return false;
		}
	};

	loop {
		match entries.next_entry().await {
			Ok(Some(entry)) => {
				if entry.file_name().to_string_lossy().contains(fragment) {
					return true;
				}
			}
			Ok(None) => return false,
			Err(e) => {
				log::debug!("Failed listing {}: {}", dir.display(), e);
				return false;
			}
		}
	}
}

fn non_empty_str(value: &serde_json::Value) -> Option<String> {
	value.as_str().filter(|s| !s.is_empty()).map(str::to_owned)
}

/* String literals are matched first so `//` inside a value such as a URL is kept. */
static COMMENT_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
	regex::Regex::new(r#"(?s)"(?:\\.|[^"\\])*"|//[^\n]*|/\*.*?\*/"#).expect("comment pattern should be a valid regex")
});

/// Removes `//` and `/* */` comments from JSON text.
pub fn strip_comments(raw: &str) -> String {
	COMMENT_PATTERN
		.replace_all(raw, |caps: &regex::Captures| {
			let m = &caps[0];
			if m.starts_with('"') { m.to_string() } else { String::new() }
		})
		.into_owned()
}
