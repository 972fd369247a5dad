//! Snapshot of one project's local and remote state.

use std::path::Path;

use crate::probe::{self, LocalState};
use crate::remote::{self, RemoteVersions};

/// Local installation state merged with the latest remote versions.
///
/// Built once per run and never modified afterwards, the resolver and dispatcher only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectState {
	local_library_version: Option<String>,
	has_manifest: bool,
	local_icons_version: Option<String>,
	local_has_extension: bool,
	remote_library_version: String,
	remote_icons_version: String,
	remote_extension_version: String,
}

impl ProjectState {
	/// Merges probe and lookup results.
	///
	/// An icons version without a manifest cannot come from a real probe and is dropped.
	pub fn new(local: LocalState, remote: RemoteVersions) -> Self {
		let local_icons_version = if local.has_manifest { local.icons_version } else { None };

		Self {
			local_library_version: local.library_version,
			has_manifest: local.has_manifest,
			local_icons_version,
			local_has_extension: local.has_extension,
			remote_library_version: remote.library,
			remote_icons_version: remote.icons,
			remote_extension_version: remote.extension,
		}
	}

	/// Probes `target` and queries the remote sources concurrently.
	pub async fn gather(target: impl AsRef<Path>, config: &crate::Config, client: &reqwest::Client) -> Self {
		let (local, remote) = tokio::join!(
			probe::probe(target.as_ref(), &config.project),
			remote::fetch_all(client, &config.endpoints, &config.commands.extension_id, &config.fallbacks),
		);

		log::debug!("Remote versions: {:?}", remote);
		Self::new(local, remote)
	}

	/* Fields */

	pub fn local_library_version(&self) -> Option<&str> {
		self.local_library_version.as_deref()
	}

	pub fn has_manifest(&self) -> bool {
		self.has_manifest
	}

	pub fn local_icons_version(&self) -> Option<&str> {
		self.local_icons_version.as_deref()
	}

	pub fn local_has_extension(&self) -> bool {
		self.local_has_extension
	}

	pub fn remote_library_version(&self) -> &str {
		&self.remote_library_version
	}

	pub fn remote_icons_version(&self) -> &str {
		&self.remote_icons_version
	}

	pub fn remote_extension_version(&self) -> &str {
		&self.remote_extension_version
	}
}
