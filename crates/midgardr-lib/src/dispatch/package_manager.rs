use std::path::Path;

/// Node package manager used for the icon package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
	Pnpm,
	Yarn,
	Npm,
}

impl PackageManager {
	/// Picks the manager whose lockfile is in `dir`, pnpm first, then yarn, npm otherwise.
	pub async fn detect(dir: &Path) -> Self {
		if tokio::fs::metadata(dir.join("pnpm-lock.yaml")).await.is_ok() {
			PackageManager::Pnpm
		} else if tokio::fs::metadata(dir.join("yarn.lock")).await.is_ok() {
			PackageManager::Yarn
		} else {
			PackageManager::Npm
		}
	}

	pub fn program(&self) -> &'static str {
		match self {
			PackageManager::Pnpm => "pnpm",
			PackageManager::Yarn => "yarn",
			PackageManager::Npm => "npm",
		}
	}

	pub fn install_subcommand(&self) -> &'static str {
		match self {
			PackageManager::Pnpm | PackageManager::Npm => "install",
			PackageManager::Yarn => "add",
		}
	}

	pub fn update_subcommand(&self) -> &'static str {
		match self {
			PackageManager::Pnpm | PackageManager::Npm => "update",
			PackageManager::Yarn => "upgrade",
		}
	}
}
