//! Remote version lookups.
//!
//! Each lookup returns the caller's fallback on any failure: transport errors, non-success
//! statuses and response bodies missing the expected fields. Being offline therefore looks the
//! same as being up to date.

use crate::config::{Endpoints, FallbackVersions};

/// Latest published versions, one per remote source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteVersions {
	pub library: String,
	pub icons: String,
	pub extension: String,
}

/// A lookup taking longer than this falls back like any other failure.
pub const LOOKUP_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// HTTP client used for the version lookups.
pub fn client() -> crate::Result<reqwest::Client> {
	let client = reqwest::Client::builder()
		.user_agent(concat!("midgardr/", env!("CARGO_PKG_VERSION")))
		.timeout(LOOKUP_TIMEOUT)
		.build()?;
	Ok(client)
}

/// Queries all three sources concurrently.
pub async fn fetch_all(client: &reqwest::Client, endpoints: &Endpoints, extension_id: &str, fallbacks: &FallbackVersions) -> RemoteVersions {
	let (library, icons, extension) = tokio::join!(
		registry_latest_version(client, &endpoints.library_registry, &fallbacks.library),
		registry_latest_version(client, &endpoints.icons_registry, &fallbacks.icons),
		marketplace_latest_version(client, &endpoints.marketplace, extension_id, &fallbacks.extension),
	);

	RemoteVersions { library, icons, extension }
}

/// Reads `dist-tags.latest` from a package registry document.
pub async fn registry_latest_version(client: &reqwest::Client, url: &str, fallback: &str) -> String {
	let request = client
		.get(url)
		.header(reqwest::header::ACCEPT, "application/json");

	fetch_json(request)
		.await
		.and_then(|json| dist_tag_latest(&json))
		.unwrap_or_else(|| {
			log::debug!("Using fallback version {} for {}", fallback, url);
			fallback.to_owned()
		})
}

/// Queries the extension marketplace for the newest version of `extension_id` (`publisher.name`).
pub async fn marketplace_latest_version(client: &reqwest::Client, url: &str, extension_id: &str, fallback: &str) -> String {
	let body = serde_json::json!({
		"filters": [{
			"criteria": [
				{ "filterType": 7, "value": extension_id }
			],
		}],
		/* latest version only, include version metadata */
		"flags": 0x1 | 0x10,
	});

	let request = client
		.post(url)
		.header(reqwest::header::ACCEPT, "application/json;api-version=3.0-preview.1")
		.json(&body);

	fetch_json(request)
		.await
		.and_then(|json| marketplace_version(&json))
		.unwrap_or_else(|| {
			log::debug!("Using fallback version {} for extension {}", fallback, extension_id);
			fallback.to_owned()
		})
}

async fn fetch_json(request: reqwest::RequestBuilder) -> Option<serde_json::Value> {
	let response = match request.send().await {
		Ok(r) => r,
		Err(e) => {
			log::debug!("Version lookup failed: {}", e);
			return None;
		}
	};

	if !response.status().is_success() {
		log::debug!("Version lookup to {} returned {}", response.url(), response.status());
		return None;
	}

	match response.json::<serde_json::Value>().await {
		Ok(json) => Some(json),
		Err(e) => {
			log::debug!("Version lookup response is not JSON: {}", e);
			None
		}
	}
}

pub fn dist_tag_latest(json: &serde_json::Value) -> Option<String> {
	json.pointer("/dist-tags/latest")
		.and_then(serde_json::Value::as_str)
		.filter(|s| !s.is_empty())
		.map(str::to_owned)
}

/// `results[0].extensions[0].versions[0].version`, any missing level gives `None`.
pub fn marketplace_version(json: &serde_json::Value) -> Option<String> {
	json.pointer("/results/0/extensions/0/versions/0/version")
		.and_then(serde_json::Value::as_str)
		.filter(|s| !s.is_empty())
		.map(str::to_owned)
}
