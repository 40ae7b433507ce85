//! API location and endpoint paths.

const DEFAULT_API_BASE_URL: &str = "https://straintree-app.onrender.com";

/// Family tree collection; a tree lives at `{FAMILY_TREES}/{id}`.
pub const FAMILY_TREES: &str = "/api/family-trees";

/// Where the REST API lives. Set `STRAINTREE_API_BASE_URL` at build time to override.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
	/// Scheme and host, without a trailing slash.
	pub base_url: String,
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self::new(option_env!("STRAINTREE_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
	}
}

impl ApiConfig {
	/// Builds a config for `base_url`.
	pub fn new(base_url: impl Into<String>) -> Self {
		let base_url: String = base_url.into();
		Self {
			base_url: base_url.trim_end_matches('/').to_owned(),
		}
	}

	/// Absolute URL for `endpoint`, always over https.
	pub fn url(&self, endpoint: &str) -> String {
		let url = if endpoint.starts_with('/') {
			format!("{}{}", self.base_url, endpoint)
		} else {
			endpoint.to_owned()
		};
		let rest = url
			.strip_prefix("https://")
			.or_else(|| url.strip_prefix("http://"))
			.unwrap_or(&url);
		format!("https://{rest}")
	}

	/// URL of a single family tree.
	pub fn family_tree_url(&self, id: &str) -> String {
		self.url(&format!("{FAMILY_TREES}/{id}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn joins_relative_endpoints() {
		let config = ApiConfig::new("https://api.example.com/");
		assert_eq!(config.url(FAMILY_TREES), "https://api.example.com/api/family-trees");
		assert_eq!(config.family_tree_url("12"), "https://api.example.com/api/family-trees/12");
	}

	#[test]
	fn forces_https() {
		let config = ApiConfig::new("http://localhost:5000");
		assert_eq!(config.url(FAMILY_TREES), "https://localhost:5000/api/family-trees");
		assert_eq!(config.url("http://other.host/x"), "https://other.host/x");
		assert_eq!(config.url("other.host/x"), "https://other.host/x");
	}
}
