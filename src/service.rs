//! Service configuration: API host, endpoint paths, authorization page, and request timeout.
//!
//! Everything that the wire protocol treats as a deployment constant lives in
//! [`ServiceConfig`] so several clients (different consumer keys, a mock host in tests) can
//! coexist in one process. [`ServiceConfig::default`] targets the production Pocket service.

/// Builder for [`ServiceConfig`] and its validation errors.
pub mod builder;

pub use builder::*;

// std
use std::time::Duration as StdDuration;
// self
use crate::{_prelude::*, error::ConfigError};

/// Production API base, including the version segment.
pub const DEFAULT_API_BASE: &str = "https://getpocket.com/v3/";
/// Production page users visit to approve a request token.
pub const DEFAULT_AUTHORIZE_PAGE: &str = "https://getpocket.com/auth/authorize";
/// Per-request timeout applied to every API call.
pub const DEFAULT_TIMEOUT: StdDuration = StdDuration::from_secs(10);

/// API operations exposed by the service, each mapped to a path under the API base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiEndpoint {
	/// Request-token acquisition (`oauth/request`).
	RequestToken,
	/// Access-token exchange (`oauth/authorize`).
	Authorize,
	/// Item submission (`add`).
	Add,
}
impl ApiEndpoint {
	/// Returns the path relative to the API base.
	pub const fn path(self) -> &'static str {
		match self {
			ApiEndpoint::RequestToken => "oauth/request",
			ApiEndpoint::Authorize => "oauth/authorize",
			ApiEndpoint::Add => "add",
		}
	}
}

/// Validated service configuration held by every [`Client`](crate::flows::Client).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
	api_base: Url,
	authorize_page: Url,
	timeout: StdDuration,
}
impl ServiceConfig {
	/// Creates a builder seeded with the production defaults.
	pub fn builder() -> ServiceConfigBuilder {
		ServiceConfigBuilder::new()
	}

	/// API base URL; its path always ends with `/`.
	pub fn api_base(&self) -> &Url {
		&self.api_base
	}

	/// Authorization page URL without query string.
	pub fn authorize_page(&self) -> &Url {
		&self.authorize_page
	}

	/// Per-request timeout.
	pub fn timeout(&self) -> StdDuration {
		self.timeout
	}

	/// Resolves the absolute URL for an API endpoint.
	pub fn endpoint(&self, endpoint: ApiEndpoint) -> Result<Url, ConfigError> {
		self.api_base.join(endpoint.path()).map_err(|source| ConfigError::InvalidEndpoint {
			endpoint: endpoint.path().into(),
			source,
		})
	}
}
impl Default for ServiceConfig {
	fn default() -> Self {
		Self {
			api_base: Url::parse(DEFAULT_API_BASE).expect("Default API base must be valid."),
			authorize_page: Url::parse(DEFAULT_AUTHORIZE_PAGE)
				.expect("Default authorize page must be valid."),
			timeout: DEFAULT_TIMEOUT,
		}
	}
}
