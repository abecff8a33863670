// std
use std::time::Duration as StdDuration;
// self
use crate::{
	_prelude::*,
	service::{DEFAULT_API_BASE, DEFAULT_AUTHORIZE_PAGE, DEFAULT_TIMEOUT, ServiceConfig},
};

/// Errors raised while constructing or validating a [`ServiceConfig`].
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum ServiceConfigError {
	/// A configured URL cannot be parsed.
	#[error("The {field} URL is invalid: {url}.")]
	InvalidUrl {
		/// Which setting failed validation.
		field: &'static str,
		/// Value that failed to parse.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Only `http` and `https` are supported.
	#[error("The {field} URL must use http or https: {url}.")]
	UnsupportedScheme {
		/// Which setting failed validation.
		field: &'static str,
		/// URL that failed validation.
		url: String,
	},
	/// URL cannot carry paths (e.g. `mailto:`).
	#[error("The {field} URL cannot be used as a base: {url}.")]
	CannotBeABase {
		/// Which setting failed validation.
		field: &'static str,
		/// URL that failed validation.
		url: String,
	},
	/// Query strings and fragments cannot be combined with endpoint paths.
	#[error("The {field} URL must not carry a query or fragment: {url}.")]
	QueryOrFragment {
		/// Which setting failed validation.
		field: &'static str,
		/// URL that failed validation.
		url: String,
	},
	/// A zero timeout would fail every request.
	#[error("Request timeout must be greater than zero.")]
	ZeroTimeout,
}

/// Builder for [`ServiceConfig`] values.
#[derive(Debug)]
pub struct ServiceConfigBuilder {
	/// API base URL; a trailing `/` is appended when missing.
	pub api_base: String,
	/// Authorization page URL.
	pub authorize_page: String,
	/// Per-request timeout.
	pub timeout: StdDuration,
}
impl ServiceConfigBuilder {
	/// Creates a builder seeded with the production defaults.
	pub fn new() -> Self {
		Self {
			api_base: DEFAULT_API_BASE.into(),
			authorize_page: DEFAULT_AUTHORIZE_PAGE.into(),
			timeout: DEFAULT_TIMEOUT,
		}
	}

	/// Overrides the API base (e.g. a mock server's `/v3/` URL).
	pub fn api_base(mut self, url: impl Into<String>) -> Self {
		self.api_base = url.into();

		self
	}

	/// Overrides the authorization page.
	pub fn authorize_page(mut self, url: impl Into<String>) -> Self {
		self.authorize_page = url.into();

		self
	}

	/// Overrides the per-request timeout.
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = timeout;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ServiceConfig, ServiceConfigError> {
		if self.timeout.is_zero() {
			return Err(ServiceConfigError::ZeroTimeout);
		}

		let mut api_base = validate_url("api base", &self.api_base)?;

		if !api_base.path().ends_with('/') {
			let path = format!("{}/", api_base.path());

			api_base.set_path(&path);
		}

		let authorize_page = validate_url("authorize page", &self.authorize_page)?;

		Ok(ServiceConfig { api_base, authorize_page, timeout: self.timeout })
	}
}
impl Default for ServiceConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}

fn validate_url(field: &'static str, raw: &str) -> Result<Url, ServiceConfigError> {
	let url = Url::parse(raw).map_err(|source| ServiceConfigError::InvalidUrl {
		field,
		url: raw.to_owned(),
		source,
	})?;

	if !matches!(url.scheme(), "http" | "https") {
		return Err(ServiceConfigError::UnsupportedScheme { field, url: url.to_string() });
	}
	if url.cannot_be_a_base() {
		return Err(ServiceConfigError::CannotBeABase { field, url: url.to_string() });
	}
	if url.query().is_some() || url.fragment().is_some() {
		return Err(ServiceConfigError::QueryOrFragment { field, url: url.to_string() });
	}

	Ok(url)
}
