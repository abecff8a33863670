//! Request tokens and access grants produced by the authorization handshake.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Short-lived code identifying an in-progress authorization flow.
///
/// Returned by [`Client::request_token`](crate::flows::Client::request_token) and consumed by
/// the authorization URL builder and the access-token exchange. The value is never persisted by
/// the client and is redacted in `Debug`/`Display` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestToken(TokenSecret);
impl RequestToken {
	/// Wraps a request token code issued by the service.
	pub fn new(code: impl Into<String>) -> Self {
		Self(TokenSecret::new(code))
	}

	/// Returns the raw code. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		self.0.expose()
	}

	/// Returns `true` when the code is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl AsRef<str> for RequestToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for RequestToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("RequestToken").field(&"<redacted>").finish()
	}
}
impl Display for RequestToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Credential pair returned once the user has approved the application.
///
/// Ownership passes to the caller, who decides whether and where to persist it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGrant {
	/// Long-lived access token; callers must avoid logging it.
	pub access_token: TokenSecret,
	/// Pocket username the token was issued for.
	pub username: String,
}
impl AccessGrant {
	/// Creates a grant from its parts.
	pub fn new(access_token: impl Into<TokenSecret>, username: impl Into<String>) -> Self {
		Self { access_token: access_token.into(), username: username.into() }
	}
}
