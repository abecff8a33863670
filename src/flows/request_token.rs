//! Request-token acquisition and authorization URL construction.
//!
//! The request token starts the handshake: the caller sends the user to
//! [`Client::authorization_url`], waits for the redirect back to `redirect_uri`, then calls
//! [`Client::access_token`](crate::flows::Client::access_token) with the same token.

// self
use crate::{
	_prelude::*,
	api,
	auth::RequestToken,
	error::{ProtocolError, ValidationError},
	flows::{self, Client},
	http::ApiHttpClient,
	obs::{CallSpan, Operation},
	service::ApiEndpoint,
};

#[derive(Serialize)]
struct RequestTokenBody<'a> {
	consumer_key: &'a str,
	redirect_uri: &'a str,
}

#[derive(Deserialize)]
struct RequestTokenReply {
	#[serde(default)]
	code: Option<String>,
}

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Obtains a request token bound to `redirect_uri`.
	///
	/// The redirect URI must be non-empty; its format is left to the service to judge. A
	/// response without a non-empty `code` fails with
	/// [`ProtocolError::EmptyRequestTokenCode`].
	pub async fn request_token(&self, redirect_uri: &str) -> Result<RequestToken> {
		flows::observe(Operation::RequestToken, "request_token", async move {
			if redirect_uri.is_empty() {
				return Err(ValidationError::EmptyRedirectUri.into());
			}

			let body = RequestTokenBody { consumer_key: &self.consumer_key, redirect_uri };
			let response = api::post(
				self.http_client.as_ref(),
				&self.service,
				ApiEndpoint::RequestToken,
				&body,
			)
			.await?;
			let reply: RequestTokenReply = api::decode(&response)?;

			match reply.code {
				Some(code) if !code.is_empty() => Ok(RequestToken::new(code)),
				_ => Err(ProtocolError::EmptyRequestTokenCode.into()),
			}
		})
		.await
	}

	/// Builds the page URL the user must visit to approve `token`.
	///
	/// Both values are spliced in verbatim, without percent-encoding, so the result matches
	/// what Pocket documents for its authorize page. Either input being empty fails with
	/// [`ValidationError::EmptyParameters`].
	pub fn authorization_url(&self, token: impl AsRef<str>, redirect_uri: &str) -> Result<String> {
		let _span = CallSpan::new(Operation::AuthorizationUrl, "authorization_url").entered();
		let token = token.as_ref();

		if token.is_empty() || redirect_uri.is_empty() {
			return Err(ValidationError::EmptyParameters.into());
		}

		Ok(format!(
			"{}?request_token={token}&redirect_uri={redirect_uri}",
			self.service.authorize_page()
		))
	}
}
