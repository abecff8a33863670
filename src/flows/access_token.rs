//! Access-token exchange for a request token the user has approved.

// self
use crate::{
	_prelude::*,
	api,
	auth::AccessGrant,
	error::{ProtocolError, ValidationError},
	flows::{self, Client},
	http::ApiHttpClient,
	obs::Operation,
	service::ApiEndpoint,
};

#[derive(Serialize)]
struct AuthorizeBody<'a> {
	consumer_key: &'a str,
	code: &'a str,
}

#[derive(Deserialize)]
struct AuthorizeReply {
	#[serde(default)]
	access_token: Option<String>,
	#[serde(default)]
	username: Option<String>,
}
impl AuthorizeReply {
	fn into_grant(self) -> Result<AccessGrant> {
		let access_token = non_empty(self.access_token).ok_or(ProtocolError::EmptyAccessToken)?;
		let username = non_empty(self.username).ok_or(ProtocolError::EmptyUsername)?;

		Ok(AccessGrant::new(access_token, username))
	}
}

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Exchanges an approved request token for an [`AccessGrant`].
	///
	/// Call this only after the user finished the authorization page. The client cannot tell
	/// whether that happened, so a premature call surfaces whatever the service answers,
	/// usually a non-200 status.
	pub async fn access_token(&self, token: impl AsRef<str>) -> Result<AccessGrant> {
		let token = token.as_ref();

		flows::observe(Operation::AccessToken, "access_token", async move {
			if token.is_empty() {
				return Err(ValidationError::EmptyRequestToken.into());
			}

			let body = AuthorizeBody { consumer_key: &self.consumer_key, code: token };
			let response = api::post(
				self.http_client.as_ref(),
				&self.service,
				ApiEndpoint::Authorize,
				&body,
			)
			.await?;

			api::decode::<AuthorizeReply>(&response)?.into_grant()
		})
		.await
	}
}

fn non_empty(value: Option<String>) -> Option<String> {
	value.filter(|value| !value.is_empty())
}
