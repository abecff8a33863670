//! Item submission (`add`).
//!
//! [`AddItemRequest`] carries the target URL, the access token obtained from
//! [`Client::access_token`](crate::flows::Client::access_token), and optional metadata. The
//! request is validated locally before any network call, and the service's reply body is
//! discarded: success is the absence of an error.

// self
use crate::{
	_prelude::*,
	api,
	auth::TokenSecret,
	error::ValidationError,
	flows::{self, Client},
	http::ApiHttpClient,
	obs::Operation,
	service::ApiEndpoint,
};

/// Separator placed between tags on the wire.
pub const TAG_SEPARATOR: &str = ", ";

/// Caller-built description of an item to save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddItemRequest {
	/// URL of the item to save; required.
	pub url: String,
	/// Access token of the user saving the item; required.
	pub access_token: TokenSecret,
	/// Title to use when the service cannot extract one.
	pub title: Option<String>,
	/// Tags applied to the item, in order.
	pub tags: Vec<String>,
	/// Identifier of the external post (tweet) the item was shared from.
	pub tweet_id: Option<String>,
}
impl AddItemRequest {
	/// Creates a request for `url` on behalf of the owner of `access_token`.
	pub fn new(url: impl Into<String>, access_token: impl Into<TokenSecret>) -> Self {
		Self {
			url: url.into(),
			access_token: access_token.into(),
			title: None,
			tags: Vec::new(),
			tweet_id: None,
		}
	}

	/// Sets the title.
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());

		self
	}

	/// Replaces the tag list.
	pub fn with_tags<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.tags = tags.into_iter().map(Into::into).collect();

		self
	}

	/// Appends a single tag.
	pub fn tag(mut self, tag: impl Into<String>) -> Self {
		self.tags.push(tag.into());

		self
	}

	/// Sets the external post identifier.
	pub fn with_tweet_id(mut self, tweet_id: impl Into<String>) -> Self {
		self.tweet_id = Some(tweet_id.into());

		self
	}

	/// Checks the required fields.
	pub fn validate(&self) -> Result<(), ValidationError> {
		if self.url.is_empty() {
			return Err(ValidationError::EmptyUrl);
		}
		if self.access_token.is_empty() {
			return Err(ValidationError::EmptyAccessToken);
		}

		Ok(())
	}

	/// Tags joined with [`TAG_SEPARATOR`], or `None` when there are none.
	pub fn joined_tags(&self) -> Option<String> {
		if self.tags.is_empty() { None } else { Some(self.tags.join(TAG_SEPARATOR)) }
	}
}

#[derive(Serialize)]
struct AddBody<'a> {
	consumer_key: &'a str,
	access_token: &'a str,
	url: &'a str,
	#[serde(skip_serializing_if = "Option::is_none")]
	title: Option<&'a str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	tags: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	tweet_id: Option<&'a str>,
}
impl<'a> AddBody<'a> {
	fn new(consumer_key: &'a str, request: &'a AddItemRequest) -> Self {
		Self {
			consumer_key,
			access_token: request.access_token.expose(),
			url: &request.url,
			title: request.title.as_deref(),
			tags: request.joined_tags(),
			tweet_id: request.tweet_id.as_deref(),
		}
	}
}

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Saves an item to the user's list.
	///
	/// An empty URL or access token fails with a [`ValidationError`] and no request is sent.
	pub async fn add_item(&self, request: &AddItemRequest) -> Result<()> {
		flows::observe(Operation::AddItem, "add_item", async move {
			request.validate()?;

			let body = AddBody::new(&self.consumer_key, request);

			api::post(self.http_client.as_ref(), &self.service, ApiEndpoint::Add, &body).await?;

			Ok(())
		})
		.await
	}
}
