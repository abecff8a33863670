//! Shared request pipeline used by every API call.
//!
//! Each call encodes a typed body as JSON, attaches the two fixed headers Pocket requires,
//! enforces the configured timeout, rejects any status other than `200 OK`, and (when the
//! caller needs the payload) decodes the body into a typed reply.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	error::{ConfigError, ProtocolError, TransportError},
	http::{ApiHttpClient, ApiRequest, ApiResponse},
	service::{ApiEndpoint, ServiceConfig},
};

/// `Content-Type` sent with every request.
pub const CONTENT_TYPE: &str = "application/json; charset=UTF-8";
/// `X-Accept` sent with every request so Pocket answers in JSON instead of form encoding.
pub const X_ACCEPT: &str = "application/json";

/// POSTs `body` to `endpoint` and returns the response when the status is `200 OK`.
pub(crate) async fn post<C, B>(
	http_client: &C,
	service: &ServiceConfig,
	endpoint: ApiEndpoint,
	body: &B,
) -> Result<ApiResponse>
where
	C: ?Sized + ApiHttpClient,
	B: ?Sized + Serialize,
{
	let url = service.endpoint(endpoint)?;
	let body = serde_json::to_vec(body).map_err(ConfigError::RequestEncode)?;
	let request = ApiRequest {
		url,
		headers: vec![("Content-Type", CONTENT_TYPE), ("X-Accept", X_ACCEPT)],
		body,
		timeout: service.timeout(),
	};
	let response = http_client.execute(request).await?;

	ensure_ok(response)
}

/// Decodes a JSON object reply, recording the path of the first mismatch.
pub(crate) fn decode<R>(response: &ApiResponse) -> Result<R>
where
	R: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(&response.body);

	serde_path_to_error::deserialize(&mut deserializer).map_err(|source| {
		ProtocolError::MalformedResponse { source, status: response.status }.into()
	})
}

fn ensure_ok(response: ApiResponse) -> Result<ApiResponse> {
	if response.status == 200 {
		return Ok(response);
	}

	let ApiResponse { status, status_text, metadata, .. } = response;

	Err(TransportError::Status {
		status,
		status_text,
		error_code: metadata.error_code,
		message: metadata.error_message,
		retry_after: metadata.retry_after,
	}
	.into())
}
