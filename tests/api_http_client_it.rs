// std
use std::{collections::VecDeque, sync::Arc, time::Duration};
// crates.io
use parking_lot::Mutex;
use serde_json::Value;
// self
use pocket_client::{
	api::{CONTENT_TYPE, X_ACCEPT},
	error::{Error, TransportError, ValidationError},
	flows::{AddItemRequest, Client},
	http::{ApiHttpClient, ApiRequest, ApiResponse, HttpFuture},
	service::ServiceConfig,
};

/// Replays scripted responses and records every request it receives.
#[derive(Default)]
struct RecordingHttpClient {
	requests: Mutex<Vec<ApiRequest>>,
	responses: Mutex<VecDeque<ApiResponse>>,
}
impl RecordingHttpClient {
	fn replying(responses: impl IntoIterator<Item = ApiResponse>) -> Self {
		Self { requests: Mutex::default(), responses: Mutex::new(responses.into_iter().collect()) }
	}

	fn calls(&self) -> usize {
		self.requests.lock().len()
	}

	fn request_body(&self, index: usize) -> Value {
		let requests = self.requests.lock();
		let request = requests.get(index).expect("Recorded request should exist.");

		serde_json::from_slice(&request.body).expect("Recorded body should be JSON.")
	}
}
impl ApiHttpClient for RecordingHttpClient {
	fn execute(&self, request: ApiRequest) -> HttpFuture<'_> {
		self.requests.lock().push(request);

		let response =
			self.responses.lock().pop_front().unwrap_or_else(|| ApiResponse::new(200, "{}"));

		Box::pin(async move { Ok(response) })
	}
}

fn build_client(http_client: Arc<RecordingHttpClient>) -> Client<RecordingHttpClient> {
	Client::with_http_client("X", ServiceConfig::default(), http_client)
}

#[tokio::test]
async fn request_token_round_trips_code_with_fixed_headers() {
	let http_client =
		Arc::new(RecordingHttpClient::replying([ApiResponse::new(200, "{\"code\":\"abc123\"}")]));
	let client = build_client(http_client.clone());
	let token = client
		.request_token("https://example.com/cb")
		.await
		.expect("Scripted request token call should succeed.");

	assert_eq!(token.expose(), "abc123");
	assert_eq!(http_client.calls(), 1);

	let requests = http_client.requests.lock();
	let request = requests.first().expect("One request should be recorded.");

	assert_eq!(request.url.as_str(), "https://getpocket.com/v3/oauth/request");
	assert_eq!(request.header("content-type"), Some(CONTENT_TYPE));
	assert_eq!(request.header("x-accept"), Some(X_ACCEPT));
	assert_eq!(request.timeout, Duration::from_secs(10));
	assert_eq!(
		serde_json::from_slice::<Value>(&request.body).expect("Body should be JSON."),
		serde_json::json!({ "consumer_key": "X", "redirect_uri": "https://example.com/cb" })
	);
}

#[tokio::test]
async fn add_item_serializes_tags_with_comma_space() {
	let http_client = Arc::new(RecordingHttpClient::default());
	let client = build_client(http_client.clone());
	let request =
		AddItemRequest::new("https://example.com/article", "token").with_tags(["news", "tech"]);

	client.add_item(&request).await.expect("Scripted add call should succeed.");

	let body = http_client.request_body(0);

	assert_eq!(body["tags"], Value::String("news, tech".into()));
	assert_eq!(body["consumer_key"], "X");
	assert_eq!(body["access_token"], "token");
	assert!(body.get("title").is_none());
	assert!(body.get("tweet_id").is_none());
}

#[tokio::test]
async fn add_item_validation_issues_zero_calls() {
	let http_client = Arc::new(RecordingHttpClient::default());
	let client = build_client(http_client.clone());

	for (request, expected) in [
		(AddItemRequest::new("", "token"), ValidationError::EmptyUrl),
		(AddItemRequest::new("https://example.com/article", ""), ValidationError::EmptyAccessToken),
	] {
		let err = client.add_item(&request).await.expect_err("Invalid requests should fail.");

		match err {
			Error::Validation(actual) => assert_eq!(actual, expected),
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}

	assert_eq!(http_client.calls(), 0);
}

#[tokio::test]
async fn status_check_ignores_body_content() {
	let http_client = Arc::new(RecordingHttpClient::replying([ApiResponse::new(
		500,
		"{\"access_token\":\"t\",\"username\":\"u\"}",
	)
	.with_status_text("Internal Server Error")]));
	let client = build_client(http_client);
	let err =
		client.access_token("abc123").await.expect_err("HTTP 500 should surface as an error.");

	assert!(matches!(err, Error::Transport(TransportError::Status { status: 500, .. })));
}

#[tokio::test]
async fn full_handshake_then_add() {
	let http_client = Arc::new(RecordingHttpClient::replying([
		ApiResponse::new(200, "{\"code\":\"abc123\"}"),
		ApiResponse::new(200, "{\"access_token\":\"token\",\"username\":\"pocketuser\"}"),
		ApiResponse::new(200, "{\"item\":{},\"status\":1}"),
	]));
	let client = build_client(http_client.clone());
	let redirect_uri = "https://example.com/cb";
	let token = client.request_token(redirect_uri).await.expect("Request token should succeed.");
	let url = client
		.authorization_url(&token, redirect_uri)
		.expect("Authorization URL should build.");

	assert!(url.ends_with("request_token=abc123&redirect_uri=https://example.com/cb"));

	let grant = client.access_token(&token).await.expect("Exchange should succeed.");

	assert_eq!(grant.username, "pocketuser");

	client
		.add_item(&AddItemRequest::new("https://example.com/article", grant.access_token))
		.await
		.expect("Add should succeed.");

	assert_eq!(http_client.calls(), 3);
	assert_eq!(http_client.request_body(1)["code"], "abc123");
	assert_eq!(http_client.request_body(2)["access_token"], "token");
}
