#![cfg(feature = "reqwest")]

// std
use std::{
	net::TcpListener,
	time::{Duration, Instant},
};
// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use pocket_client::{
	error::{Error, ProtocolError, TransportError, ValidationError},
	flows::{Client, ReqwestPocketClient},
	service::ServiceConfig,
};

const CONSUMER_KEY: &str = "X";
const REDIRECT_URI: &str = "pocketapp1234:authorizationFinished";

fn build_client(base_url: &str, consumer_key: &str) -> ReqwestPocketClient {
	let service = ServiceConfig::builder()
		.api_base(format!("{base_url}/v3/"))
		.authorize_page(format!("{base_url}/auth/authorize"))
		.build()
		.expect("Mock service configuration should build.");

	Client::with_service(consumer_key, service)
}

#[tokio::test]
async fn request_token_returns_service_code() {
	let server = MockServer::start_async().await;
	let client = build_client(&server.base_url(), CONSUMER_KEY);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v3/oauth/request")
				.header("content-type", "application/json; charset=UTF-8")
				.header("x-accept", "application/json")
				.json_body(json!({ "consumer_key": CONSUMER_KEY, "redirect_uri": REDIRECT_URI }));
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"code\":\"dcba4321-dcba-4321-dcba-4321dc\",\"state\":null}");
		})
		.await;
	let token = client
		.request_token(REDIRECT_URI)
		.await
		.expect("Request token call should succeed against the mock service.");

	assert_eq!(token.expose(), "dcba4321-dcba-4321-dcba-4321dc");

	mock.assert_async().await;
}

#[tokio::test]
async fn empty_code_is_a_protocol_error() {
	let server = MockServer::start_async().await;
	let client = build_client(&server.base_url(), CONSUMER_KEY);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v3/oauth/request");
			then.status(200).header("content-type", "application/json").body("{\"code\":\"\"}");
		})
		.await;
	let err = client
		.request_token(REDIRECT_URI)
		.await
		.expect_err("An empty code should not be treated as success.");

	assert!(matches!(err, Error::Protocol(ProtocolError::EmptyRequestTokenCode)));
	assert_eq!(err.to_string(), "Empty request token code in API response.");

	mock.assert_async().await;
}

#[tokio::test]
async fn missing_code_is_a_protocol_error() {
	let server = MockServer::start_async().await;
	let client = build_client(&server.base_url(), CONSUMER_KEY);
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v3/oauth/request");
			then.status(200).header("content-type", "application/json").body("{}");
		})
		.await;
	let err = client
		.request_token(REDIRECT_URI)
		.await
		.expect_err("A reply without code should not be treated as success.");

	assert!(matches!(err, Error::Protocol(ProtocolError::EmptyRequestTokenCode)));
}

#[tokio::test]
async fn server_error_is_a_transport_error_regardless_of_body() {
	let server = MockServer::start_async().await;
	let client = build_client(&server.base_url(), CONSUMER_KEY);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v3/oauth/request");
			then.status(500)
				.header("content-type", "application/json")
				.body("{\"code\":\"looks-valid\"}");
		})
		.await;
	let err = client
		.request_token(REDIRECT_URI)
		.await
		.expect_err("HTTP 500 should surface as an error.");

	match err {
		Error::Transport(TransportError::Status { status, status_text, .. }) => {
			assert_eq!(status, 500);
			assert_eq!(status_text, "Internal Server Error");
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn pocket_error_headers_surface_in_status_errors() {
	let server = MockServer::start_async().await;
	let client = build_client(&server.base_url(), "");
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v3/oauth/request");
			then.status(400)
				.header("x-error-code", "138")
				.header("x-error", "Missing consumer key.");
		})
		.await;
	let err = client
		.request_token(REDIRECT_URI)
		.await
		.expect_err("Missing consumer keys should be rejected by the service.");

	match err {
		Error::Transport(TransportError::Status { status, error_code, message, .. }) => {
			assert_eq!(status, 400);
			assert_eq!(error_code, Some(138));
			assert_eq!(message.as_deref(), Some("Missing consumer key."));
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}
}

#[tokio::test]
async fn malformed_body_is_a_protocol_error() {
	let server = MockServer::start_async().await;
	let client = build_client(&server.base_url(), CONSUMER_KEY);
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v3/oauth/request");
			then.status(200).body("code=dcba4321");
		})
		.await;
	let err = client
		.request_token(REDIRECT_URI)
		.await
		.expect_err("Form-encoded replies should not decode.");

	assert!(matches!(err, Error::Protocol(ProtocolError::MalformedResponse { status: 200, .. })));
}

#[tokio::test]
async fn empty_redirect_uri_is_rejected_locally() {
	let server = MockServer::start_async().await;
	let client = build_client(&server.base_url(), CONSUMER_KEY);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v3/oauth/request");
			then.status(200).body("{\"code\":\"unused\"}");
		})
		.await;
	let err = client.request_token("").await.expect_err("Empty redirect URIs should be rejected.");

	assert!(matches!(err, Error::Validation(ValidationError::EmptyRedirectUri)));

	mock.assert_calls_async(0).await;
}

#[test]
fn authorization_url_uses_configured_page() {
	let client = build_client("http://127.0.0.1:9", CONSUMER_KEY);
	let url = client
		.authorization_url("abc123", "https://example.com/cb")
		.expect("Authorization URL should build.");

	assert_eq!(
		url,
		"http://127.0.0.1:9/auth/authorize?request_token=abc123&redirect_uri=https://example.com/cb"
	);
}

#[tokio::test]
async fn slow_service_hits_configured_timeout() {
	let server = MockServer::start_async().await;
	let service = ServiceConfig::builder()
		.api_base(server.url("/v3/"))
		.timeout(Duration::from_millis(500))
		.build()
		.expect("Short-timeout configuration should build.");
	let client = Client::with_service(CONSUMER_KEY, service);
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v3/oauth/request");
			then.status(200).delay(Duration::from_secs(3)).body("{\"code\":\"late\"}");
		})
		.await;
	let started = Instant::now();
	let err = client
		.request_token(REDIRECT_URI)
		.await
		.expect_err("Requests outliving the timeout should fail.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
	assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
	let port = TcpListener::bind("127.0.0.1:0")
		.and_then(|listener| listener.local_addr())
		.expect("Loopback port should be available.")
		.port();
	let client = build_client(&format!("http://127.0.0.1:{port}"), CONSUMER_KEY);
	let err = client
		.request_token(REDIRECT_URI)
		.await
		.expect_err("Closed ports should refuse the connection.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
	assert_eq!(err.status(), None);
}
