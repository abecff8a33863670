//! Walks through the Pocket authorization handshake and optionally saves one URL.
//!
//! ```sh
//! POCKET_CONSUMER_KEY=1234-abcd1234abcd1234abcd1234 cargo run --example authorize -- https://example.com
//! ```

// std
use std::{env, time::Duration};
// crates.io
use color_eyre::{Result, eyre::WrapErr};
// self
use pocket_client::{
	flows::{AddItemRequest, Client},
	http::ReqwestHttpClient,
	service::ServiceConfig,
};

const REDIRECT_URI: &str = "pocketapp1234:authorizationFinished";
const APPROVAL_WAIT: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let consumer_key =
		env::var("POCKET_CONSUMER_KEY").wrap_err("POCKET_CONSUMER_KEY must be set.")?;
	let mut service = ServiceConfig::builder();

	if let Ok(api_base) = env::var("POCKET_API_BASE") {
		service = service.api_base(api_base);
	}

	let client =
		Client::with_http_client(consumer_key, service.build()?, ReqwestHttpClient::try_new()?);
	let token = client.request_token(REDIRECT_URI).await?;

	println!("Approve the request at {}.", client.authorization_url(&token, REDIRECT_URI)?);
	println!("Waiting {} seconds for approval.", APPROVAL_WAIT.as_secs());

	tokio::time::sleep(APPROVAL_WAIT).await;

	let grant = client.access_token(&token).await?;

	println!("Authorized as {}.", grant.username);

	if let Some(url) = env::args().nth(1) {
		client.add_item(&AddItemRequest::new(url.as_str(), grant.access_token)).await?;
		println!("Saved {url}.");
	}

	Ok(())
}
