//! Async client for the Pocket API: request tokens, authorization URLs, access-token exchange,
//! and item submission over typed JSON calls.
//!
//! ```no_run
//! # async fn demo() -> pocket_client::error::Result<()> {
//! use pocket_client::flows::{AddItemRequest, Client};
//!
//! let client = Client::new("1234-abcd1234abcd1234abcd1234");
//! let redirect_uri = "https://app.example.com/pocket/callback";
//! let token = client.request_token(redirect_uri).await?;
//!
//! println!("Approve at {}", client.authorization_url(&token, redirect_uri)?);
//!
//! // ...once the user has been redirected back:
//! let grant = client.access_token(&token).await?;
//!
//! client
//! 	.add_item(
//! 		&AddItemRequest::new("https://example.com/article", grant.access_token)
//! 			.with_tags(["news", "tech"]),
//! 	)
//! 	.await?;
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod auth;
pub mod error;
pub mod flows;
pub mod http;
pub mod obs;
pub mod service;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, parking_lot as _, tokio as _};
