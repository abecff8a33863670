//! Authorization-handshake artifacts: redacted secrets, request tokens, and access grants.

pub mod secret;
pub mod token;

pub use secret::*;
pub use token::*;
