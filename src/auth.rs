//! OAuth 1.0a consumer credentials used to sign launches.

pub mod consumer;
pub mod secret;

pub use consumer::*;
pub use secret::*;
