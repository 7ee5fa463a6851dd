//! Chimera KYC provider integration
//!
//! REST client for the external identity-verification provider plus the
//! session layer that sequences token persistence against it: magic-link
//! confirmation, refresh-on-expiry, 401 invalidation and cached-status
//! fallback. Also carries the provider endpoint configuration and the
//! cross-document message contract spoken by the provider's webview.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod session;
pub mod types;

pub use client::KycClient;
pub use endpoints::{KycEndpoints, is_trusted_origin};
pub use error::ClientError;
pub use session::KycSession;
pub use types::ProviderMessage;
