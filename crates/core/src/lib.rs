//! Chimera core types and utilities
//!
//! Platform-independent domain logic for the wallet mini-apps launcher and
//! the KYC flow: the data model, token/status persistence over a key-value
//! storage seam, deep-link parsing, per-environment app URL resolution and
//! the explicit app flow state machine. Compiles for native targets and
//! wasm32.

pub mod apps;
pub mod deeplink;
pub mod flow;
pub mod storage;
pub mod token_store;
pub mod types;

pub use apps::{AppConfig, AppInfoSlide, AppTerms, AppUrls, Environment, app_config, app_catalog, resolve_app_url};
pub use deeplink::{AppLink, parse_app_link, parse_kyc_link};
pub use flow::AppStep;
pub use storage::{KeyValueStore, MemoryStore};
pub use token_store::TokenStore;
pub use types::{KycAuthParams, KycStatus, KycStatusReport, KycTokens};
