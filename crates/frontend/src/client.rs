//! Client configuration and initialization

use once_cell::sync::Lazy;
use std::sync::Mutex;

use chimera_core::apps::Environment;
use chimera_kyc::client::KycClient;
use chimera_kyc::endpoints::KycEndpoints;
use chimera_kyc::error::ClientError;
use chimera_kyc::session::KycSession;

use crate::config;
use crate::storage::BrowserStore;
use crate::utils::current_hostname;

/// Global client instance
static KYC_CLIENT: Lazy<Mutex<Option<KycClient>>> = Lazy::new(|| Mutex::new(None));

/// Environment of the currently served shell.
pub fn environment() -> Environment {
    Environment::detect(&current_hostname())
}

/// Provider endpoints for this run, overrides applied.
pub fn kyc_endpoints() -> KycEndpoints {
    KycEndpoints::resolve(
        environment(),
        config::kyc_api_override(),
        config::kyc_webview_override(),
    )
}

/// Get the KYC provider client instance
pub fn kyc_client() -> Result<KycClient, ClientError> {
    let mut client_lock = KYC_CLIENT
        .lock()
        .expect("Failed to acquire KYC client lock");

    if let Some(client) = client_lock.as_ref() {
        Ok(client.clone())
    } else {
        let client = KycClient::new(kyc_endpoints().api_url())?;
        *client_lock = Some(client.clone());
        Ok(client)
    }
}

/// KYC session over the shared client and browser storage.
pub fn kyc_session() -> Result<KycSession<BrowserStore>, ClientError> {
    Ok(KycSession::new(kyc_client()?, BrowserStore))
}
