//! KYC session lifecycle
//!
//! Sequences the token store against the provider client: confirming magic
//! links, refreshing expired tokens, invalidating on 401 and falling back
//! to the cached status when the provider cannot be reached. Status
//! lookups never fail; the UI always gets something renderable.

use tracing::{debug, warn};

use chimera_core::storage::KeyValueStore;
use chimera_core::token_store::TokenStore;
use chimera_core::types::{KycAuthParams, KycStatus, KycStatusReport, KycTokens};

use crate::client::KycClient;
use crate::error::ClientError;
use crate::types::ProviderMessage;

/// Token lifetime assumed for refreshes and webview messages that omit one.
const DEFAULT_EXPIRES_IN_SECS: u64 = 3600;

/// Provider client plus persisted token state for the current user.
pub struct KycSession<S> {
    client: KycClient,
    store: TokenStore<S>,
}

impl<S: KeyValueStore> KycSession<S> {
    pub fn new(client: KycClient, store: S) -> Self {
        Self {
            client,
            store: TokenStore::new(store),
        }
    }

    pub fn store(&self) -> &TokenStore<S> {
        &self.store
    }

    /// Whether this device holds credentials from an earlier run.
    pub fn has_completed_kyc_once(&self) -> bool {
        self.store.has_completed_kyc_once()
    }

    /// Drop every persisted credential and the cached status.
    pub fn clear(&self) {
        self.store.clear();
    }

    /// Confirm one-time magic-link credentials and persist the resulting
    /// token pair. Failure here is surfaced: the UI shows a blocking error.
    pub async fn confirm_magic_link(
        &self,
        params: &KycAuthParams,
    ) -> Result<KycTokens, ClientError> {
        let tokens = self.client.confirm_magic_link(params).await?;
        self.store.save_tokens(&tokens, &params.uid);
        Ok(tokens)
    }

    /// Try to refresh the stored token pair once.
    ///
    /// A rejection from the server means the session is gone: stored state
    /// is cleared. Transport failures leave state untouched. Neither is
    /// surfaced as an error.
    pub async fn refresh(&self) -> Option<KycTokens> {
        let refresh_token = self.store.refresh_token()?;

        match self.client.refresh_token(&refresh_token).await {
            Ok(response) => {
                let tokens = KycTokens {
                    access_token: response.access_token,
                    // The server may rotate the refresh token; keep the old
                    // one when it doesn't
                    refresh_token: response.refresh_token.unwrap_or(refresh_token),
                    expires_in: response.expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS),
                };
                if let Some(user_id) = self.store.user_id() {
                    self.store.save_tokens(&tokens, &user_id);
                }
                Some(tokens)
            }
            Err(err) if err.is_status_error() => {
                debug!("refresh token rejected, clearing session: {err}");
                self.store.clear();
                None
            }
            Err(err) => {
                warn!("token refresh failed: {err}");
                None
            }
        }
    }

    /// Access token fit for a request: the stored one when unexpired,
    /// otherwise the result of a single refresh attempt.
    pub async fn valid_access_token(&self) -> Option<String> {
        let access_token = self.store.access_token()?;

        if !self.store.is_expired() {
            return Some(access_token);
        }

        self.refresh().await.map(|tokens| tokens.access_token)
    }

    /// Current verification status.
    ///
    /// `provided_token` bypasses the store lookup (used right after a
    /// confirmation, before the UI re-reads state). Never returns an
    /// error: a 401 resets the session, anything else falls back to the
    /// last persisted status.
    pub async fn status(&self, provided_token: Option<&str>) -> KycStatusReport {
        let access_token = match provided_token {
            Some(token) => Some(token.to_string()),
            None => self.valid_access_token().await,
        };
        let Some(access_token) = access_token else {
            return KycStatusReport::new(
                KycStatus::NotStarted,
                Some("No valid authentication".to_string()),
            );
        };

        match self.client.registration_status(&access_token).await {
            Ok(response) => {
                let status = response
                    .status
                    .as_deref()
                    .map(KycStatus::from_remote)
                    .unwrap_or(KycStatus::Pending);
                self.store.save_status(status);
                KycStatusReport::new(status, response.message)
            }
            Err(ClientError::AuthenticationFailed(_)) => {
                debug!("status fetch rejected with 401, clearing session");
                self.store.clear();
                KycStatusReport::new(KycStatus::NotStarted, Some("Session expired".to_string()))
            }
            Err(err) => {
                warn!("status fetch failed, using cached status: {err}");
                KycStatusReport::new(
                    self.store.status(),
                    Some("Unable to fetch current status".to_string()),
                )
            }
        }
    }

    /// Apply a message posted by the provider webview.
    ///
    /// Returns the status the UI should surface, when the message carries
    /// one. Token deliveries with missing fields are dropped.
    pub fn handle_message(&self, message: ProviderMessage) -> Option<KycStatus> {
        match message {
            ProviderMessage::Tokens {
                access_token,
                refresh_token,
                expires_in,
                user_id,
            } => {
                if access_token.is_empty() || refresh_token.is_empty() || user_id.is_empty() {
                    debug!("dropping incomplete token message from webview");
                    return None;
                }
                let tokens = KycTokens {
                    access_token,
                    refresh_token,
                    expires_in: expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS),
                };
                self.store.save_tokens(&tokens, &user_id);
                None
            }
            ProviderMessage::Status { status } => {
                self.store.save_status(status);
                Some(status)
            }
            ProviderMessage::Complete => {
                self.store.save_status(KycStatus::Pending);
                Some(KycStatus::Pending)
            }
        }
    }
}
