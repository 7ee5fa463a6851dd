//! KYC provider HTTP client

use chrono::Utc;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;

use chimera_core::types::{KycAuthParams, KycTokens};

use crate::error::ClientError;
use crate::types::{
    MagicLinkConfirmRequest, MagicLinkConfirmResponse, RefreshTokenRequest, RefreshTokenResponse,
    RegistrationStatusResponse,
};

/// Token lifetime assumed when the provider does not say otherwise.
const DEFAULT_EXPIRES_IN_SECS: u64 = 3600;

/// KYC provider API client
#[derive(Clone)]
pub struct KycClient {
    client: Client,
    base_url: String,
}

impl KycClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> KycClientBuilder {
        KycClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    /// Confirm a magic link, exchanging its one-time credentials for a
    /// token pair.
    ///
    /// The remaining lifetime is computed from the absolute expiry when the
    /// provider sends one, defaulting to an hour otherwise.
    pub async fn confirm_magic_link(
        &self,
        params: &KycAuthParams,
    ) -> Result<KycTokens, ClientError> {
        let request = self
            .request(reqwest::Method::POST, "/api/auth/magic-link-confirm")
            .json(&MagicLinkConfirmRequest {
                user_id: params.uid.clone(),
                code: params.code.clone(),
                kind: params.kind.clone(),
            });
        let response: MagicLinkConfirmResponse = self.execute(request).await?;

        let payload = response
            .token
            .ok_or_else(|| ClientError::InvalidResponse("missing token object".into()))?;
        let access_token = payload
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ClientError::InvalidResponse("missing access token".into()))?;

        let expires_in = match payload.expiry_time {
            Some(expiry) => (expiry - Utc::now()).num_seconds().max(0) as u64,
            None => DEFAULT_EXPIRES_IN_SECS,
        };

        Ok(KycTokens {
            access_token,
            refresh_token: payload.refresh_token.unwrap_or_default(),
            expires_in,
        })
    }

    /// Exchange a refresh token for a fresh token pair.
    ///
    /// The provider may omit the rotated refresh token and the lifetime;
    /// the caller decides what to substitute.
    pub async fn refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<RefreshTokenResponse, ClientError> {
        let request = self
            .request(reqwest::Method::POST, "/api/auth/refresh-token")
            .json(&RefreshTokenRequest {
                refresh_token: refresh_token.to_string(),
            });
        self.execute(request).await
    }

    /// Fetch the registration status for the bearer of `access_token`.
    pub async fn registration_status(
        &self,
        access_token: &str,
    ) -> Result<RegistrationStatusResponse, ClientError> {
        let request = self
            .request(reqwest::Method::GET, "/api/Registration/status")
            .header(header::AUTHORIZATION, format!("Bearer {access_token}"));
        self.execute(request).await
    }
}

/// Builder for KycClient
#[derive(Default)]
pub struct KycClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl KycClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<KycClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout; // Timeouts not supported on WASM

        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder = client_builder.user_agent("chimera-kyc/0.1.0");
        }

        let client = client_builder.build()?;

        Ok(KycClient { client, base_url })
    }
}
