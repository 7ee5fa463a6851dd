//! Persisted KYC token and status cache
//!
//! Five well-known keys in the backing store hold the access/refresh token
//! pair, the absolute expiry, the user id and the last known verification
//! status. Expiry is persisted as issue time + `expires_in`, in epoch
//! milliseconds.

use chrono::Utc;

use crate::storage::KeyValueStore;
use crate::types::{KycStatus, KycTokens};

pub const ACCESS_TOKEN_KEY: &str = "kyc_access_token";
pub const REFRESH_TOKEN_KEY: &str = "kyc_refresh_token";
pub const TOKEN_EXPIRY_KEY: &str = "kyc_token_expiry";
pub const USER_ID_KEY: &str = "kyc_user_id";
pub const STATUS_KEY: &str = "kyc_status";

/// Safety margin before the recorded expiry at which a token is already
/// treated as expired.
const EXPIRY_BUFFER_MS: i64 = 5 * 60 * 1000;

/// Token and status persistence over a [`KeyValueStore`].
#[derive(Debug)]
pub struct TokenStore<S> {
    store: S,
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a token pair for `user_id`, recording the absolute expiry.
    pub fn save_tokens(&self, tokens: &KycTokens, user_id: &str) {
        let expiry_ms = Utc::now().timestamp_millis() + tokens.expires_in as i64 * 1000;
        self.store.set(ACCESS_TOKEN_KEY, &tokens.access_token);
        self.store.set(REFRESH_TOKEN_KEY, &tokens.refresh_token);
        self.store.set(USER_ID_KEY, user_id);
        self.store.set(TOKEN_EXPIRY_KEY, &expiry_ms.to_string());
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(REFRESH_TOKEN_KEY)
    }

    pub fn user_id(&self) -> Option<String> {
        self.store.get(USER_ID_KEY)
    }

    /// Whether the stored access token should no longer be used.
    ///
    /// Fails open: a missing or unparsable expiry counts as expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp_millis())
    }

    /// Expiry check against an explicit clock, true iff
    /// `now_ms > expiry - EXPIRY_BUFFER_MS`.
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        let Some(raw) = self.store.get(TOKEN_EXPIRY_KEY) else {
            return true;
        };
        match raw.parse::<i64>() {
            Ok(expiry_ms) => now_ms > expiry_ms - EXPIRY_BUFFER_MS,
            Err(_) => true,
        }
    }

    pub fn save_status(&self, status: KycStatus) {
        self.store.set(STATUS_KEY, status.as_str());
    }

    /// Last persisted status, `NotStarted` when absent or unrecognized.
    pub fn status(&self) -> KycStatus {
        self.store
            .get(STATUS_KEY)
            .map(|raw| KycStatus::from_stored(&raw))
            .unwrap_or(KycStatus::NotStarted)
    }

    /// Remove every persisted KYC key.
    pub fn clear(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(REFRESH_TOKEN_KEY);
        self.store.remove(TOKEN_EXPIRY_KEY);
        self.store.remove(USER_ID_KEY);
        self.store.remove(STATUS_KEY);
    }

    /// Whether this user has gone through the flow before on this device.
    /// True iff both a user id and a refresh token are on record.
    pub fn has_completed_kyc_once(&self) -> bool {
        self.user_id().is_some_and(|id| !id.is_empty())
            && self.refresh_token().is_some_and(|token| !token.is_empty())
    }

    pub fn backing(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store() -> TokenStore<MemoryStore> {
        TokenStore::new(MemoryStore::new())
    }

    fn tokens(expires_in: u64) -> KycTokens {
        KycTokens {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_in,
        }
    }

    #[test]
    fn test_save_and_read_back() {
        let store = store();
        store.save_tokens(&tokens(3600), "user-1");

        assert_eq!(store.access_token().as_deref(), Some("access"));
        assert_eq!(store.refresh_token().as_deref(), Some("refresh"));
        assert_eq!(store.user_id().as_deref(), Some("user-1"));
        assert!(!store.is_expired());
    }

    #[test]
    fn test_expiry_boundary_includes_buffer() {
        let store = store();
        let expiry_ms: i64 = 1_000_000_000;
        store.backing().set(TOKEN_EXPIRY_KEY, &expiry_ms.to_string());

        // expired iff now > expiry - buffer
        assert!(!store.is_expired_at(expiry_ms - EXPIRY_BUFFER_MS));
        assert!(store.is_expired_at(expiry_ms - EXPIRY_BUFFER_MS + 1));
        assert!(store.is_expired_at(expiry_ms));
        assert!(!store.is_expired_at(0));
    }

    #[test]
    fn test_missing_or_garbled_expiry_fails_open() {
        let store = store();
        assert!(store.is_expired_at(0));

        store.backing().set(TOKEN_EXPIRY_KEY, "not-a-number");
        assert!(store.is_expired_at(0));
    }

    #[test]
    fn test_short_lived_token_is_already_expired() {
        let store = store();
        // Lifetime shorter than the safety buffer
        store.save_tokens(&tokens(60), "user-1");
        assert!(store.is_expired());
    }

    #[test]
    fn test_status_defaults_to_not_started() {
        let store = store();
        assert_eq!(store.status(), KycStatus::NotStarted);

        store.save_status(KycStatus::Confirmed);
        assert_eq!(store.status(), KycStatus::Confirmed);
    }

    #[test]
    fn test_clear_removes_everything() {
        let store = store();
        store.save_tokens(&tokens(3600), "user-1");
        store.save_status(KycStatus::Pending);
        assert!(store.has_completed_kyc_once());

        store.clear();
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
        assert_eq!(store.user_id(), None);
        assert_eq!(store.status(), KycStatus::NotStarted);
        assert!(store.is_expired());
        assert!(!store.has_completed_kyc_once());
    }

    #[test]
    fn test_has_completed_requires_both_fields() {
        let store = store();
        assert!(!store.has_completed_kyc_once());

        store.backing().set(USER_ID_KEY, "user-1");
        assert!(!store.has_completed_kyc_once());

        store.backing().set(REFRESH_TOKEN_KEY, "refresh");
        assert!(store.has_completed_kyc_once());
    }
}
