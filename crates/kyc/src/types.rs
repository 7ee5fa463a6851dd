//! Wire types for the KYC provider API and its webview messages

use chimera_core::KycStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Magic-link confirmation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicLinkConfirmRequest {
    /// User id from the link ("uid" on the link itself)
    pub user_id: String,
    /// One-time confirmation code
    pub code: String,
    /// Link kind, e.g. a resubmission link
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Magic-link confirmation response; the token data is nested
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagicLinkConfirmResponse {
    pub token: Option<TokenPayload>,
}

/// Token object inside a confirmation response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPayload {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    /// Absolute expiry; when absent the token lifetime defaults to an hour
    pub expiry_time: Option<DateTime<Utc>>,
}

/// Token refresh request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Token refresh response; the server may omit the rotated refresh token
/// and the lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<u64>,
}

/// Registration status response, with the provider's raw status string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationStatusResponse {
    pub status: Option<String>,
    pub message: Option<String>,
}

/// Cross-document message posted by the provider webview, tagged on `type`.
///
/// Unknown message types fail to decode and are ignored by the listener.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ProviderMessage {
    /// Token delivery after the user authenticated inside the webview
    #[serde(rename = "kyc-tokens", rename_all = "camelCase")]
    Tokens {
        access_token: String,
        refresh_token: String,
        expires_in: Option<u64>,
        user_id: String,
    },
    /// Status pushed while the webview is open
    #[serde(rename = "kyc-status")]
    Status { status: KycStatus },
    /// The user finished the flow inside the webview
    #[serde(rename = "kyc-complete")]
    Complete,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_confirm_request_wire_shape() {
        let request = MagicLinkConfirmRequest {
            user_id: "u1".to_string(),
            code: "c1".to_string(),
            kind: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"userId": "u1", "code": "c1"}));

        let request = MagicLinkConfirmRequest {
            kind: Some("resubmit".to_string()),
            ..request
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "resubmit");
    }

    #[test]
    fn test_provider_message_tokens() {
        let msg: ProviderMessage = serde_json::from_value(json!({
            "type": "kyc-tokens",
            "accessToken": "a",
            "refreshToken": "r",
            "expiresIn": 1800,
            "userId": "u1",
        }))
        .unwrap();
        assert_eq!(
            msg,
            ProviderMessage::Tokens {
                access_token: "a".to_string(),
                refresh_token: "r".to_string(),
                expires_in: Some(1800),
                user_id: "u1".to_string(),
            }
        );
    }

    #[test]
    fn test_provider_message_status_and_complete() {
        let msg: ProviderMessage =
            serde_json::from_value(json!({"type": "kyc-status", "status": "confirmed"})).unwrap();
        assert_eq!(
            msg,
            ProviderMessage::Status {
                status: KycStatus::Confirmed
            }
        );

        let msg: ProviderMessage = serde_json::from_value(json!({"type": "kyc-complete"})).unwrap();
        assert_eq!(msg, ProviderMessage::Complete);
    }

    #[test]
    fn test_unknown_message_type_is_an_error() {
        let result: Result<ProviderMessage, _> =
            serde_json::from_value(json!({"type": "kyc-heartbeat"}));
        assert!(result.is_err());
    }
}
