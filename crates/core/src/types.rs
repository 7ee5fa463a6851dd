use serde::{Deserialize, Serialize};

/// Access/refresh token pair issued by the KYC provider.
///
/// `expires_in` is the remaining lifetime in seconds at issue time; the
/// absolute expiry is derived when the pair is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
}

/// Verification state of the current user.
///
/// The remote API is the source of truth; the locally persisted value is a
/// fallback when the API cannot be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    NotStarted,
    Pending,
    Confirmed,
    Rejected,
    Expired,
}

impl KycStatus {
    /// Map a raw status string from the provider API onto the local enum.
    ///
    /// The provider reports "approved" and "confirmed" interchangeably;
    /// anything unrecognized is still in review.
    pub fn from_remote(raw: &str) -> Self {
        match raw {
            "confirmed" | "approved" => Self::Confirmed,
            "rejected" => Self::Rejected,
            "expired" => Self::Expired,
            _ => Self::Pending,
        }
    }

    /// Decode a persisted status string, defaulting to `NotStarted` when the
    /// stored value is unrecognized.
    pub fn from_stored(raw: &str) -> Self {
        match raw {
            "pending" => Self::Pending,
            "confirmed" => Self::Confirmed,
            "rejected" => Self::Rejected,
            "expired" => Self::Expired,
            _ => Self::NotStarted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Rejected => "rejected",
            Self::Expired => "expired",
        }
    }
}

impl std::fmt::Display for KycStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-time credentials carried by a magic-link deep link.
///
/// Consumed once to confirm the link, then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycAuthParams {
    pub uid: String,
    pub code: String,
    pub kind: Option<String>,
}

/// Status plus an optional human-readable message, as handed to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KycStatusReport {
    pub status: KycStatus,
    pub message: Option<String>,
}

impl KycStatusReport {
    pub fn new(status: KycStatus, message: impl Into<Option<String>>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_status_mapping() {
        assert_eq!(KycStatus::from_remote("confirmed"), KycStatus::Confirmed);
        assert_eq!(KycStatus::from_remote("approved"), KycStatus::Confirmed);
        assert_eq!(KycStatus::from_remote("rejected"), KycStatus::Rejected);
        assert_eq!(KycStatus::from_remote("expired"), KycStatus::Expired);
        assert_eq!(KycStatus::from_remote("in_review"), KycStatus::Pending);
        assert_eq!(KycStatus::from_remote(""), KycStatus::Pending);
    }

    #[test]
    fn test_stored_status_round_trip() {
        for status in [
            KycStatus::NotStarted,
            KycStatus::Pending,
            KycStatus::Confirmed,
            KycStatus::Rejected,
            KycStatus::Expired,
        ] {
            assert_eq!(KycStatus::from_stored(status.as_str()), status);
        }
    }

    #[test]
    fn test_unknown_stored_status_defaults_to_not_started() {
        assert_eq!(KycStatus::from_stored("garbage"), KycStatus::NotStarted);
        assert_eq!(KycStatus::from_stored(""), KycStatus::NotStarted);
    }

    #[test]
    fn test_status_serde_uses_snake_case() {
        let json = serde_json::to_string(&KycStatus::NotStarted).unwrap();
        assert_eq!(json, "\"not_started\"");
        let back: KycStatus = serde_json::from_str("\"confirmed\"").unwrap();
        assert_eq!(back, KycStatus::Confirmed);
    }
}
