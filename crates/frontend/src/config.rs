//! Build-time configuration overrides
//!
//! Mirrors the `CHIMERA_<NAME>_URL` convention: every known app id and the
//! two provider endpoints can be redirected at build time, which is how
//! local development points the shell at a locally running app or a mock
//! provider.

/// Override for one app's URL, by app id.
///
/// Build-time environment variables cannot be looked up dynamically, so
/// the known ids are enumerated here; `override_var_name` in the core
/// crate documents the naming convention.
pub fn app_url_override(app_id: &str) -> Option<&'static str> {
    match app_id {
        "statement" => option_env!("CHIMERA_STATEMENT_URL"),
        "referral" => option_env!("CHIMERA_REFERRAL_URL"),
        "gift-cards" => option_env!("CHIMERA_GIFT_CARDS_URL"),
        "card-reservation" => option_env!("CHIMERA_CARD_RESERVATION_URL"),
        _ => None,
    }
}

/// Override for the KYC provider API base URL.
pub fn kyc_api_override() -> Option<&'static str> {
    option_env!("CHIMERA_KYC_API_URL")
}

/// Override for the KYC provider webview URL.
pub fn kyc_webview_override() -> Option<&'static str> {
    option_env!("CHIMERA_KYC_WEBVIEW_URL")
}
