//! Provider endpoint configuration
//!
//! The provider runs a production and a staging deployment of both its API
//! and its hosted webview. Staging is used when the wallet shell itself is
//! served from a test hostname; local development talks to production
//! unless a build-time override says otherwise.

use chimera_core::apps::Environment;
use chimera_core::types::KycAuthParams;
use url::form_urlencoded;

pub const PRODUCTION_API_URL: &str = "https://api.idflow.ch";
pub const STAGING_API_URL: &str = "https://idflow-staging.azurewebsites.net";
pub const PRODUCTION_WEBVIEW_URL: &str = "https://demo.idflow.ch/";
pub const STAGING_WEBVIEW_URL: &str = "https://demo-staging.idflow.ch/";

/// Origin fragments the webview message listener accepts messages from.
const TRUSTED_ORIGIN_FRAGMENTS: &[&str] = &["idflow.ch", "azurewebsites.net"];

/// Whether a cross-document message origin belongs to the provider.
///
/// Substring match, mirroring the provider's own embedding guidance; see
/// DESIGN.md for the trade-off against exact-origin matching.
pub fn is_trusted_origin(origin: &str) -> bool {
    TRUSTED_ORIGIN_FRAGMENTS
        .iter()
        .any(|fragment| origin.contains(fragment))
}

/// Resolved API and webview base URLs for one run of the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KycEndpoints {
    api_url: String,
    webview_url: String,
}

impl KycEndpoints {
    pub fn new(api_url: impl Into<String>, webview_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            webview_url: webview_url.into(),
        }
    }

    /// Pick endpoints for the environment, honoring build-time overrides
    /// (`CHIMERA_KYC_API_URL`, `CHIMERA_KYC_WEBVIEW_URL`) first.
    pub fn resolve(
        environment: Environment,
        api_override: Option<&str>,
        webview_override: Option<&str>,
    ) -> Self {
        let (api_url, webview_url) = if environment.is_test() {
            (STAGING_API_URL, STAGING_WEBVIEW_URL)
        } else {
            (PRODUCTION_API_URL, PRODUCTION_WEBVIEW_URL)
        };
        Self {
            api_url: api_override.unwrap_or(api_url).to_string(),
            webview_url: webview_override.unwrap_or(webview_url).to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Webview URL, with magic-link credentials appended as query
    /// parameters when present.
    pub fn webview_url(&self, params: Option<&KycAuthParams>) -> String {
        let Some(params) = params else {
            return self.webview_url.clone();
        };

        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("uid", &params.uid);
        query.append_pair("code", &params.code);
        if let Some(kind) = &params.kind {
            query.append_pair("type", kind);
        }
        format!("{}?{}", self.webview_url, query.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_selection() {
        let staging = KycEndpoints::resolve(Environment::Staging, None, None);
        assert_eq!(staging.api_url(), STAGING_API_URL);
        assert_eq!(staging.webview_url(None), STAGING_WEBVIEW_URL);

        // Local development talks to production
        for env in [Environment::Development, Environment::Production] {
            let endpoints = KycEndpoints::resolve(env, None, None);
            assert_eq!(endpoints.api_url(), PRODUCTION_API_URL);
        }
    }

    #[test]
    fn test_overrides_win() {
        let endpoints = KycEndpoints::resolve(
            Environment::Staging,
            Some("http://localhost:4000"),
            Some("http://localhost:4001/"),
        );
        assert_eq!(endpoints.api_url(), "http://localhost:4000");
        assert_eq!(endpoints.webview_url(None), "http://localhost:4001/");
    }

    #[test]
    fn test_webview_url_with_params() {
        let endpoints = KycEndpoints::new("https://api.example", "https://webview.example/");
        let params = KycAuthParams {
            uid: "u 1".to_string(),
            code: "c&d".to_string(),
            kind: Some("resubmit".to_string()),
        };
        assert_eq!(
            endpoints.webview_url(Some(&params)),
            "https://webview.example/?uid=u+1&code=c%26d&type=resubmit"
        );
    }

    #[test]
    fn test_trusted_origins() {
        assert!(is_trusted_origin("https://demo.idflow.ch"));
        assert!(is_trusted_origin("https://idflow-staging.azurewebsites.net"));
        assert!(!is_trusted_origin("https://evil.example.com"));
    }
}
