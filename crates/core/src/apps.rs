//! Mini-app catalog and per-environment URL resolution

use once_cell::sync::Lazy;

/// Hostname fragments that mark a staging/test deployment of the wallet.
pub const TEST_DOMAINS: &[&str] = &[
    "staging.chimerawallet.com",
    "test.chimerawallet.com",
    "pages.dev",
];

/// Which deployment of the wallet shell is running, derived from the
/// hostname it is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Classify a hostname. Localhost wins over the test-domain list;
    /// anything unrecognized is production.
    pub fn detect(hostname: &str) -> Self {
        if hostname.contains("localhost") {
            return Self::Development;
        }
        if TEST_DOMAINS.iter().any(|domain| hostname.contains(domain)) {
            return Self::Staging;
        }
        Self::Production
    }

    pub fn is_test(&self) -> bool {
        matches!(self, Self::Staging)
    }
}

/// One slide of the optional intro carousel shown before an app opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfoSlide {
    pub title: String,
    pub description: String,
    pub image: String,
}

/// Optional terms the user must accept before an app opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppTerms {
    pub title: String,
    pub content: String,
    pub checkbox_label: String,
}

/// Per-environment URLs of an app. An empty production URL means the app
/// has no reachable deployment yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppUrls {
    pub production: String,
    pub staging: Option<String>,
    pub development: Option<String>,
}

/// Static configuration of one mini-app. Compiled in, immutable at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub live: bool,
    pub info_slides: Vec<AppInfoSlide>,
    pub terms: Option<AppTerms>,
    pub urls: AppUrls,
}

/// Name of the build-time variable that overrides an app's URL,
/// `CHIMERA_<APPID_UPPER_SNAKE>_URL`.
pub fn override_var_name(app_id: &str) -> String {
    format!("CHIMERA_{}_URL", app_id.to_uppercase().replace('-', "_"))
}

/// Resolve the URL to load for an app.
///
/// A build-time override always wins. Otherwise the environment picks the
/// configured URL, falling through to production; `None` means the app is
/// not yet available and the UI shows a placeholder instead of failing.
pub fn resolve_app_url(
    config: &AppConfig,
    environment: Environment,
    override_url: Option<&str>,
) -> Option<String> {
    if let Some(url) = override_url.filter(|url| !url.is_empty()) {
        return Some(url.to_string());
    }

    match environment {
        Environment::Development => {
            if let Some(url) = &config.urls.development {
                return Some(url.clone());
            }
        }
        Environment::Staging => {
            if let Some(url) = &config.urls.staging {
                return Some(url.clone());
            }
        }
        Environment::Production => {}
    }

    if config.urls.production.is_empty() {
        None
    } else {
        Some(config.urls.production.clone())
    }
}

static APP_CATALOG: Lazy<Vec<AppConfig>> = Lazy::new(|| {
    vec![
        AppConfig {
            id: "statement".to_string(),
            name: "Statement".to_string(),
            description: "View your transaction history and account statements".to_string(),
            icon: "statement".to_string(),
            live: true,
            info_slides: vec![AppInfoSlide {
                title: "Your Financial Overview".to_string(),
                description: "Access detailed statements of all your transactions, balances, \
                              and account activity in one place."
                    .to_string(),
                image: "/images/apps/statement.png".to_string(),
            }],
            terms: None,
            urls: AppUrls::default(),
        },
        AppConfig {
            id: "referral".to_string(),
            name: "Referral".to_string(),
            description: "Invite friends and earn rewards".to_string(),
            icon: "referral".to_string(),
            live: true,
            info_slides: vec![AppInfoSlide {
                title: "What is the Referral Program?".to_string(),
                description: "You're at the centre, and the rewards are endless!\n\n\
                              Earn 20% of all fees from every friend who signs up with your \
                              link, forever. No caps, no limits, no expiration. The more you \
                              share, the more you earn. Ready?\n\nCopy your link, spread the \
                              word, and let the rewards roll in!"
                    .to_string(),
                image: "/rocket.png".to_string(),
            }],
            terms: None,
            urls: AppUrls::default(),
        },
        AppConfig {
            id: "gift-cards".to_string(),
            name: "Gift Cards".to_string(),
            description: "Buy and redeem gift cards with Bitcoin".to_string(),
            icon: "gift-cards".to_string(),
            live: true,
            info_slides: vec![AppInfoSlide {
                title: "Gift Cards".to_string(),
                description: "Purchase gift cards from hundreds of popular brands using your \
                              Bitcoin. Perfect for everyday spending or gifting to friends \
                              and family."
                    .to_string(),
                image: "/gift.png".to_string(),
            }],
            terms: None,
            urls: AppUrls {
                production: "https://app.chimerawallet.com/gift-cards/".to_string(),
                staging: Some("https://app.staging.chimerawallet.com/gift-cards/".to_string()),
                development: Some("https://app.staging.chimerawallet.com/gift-cards/".to_string()),
            },
        },
        AppConfig {
            id: "card-reservation".to_string(),
            name: "Card Reservation".to_string(),
            description: "Reserve your Chimera debit card".to_string(),
            icon: "card-reservation".to_string(),
            live: true,
            info_slides: Vec::new(),
            terms: Some(AppTerms {
                title: "Terms & Conditions".to_string(),
                content: "By reserving a Chimera Card, you agree to the following terms:\n\n\
                          1. Card Availability: The Chimera Card is currently in development. \
                          Reserving a card does not guarantee availability or delivery \
                          timeline.\n\n\
                          2. Eligibility: Card eligibility may be subject to geographic \
                          restrictions and regulatory requirements.\n\n\
                          3. Information Usage: Your reservation information will be used to \
                          notify you when the card becomes available in your region.\n\n\
                          4. Privacy: Your personal information will be handled in accordance \
                          with our Privacy Policy.\n\n\
                          5. No Fees: There is no fee to reserve a card. Any future fees will \
                          be clearly communicated before the card is issued."
                    .to_string(),
                checkbox_label: "I agree to the Terms & Conditions".to_string(),
            }),
            urls: AppUrls {
                production: "https://chimerawallet.com/card-reservation-app/".to_string(),
                // No staging deployment for card reservation
                staging: None,
                development: None,
            },
        },
    ]
});

/// The compiled-in mini-app catalog, in launcher display order.
pub fn app_catalog() -> &'static [AppConfig] {
    &APP_CATALOG
}

/// Look up one app by id.
pub fn app_config(app_id: &str) -> Option<&'static AppConfig> {
    APP_CATALOG.iter().find(|config| config.id == app_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_urls(urls: AppUrls) -> AppConfig {
        AppConfig {
            id: "demo".to_string(),
            name: "Demo".to_string(),
            description: String::new(),
            icon: "demo".to_string(),
            live: true,
            info_slides: Vec::new(),
            terms: None,
            urls,
        }
    }

    #[test]
    fn test_environment_detection() {
        assert_eq!(Environment::detect("localhost"), Environment::Development);
        assert_eq!(Environment::detect("localhost:5173"), Environment::Development);
        assert_eq!(
            Environment::detect("app.staging.chimerawallet.com"),
            Environment::Staging
        );
        assert_eq!(
            Environment::detect("preview.pages.dev"),
            Environment::Staging
        );
        assert_eq!(
            Environment::detect("app.chimerawallet.com"),
            Environment::Production
        );
    }

    #[test]
    fn test_override_always_wins() {
        let config = config_with_urls(AppUrls {
            production: "https://prod.example".to_string(),
            staging: Some("https://staging.example".to_string()),
            development: Some("https://dev.example".to_string()),
        });
        let url = resolve_app_url(&config, Environment::Production, Some("https://override"));
        assert_eq!(url.as_deref(), Some("https://override"));
    }

    #[test]
    fn test_development_url_selected_on_localhost() {
        let config = config_with_urls(AppUrls {
            production: "https://prod.example".to_string(),
            staging: None,
            development: Some("https://dev.example".to_string()),
        });
        let url = resolve_app_url(&config, Environment::Development, None);
        assert_eq!(url.as_deref(), Some("https://dev.example"));
    }

    #[test]
    fn test_environment_falls_through_to_production() {
        let config = config_with_urls(AppUrls {
            production: "https://prod.example".to_string(),
            staging: None,
            development: None,
        });
        assert_eq!(
            resolve_app_url(&config, Environment::Development, None).as_deref(),
            Some("https://prod.example")
        );
        assert_eq!(
            resolve_app_url(&config, Environment::Staging, None).as_deref(),
            Some("https://prod.example")
        );
    }

    #[test]
    fn test_empty_production_url_means_unavailable() {
        let config = config_with_urls(AppUrls::default());
        assert_eq!(resolve_app_url(&config, Environment::Production, None), None);
    }

    #[test]
    fn test_override_var_name_convention() {
        assert_eq!(override_var_name("gift-cards"), "CHIMERA_GIFT_CARDS_URL");
        assert_eq!(override_var_name("statement"), "CHIMERA_STATEMENT_URL");
    }

    #[test]
    fn test_catalog_lookup() {
        assert!(app_config("gift-cards").is_some());
        assert!(app_config("unknown-app").is_none());
        assert_eq!(app_catalog().len(), 4);
    }

    #[test]
    fn test_card_reservation_has_terms_but_no_slides() {
        let config = app_config("card-reservation").unwrap();
        assert!(config.info_slides.is_empty());
        assert!(config.terms.is_some());
    }
}
