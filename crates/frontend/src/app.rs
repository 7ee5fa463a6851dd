//! Root component: navigation and deep-link entry

use yew::prelude::*;

use chimera_core::apps::app_config;
use chimera_core::deeplink::{parse_app_link, parse_kyc_link};
use chimera_core::types::KycAuthParams;

use crate::screens::apps::AppsScreen;
use crate::screens::apps::flow::AppFlow;
use crate::screens::verification::Verification;
use crate::utils::{clear_deep_link_from_url, current_fragment};

/// Screens of the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Apps,
    AppFlow(String),
    Verification,
}

/// Navigation context: current page plus the callback that changes it.
#[derive(Clone, PartialEq)]
pub struct Navigator {
    pub page: Page,
    pub navigate: Callback<Page>,
}

/// KYC magic-link credentials in flight between the deep-link entry and
/// the verification screen. Cleared once consumed.
#[derive(Clone, PartialEq)]
pub struct KycFlow {
    pub auth_params: Option<KycAuthParams>,
    pub set_auth_params: Callback<Option<KycAuthParams>>,
}

/// Hook to use the navigation context
#[hook]
pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().expect("Navigator context not found")
}

/// Hook to use the KYC flow context
#[hook]
pub fn use_kyc_flow() -> KycFlow {
    use_context::<KycFlow>().expect("KycFlow context not found")
}

/// Initial page and magic-link credentials from the URL fragment.
fn entry_from_fragment(fragment: &str) -> (Page, Option<KycAuthParams>) {
    // The app+ marker is unambiguous, so it is checked before the looser
    // KYC link shapes
    if let Some(link) = parse_app_link(fragment) {
        if app_config(&link.app_id).is_some() {
            return (Page::AppFlow(link.app_id), None);
        }
        tracing::warn!("deep link to unknown app {}", link.app_id);
        return (Page::Apps, None);
    }
    if let Some(params) = parse_kyc_link(fragment) {
        return (Page::Verification, Some(params));
    }
    (Page::Apps, None)
}

#[function_component(App)]
pub fn app() -> Html {
    let entry = use_state(|| entry_from_fragment(&current_fragment()));
    let page = use_state(|| entry.0.clone());
    let auth_params = use_state(|| entry.1.clone());

    // The deep link is consumed; drop it from the address bar
    use_effect_with((), |_| {
        clear_deep_link_from_url();
    });

    let navigate = {
        let page = page.clone();
        Callback::from(move |target: Page| page.set(target))
    };
    let set_auth_params = {
        let auth_params = auth_params.clone();
        Callback::from(move |params: Option<KycAuthParams>| auth_params.set(params))
    };

    let navigator = Navigator {
        page: (*page).clone(),
        navigate,
    };
    let kyc_flow = KycFlow {
        auth_params: (*auth_params).clone(),
        set_auth_params,
    };

    let content = match &*page {
        Page::Apps => html! { <AppsScreen /> },
        Page::AppFlow(app_id) => html! { <AppFlow app_id={app_id.clone()} /> },
        Page::Verification => html! { <Verification /> },
    };

    html! {
        <ContextProvider<Navigator> context={navigator}>
            <ContextProvider<KycFlow> context={kyc_flow}>
                <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100">
                    {content}
                </div>
            </ContextProvider<KycFlow>>
        </ContextProvider<Navigator>>
    }
}
