//! Per-app flow: info slides, terms, webview

use yew::prelude::*;

use chimera_core::apps::{app_config, resolve_app_url};
use chimera_core::flow::AppStep;

use crate::app::{Page, use_navigator};
use crate::client::environment;
use crate::components::Header;
use crate::config::app_url_override;
use crate::screens::apps::info::AppInfoPage;
use crate::screens::apps::terms::AppTermsPage;
use crate::screens::apps::webview::AppWebView;

#[derive(Properties, Clone, PartialEq)]
pub struct AppFlowProps {
    pub app_id: AttrValue,
}

#[function_component(AppFlow)]
pub fn app_flow(props: &AppFlowProps) -> Html {
    let navigator = use_navigator();
    let config = app_config(&props.app_id);

    // Hooks run unconditionally; the unknown-app bailout comes after
    let step = use_state(|| config.map_or(AppStep::Webview, AppStep::initial));

    let Some(config) = config else {
        return html! {
            <>
                <Header text="Apps" on_back={navigator.navigate.reform(|_| Page::Apps)} />
                <div class="p-8 text-center text-gray-500">{"This app does not exist."}</div>
            </>
        };
    };
    let app_url = resolve_app_url(config, environment(), app_url_override(&config.id));

    let exit = navigator.navigate.reform(|_| Page::Apps);

    // Back is step-sensitive: terms may return to the intro, the webview
    // always leaves the flow
    let on_back = {
        let step = step.clone();
        let exit = exit.clone();
        Callback::from(move |_| match step.back(config) {
            Some(previous) => step.set(previous),
            None => exit.emit(()),
        })
    };

    let on_continue = {
        let step = step.clone();
        Callback::from(move |_| {
            let next = step.advance(config);
            tracing::debug!("app flow advancing to {next:?}");
            step.set(next);
        })
    };

    match *step {
        AppStep::Info => html! {
            <AppInfoPage
                app_name={config.name.clone()}
                slides={config.info_slides.clone()}
                on_continue={on_continue}
                on_back={on_back}
            />
        },
        AppStep::Terms => match config.terms.clone() {
            Some(terms) => html! {
                <AppTermsPage
                    app_name={config.name.clone()}
                    terms={terms}
                    on_accept={on_continue}
                    on_back={on_back}
                />
            },
            // No terms configured: fall through to the webview
            None => html! {
                <AppWebView
                    app_name={config.name.clone()}
                    url={app_url.clone()}
                    on_back={exit.clone()}
                />
            },
        },
        AppStep::Webview => html! {
            <AppWebView
                app_name={config.name.clone()}
                url={app_url}
                on_back={on_back}
            />
        },
    }
}
