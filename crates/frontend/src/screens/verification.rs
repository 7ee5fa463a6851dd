//! Identity verification screen
//!
//! Entry decides between three paths: magic-link credentials from a deep
//! link are confirmed and the resulting status shown; a returning user
//! with stored credentials gets their current status; everyone else gets
//! the provider's webview to start the flow. The webview reports back via
//! cross-document messages.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::MessageEvent;
use yew::prelude::*;

use chimera_core::types::KycStatus;
use chimera_kyc::endpoints::is_trusted_origin;
use chimera_kyc::types::ProviderMessage;

use crate::app::{Page, use_kyc_flow, use_navigator};
use crate::client::{kyc_endpoints, kyc_session};
use crate::components::{Header, LoadingSpinner};

#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewState {
    Loading,
    Webview,
    Status,
    Error,
}

#[function_component(Verification)]
pub fn verification() -> Html {
    let navigator = use_navigator();
    let kyc_flow = use_kyc_flow();

    let view = use_state(|| ViewState::Loading);
    let status = use_state(|| KycStatus::NotStarted);
    let status_message = use_state(String::new);
    let webview_url = use_state(String::new);
    let error = use_state(String::new);

    // Decide what to show, once, from the state we arrived with
    {
        let view = view.clone();
        let status = status.clone();
        let status_message = status_message.clone();
        let webview_url = webview_url.clone();
        let error = error.clone();
        let auth_params = kyc_flow.auth_params.clone();
        let set_auth_params = kyc_flow.set_auth_params.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let session = match kyc_session() {
                    Ok(session) => session,
                    Err(err) => {
                        tracing::error!("failed to initialize KYC session: {err}");
                        error.set("Failed to initialize verification. Please try again.".to_string());
                        view.set(ViewState::Error);
                        return;
                    }
                };

                if let Some(params) = auth_params {
                    match session.confirm_magic_link(&params).await {
                        Ok(tokens) => {
                            // One-time credentials, consumed
                            set_auth_params.emit(None);
                            let report = session.status(Some(&tokens.access_token)).await;
                            status.set(report.status);
                            status_message.set(report.message.unwrap_or_default());
                            view.set(ViewState::Status);
                        }
                        Err(err) => {
                            tracing::error!("magic link confirmation failed: {err}");
                            error.set(
                                "Failed to confirm authentication. Please try again.".to_string(),
                            );
                            view.set(ViewState::Error);
                        }
                    }
                } else if session.has_completed_kyc_once() {
                    let report = session.status(None).await;
                    status.set(report.status);
                    status_message.set(report.message.unwrap_or_default());
                    view.set(ViewState::Status);
                } else {
                    webview_url.set(kyc_endpoints().webview_url(None));
                    view.set(ViewState::Webview);
                }
            });
        });
    }

    // Listen for messages posted by the provider webview
    {
        let view = view.clone();
        let status = status.clone();

        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "message", move |event| {
                    let Some(event) = event.dyn_ref::<MessageEvent>() else {
                        return;
                    };
                    if !is_trusted_origin(&event.origin()) {
                        return;
                    }
                    let Ok(message) =
                        serde_wasm_bindgen::from_value::<ProviderMessage>(event.data())
                    else {
                        return;
                    };
                    let Ok(session) = kyc_session() else {
                        return;
                    };
                    if let Some(surfaced) = session.handle_message(message) {
                        status.set(surfaced);
                        if matches!(
                            surfaced,
                            KycStatus::Confirmed | KycStatus::Pending | KycStatus::Rejected
                        ) {
                            view.set(ViewState::Status);
                        }
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_back = navigator.navigate.reform(|_| Page::Apps);

    let on_retry = {
        let view = view.clone();
        let webview_url = webview_url.clone();
        Callback::from(move |_| {
            webview_url.set(kyc_endpoints().webview_url(None));
            view.set(ViewState::Webview);
        })
    };

    let body = match *view {
        ViewState::Loading => html! { <LoadingSpinner /> },
        ViewState::Error => html! {
            <div class="max-w-md mx-auto p-4">
                <div class="p-4 rounded-lg bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 text-red-700 dark:text-red-300">
                    {(*error).clone()}
                </div>
            </div>
        },
        ViewState::Status => html! {
            <StatusView
                status={*status}
                message={(*status_message).clone()}
                on_retry={on_retry}
            />
        },
        ViewState::Webview => html! {
            <div class="p-4">
                <iframe
                    src={(*webview_url).clone()}
                    title="KYC Verification"
                    allow="camera; clipboard-write; clipboard-read"
                    class="w-full h-[calc(100vh-100px)] border-0 rounded-lg"
                />
            </div>
        },
    };

    html! {
        <>
            <Header text="KYC - Verification" on_back={on_back} />
            {body}
        </>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct StatusViewProps {
    status: KycStatus,
    message: String,
    on_retry: Callback<()>,
}

#[function_component(StatusView)]
fn status_view(props: &StatusViewProps) -> Html {
    let message = (!props.message.is_empty()).then(|| {
        html! {
            <p class="mt-2 text-sm text-gray-600 dark:text-gray-400">{props.message.clone()}</p>
        }
    });

    match props.status {
        KycStatus::Confirmed => html! {
            <div class="max-w-md mx-auto p-8 text-center">
                <svg class="w-16 h-16 mx-auto mb-4 text-green-500" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"></path>
                </svg>
                <p class="font-bold">{"Your identity has been verified!"}</p>
                <p class="text-gray-600 dark:text-gray-400">{"You have full access to all features."}</p>
                {message}
            </div>
        },
        KycStatus::Pending => html! {
            <div class="max-w-md mx-auto p-8 text-center">
                <div class="text-5xl mb-4">{"\u{23f3}"}</div>
                <p class="font-bold">{"Verification in Progress"}</p>
                <p class="text-gray-600 dark:text-gray-400">
                    {"Your documents are being reviewed. This usually takes 1-2 business days."}
                </p>
                {message}
            </div>
        },
        KycStatus::Rejected => html! {
            <div class="max-w-md mx-auto p-8 text-center">
                <div class="text-5xl mb-4">{"\u{274c}"}</div>
                <p class="font-bold">{"Verification Unsuccessful"}</p>
                <p class="text-gray-600 dark:text-gray-400">
                    {"Unfortunately, we could not verify your identity. Please try again with valid documents."}
                </p>
                {message}
                <button
                    onclick={props.on_retry.reform(|_| ())}
                    class="mt-6 px-6 py-3 rounded-lg bg-purple-700 hover:bg-purple-600 text-white transition-colors"
                >
                    {"Try Again"}
                </button>
            </div>
        },
        KycStatus::Expired => html! {
            <div class="max-w-md mx-auto p-8 text-center">
                <p class="font-bold">{"Your verification session has expired."}</p>
                {message}
                <button
                    onclick={props.on_retry.reform(|_| ())}
                    class="mt-6 px-6 py-3 rounded-lg bg-purple-700 hover:bg-purple-600 text-white transition-colors"
                >
                    {"Start Again"}
                </button>
            </div>
        },
        KycStatus::NotStarted => html! {
            <div class="max-w-md mx-auto p-8 text-center">
                <p class="font-bold">{"You haven't verified your identity yet."}</p>
                {message}
                <button
                    onclick={props.on_retry.reform(|_| ())}
                    class="mt-6 px-6 py-3 rounded-lg bg-purple-700 hover:bg-purple-600 text-white transition-colors"
                >
                    {"Start Verification"}
                </button>
            </div>
        },
    }
}
