//! Mini-apps launcher

pub mod flow;
pub mod info;
pub mod terms;
pub mod webview;

use yew::prelude::*;

use chimera_core::apps::{AppConfig, app_catalog};

use crate::app::{Page, use_navigator};
use crate::components::Header;
use crate::icons::{KnowledgeBaseIcon, app_icon};

#[derive(Clone, Copy, PartialEq)]
enum TagKind {
    New,
    ComingSoon,
}

#[derive(Properties, Clone, PartialEq)]
struct TagProps {
    kind: TagKind,
}

#[function_component(Tag)]
fn tag(props: &TagProps) -> Html {
    match props.kind {
        TagKind::New => html! {
            <span class="inline-flex items-center gap-1 px-2 py-0.5 rounded text-xs font-mono uppercase bg-purple-700 text-white">
                <svg width="6" height="6" viewBox="0 0 6 6" fill="none" aria-hidden="true">
                    <circle cx="3" cy="3" r="3" fill="white" />
                </svg>
                {"new"}
            </span>
        },
        TagKind::ComingSoon => html! {
            <span class="px-2 py-0.5 rounded text-xs font-mono uppercase bg-green-500/10 text-green-600 dark:text-green-400 whitespace-nowrap">
                {"coming\u{a0}soon"}
            </span>
        },
    }
}

#[derive(Properties, Clone, PartialEq)]
struct AppCardProps {
    config: AppConfig,
}

#[function_component(AppCard)]
fn app_card(props: &AppCardProps) -> Html {
    let navigator = use_navigator();
    let config = &props.config;

    let onclick = {
        let navigate = navigator.navigate.clone();
        let app_id = config.id.clone();
        Callback::from(move |_| navigate.emit(Page::AppFlow(app_id.clone())))
    };

    let test_id = format!("app-{}", config.id);
    let kind = if config.live {
        TagKind::New
    } else {
        TagKind::ComingSoon
    };

    html! {
        <button
            {onclick}
            data-testid={test_id}
            class="w-full text-left p-3 rounded-xl border border-gray-200 dark:border-gray-700 shadow-sm hover:shadow-md hover:border-purple-400 transition-all"
        >
            <div class="flex gap-3">
                {app_icon(&config.icon, false)}
                <div class="flex-1 min-w-0">
                    <div class="flex items-start justify-between gap-2">
                        <span class="font-bold">{&config.name}</span>
                        <Tag {kind} />
                    </div>
                    <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">{&config.description}</p>
                </div>
            </div>
        </button>
    }
}

#[function_component(AppsScreen)]
pub fn apps_screen() -> Html {
    let navigator = use_navigator();

    let on_verification = {
        let navigate = navigator.navigate.clone();
        Callback::from(move |_| navigate.emit(Page::Verification))
    };

    html! {
        <>
            <Header text="Apps" />
            <div class="max-w-md mx-auto p-4 flex flex-col gap-3">
                { for app_catalog().iter().map(|config| html! {
                    <AppCard key={config.id.clone()} config={config.clone()} />
                }) }

                <h2 class="mt-6 text-sm font-semibold uppercase text-gray-500 dark:text-gray-400">{"Account"}</h2>
                <button
                    onclick={on_verification}
                    data-testid="app-verification"
                    class="w-full text-left p-3 rounded-xl border border-gray-200 dark:border-gray-700 shadow-sm hover:shadow-md hover:border-purple-400 transition-all"
                >
                    <div class="flex items-center gap-3">
                        <KnowledgeBaseIcon />
                        <div>
                            <span class="font-bold">{"Identity Verification"}</span>
                            <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                                {"Verify your identity to unlock all features"}
                            </p>
                        </div>
                    </div>
                </button>
            </div>
        </>
    }
}
