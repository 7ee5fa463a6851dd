//! Embedded app webview

use yew::prelude::*;

use crate::components::Header;

#[derive(Properties, Clone, PartialEq)]
pub struct AppWebViewProps {
    pub app_name: AttrValue,
    /// `None` when no URL is configured for this environment
    pub url: Option<String>,
    pub on_back: Callback<()>,
}

#[function_component(AppWebView)]
pub fn app_web_view(props: &AppWebViewProps) -> Html {
    let Some(url) = props.url.clone() else {
        return html! {
            <>
                <Header text={props.app_name.clone()} on_back={props.on_back.clone()} />
                <div class="min-h-[300px] flex flex-col items-center justify-center gap-2 p-8">
                    <p class="text-gray-500 dark:text-gray-400 text-center">{"This app is not yet available."}</p>
                    <p class="text-gray-400 dark:text-gray-500 text-sm text-center">{"Please check back later."}</p>
                </div>
            </>
        };
    };

    html! {
        <>
            <Header text={props.app_name.clone()} on_back={props.on_back.clone()} />
            <div class="p-4">
                <iframe
                    src={url}
                    title={props.app_name.clone()}
                    allow="clipboard-write; clipboard-read"
                    class="w-full h-[calc(100vh-150px)] border-0 rounded-lg"
                />
            </div>
        </>
    }
}
