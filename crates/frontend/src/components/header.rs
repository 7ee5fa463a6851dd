//! Screen header with optional back navigation

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct HeaderProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <div class="flex items-center gap-3 p-4 border-b border-gray-200 dark:border-gray-700">
            if let Some(on_back) = &props.on_back {
                <button
                    onclick={on_back.reform(|_| ())}
                    aria-label="Back"
                    class="p-2 -ml-2 text-gray-600 dark:text-gray-300 hover:text-gray-900 dark:hover:text-gray-100 rounded-lg transition-colors"
                >
                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7"></path>
                    </svg>
                </button>
            }
            <h1 class="text-xl font-bold text-gray-900 dark:text-gray-100">{&props.text}</h1>
        </div>
    }
}
