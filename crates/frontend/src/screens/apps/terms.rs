//! Terms acceptance gate

use yew::prelude::*;

use chimera_core::apps::AppTerms;

use crate::components::Header;

#[derive(Properties, Clone, PartialEq)]
pub struct AppTermsPageProps {
    pub app_name: AttrValue,
    pub terms: AppTerms,
    pub on_accept: Callback<()>,
    pub on_back: Callback<()>,
}

#[function_component(AppTermsPage)]
pub fn app_terms_page(props: &AppTermsPageProps) -> Html {
    let accepted = use_state(|| false);

    let on_toggle = {
        let accepted = accepted.clone();
        Callback::from(move |_| accepted.set(!*accepted))
    };

    let on_accept = {
        let accepted = accepted.clone();
        let accept = props.on_accept.clone();
        Callback::from(move |_| {
            if *accepted {
                accept.emit(());
            }
        })
    };

    html! {
        <>
            <Header text={props.terms.title.clone()} on_back={props.on_back.clone()} />
            <div class="max-w-md mx-auto p-4 min-h-[400px] flex flex-col justify-between gap-6">
                <div class="flex flex-col gap-4">
                    <h2 class="text-lg font-bold">{&props.app_name}</h2>
                    <div class="max-h-[300px] overflow-y-auto p-4 rounded-lg bg-gray-50 dark:bg-gray-800 border border-gray-200 dark:border-gray-700">
                        <p class="text-gray-600 dark:text-gray-400 whitespace-pre-wrap">{&props.terms.content}</p>
                    </div>
                </div>

                <div class="flex flex-col gap-4">
                    <label class="flex items-center gap-3 cursor-pointer">
                        <input
                            type="checkbox"
                            checked={*accepted}
                            onchange={on_toggle}
                            class="w-5 h-5 accent-purple-700"
                        />
                        <span class="text-sm">{&props.terms.checkbox_label}</span>
                    </label>

                    <button
                        onclick={on_accept}
                        disabled={!*accepted}
                        class="py-3 rounded-lg bg-purple-700 hover:bg-purple-600 disabled:bg-gray-300 dark:disabled:bg-gray-700 disabled:cursor-not-allowed text-white font-medium transition-colors"
                    >
                        {"Accept & Continue"}
                    </button>
                </div>
            </div>
        </>
    }
}
