//! Loading spinner component

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="w-9 h-9 border-4 border-purple-100 dark:border-gray-700 border-t-purple-600 dark:border-t-purple-400 rounded-full animate-spin"></div>
            if let Some(text) = &props.text {
                <p class="mt-4 text-gray-600 dark:text-gray-400 text-sm">{text}</p>
            }
        </div>
    }
}
