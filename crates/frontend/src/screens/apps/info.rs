//! Intro slide carousel shown before an app opens

use yew::prelude::*;

use chimera_core::apps::AppInfoSlide;

use crate::components::Header;

#[derive(Properties, Clone, PartialEq)]
pub struct AppInfoPageProps {
    pub app_name: AttrValue,
    pub slides: Vec<AppInfoSlide>,
    pub on_continue: Callback<()>,
    pub on_back: Callback<()>,
}

#[function_component(AppInfoPage)]
pub fn app_info_page(props: &AppInfoPageProps) -> Html {
    let current = use_state(|| 0usize);

    let Some(slide) = props.slides.get(*current) else {
        return html! {};
    };
    let is_last = *current + 1 == props.slides.len();

    let on_next = {
        let current = current.clone();
        let on_continue = props.on_continue.clone();
        Callback::from(move |_| {
            if is_last {
                on_continue.emit(());
            } else {
                current.set(*current + 1);
            }
        })
    };

    let on_prev = {
        let current = current.clone();
        Callback::from(move |_| {
            if *current > 0 {
                current.set(*current - 1);
            }
        })
    };

    html! {
        <>
            <Header text={props.app_name.clone()} on_back={props.on_back.clone()} />
            <div class="max-w-md mx-auto p-4 min-h-[400px] flex flex-col justify-between gap-8">
                <div class="flex flex-col items-center gap-6">
                    <div class="w-[200px] h-[200px] flex items-center justify-center">
                        <img
                            src={slide.image.clone()}
                            alt={slide.title.clone()}
                            class="max-w-full max-h-full object-contain"
                        />
                    </div>
                    <div class="flex flex-col items-center gap-3 text-center">
                        <h2 class="text-lg font-bold">{&slide.title}</h2>
                        <p class="text-gray-600 dark:text-gray-400 whitespace-pre-wrap">{&slide.description}</p>
                    </div>
                </div>

                <div class="flex flex-col gap-4">
                    if props.slides.len() > 1 {
                        <div class="flex justify-center gap-2">
                            { for props.slides.iter().enumerate().map(|(index, slide)| {
                                let class = if index == *current {
                                    "w-2 h-2 rounded-full bg-purple-600 transition-colors"
                                } else {
                                    "w-2 h-2 rounded-full bg-gray-300 dark:bg-gray-600 transition-colors"
                                };
                                html! { <div key={slide.title.clone()} {class}></div> }
                            }) }
                        </div>
                    }

                    <div class="flex gap-4">
                        if *current > 0 {
                            <button
                                onclick={on_prev}
                                class="flex-1 py-3 rounded-lg border border-gray-300 dark:border-gray-600 font-medium"
                            >
                                {"Back"}
                            </button>
                        }
                        <button
                            onclick={on_next}
                            class="flex-1 py-3 rounded-lg bg-purple-700 hover:bg-purple-600 text-white font-medium transition-colors"
                        >
                            { if is_last { "Continue" } else { "Next" } }
                        </button>
                    </div>
                </div>
            </div>
        </>
    }
}
