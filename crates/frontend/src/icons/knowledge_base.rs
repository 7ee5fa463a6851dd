use yew::prelude::*;

use super::IconProps;

#[function_component(KnowledgeBaseIcon)]
pub fn knowledge_base_icon(props: &IconProps) -> Html {
    let size = props.size();
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width={size}
            height={size}
            viewBox="0 0 78 78"
            fill="none"
            role="img"
            aria-label="Knowledge Base icon"
        >
            <circle cx="39" cy="39" r="37.5" fill="#0D9488" stroke="#2DD4BF" stroke-width="3" />
            // Open book
            <path d="M39 26c-5-4-12-4-16-2v30c4-2 11-2 16 2 5-4 12-4 16-2V24c-4-2-11-2-16 2z" fill="white" fill-opacity="0.95" />
            <path d="M39 26v30" stroke="#0D9488" stroke-width="2" />
        </svg>
    }
}
