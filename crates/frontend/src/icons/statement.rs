use yew::prelude::*;

use super::IconProps;

#[function_component(StatementIcon)]
pub fn statement_icon(props: &IconProps) -> Html {
    let size = props.size();
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width={size}
            height={size}
            viewBox="0 0 78 78"
            fill="none"
            role="img"
            aria-label="Statement icon"
        >
            <circle cx="39" cy="39" r="37.5" fill="#2563EB" stroke="#60A5FA" stroke-width="3" />
            <rect x="24" y="20" width="30" height="38" rx="3" fill="white" fill-opacity="0.95" />
            <rect x="29" y="27" width="20" height="3" rx="1.5" fill="#2563EB" fill-opacity="0.8" />
            <rect x="29" y="34" width="20" height="3" rx="1.5" fill="#2563EB" fill-opacity="0.5" />
            <rect x="29" y="41" width="14" height="3" rx="1.5" fill="#2563EB" fill-opacity="0.5" />
            <rect x="29" y="48" width="10" height="3" rx="1.5" fill="#2563EB" fill-opacity="0.3" />
        </svg>
    }
}
