use yew::prelude::*;

use super::IconProps;

#[function_component(GiftCardsIcon)]
pub fn gift_cards_icon(props: &IconProps) -> Html {
    let size = props.size();
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width={size}
            height={size}
            viewBox="0 0 78 78"
            fill="none"
            role="img"
            aria-label="Gift Cards icon"
        >
            <circle cx="39" cy="39" r="37.5" fill="#EC4899" stroke="#F472B6" stroke-width="3" />
            // Gift box with ribbon and bow
            <rect x="22" y="38" width="34" height="22" rx="3" fill="white" fill-opacity="0.9" />
            <rect x="20" y="32" width="38" height="8" rx="2" fill="white" fill-opacity="0.95" />
            <rect x="36" y="32" width="6" height="28" fill="#EC4899" fill-opacity="0.8" />
            <ellipse cx="39" cy="28" rx="8" ry="6" fill="#EC4899" />
            <ellipse cx="39" cy="28" rx="3" ry="2" fill="white" fill-opacity="0.5" />
        </svg>
    }
}
