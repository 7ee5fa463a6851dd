use yew::prelude::*;

use super::IconProps;

#[function_component(ReferralIcon)]
pub fn referral_icon(props: &IconProps) -> Html {
    let size = props.size();
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width={size}
            height={size}
            viewBox="0 0 78 78"
            fill="none"
            role="img"
            aria-label="Referral icon"
        >
            <circle cx="39" cy="39" r="37.5" fill="#7C3AED" stroke="#A78BFA" stroke-width="3" />
            // Three linked people
            <circle cx="39" cy="30" r="7" fill="white" fill-opacity="0.95" />
            <path d="M27 52c0-6.6 5.4-12 12-12s12 5.4 12 12" stroke="white" stroke-width="4" stroke-linecap="round" fill="none" />
            <circle cx="22" cy="36" r="5" fill="white" fill-opacity="0.6" />
            <circle cx="56" cy="36" r="5" fill="white" fill-opacity="0.6" />
        </svg>
    }
}
