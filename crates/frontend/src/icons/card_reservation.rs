use yew::prelude::*;

use super::IconProps;

#[function_component(CardReservationIcon)]
pub fn card_reservation_icon(props: &IconProps) -> Html {
    let size = props.size();
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width={size}
            height={size}
            viewBox="0 0 78 78"
            fill="none"
            role="img"
            aria-label="Card Reservation icon"
        >
            <circle cx="39" cy="39" r="37.5" fill="#391998" stroke="#6D4AEA" stroke-width="3" />
            // Debit card with magstripe and chip
            <rect x="18" y="27" width="42" height="26" rx="4" fill="white" fill-opacity="0.95" />
            <rect x="18" y="32" width="42" height="6" fill="#391998" fill-opacity="0.85" />
            <rect x="23" y="43" width="9" height="6" rx="1" fill="#F59E0B" />
            <rect x="44" y="45" width="12" height="3" rx="1.5" fill="#391998" fill-opacity="0.4" />
        </svg>
    }
}
