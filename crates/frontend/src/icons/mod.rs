//! Inline-SVG app icons

pub mod card_reservation;
pub mod gift_cards;
pub mod knowledge_base;
pub mod referral;
pub mod statement;

pub use card_reservation::CardReservationIcon;
pub use gift_cards::GiftCardsIcon;
pub use knowledge_base::KnowledgeBaseIcon;
pub use referral::ReferralIcon;
pub use statement::StatementIcon;

use yew::prelude::*;

/// Shared props: icons render at 55px, or 78px in `big` mode.
#[derive(Properties, Clone, PartialEq)]
pub struct IconProps {
    #[prop_or_default]
    pub big: bool,
}

impl IconProps {
    pub fn size(&self) -> &'static str {
        if self.big { "78" } else { "55" }
    }
}

/// Icon for a catalog entry, by its configured icon name.
pub fn app_icon(name: &str, big: bool) -> Html {
    match name {
        "statement" => html! { <StatementIcon {big} /> },
        "referral" => html! { <ReferralIcon {big} /> },
        "gift-cards" => html! { <GiftCardsIcon {big} /> },
        "card-reservation" => html! { <CardReservationIcon {big} /> },
        _ => html! { <KnowledgeBaseIcon {big} /> },
    }
}
