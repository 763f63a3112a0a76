// templates/pages/home.rs

use crate::domain::listing::ListingSummary;
use crate::templates::{components::listing_card, desktop_layout};
use maud::{html, Markup};

pub fn home_page(listings: &[ListingSummary], signed_in: bool) -> Markup {
    desktop_layout(
        "Browse cars",
        signed_in,
        html! {
            h1 { "Latest listings" }

            @if listings.is_empty() {
                p { "Nothing for sale yet. " a href="/sell" { "List the first car" } "." }
            } @else {
                div class="listing-grid" {
                    @for listing in listings {
                        (listing_card(listing))
                    }
                }
            }
        },
    )
}
