use crate::domain::listing::ListingSummary;
use maud::{html, Markup};

pub fn listing_card(listing: &ListingSummary) -> Markup {
    html! {
        a class="listing-card" href={ "/listings/" (listing.id) } {
            h3 { (listing.title) }
            p class="card-meta" {
                (listing.year) " · " (listing.make) " " (listing.model)
                @if !listing.city.is_empty() { " · " (listing.city) }
            }
            p class="card-price" { (listing.price) }
            p class="card-stats" {
                (listing.views_count) " views · " (listing.likes_count) " likes"
            }
        }
    }
}
