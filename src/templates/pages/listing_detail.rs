// templates/pages/listing_detail.rs

use crate::domain::financing::FinancingQuote;
use crate::domain::hotness::HotStatus;
use crate::domain::like_state::LikeControl;
use crate::domain::listing::{ListingSummary, ListingWithUser};
use crate::templates::components::{
    contact_buttons, financing_calculator, gallery, hot_badge, like_button, listing_card,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ListingDetailVm<'a> {
    pub detail: &'a ListingWithUser,
    pub hot: HotStatus,
    pub like_control: LikeControl,
    pub can_delete: bool,
    pub own_listing: bool,
    pub signed_in: bool,
    pub quote: FinancingQuote,
    pub similar: &'a [ListingSummary],
}

pub fn listing_detail_page(vm: &ListingDetailVm<'_>) -> Markup {
    let listing = &vm.detail.listing;

    desktop_layout(
        &listing.title,
        vm.signed_in,
        html! {
            article class="listing-detail" {
                header class="listing-header" {
                    h1 { (listing.title) " " (hot_badge(vm.hot)) }
                    (like_button(listing.id, &vm.like_control, listing.likes_count, vm.own_listing))
                }

                (gallery(&listing.title, &vm.detail.image_urls))

                section class="listing-facts" {
                    p class="listing-price" { (listing.price) }
                    ul {
                        li { (listing.year) }
                        li { (listing.make) " " (listing.model) }
                        li { (listing.mileage_km) " km" }
                        @if !listing.city.is_empty() { li { (listing.city) } }
                    }
                    p class="listing-views" { (listing.views_count) " views" }
                }

                @if !listing.description.is_empty() {
                    section class="listing-description" {
                        h2 { "Description" }
                        p { (listing.description) }
                    }
                }

                section class="listing-seller" {
                    h2 { "Seller" }
                    p {
                        @if vm.detail.seller_name.is_empty() {
                            (vm.detail.seller_email)
                        } @else {
                            (vm.detail.seller_name)
                        }
                    }
                    (contact_buttons(&listing.phone, &listing.whatsapp, &listing.title))
                }

                (financing_calculator(listing.id, listing.price, &vm.quote))

                @if !vm.similar.is_empty() {
                    section class="similar-listings" {
                        h2 { "Similar cars" }
                        div class="listing-grid" {
                            @for similar in vm.similar {
                                (listing_card(similar))
                            }
                        }
                    }
                }

                @if vm.can_delete {
                    form method="post"
                         action={ "/listings/" (listing.id) "/delete" }
                         onsubmit="return confirm('Delete this listing?')" {
                        button type="submit" class="button-danger" { "Delete listing" }
                    }
                }
            }
        },
    )
}
