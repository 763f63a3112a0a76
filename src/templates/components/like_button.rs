use crate::domain::like_state::LikeControl;
use maud::{html, Markup};

/// The heart toggle. Initial state comes from server truth via the
/// reconciliation in `domain::like_state`; /static/like.js drives the
/// optimistic round trip and disables the button while a request is
/// in flight.
pub fn like_button(listing_id: i64, control: &LikeControl, likes_count: i64, own_listing: bool) -> Markup {
    let liked = control.liked();

    html! {
        @if own_listing {
            span class="like-button like-button-disabled" title="You can't like your own listing" {
                "♥ " span class="like-count" { (likes_count) }
            }
        } @else {
            button class="like-button"
                   data-listing-id=(listing_id)
                   data-liked=(liked)
                   disabled[control.is_pending()]
                   aria-pressed=(liked) {
                @if liked { "♥ " } @else { "♡ " }
                span class="like-count" { (likes_count) }
            }
        }
    }
}
