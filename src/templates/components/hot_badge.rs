use crate::domain::hotness::HotStatus;
use maud::{html, Markup};

pub fn hot_badge(status: HotStatus) -> Markup {
    html! {
        @if let Some(label) = status.label() {
            span class={ "badge badge-" (match status {
                HotStatus::SuperHot => "super-hot",
                _ => "hot",
            }) } { (label) }
        }
    }
}
