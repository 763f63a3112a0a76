use maud::{html, Markup};

/// Image strip for the detail page. The first image is the lead photo,
/// the rest render as thumbnails.
pub fn gallery(title: &str, image_urls: &[String]) -> Markup {
    html! {
        div class="gallery" {
            @if let Some(lead) = image_urls.first() {
                img class="gallery-lead" src=(lead) alt=(title);
            } @else {
                div class="gallery-placeholder" { "No photos" }
            }
            @if image_urls.len() > 1 {
                div class="gallery-thumbs" {
                    @for url in &image_urls[1..] {
                        img src=(url) alt=(title);
                    }
                }
            }
        }
    }
}
