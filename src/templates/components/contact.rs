use maud::{html, Markup};

/// WhatsApp and phone call-to-actions for a listing.
pub fn contact_buttons(phone: &str, whatsapp: &str, listing_title: &str) -> Markup {
    let wa_number: String = whatsapp.chars().filter(|c| c.is_ascii_digit()).collect();

    html! {
        div class="contact-buttons" {
            @if !wa_number.is_empty() {
                a class="button button-whatsapp"
                  href={ "https://wa.me/" (wa_number) "?text=Hi,%20I'm%20interested%20in%20" (urlencode(listing_title)) }
                  target="_blank" rel="noopener" {
                    "WhatsApp"
                }
            }
            @if !phone.is_empty() {
                a class="button button-call" href={ "tel:" (phone) } { "Call " (phone) }
            }
        }
    }
}

fn urlencode(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}
