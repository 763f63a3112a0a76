// templates/pages/sell.rs

use crate::templates::desktop_layout;
use maud::{html, Markup};

/// The listing creation form. Field errors come back from the handler as
/// plain strings; submitted values are echoed so the user never retypes a
/// whole form over one bad field.
pub fn sell_page(errors: &[String], prefill: &SellFormPrefill) -> Markup {
    desktop_layout(
        "Sell your car",
        true,
        html! {
            h1 { "Sell your car" }

            @if !errors.is_empty() {
                ul class="form-errors" {
                    @for error in errors {
                        li { (error) }
                    }
                }
            }

            form method="post" action="/sell" class="sell-form" {
                label { "Title"
                    input type="text" name="title" required value=(prefill.title);
                }
                label { "Make"
                    input type="text" name="make" required value=(prefill.make);
                }
                label { "Model"
                    input type="text" name="model" required value=(prefill.model);
                }
                label { "Year"
                    input type="number" name="year" required value=(prefill.year);
                }
                label { "Mileage (km)"
                    input type="number" name="mileage_km" min="0" value=(prefill.mileage_km);
                }
                label { "Price"
                    input type="number" name="price" min="1" required value=(prefill.price);
                }
                label { "City"
                    input type="text" name="city" value=(prefill.city);
                }
                label { "Phone"
                    input type="tel" name="phone" value=(prefill.phone);
                }
                label { "WhatsApp"
                    input type="tel" name="whatsapp" value=(prefill.whatsapp);
                }
                label { "Description"
                    textarea name="description" rows="6" { (prefill.description) }
                }
                label { "Photo URLs (one per line)"
                    textarea name="image_urls" rows="4" { (prefill.image_urls) }
                }
                button type="submit" { "Publish listing" }
            }
        },
    )
}

#[derive(Debug, Default)]
pub struct SellFormPrefill {
    pub title: String,
    pub make: String,
    pub model: String,
    pub year: String,
    pub mileage_km: String,
    pub price: String,
    pub city: String,
    pub phone: String,
    pub whatsapp: String,
    pub description: String,
    pub image_urls: String,
}
