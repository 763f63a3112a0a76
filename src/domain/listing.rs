// src/domain/listing.rs
use chrono::NaiveDateTime;

/// A full listing row, as stored.
#[derive(Debug, Clone)]
pub struct Listing {
    pub id: i64,
    pub user_id: i64,

    pub title: String,
    pub make: String,
    pub model: String,
    pub year: i64,
    pub mileage_km: i64,
    pub price: i64,

    pub description: String,
    pub city: String,
    pub phone: String,
    pub whatsapp: String,

    pub views_count: i64,
    pub likes_count: i64,
    pub created_at: NaiveDateTime,
}

/// Detail-page view: the listing joined with its seller and gallery.
#[derive(Debug, Clone)]
pub struct ListingWithUser {
    pub listing: Listing,
    pub seller_email: String,
    pub seller_name: String,
    pub image_urls: Vec<String>,
}

/// Card-sized projection for the index and the "similar" strip.
#[derive(Debug, Clone)]
pub struct ListingSummary {
    pub id: i64,
    pub title: String,
    pub make: String,
    pub model: String,
    pub year: i64,
    pub price: i64,
    pub city: String,
    pub views_count: i64,
    pub likes_count: i64,
}

/// Validated input for the sell form.
#[derive(Debug, Clone)]
pub struct NewListing {
    pub title: String,
    pub make: String,
    pub model: String,
    pub year: i64,
    pub mileage_km: i64,
    pub price: i64,
    pub description: String,
    pub city: String,
    pub phone: String,
    pub whatsapp: String,
    pub image_urls: Vec<String>,
}
