pub mod contact;
pub mod financing;
pub mod gallery;
pub mod hot_badge;
pub mod like_button;
pub mod listing_card;

pub use contact::contact_buttons;
pub use financing::{financing_calculator, financing_quote_fragment};
pub use gallery::gallery;
pub use hot_badge::hot_badge;
pub use like_button::like_button;
pub use listing_card::listing_card;
