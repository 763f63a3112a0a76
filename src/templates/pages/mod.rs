pub mod home;
pub mod listing_detail;
pub mod login;
pub mod sell;

pub use home::home_page;
pub use listing_detail::{listing_detail_page, ListingDetailVm};
pub use login::login_page;
pub use sell::{sell_page, SellFormPrefill};
