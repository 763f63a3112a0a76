mod financing_tests;
mod like_tests;
mod listing_tests;
mod sell_tests;
