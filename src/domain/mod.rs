pub mod financing;
pub mod hotness;
pub mod like_state;
pub mod listing;
