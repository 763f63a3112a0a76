pub mod connection;
pub mod likes;
pub mod listings;
pub mod sessions;
pub mod users;

pub use connection::Database;
