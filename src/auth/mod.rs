pub mod token;
pub mod viewer;
