pub mod marketing;
pub mod user;
