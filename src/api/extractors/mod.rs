pub mod admin;
pub mod payload;
