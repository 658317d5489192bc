pub mod dtos;
pub mod extractors;
pub mod gate;
pub mod handlers;
pub mod router;
