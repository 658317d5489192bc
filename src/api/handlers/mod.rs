pub mod auth;
pub mod health;
pub mod invitations;
pub mod pages;
pub mod rsvp;
pub mod wishes;
