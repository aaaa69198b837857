//! Top-level route views.

pub mod about;
pub mod analyze;
pub mod dashboard;
pub mod history;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod verify;
