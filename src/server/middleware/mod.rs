//! Request guards shared by controllers.

pub mod auth;
