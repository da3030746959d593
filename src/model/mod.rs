//! Wire DTOs serialized to and from HTTP clients.

pub mod api;
pub mod project;
pub mod timeline;
