//! SeaORM entities for the portfolio schema.
//!
//! `project` and `timeline` are the aggregate roots. `image` and `video` rows are owned by a
//! project and removed with it through `ON DELETE CASCADE` foreign keys.

pub mod prelude;

pub mod image;
pub mod project;
pub mod sea_orm_active_enums;
pub mod timeline;
pub mod video;
