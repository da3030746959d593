pub use super::image::Entity as Image;
pub use super::project::Entity as Project;
pub use super::timeline::Entity as Timeline;
pub use super::video::Entity as Video;
