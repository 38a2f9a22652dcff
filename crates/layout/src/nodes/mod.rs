pub mod container;
pub mod image;
pub mod text;

pub use self::container::{Container, Direction};
pub use self::image::ImageBlock;
pub use self::text::TextBlock;
