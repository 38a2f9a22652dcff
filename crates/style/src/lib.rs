pub mod font;
pub mod style;
pub mod text;

pub use font::FontWeight;
pub use style::Style;
pub use text::TextAlign;
