/// Average glyph advance as a fraction of the font size.
///
/// A single factor is used for every script; CJK and Latin text are not
/// distinguished.
pub const AVG_CHAR_WIDTH_FACTOR: f64 = 0.7;

/// A block of text whose height is estimated from its content.
///
/// The block is always `max_width` wide. Its height is
/// `lines × font_size × line_height`, where `lines` is the estimated text
/// width divided by `max_width`, rounded up. Empty content still occupies
/// one line.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    content: String,
    font_size: u32,
    max_width: f64,
    line_height: f64,
}

impl TextBlock {
    pub const DEFAULT_FONT_SIZE: u32 = 16;
    pub const DEFAULT_MAX_WIDTH: f64 = 400.0;
    pub const DEFAULT_LINE_HEIGHT: f64 = 1.5;

    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font_size: Self::DEFAULT_FONT_SIZE,
            max_width: Self::DEFAULT_MAX_WIDTH,
            line_height: Self::DEFAULT_LINE_HEIGHT,
        }
    }

    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = max_width;
        self
    }

    /// Line height as a multiple of the font size.
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn max_width(&self) -> f64 {
        self.max_width
    }

    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    /// Estimated number of lines needed to render the content.
    ///
    /// A non-positive `max_width` fits no glyph on a line, so every
    /// character is counted as its own line.
    pub fn line_count(&self) -> f64 {
        let char_count = self.content.chars().count();
        if char_count == 0 {
            return 1.0;
        }
        if self.max_width <= 0.0 {
            return char_count as f64;
        }

        let avg_char_width = f64::from(self.font_size) * AVG_CHAR_WIDTH_FACTOR;
        let total_width = char_count as f64 * avg_char_width;
        (total_width / self.max_width).ceil()
    }

    pub fn calculate_height(&self) -> f64 {
        self.line_count() * f64::from(self.font_size) * self.line_height
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.content = content;
    }
}
