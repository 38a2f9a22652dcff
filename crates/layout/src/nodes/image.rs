use posterflow_types::geometry::Size;

/// An image reference laid out at an explicit size.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBlock {
    src: String,
    maintain_aspect_ratio: bool,
}

impl ImageBlock {
    /// `src` is a URL or an embedded data reference.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            maintain_aspect_ratio: true,
        }
    }

    pub fn with_aspect_ratio(mut self, maintain: bool) -> Self {
        self.maintain_aspect_ratio = maintain;
        self
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn maintains_aspect_ratio(&self) -> bool {
        self.maintain_aspect_ratio
    }

    /// The size an image of `current` size takes after resizing to `width`.
    ///
    /// Without an explicit height and with the aspect ratio maintained, the
    /// height follows the *current* height/width ratio, so successive resizes
    /// compound on the latest size. A missing or zero height keeps the
    /// current height.
    ///
    /// Returns `None` when the ratio is needed but the current width is zero.
    pub fn resized(&self, current: Size, width: f64, height: Option<f64>) -> Option<Size> {
        let candidate = match height {
            None if self.maintain_aspect_ratio => {
                if current.width == 0.0 {
                    return None;
                }
                Some(width * (current.height / current.width))
            }
            other => other,
        };

        let height = candidate
            .filter(|h| *h != 0.0)
            .unwrap_or(current.height);
        Some(Size::new(width, height))
    }
}
