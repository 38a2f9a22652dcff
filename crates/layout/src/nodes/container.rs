//! Containers and their arrangement algorithms.

use crate::tree::ElementId;
use posterflow_types::geometry::Size;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Children stack top-to-bottom and are centered horizontally.
    Vertical,
    /// Children stack left-to-right, flush with the top padding edge.
    Horizontal,
}

/// An ordered list of child elements plus the spacing used to stack them.
///
/// Child order is both arrangement order and rendering order.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    direction: Direction,
    pub(crate) padding: f64,
    pub(crate) gap: f64,
    pub(crate) children: Vec<ElementId>,
}

/// Output of one arrangement pass: a position per child, in child order,
/// and the container dimensions that were recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement {
    pub positions: Vec<(f64, f64)>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Container {
    pub const DEFAULT_WIDTH: f64 = 400.0;
    pub const DEFAULT_HEIGHT: f64 = 600.0;

    pub fn vertical() -> Self {
        Self {
            direction: Direction::Vertical,
            padding: 20.0,
            gap: 10.0,
            children: Vec::new(),
        }
    }

    pub fn horizontal() -> Self {
        Self {
            direction: Direction::Horizontal,
            padding: 0.0,
            gap: 0.0,
            children: Vec::new(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Computes child positions for a container whose frame starts at
    /// `(x, y)` and is `width` wide. Pure: the result depends only on the
    /// arguments.
    pub fn arrangement(&self, x: f64, y: f64, width: f64, child_sizes: &[Size]) -> Arrangement {
        match self.direction {
            Direction::Vertical => self.arrange_vertical(x, y, width, child_sizes),
            Direction::Horizontal => self.arrange_horizontal(x, y, child_sizes),
        }
    }

    fn arrange_vertical(&self, x: f64, y: f64, width: f64, child_sizes: &[Size]) -> Arrangement {
        if child_sizes.is_empty() {
            return Arrangement {
                positions: Vec::new(),
                width: None,
                height: Some(2.0 * self.padding),
            };
        }

        let available_width = width - 2.0 * self.padding;
        let last = child_sizes.len() - 1;
        let mut current_y = y + self.padding;
        let mut positions = Vec::with_capacity(child_sizes.len());

        for (i, child) in child_sizes.iter().enumerate() {
            // Narrower children are centered; wider ones overflow from the left edge.
            let child_x = if child.width < available_width {
                x + self.padding + (available_width - child.width) / 2.0
            } else {
                x + self.padding
            };
            positions.push((child_x, current_y));

            current_y += child.height;
            if i < last {
                current_y += self.gap;
            }
        }

        Arrangement {
            positions,
            width: None,
            height: Some(current_y - y + self.padding),
        }
    }

    fn arrange_horizontal(&self, x: f64, y: f64, child_sizes: &[Size]) -> Arrangement {
        // An empty row only collapses its width; the height is left as is.
        if child_sizes.is_empty() {
            return Arrangement {
                positions: Vec::new(),
                width: Some(2.0 * self.padding),
                height: None,
            };
        }

        let last = child_sizes.len() - 1;
        let child_y = y + self.padding;
        let mut current_x = x + self.padding;
        let mut max_height: f64 = 0.0;
        let mut positions = Vec::with_capacity(child_sizes.len());

        for (i, child) in child_sizes.iter().enumerate() {
            positions.push((current_x, child_y));

            current_x += child.width;
            if i < last {
                current_x += self.gap;
            }
            max_height = max_height.max(child.height);
        }

        Arrangement {
            positions,
            width: Some(current_x - x + self.padding),
            height: Some(max_height + 2.0 * self.padding),
        }
    }
}
