use crate::{Element, ElementId, ImageBlock, LayoutTree, TextBlock};

pub const EPSILON: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub fn text(content: &str, font_size: u32, max_width: f64) -> Element {
    Element::text(
        TextBlock::new(content)
            .with_font_size(font_size)
            .with_max_width(max_width),
    )
}

pub fn image(src: &str, width: f64, height: f64) -> Element {
    Element::image(ImageBlock::new(src), width, height)
}

/// A vertical container at the origin with the given width, padding and gap.
pub fn vertical(tree: &mut LayoutTree, width: f64, padding: f64, gap: f64) -> ElementId {
    tree.insert(
        Element::vertical(width)
            .with_padding(padding)
            .with_gap(gap),
    )
}

/// Inserts each element and appends it to `container`, returning the new ids.
pub fn add_all(
    tree: &mut LayoutTree,
    container: ElementId,
    elements: Vec<Element>,
) -> Vec<ElementId> {
    elements
        .into_iter()
        .map(|element| {
            let id = tree.insert(element);
            tree.add(container, id).unwrap();
            id
        })
        .collect()
}
