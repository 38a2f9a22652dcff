//! The element arena and every operation that touches more than one element.

use crate::element::{Element, ElementKind};
use crate::nodes::Container;
use crate::render::{RenderedContainer, RenderedElement};
use crate::LayoutError;
use posterflow_types::geometry::{Bounds, Size};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identity of an element inside a [`LayoutTree`].
    ///
    /// Elements are compared by this id, never by value.
    pub struct ElementId;
}

/// Owns every element of one layout and the parent/child links between them.
///
/// A container owns the order of its children; each child keeps a
/// non-owning back-reference to its container, used only to re-arrange that
/// container when the child's content or size changes. Reflow goes up one
/// level: the grandparent is not re-arranged.
///
/// A tree has a single writer. It is not meant to be shared across threads
/// while it is being mutated.
#[derive(Debug, Default)]
pub struct LayoutTree {
    elements: SlotMap<ElementId, Element>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a detached element to the tree.
    ///
    /// The element starts without a parent, and a container starts without
    /// children, whatever the value carried before.
    pub fn insert(&mut self, element: impl Into<Element>) -> ElementId {
        let mut element = element.into();
        element.parent = None;
        if let ElementKind::Container(c) = &mut element.kind {
            c.children.clear();
        }
        self.elements.insert(element)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    pub fn get(&self, id: ElementId) -> Result<&Element, LayoutError> {
        self.elements.get(id).ok_or(LayoutError::UnknownElement(id))
    }

    fn get_mut(&mut self, id: ElementId) -> Result<&mut Element, LayoutError> {
        self.elements
            .get_mut(id)
            .ok_or(LayoutError::UnknownElement(id))
    }

    pub fn container(&self, id: ElementId) -> Result<&Container, LayoutError> {
        let element = self.get(id)?;
        element.as_container().ok_or(LayoutError::KindMismatch {
            id,
            expected: "container",
            actual: element.kind().name(),
        })
    }

    fn container_mut(&mut self, id: ElementId) -> Result<&mut Container, LayoutError> {
        let element = self.get_mut(id)?;
        match element.kind_mut() {
            ElementKind::Container(c) => Ok(c),
            other => Err(LayoutError::KindMismatch {
                id,
                expected: "container",
                actual: other.name(),
            }),
        }
    }

    pub fn parent(&self, id: ElementId) -> Result<Option<ElementId>, LayoutError> {
        Ok(self.get(id)?.parent())
    }

    pub fn children(&self, id: ElementId) -> Result<&[ElementId], LayoutError> {
        Ok(self.container(id)?.children())
    }

    pub fn bounds(&self, id: ElementId) -> Result<Bounds, LayoutError> {
        Ok(self.get(id)?.bounds())
    }

    /// Moves an element. Does not re-arrange anything.
    pub fn set_position(&mut self, id: ElementId, x: f64, y: f64) -> Result<(), LayoutError> {
        self.get_mut(id)?.set_position(x, y);
        Ok(())
    }

    /// Appends `child` to `container` and returns the tree for chaining.
    ///
    /// A child that already belongs to a container is detached from it first,
    /// so an element is never listed by two containers. Adding a child to its
    /// current container moves it to the end.
    pub fn add(
        &mut self,
        container: ElementId,
        child: ElementId,
    ) -> Result<&mut Self, LayoutError> {
        self.container(container)?;
        let old_parent = self.get(child)?.parent();

        if self.is_self_or_ancestor(child, container) {
            return Err(LayoutError::Cycle { container, child });
        }

        if let Some(old_parent) = old_parent {
            self.detach(old_parent, child)?;
        }

        self.get_mut(child)?.parent = Some(container);
        self.container_mut(container)?.children.push(child);
        log::trace!("Added {:?} to {:?}", child, container);
        Ok(self)
    }

    /// Removes `child` from `container`. A no-op if it is not a child.
    pub fn remove(&mut self, container: ElementId, child: ElementId) -> Result<(), LayoutError> {
        if self.container(container)?.children.contains(&child) {
            self.detach(container, child)?;
            log::trace!("Removed {:?} from {:?}", child, container);
        }
        Ok(())
    }

    /// Detaches every child of `container`.
    pub fn clear(&mut self, container: ElementId) -> Result<(), LayoutError> {
        let children = std::mem::take(&mut self.container_mut(container)?.children);
        for child in children {
            if let Some(element) = self.elements.get_mut(child) {
                element.parent = None;
            }
        }
        Ok(())
    }

    /// Removes an element and, for a container, everything below it.
    pub fn discard(&mut self, id: ElementId) -> Result<(), LayoutError> {
        if let Some(parent) = self.get(id)?.parent() {
            self.detach(parent, id)?;
        }

        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(ElementKind::Container(c)) = self.elements.remove(next).map(|e| e.kind) {
                pending.extend(c.children);
            }
        }
        Ok(())
    }

    fn detach(&mut self, container: ElementId, child: ElementId) -> Result<(), LayoutError> {
        self.container_mut(container)?
            .children
            .retain(|id| *id != child);
        self.get_mut(child)?.parent = None;
        Ok(())
    }

    /// True if `candidate` is `node` or one of its ancestors.
    fn is_self_or_ancestor(&self, candidate: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.elements.get(id).and_then(Element::parent);
        }
        false
    }

    /// Positions the direct children of `container` and recomputes the
    /// container's derived dimensions.
    ///
    /// Nested containers are moved as a whole but not re-arranged, so their
    /// own children keep the positions of their last arrangement. Running the
    /// pass again without changes yields the same layout.
    pub fn arrange(&mut self, container: ElementId) -> Result<(), LayoutError> {
        let (children, arrangement) = {
            let element = self.get(container)?;
            let layout = self.container(container)?;
            let sizes = layout
                .children()
                .iter()
                .map(|&child| self.get(child).map(Element::size))
                .collect::<Result<Vec<Size>, _>>()?;
            let arrangement = layout.arrangement(element.x(), element.y(), element.width(), &sizes);
            (layout.children().to_vec(), arrangement)
        };

        for (child, (x, y)) in children.iter().zip(arrangement.positions) {
            self.get_mut(*child)?.set_position(x, y);
        }

        let element = self.get_mut(container)?;
        if let Some(width) = arrangement.width {
            element.set_width(width);
        }
        if let Some(height) = arrangement.height {
            element.set_height(height);
        }

        log::debug!(
            "Arranged {} with {} children: {:.1} x {:.1}",
            element.kind().name(),
            children.len(),
            element.width(),
            element.height()
        );
        Ok(())
    }

    fn reflow_parent(&mut self, id: ElementId) -> Result<(), LayoutError> {
        if let Some(parent) = self.get(id)?.parent() {
            self.arrange(parent)?;
        }
        Ok(())
    }

    /// Replaces the content of a text element, recomputes its height and
    /// re-arranges its parent.
    pub fn update_content(
        &mut self,
        id: ElementId,
        content: impl Into<String>,
    ) -> Result<(), LayoutError> {
        let element = self.get_mut(id)?;
        let height = match element.kind_mut() {
            ElementKind::Text(block) => {
                block.set_content(content.into());
                block.calculate_height()
            }
            other => {
                return Err(LayoutError::KindMismatch {
                    id,
                    expected: "text",
                    actual: other.name(),
                });
            }
        };
        element.set_height(height);

        self.reflow_parent(id)
    }

    /// Resizes an image element and re-arranges its parent.
    ///
    /// See [`crate::ImageBlock::resized`] for how the height is chosen. When
    /// the aspect ratio is needed and the current width is zero, the image is
    /// left untouched and [`LayoutError::DegenerateAspectRatio`] is returned.
    pub fn resize(
        &mut self,
        id: ElementId,
        width: f64,
        height: Option<f64>,
    ) -> Result<(), LayoutError> {
        let element = self.get_mut(id)?;
        let size = match element.kind() {
            ElementKind::Image(block) => block
                .resized(element.size(), width, height)
                .ok_or(LayoutError::DegenerateAspectRatio(id))?,
            other => {
                return Err(LayoutError::KindMismatch {
                    id,
                    expected: "image",
                    actual: other.name(),
                });
            }
        };
        element.set_size(size);

        self.reflow_parent(id)
    }

    /// The attribute map of an element. Containers include the maps of all
    /// their children, recursively.
    pub fn render(&self, id: ElementId) -> Result<RenderedElement, LayoutError> {
        let element = self.get(id)?;
        let rendered = match element.kind() {
            ElementKind::Text(block) => RenderedElement::Text(element.render_text(block)),
            ElementKind::Image(block) => RenderedElement::Image(element.render_image(block)),
            ElementKind::Container(c) => RenderedElement::Container(RenderedContainer {
                x: element.x(),
                y: element.y(),
                width: element.width(),
                height: element.height(),
                padding: c.padding(),
                gap: c.gap(),
                elements: c
                    .children()
                    .iter()
                    .map(|&child| self.render(child))
                    .collect::<Result<_, _>>()?,
            }),
        };
        Ok(rendered)
    }

    /// The leaves below `container`, depth-first in document order.
    ///
    /// Nested containers are spliced in place; their own attribute maps never
    /// appear in the result.
    pub fn get_all_elements(
        &self,
        container: ElementId,
    ) -> Result<Vec<RenderedElement>, LayoutError> {
        let mut leaves = Vec::new();
        self.collect_leaves(self.container(container)?, &mut leaves)?;
        Ok(leaves)
    }

    fn collect_leaves(
        &self,
        container: &Container,
        leaves: &mut Vec<RenderedElement>,
    ) -> Result<(), LayoutError> {
        for &child in container.children() {
            match self.get(child)?.as_container() {
                Some(nested) => self.collect_leaves(nested, leaves)?,
                None => leaves.push(self.render(child)?),
            }
        }
        Ok(())
    }
}
