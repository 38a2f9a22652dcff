use crate::test_utils::{add_all, assert_close, image, text, vertical};
use crate::{Element, LayoutError, LayoutTree, RenderedElement};

#[test]
fn test_add_sets_parent() {
    let mut tree = LayoutTree::new();
    let root = vertical(&mut tree, 400.0, 20.0, 10.0);
    let child = tree.insert(text("Test", 16, 360.0));

    tree.add(root, child).unwrap();

    assert_eq!(tree.children(root).unwrap(), &[child]);
    assert_eq!(tree.parent(child).unwrap(), Some(root));
}

#[test]
fn test_chain_add() {
    let mut tree = LayoutTree::new();
    let root = vertical(&mut tree, 400.0, 20.0, 10.0);
    let first = tree.insert(text("Text1", 16, 360.0));
    let second = tree.insert(text("Text2", 16, 360.0));

    tree.add(root, first).unwrap().add(root, second).unwrap();

    assert_eq!(tree.children(root).unwrap(), &[first, second]);
}

#[test]
fn test_remove_clears_parent() {
    let mut tree = LayoutTree::new();
    let root = vertical(&mut tree, 400.0, 20.0, 10.0);
    let ids = add_all(
        &mut tree,
        root,
        vec![text("a", 16, 360.0), text("b", 16, 360.0)],
    );

    tree.remove(root, ids[0]).unwrap();
    assert_eq!(tree.children(root).unwrap(), &[ids[1]]);
    assert_eq!(tree.parent(ids[0]).unwrap(), None);

    // Removing an element that is not a child is a no-op.
    tree.remove(root, ids[0]).unwrap();
    assert_eq!(tree.children(root).unwrap(), &[ids[1]]);
}

#[test]
fn test_clear_detaches_all_children() {
    let mut tree = LayoutTree::new();
    let root = vertical(&mut tree, 400.0, 20.0, 10.0);
    let ids = add_all(
        &mut tree,
        root,
        vec![text("a", 16, 360.0), image("b.png", 100.0, 100.0)],
    );

    tree.clear(root).unwrap();

    assert!(tree.children(root).unwrap().is_empty());
    for id in ids {
        assert_eq!(tree.parent(id).unwrap(), None);
        assert!(tree.contains(id));
    }
}

#[test]
fn test_reparenting_moves_the_child() {
    let mut tree = LayoutTree::new();
    let first = vertical(&mut tree, 400.0, 20.0, 10.0);
    let second = vertical(&mut tree, 400.0, 20.0, 10.0);
    let child = tree.insert(text("Moving", 16, 360.0));

    tree.add(first, child).unwrap();
    tree.add(second, child).unwrap();

    assert!(tree.children(first).unwrap().is_empty());
    assert_eq!(tree.children(second).unwrap(), &[child]);
    assert_eq!(tree.parent(child).unwrap(), Some(second));
}

#[test]
fn test_re_adding_moves_to_end_without_duplicates() {
    let mut tree = LayoutTree::new();
    let root = vertical(&mut tree, 400.0, 20.0, 10.0);
    let ids = add_all(
        &mut tree,
        root,
        vec![text("a", 16, 360.0), text("b", 16, 360.0)],
    );

    tree.add(root, ids[0]).unwrap();

    assert_eq!(tree.children(root).unwrap(), &[ids[1], ids[0]]);
}

#[test]
fn test_cycles_are_rejected() {
    let mut tree = LayoutTree::new();
    let outer = vertical(&mut tree, 400.0, 20.0, 10.0);
    let inner = vertical(&mut tree, 360.0, 10.0, 5.0);
    tree.add(outer, inner).unwrap();

    assert_eq!(
        tree.add(inner, outer).unwrap_err(),
        LayoutError::Cycle {
            container: inner,
            child: outer
        }
    );
    assert!(matches!(
        tree.add(outer, outer),
        Err(LayoutError::Cycle { .. })
    ));
    // The failed calls left the structure untouched.
    assert_eq!(tree.parent(inner).unwrap(), Some(outer));
    assert_eq!(tree.parent(outer).unwrap(), None);
}

#[test]
fn test_adding_to_a_leaf_is_a_kind_mismatch() {
    let mut tree = LayoutTree::new();
    let leaf = tree.insert(text("leaf", 16, 100.0));
    let other = tree.insert(image("x.png", 10.0, 10.0));

    let err = tree.add(leaf, other).unwrap_err();
    assert_eq!(
        err,
        LayoutError::KindMismatch {
            id: leaf,
            expected: "container",
            actual: "text"
        }
    );
    assert!(tree.arrange(other).is_err());
}

#[test]
fn test_set_position_does_not_reflow() {
    let mut tree = LayoutTree::new();
    let root = vertical(&mut tree, 400.0, 20.0, 10.0);
    let ids = add_all(
        &mut tree,
        root,
        vec![image("a.png", 360.0, 50.0), image("b.png", 360.0, 50.0)],
    );
    tree.arrange(root).unwrap();

    tree.set_position(ids[0], 5.0, 500.0).unwrap();

    let bounds = tree.bounds(ids[0]).unwrap();
    assert_eq!((bounds.x, bounds.y, bounds.right, bounds.bottom), (5.0, 500.0, 365.0, 550.0));
    assert_eq!(tree.get(ids[1]).unwrap().y(), 80.0);
}

#[test]
fn test_update_content_reflows_parent() {
    let mut tree = LayoutTree::new();
    let root = vertical(&mut tree, 400.0, 20.0, 10.0);
    let ids = add_all(
        &mut tree,
        root,
        vec![text("Short", 16, 360.0), image("below.png", 360.0, 100.0)],
    );
    tree.arrange(root).unwrap();
    let initial_height = tree.get(ids[0]).unwrap().height();
    assert_close(tree.get(ids[1]).unwrap().y(), 20.0 + 24.0 + 10.0);

    // 60 chars * 16 * 0.7 = 672 over 360 -> 2 lines
    tree.update_content(ids[0], "y".repeat(60)).unwrap();

    let updated = tree.get(ids[0]).unwrap();
    assert_eq!(updated.as_text().unwrap().content(), "y".repeat(60));
    assert!(updated.height() > initial_height);
    assert_close(updated.height(), 48.0);
    assert_close(tree.get(ids[1]).unwrap().y(), 20.0 + 48.0 + 10.0);
    assert_close(tree.get(root).unwrap().height(), 20.0 + 48.0 + 10.0 + 100.0 + 20.0);
}

#[test]
fn test_update_content_without_parent() {
    let mut tree = LayoutTree::new();
    let id = tree.insert(text("Alone", 20, 100.0));
    tree.update_content(id, "").unwrap();
    assert_eq!(tree.get(id).unwrap().height(), 30.0);
}

#[test]
fn test_update_content_on_image_fails() {
    let mut tree = LayoutTree::new();
    let id = tree.insert(image("a.png", 10.0, 10.0));
    assert!(matches!(
        tree.update_content(id, "text"),
        Err(LayoutError::KindMismatch { expected: "text", .. })
    ));
}

#[test]
fn test_reflow_stops_at_the_parent() {
    let mut tree = LayoutTree::new();
    let outer = vertical(&mut tree, 600.0, 30.0, 20.0);
    let header = vertical(&mut tree, 540.0, 10.0, 5.0);
    let title = tree.insert(text("Title", 36, 520.0));
    tree.add(header, title).unwrap();
    tree.arrange(header).unwrap();
    let hero = tree.insert(image("main.jpg", 540.0, 400.0));
    tree.add(outer, header).unwrap().add(outer, hero).unwrap();
    tree.arrange(outer).unwrap();

    let header_height = tree.get(header).unwrap().height();
    let hero_y = tree.get(hero).unwrap().y();

    tree.update_content(title, "T".repeat(80)).unwrap();

    assert!(tree.get(header).unwrap().height() > header_height);
    // The outer container was not asked to re-arrange.
    assert_eq!(tree.get(hero).unwrap().y(), hero_y);

    tree.arrange(outer).unwrap();
    assert!(tree.get(hero).unwrap().y() > hero_y);
}

#[test]
fn test_resize_with_aspect_ratio_reflows_parent() {
    let mut tree = LayoutTree::new();
    let root = vertical(&mut tree, 400.0, 20.0, 10.0);
    let ids = add_all(
        &mut tree,
        root,
        vec![image("image.jpg", 400.0, 300.0), text("Caption", 16, 360.0)],
    );
    tree.arrange(root).unwrap();

    tree.resize(ids[0], 200.0, None).unwrap();

    let resized = tree.get(ids[0]).unwrap();
    assert_eq!((resized.width(), resized.height()), (200.0, 150.0));
    assert_eq!(resized.x(), 100.0);
    assert_eq!(tree.get(ids[1]).unwrap().y(), 20.0 + 150.0 + 10.0);
}

#[test]
fn test_repeated_resizes_use_current_ratio() {
    let mut tree = LayoutTree::new();
    let id = tree.insert(image("image.jpg", 400.0, 300.0));

    tree.resize(id, 200.0, Some(200.0)).unwrap();
    tree.resize(id, 100.0, None).unwrap();

    assert_eq!(tree.get(id).unwrap().height(), 100.0);
}

#[test]
fn test_zero_width_resize_is_an_error() {
    let mut tree = LayoutTree::new();
    let id = tree.insert(image("image.jpg", 0.0, 300.0));

    assert_eq!(
        tree.resize(id, 200.0, None),
        Err(LayoutError::DegenerateAspectRatio(id))
    );
    assert_eq!(tree.get(id).unwrap().width(), 0.0);
}

#[test]
fn test_get_all_elements() {
    let mut tree = LayoutTree::new();
    let root = vertical(&mut tree, 400.0, 20.0, 10.0);
    add_all(
        &mut tree,
        root,
        vec![text("Test", 16, 360.0), image("image.jpg", 360.0, 200.0)],
    );
    tree.arrange(root).unwrap();

    let elements = tree.get_all_elements(root).unwrap();
    let types: Vec<&str> = elements.iter().map(RenderedElement::type_name).collect();
    assert_eq!(types, vec!["text", "image"]);
}

#[test]
fn test_nested_flattening_skips_container_wrappers() {
    let mut tree = LayoutTree::new();
    let outer = vertical(&mut tree, 600.0, 20.0, 10.0);
    let inner = vertical(&mut tree, 540.0, 20.0, 10.0);
    add_all(
        &mut tree,
        inner,
        vec![text("Title", 36, 520.0), text("Subtitle", 18, 520.0)],
    );
    tree.arrange(inner).unwrap();
    tree.add(outer, inner).unwrap();
    tree.arrange(outer).unwrap();

    let elements = tree.get_all_elements(outer).unwrap();
    assert_eq!(elements.len(), 2);
    assert!(elements.iter().all(RenderedElement::is_leaf));

    let with_image = tree.insert(image("main.jpg", 540.0, 400.0));
    tree.add(outer, with_image).unwrap();
    let elements = tree.get_all_elements(outer).unwrap();
    let types: Vec<&str> = elements.iter().map(RenderedElement::type_name).collect();
    assert_eq!(types, vec!["text", "text", "image"]);
}

#[test]
fn test_nested_layout_positions_container_as_a_block() {
    let mut tree = LayoutTree::new();
    let main = vertical(&mut tree, 600.0, 30.0, 20.0);
    let header = vertical(&mut tree, 540.0, 10.0, 5.0);
    add_all(
        &mut tree,
        header,
        vec![text("Title", 36, 520.0), text("Subtitle", 18, 520.0)],
    );
    tree.arrange(header).unwrap();
    let hero = tree.insert(image("main.jpg", 540.0, 400.0));
    tree.add(main, header).unwrap().add(main, hero).unwrap();
    tree.arrange(main).unwrap();

    let header_element = tree.get(header).unwrap();
    assert_eq!(header_element.y(), 30.0);
    assert!(tree.get(hero).unwrap().y() > header_element.y() + header_element.height());
}

#[test]
fn test_render_container_nests_children() {
    let mut tree = LayoutTree::new();
    let root = vertical(&mut tree, 400.0, 20.0, 10.0);
    let row = tree.insert(Element::horizontal().with_gap(4.0));
    add_all(&mut tree, row, vec![image("a.png", 10.0, 10.0)]);
    tree.add(root, row).unwrap();

    let RenderedElement::Container(rendered) = tree.render(root).unwrap() else {
        panic!("expected a container render");
    };
    assert_eq!(rendered.padding, 20.0);
    assert_eq!(rendered.gap, 10.0);
    assert_eq!(rendered.elements.len(), 1);
    let RenderedElement::Container(nested) = &rendered.elements[0] else {
        panic!("expected a nested container");
    };
    assert_eq!(nested.gap, 4.0);
    assert_eq!(nested.elements.len(), 1);

    let json = serde_json::to_value(tree.render(root).unwrap()).unwrap();
    assert_eq!(json["type"], "container");
    assert_eq!(json["elements"][0]["elements"][0]["type"], "image");
}

#[test]
fn test_discard_removes_subtree() {
    let mut tree = LayoutTree::new();
    let root = vertical(&mut tree, 400.0, 20.0, 10.0);
    let inner = vertical(&mut tree, 360.0, 0.0, 0.0);
    let leaves = add_all(
        &mut tree,
        inner,
        vec![text("a", 16, 100.0), text("b", 16, 100.0)],
    );
    tree.add(root, inner).unwrap();

    tree.discard(inner).unwrap();

    assert!(tree.children(root).unwrap().is_empty());
    assert!(!tree.contains(inner));
    assert!(leaves.iter().all(|id| !tree.contains(*id)));
    assert_eq!(tree.len(), 1);
    assert_eq!(
        tree.get(inner).unwrap_err(),
        LayoutError::UnknownElement(inner)
    );
}

#[test]
fn test_insert_starts_detached_and_empty() {
    let mut tree = LayoutTree::new();
    let root = vertical(&mut tree, 400.0, 20.0, 10.0);
    add_all(&mut tree, root, vec![text("a", 16, 100.0)]);

    let copy = tree.get(root).unwrap().clone();
    let copy_id = tree.insert(copy);

    assert!(tree.children(copy_id).unwrap().is_empty());
    assert_eq!(tree.children(root).unwrap().len(), 1);
}
