//! Depth-first element traversal with transient parent access.
//!
//! Transforms that annotate a node's parent need the parent and the node at
//! the same time; storing parent links on nodes would make every mutation a
//! bookkeeping hazard. Instead the walk hands the callback a short-lived
//! [`VisitParent`] view that borrows the parent's tag and properties for the
//! duration of one visit.

use crate::tree::{Element, Node, Properties};

/// Traversal control returned by a visitor callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisitorResult {
    /// Keep walking, descending into the visited element's children.
    #[default]
    Continue,
    /// Keep walking but do not descend into the visited element's children.
    SkipChildren,
    /// Abort the walk entirely.
    Stop,
}

/// Mutable view of a visited element's parent, valid for one callback call.
pub enum VisitParent<'a> {
    /// The parent is the document root; it has no tag or properties.
    Root,
    /// The parent is an element; its properties may be mutated in place.
    Element {
        /// The parent's tag name.
        tag_name: &'a str,
        /// The parent's property map.
        properties: &'a mut Properties,
    },
}

/// Walks every element node in pre-order, depth first.
///
/// The callback receives the visited element, its index within its parent's
/// children, and a [`VisitParent`] view of the parent. Only element nodes are
/// visited; text and comment nodes are passed over. When `tree` is itself an
/// element it is treated as a detached root: its descendants are visited, but
/// the element itself is not (it has no parent to report).
///
/// The callback must not assume anything about sibling ordering beyond the
/// index it is handed; the walk itself never reorders children.
pub fn visit_elements<F>(tree: &mut Node, visitor: &mut F) -> VisitorResult
where
    F: FnMut(&Element, usize, VisitParent<'_>) -> VisitorResult,
{
    match tree {
        Node::Root(root) => walk_root_children(&mut root.children, visitor),
        Node::Element(element) => walk_element_children(element, visitor),
        _ => VisitorResult::Continue,
    }
}

fn walk_root_children<F>(children: &mut [Node], visitor: &mut F) -> VisitorResult
where
    F: FnMut(&Element, usize, VisitParent<'_>) -> VisitorResult,
{
    for index in 0..children.len() {
        if let Node::Element(child) = &children[index] {
            match visitor(child, index, VisitParent::Root) {
                VisitorResult::Stop => return VisitorResult::Stop,
                VisitorResult::SkipChildren => continue,
                VisitorResult::Continue => {}
            }
        }
        if let Node::Element(child) = &mut children[index]
            && walk_element_children(child, visitor) == VisitorResult::Stop
        {
            return VisitorResult::Stop;
        }
    }
    VisitorResult::Continue
}

fn walk_element_children<F>(element: &mut Element, visitor: &mut F) -> VisitorResult
where
    F: FnMut(&Element, usize, VisitParent<'_>) -> VisitorResult,
{
    let Element {
        tag_name,
        properties,
        children,
    } = element;

    for index in 0..children.len() {
        if let Node::Element(child) = &children[index] {
            // Reborrow per visit so the parent view ends with the callback.
            let parent = VisitParent::Element {
                tag_name,
                properties: &mut *properties,
            };
            match visitor(child, index, parent) {
                VisitorResult::Stop => return VisitorResult::Stop,
                VisitorResult::SkipChildren => continue,
                VisitorResult::Continue => {}
            }
        }
        if let Node::Element(child) = &mut children[index]
            && walk_element_children(child, visitor) == VisitorResult::Stop
        {
            return VisitorResult::Stop;
        }
    }
    VisitorResult::Continue
}
