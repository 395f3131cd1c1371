use std::ptr::{self, NonNull};

use crate::{Color, ComingFrom, Key, Node, NodePtr};

impl Node {
    /// A detached red node.
    pub(crate) fn new(key: Key) -> Self {
        Node {
            // Null parent, color bit 0: red.
            parent_color: ptr::null_mut(),
            right: None,
            left: None,
            key,
        }
    }

    #[inline(always)]
    pub(crate) fn is_black(&self) -> bool {
        Self::parent_color(self.parent_color) == Color::Black
    }

    #[inline(always)]
    pub(crate) fn is_red(&self) -> bool {
        Self::parent_color(self.parent_color) == Color::Red
    }

    #[inline(always)]
    pub(crate) fn color(&self) -> Color {
        Self::parent_color(self.parent_color)
    }

    /// Links the detached `node` under `parent` on the given side, red.
    ///
    /// # Safety
    ///
    /// Both pointers must be live nodes of the same tree, and the `direction`
    /// slot of `parent` must be empty.
    #[inline(always)]
    pub(crate) unsafe fn link(mut node: NonNull<Node>, mut parent: NonNull<Node>, direction: ComingFrom) {
        // SAFETY: delegated to the caller. The &mut to node is dropped before
        // we take one to parent.
        {
            let node = unsafe { node.as_mut() };
            node.set_parent_and_color(Some(parent), Color::Red);
            node.left = None;
            node.right = None;
        }
        let parent = unsafe { parent.as_mut() };
        match direction {
            ComingFrom::Left => parent.left = Some(node),
            ComingFrom::Right => parent.right = Some(node),
        };
    }

    #[inline(always)]
    pub(crate) fn parent(&self) -> NodePtr {
        Node::from_parent_color(self.parent_color)
    }

    #[inline(always)]
    pub(crate) fn from_parent_color(parent_color: *mut Node) -> NodePtr {
        NonNull::new(Self::strip_color(parent_color))
    }

    #[inline(always)]
    pub(crate) fn parent_color(parent_color: *mut Node) -> Color {
        Color::from(parent_color.addr() & 1)
    }

    #[inline(always)]
    fn strip_color(parent_color: *mut Node) -> *mut Node {
        parent_color.map_addr(|p| p & !1)
    }

    #[inline(always)]
    pub(crate) fn set_parent(&mut self, parent: NodePtr) {
        self.set_parent_and_color(parent, self.color());
    }

    #[inline(always)]
    pub(crate) fn set_parent_and_color(&mut self, parent: NodePtr, color: Color) {
        let parent = parent.map_or(ptr::null_mut(), NonNull::as_ptr);
        self.parent_color = parent.map_addr(|p| p | usize::from(color));
    }

    #[inline(always)]
    pub(crate) fn set_color(&mut self, color: Color) {
        self.parent_color = Self::strip_color(self.parent_color).map_addr(|p| p | usize::from(color));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::NodePtrExt;

    use pretty_assertions::assert_eq;

    #[test]
    fn new_node_is_red_and_detached() {
        let node = Node::new(42);
        assert_eq!(Color::Red, node.color());
        assert_eq!(None, node.parent());
        assert_eq!(None, node.left);
        assert_eq!(None, node.right);
    }

    #[test]
    fn color_survives_reparenting() {
        let mut parent = Node::new(10);
        let mut child = Node::new(5);
        child.set_color(Color::Black);

        child.set_parent((&mut parent).into());
        assert_eq!(Color::Black, child.color());
        assert_eq!(NodePtr::from(&parent), child.parent());

        child.set_color(Color::Red);
        assert_eq!(NodePtr::from(&parent), child.parent());

        child.set_parent(None);
        assert_eq!(Color::Red, child.color());
        assert_eq!(None, child.parent());
    }

    #[test]
    fn link_attaches_both_directions() {
        let mut parent = Node::new(10);
        let mut left = Node::new(5);
        let mut right = Node::new(15);
        parent.set_color(Color::Black);

        let parent_ptr = NonNull::from(&mut parent);
        let left_ptr = NonNull::from(&mut left);
        let right_ptr = NonNull::from(&mut right);
        unsafe {
            Node::link(left_ptr, parent_ptr, ComingFrom::Left);
            Node::link(right_ptr, parent_ptr, ComingFrom::Right);
        }

        let parent_ptr: NodePtr = Some(parent_ptr);
        assert_eq!(Some(5), parent_ptr.left().key());
        assert_eq!(Some(15), parent_ptr.right().key());
        assert_eq!(parent_ptr, parent_ptr.left().parent());
        assert_eq!(parent_ptr, parent_ptr.right().parent());
        assert!(parent_ptr.left().is_red());
        assert!(parent_ptr.is_black());
    }

    #[test]
    fn absent_node_is_black() {
        let none: NodePtr = None;
        assert!(none.is_black());
        assert!(!none.is_red());
        assert_eq!(None, none.key());
    }
}
