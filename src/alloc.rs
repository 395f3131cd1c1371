use std::ptr::NonNull;

use crate::{Key, Node};

/// Allocates a detached red node.
///
/// It leaks; give it back with [`own_back`].
pub(crate) fn leak_alloc_node(key: Key) -> NonNull<Node> {
    NonNull::from(Box::leak(Box::new(Node::new(key))))
}

/// # Safety
///
/// `node` must come from [`leak_alloc_node`] and be unreachable from the tree.
pub(crate) unsafe fn own_back(node: NonNull<Node>) -> Box<Node> {
    unsafe { Box::from_raw(node.as_ptr()) }
}
