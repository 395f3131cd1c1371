//! A red-black tree over `i32` keys.
//!
//! The node layout follows the linux kernel's rbtree: children are owned
//! boxes, the parent is a non-owning pointer and the node color lives in the
//! lowest bit of that pointer.
//!
//! ```
//! use rbint::RBTree;
//!
//! let mut tree = RBTree::new();
//! tree.insert(10);
//! tree.insert(20);
//! tree.insert(30);
//!
//! assert!(tree.contains(20));
//! assert!(!tree.contains(25));
//! assert_eq!("20[B] L{10[R]} R{30[R]}", tree.dump());
//! ```
mod alloc;
mod fmt;
mod node;
mod root;
mod tree;
mod validate;

use std::ptr::NonNull;

pub use validate::InvariantViolation;

/// The key type stored in the tree.
pub type Key = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red = 0,
    Black = 1,
}

impl From<Color> for usize {
    fn from(color: Color) -> usize {
        color as usize
    }
}

impl From<usize> for Color {
    fn from(color: usize) -> Color {
        match color {
            0 => Color::Red,
            _ => Color::Black,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ComingFrom {
    Left,
    Right,
}

pub(crate) type NodePtr = Option<NonNull<Node>>;

/// Accessors that treat an absent node as a black leaf.
pub(crate) trait NodePtrExt {
    fn is_black(&self) -> bool;
    fn is_red(&self) -> bool;
    fn key(&self) -> Option<Key>;
    fn left(&self) -> NodePtr;
    fn parent(&self) -> NodePtr;
    fn right(&self) -> NodePtr;
    fn set_color(&mut self, color: Color);
    fn set_left(&mut self, left: NodePtr);
    fn set_parent(&mut self, parent: NodePtr);
    fn set_right(&mut self, right: NodePtr);
}

impl NodePtrExt for NodePtr {
    #[inline(always)]
    fn is_black(&self) -> bool {
        self.is_none_or(|v| unsafe { v.as_ref() }.is_black())
    }

    #[inline(always)]
    fn is_red(&self) -> bool {
        self.is_some_and(|v| unsafe { v.as_ref() }.is_red())
    }

    #[inline(always)]
    fn key(&self) -> Option<Key> {
        self.map(|v| unsafe { v.as_ref() }.key)
    }

    #[inline(always)]
    fn left(&self) -> NodePtr {
        self.and_then(|v| unsafe { v.as_ref() }.left)
    }

    #[inline(always)]
    fn parent(&self) -> NodePtr {
        self.and_then(|v| unsafe { v.as_ref() }.parent())
    }

    #[inline(always)]
    fn right(&self) -> NodePtr {
        self.and_then(|v| unsafe { v.as_ref() }.right)
    }

    #[inline(always)]
    fn set_color(&mut self, color: Color) {
        if let Some(node) = self {
            unsafe { node.as_mut() }.set_color(color);
        }
    }

    #[inline(always)]
    fn set_left(&mut self, left: NodePtr) {
        if let Some(node) = self {
            unsafe { node.as_mut() }.left = left;
        }
    }

    #[inline(always)]
    fn set_parent(&mut self, parent: NodePtr) {
        if let Some(node) = self {
            unsafe { node.as_mut() }.set_parent(parent);
        }
    }

    #[inline(always)]
    fn set_right(&mut self, right: NodePtr) {
        if let Some(node) = self {
            unsafe { node.as_mut() }.right = right;
        }
    }
}

impl From<&Node> for NodePtr {
    fn from(node: &Node) -> Self {
        NonNull::new(node as *const _ as *mut _)
    }
}

impl From<&mut Node> for NodePtr {
    fn from(node: &mut Node) -> Self {
        NonNull::new(node as *mut _)
    }
}

#[repr(C)]
pub(crate) struct Node {
    // The parent pointer with color information in the lowest bit
    pub(crate) parent_color: *mut Node,
    // Child pointers
    pub(crate) right: NodePtr,
    pub(crate) left: NodePtr,
    pub(crate) key: Key,
}

/// Owns the root link; rotations and rebalancing operate through it.
#[derive(Debug, Default)]
pub(crate) struct Root {
    root: NodePtr,
}

/// A red-black tree holding each `i32` key at most once.
///
/// The tree is single threaded: it is neither `Send` nor `Sync`.
pub struct RBTree {
    root: Root,
    len: usize,
}

#[cfg(test)]
pub(crate) fn init_test_logger() {
    use simplelog::{Config, LevelFilter, SimpleLogger};

    // The terminal only gets warnings; fixup traces would drown the test
    // output. Another test may have installed it already.
    let _ = SimpleLogger::init(LevelFilter::Warn, Config::default());
}
