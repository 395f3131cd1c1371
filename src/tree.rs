use std::cmp::Ordering::*;

use log::debug;

use crate::{ComingFrom, Key, Node, NodePtr, NodePtrExt, RBTree, Root, alloc};

impl Default for RBTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RBTree {
    fn drop(&mut self) {
        self.free_nodes();
    }
}

impl RBTree {
    pub const fn new() -> Self {
        RBTree {
            root: Root::new(),
            len: 0,
        }
    }

    /// Returns `true` if `key` is in the tree.
    pub fn contains(&self, key: Key) -> bool {
        self.root.find(key).is_some()
    }

    /// Adds `key` to the tree and rebalances it.
    ///
    /// Returns `false`, leaving the tree untouched, if `key` was already
    /// present.
    pub fn insert(&mut self, key: Key) -> bool {
        let mut parent = None;
        let mut direction = ComingFrom::Left;
        let mut link = self.root.root();
        while let Some(candidate) = link {
            let candidate = unsafe { candidate.as_ref() };
            match key.cmp(&candidate.key) {
                Equal => {
                    debug!("insert: {key} is already present");
                    return false;
                }
                Greater => direction = ComingFrom::Right,
                Less => direction = ComingFrom::Left,
            }
            parent = link;
            link = match direction {
                ComingFrom::Left => candidate.left,
                ComingFrom::Right => candidate.right,
            };
        }

        let node = alloc::leak_alloc_node(key);
        match parent {
            // SAFETY: parent is a live node whose `direction` slot we just
            // found empty.
            Some(parent) => unsafe { Node::link(node, parent, direction) },
            None => self.root.set_root(Some(node)),
        }
        self.root.insert_fixup(node);
        self.len += 1;
        true
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        fn height(node: NodePtr) -> usize {
            match node {
                Some(_) => 1 + height(node.left()).max(height(node.right())),
                None => 0,
            }
        }
        height(self.root.root())
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        debug!("clear: dropping {} nodes", self.len);
        self.free_nodes();
    }

    fn free_nodes(&mut self) {
        let mut current = self.root.take();
        while let Some(node) = current {
            if current.left().is_some() {
                current = current.left();
                continue;
            }
            if current.right().is_some() {
                current = current.right();
                continue;
            }
            // A leaf: unhook it from its parent and climb back up. No
            // rebalancing, everything goes.
            let mut parent = current.parent();
            if parent.left() == current {
                parent.set_left(None);
            } else {
                parent.set_right(None);
            }
            // SAFETY: node is no longer reachable from the tree.
            drop(unsafe { alloc::own_back(node) });
            current = parent;
        }
        self.len = 0;
    }
}

impl FromIterator<Key> for RBTree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> RBTree {
        let mut tree = RBTree::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Key> for RBTree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a> Extend<&'a Key> for RBTree {
    fn extend<I: IntoIterator<Item = &'a Key>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
