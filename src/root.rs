use std::ptr::NonNull;

use log::trace;

use super::{Color, Key, Node, NodePtr, NodePtrExt, Root};

impl Root {
    pub(crate) const fn new() -> Self {
        Root { root: None }
    }

    #[inline(always)]
    pub(crate) fn root(&self) -> NodePtr {
        self.root
    }

    #[inline(always)]
    pub(crate) fn set_root(&mut self, root: NodePtr) {
        self.root = root;
    }

    pub(crate) fn take(&mut self) -> NodePtr {
        self.root.take()
    }

    pub(crate) fn find(&self, key: Key) -> NodePtr {
        let mut node = self.root;
        while let Some(candidate) = node {
            let candidate = unsafe { candidate.as_ref() };
            match key.cmp(&candidate.key) {
                std::cmp::Ordering::Equal => break,
                std::cmp::Ordering::Greater => node = candidate.right,
                std::cmp::Ordering::Less => node = candidate.left,
            }
        }
        node
    }

    /// Restores the red-black properties after `node` was linked as a red
    /// leaf (or set as the root of an empty tree).
    pub(crate) fn insert_fixup(&mut self, node: NonNull<Node>) {
        let mut node: NodePtr = node.into();

        loop {
            /*
             * Loop invariant: node is red.
             */
            let mut parent = node.parent();
            if parent.is_none() {
                /*
                 * Case 1 - node is the root. Either this is the first
                 * node, or we climbed here from Case 3. A red root is
                 * never left behind.
                 */
                trace!("fixup: {:?} reached the root, painting it black", node.key());
                node.set_color(Color::Black);
                break;
            }

            if parent.is_black() {
                /*
                 * Case 2 - a black parent can take a red child.
                 */
                trace!("fixup: {:?} has a black parent", node.key());
                break;
            }

            // The root is black, so a red parent has a parent of its own.
            let mut gparent = parent.parent();
            assert!(gparent.is_some(), "red node {:?} is the root", parent.key());

            let parent_is_left = gparent.left() == parent;
            let mut uncle = if parent_is_left {
                gparent.right()
            } else {
                gparent.left()
            };

            if uncle.is_red() {
                /*
                 * Case 3 - node's uncle is red (color flips).
                 *
                 *       G            g
                 *      / \          / \
                 *     p   u  -->   P   U
                 *    /            /
                 *   n            n
                 *
                 * g's parent might be red too, so keep going at g.
                 */
                trace!("fixup: color flip at {:?}", gparent.key());
                uncle.set_color(Color::Black);
                parent.set_color(Color::Black);
                gparent.set_color(Color::Red);
                node = gparent;
                continue;
            }

            if parent_is_left {
                if node == parent.right() {
                    /*
                     * Case 4a - uncle is black, node is an inner
                     * grandchild (left rotate at parent).
                     *
                     *      G             G
                     *     / \           / \
                     *    p   U  -->    n   U
                     *     \           /
                     *      n         p
                     *
                     * node now plays the parent in Case 5a.
                     */
                    trace!("fixup: zig-zag at {:?}", parent.key());
                    self.rotate_left(parent);
                    parent = node;
                }

                /*
                 * Case 5a - uncle is black, node is an outer
                 * grandchild (right rotate at gparent).
                 *
                 *        G           P
                 *       / \         / \
                 *      p   U  -->  n   g
                 *     /                 \
                 *    n                   U
                 */
                trace!("fixup: zig-zig at {:?}", gparent.key());
                self.rotate_right(gparent);
            } else {
                if node == parent.left() {
                    /* Case 4b - right rotate at parent */
                    trace!("fixup: zig-zag at {:?}", parent.key());
                    self.rotate_right(parent);
                    parent = node;
                }

                /* Case 5b - left rotate at gparent */
                trace!("fixup: zig-zig at {:?}", gparent.key());
                self.rotate_left(gparent);
            }

            parent.set_color(Color::Black);
            gparent.set_color(Color::Red);
            break;
        }
    }

    /// Promotes `node`'s right child into `node`'s place.
    ///
    /// ```text
    ///      N              R
    ///     / \            / \
    ///    a   R    -->   N   c
    ///       / \        / \
    ///      b   c      a   b
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `node` has no right child.
    pub(crate) fn rotate_left(&mut self, mut node: NodePtr) {
        let mut pivot = node.right();
        assert!(pivot.is_some(), "rotate_left at {:?} without a right child", node.key());
        trace!("rotate left at {:?}", node.key());

        let parent = node.parent();
        let mut inner = pivot.left();

        node.set_right(inner);
        inner.set_parent(node);

        pivot.set_left(node);
        node.set_parent(pivot);

        self.replace_parents_child(parent, node, pivot);
    }

    /// Promotes `node`'s left child into `node`'s place; mirror of
    /// [`Self::rotate_left`].
    ///
    /// # Panics
    ///
    /// Panics if `node` has no left child.
    pub(crate) fn rotate_right(&mut self, mut node: NodePtr) {
        let mut pivot = node.left();
        assert!(pivot.is_some(), "rotate_right at {:?} without a left child", node.key());
        trace!("rotate right at {:?}", node.key());

        let parent = node.parent();
        let mut inner = pivot.right();

        node.set_left(inner);
        inner.set_parent(node);

        pivot.set_right(node);
        node.set_parent(pivot);

        self.replace_parents_child(parent, node, pivot);
    }

    /// Points whichever link of `parent` held `old` at `new` and makes
    /// `parent` the parent of `new`. Without a parent, `new` becomes the root.
    ///
    /// # Panics
    ///
    /// Panics if `old` is not a child of `parent`.
    pub(crate) fn replace_parents_child(&mut self, mut parent: NodePtr, old: NodePtr, mut new: NodePtr) {
        if parent.is_none() {
            self.root = new;
        } else if parent.left() == old {
            parent.set_left(new);
        } else if parent.right() == old {
            parent.set_right(new);
        } else {
            panic!("{:?} is not a child of {:?}", old.key(), parent.key());
        }
        new.set_parent(parent);
    }
}
