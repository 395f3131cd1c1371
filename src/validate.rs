use thiserror::Error;

use crate::{Key, Node, NodePtr, NodePtrExt, RBTree};

/// A red-black or search-tree property that does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("key {key} is out of binary search order")]
    BinarySearch { key: Key },
    #[error("the root is red")]
    RedRoot,
    #[error("red node {key} has a red child")]
    RedNodeRedChild { key: Key },
    #[error("black height differs between the subtrees of {key}")]
    BlackHeight { key: Key },
    #[error("node {key} does not point back at its parent")]
    ParentLink { key: Key },
    #[error("the tree holds {counted} nodes but its length is {len}")]
    Len { counted: usize, len: usize },
}

struct Audit {
    counted: usize,
}

impl Audit {
    /// Checks the subtree at `node` and returns its black height.
    fn node(
        &mut self,
        node: &Node,
        parent: NodePtr,
        lower: Option<Key>,
        upper: Option<Key>,
    ) -> Result<usize, InvariantViolation> {
        let key = node.key;
        self.counted += 1;

        if node.parent() != parent {
            return Err(InvariantViolation::ParentLink { key });
        }
        if lower.is_some_and(|l| key <= l) || upper.is_some_and(|u| key >= u) {
            return Err(InvariantViolation::BinarySearch { key });
        }
        if node.is_red() && (node.left.is_red() || node.right.is_red()) {
            return Err(InvariantViolation::RedNodeRedChild { key });
        }

        let this = NodePtr::from(node);
        let left = match node.left {
            Some(left) => self.node(unsafe { left.as_ref() }, this, lower, Some(key))?,
            None => 0,
        };
        let right = match node.right {
            Some(right) => self.node(unsafe { right.as_ref() }, this, Some(key), upper)?,
            None => 0,
        };
        if left != right {
            return Err(InvariantViolation::BlackHeight { key });
        }
        Ok(left + usize::from(node.is_black()))
    }
}

impl RBTree {
    /// Walks the whole tree and reports the first broken property, if any.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut audit = Audit { counted: 0 };
        let root = self.root.root();
        if let Some(node) = root {
            audit.node(unsafe { node.as_ref() }, None, None, None)?;
        }
        if root.is_red() {
            return Err(InvariantViolation::RedRoot);
        }
        if audit.counted != self.len {
            return Err(InvariantViolation::Len {
                counted: audit.counted,
                len: self.len,
            });
        }
        Ok(())
    }
}
