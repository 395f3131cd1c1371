use std::fmt::{self, Debug, Display, Write};

use crate::{Color, Node, RBTree};

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match self {
            Color::Red => 'R',
            Color::Black => 'B',
        })
    }
}

impl Node {
    /// `<key>[<color>]`, then ` L{...}` and ` R{...}` for present children.
    fn write_dump<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{}[{}]", self.key, self.color())?;
        if let Some(left) = self.left {
            out.write_str(" L{")?;
            unsafe { left.as_ref() }.write_dump(out)?;
            out.write_char('}')?;
        }
        if let Some(right) = self.right {
            out.write_str(" R{")?;
            unsafe { right.as_ref() }.write_dump(out)?;
            out.write_char('}')?;
        }
        Ok(())
    }
}

impl RBTree {
    /// Renders the tree shape for debugging, e.g. `20[B] L{10[R]} R{30[R]}`.
    ///
    /// An empty tree renders as the empty string. The format is not meant to
    /// be parsed back.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl Display for RBTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.root() {
            Some(root) => unsafe { root.as_ref() }.write_dump(f),
            None => Ok(()),
        }
    }
}

impl Debug for RBTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RBTree")
            .field("len", &self.len)
            .field("root", &format_args!("{self}"))
            .finish()
    }
}

#[cfg(test)]
mod test {
    use crate::{Color, RBTree};
    use pretty_assertions::assert_eq;

    #[test]
    fn color_letters() {
        assert_eq!("R", Color::Red.to_string());
        assert_eq!("B", Color::Black.to_string());
    }

    #[test]
    fn empty_dump() {
        let tree = RBTree::new();
        assert_eq!("", tree.dump());
        assert_eq!("", format!("{tree}"));
    }

    #[test]
    fn nested_dump() {
        let tree: RBTree = [8, 4, 12, 2, 6, 10, 14, 1].into_iter().collect();
        assert_eq!(
            "8[B] L{4[R] L{2[B] L{1[R]}} R{6[B]}} R{12[B] L{10[R]} R{14[R]}}",
            tree.dump()
        );
    }

    #[test]
    fn display_matches_dump() {
        let tree: RBTree = [3, 1, 2].into_iter().collect();
        assert_eq!(tree.dump(), format!("{tree}"));
    }

    #[test]
    fn debug() {
        let tree: RBTree = [10, 20].into_iter().collect();
        assert_eq!("RBTree { len: 2, root: 10[B] R{20[R]} }", format!("{tree:?}"));
    }
}
