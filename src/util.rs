/// The structural shape of a node being deleted. This decides how it is unlinked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeleteCase {
    /// No children. The node is simply detached from its parent.
    Leaf,
    /// Exactly one child, which moves up into the node's place.
    OneChild,
    /// Two children. The node stays and takes over the value of its in-order neighbour, which is
    /// then removed instead.
    TwoChildren,
}

impl DeleteCase {
    pub(crate) fn of(has_left: bool, has_right: bool) -> Self {
        match (has_left, has_right) {
            (false, false) => Self::Leaf,
            (true, true) => Self::TwoChildren,
            _ => Self::OneChild,
        }
    }
}
