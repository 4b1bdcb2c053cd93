/// Which child slot of a `Node` a walk follows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    /// The slot holding values `<=` the node's value.
    Left,
    /// The slot holding values `>` the node's value.
    Right,
}

impl Side {
    /// The other child slot.
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The side of a node holding `node_value` where `value` belongs: right when strictly
    /// greater, left otherwise.
    pub(crate) fn toward<T: Ord>(value: &T, node_value: &T) -> Self {
        if value > node_value {
            Self::Right
        } else {
            Self::Left
        }
    }
}
