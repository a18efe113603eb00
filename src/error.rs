use crate::value::Kind;

/// Errors reported by fallible list and grid operations.
///
/// Lookups that simply find nothing (an out-of-range `get`, a `remove_at`
/// on an empty list) return `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("the list is full ({max} elements)")]
    CapacityExhausted { max: usize },

    #[error("index {index} is out of range for a list of length {len}")]
    OutOfRange { index: isize, len: usize },

    #[error("the node handle is detached from the list")]
    Detached,

    #[error("sentinel nodes cannot be moved or modified")]
    Sentinel,

    #[error("both handles refer to the same node")]
    SameNode,

    #[error("expected a value of kind {expected}, found {found}")]
    TypeMismatch { expected: Kind, found: Kind },
}
