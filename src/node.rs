/// Link value meaning "no neighbour", used at the open ends of grid rows.
pub(crate) const NIL: usize = usize::MAX;

/// A sequence element: one optional payload and two links into the arena.
///
/// Only sentinels carry no payload.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) prev: usize,
    pub(crate) next: usize,
    pub(crate) element: Option<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(prev: usize, next: usize, element: T) -> Self {
        Self {
            prev,
            next,
            element: Some(element),
        }
    }

    pub(crate) fn sentinel(prev: usize, next: usize) -> Self {
        Self {
            prev,
            next,
            element: None,
        }
    }

    pub(crate) fn is_sentinel(&self) -> bool {
        self.element.is_none()
    }
}

/// A [`Node`] with a second pair of links connecting grid rows.
///
/// `up` and `down` are only meaningful on the first node of a row and on
/// the two sentinels; every other row member keeps them at [`NIL`].
#[derive(Debug)]
pub(crate) struct BiNode<T> {
    pub(crate) link: Node<T>,
    pub(crate) up: usize,
    pub(crate) down: usize,
}

impl<T> BiNode<T> {
    pub(crate) fn sentinel(up: usize, down: usize) -> Self {
        Self {
            link: Node::sentinel(NIL, NIL),
            up,
            down,
        }
    }

    pub(crate) fn row_head(up: usize, down: usize, element: T) -> Self {
        Self {
            link: Node::new(NIL, NIL, element),
            up,
            down,
        }
    }

    pub(crate) fn member(prev: usize, element: T) -> Self {
        Self {
            link: Node::new(prev, NIL, element),
            up: NIL,
            down: NIL,
        }
    }
}
