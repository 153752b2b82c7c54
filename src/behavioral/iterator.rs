//! Iterator: a lazy cursor over any source sequence.
//!
//! [`Cursor::next_step`] reports each element as [`Step::Yield`] and then
//! [`Step::Done`] forever. The cursor pulls one element from its source per
//! step, never ahead of the caller except for [`Cursor::has_next`], which
//! buffers a single element. It cannot be rewound; build a new cursor to
//! iterate again.

use std::iter::{Fuse, FusedIterator, Peekable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    Yield(T),
    Done,
}

impl<T> Step<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done)
    }

    pub fn value(self) -> Option<T> {
        match self {
            Step::Yield(value) => Some(value),
            Step::Done => None,
        }
    }
}

pub struct Cursor<I: Iterator> {
    items: Peekable<Fuse<I>>,
    position: usize,
}

impl<I: Iterator> Cursor<I> {
    pub fn new(source: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            items: source.into_iter().fuse().peekable(),
            position: 0,
        }
    }

    pub fn next_step(&mut self) -> Step<I::Item> {
        match self.items.next() {
            Some(item) => {
                self.position += 1;
                Step::Yield(item)
            }
            None => Step::Done,
        }
    }

    pub fn has_next(&mut self) -> bool {
        self.items.peek().is_some()
    }

    /// Number of elements handed out so far.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<I: Iterator> std::fmt::Debug for Cursor<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

impl<I: Iterator> Iterator for Cursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.next_step().value()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Cursor<I> {}

impl<I: Iterator> FusedIterator for Cursor<I> {}

pub fn demo() -> Vec<String> {
    let mut cursor = Cursor::new(vec!["red", "green", "blue"]);
    let mut lines = Vec::new();
    loop {
        let step = cursor.next_step();
        lines.push(format!("{:?} (position {})", step, cursor.position()));
        if step.is_done() {
            break;
        }
    }
    lines
}
