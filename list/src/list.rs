use std::fmt;
use std::io::{self, Write};

use log::{debug, info};

use crate::source::ValueSource;

/// Text emitted after the last value of a rendered list.
pub const TERMINATOR: &str = "\nFinished.\n";

type Link = Option<Box<Node>>;

struct Node {
    value: i32,
    next: Link,
}

impl Node {
    fn new(value: i32, next: Link) -> Node {
        Node { value, next }
    }

    fn sentinel() -> Node {
        Node::new(0, None)
    }
}

/// Singly linked list whose head is a sentinel node carrying no data.
///
/// Data nodes hang off the sentinel's `next` link. New nodes are always
/// linked in right after the sentinel, so traversal yields values in the
/// reverse of insertion order.
pub struct List {
    head: Box<Node>,
    len: usize,
}

impl List {
    /// Creates the sentinel with no successor.
    pub fn new() -> List {
        List {
            head: Box::new(Node::sentinel()),
            len: 0,
        }
    }

    /// Links `value` in directly after the sentinel.
    pub fn push_after_head(&mut self, value: i32) {
        let node = Box::new(Node::new(value, self.head.next.take()));
        self.head.next = Some(node);
        self.len += 1;
    }

    /// Draws `count` values from `source`, pushing each one after the sentinel.
    pub fn insert_random<S: ValueSource + ?Sized>(&mut self, source: &mut S, count: usize) {
        for i in 0..count {
            let value = source.next_value();
            debug!("insertion {}/{}: value {}", i + 1, count, value);
            self.push_after_head(value);
        }
        info!("inserted {} node(s), list now holds {}", count, self.len);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates the data values, sentinel excluded.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.next.as_deref(),
        }
    }

    /// Each value followed by a space, then [`TERMINATOR`].
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{} ", value)?;
        }
        f.write_str(TERMINATOR)
    }
}

impl Drop for List {
    // Unlink node by node; the default drop would recurse once per node.
    fn drop(&mut self) {
        let mut cur = self.head.next.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value
        })
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
