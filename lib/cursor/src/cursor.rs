use std::{
    fmt::{Debug, Formatter},
    str::Chars,
};

mod source_range;
pub use source_range::*;

#[derive(Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    chars: Chars<'a>,
    col: Col,
}

impl<'a> Debug for Cursor<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Printing the whole source is usually too verbose, so by default
        // we only print the column
        if f.alternate() {
            f.debug_struct("Cursor")
                .field("col", &self.col())
                .field("source", &self.source)
                .finish()
        } else {
            f.debug_struct("Cursor").field("col", &self.col()).finish()
        }
    }
}

impl<'a> PartialEq for Cursor<'a> {
    fn eq(&self, other: &Self) -> bool {
        (self.source, self.chars.as_str()) == (other.source, other.chars.as_str())
    }
}

/// 1-based column, counted in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, derive_more::Display, derive_more::From)]
pub struct Col(pub usize);

impl Col {
    /// Column just past the last char of `source`, where a missing token would have to start.
    pub fn end_of(source: &str) -> Self {
        Col(source.chars().count() + 1)
    }
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, chars: source.chars(), col: Col(1) }
    }

    fn offset(&self) -> usize {
        self.source.len() - self.chars.as_str().len()
    }

    pub fn col(&self) -> Col {
        self.col
    }

    pub fn is_at_end(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    pub fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().map_or(false, &predicate) {
            self.next();
        }
    }

    pub fn slice_until(&self, end: &Cursor<'a>) -> &'a str {
        assert!(self.source == end.source);
        &self.source[self.offset()..end.offset()]
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next();
        if c.is_some() {
            self.col.0 += 1;
        }
        c
    }
}
