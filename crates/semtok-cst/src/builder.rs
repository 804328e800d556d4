// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Cursor-based construction of trees from source text.
//!
//! [`TreeBuilder`] locates each identifier in the source as it is requested
//! and assigns [`NodeId`]s in request order. Requests must be made in source
//! order: the cursor only moves forward, so repeated identifiers (like two
//! uses of `x`) each get their own, distinct position.
//!
//! Offsets are character offsets, matching [`Name::start`].
//!
//! ```
//! use semtok_cst::builder::TreeBuilder;
//!
//! let mut b = TreeBuilder::new("x = x + 1");
//! let first = b.name("x");
//! let second = b.name("x");
//! assert_eq!((first.start, second.start), (0, 4));
//! assert_ne!(first.id, second.id);
//! ```

use crate::nodes::{Constant, DottedName, Name, NodeId, NodeIdGenerator, Span};

/// Builds tree nodes whose positions are found in a source string.
pub struct TreeBuilder<'src> {
    /// The original source text
    source: &'src str,
    /// Generator for assigning NodeIds
    id_gen: NodeIdGenerator,
    /// Current search cursor position in the source (bytes)
    cursor: usize,
}

impl<'src> TreeBuilder<'src> {
    pub fn new(source: &'src str) -> Self {
        TreeBuilder {
            source,
            id_gen: NodeIdGenerator::new(),
            cursor: 0,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Next identifier occurrence of `text`, as a [`Name`] with a fresh id.
    ///
    /// # Panics
    ///
    /// Panics if `text` does not occur as a whole word after the cursor.
    pub fn name(&mut self, text: &str) -> Name {
        let start = self.advance_word(text);
        Name::new(self.id_gen.next_id(), text, start)
    }

    /// A dotted path such as `os.path`, one [`Name`] per segment.
    ///
    /// # Panics
    ///
    /// Panics if a segment cannot be found.
    pub fn dotted(&mut self, text: &str) -> DottedName {
        DottedName::new(text.split('.').map(|part| self.name(part)).collect())
    }

    /// Character offset of the next whole-word occurrence of a keyword.
    ///
    /// # Panics
    ///
    /// Panics if the keyword cannot be found.
    pub fn keyword(&mut self, text: &str) -> u32 {
        self.advance_word(text)
    }

    /// A literal spanning the next occurrence of `text`.
    ///
    /// # Panics
    ///
    /// Panics if `text` cannot be found.
    pub fn constant(&mut self, text: &str) -> Constant {
        let byte_start = match self.find_from_cursor(text, false) {
            Some(offset) => offset,
            None => panic!("literal {:?} not found after offset {}", text, self.cursor),
        };
        self.cursor = byte_start + text.len();
        let start = self.char_offset(byte_start);
        Constant {
            span: Span::new(start, start + text.chars().count() as u32),
        }
    }

    /// Number of ids handed out so far.
    pub fn node_count(&self) -> u32 {
        self.id_gen.count()
    }

    /// Skip an id, e.g. to leave room for a node the test does not build.
    pub fn skip_id(&mut self) -> NodeId {
        self.id_gen.next_id()
    }

    fn advance_word(&mut self, text: &str) -> u32 {
        let byte_start = match self.find_from_cursor(text, true) {
            Some(offset) => offset,
            None => panic!("identifier {:?} not found after offset {}", text, self.cursor),
        };
        self.cursor = byte_start + text.len();
        self.char_offset(byte_start)
    }

    /// Find `needle` at or after the cursor. With `whole_word`, matches that
    /// are part of a longer identifier are skipped.
    fn find_from_cursor(&self, needle: &str, whole_word: bool) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        let mut from = self.cursor;
        while let Some(offset) = self.source[from..].find(needle) {
            let start = from + offset;
            let end = start + needle.len();
            if !whole_word || self.is_word_boundary(start, end) {
                return Some(start);
            }
            from = end;
        }
        None
    }

    fn is_word_boundary(&self, start: usize, end: usize) -> bool {
        let before = self.source[..start].chars().next_back();
        let after = self.source[end..].chars().next();
        !before.is_some_and(is_identifier_char) && !after.is_some_and(is_identifier_char)
    }

    fn char_offset(&self, byte_offset: usize) -> u32 {
        self.source[..byte_offset].chars().count() as u32
    }
}

fn is_identifier_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}
