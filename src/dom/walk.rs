// Generic node tree traversal
//
//  Copyright (C) 2014-2021 Ryan Specialty Group, LLC.
//
//  This file is part of doxymd.
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Depth-first traversal of a [`Node`] tree.
//!
//! This is used by passes that need to find particular nodes anywhere
//!   within a compound without knowing the structure of the schema
//!     (e.g. anchor indexing in [`crate::resolve`]).
//! Traversal is pre-order and follows document order.

use super::{Child, Node};

/// Whether traversal should descend into the children of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Continue,
    SkipChildren,
}

/// Receiver of traversal events.
pub trait Visitor<'a> {
    /// Invoked before any children of `node` are visited.
    fn enter(&mut self, node: &'a Node) -> Walk;

    /// Invoked after all children of `node` have been visited,
    ///   including when they were skipped.
    fn leave(&mut self, _node: &'a Node) {}

    /// Invoked for each piece of character data.
    fn text(&mut self, _text: &'a str) {}
}

/// Visit `node` and all of its descendants.
///
/// Doxygen nests descriptions only a few dozen levels deep at most,
///   so traversal is recursive.
pub fn walk<'a, V: Visitor<'a>>(node: &'a Node, visitor: &mut V) {
    if visitor.enter(node) == Walk::Continue {
        for child in node.children() {
            match child {
                Child::Node(child) => walk(child, visitor),
                Child::Text(text) => visitor.text(text),
            }
        }
    }

    visitor.leave(node);
}
