// Typed Doxygen node tree
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

//! Typed representation of Doxygen XML.
//!
//! Every element that the builders of [`crate::build`] accept becomes a
//!   [`Node`].
//! A node has three parts:
//!
//!   - Its [`NodeKind`],
//!       a closed tag naming the schema element;
//!   - Its children,
//!       an ordered mix of nested nodes and character data
//!         (see [`Child`]);
//!       and
//!   - Its [`NodeData`],
//!       holding the typed values of the element's attributes and of any
//!       children that the schema gives special meaning.
//!
//! Children are kept in full even when they are also reflected in
//!   [`NodeData`],
//!     so that a renderer walking the children sees every piece of
//!     content in document order.
//! Such "hoisted" children are referenced from [`NodeData`] by their
//!   index into the node's children
//!     (see [`Node::hoisted`])
//!   rather than duplicated.
//!
//! Nodes are immutable once built,
//!   with the sole exception of the [`skip_paragraph`](Node::skip_paragraph)
//!   rendering hint,
//!     which renderers may set on nodes they hold only shared references
//!     to.

mod data;
mod kind;
mod walk;

pub use data::*;
pub use kind::{entity, NodeKind, ENTITIES};
pub use walk::{walk, Visitor, Walk};

use std::cell::Cell;

/// A node of the typed tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    children: Vec<Child>,
    data: NodeData,
    skip_paragraph: Cell<bool>,
}

impl Node {
    pub fn new(kind: NodeKind, children: Vec<Child>, data: NodeData) -> Self {
        Self {
            kind,
            children,
            data,
            skip_paragraph: Cell::new(false),
        }
    }

    /// Node with neither children nor data.
    pub fn empty(kind: NodeKind) -> Self {
        Self::new(kind, Vec::new(), NodeData::None)
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Name of the schema element that produced this node.
    ///
    /// This is the tag for all but synthetic nodes;
    ///   character entities report their own tag
    ///     (e.g. `copy`).
    pub fn element_name(&self) -> &str {
        match &self.data {
            NodeData::Entity { name, .. } => name,
            _ => self.kind.tag(),
        }
    }

    /// Children in document order.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn data(&self) -> &NodeData {
        &self.data
    }

    /// Child nodes only,
    ///   skipping character data.
    pub fn child_nodes(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(Child::as_node)
    }

    /// Child nodes of the given kind.
    pub fn children_of(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.child_nodes().filter(move |node| node.kind == kind)
    }

    /// First child node of the given kind.
    pub fn first_of(&self, kind: NodeKind) -> Option<&Node> {
        self.children_of(kind).next()
    }

    /// Child node at `index` of [`Node::children`].
    pub fn child_at(&self, index: usize) -> Option<&Node> {
        self.children.get(index).and_then(Child::as_node)
    }

    /// Resolve a hoisted child index held by [`NodeData`].
    pub fn hoisted(&self, index: Option<usize>) -> Option<&Node> {
        index.and_then(|i| self.child_at(i))
    }

    /// Character data of this node and all of its descendants,
    ///   concatenated in document order.
    ///
    /// Only literal text is included;
    ///   see [`crate::render::plain_text`] for a rendering that also
    ///     accounts for entities and spacing elements.
    pub fn text(&self) -> String {
        let mut dest = String::new();
        self.text_into(&mut dest);
        dest
    }

    fn text_into(&self, dest: &mut String) {
        for child in &self.children {
            match child {
                Child::Text(text) => dest.push_str(text),
                Child::Node(node) => node.text_into(dest),
            }
        }
    }

    /// Whether a renderer has asked that this node not be wrapped in a
    ///   paragraph.
    pub fn skip_paragraph(&self) -> bool {
        self.skip_paragraph.get()
    }

    /// Set the [`skip_paragraph`](Node::skip_paragraph) rendering hint.
    ///
    /// This is the only mutation permitted after a node is built,
    ///   and so takes `&self`.
    pub fn set_skip_paragraph(&self, skip: bool) {
        self.skip_paragraph.set(skip)
    }

    pub fn as_compound(&self) -> Option<&CompoundDef> {
        match &self.data {
            NodeData::Compound(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_member(&self) -> Option<&MemberDef> {
        match &self.data {
            NodeData::Member(def) => Some(def),
            _ => None,
        }
    }
}

/// Child of a [`Node`]:
///   either a nested node or character data.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Text(String),
    Node(Node),
}

impl Child {
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Node(_) => None,
        }
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

#[cfg(test)]
mod test;
