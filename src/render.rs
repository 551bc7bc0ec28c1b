// Renderer dispatch
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

//! Dispatch of nodes to rendering functions.
//!
//! Renderers are not part of this crate.
//! A renderer registers one function per [`NodeKind`] that it knows how
//!   to render with a [`Dispatch`] table,
//!     and hands the table a node;
//!   the table looks up the function for the node's kind and calls it,
//!     falling back to rendering the node's children for any kind that
//!     was not registered.
//! Rendering functions receive the table itself so that they may recurse
//!   into children without knowing the kinds they will find there.
//!
//! [`plain_text`] is the one renderer provided here.
//! It produces the text of a node with character entities and spacing
//!   elements expanded,
//!     which is what is wanted for labels and titles.

use crate::dom::{Child, Node, NodeData, NodeKind};
use fxhash::FxHashMap;
use std::fmt::{self, Write};

/// Function rendering a single node into `W`.
pub type RenderFn<W> = fn(&Dispatch<W>, &Node, &mut W) -> fmt::Result;

/// Table of rendering functions keyed by [`NodeKind`].
pub struct Dispatch<W> {
    table: FxHashMap<NodeKind, RenderFn<W>>,
    fallback: RenderFn<W>,
}

impl<W: Write> Dispatch<W> {
    /// Empty table whose fallback renders children.
    pub fn new() -> Self {
        Self {
            table: Default::default(),
            fallback: children,
        }
    }

    /// Register `f` to render nodes of `kind`,
    ///   returning the function previously registered for that kind.
    pub fn register(
        &mut self,
        kind: NodeKind,
        f: RenderFn<W>,
    ) -> Option<RenderFn<W>> {
        self.table.insert(kind, f)
    }

    /// Builder form of [`Dispatch::register`].
    pub fn with(mut self, kind: NodeKind, f: RenderFn<W>) -> Self {
        self.register(kind, f);
        self
    }

    /// Replace the function used for unregistered kinds.
    pub fn with_fallback(mut self, f: RenderFn<W>) -> Self {
        self.fallback = f;
        self
    }

    pub fn is_registered(&self, kind: NodeKind) -> bool {
        self.table.contains_key(&kind)
    }

    /// Function that will render nodes of `kind`.
    pub fn handler(&self, kind: NodeKind) -> RenderFn<W> {
        self.table.get(&kind).copied().unwrap_or(self.fallback)
    }

    /// Render `node` using the function registered for its kind.
    pub fn render(&self, node: &Node, dest: &mut W) -> fmt::Result {
        self.handler(node.kind())(self, node, dest)
    }

    /// Render each child of `node` in order,
    ///   writing character data verbatim.
    pub fn render_children(&self, node: &Node, dest: &mut W) -> fmt::Result {
        node.children().iter().try_for_each(|child| match child {
            Child::Text(text) => dest.write_str(text),
            Child::Node(node) => self.render(node, dest),
        })
    }
}

impl<W: Write> Default for Dispatch<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> fmt::Debug for Dispatch<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.table.keys().collect();
        kinds.sort();

        f.debug_struct("Dispatch").field("kinds", &kinds).finish()
    }
}

/// Render the children of `node`;
///   the default fallback of [`Dispatch`].
pub fn children<W: Write>(
    dispatch: &Dispatch<W>,
    node: &Node,
    dest: &mut W,
) -> fmt::Result {
    dispatch.render_children(node, dest)
}

/// Render nothing at all.
pub fn omit<W: Write>(_: &Dispatch<W>, _: &Node, _: &mut W) -> fmt::Result {
    Ok(())
}

/// Dispatch table producing plain text.
pub fn plain<W: Write>() -> Dispatch<W> {
    Dispatch::new()
        .with(NodeKind::Entity, entity)
        .with(NodeKind::Sp, sp)
        .with(NodeKind::Linebreak, linebreak)
}

/// Text of `node` with entities and spacing expanded.
pub fn plain_text(node: &Node) -> String {
    let mut dest = String::new();

    // Writing to a `String` does not fail.
    let _ = plain().render(node, &mut dest);
    dest
}

fn entity<W: Write>(
    _: &Dispatch<W>,
    node: &Node,
    dest: &mut W,
) -> fmt::Result {
    match node.data() {
        NodeData::Entity { text, .. } => dest.write_str(text),
        _ => Ok(()),
    }
}

fn sp<W: Write>(_: &Dispatch<W>, node: &Node, dest: &mut W) -> fmt::Result {
    let count = match node.data() {
        NodeData::Sp { count } => *count,
        _ => 1,
    };

    (0..count).try_for_each(|_| dest.write_char(' '))
}

fn linebreak<W: Write>(
    _: &Dispatch<W>,
    _: &Node,
    dest: &mut W,
) -> fmt::Result {
    dest.write_char('\n')
}

#[cfg(test)]
mod test;
