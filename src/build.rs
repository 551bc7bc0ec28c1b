// Schema-driven node builders
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

//! Interpret generic XML [`Element`]s according to the Doxygen schema.
//!
//! There is one builder per element kind,
//!   each a function from an [`Element`] to a [`Node`].
//! All builders follow the same algorithm:
//!
//!   1. Check attributes against the set the schema defines for the
//!        element,
//!          coercing the known ones into typed fields of [`NodeData`];
//!          an unknown attribute is a [`SchemaViolation`].
//!   2. Walk the element's children in document order.
//!      Character data becomes a text child;
//!        a recognized child element is passed to its own builder and
//!        the resulting node appended;
//!        any other element is a [`SchemaViolation`].
//!      Children with special meaning
//!        (titles, descriptions, locations, and the like)
//!        are additionally hoisted into [`NodeData`] by child index.
//!   3. Assert that mandatory values are present and non-empty.
//!
//! The handling of character data depends on the element's content
//!   model.
//! Elements with mixed content
//!   (paragraphs, markup, linked text)
//!   keep all of their character data verbatim,
//!     including whitespace between child elements,
//!     which is significant
//!       (`<bold>a</bold> <emphasis>b</emphasis>`).
//! Elements with element-only content discard whitespace,
//!   which Doxygen emits as indentation,
//!   and reject any other character data.
//!
//! The builders are strict:
//!   the first violation aborts the build.
//! There is no recovery;
//!   documentation built from input we do not understand cannot be
//!   trusted.
//!
//! Builders are grouped by the part of the schema they interpret:
//!
//!   - [`compound`] for `compounddef` and its structural children;
//!   - [`member`] for `sectiondef`, `memberdef`, and linked text;
//!   - [`descr`] for descriptions and their markup;
//!   - [`table`] for tables within descriptions; and
//!   - [`listing`] for program listings,
//!       including [`filter_listing`].

mod attrs;
mod compound;
mod descr;
mod error;
mod listing;
mod member;
mod table;

pub use compound::compounddef;
pub use error::{SchemaViolation, ViolationKind};
pub use listing::filter_listing;

use crate::{
    dom::{Child, Node, NodeData, NodeKind},
    xml::{Element, XmlNode},
};

pub(crate) use attrs::Attrs;

pub type BuildResult<T> = Result<T, SchemaViolation>;

/// A node under construction.
///
/// This accumulates the children of the node as its element is walked,
///   attributing any violations to the builder that owns it.
struct Scope<'e> {
    ele: &'e Element,
    kind: NodeKind,
    builder: &'static str,
    children: Vec<Child>,
}

impl<'e> Scope<'e> {
    fn new(ele: &'e Element, kind: NodeKind, builder: &'static str) -> Self {
        Self {
            ele,
            kind,
            builder,
            children: Vec::new(),
        }
    }

    /// Check the element's attributes against `known`.
    fn attrs(
        &self,
        known: &'static [&'static str],
    ) -> BuildResult<Attrs<'e>> {
        Attrs::check(self.ele, known, self.builder)
    }

    /// Walk element-only content.
    ///
    /// Whitespace is discarded and any other character data is a
    ///   violation.
    fn each_element<F>(&mut self, mut f: F) -> BuildResult<()>
    where
        F: FnMut(&mut Self, &'e Element) -> BuildResult<()>,
    {
        let ele = self.ele;

        for child in ele.inner_elements() {
            match child {
                XmlNode::Element(child) => f(self, child)?,
                XmlNode::Text(text) => {
                    return Err(self.violation(ViolationKind::UnexpectedText(
                        text.trim().into(),
                    )))
                }
            }
        }

        Ok(())
    }

    /// Walk content in which character data other than whitespace is
    ///   retained as text,
    ///     but whitespace between elements is indentation.
    fn each_inner<F>(&mut self, mut f: F) -> BuildResult<()>
    where
        F: FnMut(&mut Self, &'e Element) -> BuildResult<()>,
    {
        let ele = self.ele;

        for child in ele.inner_elements() {
            match child {
                XmlNode::Element(child) => f(self, child)?,
                XmlNode::Text(text) => self.text(text),
            }
        }

        Ok(())
    }

    /// Walk mixed content,
    ///   retaining all character data verbatim.
    fn each_mixed<F>(&mut self, mut f: F) -> BuildResult<()>
    where
        F: FnMut(&mut Self, &'e Element) -> BuildResult<()>,
    {
        let ele = self.ele;

        for child in ele.children() {
            match child {
                XmlNode::Element(child) => f(self, child)?,
                XmlNode::Text(text) => self.text(text),
            }
        }

        Ok(())
    }

    /// Require that the element contain only character data,
    ///   which is appended as a single text child and returned.
    fn text_only(&mut self) -> BuildResult<String> {
        if let Some(child) = self.ele.child_elements().next() {
            return Err(self.unexpected(child));
        }

        let text = self.ele.text();

        if !text.is_empty() {
            self.text(&text);
        }

        Ok(text)
    }

    /// Like [`Scope::text_only`],
    ///   but the text must be non-empty.
    fn required_text(&mut self) -> BuildResult<String> {
        let text = self.text_only()?;

        if text.trim().is_empty() {
            return Err(self.violation(ViolationKind::EmptyValue(
                self.ele.name().into(),
            )));
        }

        Ok(text)
    }

    /// Require that the element have no content at all.
    fn empty(&mut self) -> BuildResult<()> {
        match self.ele.inner_elements().next() {
            None => Ok(()),
            Some(XmlNode::Element(child)) => Err(self.unexpected(child)),
            Some(XmlNode::Text(text)) => Err(self.violation(
                ViolationKind::UnexpectedText(text.trim().into()),
            )),
        }
    }

    fn text(&mut self, text: &str) {
        match self.children.last_mut() {
            Some(Child::Text(prev)) => prev.push_str(text),
            _ => self.children.push(Child::Text(text.into())),
        }
    }

    /// Append a child node,
    ///   returning its index for hoisting.
    fn push(&mut self, node: Node) -> usize {
        self.children.push(Child::Node(node));
        self.children.len() - 1
    }

    /// Append a child that may occur at most once,
    ///   storing its index in `slot`.
    fn push_once(
        &mut self,
        slot: &mut Option<usize>,
        child: &Element,
        node: Node,
    ) -> BuildResult<()> {
        if slot.is_some() {
            return Err(self.violation(ViolationKind::DuplicateElement(
                child.name().into(),
            )));
        }

        slot.replace(self.push(node));
        Ok(())
    }

    fn violation(&self, kind: ViolationKind) -> SchemaViolation {
        self.ele.violation(kind).rejected_by(self.builder)
    }

    fn unexpected(&self, child: &Element) -> SchemaViolation {
        self.violation(ViolationKind::UnexpectedElement(child.name().into()))
    }

    /// Attribute a violation from a nested builder or accessor to this
    ///   builder if it has not been attributed already.
    fn attribute(&self, e: SchemaViolation) -> SchemaViolation {
        e.rejected_by(self.builder)
    }

    fn finish(self, data: NodeData) -> Node {
        Node::new(self.kind, self.children, data)
    }
}

/// Build a node whose only content is character data,
///   with no attributes.
fn text_node(ele: &Element, kind: NodeKind) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, kind, "text element builder");

    scope.attrs(&[])?;
    scope.text_only()?;

    Ok(scope.finish(NodeData::None))
}
