// Generic XML element tree
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

//! Generic XML element tree.
//!
//! This is the untyped representation of an XML document:
//!   elements with attributes and an ordered list of children,
//!     each of which is either another element or character data.
//! It knows nothing about Doxygen;
//!   the schema is interpreted by [`crate::build`],
//!     which reads these trees through the accessors in [`access`].
//!
//! Trees are produced by [`parse_str`] or [`parse_reader`],
//!   which use [`quick_xml`] to tokenize the input.
//! Character data is stored exactly as it appears after unescaping,
//!   including whitespace;
//!     it is up to the accessors to decide what whitespace means.
//!
//! The entire document is held in memory.
//! Doxygen writes one file per compound,
//!   so even very large projects produce documents that are individually
//!   small.

pub mod access;
mod reader;

pub use reader::{parse_reader, parse_str, XmlError};

/// An XML element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attrs: Vec<Attr>,
    children: Vec<XmlNode>,
}

impl Element {
    /// New element with no attributes or children.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute,
    ///   consuming and returning `self`.
    ///
    /// This is intended for constructing trees by hand,
    ///   primarily in tests.
    pub fn with_attr<K: Into<String>, V: Into<String>>(
        mut self,
        name: K,
        value: V,
    ) -> Self {
        self.attrs.push(Attr::new(name, value));
        self
    }

    /// Append a child element,
    ///   consuming and returning `self`.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// Append character data,
    ///   consuming and returning `self`.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.push_text(text);
        self
    }

    /// Append character data,
    ///   merging with any immediately preceding character data.
    ///
    /// XML may split character data across multiple events
    ///   (e.g. text adjacent to a CDATA section);
    ///     merging ensures that text is never fragmented in the tree.
    pub fn push_text<S: Into<String>>(&mut self, text: S) {
        let text = text.into();

        match self.children.last_mut() {
            Some(XmlNode::Text(prev)) => prev.push_str(&text),
            _ => self.children.push(XmlNode::Text(text)),
        }
    }

    pub fn push_attr(&mut self, attr: Attr) {
        self.attrs.push(attr);
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(XmlNode::Element(child));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in document order.
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    /// All children in document order,
    ///   including whitespace-only character data.
    ///
    /// See [`Element::inner_elements`] for the filtered view used by
    ///   builders.
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }
}

/// An attribute and its unescaped value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    name: String,
    value: String,
}

impl Attr {
    pub fn new<K: Into<String>, V: Into<String>>(name: K, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(Element),
    Text(String),
}

impl XmlNode {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(ele) => Some(ele),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Element(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Whether this node is character data consisting entirely of
    ///   whitespace.
    ///
    /// Such text is produced by Doxygen's indentation of its output and
    ///   carries no meaning.
    pub fn is_whitespace(&self) -> bool {
        match self {
            Self::Element(_) => false,
            Self::Text(text) => text.chars().all(char::is_whitespace),
        }
    }
}

#[cfg(test)]
mod test;
