// Typed accessors over XML elements
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

//! Typed accessors over [`Element`]s.
//!
//! Builders never inspect an [`Element`]'s raw children or attributes;
//!   they go through these accessors,
//!     which encode two conventions of Doxygen output:
//!
//!   - Whitespace-only character data is indentation and is never
//!       content
//!         (see [`Element::inner_elements`]); and
//!   - Boolean attributes are spelled `yes` and `no`
//!       (see [`parse_bool`]).
//!
//! Accessors that can fail produce a [`SchemaViolation`] naming the
//!   element and the offending attribute or child.
//! They do not know which builder invoked them;
//!   builders attach that with [`SchemaViolation::rejected_by`].

use super::{Element, XmlNode};
use crate::build::{SchemaViolation, ViolationKind};
use std::str::FromStr;

impl Element {
    /// Whether the element has any attributes at all.
    pub fn has_attributes(&self) -> bool {
        !self.attrs.is_empty()
    }

    /// Names of all attributes in document order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attrs.iter().map(|attr| attr.name())
    }

    /// Value of the attribute `name`,
    ///   if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|attr| attr.name() == name)
            .map(|attr| attr.value())
    }

    /// Value of the required attribute `name`.
    pub fn string_attr(&self, name: &str) -> Result<&str, SchemaViolation> {
        self.attr(name).ok_or_else(|| {
            self.violation(ViolationKind::MissingAttr(name.into()))
        })
    }

    /// Value of the required attribute `name` parsed as a number.
    pub fn number_attr<T: FromStr>(
        &self,
        name: &str,
    ) -> Result<T, SchemaViolation> {
        let value = self.string_attr(name)?;

        value.trim().parse().map_err(|_| {
            self.violation(ViolationKind::InvalidAttrValue {
                attr: name.into(),
                value: value.into(),
                expected: "a number",
            })
        })
    }

    /// Value of the required attribute `name` parsed as a boolean.
    ///
    /// See [`parse_bool`] for accepted values.
    pub fn bool_attr(&self, name: &str) -> Result<bool, SchemaViolation> {
        let value = self.string_attr(name)?;

        parse_bool(value).ok_or_else(|| {
            self.violation(ViolationKind::InvalidAttrValue {
                attr: name.into(),
                value: value.into(),
                expected: "`yes` or `no`",
            })
        })
    }

    /// Children that carry meaning,
    ///   in document order.
    ///
    /// This excludes character data consisting only of whitespace,
    ///   which Doxygen emits as indentation between elements.
    pub fn inner_elements(&self) -> impl Iterator<Item = &XmlNode> {
        self.children.iter().filter(|node| !node.is_whitespace())
    }

    /// Child elements only,
    ///   in document order.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    /// Whether the element contains character data other than
    ///   whitespace.
    ///
    /// This distinguishes elements whose text _is_ their content from
    ///   those that merely contain indentation.
    pub fn has_inner_text(&self) -> bool {
        self.inner_elements()
            .any(|node| matches!(node, XmlNode::Text(_)))
    }

    /// Concatenation of the element's own character data,
    ///   ignoring child elements.
    pub fn text(&self) -> String {
        self.children.iter().filter_map(XmlNode::as_text).collect()
    }

    /// Whether a child element `tag` exists.
    pub fn has_inner_element(&self, tag: &str) -> bool {
        self.first_child(tag).is_some()
    }

    /// First child element named `tag`.
    pub fn first_child(&self, tag: &str) -> Option<&Element> {
        self.child_elements().find(|ele| ele.name() == tag)
    }

    /// Whether a child element `tag` exists and contains nothing but
    ///   character data.
    pub fn is_inner_element_text(&self, tag: &str) -> bool {
        self.first_child(tag)
            .map(|child| child.child_elements().next().is_none())
            .unwrap_or(false)
    }

    /// Character data of the text-only child element `tag`.
    ///
    /// This is intended for schema elements that are defined to hold only
    ///   a string,
    ///     such as `<name>` and `<scope>`.
    pub fn inner_element_text(
        &self,
        tag: &str,
    ) -> Result<String, SchemaViolation> {
        let child = self.first_child(tag).ok_or_else(|| {
            self.violation(ViolationKind::MissingElement(tag.into()))
        })?;

        match child.child_elements().next() {
            None => Ok(child.text()),
            Some(unexpected) => Err(child.violation(
                ViolationKind::UnexpectedElement(unexpected.name().into()),
            )),
        }
    }

    /// Produce a [`SchemaViolation`] for this element.
    pub fn violation(&self, kind: ViolationKind) -> SchemaViolation {
        SchemaViolation::new(self.name(), kind)
    }
}

/// Parse a Doxygen boolean attribute value.
///
/// Doxygen writes `yes` and `no`;
///   `true` and `false` are also accepted since a handful of
///   attributes in older schema versions used them.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "yes" | "true" => Some(true),
        "no" | "false" => Some(false),
        _ => None,
    }
}
