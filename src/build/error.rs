// Schema violations
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

//! Errors while interpreting XML according to the Doxygen schema.

use crate::diagnose::{Annotation, Diagnostic};
use std::fmt::Display;

/// Well-formed XML that does not match the Doxygen schema.
///
/// This is always fatal.
/// A violation means that the input contains something that we do not
///   understand,
///     and silently dropping it would produce documentation that is
///     missing content without anyone noticing.
///
/// Violations contain only owned values,
///   since they terminate the run and so are rarely constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    element: String,
    builder: Option<&'static str>,
    kind: ViolationKind,
}

impl SchemaViolation {
    pub fn new<S: Into<String>>(element: S, kind: ViolationKind) -> Self {
        Self {
            element: element.into(),
            builder: None,
            kind,
        }
    }

    /// Record the builder that rejected the element.
    ///
    /// If a builder has already been recorded,
    ///   it is retained,
    ///     since the innermost builder is the one that actually
    ///     understood the problem.
    pub fn rejected_by(mut self, builder: &'static str) -> Self {
        self.builder.get_or_insert(builder);
        self
    }

    /// Name of the element that was rejected.
    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn builder(&self) -> Option<&'static str> {
        self.builder
    }

    pub fn kind(&self) -> &ViolationKind {
        &self.kind
    }
}

/// What about an element violates the schema.
///
/// Each variant names the offending key
///   (attribute or child element),
///     where there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// A child element that the schema does not permit here.
    UnexpectedElement(String),
    /// An attribute that the schema does not define for this element.
    UnexpectedAttr(String),
    /// Non-whitespace character data where only elements are permitted.
    UnexpectedText(String),
    /// A required attribute is absent.
    MissingAttr(String),
    /// A required child element is absent.
    MissingElement(String),
    /// A required value is present but empty.
    EmptyValue(String),
    /// An attribute value could not be interpreted.
    InvalidAttrValue {
        attr: String,
        value: String,
        expected: &'static str,
    },
    /// A child element that may occur at most once occurred again.
    DuplicateElement(String),
    /// A variable list definition (`listitem`) with no preceding term.
    ListItemWithoutTerm,
    /// Two variable list terms (`varlistentry`) with no definition
    ///   between them.
    ConsecutiveTerms,
    /// A variable list ended with a term that has no definition.
    UnpairedTerm,
    /// The root element of a document is not the expected one.
    UnexpectedRoot { expected: &'static str },
}

impl Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ViolationKind::*;

        let ele = &self.element;

        match &self.kind {
            UnexpectedElement(name) => {
                write!(f, "unexpected element `{name}` in `{ele}`")
            }
            UnexpectedAttr(name) => {
                write!(f, "unexpected attribute `{name}` on `{ele}`")
            }
            UnexpectedText(text) => {
                write!(f, "unexpected text `{text}` in `{ele}`")
            }
            MissingAttr(name) => {
                write!(f, "missing required attribute `{name}` on `{ele}`")
            }
            MissingElement(name) => {
                write!(f, "missing required element `{name}` in `{ele}`")
            }
            EmptyValue(name) => {
                write!(f, "required value `{name}` of `{ele}` is empty")
            }
            InvalidAttrValue { attr, value, .. } => {
                write!(f, "invalid value `{value}` for `{ele}/@{attr}`")
            }
            DuplicateElement(name) => {
                write!(f, "element `{name}` may occur only once in `{ele}`")
            }
            ListItemWithoutTerm => {
                write!(f, "`listitem` without a term in `{ele}`")
            }
            ConsecutiveTerms => {
                write!(f, "consecutive `varlistentry` elements in `{ele}`")
            }
            UnpairedTerm => {
                write!(f, "`varlistentry` without a definition in `{ele}`")
            }
            UnexpectedRoot { expected } => {
                write!(f, "expected root element `{expected}`, found `{ele}`")
            }
        }
    }
}

impl std::error::Error for SchemaViolation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Diagnostic for SchemaViolation {
    fn describe(&self) -> Vec<Annotation> {
        use ViolationKind::*;

        let mut desc = Vec::new();

        if let Some(builder) = self.builder {
            desc.push(Annotation::note(format!("rejected by the {builder}")));
        }

        match &self.kind {
            InvalidAttrValue { expected, .. } => {
                desc.push(Annotation::help(format!("expected {expected}")))
            }
            ListItemWithoutTerm | ConsecutiveTerms | UnpairedTerm => desc.push(
                Annotation::help(
                    "each `varlistentry` must be immediately followed by \
                       its `listitem`",
                ),
            ),
            UnexpectedElement(_) | UnexpectedAttr(_) => desc.push(
                Annotation::help(
                    "this Doxygen output may be from an unsupported version",
                ),
            ),
            _ => (),
        }

        desc
    }
}
