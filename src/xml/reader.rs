// XML reader
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

//! Parse XML into an [`Element`] tree.
//!
//! This uses [`quick_xml`] as the parser.
//! Events are folded into a stack of open elements;
//!   closing an element appends it to its parent,
//!   and closing the outermost element yields the root.
//!
//! Comments,
//!   processing instructions,
//!   the XML declaration,
//!   and doctypes carry nothing of interest and are discarded.
//! CDATA sections are character data like any other.

use super::{Attr, Element};
use crate::diagnose::{Annotation, Diagnostic};
use quick_xml::{
    events::{BytesStart, Event as QuickXmlEvent},
    Error as QuickXmlError, Reader,
};
use std::{fmt::Display, io::BufRead, str::Utf8Error};

pub type Result<T> = std::result::Result<T, XmlError>;

/// Parse an XML document held in memory.
pub fn parse_str(src: &str) -> Result<Element> {
    parse_reader(src.as_bytes())
}

/// Parse an XML document from a buffered source,
///   producing its root element.
///
/// The entire document is read;
///   content following the root element other than whitespace,
///     comments,
///     and processing instructions
///   is an error.
pub fn parse_reader<B: BufRead>(src: B) -> Result<Element> {
    let mut reader = Reader::from_reader(src);
    let mut buf = Vec::new();

    // Elements opened but not yet closed,
    //   innermost last.
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        buf.clear();

        match reader.read_event_into(&mut buf)? {
            QuickXmlEvent::Start(start) => stack.push(open(&start)?),

            QuickXmlEvent::Empty(start) => {
                let ele = open(&start)?;
                close(ele, &mut stack, &mut root)?;
            }

            QuickXmlEvent::End(_) => {
                // quick-xml has already verified that the end tag matches
                //   the open tag.
                let ele = stack.pop().ok_or(XmlError::UnbalancedClose)?;
                close(ele, &mut stack, &mut root)?;
            }

            QuickXmlEvent::Text(text) => {
                let text = text.unescape()?;
                push_text(&text, &mut stack)?;
            }

            QuickXmlEvent::CData(cdata) => {
                let text = std::str::from_utf8(&cdata)?;
                push_text(text, &mut stack)?;
            }

            QuickXmlEvent::Eof => break,

            // Comments, declarations, and processing instructions.
            _ => (),
        }
    }

    match (stack.pop(), root) {
        (Some(open), _) => Err(XmlError::UnclosedElement(open.name)),
        (None, Some(root)) => Ok(root),
        (None, None) => Err(XmlError::NoRoot),
    }
}

/// Produce an [`Element`] from an opening tag,
///   including its attributes.
fn open(start: &BytesStart) -> Result<Element> {
    let mut ele = Element::new(std::str::from_utf8(start.name().as_ref())?);

    for attr in start.attributes() {
        let attr = attr.map_err(QuickXmlError::from)?;
        let name = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;

        ele.push_attr(Attr::new(name, value));
    }

    Ok(ele)
}

/// Append a completed element to its parent,
///   or make it the root if there is no parent.
fn close(
    ele: Element,
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.push_child(ele);
            Ok(())
        }
        None if root.is_some() => Err(XmlError::MultipleRoots(ele.name)),
        None => {
            root.replace(ele);
            Ok(())
        }
    }
}

/// Append character data to the innermost open element.
///
/// Whitespace outside of the root element is permitted and discarded.
fn push_text(text: &str, stack: &mut [Element]) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.push_text(text);
            Ok(())
        }
        None if text.chars().all(char::is_whitespace) => Ok(()),
        None => Err(XmlError::TextOutsideRoot(text.trim().into())),
    }
}

/// Error while reading XML.
///
/// These errors indicate that the input is not well-formed XML at all,
///   as opposed to a
///   [`SchemaViolation`](crate::build::SchemaViolation),
///     which indicates well-formed XML that does not match the Doxygen
///     schema.
#[derive(Debug)]
pub enum XmlError {
    /// Error from the underlying tokenizer.
    Xml(QuickXmlError),
    /// Element or attribute name is not valid UTF-8.
    Utf8(Utf8Error),
    /// The document contains no root element.
    NoRoot,
    /// A second root element was found after the first was closed.
    MultipleRoots(String),
    /// Input ended before an element was closed.
    UnclosedElement(String),
    /// A closing tag was found with no open element.
    UnbalancedClose,
    /// Non-whitespace character data outside of the root element.
    TextOutsideRoot(String),
}

impl From<QuickXmlError> for XmlError {
    fn from(e: QuickXmlError) -> Self {
        Self::Xml(e)
    }
}

impl From<Utf8Error> for XmlError {
    fn from(e: Utf8Error) -> Self {
        Self::Utf8(e)
    }
}

impl Display for XmlError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Xml(e) => Display::fmt(e, f),
            Self::Utf8(e) => Display::fmt(e, f),
            Self::NoRoot => write!(f, "document has no root element"),
            Self::MultipleRoots(name) => {
                write!(f, "unexpected second root element `{name}`")
            }
            Self::UnclosedElement(name) => {
                write!(f, "unexpected end of input inside `{name}`")
            }
            Self::UnbalancedClose => write!(f, "unbalanced closing tag"),
            Self::TextOutsideRoot(text) => {
                write!(f, "unexpected text `{text}` outside of root element")
            }
        }
    }
}

impl std::error::Error for XmlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Xml(e) => Some(e),
            Self::Utf8(e) => Some(e),
            _ => None,
        }
    }
}

impl Diagnostic for XmlError {
    fn describe(&self) -> Vec<Annotation> {
        Annotation::help(
            "this file is not well-formed XML; \
               try regenerating the Doxygen output",
        )
        .into()
    }
}
